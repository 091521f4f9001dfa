// Distributed under The MIT License (MIT)
//! # Texel buffers
//!
//! Owned, aligned storage for raw pixel data, and a bounded bit cursor to
//! take it apart again.
//!
//! An image codec decodes into an [`AlignedBuffer`]: a contiguous byte
//! region whose allocation is guaranteed to be 16-byte aligned so that
//! vectorized consumers can read it directly. All byte-range access is
//! bounds checked, and the buffer is move-only so that an allocation never
//! has two owners.
//!
//! The [`BitCursor`] is the read side: it walks a texel's raw bytes with a
//! running bit position and refuses to produce a value once a read would
//! leave the underlying slice. Channel decoders build on it to extract
//! bit-packed sub-fields without ever reading past the texel they were
//! handed.
//!
//! ## Usage
//!
//! ```
//! use texel_buffer::AlignedBuffer;
//!
//! let mut pixels = AlignedBuffer::with_size(4);
//! pixels.write(&[10, 20, 30, 40], 0)?;
//!
//! let mut texel = [0u8; 4];
//! pixels.read(&mut texel, 0)?;
//! assert_eq!(texel, [10, 20, 30, 40]);
//! # Ok::<(), texel_buffer::BufferError>(())
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
// The only module allowed to be `unsafe` is `buf`, for the `Pod` impl of
// the aligned element type.
#![deny(unsafe_code)]
extern crate alloc;

mod bits;
mod buf;

pub use self::bits::BitCursor;
pub use self::buf::{AlignedBuffer, BufferError, ALIGNMENT};
