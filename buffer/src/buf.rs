// Distributed under The MIT License (MIT)
#![allow(unsafe_code)]
use alloc::vec::Vec;
use core::{fmt, mem, ops};

use thiserror::Error;

/// The guaranteed alignment of every [`AlignedBuffer`] allocation, in bytes.
pub const ALIGNMENT: usize = 16;

/// The element type backing every allocation.
///
/// Storing these instead of raw bytes is what guarantees the alignment: a
/// vector's allocation is aligned for its element type. The element contains
/// no padding and implements `Pod`, so the storage can be viewed as plain
/// bytes again without any `unsafe` at the use sites.
#[derive(Clone, Copy)]
#[repr(C, align(16))]
struct Aligned16([u8; ALIGNMENT]);

unsafe impl bytemuck::Zeroable for Aligned16 {}
unsafe impl bytemuck::Pod for Aligned16 {}

/// Error of a bounds-checked buffer access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The range `offset..offset + len` leaves the allocated region.
    #[error("access of {len} bytes at offset {offset} exceeds buffer of {size} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },
}

/// Allocates and owns raw, aligned pixel bytes.
///
/// The allocation is always aligned to [`ALIGNMENT`] so that vectorized
/// consumers may read the pixel data directly. Every byte-range operation is
/// checked against the logical length; no access past `[0, size)` is ever
/// exposed.
///
/// The buffer is move-only. It deliberately does not implement `Clone`: an
/// allocation has exactly one owner at a time, and handing it to another
/// owner is a move. Transferring ownership out of a place while leaving an
/// empty buffer behind is `core::mem::take`.
///
/// Allocation failure aborts the process, as with any other global-allocator
/// consumer. There is no partially-allocated state to recover.
#[derive(Default)]
pub struct AlignedBuffer {
    /// The backing memory.
    inner: Vec<Aligned16>,
    /// The logical length in bytes.
    ///
    /// Invariants: `len == 0` iff `inner` is empty, and `len` never exceeds
    /// `inner.len() * ALIGNMENT`.
    len: usize,
}

impl AlignedBuffer {
    const ELEMENT: Aligned16 = Aligned16([0; ALIGNMENT]);

    /// Create an empty buffer, holding no allocation.
    pub fn new() -> Self {
        AlignedBuffer::default()
    }

    /// Create a buffer with `size` zeroed bytes.
    pub fn with_size(size: usize) -> Self {
        let mut buffer = AlignedBuffer::default();
        buffer.allocate(size);
        buffer
    }

    /// Allocate `size` zeroed bytes, releasing any prior allocation.
    pub fn allocate(&mut self, size: usize) {
        // Replaces the old allocation outright, the vector frees it.
        self.inner = alloc::vec![Self::ELEMENT; Self::alloc_len(size)];
        self.len = size;
    }

    /// Release the allocation and reset to the empty state.
    ///
    /// Idempotent, freeing an empty buffer does nothing.
    pub fn free(&mut self) {
        self.inner = Vec::new();
        self.len = 0;
    }

    /// The logical length in bytes.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View the buffer contents as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(self.inner.as_slice())[..self.len]
    }

    /// View the buffer contents as a mutable byte slice.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(self.inner.as_mut_slice())[..self.len]
    }

    /// Copy `dest.len()` bytes starting at `offset` into `dest`.
    ///
    /// Fails with [`BufferError::OutOfBounds`] when the range leaves the
    /// buffer, without touching `dest`.
    pub fn read(&self, dest: &mut [u8], offset: usize) -> Result<(), BufferError> {
        let range = self.check_range(offset, dest.len())?;
        dest.copy_from_slice(&self.as_bytes()[range]);
        Ok(())
    }

    /// Copy all of `src` into the buffer starting at `offset`.
    ///
    /// Fails with [`BufferError::OutOfBounds`] when the range leaves the
    /// buffer, without modifying any contents.
    pub fn write(&mut self, src: &[u8], offset: usize) -> Result<(), BufferError> {
        let range = self.check_range(offset, src.len())?;
        self.as_bytes_mut()[range].copy_from_slice(src);
        Ok(())
    }

    fn check_range(&self, offset: usize, len: usize) -> Result<ops::Range<usize>, BufferError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(offset..end),
            _ => Err(BufferError::OutOfBounds {
                offset,
                len,
                size: self.len,
            }),
        }
    }

    /// Number of elements needed for a byte buffer of requested length.
    fn alloc_len(length: usize) -> usize {
        length.div_ceil(mem::size_of::<Aligned16>())
    }
}

impl fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("size", &self.len)
            .finish()
    }
}
