// Distributed under The MIT License (MIT)
//! # Texel inspection
//!
//! Decode and annotate the exact channel values of a single texel, driven
//! entirely by a per-image channel layout instead of a dedicated decoder
//! per pixel format.
//!
//! An image codec decodes pixel data into an aligned buffer and describes
//! it once with a [`TexelLayout`]: the ordered list of [`Channel`]s (role,
//! numeric type, bit width) making up one texel. On every cursor query a
//! viewer resolves the texel's raw bytes and asks the [`TexelFormatter`]
//! for a single annotated line, one color-tagged segment per channel.
//!
//! ## Usage
//!
//! ```
//! use texel_inspect::{Channel, ChannelSemantic, TexelFormatter, TexelLayout};
//!
//! let layout = TexelLayout::from_channels(vec![
//!     Channel::unsigned(ChannelSemantic::Red, 8),
//!     Channel::unsigned(ChannelSemantic::Green, 8),
//!     Channel::unsigned(ChannelSemantic::Blue, 8),
//!     Channel::unsigned(ChannelSemantic::Opacity, 8),
//! ]);
//!
//! let line = TexelFormatter::default().format_texel(&[10, 20, 30, 40], &layout);
//! assert!(line.contains("Red: 10"));
//! assert!(line.contains("Opacity: 40"));
//! ```
//!
//! Decoding is read-only and pure: formatting the same texel twice, or from
//! many threads over the same layout, always yields the same string.

mod format;
pub mod layout;
mod source;
mod value;

pub use self::format::{color_tag, format_texel, TexelFormatter};
pub use self::layout::{
    Channel, ChannelDataType, ChannelSemantic, LayoutError, TexelCoord, TexelLayout,
};
pub use self::source::PixelSource;
pub use self::value::{decode_channel, ChannelValue};
