// Distributed under The MIT License (MIT)
//! Defines the channel layout of a texel.
use thiserror::Error;

/// The role a channel plays within a texel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelSemantic {
    Red,
    Green,
    Blue,
    Opacity,
    /// A single intensity channel without color interpretation.
    Monochrome,
    /// A generic floating-point quantity, e.g. a depth value.
    Float,
    /// Padding bits that occupy space but carry no displayable value.
    None,
}

/// The numeric interpretation of a channel's bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelDataType {
    UnsignedInt,
    SignedInt,
    Float,
    /// Unset. Invalid for any channel considered for display; reaching it
    /// during decode is a contract violation of the supplied layout.
    None,
}

/// One named, typed, fixed-width sub-field within a texel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channel {
    pub semantic: ChannelSemantic,
    pub data_type: ChannelDataType,
    /// The width in bits, e.g. 5, 6, 8, 16, 24, 32 or 64.
    pub width: u8,
}

/// The ordered channel list making up one texel.
///
/// Channel order is the physical bit order within the texel as consumed
/// from the lowest bit position upwards; how that order relates to memory
/// is format-defined and supplied entirely by the image codec. The layout
/// is immutable for the lifetime of the image it describes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TexelLayout {
    channels: Box<[Channel]>,
    /// The total bits per texel, including padding channels.
    texel_size: u32,
}

/// An integer pixel coordinate, `x` then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TexelCoord(pub u32, pub u32);

/// Error that occurs when constructing a layout or pixel source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The channel widths do not fit the declared texel size. Accepting
    /// such a layout would make the decoder read bits of an adjacent texel.
    #[error("channels occupy {widths} bits but the texel holds only {texel_size}")]
    WidthOverflow { widths: u32, texel_size: u32 },
    /// The declared row stride cannot hold one row of texels.
    #[error("row stride of {bytes_per_row} bytes is less than one row of {row_bytes} bytes")]
    StrideTooSmall {
        bytes_per_row: usize,
        row_bytes: usize,
    },
    /// The pixel buffer does not cover the declared image extent.
    #[error("buffer of {len} bytes cannot back an image of {need} bytes")]
    BufferTooSmall { len: usize, need: usize },
    /// The image extent overflows the addressable size.
    #[error("image dimensions overflow the addressable size")]
    TooLarge,
}

impl ChannelSemantic {
    /// The display label of the semantic.
    pub fn name(self) -> &'static str {
        match self {
            ChannelSemantic::Red => "Red",
            ChannelSemantic::Green => "Green",
            ChannelSemantic::Blue => "Blue",
            ChannelSemantic::Opacity => "Opacity",
            ChannelSemantic::Monochrome => "Monochrome",
            ChannelSemantic::Float => "Float",
            ChannelSemantic::None => "None",
        }
    }
}

impl Channel {
    pub const fn new(semantic: ChannelSemantic, data_type: ChannelDataType, width: u8) -> Self {
        Channel {
            semantic,
            data_type,
            width,
        }
    }

    /// An unsigned integer channel.
    pub const fn unsigned(semantic: ChannelSemantic, width: u8) -> Self {
        Channel::new(semantic, ChannelDataType::UnsignedInt, width)
    }

    /// A signed integer channel.
    pub const fn signed(semantic: ChannelSemantic, width: u8) -> Self {
        Channel::new(semantic, ChannelDataType::SignedInt, width)
    }

    /// A floating-point channel.
    pub const fn float(semantic: ChannelSemantic, width: u8) -> Self {
        Channel::new(semantic, ChannelDataType::Float, width)
    }

    /// Padding: occupies `width` bits, displays nothing.
    pub const fn padding(width: u8) -> Self {
        Channel::new(ChannelSemantic::None, ChannelDataType::None, width)
    }
}

impl TexelLayout {
    /// Create a layout with an explicit texel size in bits.
    ///
    /// Fails when the channel widths sum to more than `texel_size`; the
    /// size may exceed the sum for formats with trailing padding that is
    /// not modeled as a channel.
    pub fn new(
        channels: impl Into<Box<[Channel]>>,
        texel_size: u32,
    ) -> Result<Self, LayoutError> {
        let channels = channels.into();
        let widths = Self::width_sum(&channels);

        if widths > texel_size {
            return Err(LayoutError::WidthOverflow { widths, texel_size });
        }

        Ok(TexelLayout {
            channels,
            texel_size,
        })
    }

    /// Create a fully packed layout, the texel size being the width sum.
    pub fn from_channels(channels: impl Into<Box<[Channel]>>) -> Self {
        let channels = channels.into();
        let texel_size = Self::width_sum(&channels);

        TexelLayout {
            channels,
            texel_size,
        }
    }

    /// The channels in physical bit order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// The number of channels, padding included.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// The total bits per texel.
    pub fn texel_size(&self) -> u32 {
        self.texel_size
    }

    /// The bytes covering one texel, i.e. the texel size rounded up.
    pub fn byte_size(&self) -> usize {
        (self.texel_size as usize).div_ceil(8)
    }

    fn width_sum(channels: &[Channel]) -> u32 {
        channels.iter().map(|ch| u32::from(ch.width)).sum()
    }
}

impl TexelCoord {
    /// Get both coordinates as a tuple.
    pub fn xy(self) -> (u32, u32) {
        (self.0, self.1)
    }
}
