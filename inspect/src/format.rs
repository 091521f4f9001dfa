// Distributed under The MIT License (MIT)
//! Renders decoded channel values as one annotated line.
use core::fmt::Write as _;

use texel_buffer::BitCursor;

use crate::layout::{Channel, ChannelDataType, ChannelSemantic, TexelLayout};
use crate::value::{decode_channel, ChannelValue};

/// The fixed color tag of a channel semantic.
///
/// Red, Green, Blue and Opacity each carry their own tag; every other
/// semantic shares the "other" tag. A pure lookup, there is no tag state.
pub fn color_tag(semantic: ChannelSemantic) -> &'static str {
    use ChannelSemantic::*;

    match semantic {
        Red => "<textcolor=#ff1c21>",
        Green => "<textcolor=#00ff00>",
        Blue => "<textcolor=#006dff>",
        Opacity => "<textcolor=#ffffff>",
        Monochrome | Float | None => "<textcolor=#ff8930>",
    }
}

/// Formats one texel's channel values into display text.
///
/// The output is a sequence of space-separated segments in channel order,
/// `<tag>[(signed)]<Name>[(width)]:<value>`, without a trailing space.
/// Channels with semantic [`ChannelSemantic::None`] contribute no segment
/// but still occupy their bits. Channels without a decode rule keep their
/// label and render an empty value, or the literal `N/A` where the rule is
/// known to be missing.
///
/// The formatter holds no mutable state; formatting is pure and safe to
/// invoke concurrently over the same layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexelFormatter {
    /// Digits after the decimal point for float channels. The value column
    /// is `precision + 4` wide.
    pub precision: usize,
}

impl Default for TexelFormatter {
    fn default() -> Self {
        TexelFormatter { precision: 6 }
    }
}

/// Decode one texel with the default formatter settings.
pub fn format_texel(bytes: &[u8], layout: &TexelLayout) -> String {
    TexelFormatter::default().format_texel(bytes, layout)
}

impl TexelFormatter {
    /// Decode and annotate every channel of the texel in `bytes`.
    ///
    /// `bytes` are the texel's raw bytes, at least
    /// [`TexelLayout::byte_size`] of them for every channel to decode; a
    /// shorter slice degrades to empty values, never to an out-of-range
    /// read. Returns the empty string when no channel produced text.
    ///
    /// # Panics
    ///
    /// Panics when an emitted channel carries [`ChannelDataType::None`],
    /// which a correctly integrated codec never supplies.
    pub fn format_texel(&self, bytes: &[u8], layout: &TexelLayout) -> String {
        let mut out = String::new();
        let mut cursor = BitCursor::new(bytes);

        for channel in layout.channels() {
            let start = cursor.position();

            if channel.semantic != ChannelSemantic::None {
                self.push_segment(&mut out, &mut cursor, channel, layout.texel_size());
            }

            // Padding and decoded channels alike occupy their bits.
            cursor.seek(start + usize::from(channel.width));
        }

        if !out.is_empty() {
            out.pop();
        }
        out
    }

    fn push_segment(
        &self,
        out: &mut String,
        cursor: &mut BitCursor<'_>,
        channel: &Channel,
        texel_size: u32,
    ) {
        out.push_str(color_tag(channel.semantic));

        match channel.data_type {
            ChannelDataType::SignedInt => out.push_str("(signed)"),
            ChannelDataType::UnsignedInt | ChannelDataType::Float => {}
            ChannelDataType::None => panic!(
                "channel `{}` considered for display without a data type",
                channel.semantic.name()
            ),
        }
        out.push_str(channel.semantic.name());

        // Non-standard widths are always disambiguated, as are the
        // semantics whose width is not implied by convention.
        if channel.width != 8
            || matches!(
                channel.semantic,
                ChannelSemantic::Monochrome | ChannelSemantic::Float
            )
        {
            let _ = write!(out, "({})", channel.width);
        }
        out.push(':');

        match decode_channel(cursor, channel, texel_size) {
            ChannelValue::Unsigned(value) => {
                let _ = write!(out, "{:>1$}", value, int_column(channel.width));
            }
            ChannelValue::Signed(value) => {
                let _ = write!(out, "{:>1$}", value, int_column(channel.width));
            }
            ChannelValue::Float(value) => {
                let _ = write!(out, "{:>1$.2$}", value, self.precision + 4, self.precision);
            }
            ChannelValue::Placeholder => out.push_str("N/A"),
            ChannelValue::Unsupported => {}
        }

        out.push(' ');
    }
}

/// The column width of the decimal rendering, by channel bit width.
///
/// Integer values are right-aligned to the maximum decimal digit count of
/// their width class so columns line up while the cursor moves.
fn int_column(width: u8) -> usize {
    match width {
        5 | 6 => 2,
        8 => 3,
        16 => 5,
        24 => 8,
        32 => 10,
        64 => 20,
        _ => 0,
    }
}
