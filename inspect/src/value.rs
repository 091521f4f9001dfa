// Distributed under The MIT License (MIT)
//! Extraction of a single channel value from raw texel bytes.
use texel_buffer::BitCursor;

use crate::layout::{Channel, ChannelDataType};

/// The outcome of decoding one channel.
///
/// Every `(width, data type)` combination maps to exactly one of these, so
/// the combinations without a decode rule are an enumerable outcome rather
/// than a silent omission. Callers must tolerate partial output: a texel
/// may mix decoded values with unsupported channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    /// Recognized combination without a decode rule; renders a literal
    /// `N/A` so the gap stays visible.
    Placeholder,
    /// No decode rule, or the value would lie outside the texel's bytes.
    /// Renders nothing.
    Unsupported,
}

/// Decode the channel at the cursor's current bit position.
///
/// The cursor is bounded by the texel's byte span, so a layout whose
/// widths disagree with the bytes on hand degrades to
/// [`ChannelValue::Unsupported`] instead of reading adjacent memory.
/// Reads of whole-byte channels address the byte the bit position rounds
/// down into, matching how packed and byte-aligned channels mix.
///
/// Two decodes knowingly contradict their declaration and are kept that
/// way until the intended behavior is settled: 32-bit signed channels are
/// decoded as unsigned, and 64-bit unsigned channels as signed.
///
/// # Panics
///
/// Panics when the channel's data type is [`ChannelDataType::None`]; such
/// a channel must never be considered for display.
pub fn decode_channel(
    cursor: &mut BitCursor<'_>,
    channel: &Channel,
    texel_size: u32,
) -> ChannelValue {
    use ChannelDataType::*;

    match (channel.width, channel.data_type) {
        (width @ (5 | 6), UnsignedInt) => {
            // Sub-byte fields are only decoded within a 16-bit texel;
            // other texel sizes have no extraction rule yet.
            if texel_size == 16 {
                unsigned(cursor.read_bits(usize::from(width)).map(u64::from))
            } else {
                ChannelValue::Unsupported
            }
        }
        (8, UnsignedInt) => unsigned(cursor.read_u8().map(u64::from)),
        (8, SignedInt) => signed(cursor.read_i8().map(i64::from)),
        (16, UnsignedInt) => unsigned(cursor.read_u16_le().map(u64::from)),
        (16, SignedInt) => signed(cursor.read_i16_le().map(i64::from)),
        (16, Float) => float(
            cursor
                .read_u16_le()
                .map(|bits| half::f16::from_bits(bits).to_f64()),
        ),
        (24, UnsignedInt) => ChannelValue::Placeholder,
        (24, SignedInt) => signed(
            cursor
                .read_u24_le()
                .map(|bits| i64::from((bits << 8) as i32 >> 8)),
        ),
        (24, Float) => float(
            cursor
                .read_u24_le()
                .map(|bits| f64::from(f32::from_bits(bits << 8))),
        ),
        (32, Float) => float(cursor.read_u32_le().map(|bits| f64::from(f32::from_bits(bits)))),
        // Declared signed, decoded unsigned.
        (32, SignedInt) => unsigned(cursor.read_u32_le().map(u64::from)),
        // Declared unsigned, decoded signed.
        (64, UnsignedInt) => signed(cursor.read_i64_le()),
        (_, None) => panic!(
            "channel `{}` reached decode without a data type",
            channel.semantic.name()
        ),
        _ => ChannelValue::Unsupported,
    }
}

fn unsigned(value: Option<u64>) -> ChannelValue {
    value.map_or(ChannelValue::Unsupported, ChannelValue::Unsigned)
}

fn signed(value: Option<i64>) -> ChannelValue {
    value.map_or(ChannelValue::Unsupported, ChannelValue::Signed)
}

fn float(value: Option<f64>) -> ChannelValue {
    value.map_or(ChannelValue::Unsupported, ChannelValue::Float)
}
