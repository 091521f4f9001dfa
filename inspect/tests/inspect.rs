use texel_buffer::AlignedBuffer;
use texel_inspect::{
    format_texel, Channel, ChannelSemantic, PixelSource, TexelCoord, TexelFormatter, TexelLayout,
};

const RED: ChannelSemantic = ChannelSemantic::Red;
const GREEN: ChannelSemantic = ChannelSemantic::Green;
const BLUE: ChannelSemantic = ChannelSemantic::Blue;
const OPACITY: ChannelSemantic = ChannelSemantic::Opacity;

fn rgba8() -> TexelLayout {
    TexelLayout::from_channels(vec![
        Channel::unsigned(RED, 8),
        Channel::unsigned(GREEN, 8),
        Channel::unsigned(BLUE, 8),
        Channel::unsigned(OPACITY, 8),
    ])
}

#[test]
fn rgba_end_to_end() {
    let line = format_texel(&[10, 20, 30, 40], &rgba8());
    assert_eq!(
        line,
        "<textcolor=#ff1c21>Red: 10 \
         <textcolor=#00ff00>Green: 20 \
         <textcolor=#006dff>Blue: 30 \
         <textcolor=#ffffff>Opacity: 40"
    );
}

#[test]
fn trailing_separator_is_trimmed() {
    let line = format_texel(&[10, 20, 30, 40], &rgba8());
    assert!(!line.ends_with(' '));
    assert!(!line.ends_with('>'));

    // No channels, no text.
    let empty = TexelLayout::from_channels(vec![]);
    assert_eq!(format_texel(&[], &empty), "");

    // Only padding also yields the empty string.
    let padding = TexelLayout::from_channels(vec![Channel::padding(8)]);
    assert_eq!(format_texel(&[0xff], &padding), "");
}

#[test]
fn padding_channels_advance_the_cursor() {
    // The leading byte is padding; Red must decode the second byte.
    let layout = TexelLayout::from_channels(vec![
        Channel::padding(8),
        Channel::unsigned(RED, 8),
    ]);

    let line = format_texel(&[0xaa, 200], &layout);
    assert_eq!(line, "<textcolor=#ff1c21>Red:200");
}

#[test]
fn standard_width_round_trips() {
    // Writing a value into the pixel storage and decoding it back yields
    // the exact decimal rendering.
    let layout = TexelLayout::from_channels(vec![Channel::unsigned(RED, 16)]);
    let mut buffer = AlignedBuffer::with_size(2);
    buffer.write(&51234u16.to_le_bytes(), 0).expect("in bounds");

    let source = PixelSource::new(buffer, layout, 1, 1).expect("buffer covers image");
    let line = source
        .describe(TexelCoord(0, 0), &TexelFormatter::default())
        .expect("in image");
    assert!(line.contains("51234"), "got {line:?}");

    let layout = TexelLayout::from_channels(vec![Channel::signed(RED, 16)]);
    let line = format_texel(&(-12345i16).to_le_bytes(), &layout);
    assert_eq!(line, "<textcolor=#ff1c21>(signed)Red(16):-12345");

    let layout = TexelLayout::from_channels(vec![Channel::signed(RED, 8)]);
    let line = format_texel(&[0x80], &layout);
    assert_eq!(line, "<textcolor=#ff1c21>(signed)Red:-128");
}

#[test]
fn five_six_five_texels() {
    let layout = TexelLayout::from_channels(vec![
        Channel::unsigned(RED, 5),
        Channel::unsigned(GREEN, 6),
        Channel::unsigned(BLUE, 5),
    ]);

    // All red bits set, the rest clear.
    let line = format_texel(&0b0000_0000_0001_1111u16.to_le_bytes(), &layout);
    assert_eq!(
        line,
        "<textcolor=#ff1c21>Red(5):31 \
         <textcolor=#00ff00>Green(6): 0 \
         <textcolor=#006dff>Blue(5): 0"
    );

    // All green bits set.
    let line = format_texel(&0b0000_0111_1110_0000u16.to_le_bytes(), &layout);
    assert!(line.contains("Green(6):63"), "got {line:?}");
}

#[test]
fn sub_byte_fields_need_a_16_bit_texel() {
    // A lone 5-bit channel in an 8-bit texel keeps its label but decodes
    // no value.
    let layout = TexelLayout::from_channels(vec![
        Channel::unsigned(RED, 5),
        Channel::padding(3),
    ]);
    assert_eq!(layout.texel_size(), 8);

    let line = format_texel(&[0b0001_1111], &layout);
    assert_eq!(line, "<textcolor=#ff1c21>Red(5):");
}

#[test]
fn twenty_four_bit_unsigned_placeholder() {
    let layout = TexelLayout::from_channels(vec![Channel::unsigned(ChannelSemantic::Monochrome, 24)]);

    for bytes in [[0u8, 0, 0], [0xff, 0xff, 0xff], [1, 2, 3]] {
        let line = format_texel(&bytes, &layout);
        assert_eq!(line, "<textcolor=#ff8930>Monochrome(24):N/A");
    }
}

#[test]
fn float_channels_render_fixed_point() {
    let layout = TexelLayout::from_channels(vec![Channel::float(ChannelSemantic::Float, 32)]);
    let line = format_texel(&(-0.25f32).to_le_bytes(), &layout);
    assert_eq!(line, "<textcolor=#ff8930>Float(32): -0.250000");

    let layout = TexelLayout::from_channels(vec![Channel::float(ChannelSemantic::Float, 16)]);
    let bytes = half::f16::from_f32(2.5).to_bits().to_le_bytes();
    let line = format_texel(&bytes, &layout);
    assert_eq!(line, "<textcolor=#ff8930>Float(16):  2.500000");
}

#[test]
fn legacy_mismatches_stay_observable() {
    // Declared signed, decoded as unsigned.
    let layout = TexelLayout::from_channels(vec![Channel::signed(RED, 32)]);
    let line = format_texel(&(-1i32).to_le_bytes(), &layout);
    assert_eq!(line, "<textcolor=#ff1c21>(signed)Red(32):4294967295");

    // Declared unsigned, decoded as signed.
    let layout = TexelLayout::from_channels(vec![Channel::unsigned(RED, 64)]);
    let line = format_texel(&[0xff; 8], &layout);
    assert_eq!(line, format!("<textcolor=#ff1c21>Red(64):{:>20}", -1));
}

#[test]
fn short_texels_keep_labels_only() {
    // Fewer bytes than the layout wants: labels stay, values vanish, and
    // nothing reads outside the slice.
    let line = format_texel(&[10, 20], &rgba8());
    assert_eq!(
        line,
        "<textcolor=#ff1c21>Red: 10 \
         <textcolor=#00ff00>Green: 20 \
         <textcolor=#006dff>Blue: \
         <textcolor=#ffffff>Opacity:"
    );
}

#[test]
fn cursor_query_over_an_image() {
    // A 2x1 image of RGBA texels, filled through the codec surface.
    let mut source = PixelSource::new(AlignedBuffer::with_size(8), rgba8(), 2, 1)
        .expect("buffer covers image");
    source
        .buffer_mut()
        .write(&[1, 2, 3, 4, 5, 6, 7, 8], 0)
        .expect("in bounds");

    let formatter = TexelFormatter::default();
    let line = source.describe(TexelCoord(1, 0), &formatter).expect("in image");
    assert!(line.contains("Red:  5"), "got {line:?}");
    assert!(line.contains("Opacity:  8"), "got {line:?}");

    assert_eq!(source.describe(TexelCoord(2, 0), &formatter), None);
    assert_eq!(source.describe(TexelCoord(0, 1), &formatter), None);
}
