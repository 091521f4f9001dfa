// Distributed under The MIT License (MIT)

/// A bounded bit cursor over a texel's raw bytes.
///
/// Carries a running bit position and the slice end as a hard limit. Every
/// read is checked against that limit and yields `None` once it would leave
/// the slice, so a decoder driven by a (possibly malformed) channel layout
/// can never read past the texel it was handed.
///
/// Sub-byte fields are extracted from the little-endian interpretation of
/// the underlying bytes: bit 0 is the lowest-order bit of the first byte,
/// matching how packed formats such as 5-6-5 are specified.
///
/// The scalar reads (`read_u8`, `read_u16_le`, ..) address the byte the
/// cursor currently points into, i.e. the bit position rounded *down* to a
/// byte boundary. Decoders are expected to re-position per channel via
/// [`Self::seek`] rather than rely on reads consuming exact widths.
#[derive(Clone, Copy, Debug)]
pub struct BitCursor<'data> {
    bytes: &'data [u8],
    /// The running position, in bits from the start of `bytes`.
    pos: usize,
}

impl<'data> BitCursor<'data> {
    /// Start a cursor at bit position 0 of `bytes`.
    pub fn new(bytes: &'data [u8]) -> Self {
        BitCursor { bytes, pos: 0 }
    }

    /// The current position in bits.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The total number of addressable bits.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Move to an absolute bit position.
    ///
    /// Seeking past the end is allowed; all subsequent reads fail until the
    /// cursor is re-positioned.
    pub fn seek(&mut self, bits: usize) {
        self.pos = bits;
    }

    /// Advance by `bits` without reading.
    pub fn skip(&mut self, bits: usize) {
        self.pos = self.pos.saturating_add(bits);
    }

    /// Extract `count` bits (at most 32) at the current bit position.
    ///
    /// The result has the extracted field in its low-order bits. Returns
    /// `None` when the field would leave the slice; the position is only
    /// advanced on success.
    ///
    /// # Panics
    ///
    /// Panics when `count` exceeds 32.
    pub fn read_bits(&mut self, count: usize) -> Option<u32> {
        assert!(count <= 32);
        let end = self.pos.checked_add(count)?;
        if end > self.bit_len() {
            return None;
        }

        // Gather the straddled bytes, at most five for a 32-bit field at an
        // arbitrary bit offset, then shift the field down.
        let start_byte = self.pos / 8;
        let from_bytes = &self.bytes[start_byte..end.div_ceil(8)];

        let mut le_bytes = [0u8; 8];
        le_bytes[..from_bytes.len()].copy_from_slice(from_bytes);

        let shift = self.pos - start_byte * 8;
        let mask = (1u64 << count) - 1;
        let value = (u64::from_le_bytes(le_bytes) >> shift) & mask;

        self.pos = end;
        Some(value as u32)
    }

    /// Read one byte as unsigned.
    pub fn read_u8(&mut self) -> Option<u8> {
        self.read_array().map(u8::from_le_bytes)
    }

    /// Read one byte as signed.
    pub fn read_i8(&mut self) -> Option<i8> {
        self.read_array().map(i8::from_le_bytes)
    }

    /// Read a two-byte little-endian unsigned integer.
    pub fn read_u16_le(&mut self) -> Option<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Read a two-byte little-endian signed integer.
    pub fn read_i16_le(&mut self) -> Option<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    /// Read a three-byte little-endian field into the low bits of a `u32`.
    pub fn read_u24_le(&mut self) -> Option<u32> {
        let [b0, b1, b2] = self.read_array()?;
        Some(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    /// Read a four-byte little-endian unsigned integer.
    pub fn read_u32_le(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Read an eight-byte little-endian signed integer.
    pub fn read_i64_le(&mut self) -> Option<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    /// Read `N` bytes at the current byte offset, advancing on success.
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let offset = self.pos / 8;
        let bytes = self.bytes.get(offset..offset.checked_add(N)?)?;

        let mut array = [0u8; N];
        array.copy_from_slice(bytes);

        self.pos = (offset + N) * 8;
        Some(array)
    }
}
