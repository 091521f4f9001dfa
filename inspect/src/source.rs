// Distributed under The MIT License (MIT)
//! Pixel storage paired with the layout describing it.
use texel_buffer::AlignedBuffer;

use crate::format::TexelFormatter;
use crate::layout::{LayoutError, TexelCoord, TexelLayout};

/// An image's pixel bytes together with their immutable texel layout.
///
/// This is the holder side of the inspection flow: the image codec fills
/// the buffer once per image, and every cursor query resolves a pixel
/// coordinate to the texel's raw byte span for the formatter. Rows are
/// addressed through a byte stride, so row padding from the codec is
/// preserved; texels are assumed to start on byte boundaries.
pub struct PixelSource {
    buffer: AlignedBuffer,
    layout: TexelLayout,
    width: u32,
    height: u32,
    bytes_per_row: usize,
}

impl PixelSource {
    /// Wrap a pixel buffer with tightly packed rows.
    pub fn new(
        buffer: AlignedBuffer,
        layout: TexelLayout,
        width: u32,
        height: u32,
    ) -> Result<Self, LayoutError> {
        let bytes_per_row = (width as usize)
            .checked_mul(layout.byte_size())
            .ok_or(LayoutError::TooLarge)?;
        Self::with_row_stride(buffer, layout, width, height, bytes_per_row)
    }

    /// Wrap a pixel buffer with an explicit row stride in bytes.
    ///
    /// Fails when a row of texels does not fit the stride, or when the
    /// buffer does not cover `height` rows.
    pub fn with_row_stride(
        buffer: AlignedBuffer,
        layout: TexelLayout,
        width: u32,
        height: u32,
        bytes_per_row: usize,
    ) -> Result<Self, LayoutError> {
        let row_bytes = (width as usize)
            .checked_mul(layout.byte_size())
            .ok_or(LayoutError::TooLarge)?;
        if bytes_per_row < row_bytes {
            return Err(LayoutError::StrideTooSmall {
                bytes_per_row,
                row_bytes,
            });
        }

        let need = bytes_per_row
            .checked_mul(height as usize)
            .ok_or(LayoutError::TooLarge)?;
        if buffer.size() < need {
            return Err(LayoutError::BufferTooSmall {
                len: buffer.size(),
                need,
            });
        }

        Ok(PixelSource {
            buffer,
            layout,
            width,
            height,
            bytes_per_row,
        })
    }

    /// The layout shared by every texel of the image.
    pub fn layout(&self) -> &TexelLayout {
        &self.layout
    }

    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying pixel buffer.
    pub fn buffer(&self) -> &AlignedBuffer {
        &self.buffer
    }

    /// The underlying pixel buffer, for the codec filling in pixel data.
    pub fn buffer_mut(&mut self) -> &mut AlignedBuffer {
        &mut self.buffer
    }

    /// Recover the buffer, consuming the source.
    pub fn into_buffer(self) -> AlignedBuffer {
        self.buffer
    }

    /// The raw bytes of the texel at `coord`, `None` outside the image.
    pub fn bytes_at(&self, coord: TexelCoord) -> Option<&[u8]> {
        let (x, y) = coord.xy();
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize) * self.bytes_per_row + (x as usize) * self.layout.byte_size();
        self.buffer
            .as_bytes()
            .get(offset..offset + self.layout.byte_size())
    }

    /// Format the channel values of the texel under `coord`.
    ///
    /// This is the cursor-query operation: returns the annotated line for
    /// the status surface, or `None` outside the image.
    pub fn describe(&self, coord: TexelCoord, formatter: &TexelFormatter) -> Option<String> {
        Some(formatter.format_texel(self.bytes_at(coord)?, &self.layout))
    }
}
