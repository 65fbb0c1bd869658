//! BMP format constants and definitions
//!
//! All multi-byte fields are little-endian.

/// Magic header for BMP files
pub const BMP_MAGIC: [u8; 2] = *b"BM";

/// Size of the `BITMAPFILEHEADER`.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the `BITMAPINFOHEADER`.
pub const INFO_HEADER_SIZE: usize = 40;

/// Size of both headers; also the pixel array offset of files we write.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

// BITMAPFILEHEADER field offsets
pub(crate) const FILE_SIZE_OFFSET: usize = 0x02;
pub(crate) const RESERVED_OFFSET: usize = 0x06;
pub(crate) const DATA_OFFSET_OFFSET: usize = 0x0A;

// BITMAPINFOHEADER field offsets
pub(crate) const INFO_HEADER_SIZE_OFFSET: usize = 0x0E;
pub(crate) const WIDTH_OFFSET: usize = 0x12;
pub(crate) const HEIGHT_OFFSET: usize = 0x16;
pub(crate) const PLANES_OFFSET: usize = 0x1A;
pub(crate) const BITS_PER_PIXEL_OFFSET: usize = 0x1C;
pub(crate) const COMPRESSION_OFFSET: usize = 0x1E;
pub(crate) const IMAGE_SIZE_OFFSET: usize = 0x22;
pub(crate) const X_PIXELS_PER_METRE_OFFSET: usize = 0x26;
pub(crate) const Y_PIXELS_PER_METRE_OFFSET: usize = 0x2A;
pub(crate) const COLORS_USED_OFFSET: usize = 0x2E;
pub(crate) const IMPORTANT_COLORS_OFFSET: usize = 0x32;

/// Bytes needed to read every field used when decoding; bits per pixel is the last.
pub const PARSED_HEADER_SIZE: usize = BITS_PER_PIXEL_OFFSET + 2;

// Values written by the encoder
pub(crate) const PLANES: u16 = 1;
pub(crate) const ENCODED_BITS_PER_PIXEL: u16 = 24;
pub(crate) const BI_RGB: u32 = 0;
pub(crate) const PIXELS_PER_METRE: u32 = 2835; // 72 DPI

/// Bytes per pixel in files we write (blue, green, red).
pub(crate) const BGR_BYTES: usize = 3;

/// Every row in the pixel array is padded to a multiple of this.
pub(crate) const ROW_ALIGNMENT: usize = 4;

/// Zero bytes needed after a row of `scanline_bytes` to reach [`ROW_ALIGNMENT`].
#[inline]
pub(crate) const fn row_padding(scanline_bytes: usize) -> usize {
    (ROW_ALIGNMENT - scanline_bytes % ROW_ALIGNMENT) % ROW_ALIGNMENT
}
