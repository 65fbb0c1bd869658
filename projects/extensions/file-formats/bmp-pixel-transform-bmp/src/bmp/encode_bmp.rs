use super::constants::*;
use bmp_pixel_transform_common::Raster;
use bmp_pixel_transform_file_formats_api::{FormatHandlerError, FormatHandlerResult};
use endian_writer::{EndianWriter, LittleEndianWriter};
use log::debug;

/// Sizes of a raster once written as a 24-bit BMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EncodedLayout {
    width: i32,
    height: i32,
    scanline_bytes: usize,
    row_stride: usize,
    image_size: u32,
    file_size: u32,
}

impl EncodedLayout {
    fn new(raster: &Raster) -> FormatHandlerResult<Self> {
        Self::from_dimensions(raster.width(), raster.height())
    }

    fn from_dimensions(width: usize, height: usize) -> FormatHandlerResult<Self> {
        let too_large = || FormatHandlerError::DimensionsTooLarge { width, height };

        let scanline_bytes = width
            .checked_mul(BGR_BYTES)
            .ok_or_else(too_large)?;
        let row_stride = scanline_bytes
            .checked_add(row_padding(scanline_bytes))
            .ok_or_else(too_large)?;
        let image_size = row_stride
            .checked_mul(height)
            .and_then(|size| u32::try_from(size).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(HEADER_SIZE as u32)
            .ok_or_else(too_large)?;

        Ok(Self {
            width: i32::try_from(width).map_err(|_| too_large())?,
            height: i32::try_from(height).map_err(|_| too_large())?,
            scanline_bytes,
            row_stride,
            image_size,
            file_size,
        })
    }
}

/// Number of bytes [`encode_bmp_into`] writes for `raster`.
///
/// # Errors
///
/// [`FormatHandlerError::DimensionsTooLarge`] if the dimensions or file size do not fit
/// the header fields.
pub fn encoded_len(raster: &Raster) -> FormatHandlerResult<usize> {
    EncodedLayout::new(raster).map(|layout| layout.file_size as usize)
}

/// Encodes `raster` as an uncompressed 24-bit BMP into the start of `output`.
///
/// Rows are written bottom-up, pixels as blue, green, red, each row zero-padded to a
/// multiple of 4 bytes. Channels outside `0..=255` are clamped.
///
/// # Returns
///
/// Number of bytes written; always [`encoded_len`].
///
/// # Errors
///
/// - [`FormatHandlerError::DimensionsTooLarge`] (see [`encoded_len`]).
/// - [`FormatHandlerError::OutputBufferTooSmall`] if `output` is shorter than [`encoded_len`].
pub fn encode_bmp_into(raster: &Raster, output: &mut [u8]) -> FormatHandlerResult<usize> {
    let layout = EncodedLayout::new(raster)?;
    let file_size = layout.file_size as usize;
    if output.len() < file_size {
        return Err(FormatHandlerError::OutputBufferTooSmall {
            required: file_size,
            actual: output.len(),
        });
    }

    let (header, pixel_array) = output[..file_size].split_at_mut(HEADER_SIZE);
    write_header(header, &layout);

    for (dst_row, src_row) in pixel_array
        .chunks_exact_mut(layout.row_stride)
        .zip(raster.rows().rev())
    {
        let (pixels, padding) = dst_row.split_at_mut(layout.scanline_bytes);
        for (dst, color) in pixels.chunks_exact_mut(BGR_BYTES).zip(src_row) {
            dst.copy_from_slice(&color.to_bgr());
        }
        padding.fill(0);
    }

    debug!(
        "Encoded {}x{} raster as {file_size} byte BMP",
        layout.width, layout.height
    );
    Ok(file_size)
}

/// Encodes `raster` as an uncompressed 24-bit BMP.
///
/// See [`encode_bmp_into`].
pub fn encode_bmp(raster: &Raster) -> FormatHandlerResult<Vec<u8>> {
    let mut output = vec![0u8; encoded_len(raster)?];
    encode_bmp_into(raster, &mut output)?;
    Ok(output)
}

fn write_header(header: &mut [u8], layout: &EncodedLayout) {
    debug_assert_eq!(header.len(), HEADER_SIZE);
    header[..BMP_MAGIC.len()].copy_from_slice(&BMP_MAGIC);

    // SAFETY: header is exactly HEADER_SIZE (54) bytes and every field written below ends
    // at or before IMPORTANT_COLORS_OFFSET + 4 == HEADER_SIZE.
    let mut writer = unsafe { LittleEndianWriter::new(header.as_mut_ptr()) };
    unsafe {
        // BITMAPFILEHEADER
        writer.write_u32_at(layout.file_size, FILE_SIZE_OFFSET as isize);
        writer.write_u32_at(0, RESERVED_OFFSET as isize);
        writer.write_u32_at(HEADER_SIZE as u32, DATA_OFFSET_OFFSET as isize);

        // BITMAPINFOHEADER
        writer.write_u32_at(INFO_HEADER_SIZE as u32, INFO_HEADER_SIZE_OFFSET as isize);
        writer.write_u32_at(layout.width as u32, WIDTH_OFFSET as isize);
        writer.write_u32_at(layout.height as u32, HEIGHT_OFFSET as isize);
        writer.write_u16_at(PLANES, PLANES_OFFSET as isize);
        writer.write_u16_at(ENCODED_BITS_PER_PIXEL, BITS_PER_PIXEL_OFFSET as isize);
        writer.write_u32_at(BI_RGB, COMPRESSION_OFFSET as isize);
        writer.write_u32_at(layout.image_size, IMAGE_SIZE_OFFSET as isize);
        writer.write_u32_at(PIXELS_PER_METRE, X_PIXELS_PER_METRE_OFFSET as isize);
        writer.write_u32_at(PIXELS_PER_METRE, Y_PIXELS_PER_METRE_OFFSET as isize);
        writer.write_u32_at(0, COLORS_USED_OFFSET as isize);
        writer.write_u32_at(0, IMPORTANT_COLORS_OFFSET as isize);
    }
}
