use super::parse_bmp::parse_bmp;
use bmp_pixel_transform_common::{Color, Raster};
use bmp_pixel_transform_file_formats_api::FormatHandlerResult;
use log::{debug, warn};

/// Decodes a complete BMP file into a [`Raster`].
///
/// Row 0 of the result is the visual top of the image (the last row stored in the file).
/// Each pixel's blue, green and red bytes become the [`Color`]'s channels; any further bytes
/// per pixel (e.g. alpha in 32-bit files) are skipped.
///
/// # Errors
///
/// Everything [`parse_bmp`] rejects, then
/// [`FormatHandlerError::MalformedContainer`] if the stated file size or the length of `data`
/// differs from the size implied by the header. No partial raster is returned.
///
/// [`FormatHandlerError::MalformedContainer`]: bmp_pixel_transform_file_formats_api::FormatHandlerError::MalformedContainer
pub fn decode_bmp(data: &[u8]) -> FormatHandlerResult<Raster> {
    let info = parse_bmp(data)?;
    info.validate_size(data.len())
        .inspect_err(|e| warn!("Rejected BMP: {e}"))?;

    // Both fit in usize: validate_size guarantees they are no larger than data.len().
    let stride = info.row_stride() as usize;
    let scanline = info.scanline_bytes() as usize;
    let bytes_per_pixel = info.bytes_per_pixel();
    let (width, height) = (info.width(), info.height());

    let pixel_array = &data[info.data_offset as usize..];
    let mut pixels = Vec::with_capacity(width * height);

    // The file stores the bottom row first.
    for row in pixel_array.chunks_exact(stride).rev() {
        pixels.extend(
            row[..scanline]
                .chunks_exact(bytes_per_pixel)
                .map(|pixel| Color::from_bgr([pixel[0], pixel[1], pixel[2]])),
        );
    }

    debug!(
        "Decoded {width}x{height} BMP ({} bytes per pixel, {} padding bytes per row)",
        bytes_per_pixel,
        stride - scanline
    );
    Ok(Raster::new(width, height, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use bmp_pixel_transform_file_formats_api::FormatHandlerError;

    /// 2x2, 24 bpp: 6 bytes per row plus 2 padding bytes, 70 bytes in total.
    fn two_by_two() -> Vec<u8> {
        #[rustfmt::skip]
        let pixel_data = [
            // bottom row (visual row 1): blue, white
            255, 0, 0,   255, 255, 255,   0, 0,
            // top row (visual row 0): red, green
            0, 0, 255,   0, 255, 0,       0, 0,
        ];
        create_bmp_with_header(2, 2, 24, &pixel_data)
    }

    #[test]
    fn decodes_two_by_two_with_row_flip_and_channel_swap() {
        let data = two_by_two();
        assert_eq!(data.len(), 70);

        let raster = decode_bmp(&data).unwrap();
        assert_eq!(
            raster,
            raster_from_rgb(&[
                &[(255, 0, 0), (0, 255, 0)],
                &[(0, 0, 255), (255, 255, 255)],
            ])
        );
    }

    #[rstest]
    #[case(69)]
    #[case(71)]
    fn rejects_buffer_length_mismatch(#[case] len: usize) {
        let mut data = two_by_two();
        data.resize(len, 0);
        assert_eq!(
            decode_bmp(&data),
            Err(FormatHandlerError::MalformedContainer {
                declared: 70,
                expected: 70,
                actual: len as u64
            })
        );
    }

    #[test]
    fn rejects_declared_size_mismatch() {
        let mut data = two_by_two();
        set_declared_file_size(&mut data, 80);
        assert_eq!(
            decode_bmp(&data),
            Err(FormatHandlerError::MalformedContainer {
                declared: 80,
                expected: 70,
                actual: 70
            })
        );
    }

    #[test]
    fn discards_alpha_in_32_bit_pixels() {
        #[rustfmt::skip]
        let pixel_data = [
            // bottom row
            1, 2, 3, 200,   4, 5, 6, 201,
            // top row
            7, 8, 9, 202,   10, 11, 12, 203,
        ];
        let data = create_bmp_with_header(2, 2, 32, &pixel_data);

        let raster = decode_bmp(&data).unwrap();
        assert_eq!(
            raster,
            raster_from_rgb(&[&[(9, 8, 7), (12, 11, 10)], &[(3, 2, 1), (6, 5, 4)]])
        );
    }

    #[test]
    fn reads_pixels_from_stated_offset() {
        // 1x1 with 6 unrelated bytes between the header and the pixel array.
        let mut data = create_bmp_with_header(1, 1, 24, &[0xAA; 6]);
        data.extend_from_slice(&[10, 20, 30, 0]);
        set_data_offset(&mut data, 60);
        set_declared_file_size(&mut data, 64);

        let raster = decode_bmp(&data).unwrap();
        assert_eq!(raster, raster_from_rgb(&[&[(30, 20, 10)]]));
    }

    #[test]
    fn does_not_require_magic() {
        let mut data = two_by_two();
        data[..2].copy_from_slice(b"XY");
        assert!(decode_bmp(&data).is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            decode_bmp(&[]),
            Err(FormatHandlerError::InputTooShort { actual: 0, .. })
        ));
    }
}
