use super::constants::*;
use bmp_pixel_transform_file_formats_api::{FormatHandlerError, FormatHandlerResult};
use endian_writer::{EndianReader, LittleEndianReader};
use log::debug;

/// The header fields of a BMP file needed to locate and read its pixel array.
///
/// Only produced by [`parse_bmp`], so `width` and `height` are always positive and there
/// are always at least 3 bytes per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfo {
    /// Total file size stated in the file header.
    pub file_size: u32,
    /// Offset of the pixel array from the start of the file.
    pub data_offset: u32,
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels. The pixel array is always read bottom-up.
    pub height: i32,
    /// Bits per pixel; only whole bytes are read.
    pub bits_per_pixel: u16,
}

impl BmpInfo {
    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width.unsigned_abs() as usize
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height.unsigned_abs() as usize
    }

    /// Bytes each pixel occupies in the pixel array.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Bytes of pixel data in one row, excluding padding.
    #[inline]
    pub fn scanline_bytes(&self) -> u64 {
        u64::from(self.width.unsigned_abs()) * self.bytes_per_pixel() as u64
    }

    /// Zero bytes after each row.
    #[inline]
    pub fn row_padding(&self) -> u64 {
        let alignment = ROW_ALIGNMENT as u64;
        (alignment - self.scanline_bytes() % alignment) % alignment
    }

    /// Bytes between the starts of two consecutive rows.
    #[inline]
    pub fn row_stride(&self) -> u64 {
        self.scanline_bytes() + self.row_padding()
    }

    /// File size implied by the pixel offset and dimensions.
    ///
    /// Saturates at [`u64::MAX`] instead of overflowing, which no real buffer can match.
    pub fn expected_file_size(&self) -> u64 {
        self.row_stride()
            .saturating_mul(u64::from(self.height.unsigned_abs()))
            .saturating_add(u64::from(self.data_offset))
    }

    /// Checks the stated file size and the actual buffer length against
    /// [`expected_file_size`](Self::expected_file_size).
    ///
    /// # Errors
    ///
    /// [`FormatHandlerError::MalformedContainer`] if any of the three differ.
    pub fn validate_size(&self, actual_len: usize) -> FormatHandlerResult<()> {
        let declared = u64::from(self.file_size);
        let expected = self.expected_file_size();
        let actual = actual_len as u64;
        if declared != expected || actual != expected {
            return Err(FormatHandlerError::MalformedContainer {
                declared,
                expected,
                actual,
            });
        }

        Ok(())
    }
}

/// Attempts to parse the header of a BMP file from the given slice.
///
/// # Return
///
/// A [`BmpInfo`] with the fields needed to read the pixel array.
///
/// # Errors
///
/// Checked in this order:
///
/// - [`FormatHandlerError::InputTooShort`] if `data` cannot hold the header fields read.
/// - [`FormatHandlerError::InvalidDimensions`] if width or height is not positive.
/// - [`FormatHandlerError::UnsupportedBitDepth`] if there are fewer than 3 bytes per pixel.
///
/// # Notes
///
/// This does not check the `BM` magic (see [`likely_bmp`]) nor the file size
/// (see [`BmpInfo::validate_size`]).
///
/// [`likely_bmp`]: crate::bmp::likely_bmp
pub fn parse_bmp(data: &[u8]) -> FormatHandlerResult<BmpInfo> {
    if data.len() < PARSED_HEADER_SIZE {
        return Err(FormatHandlerError::InputTooShort {
            required: PARSED_HEADER_SIZE,
            actual: data.len(),
        });
    }

    // SAFETY: data.len() >= PARSED_HEADER_SIZE (30), and every field read below ends at or
    // before BITS_PER_PIXEL_OFFSET + 2 == PARSED_HEADER_SIZE.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let info = unsafe {
        BmpInfo {
            file_size: reader.read_u32_at(FILE_SIZE_OFFSET as isize),
            data_offset: reader.read_u32_at(DATA_OFFSET_OFFSET as isize),
            width: reader.read_u32_at(WIDTH_OFFSET as isize) as i32,
            height: reader.read_u32_at(HEIGHT_OFFSET as isize) as i32,
            bits_per_pixel: reader.read_u16_at(BITS_PER_PIXEL_OFFSET as isize),
        }
    };

    if info.width <= 0 || info.height <= 0 {
        return Err(FormatHandlerError::InvalidDimensions {
            width: info.width.into(),
            height: info.height.into(),
        });
    }

    if info.bytes_per_pixel() < BGR_BYTES {
        return Err(FormatHandlerError::UnsupportedBitDepth(info.bits_per_pixel));
    }

    debug!(
        "Parsed BMP header: {}x{}, {} bpp, pixels at {}, stated size {}",
        info.width, info.height, info.bits_per_pixel, info.data_offset, info.file_size
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn parses_header_fields() {
        let data = create_bmp_with_header(2, 2, 24, &[0; 16]);
        let info = parse_bmp(&data).unwrap();

        assert_eq!(
            info,
            BmpInfo {
                file_size: 70,
                data_offset: 54,
                width: 2,
                height: 2,
                bits_per_pixel: 24,
            }
        );
        assert_eq!(info.bytes_per_pixel(), 3);
        assert_eq!(info.scanline_bytes(), 6);
        assert_eq!(info.row_padding(), 2);
        assert_eq!(info.row_stride(), 8);
        assert_eq!(info.expected_file_size(), 70);
        assert_eq!(info.validate_size(70), Ok(()));
    }

    #[rstest]
    #[case(1, 24, 1)]
    #[case(3, 24, 3)]
    #[case(4, 24, 0)]
    #[case(1, 32, 0)]
    #[case(3, 32, 0)]
    #[case(5, 24, 1)]
    fn row_padding_depends_on_scanline(
        #[case] width: i32,
        #[case] bits_per_pixel: u16,
        #[case] expected: u64,
    ) {
        let info = BmpInfo {
            file_size: 0,
            data_offset: 54,
            width,
            height: 1,
            bits_per_pixel,
        };
        assert_eq!(info.row_padding(), expected);
        assert_eq!(info.row_stride() % 4, 0);
    }

    #[test]
    fn rejects_short_header() {
        let data = [b'B', b'M', 0, 0];
        assert_eq!(
            parse_bmp(&data),
            Err(FormatHandlerError::InputTooShort {
                required: PARSED_HEADER_SIZE,
                actual: 4
            })
        );
    }

    #[rstest]
    #[case(0, 2)]
    #[case(2, 0)]
    #[case(-2, 2)]
    #[case(2, -2)]
    fn rejects_non_positive_dimensions(#[case] width: i32, #[case] height: i32) {
        let data = create_bmp_with_header(width, height, 24, &[]);
        assert_eq!(
            parse_bmp(&data),
            Err(FormatHandlerError::InvalidDimensions {
                width: width.into(),
                height: height.into()
            })
        );
    }

    #[rstest]
    #[case(1)]
    #[case(8)]
    #[case(16)]
    #[case(23)]
    fn rejects_less_than_three_bytes_per_pixel(#[case] bits_per_pixel: u16) {
        let data = create_bmp_with_header(2, 2, bits_per_pixel, &[0; 16]);
        assert_eq!(
            parse_bmp(&data),
            Err(FormatHandlerError::UnsupportedBitDepth(bits_per_pixel))
        );
    }

    #[test]
    fn dimensions_are_checked_before_bit_depth() {
        let data = create_bmp_with_header(0, 2, 8, &[]);
        assert!(matches!(
            parse_bmp(&data),
            Err(FormatHandlerError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn ignores_magic() {
        let mut data = create_bmp_with_header(1, 1, 24, &[0; 4]);
        data[0] = b'X';
        data[1] = b'X';
        assert!(parse_bmp(&data).is_ok());
    }

    #[test]
    fn expected_size_saturates_instead_of_overflowing() {
        let info = BmpInfo {
            file_size: u32::MAX,
            data_offset: u32::MAX,
            width: i32::MAX,
            height: i32::MAX,
            bits_per_pixel: u16::MAX,
        };
        assert_eq!(info.expected_file_size(), u64::MAX);
        assert!(info.validate_size(usize::MAX).is_err());
    }
}
