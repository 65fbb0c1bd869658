use super::constants::*;

/// Determines if the given data likely represents a BMP image.
/// This is done by checking the 'MAGIC' header, 'BM' at offset 0 and minimum size.
/// For header validation, use [`parse_bmp`].
///
/// [`parse_bmp`]: crate::bmp::parse_bmp::parse_bmp
#[inline(always)]
pub fn likely_bmp(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE && data[..BMP_MAGIC.len()] == BMP_MAGIC
}
