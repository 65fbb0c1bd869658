//! Core trait for file format handlers.

use crate::error::FormatHandlerResult;
use bmp_pixel_transform_common::Raster;

/// Trait for handling specific file formats.
///
/// File format handlers are responsible for:
/// - Validating a container and decoding its pixels into a [`Raster`]
/// - Serializing a [`Raster`] back into a container
///
/// This trait focuses on the case where the file format is known.
/// For automatic format detection, see [`FileFormatDetection`].
///
/// [`FileFormatDetection`]: crate::traits::FileFormatDetection
pub trait FileFormatHandler: Send + Sync {
    /// Decode a complete container into a raster.
    ///
    /// # Returns
    ///
    /// The decoded raster, or an error if the container fails validation.
    /// No partial raster is ever returned.
    fn decode(&self, input: &[u8]) -> FormatHandlerResult<Raster>;

    /// Exact number of bytes [`encode_into`](Self::encode_into) will write for `raster`.
    ///
    /// # Errors
    ///
    /// If the raster cannot be represented in this container.
    fn encoded_len(&self, raster: &Raster) -> FormatHandlerResult<usize>;

    /// Encode `raster` into the start of `output`.
    ///
    /// # Returns
    ///
    /// Number of bytes written, or an error if `output` is shorter than
    /// [`encoded_len`](Self::encoded_len) or the raster cannot be represented.
    fn encode_into(&self, raster: &Raster, output: &mut [u8]) -> FormatHandlerResult<usize>;

    /// Encode `raster` into a freshly allocated buffer.
    fn encode(&self, raster: &Raster) -> FormatHandlerResult<Vec<u8>> {
        let mut output = vec![0u8; self.encoded_len(raster)?];
        let written = self.encode_into(raster, &mut output)?;
        output.truncate(written);
        Ok(output)
    }
}
