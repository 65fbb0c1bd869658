//! Error types for raster construction.

use thiserror::Error;

/// Errors that can occur when building a [`Raster`] from caller-supplied pixels.
///
/// [`Raster`]: crate::raster::Raster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Width or height is zero; a raster holds at least one pixel.
    #[error("Raster dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    /// Rows passed to [`Raster::from_rows`] do not all share the first row's length.
    ///
    /// [`Raster::from_rows`]: crate::raster::Raster::from_rows
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The pixel buffer does not hold exactly `width * height` pixels.
    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
}
