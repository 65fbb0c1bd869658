//! Error types for transform operations.

use bmp_pixel_transform_common::RasterError;
use thiserror::Error;

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for format handler operations
pub type FormatHandlerResult<T> = Result<T, FormatHandlerError>;

/// Errors specific to file format handlers (BMP, etc.)
///
/// These errors occur when format handlers attempt to parse, validate,
/// decode or encode file format-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatHandlerError {
    /// Unknown or unsupported file format - the file format itself cannot be detected or parsed
    #[error("Unknown file format")]
    UnknownFileFormat,

    /// Input buffer is too short to contain the header fields being read
    #[error("Input buffer too short: required at least {required} bytes, got {actual} bytes")]
    InputTooShort { required: usize, actual: usize },

    /// The header declares a width or height that cannot describe a raster
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// Fewer than three bytes per pixel; such depths cannot be read as BGR
    #[error("Unsupported bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// The file size stated in the header, the size implied by the header and the
    /// actual buffer length do not all agree
    #[error(
        "Malformed container: header declares {declared} bytes, dimensions imply {expected} bytes, got {actual} bytes"
    )]
    MalformedContainer {
        declared: u64,
        expected: u64,
        actual: u64,
    },

    /// Output buffer is too small for the operation
    #[error("Output buffer too small: required {required} bytes, got {actual} bytes")]
    OutputBufferTooSmall { required: usize, actual: usize },

    /// The raster cannot be described by the container's header fields
    #[error("Raster of {width}x{height} pixels is too large for this container")]
    DimensionsTooLarge { width: usize, height: usize },

    /// The decoded pixels could not form a raster
    #[error("Invalid raster: {0}")]
    Raster(#[from] RasterError),
}

/// Errors that can occur during transform operations
///
/// These are pure library errors; file system failures are reported separately
/// by the `file_io` module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Format handler error
    #[error("Format handler error: {0}")]
    FormatHandler(#[from] FormatHandlerError),

    /// None of the supplied handlers accepted the input
    #[error("No handler supports this file")]
    NoSupportedHandler,

    /// The input contains no data at all
    #[error("Input is empty")]
    EmptyInput,
}
