//! Trait for file format detection.

use crate::traits::FileFormatHandler;

/// Trait for detecting file formats before decoding.
///
/// Use this trait for:
/// - **CLI tools**: Processing unknown file types provided by users
/// - **Batch utilities**: That need to handle mixed file types
///
/// ***Important***: Remember to be careful and perform the necessary safety validation
/// (buffer sizes, bounds checking, etc.) to prevent out-of-range reads.
pub trait FileFormatDetection: FileFormatHandler {
    /// Check if this handler can process the input data.
    ///
    /// # Parameters
    ///
    /// - `input`: The input file data to analyze
    /// - `file_extension`: Lowercase extension of the input file without the leading dot,
    ///   if known. Handlers should reject extensions absent from
    ///   [`supported_extensions`](Self::supported_extensions).
    ///
    /// # Returns
    ///
    /// `true` if this handler can process the input data, `false` otherwise
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool;

    /// Get the list of file extensions supported by this handler.
    ///
    /// # Returns
    ///
    /// A slice of supported file extensions (lowercase, without leading dot)
    /// An empty string in the slice indicates all extensions are supported.
    fn supported_extensions(&self) -> &[&str];
}
