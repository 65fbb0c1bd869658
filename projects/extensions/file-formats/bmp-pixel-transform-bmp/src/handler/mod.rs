//! BMP format handler implementation.

mod file_format_detection;
mod file_format_handler;

/// Handler for BMP file format.
///
/// Decodes uncompressed BMP files with at least 3 bytes per pixel and always encodes
/// 24-bit uncompressed BMP files.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpHandler;
