//! File I/O operations for decode/filter/encode pipelines.
//!
//! This module provides memory-mapped file operations using `lightweight-mmap`.

mod error;
pub use error::*;

mod lightweight_mmap_impl;

// Public API lives in there.
// If adding alternative implementation, you need to swap it out.
pub use lightweight_mmap_impl::*;

use std::path::Path;

/// Extracts the file extension from a path and converts it to lowercase.
///
/// # Arguments
///
/// * `path` - The file path to extract the extension from
///
/// # Returns
///
/// * `Some(extension)` - The lowercase extension string without leading dot
/// * `None` - If the path has no extension
pub fn extract_lowercase_extension(path: &Path) -> Option<String> {
    path.extension()?.to_str().map(|s| s.to_lowercase())
}
