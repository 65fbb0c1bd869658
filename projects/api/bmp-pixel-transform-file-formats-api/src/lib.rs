#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]

// Core modules
pub mod api;
pub mod error;
pub mod pipeline;
pub mod traits;

#[cfg(feature = "file-io")]
pub mod file_io;

// Re-export key types
pub use error::{FormatHandlerError, FormatHandlerResult, TransformError, TransformResult};
pub use pipeline::TransformPipeline;
pub use traits::{FileFormatDetection, FileFormatHandler};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};

// Re-export convenience functions
pub use api::{decode_with_multiple_handlers, transform_slice, transform_slice_with_multiple_handlers};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
