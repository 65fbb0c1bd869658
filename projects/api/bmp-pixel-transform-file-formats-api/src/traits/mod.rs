//! Core traits for file format handling.
//!
//! ## [`FileFormatHandler`]
//!
//! Converts between a container's bytes and a [`Raster`]. Contains no detection logic;
//! use it directly when the format is already known.
//!
//! ## [`FileFormatDetection`]
//!
//! Extends [`FileFormatHandler`] with the ability to recognise input. Use it for CLI tools
//! and other callers that receive files of unknown type.
//!
//! ```ignore
//! // CLI tool processing unknown input files
//! for handler in all_handlers() {
//!     if handler.can_handle(&input, Some("bmp")) {
//!         let raster = handler.decode(&input)?;
//!         break;
//!     }
//! }
//! ```
//!
//! [`Raster`]: bmp_pixel_transform_common::Raster

pub(crate) mod file_format_detection;
pub(crate) mod file_format_handler;

// Re-export the main traits for convenience
pub use file_format_detection::*;
pub use file_format_handler::*;
