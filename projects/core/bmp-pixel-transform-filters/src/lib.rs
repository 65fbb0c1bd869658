#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub(crate) mod transforms;

pub use error::FilterParseError;
pub use filter::{Filter, FilterKind};
pub use transforms::*;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
