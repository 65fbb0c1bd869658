#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod channel_policy;
pub mod color;
pub mod error;
pub mod raster;

pub use channel_policy::ChannelPolicy;
pub use color::Color;
pub use error::RasterError;
pub use raster::Raster;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
