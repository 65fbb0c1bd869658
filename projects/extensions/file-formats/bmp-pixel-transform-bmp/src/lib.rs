#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[cfg(test)]
pub mod test_prelude;

pub mod bmp;
pub mod handler;

// Re-export the BMP handler for convenient access
pub use handler::BmpHandler;
