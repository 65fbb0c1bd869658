/// Header layout constants.
pub mod constants;

/// Determine if a file is a BMP file.
pub mod likely_bmp;

/// Read and validate the header of a BMP file.
pub mod parse_bmp;

/// Decode the pixel array of a BMP file into a raster.
pub mod decode_bmp;

/// Encode a raster as a 24-bit BMP file.
pub mod encode_bmp;

pub use decode_bmp::*;
pub use encode_bmp::*;
pub use likely_bmp::*;
pub use parse_bmp::*;
