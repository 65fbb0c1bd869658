use bmp_pixel_transform_bmp::BmpHandler;

/// Returns an array of all supported file format handlers.
///
/// This function provides a centralized way to access all available
/// file format handlers, avoiding the need to hardcode handler arrays
/// throughout the codebase.
pub fn all_handlers() -> [BmpHandler; 1] {
    [BmpHandler]
}
