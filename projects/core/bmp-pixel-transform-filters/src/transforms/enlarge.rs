use bmp_pixel_transform_common::Raster;
use core::num::NonZeroUsize;

/// Largest scale accepted when parsing an `enlarge` filter.
///
/// Any raster that fits a BMP header (`i32` width and height) can be enlarged by this
/// much on a 64-bit target without its dimensions overflowing `usize`.
pub const MAX_ENLARGE_SCALE: usize = 1 << 16;

/// Enlarges the raster by nearest-neighbour upsampling.
///
/// An `H x W` raster becomes `(H * y_scale) x (W * x_scale)`. Output pixel `(row, col)`
/// copies input pixel `(row / y_scale, col / x_scale)`; no interpolation is performed.
///
/// # Panics
///
/// If the enlarged width or height overflows `usize`. Parsed filters never do this for
/// decodable rasters, since their scales are at most [`MAX_ENLARGE_SCALE`].
pub fn enlarge(raster: &Raster, x_scale: NonZeroUsize, y_scale: NonZeroUsize) -> Raster {
    let width = raster
        .width_nonzero()
        .checked_mul(x_scale)
        .unwrap_or_else(|| panic!("enlarged width overflows usize"));
    let height = raster
        .height_nonzero()
        .checked_mul(y_scale)
        .unwrap_or_else(|| panic!("enlarged height overflows usize"));

    let (x_scale, y_scale) = (x_scale.get(), y_scale.get());
    Raster::from_fn(width, height, |row, col| {
        raster.pixel(row / y_scale, col / x_scale)
    })
}
