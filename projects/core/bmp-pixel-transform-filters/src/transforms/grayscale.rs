use bmp_pixel_transform_common::{Color, Raster};

/// Sets all three channels of every pixel to `(r + g + b) / 3` (integer division).
pub fn grayscale(raster: &Raster) -> Raster {
    raster
        .clone()
        .map_pixels(|color| Color::splat(color.average()))
}
