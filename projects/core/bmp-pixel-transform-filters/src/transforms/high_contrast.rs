use bmp_pixel_transform_common::{Color, Raster};

/// Pixels whose channel average is at least this value become white (`255 / 2`).
pub const HIGH_CONTRAST_THRESHOLD: i32 = 255 / 2;

/// Converts to pure black and white.
///
/// A pixel with `(r + g + b) / 3 >= 127` becomes white, anything darker becomes black.
pub fn high_contrast(raster: &Raster) -> Raster {
    raster.clone().map_pixels(|color| {
        if color.average() >= HIGH_CONTRAST_THRESHOLD {
            Color::WHITE
        } else {
            Color::BLACK
        }
    })
}
