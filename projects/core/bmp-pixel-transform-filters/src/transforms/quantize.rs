use bmp_pixel_transform_common::{Color, Raster};

/// Pixels whose channel total is at least this value become white.
pub const QUANTIZE_WHITE_FROM: i32 = 550;

/// Pixels whose channel total is at most this value become black.
pub const QUANTIZE_BLACK_AT_MOST: i32 = 150;

/// Reduces the palette to black, white, red, green and blue.
///
/// With `total = r + g + b`:
/// - `total >= 550`: white
/// - `total <= 150`: black
/// - otherwise only the dominant channel is kept, set to 255. Ties go to the first
///   maximal channel in red, green, blue order, so exactly one channel is ever lit.
///   Tied channels are never lit together: `(200, 200, 0)` becomes red, not yellow.
pub fn quantize_primaries(raster: &Raster) -> Raster {
    raster.clone().map_pixels(quantize_color)
}

#[inline]
fn quantize_color(color: Color) -> Color {
    let total = color.total();
    if total >= i64::from(QUANTIZE_WHITE_FROM) {
        return Color::WHITE;
    }
    if total <= i64::from(QUANTIZE_BLACK_AT_MOST) {
        return Color::BLACK;
    }

    let max = color.r.max(color.g).max(color.b);
    if color.r == max {
        Color::new(255, 0, 0)
    } else if color.g == max {
        Color::new(0, 255, 0)
    } else {
        Color::new(0, 0, 255)
    }
}
