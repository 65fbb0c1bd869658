use super::scale::{darken_channel, lighten_channel};
use bmp_pixel_transform_common::Raster;

/// Pixels whose channel average is at least this value are lightened.
pub const CLARENDON_LIGHT_FROM: i32 = 170;

/// Pixels whose channel average is below this value are darkened.
pub const CLARENDON_DARK_BELOW: i32 = 90;

/// Applies a Clarendon-style contrast boost.
///
/// For each pixel, `avg = (r + g + b) / 3` (integer division):
/// - `avg >= 170`: every channel becomes `255 - (255 - channel) * scaling_factor`
/// - `avg < 90`: every channel becomes `channel * scaling_factor`
/// - otherwise the pixel is left unchanged
///
/// Results are truncated toward zero and not clamped.
pub fn clarendon(raster: &Raster, scaling_factor: f64) -> Raster {
    raster.clone().map_pixels(|color| {
        let average = color.average();
        if average >= CLARENDON_LIGHT_FROM {
            color.map_channels(|v| lighten_channel(v, scaling_factor))
        } else if average < CLARENDON_DARK_BELOW {
            color.map_channels(|v| darken_channel(v, scaling_factor))
        } else {
            color
        }
    })
}
