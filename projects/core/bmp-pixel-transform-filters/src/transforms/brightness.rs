use super::scale::{darken_channel, lighten_channel};
use bmp_pixel_transform_common::Raster;

/// Lightens every channel: `255 - (255 - channel) * scaling_factor`, truncated toward zero.
///
/// A factor in `[0, 1]` keeps channels in range; `0.0` turns the image white and `1.0`
/// leaves it unchanged. Other factors are applied as-is and may push channels out of
/// `0..=255`.
pub fn lighten(raster: &Raster, scaling_factor: f64) -> Raster {
    raster
        .clone()
        .map_pixels(|c| c.map_channels(|v| lighten_channel(v, scaling_factor)))
}

/// Darkens every channel: `channel * scaling_factor`, truncated toward zero.
///
/// A factor in `[0, 1]` keeps channels in range; `0.0` turns the image black and `1.0`
/// leaves it unchanged. Other factors are applied as-is.
pub fn darken(raster: &Raster, scaling_factor: f64) -> Raster {
    raster
        .clone()
        .map_pixels(|c| c.map_channels(|v| darken_channel(v, scaling_factor)))
}
