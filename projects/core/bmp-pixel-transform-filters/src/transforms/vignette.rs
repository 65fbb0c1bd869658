use bmp_pixel_transform_common::Raster;

/// Darkens pixels in proportion to their distance from the image centre.
///
/// The centre is `(height / 2, width / 2)` computed with integer division, so for even
/// dimensions it sits on a pixel rather than between two. Each pixel is scaled by
/// `(height - distance) / height` where `distance` is the Euclidean distance to that
/// centre, then truncated toward zero.
///
/// On images much wider than they are tall the factor turns negative near the left and
/// right edges; the negative channels are kept as-is.
pub fn vignette(raster: &Raster) -> Raster {
    let height = raster.height() as f64;
    let center_row = (raster.height() / 2) as f64;
    let center_col = (raster.width() / 2) as f64;

    Raster::from_fn(raster.width_nonzero(), raster.height_nonzero(), |row, col| {
        let d_row = row as f64 - center_row;
        let d_col = col as f64 - center_col;
        let distance = (d_col * d_col + d_row * d_row).sqrt();
        let factor = (height - distance) / height;

        raster
            .pixel(row, col)
            .map_channels(|v| (f64::from(v) * factor) as i32)
    })
}
