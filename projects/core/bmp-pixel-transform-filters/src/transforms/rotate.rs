use bmp_pixel_transform_common::Raster;

/// Rotates the raster 90° clockwise.
///
/// An `H x W` raster becomes `W x H`. The pixel at `(row, col)` moves to
/// `(col, H - 1 - row)`.
pub fn rotate_90(raster: &Raster) -> Raster {
    let old_height = raster.height();

    // Output (row, col) reads input (old_height - 1 - col, row).
    Raster::from_fn(raster.height_nonzero(), raster.width_nonzero(), |row, col| {
        raster.pixel(old_height - 1 - col, row)
    })
}

/// Rotates the raster clockwise by `turns` quarter turns.
///
/// [`rotate_90`] is applied `turns mod 4` times, where the modulo is always non-negative:
/// `-1` is three clockwise quarter turns, `4` and `0` leave the raster unchanged.
pub fn rotate_quarter_turns(raster: &Raster, turns: i32) -> Raster {
    let mut result = raster.clone();
    for _ in 0..turns.rem_euclid(4) {
        result = rotate_90(&result);
    }
    result
}
