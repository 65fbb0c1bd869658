//! Common test imports and utilities for filter tests
#![allow(unused_imports)]

pub use bmp_pixel_transform_common::{ChannelPolicy, Color, Raster};
pub use core::num::NonZeroUsize;
pub use rstest::rstest;

/// Builds a raster from rows of `(r, g, b)` tuples, top row first.
pub fn raster_from_rgb(rows: &[&[(i32, i32, i32)]]) -> Raster {
    Raster::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|&(r, g, b)| Color::new(r, g, b)).collect())
            .collect(),
    )
    .expect("test raster must be rectangular and non-empty")
}

/// Builds a `width` x `height` raster where every pixel encodes its own position,
/// so geometric transforms can be checked pixel by pixel.
pub fn coordinate_raster(width: usize, height: usize) -> Raster {
    Raster::from_fn(
        NonZeroUsize::new(width).unwrap(),
        NonZeroUsize::new(height).unwrap(),
        |row, col| Color::new(row as i32, col as i32, (row * width + col) as i32),
    )
}

/// Builds a raster holding a spread of in-range colours.
pub fn gradient_raster(width: usize, height: usize) -> Raster {
    Raster::from_fn(
        NonZeroUsize::new(width).unwrap(),
        NonZeroUsize::new(height).unwrap(),
        |row, col| {
            Color::new(
                ((row * 37 + col * 11) % 256) as i32,
                ((row * 5 + col * 53) % 256) as i32,
                ((row * 91 + col * 7 + 13) % 256) as i32,
            )
        },
    )
}

/// Shorthand for a non-zero scale in tests.
pub fn nz(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).unwrap()
}
