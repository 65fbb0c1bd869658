#![no_main]

// Applies a filter to an arbitrary small raster and checks the output dimensions.

use bmp_pixel_transform_common::{Color, Raster};
use bmp_pixel_transform_filters::Filter;
use core::num::NonZeroUsize;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub filter: u8,
    pub factor: i16,
    pub turns: i32,
    pub x_scale: u8,
    pub y_scale: u8,
    pub seed: u32,
}

fuzz_target!(|input: Input| {
    let width = usize::from(input.width % 32) + 1;
    let height = usize::from(input.height % 32) + 1;
    let x_scale = usize::from(input.x_scale % 4) + 1;
    let y_scale = usize::from(input.y_scale % 4) + 1;
    let scaling_factor = f64::from(input.factor) / 100.0;

    let filter = match input.filter % 10 {
        0 => Filter::Vignette,
        1 => Filter::Clarendon { scaling_factor },
        2 => Filter::Grayscale,
        3 => Filter::Rotate90,
        4 => Filter::Rotate { turns: input.turns },
        5 => Filter::Enlarge {
            x_scale: NonZeroUsize::new(x_scale).unwrap(),
            y_scale: NonZeroUsize::new(y_scale).unwrap(),
        },
        6 => Filter::HighContrast,
        7 => Filter::Lighten { scaling_factor },
        8 => Filter::Darken { scaling_factor },
        _ => Filter::QuantizePrimaries,
    };

    let raster = Raster::from_fn(
        NonZeroUsize::new(width).unwrap(),
        NonZeroUsize::new(height).unwrap(),
        |row, col| {
            let v = input.seed.wrapping_mul((row * 31 + col) as u32 + 1);
            Color::new((v & 0xFF) as i32, ((v >> 8) & 0xFF) as i32, ((v >> 16) & 0xFF) as i32)
        },
    );

    let output = filter.apply(&raster);
    let expected = match filter {
        Filter::Rotate90 => (height, width),
        Filter::Rotate { turns } if turns.rem_euclid(4) % 2 == 1 => (height, width),
        Filter::Enlarge { .. } => (width * x_scale, height * y_scale),
        _ => (width, height),
    };
    assert_eq!((output.width(), output.height()), expected);
});
