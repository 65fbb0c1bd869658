#![no_main]

// Encoding any in-range raster and decoding it again must reproduce the raster exactly.

use bmp_pixel_transform_bmp::bmp::{decode_bmp, encode_bmp};
use bmp_pixel_transform_common::{Color, Raster};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub width: u8,
    pub pixels: Vec<[u8; 3]>,
}

fuzz_target!(|image: Image| {
    let width = usize::from(image.width.max(1));
    let height = image.pixels.len() / width;
    if height == 0 {
        return;
    }

    let pixels = image.pixels[..width * height]
        .iter()
        .map(|&[r, g, b]| Color::new(r.into(), g.into(), b.into()))
        .collect();
    let raster = Raster::new(width, height, pixels).unwrap();

    let encoded = encode_bmp(&raster).unwrap();
    assert_eq!(decode_bmp(&encoded).unwrap(), raster);
});
