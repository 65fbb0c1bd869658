//! Common test imports and utilities for API tests
#![allow(unused_imports)]

pub use crate::error::{FormatHandlerError, FormatHandlerResult};
pub use crate::traits::{FileFormatDetection, FileFormatHandler};
pub use bmp_pixel_transform_common::{ChannelPolicy, Color, Raster};
pub use bmp_pixel_transform_filters::Filter;
pub use core::num::NonZeroUsize;
pub use rstest::rstest;

/// Magic for [`MockHandler`] containers.
pub const MOCK_MAGIC: [u8; 2] = *b"RW";

/// Header size for [`MockHandler`] containers: magic, width, height.
pub const MOCK_HEADER_SIZE: usize = 4;

/// A trivial container format used to test the API without a real codec.
///
/// Layout: `b"RW"`, width as `u8`, height as `u8`, then `r, g, b` bytes per pixel,
/// top row first.
pub struct MockHandler;

impl FileFormatHandler for MockHandler {
    fn decode(&self, input: &[u8]) -> FormatHandlerResult<Raster> {
        if input.len() < MOCK_HEADER_SIZE {
            return Err(FormatHandlerError::InputTooShort {
                required: MOCK_HEADER_SIZE,
                actual: input.len(),
            });
        }

        let (width, height) = (input[2] as usize, input[3] as usize);
        let expected = MOCK_HEADER_SIZE + width * height * 3;
        if input.len() != expected {
            return Err(FormatHandlerError::MalformedContainer {
                declared: expected as u64,
                expected: expected as u64,
                actual: input.len() as u64,
            });
        }

        let pixels = input[MOCK_HEADER_SIZE..]
            .chunks_exact(3)
            .map(|p| Color::new(p[0].into(), p[1].into(), p[2].into()))
            .collect();
        Ok(Raster::new(width, height, pixels)?)
    }

    fn encoded_len(&self, raster: &Raster) -> FormatHandlerResult<usize> {
        if raster.width() > u8::MAX as usize || raster.height() > u8::MAX as usize {
            return Err(FormatHandlerError::DimensionsTooLarge {
                width: raster.width(),
                height: raster.height(),
            });
        }
        Ok(MOCK_HEADER_SIZE + raster.pixels().len() * 3)
    }

    fn encode_into(&self, raster: &Raster, output: &mut [u8]) -> FormatHandlerResult<usize> {
        let required = self.encoded_len(raster)?;
        if output.len() < required {
            return Err(FormatHandlerError::OutputBufferTooSmall {
                required,
                actual: output.len(),
            });
        }

        output[..2].copy_from_slice(&MOCK_MAGIC);
        output[2] = raster.width() as u8;
        output[3] = raster.height() as u8;
        for (dst, color) in output[MOCK_HEADER_SIZE..required]
            .chunks_exact_mut(3)
            .zip(raster.pixels())
        {
            let [b, g, r] = color.to_bgr();
            dst.copy_from_slice(&[r, g, b]);
        }
        Ok(required)
    }
}

impl FileFormatDetection for MockHandler {
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        if let Some(extension) = file_extension {
            if !self.supported_extensions().contains(&extension) {
                return false;
            }
        }
        input.len() >= MOCK_HEADER_SIZE && input[..2] == MOCK_MAGIC
    }

    fn supported_extensions(&self) -> &[&str] {
        &["raw"]
    }
}

/// A 3 wide, 2 tall raster of distinct in-range colours.
pub fn sample_raster() -> Raster {
    Raster::from_rows(vec![
        vec![
            Color::new(10, 20, 30),
            Color::new(40, 50, 60),
            Color::new(70, 80, 90),
        ],
        vec![
            Color::new(200, 0, 0),
            Color::new(0, 200, 0),
            Color::new(0, 0, 200),
        ],
    ])
    .unwrap()
}
