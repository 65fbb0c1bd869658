//! Common test imports and utilities for BMP extension tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

pub use bmp_pixel_transform_common::{Color, Raster};
pub use core::num::NonZeroUsize;

// Common BMP test data helpers
use crate::bmp::constants::*;
use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};

/// Creates a BMP file with a 54-byte header followed by `pixel_data`.
///
/// The stated file size matches the returned buffer and the pixel array starts at 54.
/// `pixel_data` is copied verbatim, so it must already be bottom-up, BGR(A) and padded.
pub fn create_bmp_with_header(
    width: i32,
    height: i32,
    bits_per_pixel: u16,
    pixel_data: &[u8],
) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_SIZE + pixel_data.len()];
    data[..2].copy_from_slice(&BMP_MAGIC);
    data[HEADER_SIZE..].copy_from_slice(pixel_data);

    let file_size = data.len() as u32;
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(file_size, FILE_SIZE_OFFSET as isize);
        writer.write_u32_at(HEADER_SIZE as u32, DATA_OFFSET_OFFSET as isize);
        writer.write_u32_at(INFO_HEADER_SIZE as u32, INFO_HEADER_SIZE_OFFSET as isize);
        writer.write_u32_at(width as u32, WIDTH_OFFSET as isize);
        writer.write_u32_at(height as u32, HEIGHT_OFFSET as isize);
        writer.write_u16_at(1, PLANES_OFFSET as isize);
        writer.write_u16_at(bits_per_pixel, BITS_PER_PIXEL_OFFSET as isize);
        writer.write_u32_at(pixel_data.len() as u32, IMAGE_SIZE_OFFSET as isize);
    }
    data
}

/// Overwrites the file size stated in the header.
pub fn set_declared_file_size(data: &mut [u8], file_size: u32) {
    assert!(data.len() >= HEADER_SIZE);
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(file_size, FILE_SIZE_OFFSET as isize) };
}

/// Overwrites the pixel array offset stated in the header.
pub fn set_data_offset(data: &mut [u8], offset: u32) {
    assert!(data.len() >= HEADER_SIZE);
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(offset, DATA_OFFSET_OFFSET as isize) };
}

/// Reads a little-endian `u32` at `offset`.
pub fn read_u32(data: &[u8], offset: usize) -> u32 {
    assert!(data.len() >= offset + 4);
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe { reader.read_u32_at(offset as isize) }
}

/// Reads a little-endian `u16` at `offset`.
pub fn read_u16(data: &[u8], offset: usize) -> u16 {
    assert!(data.len() >= offset + 2);
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe { reader.read_u16_at(offset as isize) }
}

/// Builds a raster from rows of `(r, g, b)` tuples, top row first.
pub fn raster_from_rgb(rows: &[&[(i32, i32, i32)]]) -> Raster {
    Raster::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|&(r, g, b)| Color::new(r, g, b)).collect())
            .collect(),
    )
    .expect("test raster must be rectangular and non-empty")
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
