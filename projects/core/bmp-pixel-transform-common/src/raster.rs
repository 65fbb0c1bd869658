//! # Raster
//!
//! This module provides the [`Raster`] structure: an in-memory, rectangular grid of
//! [`Color`] samples decoded from (or destined for) a BMP container.
//!
//! ## Memory Layout
//!
//! Pixels are stored in a single buffer in row-major order, and row 0 is the visual
//! top of the image (the BMP container itself stores rows bottom-up; the codec flips them).
//!
//! ```text
//! row 0: [ 0] [ 1] [ 2]      <- top of the image
//! row 1: [ 3] [ 4] [ 5]
//! ```
//!
//! ## Invariants
//!
//! - `width >= 1` and `height >= 1`
//! - every row holds exactly `width` pixels (`pixels.len() == width * height`)
//!
//! A [`Raster`] is not mutated once built. Transforms borrow their input and return a fresh
//! raster, since several of them (rotation, enlargement) change its dimensions.

use crate::color::Color;
use crate::error::RasterError;
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use core::slice::ChunksExact;

/// A rectangular grid of [`Color`] values addressed by `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Raster {
    /// Creates a raster from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`RasterError::EmptyDimensions`] if `width` or `height` is zero.
    /// - [`RasterError::PixelCountMismatch`] if `pixels.len() != width * height`, or if
    ///   `width * height` overflows.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions { width, height });
        }

        match width.checked_mul(height) {
            Some(expected) if expected == pixels.len() => {}
            // An overflowing pixel count is reported as `usize::MAX`.
            expected => {
                return Err(RasterError::PixelCountMismatch {
                    expected: expected.unwrap_or(usize::MAX),
                    actual: pixels.len(),
                })
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a raster from a list of rows, top row first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmp_pixel_transform_common::{Color, Raster};
    ///
    /// let raster = Raster::from_rows(vec![
    ///     vec![Color::BLACK, Color::WHITE],
    ///     vec![Color::WHITE, Color::BLACK],
    /// ])
    /// .unwrap();
    /// assert_eq!(raster.width(), 2);
    /// assert_eq!(raster.height(), 2);
    /// assert_eq!(raster.pixel(1, 0), Color::WHITE);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RasterError::EmptyDimensions`] if there are no rows or the first row is empty.
    /// - [`RasterError::RaggedRow`] if any row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, RasterError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions { width, height });
        }

        let mut pixels = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(RasterError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a raster by evaluating `f(row, column)` for every pixel, top row first.
    ///
    /// Dimensions are non-zero by construction, so this cannot fail.
    pub fn from_fn(
        width: NonZeroUsize,
        height: NonZeroUsize,
        mut f: impl FnMut(usize, usize) -> Color,
    ) -> Self {
        let (width, height) = (width.get(), height.get());
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Creates a raster where every pixel is `color`.
    ///
    /// # Errors
    ///
    /// - [`RasterError::EmptyDimensions`] if `width` or `height` is zero.
    /// - [`RasterError::PixelCountMismatch`] if `width * height` overflows.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self, RasterError> {
        match width.checked_mul(height) {
            Some(count) => Self::new(width, height, alloc::vec![color; count]),
            None => Self::new(width, height, Vec::new()),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width as a [`NonZeroUsize`]; always valid given the raster invariants.
    #[inline]
    pub fn width_nonzero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.width).unwrap_or(NonZeroUsize::MIN)
    }

    /// Height as a [`NonZeroUsize`]; always valid given the raster invariants.
    #[inline]
    pub fn height_nonzero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.height).unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the pixel at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `row >= height` or `col >= width`, like slice indexing.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Color {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[row * self.width + col]
    }

    /// Returns row `index` (0 = top), or `None` if out of bounds.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[Color]> {
        let start = index.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        self.pixels.get(start..end)
    }

    /// Iterates over rows from top to bottom.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, Color> {
        self.pixels.chunks_exact(self.width)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Consumes the raster, returning its row-major pixel buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Returns a raster of the same dimensions where each pixel is `f(pixel)`.
    ///
    /// Consumes `self` so the buffer is reused rather than reallocated.
    pub fn map_pixels(mut self, mut f: impl FnMut(Color) -> Color) -> Self {
        for pixel in &mut self.pixels {
            *pixel = f(*pixel);
        }
        self
    }
}
