//! Common test imports and utilities for the common crate's tests.
#![allow(unused_imports)]

pub use crate::color::Color;
pub use crate::raster::Raster;
pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;
