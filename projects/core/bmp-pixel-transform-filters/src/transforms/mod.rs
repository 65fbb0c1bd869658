//! The transform catalog.
//!
//! Each transform is a pure function: it borrows a [`Raster`] and returns a new one.
//! Parameters are assumed to be validated by the caller.
//!
//! [`Raster`]: bmp_pixel_transform_common::Raster

mod brightness;
mod clarendon;
mod enlarge;
mod grayscale;
mod high_contrast;
mod quantize;
mod rotate;
pub(crate) mod scale;
mod vignette;

pub use brightness::{darken, lighten};
pub use clarendon::{clarendon, CLARENDON_DARK_BELOW, CLARENDON_LIGHT_FROM};
pub use enlarge::{enlarge, MAX_ENLARGE_SCALE};
pub use grayscale::grayscale;
pub use high_contrast::{high_contrast, HIGH_CONTRAST_THRESHOLD};
pub use quantize::{quantize_primaries, QUANTIZE_BLACK_AT_MOST, QUANTIZE_WHITE_FROM};
pub use rotate::{rotate_90, rotate_quarter_turns};
pub use vignette::vignette;
