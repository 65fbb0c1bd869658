//! Per-channel scaling shared by the brightness transforms.
//!
//! Results are truncated toward zero (`as i32`), never rounded and never clamped.

/// Moves `channel` toward 255: `255 - (255 - channel) * factor`.
#[inline(always)]
pub(crate) fn lighten_channel(channel: i32, factor: f64) -> i32 {
    (255.0 - (255.0 - f64::from(channel)) * factor) as i32
}

/// Scales `channel` toward 0: `channel * factor`.
#[inline(always)]
pub(crate) fn darken_channel(channel: i32, factor: f64) -> i32 {
    (f64::from(channel) * factor) as i32
}
