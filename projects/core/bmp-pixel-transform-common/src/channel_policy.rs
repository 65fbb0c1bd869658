use crate::raster::Raster;

/// Decides what happens to channels a transform pushed outside `0..=255`.
///
/// The transform catalog truncates toward zero but does not clamp, so for example
/// darkening with a negative factor produces negative channels. [`ChannelPolicy::Unclamped`]
/// keeps those values as produced; [`ChannelPolicy::Clamped`] is the corrected variant which
/// clamps every channel into range after the transform.
///
/// Regardless of policy, the BMP encoder clamps when it serializes a channel to a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelPolicy {
    /// Keep out-of-range channel values verbatim.
    #[default]
    Unclamped,
    /// Clamp every channel into `0..=255`.
    Clamped,
}

impl ChannelPolicy {
    /// Applies the policy to a raster, consuming it.
    pub fn apply(self, raster: Raster) -> Raster {
        match self {
            ChannelPolicy::Unclamped => raster,
            ChannelPolicy::Clamped => raster.map_pixels(|color| color.clamped()),
        }
    }
}
