//! An ordered chain of filters applied to a decoded raster.

use crate::error::TransformResult;
use crate::traits::FileFormatHandler;
use bmp_pixel_transform_common::{ChannelPolicy, Raster};
use bmp_pixel_transform_filters::Filter;
use log::debug;

/// Filters to run, in order, plus the [`ChannelPolicy`] applied after each of them.
///
/// # Example
///
/// ```
/// use bmp_pixel_transform_common::{ChannelPolicy, Color, Raster};
/// use bmp_pixel_transform_file_formats_api::TransformPipeline;
/// use bmp_pixel_transform_filters::Filter;
///
/// let pipeline = TransformPipeline::new()
///     .with_filter(Filter::Lighten { scaling_factor: -1.0 })
///     .channel_policy(ChannelPolicy::Clamped);
///
/// let raster = Raster::filled(2, 2, Color::splat(100)).unwrap();
/// let result = pipeline.apply(raster);
/// assert_eq!(result.pixel(0, 0), Color::splat(255));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformPipeline {
    filters: Vec<Filter>,
    channel_policy: ChannelPolicy,
}

impl TransformPipeline {
    /// Creates an empty pipeline with [`ChannelPolicy::Unclamped`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter to the end of the chain.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Appends several filters to the end of the chain.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Sets what happens to out-of-range channels after each filter.
    pub fn channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }

    /// The filters, in the order they run.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The policy applied after each filter.
    pub fn policy(&self) -> ChannelPolicy {
        self.channel_policy
    }

    /// Returns `true` if the pipeline has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every filter over `raster` in order.
    pub fn apply(&self, raster: Raster) -> Raster {
        self.filters.iter().fold(raster, |raster, filter| {
            self.channel_policy.apply(filter.apply(&raster))
        })
    }

    /// Decodes `input` with `handler`, runs the pipeline and encodes the result.
    ///
    /// See [`transform_slice`](crate::api::transform_slice).
    pub fn transform_slice<H: FileFormatHandler + ?Sized>(
        &self,
        handler: &H,
        input: &[u8],
    ) -> TransformResult<Vec<u8>> {
        debug!(
            "Running {} filter(s) with {:?} policy over {} byte input",
            self.filters.len(),
            self.channel_policy,
            input.len()
        );
        crate::api::transform_slice(handler, input, self)
    }
}
