/// Lowest value a channel may hold once clamped.
pub const CHANNEL_MIN: i32 = 0;

/// Highest value a channel may hold once clamped.
pub const CHANNEL_MAX: i32 = 255;

/// A single red/green/blue sample of a [`Raster`].
///
/// Channels are stored as `i32` rather than `u8`. The scaling transforms truncate their
/// real-valued results toward zero but do not clamp them, so a channel may temporarily
/// sit outside `0..=255` (e.g. lightening with a factor above `1.0`). Use [`Color::clamped`]
/// to bring a colour back into range.
///
/// [`Raster`]: crate::raster::Raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component (0-255 when in range)
    pub r: i32,
    /// Green component (0-255 when in range)
    pub g: i32,
    /// Blue component (0-255 when in range)
    pub b: i32,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Constructs a new [`Color`] from the specified red, green and blue components.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmp_pixel_transform_common::color::Color;
    ///
    /// let pixel = Color::new(255, 0, 0);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// ```
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Constructs a [`Color`] where all three channels hold `value`.
    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Constructs a [`Color`] from bytes stored in blue, green, red order,
    /// which is how the BMP pixel array lays them out.
    #[inline]
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self::new(bgr[2] as i32, bgr[1] as i32, bgr[0] as i32)
    }

    /// Returns the channels as bytes in blue, green, red order.
    ///
    /// Channels outside `0..=255` are clamped, never wrapped.
    #[inline]
    pub fn to_bgr(self) -> [u8; 3] {
        let c = self.clamped();
        [c.b as u8, c.g as u8, c.r as u8]
    }

    /// Sum of the three channels.
    ///
    /// Widened to `i64` since unclamped channels may each be anywhere in `i32`.
    #[inline]
    pub const fn total(self) -> i64 {
        self.r as i64 + self.g as i64 + self.b as i64
    }

    /// Mean of the three channels, using integer (truncating) division.
    #[inline]
    pub const fn average(self) -> i32 {
        // The mean of three `i32` values always fits in `i32`.
        (self.total() / 3) as i32
    }

    /// Applies `f` to each channel independently.
    #[inline]
    pub fn map_channels(self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Returns this colour with every channel clamped into `0..=255`.
    #[inline]
    pub fn clamped(self) -> Self {
        self.map_channels(|c| c.clamp(CHANNEL_MIN, CHANNEL_MAX))
    }

    /// Returns `true` if every channel lies within `0..=255`.
    #[inline]
    pub fn is_in_range(self) -> bool {
        (CHANNEL_MIN..=CHANNEL_MAX).contains(&self.r)
            && (CHANNEL_MIN..=CHANNEL_MAX).contains(&self.g)
            && (CHANNEL_MIN..=CHANNEL_MAX).contains(&self.b)
    }
}
