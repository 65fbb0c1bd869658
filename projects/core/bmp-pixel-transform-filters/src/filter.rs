//! A transform together with its parameters.
//!
//! [`Filter`] lets callers (the pipeline, the CLI) carry a chosen transform around as a value
//! and run it later with [`Filter::apply`]. Filters can be parsed from short strings:
//!
//! | String | Filter |
//! |--------|--------|
//! | `vignette` | [`Filter::Vignette`] |
//! | `clarendon:0.5` | [`Filter::Clarendon`] |
//! | `grayscale` | [`Filter::Grayscale`] |
//! | `rotate90` | [`Filter::Rotate90`] |
//! | `rotate:-1` | [`Filter::Rotate`] |
//! | `enlarge:2x3` | [`Filter::Enlarge`] (x scale 2, y scale 3) |
//! | `high-contrast` | [`Filter::HighContrast`] |
//! | `lighten:0.5` | [`Filter::Lighten`] |
//! | `darken:0.5` | [`Filter::Darken`] |
//! | `quantize` | [`Filter::QuantizePrimaries`] |

use crate::error::FilterParseError;
use crate::transforms::*;
use bmp_pixel_transform_common::Raster;
use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use log::trace;

/// Identifies an entry of the transform catalog, without parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum FilterKind {
    /// See [`vignette`].
    Vignette,
    /// See [`clarendon`].
    Clarendon,
    /// See [`grayscale`].
    Grayscale,
    /// See [`rotate_90`].
    Rotate90,
    /// See [`rotate_quarter_turns`].
    Rotate,
    /// See [`enlarge`].
    Enlarge,
    /// See [`high_contrast`].
    HighContrast,
    /// See [`lighten`].
    Lighten,
    /// See [`darken`].
    Darken,
    /// See [`quantize_primaries`].
    QuantizePrimaries,
}

impl FilterKind {
    /// Name used when parsing a [`Filter`] from a string.
    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Vignette => "vignette",
            FilterKind::Clarendon => "clarendon",
            FilterKind::Grayscale => "grayscale",
            FilterKind::Rotate90 => "rotate90",
            FilterKind::Rotate => "rotate",
            FilterKind::Enlarge => "enlarge",
            FilterKind::HighContrast => "high-contrast",
            FilterKind::Lighten => "lighten",
            FilterKind::Darken => "darken",
            FilterKind::QuantizePrimaries => "quantize",
        }
    }

    /// Describes the parameter this filter expects, or `None` if it takes none.
    pub const fn parameter(self) -> Option<&'static str> {
        match self {
            FilterKind::Clarendon | FilterKind::Lighten | FilterKind::Darken => {
                Some("a finite scaling factor, e.g. 0.5")
            }
            FilterKind::Rotate => Some("an integer number of clockwise quarter turns"),
            FilterKind::Enlarge => Some("two integer scales from 1 to 65536 as XxY, e.g. 2x3"),
            FilterKind::Vignette
            | FilterKind::Grayscale
            | FilterKind::Rotate90
            | FilterKind::HighContrast
            | FilterKind::QuantizePrimaries => None,
        }
    }

    /// Returns `true` if the transform changes the raster's dimensions.
    pub const fn changes_dimensions(self) -> bool {
        matches!(
            self,
            FilterKind::Rotate90 | FilterKind::Rotate | FilterKind::Enlarge
        )
    }

    /// Looks up a kind by its [`name`](Self::name), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        FilterKind::all_values()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    fn valid_names() -> String {
        FilterKind::all_values()
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A transform from the catalog with its (already validated) parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Filter {
    /// Darken toward the edges.
    Vignette,
    /// Lighten bright pixels and darken dark ones.
    Clarendon {
        /// Factor applied to bright and dark pixels.
        scaling_factor: f64,
    },
    /// Average the channels.
    Grayscale,
    /// Rotate 90° clockwise.
    Rotate90,
    /// Rotate by a number of clockwise quarter turns.
    Rotate {
        /// Quarter turns; negative values rotate counter-clockwise.
        turns: i32,
    },
    /// Nearest-neighbour upscale.
    Enlarge {
        /// Horizontal scale.
        x_scale: NonZeroUsize,
        /// Vertical scale.
        y_scale: NonZeroUsize,
    },
    /// Pure black and white.
    HighContrast,
    /// Pull every channel toward 255.
    Lighten {
        /// Factor applied to the distance from 255.
        scaling_factor: f64,
    },
    /// Scale every channel toward 0.
    Darken {
        /// Factor applied to each channel.
        scaling_factor: f64,
    },
    /// Reduce to black, white, red, green and blue.
    QuantizePrimaries,
}

impl Filter {
    /// The catalog entry this filter runs.
    pub const fn kind(&self) -> FilterKind {
        match self {
            Filter::Vignette => FilterKind::Vignette,
            Filter::Clarendon { .. } => FilterKind::Clarendon,
            Filter::Grayscale => FilterKind::Grayscale,
            Filter::Rotate90 => FilterKind::Rotate90,
            Filter::Rotate { .. } => FilterKind::Rotate,
            Filter::Enlarge { .. } => FilterKind::Enlarge,
            Filter::HighContrast => FilterKind::HighContrast,
            Filter::Lighten { .. } => FilterKind::Lighten,
            Filter::Darken { .. } => FilterKind::Darken,
            Filter::QuantizePrimaries => FilterKind::QuantizePrimaries,
        }
    }

    /// Runs the transform, returning a new raster.
    pub fn apply(&self, raster: &Raster) -> Raster {
        trace!(
            "Applying {self} to {}x{} raster",
            raster.width(),
            raster.height()
        );

        match *self {
            Filter::Vignette => vignette(raster),
            Filter::Clarendon { scaling_factor } => clarendon(raster, scaling_factor),
            Filter::Grayscale => grayscale(raster),
            Filter::Rotate90 => rotate_90(raster),
            Filter::Rotate { turns } => rotate_quarter_turns(raster, turns),
            Filter::Enlarge { x_scale, y_scale } => enlarge(raster, x_scale, y_scale),
            Filter::HighContrast => high_contrast(raster),
            Filter::Lighten { scaling_factor } => lighten(raster, scaling_factor),
            Filter::Darken { scaling_factor } => darken(raster, scaling_factor),
            Filter::QuantizePrimaries => quantize_primaries(raster),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().name();
        match self {
            Filter::Clarendon { scaling_factor }
            | Filter::Lighten { scaling_factor }
            | Filter::Darken { scaling_factor } => write!(f, "{name}:{scaling_factor}"),
            Filter::Rotate { turns } => write!(f, "{name}:{turns}"),
            Filter::Enlarge { x_scale, y_scale } => write!(f, "{name}:{x_scale}x{y_scale}"),
            _ => f.write_str(name),
        }
    }
}

// Implement FromStr to allow parsing from command line arguments
impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once(':') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s.trim(), None),
        };

        let kind = FilterKind::from_name(name).ok_or_else(|| FilterParseError::UnknownFilter {
            name: name.to_string(),
            valid: FilterKind::valid_names(),
        })?;

        if let Some(filter) = parameterless(kind) {
            return match value {
                Some(value) => Err(FilterParseError::UnexpectedParameter {
                    filter: kind.name(),
                    value: value.to_string(),
                }),
                None => Ok(filter),
            };
        }

        let expected = kind.parameter().unwrap_or_default();

        let value = value.ok_or(FilterParseError::MissingParameter {
            filter: kind.name(),
            expected,
        })?;
        let invalid = || FilterParseError::InvalidParameter {
            filter: kind.name(),
            value: value.to_string(),
            expected,
        };

        match kind {
            FilterKind::Clarendon | FilterKind::Lighten | FilterKind::Darken => {
                let scaling_factor = value
                    .parse::<f64>()
                    .ok()
                    .filter(|factor| factor.is_finite())
                    .ok_or_else(invalid)?;
                Ok(match kind {
                    FilterKind::Clarendon => Filter::Clarendon { scaling_factor },
                    FilterKind::Lighten => Filter::Lighten { scaling_factor },
                    _ => Filter::Darken { scaling_factor },
                })
            }
            FilterKind::Rotate => {
                let turns = value.parse::<i32>().map_err(|_| invalid())?;
                Ok(Filter::Rotate { turns })
            }
            FilterKind::Enlarge => {
                let (x, y) = value
                    .split_once(['x', 'X'])
                    .ok_or_else(invalid)?;
                let parse_scale = |scale: &str| {
                    scale
                        .trim()
                        .parse::<NonZeroUsize>()
                        .ok()
                        .filter(|scale| scale.get() <= MAX_ENLARGE_SCALE)
                        .ok_or_else(invalid)
                };
                Ok(Filter::Enlarge {
                    x_scale: parse_scale(x)?,
                    y_scale: parse_scale(y)?,
                })
            }
            FilterKind::Vignette
            | FilterKind::Grayscale
            | FilterKind::Rotate90
            | FilterKind::HighContrast
            | FilterKind::QuantizePrimaries => Err(invalid()),
        }
    }
}

/// Builds the filter for a kind that takes no parameter, or `None` if the kind needs one.
fn parameterless(kind: FilterKind) -> Option<Filter> {
    match kind {
        FilterKind::Vignette => Some(Filter::Vignette),
        FilterKind::Grayscale => Some(Filter::Grayscale),
        FilterKind::Rotate90 => Some(Filter::Rotate90),
        FilterKind::HighContrast => Some(Filter::HighContrast),
        FilterKind::QuantizePrimaries => Some(Filter::QuantizePrimaries),
        FilterKind::Clarendon
        | FilterKind::Rotate
        | FilterKind::Enlarge
        | FilterKind::Lighten
        | FilterKind::Darken => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case("vignette", Filter::Vignette)]
    #[case("clarendon:0.5", Filter::Clarendon { scaling_factor: 0.5 })]
    #[case("grayscale", Filter::Grayscale)]
    #[case("rotate90", Filter::Rotate90)]
    #[case("rotate:-1", Filter::Rotate { turns: -1 })]
    #[case("enlarge:2x3", Filter::Enlarge { x_scale: nz(2), y_scale: nz(3) })]
    #[case("high-contrast", Filter::HighContrast)]
    #[case("lighten:0.25", Filter::Lighten { scaling_factor: 0.25 })]
    #[case("darken:1.5", Filter::Darken { scaling_factor: 1.5 })]
    #[case("quantize", Filter::QuantizePrimaries)]
    #[case("Grayscale", Filter::Grayscale)]
    #[case(" darken : 0.5 ", Filter::Darken { scaling_factor: 0.5 })]
    fn parses_valid_filters(#[case] input: &str, #[case] expected: Filter) {
        assert_eq!(input.parse::<Filter>(), Ok(expected));
    }

    #[rstest]
    #[case("clarendon:abc")]
    #[case("lighten:NaN")]
    #[case("darken:inf")]
    #[case("rotate:1.5")]
    #[case("enlarge:0x2")]
    #[case("enlarge:2")]
    #[case("enlarge:-1x2")]
    #[case("enlarge:65537x1")]
    #[case("enlarge:1x65537")]
    #[case("enlarge:18446744073709551615x1")]
    fn rejects_invalid_parameters(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Filter>(),
            Err(FilterParseError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn rejects_unknown_filter() {
        let err = "sepia".parse::<Filter>().unwrap_err();
        assert!(matches!(err, FilterParseError::UnknownFilter { ref name, .. } if name == "sepia"));
        assert!(err.to_string().contains("quantize"));
    }

    #[test]
    fn rejects_missing_parameter() {
        assert_eq!(
            "lighten".parse::<Filter>(),
            Err(FilterParseError::MissingParameter {
                filter: "lighten",
                expected: FilterKind::Lighten.parameter().unwrap(),
            })
        );
    }

    #[test]
    fn rejects_unexpected_parameter() {
        assert!(matches!(
            "grayscale:2".parse::<Filter>(),
            Err(FilterParseError::UnexpectedParameter { .. })
        ));
    }

    #[test]
    fn accepts_largest_enlarge_scale() {
        assert_eq!(
            "enlarge:65536x1".parse::<Filter>(),
            Ok(Filter::Enlarge {
                x_scale: nz(MAX_ENLARGE_SCALE),
                y_scale: nz(1),
            })
        );
    }

    #[test]
    fn only_kinds_without_parameters_build_directly() {
        for kind in FilterKind::all_values().iter().copied() {
            assert_eq!(parameterless(kind).is_some(), kind.parameter().is_none(), "{kind}");
            if let Some(filter) = parameterless(kind) {
                assert_eq!(filter.kind(), kind);
            }
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let filters = [
            Filter::Vignette,
            Filter::Clarendon { scaling_factor: 0.75 },
            Filter::Rotate { turns: -3 },
            Filter::Enlarge {
                x_scale: nz(4),
                y_scale: nz(1),
            },
            Filter::QuantizePrimaries,
        ];
        for filter in filters {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn every_kind_has_a_unique_name() {
        let names: Vec<_> = FilterKind::all_values().iter().map(|k| k.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate name {name}");
            assert_eq!(FilterKind::from_name(name).map(FilterKind::name), Some(*name));
        }
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn apply_dispatches_to_catalog() {
        let raster = gradient_raster(3, 2);
        assert_eq!(Filter::Grayscale.apply(&raster), grayscale(&raster));
        assert_eq!(
            Filter::Rotate { turns: 3 }.apply(&raster),
            rotate_quarter_turns(&raster, 3)
        );
        assert_eq!(
            Filter::Enlarge {
                x_scale: nz(2),
                y_scale: nz(2)
            }
            .apply(&raster)
            .width(),
            6
        );
    }

    #[test]
    fn dimension_preserving_kinds_preserve_dimensions() {
        let raster = gradient_raster(5, 3);
        let filters = [
            Filter::Vignette,
            Filter::Clarendon { scaling_factor: 0.5 },
            Filter::Grayscale,
            Filter::HighContrast,
            Filter::Lighten { scaling_factor: 0.5 },
            Filter::Darken { scaling_factor: 0.5 },
            Filter::QuantizePrimaries,
        ];
        for filter in filters {
            assert!(!filter.kind().changes_dimensions());
            let result = filter.apply(&raster);
            assert_eq!((result.width(), result.height()), (5, 3), "{filter}");
        }
    }
}
