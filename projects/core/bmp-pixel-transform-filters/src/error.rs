//! Errors for parsing filter descriptions.

use thiserror::Error;

/// Errors produced when parsing a [`Filter`] from a string such as `clarendon:0.5`.
///
/// Parameter validation happens here, before a transform runs; the transforms themselves
/// never fail.
///
/// [`Filter`]: crate::Filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    /// The name does not match any filter in the catalog.
    #[error("Unknown filter: {name}. Valid filters are: {valid}")]
    UnknownFilter { name: String, valid: String },

    /// The filter requires a parameter but none was given.
    #[error("Filter '{filter}' requires a parameter ({expected})")]
    MissingParameter {
        filter: &'static str,
        expected: &'static str,
    },

    /// The filter takes no parameter but one was given.
    #[error("Filter '{filter}' does not take a parameter, got '{value}'")]
    UnexpectedParameter { filter: &'static str, value: String },

    /// The parameter could not be parsed or is out of range.
    #[error("Invalid parameter '{value}' for filter '{filter}': expected {expected}")]
    InvalidParameter {
        filter: &'static str,
        value: String,
        expected: &'static str,
    },
}
