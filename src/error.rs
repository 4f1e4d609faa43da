//! Errors raised while pulling fields out of a parsed document.

use thiserror::Error;

/// A document did not have the shape an extractor expects.
///
/// Extractors never fall back to defaults: a missing node or a malformed
/// number always surfaces as one of these variants.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("{field}: no element matches `{selector}`")]
    MissingElement { field: &'static str, selector: String },

    #[error("{field}: element has no `{attr}` attribute")]
    MissingAttribute { field: &'static str, attr: &'static str },

    #[error("{field}: cannot parse {value:?} as a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field}: scale has no entries")]
    EmptyScale { field: &'static str },

    #[error("pricing table has no `{label}` column")]
    MissingColumn { label: &'static str },

    #[error("pricing table lists plan {0:?} twice")]
    DuplicatePlan(String),

    #[error("pricing table has no plans")]
    NoPlans,
}

impl ExtractError {
    pub(crate) fn missing(field: &'static str, selector: impl Into<String>) -> Self {
        Self::MissingElement { field, selector: selector.into() }
    }

    pub(crate) fn number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber { field, value: value.into() }
    }
}
