//! Error types for the fixed-width codec.

use thiserror::Error;
use vrdr_model::ComponentError;

/// Errors raised while encoding or decoding fixed-width records.
///
/// Messages name the field; only mapping and range errors repeat the
/// offending value.
#[derive(Debug, Error)]
pub enum IjeError {
    /// A value has no counterpart in the field's code table.
    #[error("field {field}: no mapping for value '{value}'")]
    Mapping { field: &'static str, value: String },

    /// A value does not fit the field's format.
    #[error("field {field}: invalid value '{value}': {reason}")]
    Range {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Content written with the retired replacement-record scheme.
    #[error(
        "field {field}: value '{value}' uses the retired replacement-record scheme; updates travel as update messages"
    )]
    LegacySchema { field: &'static str, value: String },

    /// A record of the wrong length.
    #[error("{format} record must be {expected} characters, found {actual}")]
    Length {
        format: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A malformed coded cause list.
    #[error("field {field}: {reason}")]
    Axis { field: &'static str, reason: String },

    /// No field of that name in the catalog.
    #[error("unknown field '{name}'")]
    UnknownField { name: String },

    /// The record contains characters outside ASCII.
    #[error("field {field}: contains non-ASCII characters")]
    NonAscii { field: &'static str },
}

impl IjeError {
    pub fn mapping(field: &'static str, value: impl Into<String>) -> Self {
        Self::Mapping {
            field,
            value: value.into(),
        }
    }

    pub fn range(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Range {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn axis(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Axis {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap a date or quantity component error.
    pub fn component(field: &'static str, value: impl Into<String>, error: &ComponentError) -> Self {
        Self::range(field, value, error.to_string())
    }

    /// Whether lenient mode may skip the value instead of failing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Mapping { .. } | Self::Range { .. } | Self::Axis { .. }
        )
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, IjeError>;
