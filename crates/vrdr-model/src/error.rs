//! Error types for the record model.

use thiserror::Error;

use crate::partial::ComponentError;

/// Errors raised while building a record from a document or projection.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document is not well-formed.
    #[error("document syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A resource sits in a section other than its own.
    #[error("resource {resource}: belongs in section {expected}, found in {found}")]
    MisplacedResource {
        resource: String,
        expected: String,
        found: String,
    },

    /// A resource declares the wrong resource type.
    #[error("resource {resource}: expected resource type {expected}, found {found}")]
    WrongResourceType {
        resource: String,
        expected: String,
        found: String,
    },

    /// A coded element carries no code.
    #[error("resource {resource}: element {element} has no code")]
    MissingCode { resource: String, element: String },

    /// A related person carries no relationship code.
    #[error("resource {resource}: missing relationship code")]
    MissingRelationship { resource: String },

    /// A resource is present but records nothing.
    #[error("resource {resource}: missing required value")]
    MissingValue { resource: String },

    /// A partial date has an invalid combination of parts.
    #[error("resource {resource}: element {element} is a malformed partial date: {source}")]
    MalformedDate {
        resource: String,
        element: String,
        #[source]
        source: ComponentError,
    },

    /// A certificate number wider than the six-digit identifier part.
    #[error("certificate number {value} does not fit in six digits")]
    CertificateNumber { value: u32 },

    /// A flattened property entry could not be read back.
    #[error("property {key}: {message}")]
    Property { key: String, message: String },

    /// The record could not be serialized.
    #[error("failed to serialize record: {message}")]
    Serialize { message: String },
}

impl ModelError {
    pub fn missing_code(resource: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingCode {
            resource: resource.into(),
            element: element.into(),
        }
    }

    pub fn property(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Property {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Convert a serde_json error, keeping line and column.
    pub fn from_json(error: &serde_json::Error) -> Self {
        Self::Syntax {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::missing_code("decedent", "sex");
        assert_eq!(err.to_string(), "resource decedent: element sex has no code");

        let err = ModelError::MissingRelationship {
            resource: "father".into(),
        };
        assert_eq!(err.to_string(), "resource father: missing relationship code");
    }

    #[test]
    fn test_from_json_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        match ModelError::from_json(&err) {
            ModelError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
