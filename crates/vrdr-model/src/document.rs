//! Document collaborator: reading and writing a record as a text document.
//!
//! The JSON document wraps the resource graph:
//!
//! ```json
//! {
//!   "resourceType": "DeathCertificateDocument",
//!   "sections": { "decedentDemographics": { "decedent": { ... } } }
//! }
//! ```
//!
//! Parsing validates the whole graph before a record is returned, so a
//! failed parse never yields a partially populated record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::graph::ResourceGraph;
use crate::identifier::check_certificate_number;
use crate::record::DeathRecord;

/// Resource type of the document wrapper.
pub const DOCUMENT_RESOURCE_TYPE: &str = "DeathCertificateDocument";

/// Conversion between records and a text document format.
pub trait DocumentFormat {
    fn parse(&self, text: &str) -> Result<DeathRecord>;
    fn serialize(&self, record: &DeathRecord) -> Result<String>;
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    #[serde(rename = "resourceType")]
    resource_type: &'static str,
    sections: &'a ResourceGraph,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentOwned {
    #[serde(rename = "resourceType")]
    resource_type: String,
    #[serde(default)]
    sections: ResourceGraph,
}

fn from_document(document: DocumentOwned) -> Result<DeathRecord> {
    if document.resource_type != DOCUMENT_RESOURCE_TYPE {
        return Err(ModelError::WrongResourceType {
            resource: "document".to_string(),
            expected: DOCUMENT_RESOURCE_TYPE.to_string(),
            found: document.resource_type,
        });
    }
    document.sections.validate()?;
    let record = DeathRecord::from_graph(document.sections);
    if let Some(number) = record.certificate_number() {
        check_certificate_number(number)?;
    }
    debug!(
        resources = record.graph().resource_count(),
        "parsed death record document"
    );
    Ok(record)
}

/// Convert a record into a JSON value.
pub fn to_value(record: &DeathRecord) -> Result<Value> {
    serde_json::to_value(DocumentRef {
        resource_type: DOCUMENT_RESOURCE_TYPE,
        sections: record.graph(),
    })
    .map_err(|e| ModelError::Serialize {
        message: e.to_string(),
    })
}

/// Read a record from a JSON value, e.g. an entry embedded in a message.
pub fn from_value(value: Value) -> Result<DeathRecord> {
    let document: DocumentOwned =
        serde_json::from_value(value).map_err(|e| ModelError::from_json(&e))?;
    from_document(document)
}

/// JSON rendition of the record document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocument {
    pretty: bool,
}

impl JsonDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent output.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl DocumentFormat for JsonDocument {
    fn parse(&self, text: &str) -> Result<DeathRecord> {
        let document: DocumentOwned =
            serde_json::from_str(text).map_err(|e| ModelError::from_json(&e))?;
        from_document(document)
    }

    fn serialize(&self, record: &DeathRecord) -> Result<String> {
        let document = DocumentRef {
            resource_type: DOCUMENT_RESOURCE_TYPE,
            sections: record.graph(),
        };
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        text.map_err(|e| ModelError::Serialize {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_document() {
        let text = JsonDocument::new().serialize(&DeathRecord::new()).unwrap();
        assert_eq!(
            text,
            r#"{"resourceType":"DeathCertificateDocument","sections":{}}"#
        );
        assert!(JsonDocument::new().parse(&text).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_document_type() {
        let err = JsonDocument::new()
            .parse(r#"{"resourceType":"Bundle","sections":{}}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::WrongResourceType { .. }));
    }
}
