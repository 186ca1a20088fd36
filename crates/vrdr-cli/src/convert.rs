//! Batch conversions behind the subcommands.
//!
//! Each input record converts on its own. A failure is reported with its
//! position and the remaining records still convert.

use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};
use vrdr_ije::{CodecOptions, IjeRecord, Layout, decode, encode};
use vrdr_messaging::{Message, MessageError, MessageKind};
use vrdr_model::document;
use vrdr_model::{DeathRecord, DocumentFormat, JsonDocument, ModelError};

/// A record that failed to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemError {
    /// `line` for text inputs, `record` for JSON arrays.
    pub unit: &'static str,
    /// 1-based position in the input.
    pub position: usize,
    pub message: String,
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.unit, self.position, self.message)
    }
}

/// Converted items and per-item failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub outputs: Vec<T>,
    pub errors: Vec<ItemError>,
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> Batch<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn push<E: fmt::Display>(&mut self, unit: &'static str, position: usize, result: Result<T, E>) {
        match result {
            Ok(output) => self.outputs.push(output),
            Err(error) => {
                warn!(unit, position, "conversion failed");
                self.errors.push(ItemError {
                    unit,
                    position,
                    message: error.to_string(),
                });
            }
        }
    }
}

/// Convert each non-blank line.
fn each_line<T, E: fmt::Display>(input: &str, mut convert: impl FnMut(&str) -> Result<T, E>) -> Batch<T> {
    let mut batch = Batch::default();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        batch.push("line", index + 1, convert(line));
    }
    debug!(
        converted = batch.outputs.len(),
        failed = batch.errors.len(),
        "converted lines"
    );
    batch
}

/// IJE lines to record documents.
pub fn ije_to_json(input: &str, options: &CodecOptions) -> Batch<Value> {
    each_line(input, |line| -> anyhow::Result<Value> {
        let record = decode(line, options)?;
        Ok(document::to_value(&record)?)
    })
}

/// A record document, or an array of them, to IJE lines.
///
/// # Errors
///
/// Fails when the input is not JSON at all; per-record failures are
/// collected in the batch.
pub fn json_to_ije(input: &str, options: &CodecOptions) -> Result<Batch<String>, ModelError> {
    let value: Value = serde_json::from_str(input).map_err(|e| ModelError::from_json(&e))?;
    let values = match value {
        Value::Array(values) => values,
        single => vec![single],
    };
    let mut batch = Batch::default();
    for (index, value) in values.into_iter().enumerate() {
        let result = document::from_value(value)
            .map_err(anyhow::Error::from)
            .and_then(|record| Ok(encode(&record, options)?));
        batch.push("record", index + 1, result);
    }
    Ok(batch)
}

/// Serialize converted documents: a single document alone, several as an array.
pub fn render_documents(documents: Vec<Value>) -> String {
    let value = if documents.len() == 1 {
        documents.into_iter().next().unwrap_or(Value::Null)
    } else {
        Value::Array(documents)
    };
    format!("{value:#}")
}

/// IJE lines to sub-format lines holding the carried fields.
pub fn ije_to_subformat(input: &str, layout: &Layout) -> Batch<String> {
    each_line(input, |line| {
        IjeRecord::parse(line).map(|ije| layout.extract(&ije))
    })
}

/// Sub-format lines to otherwise blank IJE lines.
pub fn subformat_to_ije(input: &str, layout: &Layout) -> Batch<String> {
    each_line(input, |line| layout.to_ije(line).map(IjeRecord::into_string))
}

/// Wrap a record document as a message of `kind`.
///
/// # Errors
///
/// Fails when the document cannot be read.
pub fn wrap(
    input: &str,
    kind: MessageKind,
    block_count: Option<u32>,
) -> Result<Message, MessageError> {
    let record: DeathRecord = JsonDocument::new().parse(input)?;
    let message = match kind {
        MessageKind::Void => Message::void(&record, block_count),
        _ => Message::from_record(kind, record),
    };
    debug!(kind = %message.kind(), id = message.id(), "wrapped record");
    Ok(message)
}

/// Acknowledge a message, or answer an unreadable one with an extraction
/// error built from whatever could be read.
pub fn respond(input: &str) -> Message {
    match Message::parse(input) {
        Ok(message) => Message::acknowledge(Some(&message)),
        Err(error) => {
            warn!(%error, "message could not be read");
            match error.as_parse() {
                Some(parse) => parse.response(),
                None => Message::extraction_error(
                    None,
                    vec![vrdr_messaging::Issue::error(error.to_string())],
                ),
            }
        }
    }
}
