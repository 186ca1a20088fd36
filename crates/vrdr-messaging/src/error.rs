//! Error types for the message envelope.

use std::fmt;

use thiserror::Error;
use vrdr_ije::IjeError;
use vrdr_model::ModelError;

use crate::ids::RecordIds;
use crate::message::{Issue, Message};

/// What went wrong while reading a message bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidJson,
    NotABundle,
    WrongBundleType,
    MissingHeader,
    MissingEventType,
    UnsupportedEventType,
    /// A retired generic coding URI.
    DeprecatedEventType,
    MissingRecord,
    InvalidRecord,
    InvalidParameter,
}

impl ParseErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid JSON",
            Self::NotABundle => "not a bundle",
            Self::WrongBundleType => "wrong bundle type",
            Self::MissingHeader => "missing message header",
            Self::MissingEventType => "missing event type",
            Self::UnsupportedEventType => "unsupported event type",
            Self::DeprecatedEventType => "deprecated event type",
            Self::MissingRecord => "missing death record",
            Self::InvalidRecord => "invalid death record",
            Self::InvalidParameter => "invalid parameter",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whatever could be read from a bundle before it failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub message_id: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub ids: RecordIds,
}

/// A message that could not be read, with the context salvaged from it.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {detail}")]
pub struct MessageParseError {
    pub kind: ParseErrorKind,
    pub detail: String,
    pub context: ParseContext,
}

impl MessageParseError {
    pub fn new(kind: ParseErrorKind, detail: impl Into<String>, context: ParseContext) -> Self {
        Self {
            kind,
            detail: detail.into(),
            context,
        }
    }

    /// Extraction-error reply to the unreadable message.
    ///
    /// Addressed back to the sender when the header could be read; otherwise
    /// a generic response with no correlation.
    pub fn response(&self) -> Message {
        let mut reply = Message::extraction_error(None, vec![Issue::error(self.to_string())]);
        let context = &self.context;
        if context.message_id.is_some() {
            reply.header.response_to.clone_from(&context.message_id);
            reply.header.source.clone_from(&context.destination);
            reply.header.destination.clone_from(&context.source);
            reply.ids = context.ids.clone();
        }
        reply
    }
}

/// Errors raised by the message envelope.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("failed to parse message: {0}")]
    Parse(Box<MessageParseError>),

    #[error("death record error: {0}")]
    Record(#[from] ModelError),

    #[error("IJE error: {0}")]
    Ije(#[from] IjeError),

    #[error("filter error: {reason}")]
    Filter { reason: String },

    #[error("failed to serialize message: {message}")]
    Serialize { message: String },
}

impl MessageError {
    pub fn filter(reason: impl Into<String>) -> Self {
        Self::Filter {
            reason: reason.into(),
        }
    }

    pub fn serialize(error: &serde_json::Error) -> Self {
        Self::Serialize {
            message: error.to_string(),
        }
    }

    /// The parse failure, when this is one.
    pub fn as_parse(&self) -> Option<&MessageParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MessageParseError> for MessageError {
    fn from(err: MessageParseError) -> Self {
        Self::Parse(Box::new(err))
    }
}

/// Result type for message operations.
pub type Result<T> = std::result::Result<T, MessageError>;
