//! The message envelope.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use vrdr_model::DeathRecord;
use vrdr_model::identifier::check_certificate_number;

use crate::error::Result;
use crate::ids::RecordIds;
use crate::kind::MessageKind;

/// Routing and correlation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub id: String,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Id of the message this one responds to.
    pub response_to: Option<String>,
}

impl MessageHeader {
    fn fresh() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source: None,
            destination: None,
            timestamp: Utc::now(),
            response_to: None,
        }
    }
}

/// Alternate names reported for a decedent in an alias message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasNames {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub name_suffix: Option<String>,
    pub father_surname: Option<String>,
    pub social_security_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

impl IssueSeverity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Fatal, Self::Error, Self::Warning, Self::Information]
            .into_iter()
            .find(|s| s.as_str() == name)
    }
}

/// One problem reported in an extraction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub code: String,
    pub message: String,
}

impl Issue {
    pub fn new(severity: IssueSeverity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Error, "exception", message)
    }
}

/// Kind-specific content.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Record(Box<DeathRecord>),
    Void { block_count: Option<u32> },
    Alias(AliasNames),
    Acknowledgement { block_count: Option<u32> },
    ExtractionError { issues: Vec<Issue> },
}

impl Payload {
    fn empty(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Void => Self::Void { block_count: None },
            MessageKind::Alias => Self::Alias(AliasNames::default()),
            MessageKind::Acknowledgement => Self::Acknowledgement { block_count: None },
            MessageKind::ExtractionError => Self::ExtractionError { issues: Vec::new() },
            _ => Self::Record(Box::default()),
        }
    }
}

/// A typed message wrapping a death record (or none) for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub(crate) kind: MessageKind,
    pub(crate) header: MessageHeader,
    pub(crate) ids: RecordIds,
    pub(crate) payload: Payload,
}

impl Message {
    /// An empty message with a fresh id and timestamp.
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            header: MessageHeader::fresh(),
            ids: RecordIds::default(),
            payload: Payload::empty(kind),
        }
    }

    /// A record-bearing message; identifiers are taken from the record.
    ///
    /// For kinds without a record, only the identifiers are kept.
    pub fn from_record(kind: MessageKind, record: DeathRecord) -> Self {
        let mut message = Self::new(kind);
        message.ids = RecordIds::from_record(&record);
        if let Payload::Record(slot) = &mut message.payload {
            **slot = record;
        }
        message
    }

    pub fn submission(record: DeathRecord) -> Self {
        Self::from_record(MessageKind::Submission, record)
    }

    pub fn update(record: DeathRecord) -> Self {
        Self::from_record(MessageKind::Update, record)
    }

    /// Void `block_count` consecutive certificate numbers starting at the
    /// record's.
    pub fn void(record: &DeathRecord, block_count: Option<u32>) -> Self {
        let mut message = Self::new(MessageKind::Void);
        message.ids = RecordIds::from_record(record);
        message.payload = Payload::Void { block_count };
        message
    }

    pub fn alias(record: &DeathRecord, names: AliasNames) -> Self {
        let mut message = Self::new(MessageKind::Alias);
        message.ids = RecordIds::from_record(record);
        message.payload = Payload::Alias(names);
        message
    }

    #[must_use]
    pub fn with_source(mut self, endpoint: impl Into<String>) -> Self {
        self.header.source = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_destination(mut self, endpoint: impl Into<String>) -> Self {
        self.header.destination = Some(endpoint.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn header(&self) -> &MessageHeader {
        &self.header
    }

    pub fn id(&self) -> &str {
        &self.header.id
    }

    pub fn source(&self) -> Option<&str> {
        self.header.source.as_deref()
    }

    pub fn destination(&self) -> Option<&str> {
        self.header.destination.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.header.timestamp
    }

    pub fn response_to(&self) -> Option<&str> {
        self.header.response_to.as_deref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn ids(&self) -> &RecordIds {
        &self.ids
    }

    pub fn record(&self) -> Option<&DeathRecord> {
        match &self.payload {
            Payload::Record(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// Replace the record and refresh the identifiers from it.
    ///
    /// Has no effect on kinds that carry no record.
    pub fn set_record(&mut self, record: DeathRecord) {
        if let Payload::Record(slot) = &mut self.payload {
            self.ids = RecordIds::from_record(&record);
            **slot = record;
        }
    }

    pub fn into_record(self) -> Option<DeathRecord> {
        match self.payload {
            Payload::Record(record) => Some(*record),
            _ => None,
        }
    }

    pub fn block_count(&self) -> Option<u32> {
        match self.payload {
            Payload::Void { block_count } | Payload::Acknowledgement { block_count } => block_count,
            _ => None,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        match &self.payload {
            Payload::ExtractionError { issues } => issues,
            _ => &[],
        }
    }

    pub fn alias_names(&self) -> Option<&AliasNames> {
        match &self.payload {
            Payload::Alias(names) => Some(names),
            _ => None,
        }
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    pub fn certificate_number(&self) -> Option<u32> {
        self.ids.certificate_number
    }

    /// Set the certificate number; numbers wider than six digits are rejected.
    pub fn set_certificate_number(&mut self, value: Option<u32>) -> Result<()> {
        self.ids.certificate_number = value.map(check_certificate_number).transpose()?;
        Ok(())
    }

    pub fn jurisdiction_id(&self) -> Option<&str> {
        self.ids.jurisdiction_id.as_deref()
    }

    pub fn set_jurisdiction_id(&mut self, value: Option<&str>) {
        self.ids.jurisdiction_id = value.filter(|v| !v.is_empty()).map(str::to_string);
    }

    pub fn death_year(&self) -> Option<u32> {
        self.ids.death_year
    }

    pub fn set_death_year(&mut self, value: Option<u32>) {
        self.ids.death_year = value;
    }

    pub fn state_auxiliary_id(&self) -> Option<&str> {
        self.ids.state_auxiliary_id.as_deref()
    }

    pub fn set_state_auxiliary_id(&mut self, value: Option<&str>) {
        self.ids.state_auxiliary_id = value.filter(|v| !v.is_empty()).map(str::to_string);
    }

    /// National identifier, derived from the current identifiers.
    pub fn nchs_id(&self) -> Option<String> {
        self.ids.nchs_id()
    }

    // =========================================================================
    // Derivatives
    // =========================================================================

    /// A message of `kind` answering `original`.
    ///
    /// The original's id becomes the correlation id, source and destination
    /// swap and every identifier is copied. With no original every optional
    /// field is unset.
    pub fn reply(kind: MessageKind, original: Option<&Message>) -> Self {
        let mut reply = Self::new(kind);
        if let Some(original) = original {
            reply.header.response_to = Some(original.header.id.clone());
            reply.header.source.clone_from(&original.header.destination);
            reply.header.destination.clone_from(&original.header.source);
            reply.ids = original.ids.clone();
        }
        reply
    }

    /// Acknowledge `original`; a void's block count is carried over.
    pub fn acknowledge(original: Option<&Message>) -> Self {
        let mut ack = Self::reply(MessageKind::Acknowledgement, original);
        if let Some(Payload::Void { block_count }) = original.map(|m| &m.payload) {
            ack.payload = Payload::Acknowledgement {
                block_count: *block_count,
            };
        }
        ack
    }

    /// Report that `original` could not be processed.
    pub fn extraction_error(original: Option<&Message>, issues: Vec<Issue>) -> Self {
        let mut reply = Self::reply(MessageKind::ExtractionError, original);
        reply.payload = Payload::ExtractionError { issues };
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered() -> DeathRecord {
        let mut record = DeathRecord::new();
        record.set_death_jurisdiction("MA");
        record.set_certificate_number(Some(1234)).unwrap();
        record.set_state_auxiliary_id("42");
        record
    }

    #[test]
    fn test_ids_follow_record() {
        let mut message = Message::submission(registered());
        assert_eq!(message.nchs_id().as_deref(), Some("0000MA001234"));
        assert_eq!(message.state_auxiliary_id(), Some("42"));

        let mut record = registered();
        record.set_certificate_number(Some(9)).unwrap();
        message.set_record(record);
        assert_eq!(message.certificate_number(), Some(9));
        assert_eq!(message.nchs_id().as_deref(), Some("0000MA000009"));
    }

    #[test]
    fn test_set_record_ignored_without_record_payload() {
        let mut message = Message::new(MessageKind::Acknowledgement);
        message.set_record(registered());
        assert!(message.record().is_none());
        assert!(message.ids().is_empty());
    }

    #[test]
    fn test_id_setters_recompute_nchs_id() {
        let mut message = Message::new(MessageKind::Submission);
        message.set_death_year(Some(2019));
        message.set_jurisdiction_id(Some("YC"));
        message.set_certificate_number(Some(7)).unwrap();
        assert_eq!(message.nchs_id().as_deref(), Some("2019YC000007"));
        message.set_jurisdiction_id(None);
        message.set_death_year(None);
        message.set_certificate_number(None).unwrap();
        assert_eq!(message.nchs_id(), None);
        assert!(message.set_certificate_number(Some(1_234_567)).is_err());
    }

    #[test]
    fn test_fresh_ids_differ() {
        let a = Message::new(MessageKind::Submission);
        let b = Message::new(MessageKind::Submission);
        assert_ne!(a.id(), b.id());
    }
}
