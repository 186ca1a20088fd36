//! Message kinds and the URI registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::message::Message;

/// Retired generic coding URIs, superseded by the cause-of-death and
/// demographics specific kinds.
pub const DEPRECATED_URIS: [&str; 2] = [
    "http://nchs.cdc.gov/vrdr_coding",
    "http://nchs.cdc.gov/vrdr_coding_update",
];

/// The closed set of message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Submission,
    Update,
    Void,
    Alias,
    CauseOfDeathCoding,
    CauseOfDeathCodingUpdate,
    DemographicsCoding,
    DemographicsCodingUpdate,
    Acknowledgement,
    ExtractionError,
}

impl MessageKind {
    pub const ALL: [Self; 10] = [
        Self::Submission,
        Self::Update,
        Self::Void,
        Self::Alias,
        Self::CauseOfDeathCoding,
        Self::CauseOfDeathCodingUpdate,
        Self::DemographicsCoding,
        Self::DemographicsCodingUpdate,
        Self::Acknowledgement,
        Self::ExtractionError,
    ];

    /// Event URI declared in the message header.
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Submission => "http://nchs.cdc.gov/vrdr_submission",
            Self::Update => "http://nchs.cdc.gov/vrdr_submission_update",
            Self::Void => "http://nchs.cdc.gov/vrdr_submission_void",
            Self::Alias => "http://nchs.cdc.gov/vrdr_alias",
            Self::CauseOfDeathCoding => "http://nchs.cdc.gov/vrdr_causeofdeath_coding",
            Self::CauseOfDeathCodingUpdate => "http://nchs.cdc.gov/vrdr_causeofdeath_coding_update",
            Self::DemographicsCoding => "http://nchs.cdc.gov/vrdr_demographics_coding",
            Self::DemographicsCodingUpdate => "http://nchs.cdc.gov/vrdr_demographics_coding_update",
            Self::Acknowledgement => "http://nchs.cdc.gov/vrdr_acknowledgement",
            Self::ExtractionError => "http://nchs.cdc.gov/vrdr_extraction_error",
        }
    }

    /// Short name used on the command line and in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Update => "update",
            Self::Void => "void",
            Self::Alias => "alias",
            Self::CauseOfDeathCoding => "cause-of-death-coding",
            Self::CauseOfDeathCodingUpdate => "cause-of-death-coding-update",
            Self::DemographicsCoding => "demographics-coding",
            Self::DemographicsCodingUpdate => "demographics-coding-update",
            Self::Acknowledgement => "acknowledgement",
            Self::ExtractionError => "extraction-error",
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.uri() == uri)
    }

    pub fn is_deprecated_uri(uri: &str) -> bool {
        DEPRECATED_URIS.contains(&uri)
    }

    /// Whether the message carries a death record document.
    pub const fn carries_record(self) -> bool {
        matches!(
            self,
            Self::Submission
                | Self::Update
                | Self::CauseOfDeathCoding
                | Self::CauseOfDeathCodingUpdate
                | Self::DemographicsCoding
                | Self::DemographicsCodingUpdate
        )
    }

    /// Coding responses sent back by the national coding authority.
    pub const fn is_coding_response(self) -> bool {
        matches!(
            self,
            Self::CauseOfDeathCoding
                | Self::CauseOfDeathCodingUpdate
                | Self::DemographicsCoding
                | Self::DemographicsCodingUpdate
        )
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s) || kind.uri() == s)
            .ok_or_else(|| format!("unknown message kind '{s}'"))
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Builds an empty message of one kind.
pub type Constructor = fn() -> Message;

static REGISTRY: OnceLock<HashMap<&'static str, Constructor>> = OnceLock::new();

fn build_registry() -> HashMap<&'static str, Constructor> {
    let entries: [(MessageKind, Constructor); 10] = [
        (MessageKind::Submission, || Message::new(MessageKind::Submission)),
        (MessageKind::Update, || Message::new(MessageKind::Update)),
        (MessageKind::Void, || Message::new(MessageKind::Void)),
        (MessageKind::Alias, || Message::new(MessageKind::Alias)),
        (MessageKind::CauseOfDeathCoding, || {
            Message::new(MessageKind::CauseOfDeathCoding)
        }),
        (MessageKind::CauseOfDeathCodingUpdate, || {
            Message::new(MessageKind::CauseOfDeathCodingUpdate)
        }),
        (MessageKind::DemographicsCoding, || {
            Message::new(MessageKind::DemographicsCoding)
        }),
        (MessageKind::DemographicsCodingUpdate, || {
            Message::new(MessageKind::DemographicsCodingUpdate)
        }),
        (MessageKind::Acknowledgement, || {
            Message::new(MessageKind::Acknowledgement)
        }),
        (MessageKind::ExtractionError, || {
            Message::new(MessageKind::ExtractionError)
        }),
    ];
    let registry: HashMap<_, _> = entries
        .into_iter()
        .map(|(kind, constructor)| (kind.uri(), constructor))
        .collect();
    debug!(kinds = registry.len(), "built message registry");
    registry
}

/// Constructor for an event URI, if the URI names a supported kind.
pub fn constructor(uri: &str) -> Option<Constructor> {
    REGISTRY.get_or_init(build_registry).get(uri).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uris_share_base_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in MessageKind::ALL {
            assert!(kind.uri().starts_with("http://nchs.cdc.gov/vrdr_"), "{kind}");
            assert!(seen.insert(kind.uri()));
            assert_eq!(MessageKind::from_uri(kind.uri()), Some(kind));
        }
    }

    #[test]
    fn test_registry_builds_matching_kind() {
        for kind in MessageKind::ALL {
            let message = constructor(kind.uri()).unwrap()();
            assert_eq!(message.kind(), kind);
        }
    }

    #[test]
    fn test_deprecated_uris_not_registered() {
        for uri in DEPRECATED_URIS {
            assert!(MessageKind::is_deprecated_uri(uri));
            assert!(MessageKind::from_uri(uri).is_none());
            assert!(constructor(uri).is_none());
        }
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(
            "cause-of-death-coding".parse::<MessageKind>(),
            Ok(MessageKind::CauseOfDeathCoding)
        );
        assert!("coding".parse::<MessageKind>().is_err());
    }
}
