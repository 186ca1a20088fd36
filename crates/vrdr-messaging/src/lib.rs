//! Message envelope for death record exchange.
//!
//! A [`Message`] wraps a death record (or, for voids, aliases,
//! acknowledgements and extraction errors, just its identifiers) with routing
//! metadata. Messages travel as JSON bundles whose event URI selects the
//! [`MessageKind`].
//!
//! # Example
//!
//! ```
//! use vrdr_messaging::{Message, MessageKind};
//! use vrdr_model::DeathRecord;
//!
//! let mut record = DeathRecord::new();
//! record.set_death_jurisdiction("MA");
//! record.set_certificate_number(Some(1234)).unwrap();
//!
//! let submission = Message::submission(record).with_source("http://state.example");
//! let text = submission.to_json().unwrap();
//!
//! let received = Message::parse(&text).unwrap();
//! assert_eq!(received.kind(), MessageKind::Submission);
//! assert_eq!(received.nchs_id().as_deref(), Some("0000MA001234"));
//!
//! let ack = Message::acknowledge(Some(&received));
//! assert_eq!(ack.response_to(), Some(submission.id()));
//! assert_eq!(ack.destination(), Some("http://state.example"));
//! ```

pub mod error;
pub mod filter;
pub mod ids;
pub mod kind;
pub mod message;
mod wire;

pub use error::{MessageError, MessageParseError, ParseContext, ParseErrorKind, Result};
pub use filter::{IjeFieldFilter, MessageFilter};
pub use ids::RecordIds;
pub use kind::{DEPRECATED_URIS, MessageKind, constructor};
pub use message::{AliasNames, Issue, IssueSeverity, Message, MessageHeader, Payload};
