//! Field filtering of message content.

use tracing::debug;
use vrdr_ije::{CodecOptions, IjeRecord, catalog};

use crate::error::{MessageError, Result};
use crate::message::{Message, Payload};

/// Produces a reduced copy of a message.
pub trait MessageFilter {
    /// Copy of `message` keeping only the fields named in `allow_list`.
    fn filter(&self, message: &Message, allow_list: &[&str]) -> Result<Message>;
}

/// Filters the record through its IJE rendition: allowed fields are kept
/// whole, all others are dropped whole.
///
/// The envelope (header and identifiers) is copied unchanged. Messages that
/// carry no record are returned as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct IjeFieldFilter {
    options: CodecOptions,
}

impl IjeFieldFilter {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }
}

impl MessageFilter for IjeFieldFilter {
    fn filter(&self, message: &Message, allow_list: &[&str]) -> Result<Message> {
        let catalog = catalog();
        if let Some(unknown) = allow_list.iter().find(|name| catalog.get(name).is_none()) {
            return Err(MessageError::filter(format!("unknown IJE field {unknown}")));
        }

        let mut filtered = message.clone();
        let Payload::Record(record) = &mut filtered.payload else {
            return Ok(filtered);
        };
        let full = IjeRecord::from_record(record, &self.options)?;
        let mut kept = IjeRecord::blank();
        for name in allow_list {
            kept.set_field(name, full.field(name)?)?;
        }
        **record = kept.to_record(&self.options)?;
        debug!(
            kind = %filtered.kind(),
            kept = allow_list.len(),
            "filtered message record"
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::MessageKind;

    #[test]
    fn test_unknown_field_rejected() {
        let message = Message::new(MessageKind::Submission);
        let err = IjeFieldFilter::default()
            .filter(&message, &["GNAME", "NOPE"])
            .unwrap_err();
        assert_eq!(err.to_string(), "filter error: unknown IJE field NOPE");
    }

    #[test]
    fn test_recordless_message_unchanged() {
        let message = Message::new(MessageKind::Acknowledgement);
        let filtered = IjeFieldFilter::default().filter(&message, &["GNAME"]).unwrap();
        assert_eq!(filtered, message);
    }
}
