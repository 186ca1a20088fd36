//! Record identifiers carried alongside a message.

use vrdr_model::{DeathRecord, RecordIdentifier};

/// Correlation identifiers of the record a message is about.
///
/// The national identifier is not stored: [`RecordIds::nchs_id`] derives it
/// from the parts on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordIds {
    pub certificate_number: Option<u32>,
    pub jurisdiction_id: Option<String>,
    pub death_year: Option<u32>,
    pub state_auxiliary_id: Option<String>,
}

impl RecordIds {
    pub fn from_record(record: &DeathRecord) -> Self {
        let identifier = record.identifier();
        Self {
            certificate_number: identifier.certificate_number,
            jurisdiction_id: identifier.jurisdiction,
            death_year: identifier.year,
            state_auxiliary_id: record.state_auxiliary_id().map(str::to_string),
        }
    }

    /// `YYYYJJNNNNNN`, with fillers for missing parts; absent when no part is set.
    pub fn nchs_id(&self) -> Option<String> {
        let identifier = RecordIdentifier::new(
            self.death_year,
            self.jurisdiction_id.clone(),
            self.certificate_number,
        );
        (!identifier.is_empty()).then(|| identifier.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.certificate_number.is_none()
            && self.jurisdiction_id.is_none()
            && self.death_year.is_none()
            && self.state_auxiliary_id.is_none()
    }
}
