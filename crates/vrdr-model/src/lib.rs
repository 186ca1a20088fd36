//! Death certificate record model.
//!
//! This crate holds the structured form of a death certificate:
//!
//! - [`coded`]: `{code, system, display, text}` values for controlled vocabularies
//! - [`partial`]: tri-state date and time parts (known, explicitly unknown, unspecified)
//! - [`graph`]: resources grouped into certificate sections
//! - [`slots`]: typed handles naming each datum of the record
//! - [`record`]: [`DeathRecord`] and its accessors
//! - [`document`]: the JSON document collaborator
//!
//! # Example
//!
//! ```
//! use vrdr_model::{DeathRecord, PartialDateTime, TriState};
//!
//! let mut record = DeathRecord::new();
//! record.set_death_date(Some(PartialDateTime::new(
//!     TriState::Known(2019),
//!     TriState::Known(2),
//!     TriState::ExplicitlyUnknown,
//! )));
//! assert_eq!(record.death_day(), Some(-1));
//! assert_eq!(record.date_of_death(), None);
//! ```

pub mod axis;
pub mod coded;
pub mod document;
pub mod error;
pub mod graph;
pub mod identifier;
pub mod partial;
mod properties;
pub mod race;
pub mod record;
pub mod slots;

pub use axis::{EntityAxisEntry, RecordAxisEntry, icd10_with_dot, icd10_without_dot};
pub use coded::CodedValue;
pub use document::{DocumentFormat, JsonDocument};
pub use error::{ModelError, Result};
pub use graph::{Element, Resource, ResourceGraph, ResourceKey, ResourceType, Section};
pub use identifier::{MAX_CERTIFICATE_NUMBER, RecordIdentifier};
pub use partial::{ComponentError, DatePart, PartialDateTime, TriState};
pub use race::RaceCategory;
pub use record::DeathRecord;
pub use slots::{ElementValue, Slot};
