//! IJE fixed-width mortality record codec.
//!
//! - [`catalog`]: every field's column, width, priority and binding
//! - [`record`]: the 5000-character [`IjeRecord`] and whole-record encode/decode
//! - [`axis`]: entity-axis and record-axis cause lists
//! - [`subformat`]: TRX and MRE coding responses
//!
//! # Example
//!
//! ```
//! use vrdr_ije::{CodecOptions, IjeRecord};
//! use vrdr_model::DeathRecord;
//!
//! let mut record = DeathRecord::new();
//! record.set_death_jurisdiction("NE");
//! record.set_certificate_number(Some(115)).unwrap();
//!
//! let ije = IjeRecord::from_record(&record, &CodecOptions::strict()).unwrap();
//! assert_eq!(ije.value("FILENO").unwrap(), "000115");
//! assert_eq!(ije.value("STATETEXT_D").unwrap(), "Nebraska");
//!
//! let back = ije.to_record(&CodecOptions::strict()).unwrap();
//! assert_eq!(back, record);
//! ```

pub mod axis;
mod binding;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod record;
pub mod subformat;

pub use catalog::{Catalog, FieldOrder, IJE_LENGTH, catalog};
pub use descriptor::{Binding, FieldDescriptor, Justify, PlaceList, Priority};
pub use error::{IjeError, Result};
pub use options::{CodecOptions, ValidationMode};
pub use record::{IjeRecord, decode, encode};
pub use subformat::{Layout, MRE, MreRecord, SUBFORMAT_LENGTH, TRX, TrxRecord};
