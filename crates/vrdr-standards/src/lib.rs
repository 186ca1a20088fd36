//! Code tables and reference data for death records.
//!
//! This crate provides:
//!
//! - [`table`]: the bidirectional [`CodeTable`] type
//! - [`tables`]: one static table per coded field family of the fixed-width format
//! - [`codes`]: factory functions for common coded values
//! - [`systems`]: code system URIs
//! - [`reference`]: embedded jurisdiction and country lists
//!
//! Everything here is built once and read-only afterwards.
//!
//! # Example
//!
//! ```
//! use vrdr_standards::{reference, tables};
//!
//! let manner = tables::MANNER_OF_DEATH.to_coded("A").unwrap();
//! assert_eq!(manner.code(), "7878000");
//! assert_eq!(tables::MANNER_OF_DEATH.to_ije(&manner), Some("A"));
//! assert_eq!(reference::jurisdiction_name("NE"), Some("Nebraska"));
//! ```

pub mod codes;
mod embedded;
pub mod error;
pub mod reference;
pub mod systems;
pub mod table;
pub mod tables;

pub use error::{Result, StandardsError};
pub use reference::{Place, ReferenceTable};
pub use table::{CodeRow, CodeTable};
