//! Embedded reference data.
//!
//! The CSV files are compiled into the binary with `include_str!()`, so
//! lookups never touch the filesystem.

/// Jurisdictions (states, territories and New York City): `Code,Name,Kind`.
pub const JURISDICTIONS_CSV: &str = include_str!("../data/jurisdictions.csv");

/// Countries: `Code,Name`.
pub const COUNTRIES_CSV: &str = include_str!("../data/countries.csv");
