//! Jurisdiction and country reference data.
//!
//! The embedded CSV files are parsed on first use into read-only indexes.
//! Codes are matched exactly after trimming and upper-casing; names are
//! matched case-insensitively.

use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::embedded;
use crate::error::{Result, StandardsError};

/// One jurisdiction or country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub code: String,
    pub name: String,
    /// `State`, `Territory`, ... for jurisdictions; absent for countries.
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceCsvRow {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Kind", default)]
    kind: String,
}

/// A code ↔ name index.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    by_code: BTreeMap<String, Place>,
    by_name: HashMap<String, String>,
}

impl ReferenceTable {
    /// Parse `Code,Name[,Kind]` CSV content.
    ///
    /// Rows with a blank code or name are skipped with a warning; a duplicated
    /// code is an error.
    pub fn from_csv_str(content: &str, file: &str) -> Result<Self> {
        let cursor = Cursor::new(content.as_bytes());
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(cursor);

        let mut table = Self::default();
        for (index, result) in reader.deserialize::<PlaceCsvRow>().enumerate() {
            let row = result.map_err(|source| StandardsError::CsvRead {
                file: file.to_string(),
                source,
            })?;
            let code = row.code.trim().to_uppercase();
            let name = row.name.trim();
            if code.is_empty() || name.is_empty() {
                warn!(file = %file, row = index + 2, "Skipping reference row without code or name");
                continue;
            }
            if table.by_code.contains_key(&code) {
                return Err(StandardsError::InvalidValue {
                    field: "Code",
                    value: code,
                    file: file.to_string(),
                });
            }
            let kind = row.kind.trim();
            table.by_name.insert(name.to_uppercase(), code.clone());
            table.by_code.insert(
                code.clone(),
                Place {
                    code,
                    name: name.to_string(),
                    kind: (!kind.is_empty()).then(|| kind.to_string()),
                },
            );
        }
        Ok(table)
    }

    pub fn get(&self, code: &str) -> Option<&Place> {
        self.by_code.get(&code.trim().to_uppercase())
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.get(code).map(|place| place.name.as_str())
    }

    /// Code for a name, ignoring case.
    pub fn code(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.trim().to_uppercase())
            .map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.by_code.values()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

fn load_embedded(content: &str, file: &str) -> ReferenceTable {
    match ReferenceTable::from_csv_str(content, file) {
        Ok(table) => {
            debug!(file = %file, entries = table.len(), "Loaded reference data");
            table
        }
        Err(err) => {
            error!(file = %file, error = %err, "Embedded reference data failed to load");
            ReferenceTable::default()
        }
    }
}

static JURISDICTIONS: LazyLock<ReferenceTable> =
    LazyLock::new(|| load_embedded(embedded::JURISDICTIONS_CSV, "jurisdictions.csv"));

static COUNTRIES: LazyLock<ReferenceTable> =
    LazyLock::new(|| load_embedded(embedded::COUNTRIES_CSV, "countries.csv"));

/// States, territories and separately reporting jurisdictions.
pub fn jurisdictions() -> &'static ReferenceTable {
    &JURISDICTIONS
}

pub fn countries() -> &'static ReferenceTable {
    &COUNTRIES
}

pub fn jurisdiction_name(code: &str) -> Option<&'static str> {
    JURISDICTIONS.name(code)
}

pub fn jurisdiction_code(name: &str) -> Option<&'static str> {
    JURISDICTIONS.code(name)
}

pub fn is_jurisdiction(code: &str) -> bool {
    JURISDICTIONS.contains(code)
}

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES.name(code)
}

pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRIES.code(name)
}

pub fn is_country(code: &str) -> bool {
    COUNTRIES.contains(code)
}
