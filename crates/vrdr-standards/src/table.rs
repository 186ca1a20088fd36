//! Bidirectional code tables.
//!
//! A [`CodeTable`] maps the single-character (or short) category values of
//! the fixed-width format onto coded values and back. Every row is usable in
//! both directions, so one table replaces a pair of hand-written maps.

use vrdr_model::CodedValue;

/// One category: its fixed-width value and its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRow {
    pub ije: &'static str,
    pub code: &'static str,
    pub system: &'static str,
    pub display: &'static str,
}

impl CodeRow {
    pub const fn new(
        ije: &'static str,
        code: &'static str,
        system: &'static str,
        display: &'static str,
    ) -> Self {
        Self {
            ije,
            code,
            system,
            display,
        }
    }

    pub fn to_coded(&self) -> CodedValue {
        CodedValue::new(self.code, self.system, self.display)
    }

    /// Codes must match; systems are compared only when the value has one.
    pub fn matches(&self, value: &CodedValue) -> bool {
        value.code() == self.code && (!value.has_system() || value.system() == self.system)
    }
}

/// A static, read-only code table.
#[derive(Debug)]
pub struct CodeTable {
    name: &'static str,
    rows: &'static [CodeRow],
    other: Option<CodeRow>,
}

impl CodeTable {
    pub const fn new(name: &'static str, rows: &'static [CodeRow]) -> Self {
        Self {
            name,
            rows,
            other: None,
        }
    }

    /// Attach the Other fallback used when a value has no category.
    pub const fn with_other(self, other: CodeRow) -> Self {
        Self {
            name: self.name,
            rows: self.rows,
            other: Some(other),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn rows(&self) -> &'static [CodeRow] {
        self.rows
    }

    /// The Other fallback row, if this table has one.
    pub const fn other(&self) -> Option<&CodeRow> {
        self.other.as_ref()
    }

    /// Coded value for a fixed-width category.
    pub fn to_coded(&self, ije: &str) -> Option<CodedValue> {
        self.row_for_ije(ije).map(CodeRow::to_coded)
    }

    /// Fixed-width category for a coded value.
    pub fn to_ije(&self, value: &CodedValue) -> Option<&'static str> {
        self.rows
            .iter()
            .find(|row| row.matches(value))
            .map(|row| row.ije)
    }

    pub fn row_for_ije(&self, ije: &str) -> Option<&CodeRow> {
        self.rows.iter().find(|row| row.ije == ije)
    }

    pub fn contains_ije(&self, ije: &str) -> bool {
        self.row_for_ije(ije).is_some()
    }

    /// Whether the value is this table's Other code.
    pub fn is_other(&self, value: &CodedValue) -> bool {
        self.other.is_some_and(|row| row.matches(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: CodeTable = CodeTable::new(
        "test",
        &[
            CodeRow::new("A", "a-code", "urn:a", "Alpha"),
            CodeRow::new("B", "b-code", "urn:a", "Beta"),
        ],
    )
    .with_other(CodeRow::new("", "OTH", "urn:other", "Other"));

    #[test]
    fn test_lookup_both_directions() {
        let coded = TABLE.to_coded("B").unwrap();
        assert_eq!(coded.code(), "b-code");
        assert_eq!(coded.display(), "Beta");
        assert_eq!(TABLE.to_ije(&coded), Some("B"));
        assert_eq!(TABLE.to_coded("Z"), None);
    }

    #[test]
    fn test_system_checked_only_when_present() {
        assert_eq!(TABLE.to_ije(&CodedValue::from_code("a-code")), Some("A"));
        assert_eq!(
            TABLE.to_ije(&CodedValue::new("a-code", "urn:elsewhere", "")),
            None
        );
    }

    #[test]
    fn test_other_fallback() {
        assert!(TABLE.is_other(&CodedValue::new("OTH", "urn:other", "Other")));
        assert!(!TABLE.is_other(&CodedValue::from_code("a-code")));
        assert_eq!(TABLE.other().map(|row| row.code), Some("OTH"));
    }
}
