//! Coded causes of death.
//!
//! The entity axis lists every condition per certificate line; the record
//! axis is the deduplicated list for the whole certificate. Codes are ICD-10
//! with the decimal point (`I25.1`).

use serde::{Deserialize, Serialize};

/// One condition coded from a line of the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAxisEntry {
    /// Certificate line (1-6).
    pub line: u8,
    /// Position on the line (1-8).
    pub position: u8,
    pub code: String,
    /// Whether the code is an external-cause (e-code) entry.
    #[serde(default)]
    pub e_code: bool,
}

impl EntityAxisEntry {
    pub fn new(line: u8, position: u8, code: impl Into<String>, e_code: bool) -> Self {
        Self {
            line,
            position,
            code: code.into(),
            e_code,
        }
    }
}

/// One condition on the deduplicated record axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAxisEntry {
    /// Position in the record axis list (1-20).
    pub position: u8,
    pub code: String,
    /// Whether the condition is flagged as pregnancy related.
    #[serde(default)]
    pub pregnancy: bool,
}

impl RecordAxisEntry {
    pub fn new(position: u8, code: impl Into<String>, pregnancy: bool) -> Self {
        Self {
            position,
            code: code.into(),
            pregnancy,
        }
    }
}

/// Insert the decimal point into an undotted ICD-10 code (`I251` → `I25.1`).
pub fn icd10_with_dot(code: &str) -> String {
    let code = code.trim();
    if code.len() > 3 && !code.contains('.') && code.is_ascii() {
        format!("{}.{}", &code[..3], &code[3..])
    } else {
        code.to_string()
    }
}

/// Remove the decimal point from an ICD-10 code (`I25.1` → `I251`).
pub fn icd10_without_dot(code: &str) -> String {
    code.trim().replace('.', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icd10_dot_handling() {
        assert_eq!(icd10_with_dot("I251"), "I25.1");
        assert_eq!(icd10_with_dot("R99"), "R99");
        assert_eq!(icd10_with_dot("I25.1"), "I25.1");
        assert_eq!(icd10_without_dot("I25.1"), "I251");
        assert_eq!(icd10_without_dot(icd10_with_dot("X440").as_str()), "X440");
    }
}
