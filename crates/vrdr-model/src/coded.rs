//! Coded values for controlled-vocabulary fields.
//!
//! A [`CodedValue`] is the `{code, system, display, text}` tuple every coded
//! certificate field carries. Keys that are not present read back as an empty
//! string; an empty string is never stored.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Map key for the code.
pub const CODE_KEY: &str = "code";
/// Map key for the code system URI.
pub const SYSTEM_KEY: &str = "system";
/// Map key for the display text.
pub const DISPLAY_KEY: &str = "display";
/// Map key for the free-text literal.
pub const TEXT_KEY: &str = "text";

/// A code drawn from a code system, with optional display and free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodedValue {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

impl CodedValue {
    /// Create a coded value. Empty `system` or `display` are stored as absent.
    pub fn new(
        code: impl Into<String>,
        system: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            system: non_empty(system),
            display: non_empty(display),
            text: None,
        }
    }

    /// Create a value carrying only a code.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Attach a free-text literal.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = non_empty(text);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Code system URI, or `""` when absent.
    pub fn system(&self) -> &str {
        self.system.as_deref().unwrap_or_default()
    }

    /// Display text, or `""` when absent.
    pub fn display(&self) -> &str {
        self.display.as_deref().unwrap_or_default()
    }

    /// Free-text literal, or `""` when absent.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn has_system(&self) -> bool {
        self.system.is_some()
    }

    /// Whether the value carries no code.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Dictionary view; only present keys are emitted.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(CODE_KEY.to_string(), self.code.clone());
        if let Some(system) = &self.system {
            map.insert(SYSTEM_KEY.to_string(), system.clone());
        }
        if let Some(display) = &self.display {
            map.insert(DISPLAY_KEY.to_string(), display.clone());
        }
        if let Some(text) = &self.text {
            map.insert(TEXT_KEY.to_string(), text.clone());
        }
        map
    }

    /// Build from a dictionary view. Returns `None` when there is no code.
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let code = map.get(CODE_KEY).filter(|code| !code.is_empty())?;
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        Some(
            Self::new(code.clone(), get(SYSTEM_KEY), get(DISPLAY_KEY))
                .with_text(get(TEXT_KEY)),
        )
    }

    /// Whether `other` names the same concept (code and, when both carry
    /// one, system).
    pub fn same_concept(&self, other: &Self) -> bool {
        self.code == other.code
            && match (&self.system, &other.system) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }
}

impl fmt::Display for CodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.system {
            Some(system) => write!(f, "{}|{}", system, self.code),
            None => f.write_str(&self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_read_empty() {
        let value = CodedValue::from_code("M");
        assert_eq!(value.code(), "M");
        assert_eq!(value.system(), "");
        assert_eq!(value.display(), "");
        assert_eq!(value.text(), "");
    }

    #[test]
    fn test_empty_strings_not_stored() {
        let value = CodedValue::new("M", "", "").with_text("");
        assert_eq!(value.to_map().len(), 1);
        assert!(!value.has_system());
    }

    #[test]
    fn test_map_view() {
        let value = CodedValue::new("OTH", "http://example.org", "Other").with_text("Bicycle");
        let map = value.to_map();
        assert_eq!(map.get(TEXT_KEY).map(String::as_str), Some("Bicycle"));
        assert_eq!(CodedValue::from_map(&map), Some(value));
    }

    #[test]
    fn test_from_map_requires_code() {
        let mut map = BTreeMap::new();
        map.insert(DISPLAY_KEY.to_string(), "Male".to_string());
        assert_eq!(CodedValue::from_map(&map), None);
    }

    #[test]
    fn test_same_concept_ignores_missing_system() {
        let full = CodedValue::new("Y", "http://example.org/yn", "Yes");
        assert!(full.same_concept(&CodedValue::from_code("Y")));
        assert!(!full.same_concept(&CodedValue::new("Y", "http://other", "")));
    }

    #[test]
    fn test_display() {
        assert_eq!(CodedValue::new("F", "urn:sex", "").to_string(), "urn:sex|F");
        assert_eq!(CodedValue::from_code("F").to_string(), "F");
    }
}
