//! The 5000-character IJE mortality record.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use vrdr_model::DeathRecord;

use crate::catalog::{FieldOrder, IJE_LENGTH, catalog};
use crate::descriptor::{FieldDescriptor, Justify};
use crate::error::{IjeError, Result};
use crate::options::CodecOptions;

/// Name reported for non-ASCII content outside any field.
const FILLER: &str = "FILLER";

/// A fixed-width IJE record, always exactly [`IJE_LENGTH`] ASCII characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IjeRecord {
    line: String,
}

impl Default for IjeRecord {
    fn default() -> Self {
        Self::blank()
    }
}

impl IjeRecord {
    /// An all-space record.
    pub fn blank() -> Self {
        Self {
            line: " ".repeat(IJE_LENGTH),
        }
    }

    /// Accept a record line. Short lines are padded with spaces; a trailing
    /// line break is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(offset) = line.find(|c: char| !c.is_ascii()) {
            let field = catalog().at_offset(offset).map_or(FILLER, |f| f.name);
            return Err(IjeError::NonAscii { field });
        }
        if line.len() > IJE_LENGTH {
            return Err(IjeError::Length {
                format: "IJE",
                expected: IJE_LENGTH,
                actual: line.len(),
            });
        }
        Ok(Self {
            line: format!("{line:<IJE_LENGTH$}"),
        })
    }

    /// Encode every catalog field from the record.
    pub fn from_record(record: &DeathRecord, options: &CodecOptions) -> Result<Self> {
        let mut ije = Self::blank();
        for field in catalog().fields() {
            let text = field.encode(record, options)?;
            ije.write(field, &text);
        }
        debug!(
            identifier = %record.identifier(),
            lenient = options.is_lenient(),
            "encoded IJE record"
        );
        Ok(ije)
    }

    /// Decode every field into a new record.
    ///
    /// Fields are read in content priority order, so a derived field sees
    /// the datum it falls back to.
    pub fn to_record(&self, options: &CodecOptions) -> Result<DeathRecord> {
        let mut record = DeathRecord::new();
        for field in catalog().by_priority() {
            field.decode(self.raw(field), &mut record, options)?;
        }
        debug!(
            identifier = %record.identifier(),
            lenient = options.is_lenient(),
            "decoded IJE record"
        );
        Ok(record)
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn into_string(self) -> String {
        self.line
    }

    /// Raw characters of a field, padding included.
    pub fn field(&self, name: &str) -> Result<&str> {
        Ok(self.raw(lookup(name)?))
    }

    /// Field content without padding.
    pub fn value(&self, name: &str) -> Result<&str> {
        let field = lookup(name)?;
        let raw = self.raw(field);
        Ok(match field.justify {
            Justify::Left => raw.trim_end(),
            Justify::Right => raw.trim(),
        })
    }

    /// Overwrite a field with a raw value, padded per the field's justification.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        let field = lookup(name)?;
        if !value.is_ascii() {
            return Err(IjeError::NonAscii { field: field.name });
        }
        let width = field.width;
        if value.len() > width {
            return Err(IjeError::range(
                field.name,
                value,
                format!("longer than {width} characters"),
            ));
        }
        let text = match field.justify {
            Justify::Right if !value.trim().is_empty() => format!("{value:0>width$}"),
            _ => format!("{value:<width$}"),
        };
        self.write(field, &text);
        Ok(())
    }

    /// `(name, value)` pairs for every field in the requested order.
    pub fn dump(&self, order: FieldOrder) -> Vec<(&'static str, &str)> {
        catalog()
            .ordered(order)
            .iter()
            .map(|field| (field.name, self.raw(field).trim_end()))
            .collect()
    }

    pub(crate) fn raw(&self, field: &FieldDescriptor) -> &str {
        &self.line[field.range()]
    }

    /// Replace a field's characters; `text` is exactly the field width.
    pub(crate) fn write(&mut self, field: &FieldDescriptor, text: &str) {
        debug_assert_eq!(text.len(), field.width, "field {}", field.name);
        self.line.replace_range(field.range(), text);
    }
}

fn lookup(name: &str) -> Result<&'static FieldDescriptor> {
    catalog().get(name).ok_or_else(|| IjeError::UnknownField {
        name: name.to_string(),
    })
}

impl fmt::Display for IjeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl FromStr for IjeRecord {
    type Err = IjeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Encode a record to an IJE line.
pub fn encode(record: &DeathRecord, options: &CodecOptions) -> Result<String> {
    IjeRecord::from_record(record, options).map(IjeRecord::into_string)
}

/// Decode an IJE line to a record.
pub fn decode(line: &str, options: &CodecOptions) -> Result<DeathRecord> {
    IjeRecord::parse(line)?.to_record(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pads_short_lines() {
        let ije = IjeRecord::parse("2019MA000001\r\n").unwrap();
        assert_eq!(ije.as_str().len(), IJE_LENGTH);
        assert_eq!(ije.value("DSTATE").unwrap(), "MA");
    }

    #[test]
    fn test_parse_rejects_long_lines() {
        let err = IjeRecord::parse(&"x".repeat(IJE_LENGTH + 1)).unwrap_err();
        assert!(matches!(
            err,
            IjeError::Length {
                expected: IJE_LENGTH,
                actual: 5001,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_names_non_ascii_field() {
        let err = IjeRecord::parse("2019MA000001 é").unwrap_err();
        assert!(matches!(err, IjeError::NonAscii { field } if field != FILLER));
    }

    #[test]
    fn test_set_field_justification() {
        let mut ije = IjeRecord::blank();
        ije.set_field("fileno", "115").unwrap();
        assert_eq!(ije.field("FILENO").unwrap(), "000115");
        ije.set_field("GNAME", "Ann").unwrap();
        assert!(ije.field("GNAME").unwrap().starts_with("Ann "));
        assert!(matches!(
            ije.set_field("NOPE", "1"),
            Err(IjeError::UnknownField { .. })
        ));
        assert!(ije.set_field("DSTATE", "MAS").is_err());
    }
}
