//! Field-level translation between fixed-width text and the record.
//!
//! [`FieldDescriptor::encode`] always yields exactly `width` characters and
//! [`FieldDescriptor::decode`] writes only the slot its binding names, so
//! fields never interfere with each other.

use tracing::trace;
use vrdr_model::{
    ComponentError, DatePart, DeathRecord, PartialDateTime, Slot, TriState, icd10_with_dot,
    icd10_without_dot, slots,
};
use vrdr_standards::{reference, tables};

use crate::axis::{decode_entity_axis, decode_record_axis, encode_entity_axis, encode_record_axis};
use crate::descriptor::{Binding, FieldDescriptor, PlaceList};
use crate::error::{IjeError, Result};
use crate::options::CodecOptions;

/// Ordered `MMDDYYYY` layout of a full date field.
const FULL_DATE_PARTS: [(DatePart, usize); 3] =
    [(DatePart::Month, 0), (DatePart::Day, 2), (DatePart::Year, 4)];

fn place_name(list: PlaceList, code: &str) -> Option<&'static str> {
    match list {
        PlaceList::Jurisdiction => reference::jurisdiction_name(code),
        PlaceList::Country => reference::country_name(code),
    }
}

fn encode_error(field: &'static str, error: &ComponentError) -> IjeError {
    let value = match error {
        ComponentError::Overflow { value, .. } | ComponentError::Reserved { value, .. } => {
            value.clone()
        }
        _ => String::new(),
    };
    IjeError::component(field, value, error)
}

impl FieldDescriptor {
    /// Render the field from the record.
    ///
    /// In lenient mode a value without a fixed-width rendition leaves the
    /// field blank instead of failing.
    pub fn encode(&self, record: &DeathRecord, options: &CodecOptions) -> Result<String> {
        match self.encode_value(record, options) {
            Err(err) if options.is_lenient() && err.is_recoverable() => {
                trace!(field = self.name, kind = self.binding.kind(), "left field blank");
                Ok(self.blank())
            }
            other => other,
        }
    }

    /// Read the field's text into the record.
    ///
    /// Blank text clears the bound datum. In lenient mode an unreadable value
    /// is skipped and the datum is left untouched.
    pub fn decode(&self, text: &str, record: &mut DeathRecord, options: &CodecOptions) -> Result<()> {
        match self.decode_value(text, record) {
            Err(err) if options.is_lenient() && err.is_recoverable() => {
                trace!(field = self.name, kind = self.binding.kind(), "skipped field");
                Ok(())
            }
            other => other,
        }
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    fn encode_value(&self, record: &DeathRecord, options: &CodecOptions) -> Result<String> {
        let name = self.name;
        match self.binding {
            Binding::Text(slot) => self.pad_text(record.text(slot), options),
            Binding::Digits(slot) => match record.get(slot) {
                Some(value) => self.pad_digits(value),
                None => Ok(self.blank()),
            },
            Binding::Coded { slot, table } => match record.get(slot) {
                Some(value) => match table.to_ije(&value) {
                    Some(ije) => self.pad_text(Some(ije), options),
                    None => Err(IjeError::mapping(name, value.to_string())),
                },
                None => Ok(self.blank()),
            },
            Binding::CodedWithLiteral { slot, table } => {
                let Some(value) = record.get(slot) else {
                    return Ok(self.blank());
                };
                if let Some(ije) = table.to_ije(&value) {
                    return self.pad_text(Some(ije), options);
                }
                let literal = [value.text(), value.display()]
                    .into_iter()
                    .find(|s| !s.is_empty());
                match literal {
                    Some(literal) => self.pad_text(Some(literal), options),
                    None => Err(IjeError::mapping(name, value.to_string())),
                }
            }
            Binding::DatePart { slot, part } => record
                .get(slot)
                .unwrap_or_default()
                .encode_part(part)
                .map_err(|e| encode_error(name, &e)),
            Binding::FullDate(slot) => {
                let date = record.get(slot).unwrap_or_default();
                let mut text = String::with_capacity(self.width);
                for (part, _) in FULL_DATE_PARTS {
                    text.push_str(&date.encode_part(part).map_err(|e| encode_error(name, &e))?);
                }
                Ok(text)
            }
            Binding::Quantity(slot) => self.encode_quantity(record.get(slot).unwrap_or_default()),
            Binding::Jurisdiction(slot) => match record.text(slot) {
                Some(code) if !reference::is_jurisdiction(code) => {
                    Err(IjeError::mapping(name, code))
                }
                value => self.pad_text(value, options),
            },
            Binding::Country(slot) => match record.text(slot) {
                Some(code) if !reference::is_country(code) => Err(IjeError::mapping(name, code)),
                value => self.pad_text(value, options),
            },
            Binding::PlaceName { slot, code, list } => {
                let value = record
                    .text(slot)
                    .or_else(|| record.text(code).and_then(|c| place_name(list, c)));
                self.pad_text(value, options)
            }
            Binding::Initial { slot, source } => {
                let value = record.text(slot).map(str::to_string).or_else(|| {
                    record
                        .text(source)
                        .and_then(|s| s.chars().next())
                        .map(String::from)
                });
                self.pad_text(value.as_deref(), options)
            }
            Binding::Icd10(slot) => match record.text(slot) {
                Some(code) => {
                    let undotted = icd10_without_dot(code);
                    if undotted.len() > self.width {
                        return Err(IjeError::range(
                            name,
                            code,
                            format!("longer than {} characters", self.width),
                        ));
                    }
                    self.pad_text(Some(&undotted), options)
                }
                None => Ok(self.blank()),
            },
            Binding::EntityAxis(slot) => {
                encode_entity_axis(name, &record.get(slot).unwrap_or_default())
            }
            Binding::RecordAxis(slot) => {
                encode_record_axis(name, &record.get(slot).unwrap_or_default())
            }
            Binding::Race(category) => match record.text(slots::race(category)) {
                Some(value) if !category.is_literal() && !tables::RACE_FLAG.contains_ije(value) => {
                    Err(IjeError::mapping(name, value))
                }
                value => self.pad_text(value, options),
            },
            Binding::Control(reset) => self.pad_text(Some(reset), options),
            Binding::Legacy => Ok(self.blank()),
        }
    }

    /// Left-justify text, replacing characters the format cannot carry.
    fn pad_text(&self, value: Option<&str>, options: &CodecOptions) -> Result<String> {
        let Some(value) = value else {
            return Ok(self.blank());
        };
        let ascii: String = value
            .chars()
            .map(|c| match c {
                c if c.is_ascii_control() => ' ',
                c if c.is_ascii() => c,
                _ => '?',
            })
            .collect();
        let width = self.width;
        if ascii.len() > width {
            if !options.truncate_text {
                return Err(IjeError::range(
                    self.name,
                    value,
                    format!("longer than {width} characters"),
                ));
            }
            return Ok(ascii[..width].to_string());
        }
        Ok(format!("{ascii:<width$}"))
    }

    fn pad_digits(&self, value: u32) -> Result<String> {
        let width = self.width;
        let digits = value.to_string();
        if digits.len() > width {
            return Err(IjeError::range(
                self.name,
                digits,
                format!("does not fit in {width} digits"),
            ));
        }
        Ok(format!("{digits:0>width$}"))
    }

    fn encode_quantity(&self, value: TriState<u32>) -> Result<String> {
        match value {
            TriState::Unspecified => Ok(self.blank()),
            TriState::ExplicitlyUnknown => Ok("9".repeat(self.width)),
            TriState::Known(value) => {
                let digits = self.pad_digits(value)?;
                if digits.bytes().all(|b| b == b'9') {
                    return Err(IjeError::range(
                        self.name,
                        digits,
                        "collides with the all-9 unknown pattern",
                    ));
                }
                Ok(digits)
            }
        }
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    fn decode_value(&self, text: &str, record: &mut DeathRecord) -> Result<()> {
        let name = self.name;
        let value = text.trim();
        match self.binding {
            Binding::Text(slot) => record.set_text(slot, value),
            Binding::Digits(slot) => {
                if value.is_empty() {
                    record.clear(slot);
                } else if value.bytes().all(|b| b.is_ascii_digit()) {
                    let number = value
                        .parse::<u32>()
                        .map_err(|e| IjeError::range(name, value, e.to_string()))?;
                    record.set(slot, Some(number));
                } else {
                    return Err(IjeError::range(name, value, "expected digits"));
                }
            }
            Binding::Coded { slot, table } => {
                if value.is_empty() {
                    record.clear(slot);
                } else {
                    let coded = table
                        .to_coded(value)
                        .ok_or_else(|| IjeError::mapping(name, value))?;
                    record.set(slot, Some(coded));
                }
            }
            Binding::CodedWithLiteral { slot, table } => {
                if value.is_empty() {
                    record.clear(slot);
                } else {
                    let coded = match (table.to_coded(value), table.other()) {
                        (Some(coded), _) => coded,
                        (None, Some(other)) => other.to_coded().with_text(value),
                        (None, None) => return Err(IjeError::mapping(name, value)),
                    };
                    record.set(slot, Some(coded));
                }
            }
            Binding::DatePart { slot, part } => {
                let mut date = record.get(slot).unwrap_or_default();
                date.decode_part(part, text)
                    .map_err(|e| IjeError::component(name, value, &e))?;
                self.store_date(record, slot, date, value)?;
            }
            Binding::FullDate(slot) => {
                let mut date = record.get(slot).unwrap_or_default();
                for (part, offset) in FULL_DATE_PARTS {
                    let piece = text.get(offset..offset + part.width()).unwrap_or("");
                    date.decode_part(part, piece)
                        .map_err(|e| IjeError::component(name, value, &e))?;
                }
                self.store_date(record, slot, date, value)?;
            }
            Binding::Quantity(slot) => {
                let quantity = if value.is_empty() {
                    TriState::Unspecified
                } else if value.len() == self.width && value.bytes().all(|b| b == b'9') {
                    TriState::ExplicitlyUnknown
                } else if value.bytes().all(|b| b.is_ascii_digit()) {
                    let number = value
                        .parse::<u32>()
                        .map_err(|e| IjeError::range(name, value, e.to_string()))?;
                    TriState::Known(number)
                } else {
                    return Err(IjeError::range(name, value, "expected digits"));
                };
                record.set(slot, Some(quantity));
            }
            Binding::Jurisdiction(slot) => {
                if !value.is_empty() && !reference::is_jurisdiction(value) {
                    return Err(IjeError::mapping(name, value));
                }
                record.set_text(slot, value);
            }
            Binding::Country(slot) => {
                if !value.is_empty() && !reference::is_country(value) {
                    return Err(IjeError::mapping(name, value));
                }
                record.set_text(slot, value);
            }
            Binding::PlaceName { slot, code, list } => {
                let fallback = record.text(code).and_then(|c| place_name(list, c));
                if fallback.is_some_and(|n| n.eq_ignore_ascii_case(value)) {
                    record.clear(slot);
                } else {
                    record.set_text(slot, value);
                }
            }
            Binding::Initial { slot, source } => {
                let first = record.text(source).and_then(|s| s.chars().next());
                let mut chars = value.chars();
                if chars.next() == first && chars.next().is_none() {
                    record.clear(slot);
                } else {
                    record.set_text(slot, value);
                }
            }
            Binding::Icd10(slot) => record.set_text(slot, &icd10_with_dot(value)),
            Binding::EntityAxis(slot) => {
                let entries = decode_entity_axis(name, text)?;
                record.set(slot, Some(entries));
            }
            Binding::RecordAxis(slot) => {
                let entries = decode_record_axis(name, text)?;
                record.set(slot, Some(entries));
            }
            Binding::Race(category) => {
                if !value.is_empty()
                    && !category.is_literal()
                    && !tables::RACE_FLAG.contains_ije(value)
                {
                    return Err(IjeError::mapping(name, value));
                }
                record.set_text(slots::race(category), value);
            }
            Binding::Control(_) => {}
            Binding::Legacy => {
                if !value.is_empty() && value != "0" {
                    return Err(IjeError::LegacySchema {
                        field: name,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn store_date(
        &self,
        record: &mut DeathRecord,
        slot: Slot<PartialDateTime>,
        date: PartialDateTime,
        value: &str,
    ) -> Result<()> {
        if !date.is_empty() {
            date.validate()
                .map_err(|e| IjeError::component(self.name, value, &e))?;
        }
        record.set(slot, Some(date));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vrdr_model::CodedValue;

    use super::*;
    use crate::catalog::catalog;

    fn field(name: &str) -> &'static FieldDescriptor {
        catalog().get(name).unwrap()
    }

    #[test]
    fn test_text_padding_and_truncation() {
        let mut record = DeathRecord::new();
        record.set_given_name("Madelyn");
        let gname = field("GNAME");
        let text = gname.encode(&record, &CodecOptions::strict()).unwrap();
        assert_eq!(text.len(), gname.width);
        assert!(text.starts_with("Madelyn "));

        record.set_given_name(&"x".repeat(gname.width + 5));
        let text = gname.encode(&record, &CodecOptions::strict()).unwrap();
        assert_eq!(text, "x".repeat(gname.width));

        let no_truncation = CodecOptions::strict().with_truncation(false);
        assert!(matches!(
            gname.encode(&record, &no_truncation),
            Err(IjeError::Range { .. })
        ));
    }

    #[test]
    fn test_non_ascii_becomes_question_mark() {
        let mut record = DeathRecord::new();
        record.set_last_name("Muñoz");
        let text = field("LNAME").encode(&record, &CodecOptions::strict()).unwrap();
        assert!(text.starts_with("Mu?oz "));
    }

    #[test]
    fn test_unmapped_code_strict_and_lenient() {
        let mut record = DeathRecord::new();
        record.set_sex(Some(CodedValue::from_code("dragon")));
        let sex = field("SEX");
        assert!(matches!(
            sex.encode(&record, &CodecOptions::strict()),
            Err(IjeError::Mapping { field: "SEX", .. })
        ));
        assert_eq!(sex.encode(&record, &CodecOptions::lenient()).unwrap(), " ");
    }

    #[test]
    fn test_transport_role_literal() {
        let trans = field("TRANSPRT");
        let mut record = DeathRecord::new();
        trans
            .decode("Bicyclist", &mut record, &CodecOptions::strict())
            .unwrap();
        let role = record.transportation_role().unwrap();
        assert_eq!(role.text(), "Bicyclist");
        let text = trans.encode(&record, &CodecOptions::strict()).unwrap();
        assert_eq!(text.trim_end(), "Bicyclist");
    }

    #[test]
    fn test_certifier_type_codes_and_literal() {
        let certl = field("CERTL");
        let options = CodecOptions::strict();
        let mut record = DeathRecord::new();
        certl.decode("P", &mut record, &options).unwrap();
        assert_eq!(
            record.certifier_type().map(|v| v.code().to_string()),
            Some("434641000124105".to_string())
        );

        certl.decode("Nurse Practitioner", &mut record, &options).unwrap();
        let certifier = record.certifier_type().unwrap();
        assert_eq!(certifier.code(), "OTH");
        assert_eq!(certifier.text(), "Nurse Practitioner");
        let text = certl.encode(&record, &options).unwrap();
        assert_eq!(text.trim_end(), "Nurse Practitioner");
    }

    #[test]
    fn test_injury_time_unit_is_coded() {
        let unit = field("TOI_UNIT");
        let mut record = DeathRecord::new();
        unit.decode("M", &mut record, &CodecOptions::strict()).unwrap();
        assert_eq!(record.injury_time_unit().map(|v| v.code().to_string()), Some("24HR".to_string()));
        assert!(matches!(
            unit.decode("X", &mut record, &CodecOptions::strict()),
            Err(IjeError::Mapping { field: "TOI_UNIT", .. })
        ));
    }

    #[test]
    fn test_date_part_keeps_siblings() {
        let mut record = DeathRecord::new();
        let options = CodecOptions::strict();
        field("DOD_YR").decode("2019", &mut record, &options).unwrap();
        field("DOD_MO").decode("99", &mut record, &options).unwrap();
        let date = record.death_date().unwrap();
        assert_eq!(date.year, TriState::Known(2019));
        assert!(date.month.is_explicitly_unknown());
        assert!(date.day.is_unspecified());
    }

    #[test]
    fn test_date_part_range_checked() {
        let mut record = DeathRecord::new();
        let err = field("DOD_MO")
            .decode("13", &mut record, &CodecOptions::strict())
            .unwrap_err();
        assert!(matches!(err, IjeError::Range { field: "DOD_MO", .. }));
        assert!(record.death_date().is_none());
    }

    #[test]
    fn test_age_unknown_and_reserved() {
        let age = field("AGE");
        let mut record = DeathRecord::new();
        age.decode("999", &mut record, &CodecOptions::strict()).unwrap();
        assert_eq!(record.age_value(), Some(TriState::ExplicitlyUnknown));

        record.set_age_value(Some(TriState::Known(999)));
        assert!(age.encode(&record, &CodecOptions::strict()).is_err());
        record.set_age_value(Some(TriState::Known(45)));
        assert_eq!(age.encode(&record, &CodecOptions::strict()).unwrap(), "045");
    }

    #[test]
    fn test_state_name_falls_back_to_code() {
        let mut record = DeathRecord::new();
        record.set_death_jurisdiction("NE");
        let text = field("STATETEXT_D")
            .encode(&record, &CodecOptions::strict())
            .unwrap();
        assert_eq!(text.trim_end(), "Nebraska");
    }

    #[test]
    fn test_control_ignores_input() {
        let mut record = DeathRecord::new();
        let void = field("VOID");
        void.decode("0", &mut record, &CodecOptions::strict()).unwrap();
        assert!(record.is_empty());
        assert_eq!(void.encode(&record, &CodecOptions::strict()).unwrap(), "1");
    }
}
