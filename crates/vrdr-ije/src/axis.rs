//! Fixed-width grammar of the coded cause lists.
//!
//! Entity axis: 20 slots of 8 characters, each `line(1) position(1)
//! code(5) e-code flag(1)` with `&` marking an e-code.
//!
//! Record axis: 20 slots of 5 characters, each `code(4) flag(1)` with `1`
//! marking a pregnancy-related condition. The slot index is the position.
//!
//! Codes are undotted in the field and dotted in the record.

use vrdr_model::{EntityAxisEntry, RecordAxisEntry, icd10_with_dot, icd10_without_dot};

use crate::error::{IjeError, Result};

pub const AXIS_SLOTS: usize = 20;
pub const ENTITY_SLOT_WIDTH: usize = 8;
pub const RECORD_SLOT_WIDTH: usize = 5;

const ENTITY_CODE_WIDTH: usize = 5;
const RECORD_CODE_WIDTH: usize = 4;
const E_CODE_FLAG: char = '&';
const PREGNANCY_FLAG: char = '1';

fn undotted(field: &'static str, code: &str, width: usize) -> Result<String> {
    let code = icd10_without_dot(code);
    if code.is_empty() {
        return Err(IjeError::axis(field, "entry without a code"));
    }
    if code.len() > width || !code.is_ascii() {
        return Err(IjeError::axis(
            field,
            format!("code {code} does not fit in {width} characters"),
        ));
    }
    Ok(code)
}

pub fn encode_entity_axis(field: &'static str, entries: &[EntityAxisEntry]) -> Result<String> {
    if entries.len() > AXIS_SLOTS {
        return Err(IjeError::axis(
            field,
            format!("{} entries exceed the {AXIS_SLOTS} slots", entries.len()),
        ));
    }
    let mut out = String::with_capacity(AXIS_SLOTS * ENTITY_SLOT_WIDTH);
    for entry in entries {
        if !(1..=6).contains(&entry.line) {
            return Err(IjeError::axis(field, format!("line {} is not 1-6", entry.line)));
        }
        if !(1..=8).contains(&entry.position) {
            return Err(IjeError::axis(
                field,
                format!("position {} is not 1-8", entry.position),
            ));
        }
        let code = undotted(field, &entry.code, ENTITY_CODE_WIDTH)?;
        let flag = if entry.e_code { E_CODE_FLAG } else { ' ' };
        out.push_str(&format!(
            "{}{}{code:<width$}{flag}",
            entry.line,
            entry.position,
            width = ENTITY_CODE_WIDTH
        ));
    }
    Ok(format!("{out:<width$}", width = AXIS_SLOTS * ENTITY_SLOT_WIDTH))
}

pub fn decode_entity_axis(field: &'static str, text: &str) -> Result<Vec<EntityAxisEntry>> {
    let mut entries = Vec::new();
    for (index, chunk) in slots(text, ENTITY_SLOT_WIDTH).enumerate() {
        if chunk.trim().is_empty() {
            continue;
        }
        let mut chars = chunk.chars();
        let line = digit(field, index, chars.next())?;
        let position = digit(field, index, chars.next())?;
        if !(1..=6).contains(&line) || !(1..=8).contains(&position) {
            return Err(IjeError::axis(
                field,
                format!("slot {}: line {line} position {position} out of range", index + 1),
            ));
        }
        let code: String = chunk.chars().skip(2).take(ENTITY_CODE_WIDTH).collect();
        let code = code.trim();
        if code.is_empty() {
            return Err(IjeError::axis(field, format!("slot {}: missing code", index + 1)));
        }
        let e_code = match chunk.chars().nth(ENTITY_SLOT_WIDTH - 1) {
            Some(E_CODE_FLAG) => true,
            Some(' ') | None => false,
            Some(other) => {
                return Err(IjeError::axis(
                    field,
                    format!("slot {}: unexpected flag '{other}'", index + 1),
                ));
            }
        };
        entries.push(EntityAxisEntry::new(line, position, icd10_with_dot(code), e_code));
    }
    Ok(entries)
}

pub fn encode_record_axis(field: &'static str, entries: &[RecordAxisEntry]) -> Result<String> {
    let mut cells = vec![" ".repeat(RECORD_SLOT_WIDTH); AXIS_SLOTS];
    for entry in entries {
        let position = usize::from(entry.position);
        if !(1..=AXIS_SLOTS).contains(&position) {
            return Err(IjeError::axis(
                field,
                format!("position {position} is not 1-{AXIS_SLOTS}"),
            ));
        }
        let cell = &mut cells[position - 1];
        if !cell.trim().is_empty() {
            return Err(IjeError::axis(
                field,
                format!("position {position} used twice"),
            ));
        }
        let code = undotted(field, &entry.code, RECORD_CODE_WIDTH)?;
        let flag = if entry.pregnancy { PREGNANCY_FLAG } else { ' ' };
        *cell = format!("{code:<width$}{flag}", width = RECORD_CODE_WIDTH);
    }
    Ok(cells.concat())
}

pub fn decode_record_axis(field: &'static str, text: &str) -> Result<Vec<RecordAxisEntry>> {
    let mut entries = Vec::new();
    for (index, chunk) in slots(text, RECORD_SLOT_WIDTH).enumerate() {
        if chunk.trim().is_empty() {
            continue;
        }
        let code: String = chunk.chars().take(RECORD_CODE_WIDTH).collect();
        let code = code.trim();
        if code.is_empty() {
            return Err(IjeError::axis(field, format!("slot {}: missing code", index + 1)));
        }
        let pregnancy = match chunk.chars().nth(RECORD_CODE_WIDTH) {
            Some(PREGNANCY_FLAG) => true,
            Some(' ') | None => false,
            Some(other) => {
                return Err(IjeError::axis(
                    field,
                    format!("slot {}: unexpected flag '{other}'", index + 1),
                ));
            }
        };
        // index < AXIS_SLOTS, so the position fits in u8
        let position = u8::try_from(index + 1).unwrap_or(u8::MAX);
        entries.push(RecordAxisEntry::new(position, icd10_with_dot(code), pregnancy));
    }
    Ok(entries)
}

fn slots(text: &str, width: usize) -> impl Iterator<Item = &str> {
    (0..AXIS_SLOTS).filter_map(move |index| text.get(index * width..(index + 1) * width))
}

fn digit(field: &'static str, index: usize, ch: Option<char>) -> Result<u8> {
    ch.and_then(|c| c.to_digit(10))
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| IjeError::axis(field, format!("slot {}: expected a digit", index + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_axis_layout() {
        let entries = vec![
            EntityAxisEntry::new(1, 1, "I21.0", false),
            EntityAxisEntry::new(2, 1, "I25.1", false),
            EntityAxisEntry::new(6, 1, "W01", true),
        ];
        let text = encode_entity_axis("EAC", &entries).unwrap();
        assert_eq!(text.len(), 160);
        assert_eq!(&text[..24], "11I210  21I251  61W01  &");
        assert_eq!(decode_entity_axis("EAC", &text).unwrap(), entries);
    }

    #[test]
    fn test_entity_axis_rejects_bad_line() {
        let err = encode_entity_axis("EAC", &[EntityAxisEntry::new(7, 1, "I21.0", false)])
            .unwrap_err();
        assert!(matches!(err, IjeError::Axis { field: "EAC", .. }));
        let text = format!("{:<160}", "91I210 ");
        assert!(decode_entity_axis("EAC", &text).is_err());
    }

    #[test]
    fn test_record_axis_positions_follow_slots() {
        let entries = vec![
            RecordAxisEntry::new(1, "I21.0", false),
            RecordAxisEntry::new(3, "O26.8", true),
        ];
        let text = encode_record_axis("RAC", &entries).unwrap();
        assert_eq!(text.len(), 100);
        assert_eq!(&text[..15], "I210      O2681");
        assert_eq!(decode_record_axis("RAC", &text).unwrap(), entries);
    }

    #[test]
    fn test_record_axis_duplicate_position() {
        let entries = vec![
            RecordAxisEntry::new(2, "I21.0", false),
            RecordAxisEntry::new(2, "I25.1", false),
        ];
        assert!(encode_record_axis("RAC", &entries).is_err());
    }
}
