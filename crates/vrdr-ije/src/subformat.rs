//! TRX and MRE coding-response sub-formats.
//!
//! Each sub-format is a 500-character line carrying a subset of IJE fields
//! at its own offsets. Fields not carried are left alone when a line is
//! merged back into an IJE record or a death record.

use std::fmt;

use tracing::debug;
use vrdr_model::DeathRecord;

use crate::catalog::catalog;
use crate::descriptor::FieldDescriptor;
use crate::error::{IjeError, Result};
use crate::options::CodecOptions;
use crate::record::IjeRecord;

/// Length of a TRX or MRE line.
pub const SUBFORMAT_LENGTH: usize = 500;

/// Placement of IJE fields within a sub-format line.
#[derive(Debug)]
pub struct Layout {
    name: &'static str,
    /// `(IJE field name, 0-based offset)`.
    fields: &'static [(&'static str, usize)],
}

/// Cause-of-death coding response.
pub static TRX: Layout = Layout {
    name: "TRX",
    fields: &[
        ("DOD_YR", 0),
        ("DSTATE", 4),
        ("FILENO", 6),
        ("DOR_MO", 21),
        ("DOR_DY", 23),
        ("DOR_YR", 25),
        ("MANNER", 41),
        ("INT_REJ", 42),
        ("SYS_REJ", 43),
        ("INJPL", 44),
        ("MAN_UC", 45),
        ("ACME_UC", 50),
        ("EAC", 55),
        ("TRX_FLG", 215),
        ("RAC", 216),
        ("AUTOP", 316),
        ("AUTOPF", 317),
        ("TOBAC", 318),
        ("PREG", 319),
        ("PREG_BYPASS", 320),
        ("DOI_MO", 321),
        ("DOI_DY", 323),
        ("DOI_YR", 325),
        ("TOI_HR", 329),
        ("WORKINJ", 333),
        ("CERTL", 334),
        ("INACT", 364),
        ("AUXNO2", 365),
        ("STATESP", 377),
    ],
};

/// Race and ethnicity coding response.
pub static MRE: Layout = Layout {
    name: "MRE",
    fields: &[
        ("DOD_YR", 0),
        ("DSTATE", 4),
        ("FILENO", 6),
        ("DETHNIC1", 15),
        ("DETHNIC2", 16),
        ("DETHNIC3", 17),
        ("DETHNIC4", 18),
        ("DETHNIC5", 19),
        ("RACE1", 39),
        ("RACE2", 40),
        ("RACE3", 41),
        ("RACE4", 42),
        ("RACE5", 43),
        ("RACE6", 44),
        ("RACE7", 45),
        ("RACE8", 46),
        ("RACE9", 47),
        ("RACE10", 48),
        ("RACE11", 49),
        ("RACE12", 50),
        ("RACE13", 51),
        ("RACE14", 52),
        ("RACE15", 53),
        ("RACE16", 54),
        ("RACE17", 84),
        ("RACE18", 114),
        ("RACE19", 144),
        ("RACE20", 174),
        ("RACE21", 204),
        ("RACE22", 234),
        ("RACE23", 264),
        ("RACE1E", 294),
        ("RACE2E", 297),
        ("RACE3E", 300),
        ("RACE4E", 303),
        ("RACE5E", 306),
        ("RACE6E", 309),
        ("RACE7E", 312),
        ("RACE8E", 315),
        ("RACE16C", 318),
        ("RACE17C", 321),
        ("RACE18C", 324),
        ("RACE19C", 327),
        ("RACE20C", 330),
        ("RACE21C", 333),
        ("RACE22C", 336),
        ("RACE23C", 339),
        ("DETHNICE", 342),
        ("DETHNIC5C", 345),
    ],
};

impl Layout {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of the IJE fields the line carries, in line order.
    pub fn carried_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Carried fields with their offsets in the line.
    pub fn placements(&self) -> impl Iterator<Item = (&'static FieldDescriptor, usize)> + '_ {
        self.fields
            .iter()
            .filter_map(|(name, offset)| catalog().get(name).map(|field| (field, *offset)))
    }

    /// Check and pad a raw line.
    pub fn normalize(&self, line: &str) -> Result<String> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(offset) = line.find(|c: char| !c.is_ascii()) {
            let field = self
                .placements()
                .find(|(field, start)| (*start..start + field.width).contains(&offset))
                .map_or("FILLER", |(field, _)| field.name);
            return Err(IjeError::NonAscii { field });
        }
        if line.len() > SUBFORMAT_LENGTH {
            return Err(IjeError::Length {
                format: self.name,
                expected: SUBFORMAT_LENGTH,
                actual: line.len(),
            });
        }
        Ok(format!("{line:<SUBFORMAT_LENGTH$}"))
    }

    /// Cut the carried fields out of an IJE record.
    pub fn extract(&self, ije: &IjeRecord) -> String {
        let mut line = " ".repeat(SUBFORMAT_LENGTH);
        for (field, offset) in self.placements() {
            line.replace_range(offset..offset + field.width, ije.raw(field));
        }
        line
    }

    /// Copy the carried fields of `line` into `ije`, leaving all others.
    pub fn merge_into(&self, ije: &mut IjeRecord, line: &str) -> Result<()> {
        let line = self.normalize(line)?;
        for (field, offset) in self.placements() {
            ije.write(field, &line[offset..offset + field.width]);
        }
        Ok(())
    }

    /// An otherwise blank IJE record holding the carried fields.
    pub fn to_ije(&self, line: &str) -> Result<IjeRecord> {
        let mut ije = IjeRecord::blank();
        self.merge_into(&mut ije, line)?;
        Ok(ije)
    }

    /// Decode the carried fields into an existing record, in content
    /// priority order. Data the line does not carry is untouched.
    pub fn apply_to(
        &self,
        line: &str,
        record: &mut DeathRecord,
        options: &CodecOptions,
    ) -> Result<()> {
        let line = self.normalize(line)?;
        let mut placements: Vec<_> = self.placements().collect();
        placements.sort_by_key(|(field, _)| (field.priority, field.binding.is_derived(), field.start));
        for (field, offset) in placements {
            field.decode(&line[offset..offset + field.width], record, options)?;
        }
        debug!(
            format = self.name,
            identifier = %record.identifier(),
            "merged coding response"
        );
        Ok(())
    }
}

macro_rules! subformat_record {
    ($(#[$meta:meta])* $ty:ident => $layout:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            line: String,
        }

        impl $ty {
            pub fn layout() -> &'static Layout {
                &$layout
            }

            pub fn parse(line: &str) -> Result<Self> {
                Ok(Self {
                    line: $layout.normalize(line)?,
                })
            }

            pub fn from_ije(ije: &IjeRecord) -> Self {
                Self {
                    line: $layout.extract(ije),
                }
            }

            pub fn from_record(record: &DeathRecord, options: &CodecOptions) -> Result<Self> {
                Ok(Self::from_ije(&IjeRecord::from_record(record, options)?))
            }

            pub fn to_ije(&self) -> IjeRecord {
                let mut ije = IjeRecord::blank();
                for (field, offset) in $layout.placements() {
                    ije.write(field, &self.line[offset..offset + field.width]);
                }
                ije
            }

            /// A new record holding only the carried data.
            pub fn to_record(&self, options: &CodecOptions) -> Result<DeathRecord> {
                let mut record = DeathRecord::new();
                self.apply_to(&mut record, options)?;
                Ok(record)
            }

            /// Overwrite the carried data of an existing record.
            pub fn apply_to(&self, record: &mut DeathRecord, options: &CodecOptions) -> Result<()> {
                $layout.apply_to(&self.line, record, options)
            }

            /// Trimmed content of a carried field.
            pub fn value(&self, name: &str) -> Result<&str> {
                $layout
                    .placements()
                    .find(|(field, _)| field.name.eq_ignore_ascii_case(name))
                    .map(|(field, offset)| self.line[offset..offset + field.width].trim())
                    .ok_or_else(|| IjeError::UnknownField {
                        name: name.to_string(),
                    })
            }

            pub fn as_str(&self) -> &str {
                &self.line
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.line)
            }
        }
    };
}

subformat_record! {
    /// A 500-character TRX line.
    TrxRecord => TRX
}

subformat_record! {
    /// A 500-character MRE line.
    MreRecord => MRE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_layout(layout: &Layout) {
        let placements: Vec<_> = layout.placements().collect();
        assert_eq!(placements.len(), layout.carried_fields().count(), "{}", layout.name());
        let mut covered = [false; SUBFORMAT_LENGTH];
        for (field, offset) in placements {
            assert!(offset + field.width <= SUBFORMAT_LENGTH, "{}", field.name);
            for slot in &mut covered[offset..offset + field.width] {
                assert!(!*slot, "{} overlaps", field.name);
                *slot = true;
            }
        }
    }

    #[test]
    fn test_layouts_resolve_and_fit() {
        check_layout(&TRX);
        check_layout(&MRE);
    }

    #[test]
    fn test_length_error_names_format() {
        let err = TrxRecord::parse(&"1".repeat(SUBFORMAT_LENGTH + 2)).unwrap_err();
        assert!(matches!(
            err,
            IjeError::Length {
                format: "TRX",
                actual: 502,
                ..
            }
        ));
    }
}
