//! Field descriptors: where a field sits and what it binds to.

use std::fmt;

use vrdr_model::{
    CodedValue, DatePart, EntityAxisEntry, PartialDateTime, RaceCategory, RecordAxisEntry, Slot,
    TriState,
};
use vrdr_standards::CodeTable;

/// Content ordering group; records decode in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Identifiers = 1,
    Demographics = 2,
    Investigation = 3,
    Certification = 4,
    Disposition = 5,
    CodedContent = 6,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifiers => "identifiers",
            Self::Demographics => "demographics",
            Self::Investigation => "investigation",
            Self::Certification => "certification",
            Self::Disposition => "disposition",
            Self::CodedContent => "coded content",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding side within the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Text, space-padded on the right.
    Left,
    /// Numbers, zero-padded on the left.
    Right,
}

/// Reference list used by a place name fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceList {
    Jurisdiction,
    Country,
}

/// How a field's characters translate to and from the record.
#[derive(Debug, Clone, Copy)]
pub enum Binding {
    Text(Slot<String>),
    Digits(Slot<u32>),
    Coded {
        slot: Slot<CodedValue>,
        table: &'static CodeTable,
    },
    /// Unmapped values travel as their literal text.
    CodedWithLiteral {
        slot: Slot<CodedValue>,
        table: &'static CodeTable,
    },
    DatePart {
        slot: Slot<PartialDateTime>,
        part: DatePart,
    },
    /// `MMDDYYYY`.
    FullDate(Slot<PartialDateTime>),
    Quantity(Slot<TriState<u32>>),
    Jurisdiction(Slot<String>),
    Country(Slot<String>),
    /// Literal place name; reads the name of `code` when absent.
    PlaceName {
        slot: Slot<String>,
        code: Slot<String>,
        list: PlaceList,
    },
    /// One character; reads the first character of `source` when absent.
    Initial {
        slot: Slot<String>,
        source: Slot<String>,
    },
    /// Dotted in the record, undotted in the field.
    Icd10(Slot<String>),
    EntityAxis(Slot<Vec<EntityAxisEntry>>),
    RecordAxis(Slot<Vec<RecordAxisEntry>>),
    Race(RaceCategory),
    /// Not record data: always written as its reset value, ignored on read.
    Control(&'static str),
    /// Retired content that must stay blank.
    Legacy,
}

impl Binding {
    pub const fn justify(&self) -> Justify {
        match self {
            Self::Digits(_)
            | Self::DatePart { .. }
            | Self::FullDate(_)
            | Self::Quantity(_) => Justify::Right,
            _ => Justify::Left,
        }
    }

    /// Whether the field falls back to another datum and so decodes after it.
    pub const fn is_derived(&self) -> bool {
        matches!(self, Self::PlaceName { .. } | Self::Initial { .. })
    }

    /// Whether the field carries record content.
    pub const fn is_data(&self) -> bool {
        !matches!(self, Self::Control(_) | Self::Legacy)
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Digits(_) => "digits",
            Self::Coded { .. } => "coded",
            Self::CodedWithLiteral { .. } => "coded+literal",
            Self::DatePart { .. } => "date part",
            Self::FullDate(_) => "date",
            Self::Quantity(_) => "quantity",
            Self::Jurisdiction(_) => "jurisdiction",
            Self::Country(_) => "country",
            Self::PlaceName { .. } => "place name",
            Self::Initial { .. } => "initial",
            Self::Icd10(_) => "icd-10",
            Self::EntityAxis(_) => "entity axis",
            Self::RecordAxis(_) => "record axis",
            Self::Race(_) => "race",
            Self::Control(_) => "control",
            Self::Legacy => "legacy",
        }
    }
}

/// One field of the fixed-width record.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// 1-based start column.
    pub start: usize,
    pub width: usize,
    pub justify: Justify,
    pub priority: Priority,
    pub binding: Binding,
    pub description: &'static str,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        start: usize,
        width: usize,
        priority: Priority,
        binding: Binding,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            start,
            width,
            justify: binding.justify(),
            priority,
            binding,
            description,
        }
    }

    /// 0-based offset of the first character.
    pub const fn offset(&self) -> usize {
        self.start - 1
    }

    /// 0-based offset one past the last character.
    pub const fn end(&self) -> usize {
        self.start - 1 + self.width
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset()..self.end()
    }

    pub fn blank(&self) -> String {
        " ".repeat(self.width)
    }
}
