//! Tri-state date and time components.
//!
//! Certificate dates are recorded part by part. Each part is in one of three
//! states that must never be merged:
//!
//! | State | Meaning | Fixed-width encoding |
//! |-------|---------|----------------------|
//! | `Known(n)` | value recorded | zero-padded digits |
//! | `ExplicitlyUnknown` | certifier marked the part unknown | all `9` |
//! | `Unspecified` | never collected | all spaces |
//!
//! A composite ISO date is only produced when every part it needs is known.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel exposed for an explicitly unknown part.
pub const UNKNOWN_SENTINEL: i64 = -1;

/// Errors raised while encoding, decoding or validating date parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("value {value} does not fit in {width} digits")]
    Overflow { value: String, width: usize },

    #[error("value {value} collides with the all-9 unknown pattern for width {width}")]
    Reserved { value: String, width: usize },

    #[error("'{text}' is not a valid {width}-character {part}")]
    Invalid {
        text: String,
        width: usize,
        part: DatePart,
    },

    #[error("{part} value {value} is out of range")]
    OutOfRange { part: DatePart, value: i64 },

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NotACalendarDate { year: i32, month: u32, day: u32 },

    #[error("date has no recorded parts")]
    Empty,
}

/// One part of a composite date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Year,
    Month,
    Day,
    /// Time of day, encoded `HHMM`.
    Time,
}

impl DatePart {
    /// Width of the part in fixed-width encodings.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Year | Self::Time => 4,
            Self::Month | Self::Day => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that is known, explicitly unknown, or not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriState<T> {
    Known(T),
    ExplicitlyUnknown,
    Unspecified,
}

impl<T> Default for TriState<T> {
    fn default() -> Self {
        Self::Unspecified
    }
}

impl<T> TriState<T> {
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    pub const fn is_explicitly_unknown(&self) -> bool {
        matches!(self, Self::ExplicitlyUnknown)
    }

    /// The known value, if any.
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TriState<U> {
        match self {
            Self::Known(value) => TriState::Known(f(value)),
            Self::ExplicitlyUnknown => TriState::ExplicitlyUnknown,
            Self::Unspecified => TriState::Unspecified,
        }
    }
}

impl<T: Copy + Into<i64>> TriState<T> {
    /// Public sentinel view: known → the value, explicitly unknown → `-1`,
    /// unspecified → `None`.
    pub fn to_sentinel(self) -> Option<i64> {
        match self {
            Self::Known(value) => Some(value.into()),
            Self::ExplicitlyUnknown => Some(UNKNOWN_SENTINEL),
            Self::Unspecified => None,
        }
    }
}

impl<T: TryFrom<i64>> TriState<T> {
    /// Inverse of [`TriState::to_sentinel`].
    pub fn from_sentinel(value: Option<i64>, part: DatePart) -> Result<Self, ComponentError> {
        match value {
            None => Ok(Self::Unspecified),
            Some(UNKNOWN_SENTINEL) => Ok(Self::ExplicitlyUnknown),
            Some(value) => T::try_from(value)
                .map(Self::Known)
                .map_err(|_| ComponentError::OutOfRange { part, value }),
        }
    }
}

/// A value with a fixed-width digit representation.
pub trait FixedDigits: Copy + Sized {
    /// Render as digits, or `None` if the value has no digit form.
    fn to_digits(self) -> Option<String>;
    /// Parse trimmed digits.
    fn from_digits(text: &str) -> Option<Self>;
}

impl FixedDigits for u32 {
    fn to_digits(self) -> Option<String> {
        Some(self.to_string())
    }

    fn from_digits(text: &str) -> Option<Self> {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse().ok()
        } else {
            None
        }
    }
}

impl FixedDigits for i32 {
    fn to_digits(self) -> Option<String> {
        (self >= 0).then(|| self.to_string())
    }

    fn from_digits(text: &str) -> Option<Self> {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse().ok()
        } else {
            None
        }
    }
}

impl FixedDigits for NaiveTime {
    fn to_digits(self) -> Option<String> {
        Some(format!("{:02}{:02}", self.hour(), self.minute()))
    }

    fn from_digits(text: &str) -> Option<Self> {
        if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hour = text[..2].parse().ok()?;
        let minute = text[2..].parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    }
}

impl<T: FixedDigits> TriState<T> {
    /// Encode to exactly `width` characters.
    pub fn encode_fixed(self, width: usize, part: DatePart) -> Result<String, ComponentError> {
        match self {
            Self::Unspecified => Ok(" ".repeat(width)),
            Self::ExplicitlyUnknown => Ok("9".repeat(width)),
            Self::Known(value) => {
                let digits = value.to_digits().ok_or_else(|| ComponentError::Invalid {
                    text: String::new(),
                    width,
                    part,
                })?;
                if digits.len() > width {
                    return Err(ComponentError::Overflow { value: digits, width });
                }
                let padded = format!("{digits:0>width$}");
                if padded.bytes().all(|b| b == b'9') {
                    return Err(ComponentError::Reserved { value: padded, width });
                }
                Ok(padded)
            }
        }
    }

    /// Decode a fixed-width field. The all-space and all-9 patterns are
    /// matched literally before any numeric parse.
    pub fn decode_fixed(text: &str, width: usize, part: DatePart) -> Result<Self, ComponentError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::Unspecified);
        }
        if trimmed.len() == width && trimmed.bytes().all(|b| b == b'9') {
            return Ok(Self::ExplicitlyUnknown);
        }
        if trimmed.len() > width {
            return Err(ComponentError::Invalid {
                text: trimmed.to_string(),
                width,
                part,
            });
        }
        T::from_digits(trimmed)
            .map(Self::Known)
            .ok_or_else(|| ComponentError::Invalid {
                text: trimmed.to_string(),
                width,
                part,
            })
    }
}

/// A date and time recorded part by part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDateTime {
    #[serde(default, skip_serializing_if = "TriState::is_unspecified")]
    pub year: TriState<i32>,
    #[serde(default, skip_serializing_if = "TriState::is_unspecified")]
    pub month: TriState<u32>,
    #[serde(default, skip_serializing_if = "TriState::is_unspecified")]
    pub day: TriState<u32>,
    #[serde(default, skip_serializing_if = "TriState::is_unspecified")]
    pub time: TriState<NaiveTime>,
}

impl PartialDateTime {
    pub fn new(year: TriState<i32>, month: TriState<u32>, day: TriState<u32>) -> Self {
        Self {
            year,
            month,
            day,
            time: TriState::Unspecified,
        }
    }

    /// A date with every part known.
    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(
            TriState::Known(date.year()),
            TriState::Known(date.month()),
            TriState::Known(date.day()),
        )
    }

    #[must_use]
    pub fn with_time(mut self, time: TriState<NaiveTime>) -> Self {
        self.time = time;
        self
    }

    /// Parse `YYYY-MM-DD`.
    pub fn from_iso_date(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(Self::from_date)
    }

    /// Parse `YYYY-MM-DDTHH:MM[:SS]`.
    pub fn from_iso_datetime(text: &str) -> Option<Self> {
        let (date, time) = text.split_once('T')?;
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
            .ok()?;
        Some(Self::from_iso_date(date)?.with_time(TriState::Known(time)))
    }

    /// Calendar date when year, month and day are all known.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year.known()?, self.month.known()?, self.day.known()?)
    }

    /// `YYYY-MM-DD`, only when every date part is known.
    pub fn to_iso_date(&self) -> Option<String> {
        self.to_date().map(|date| date.format("%Y-%m-%d").to_string())
    }

    /// `YYYY-MM-DDTHH:MM:SS`, only when every part including time is known.
    pub fn to_iso_datetime(&self) -> Option<String> {
        let date = self.to_date()?;
        let time = self.time.known()?;
        Some(date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_unspecified()
            && self.month.is_unspecified()
            && self.day.is_unspecified()
            && self.time.is_unspecified()
    }

    /// Year with the `-1` sentinel for an explicitly unknown year.
    pub fn year_value(&self) -> Option<i64> {
        self.year.to_sentinel()
    }

    /// Month with the `-1` sentinel for an explicitly unknown month.
    pub fn month_value(&self) -> Option<i64> {
        self.month.to_sentinel()
    }

    /// Day with the `-1` sentinel for an explicitly unknown day.
    pub fn day_value(&self) -> Option<i64> {
        self.day.to_sentinel()
    }

    /// Encode one part with the tri-state rule.
    pub fn encode_part(&self, part: DatePart) -> Result<String, ComponentError> {
        let width = part.width();
        match part {
            DatePart::Year => self.year.encode_fixed(width, part),
            DatePart::Month => self.month.encode_fixed(width, part),
            DatePart::Day => self.day.encode_fixed(width, part),
            DatePart::Time => self.time.encode_fixed(width, part),
        }
    }

    /// Decode one part from its fixed-width text and store it.
    pub fn decode_part(&mut self, part: DatePart, text: &str) -> Result<(), ComponentError> {
        let width = part.width();
        match part {
            DatePart::Year => self.year = TriState::decode_fixed(text, width, part)?,
            DatePart::Month => self.month = TriState::decode_fixed(text, width, part)?,
            DatePart::Day => self.day = TriState::decode_fixed(text, width, part)?,
            DatePart::Time => self.time = TriState::decode_fixed(text, width, part)?,
        }
        Ok(())
    }

    /// Clear one part back to unspecified.
    pub fn clear_part(&mut self, part: DatePart) {
        match part {
            DatePart::Year => self.year = TriState::Unspecified,
            DatePart::Month => self.month = TriState::Unspecified,
            DatePart::Day => self.day = TriState::Unspecified,
            DatePart::Time => self.time = TriState::Unspecified,
        }
    }

    /// Check ranges and, when all date parts are known, the calendar.
    pub fn validate(&self) -> Result<(), ComponentError> {
        if self.is_empty() {
            return Err(ComponentError::Empty);
        }
        if let TriState::Known(year) = self.year
            && !(1..=9998).contains(&year)
        {
            return Err(ComponentError::OutOfRange {
                part: DatePart::Year,
                value: i64::from(year),
            });
        }
        if let TriState::Known(month) = self.month
            && !(1..=12).contains(&month)
        {
            return Err(ComponentError::OutOfRange {
                part: DatePart::Month,
                value: i64::from(month),
            });
        }
        if let TriState::Known(day) = self.day
            && !(1..=31).contains(&day)
        {
            return Err(ComponentError::OutOfRange {
                part: DatePart::Day,
                value: i64::from(day),
            });
        }
        if let (TriState::Known(year), TriState::Known(month), TriState::Known(day)) =
            (self.year, self.month, self.day)
            && NaiveDate::from_ymd_opt(year, month, day).is_none()
        {
            return Err(ComponentError::NotACalendarDate { year, month, day });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_three_states() {
        assert_eq!(TriState::Known(7u32).encode_fixed(2, DatePart::Month).unwrap(), "07");
        assert_eq!(
            TriState::<u32>::ExplicitlyUnknown.encode_fixed(2, DatePart::Month).unwrap(),
            "99"
        );
        assert_eq!(
            TriState::<u32>::Unspecified.encode_fixed(2, DatePart::Month).unwrap(),
            "  "
        );
    }

    #[test]
    fn test_known_all_nines_is_reserved() {
        let err = TriState::Known(99u32).encode_fixed(2, DatePart::Day).unwrap_err();
        assert!(matches!(err, ComponentError::Reserved { .. }));
    }

    #[test]
    fn test_overflow() {
        let err = TriState::Known(123u32).encode_fixed(2, DatePart::Day).unwrap_err();
        assert!(matches!(err, ComponentError::Overflow { width: 2, .. }));
    }

    #[test]
    fn test_time_hhmm() {
        let time = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(TriState::Known(time).encode_fixed(4, DatePart::Time).unwrap(), "1405");
        assert_eq!(
            TriState::<NaiveTime>::decode_fixed("1405", 4, DatePart::Time).unwrap(),
            TriState::Known(time)
        );
        assert!(TriState::<NaiveTime>::decode_fixed("2460", 4, DatePart::Time).is_err());
    }

    #[test]
    fn test_sentinel_view() {
        assert_eq!(TriState::Known(3u32).to_sentinel(), Some(3));
        assert_eq!(TriState::<u32>::ExplicitlyUnknown.to_sentinel(), Some(-1));
        assert_eq!(TriState::<u32>::Unspecified.to_sentinel(), None);
        assert_eq!(
            TriState::<u32>::from_sentinel(Some(-1), DatePart::Day).unwrap(),
            TriState::ExplicitlyUnknown
        );
        assert!(TriState::<u32>::from_sentinel(Some(-4), DatePart::Day).is_err());
    }

    #[test]
    fn test_iso_requires_all_known() {
        let mut date = PartialDateTime::from_iso_date("2020-11-12").unwrap();
        assert_eq!(date.to_iso_date().as_deref(), Some("2020-11-12"));
        assert_eq!(date.to_iso_datetime(), None);
        date.day = TriState::ExplicitlyUnknown;
        assert_eq!(date.to_iso_date(), None);
        assert_eq!(date.day_value(), Some(-1));
    }

    #[test]
    fn test_validate() {
        assert_eq!(PartialDateTime::default().validate(), Err(ComponentError::Empty));
        let bad = PartialDateTime::new(
            TriState::Known(2021),
            TriState::Known(2),
            TriState::Known(30),
        );
        assert!(matches!(
            bad.validate(),
            Err(ComponentError::NotACalendarDate { .. })
        ));
        let partial = PartialDateTime::new(
            TriState::Known(2021),
            TriState::ExplicitlyUnknown,
            TriState::Unspecified,
        );
        assert!(partial.validate().is_ok());
    }
}
