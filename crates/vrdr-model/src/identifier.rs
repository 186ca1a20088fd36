//! Certificate identifiers.

use std::fmt;

use crate::error::{ModelError, Result};

/// Filler used for a missing four-digit year.
pub const YEAR_FILLER: &str = "0000";
/// Filler used for a missing jurisdiction.
pub const JURISDICTION_FILLER: &str = "XX";
/// Filler used for a missing certificate number.
pub const CERTIFICATE_FILLER: &str = "000000";
/// Largest certificate number that fits the six-digit identifier part.
pub const MAX_CERTIFICATE_NUMBER: u32 = 999_999;

/// Reject certificate numbers wider than six digits.
pub fn check_certificate_number(number: u32) -> Result<u32> {
    if number > MAX_CERTIFICATE_NUMBER {
        return Err(ModelError::CertificateNumber { value: number });
    }
    Ok(number)
}

/// Year, jurisdiction and certificate number of a death record.
///
/// Renders as `YYYYJJNNNNNN`; each missing part is replaced by its filler.
///
/// ```
/// use vrdr_model::RecordIdentifier;
///
/// let id = RecordIdentifier::new(Some(2016), Some("NE".into()), Some(115));
/// assert_eq!(id.to_string(), "2016NE000115");
/// assert_eq!(RecordIdentifier::default().to_string(), "0000XX000000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordIdentifier {
    pub year: Option<u32>,
    pub jurisdiction: Option<String>,
    pub certificate_number: Option<u32>,
}

impl RecordIdentifier {
    pub fn new(
        year: Option<u32>,
        jurisdiction: Option<String>,
        certificate_number: Option<u32>,
    ) -> Self {
        Self {
            year,
            jurisdiction: jurisdiction.filter(|j| !j.is_empty()),
            certificate_number,
        }
    }

    /// Whether no part is present.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.jurisdiction.is_none() && self.certificate_number.is_none()
    }

    /// Whether every part is present.
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.jurisdiction.is_some() && self.certificate_number.is_some()
    }
}

impl fmt::Display for RecordIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year:04}")?,
            None => f.write_str(YEAR_FILLER)?,
        }
        f.write_str(self.jurisdiction.as_deref().unwrap_or(JURISDICTION_FILLER))?;
        match self.certificate_number {
            Some(number) => write!(f, "{number:06}"),
            None => f.write_str(CERTIFICATE_FILLER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fillers_per_part() {
        let id = RecordIdentifier::new(None, Some("MA".into()), Some(578_660));
        assert_eq!(id.to_string(), "0000MA578660");
        let id = RecordIdentifier::new(Some(2019), None, Some(1));
        assert_eq!(id.to_string(), "2019XX000001");
        let id = RecordIdentifier::new(Some(2019), Some("YC".into()), None);
        assert_eq!(id.to_string(), "2019YC000000");
    }

    #[test]
    fn test_certificate_number_width() {
        assert_eq!(check_certificate_number(999_999).unwrap(), 999_999);
        assert!(matches!(
            check_certificate_number(1_234_567),
            Err(ModelError::CertificateNumber { value: 1_234_567 })
        ));
    }

    #[test]
    fn test_empty_jurisdiction_is_absent() {
        let id = RecordIdentifier::new(None, Some(String::new()), None);
        assert!(id.is_empty());
    }
}
