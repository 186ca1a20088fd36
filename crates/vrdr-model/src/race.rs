//! Race and Hispanic-origin categories as reported by the informant.

use std::fmt;
use std::str::FromStr;

/// A reported race category: a yes/no flag or an overflow literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RaceCategory {
    White,
    BlackOrAfricanAmerican,
    AmericanIndianOrAlaskaNative,
    AsianIndian,
    Chinese,
    Filipino,
    Japanese,
    Korean,
    Vietnamese,
    OtherAsian,
    NativeHawaiian,
    GuamanianOrChamorro,
    Samoan,
    OtherPacificIslander,
    OtherRace,
    FirstAmericanIndianOrAlaskaNativeLiteral,
    SecondAmericanIndianOrAlaskaNativeLiteral,
    FirstOtherAsianLiteral,
    SecondOtherAsianLiteral,
    FirstOtherPacificIslanderLiteral,
    SecondOtherPacificIslanderLiteral,
    FirstOtherRaceLiteral,
    SecondOtherRaceLiteral,
}

impl RaceCategory {
    pub const ALL: [Self; 23] = [
        Self::White,
        Self::BlackOrAfricanAmerican,
        Self::AmericanIndianOrAlaskaNative,
        Self::AsianIndian,
        Self::Chinese,
        Self::Filipino,
        Self::Japanese,
        Self::Korean,
        Self::Vietnamese,
        Self::OtherAsian,
        Self::NativeHawaiian,
        Self::GuamanianOrChamorro,
        Self::Samoan,
        Self::OtherPacificIslander,
        Self::OtherRace,
        Self::FirstAmericanIndianOrAlaskaNativeLiteral,
        Self::SecondAmericanIndianOrAlaskaNativeLiteral,
        Self::FirstOtherAsianLiteral,
        Self::SecondOtherAsianLiteral,
        Self::FirstOtherPacificIslanderLiteral,
        Self::SecondOtherPacificIslanderLiteral,
        Self::FirstOtherRaceLiteral,
        Self::SecondOtherRaceLiteral,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::BlackOrAfricanAmerican => "BlackOrAfricanAmerican",
            Self::AmericanIndianOrAlaskaNative => "AmericanIndianOrAlaskaNative",
            Self::AsianIndian => "AsianIndian",
            Self::Chinese => "Chinese",
            Self::Filipino => "Filipino",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Vietnamese => "Vietnamese",
            Self::OtherAsian => "OtherAsian",
            Self::NativeHawaiian => "NativeHawaiian",
            Self::GuamanianOrChamorro => "GuamanianOrChamorro",
            Self::Samoan => "Samoan",
            Self::OtherPacificIslander => "OtherPacificIslander",
            Self::OtherRace => "OtherRace",
            Self::FirstAmericanIndianOrAlaskaNativeLiteral => {
                "FirstAmericanIndianOrAlaskaNativeLiteral"
            }
            Self::SecondAmericanIndianOrAlaskaNativeLiteral => {
                "SecondAmericanIndianOrAlaskaNativeLiteral"
            }
            Self::FirstOtherAsianLiteral => "FirstOtherAsianLiteral",
            Self::SecondOtherAsianLiteral => "SecondOtherAsianLiteral",
            Self::FirstOtherPacificIslanderLiteral => "FirstOtherPacificIslanderLiteral",
            Self::SecondOtherPacificIslanderLiteral => "SecondOtherPacificIslanderLiteral",
            Self::FirstOtherRaceLiteral => "FirstOtherRaceLiteral",
            Self::SecondOtherRaceLiteral => "SecondOtherRaceLiteral",
        }
    }

    /// Literal categories carry free text rather than a yes/no flag.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::FirstAmericanIndianOrAlaskaNativeLiteral
                | Self::SecondAmericanIndianOrAlaskaNativeLiteral
                | Self::FirstOtherAsianLiteral
                | Self::SecondOtherAsianLiteral
                | Self::FirstOtherPacificIslanderLiteral
                | Self::SecondOtherPacificIslanderLiteral
                | Self::FirstOtherRaceLiteral
                | Self::SecondOtherRaceLiteral
        )
    }
}

impl fmt::Display for RaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown race category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_split() {
        let flags = RaceCategory::ALL.iter().filter(|c| !c.is_literal()).count();
        assert_eq!(flags, 15);
        assert_eq!(RaceCategory::ALL.len() - flags, 8);
    }

    #[test]
    fn test_parse_roundtrip() {
        for category in RaceCategory::ALL {
            assert_eq!(category.as_str().parse::<RaceCategory>(), Ok(category));
        }
        assert!("Martian".parse::<RaceCategory>().is_err());
    }
}
