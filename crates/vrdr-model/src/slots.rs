//! Typed handles to the elements of a death record.
//!
//! A [`Slot`] names one element of one resource and fixes the Rust type it
//! holds. Every certificate datum has exactly one slot; accessors on
//! [`DeathRecord`](crate::DeathRecord) and the fixed-width field bindings both
//! go through these constants.

use std::fmt;
use std::marker::PhantomData;

use crate::axis::{EntityAxisEntry, RecordAxisEntry};
use crate::coded::CodedValue;
use crate::graph::{Element, ResourceKey};
use crate::partial::{PartialDateTime, TriState};
use crate::race::RaceCategory;

/// A value that can be stored as an [`Element`].
pub trait ElementValue: Sized {
    fn from_element(element: &Element) -> Option<Self>;
    fn into_element(self) -> Element;
    /// Empty values are stored as absence.
    fn is_empty_value(&self) -> bool;
}

impl ElementValue for String {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::Text(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ElementValue for u32 {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::Integer(value) => Some(*value),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::Integer(self)
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

impl ElementValue for CodedValue {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::Coded(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::Coded(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ElementValue for PartialDateTime {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::Date(value) => Some(*value),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::Date(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ElementValue for TriState<u32> {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::Quantity(value) => Some(*value),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::Quantity(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_unspecified()
    }
}

impl ElementValue for Vec<EntityAxisEntry> {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::EntityAxis(entries) => Some(entries.clone()),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::EntityAxis(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ElementValue for Vec<RecordAxisEntry> {
    fn from_element(element: &Element) -> Option<Self> {
        match element {
            Element::RecordAxis(entries) => Some(entries.clone()),
            _ => None,
        }
    }

    fn into_element(self) -> Element {
        Element::RecordAxis(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Handle to one element of one resource, typed by its value.
pub struct Slot<T> {
    resource: ResourceKey,
    element: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Slot<T> {
    pub const fn new(resource: ResourceKey, element: &'static str) -> Self {
        Self {
            resource,
            element,
            _value: PhantomData,
        }
    }

    pub const fn resource(self) -> ResourceKey {
        self.resource
    }

    pub const fn element(self) -> &'static str {
        self.element
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.resource == other.resource && self.element == other.element
    }
}

impl<T> Eq for Slot<T> {}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({}.{})", self.resource, self.element)
    }
}

impl<T> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.element)
    }
}

/// Slot for one reported race category. Flags hold `Y`/`N`, literal
/// categories hold free text.
pub const fn race(category: RaceCategory) -> Slot<String> {
    Slot::new(ResourceKey::InputRaceAndEthnicity, category.as_str())
}

use ResourceKey as K;

// =============================================================================
// Decedent
// =============================================================================

pub const GIVEN_NAME: Slot<String> = Slot::new(K::Decedent, "givenName");
pub const MIDDLE_NAME: Slot<String> = Slot::new(K::Decedent, "middleName");
pub const MIDDLE_INITIAL: Slot<String> = Slot::new(K::Decedent, "middleInitial");
pub const LAST_NAME: Slot<String> = Slot::new(K::Decedent, "lastName");
pub const SUFFIX: Slot<String> = Slot::new(K::Decedent, "suffix");
pub const SEX: Slot<CodedValue> = Slot::new(K::Decedent, "sex");
pub const SEX_EDIT_FLAG: Slot<CodedValue> = Slot::new(K::Decedent, "sexEditFlag");
pub const SSN: Slot<String> = Slot::new(K::Decedent, "ssn");
pub const BIRTH_DATE: Slot<PartialDateTime> = Slot::new(K::Decedent, "birthDate");
pub const MARITAL_STATUS: Slot<CodedValue> = Slot::new(K::Decedent, "maritalStatus");
pub const MARITAL_STATUS_EDIT_FLAG: Slot<CodedValue> =
    Slot::new(K::Decedent, "maritalStatusEditFlag");
pub const INFORMANT_RELATIONSHIP: Slot<String> = Slot::new(K::Decedent, "informantRelationship");

pub const BIRTHPLACE_COUNTRY: Slot<String> = Slot::new(K::Decedent, "birthplaceCountry");
pub const BIRTHPLACE_STATE: Slot<String> = Slot::new(K::Decedent, "birthplaceState");
pub const BIRTHPLACE_STATE_NAME: Slot<String> = Slot::new(K::Decedent, "birthplaceStateName");
pub const BIRTHPLACE_CITY: Slot<String> = Slot::new(K::Decedent, "birthplaceCity");
pub const BIRTHPLACE_CITY_CODE: Slot<String> = Slot::new(K::Decedent, "birthplaceCityCode");

pub const RESIDENCE_LINE: Slot<String> = Slot::new(K::Decedent, "residenceLine");
pub const RESIDENCE_STREET_NUMBER: Slot<String> = Slot::new(K::Decedent, "residenceStreetNumber");
pub const RESIDENCE_PREDIRECTIONAL: Slot<String> = Slot::new(K::Decedent, "residencePredir");
pub const RESIDENCE_STREET_NAME: Slot<String> = Slot::new(K::Decedent, "residenceStreetName");
pub const RESIDENCE_STREET_DESIGNATOR: Slot<String> =
    Slot::new(K::Decedent, "residenceStreetDesignator");
pub const RESIDENCE_POSTDIRECTIONAL: Slot<String> = Slot::new(K::Decedent, "residencePostdir");
pub const RESIDENCE_UNIT_NUMBER: Slot<String> = Slot::new(K::Decedent, "residenceUnitNumber");
pub const RESIDENCE_CITY: Slot<String> = Slot::new(K::Decedent, "residenceCity");
pub const RESIDENCE_CITY_CODE: Slot<String> = Slot::new(K::Decedent, "residenceCityCode");
pub const RESIDENCE_COUNTY: Slot<String> = Slot::new(K::Decedent, "residenceCounty");
pub const RESIDENCE_COUNTY_CODE: Slot<String> = Slot::new(K::Decedent, "residenceCountyCode");
pub const RESIDENCE_STATE: Slot<String> = Slot::new(K::Decedent, "residenceState");
pub const RESIDENCE_STATE_NAME: Slot<String> = Slot::new(K::Decedent, "residenceStateName");
pub const RESIDENCE_ZIP: Slot<String> = Slot::new(K::Decedent, "residenceZip");
pub const RESIDENCE_COUNTRY: Slot<String> = Slot::new(K::Decedent, "residenceCountry");
pub const RESIDENCE_COUNTRY_NAME: Slot<String> = Slot::new(K::Decedent, "residenceCountryName");
pub const RESIDENCE_WITHIN_CITY_LIMITS: Slot<CodedValue> =
    Slot::new(K::Decedent, "residenceWithinCityLimits");

pub const AGE_VALUE: Slot<TriState<u32>> = Slot::new(K::DecedentAge, "value");
pub const AGE_UNIT: Slot<CodedValue> = Slot::new(K::DecedentAge, "unit");
pub const AGE_EDIT_FLAG: Slot<CodedValue> = Slot::new(K::DecedentAge, "editFlag");

pub const EDUCATION_LEVEL: Slot<CodedValue> = Slot::new(K::Education, "value");
pub const EDUCATION_EDIT_FLAG: Slot<CodedValue> = Slot::new(K::Education, "editFlag");

pub const OCCUPATION: Slot<String> = Slot::new(K::UsualWork, "occupation");
pub const INDUSTRY: Slot<String> = Slot::new(K::UsualWork, "industry");

pub const MILITARY_SERVICE: Slot<CodedValue> = Slot::new(K::MilitaryService, "value");

pub const ETHNICITY_MEXICAN: Slot<CodedValue> =
    Slot::new(K::InputRaceAndEthnicity, "hispanicMexican");
pub const ETHNICITY_PUERTO_RICAN: Slot<CodedValue> =
    Slot::new(K::InputRaceAndEthnicity, "hispanicPuertoRican");
pub const ETHNICITY_CUBAN: Slot<CodedValue> = Slot::new(K::InputRaceAndEthnicity, "hispanicCuban");
pub const ETHNICITY_OTHER: Slot<CodedValue> = Slot::new(K::InputRaceAndEthnicity, "hispanicOther");
pub const ETHNICITY_LITERAL: Slot<String> = Slot::new(K::InputRaceAndEthnicity, "hispanicLiteral");
pub const RACE_MISSING_VALUE_REASON: Slot<CodedValue> =
    Slot::new(K::InputRaceAndEthnicity, "raceMissingValueReason");

pub const BIRTH_RECORD_ID: Slot<String> = Slot::new(K::BirthRecord, "id");
pub const BIRTH_RECORD_STATE: Slot<String> = Slot::new(K::BirthRecord, "state");
pub const BIRTH_RECORD_YEAR: Slot<PartialDateTime> = Slot::new(K::BirthRecord, "year");

pub const FATHER_GIVEN_NAME: Slot<String> = Slot::new(K::Father, "givenName");
pub const FATHER_MIDDLE_NAME: Slot<String> = Slot::new(K::Father, "middleName");
pub const FATHER_LAST_NAME: Slot<String> = Slot::new(K::Father, "lastName");
pub const FATHER_SUFFIX: Slot<String> = Slot::new(K::Father, "suffix");

pub const MOTHER_GIVEN_NAME: Slot<String> = Slot::new(K::Mother, "givenName");
pub const MOTHER_MIDDLE_NAME: Slot<String> = Slot::new(K::Mother, "middleName");
pub const MOTHER_MAIDEN_NAME: Slot<String> = Slot::new(K::Mother, "maidenName");
pub const MOTHER_SUFFIX: Slot<String> = Slot::new(K::Mother, "suffix");

pub const SPOUSE_GIVEN_NAME: Slot<String> = Slot::new(K::Spouse, "givenName");
pub const SPOUSE_MIDDLE_NAME: Slot<String> = Slot::new(K::Spouse, "middleName");
pub const SPOUSE_LAST_NAME: Slot<String> = Slot::new(K::Spouse, "lastName");
pub const SPOUSE_SUFFIX: Slot<String> = Slot::new(K::Spouse, "suffix");
pub const SPOUSE_ALIVE: Slot<CodedValue> = Slot::new(K::Spouse, "alive");

// =============================================================================
// Death investigation
// =============================================================================

pub const DEATH_DATE: Slot<PartialDateTime> = Slot::new(K::DeathDate, "value");
pub const PRONOUNCEMENT_DATE: Slot<PartialDateTime> = Slot::new(K::DeathDate, "pronouncement");
pub const DEATH_PLACE_TYPE: Slot<CodedValue> = Slot::new(K::DeathDate, "placeType");

pub const DEATH_JURISDICTION: Slot<String> = Slot::new(K::DeathLocation, "jurisdiction");
pub const DEATH_LOCATION_NAME: Slot<String> = Slot::new(K::DeathLocation, "name");
pub const DEATH_LOCATION_LINE: Slot<String> = Slot::new(K::DeathLocation, "line");
pub const DEATH_LOCATION_STREET_NUMBER: Slot<String> = Slot::new(K::DeathLocation, "streetNumber");
pub const DEATH_LOCATION_PREDIRECTIONAL: Slot<String> = Slot::new(K::DeathLocation, "predir");
pub const DEATH_LOCATION_STREET_NAME: Slot<String> = Slot::new(K::DeathLocation, "streetName");
pub const DEATH_LOCATION_STREET_DESIGNATOR: Slot<String> =
    Slot::new(K::DeathLocation, "streetDesignator");
pub const DEATH_LOCATION_POSTDIRECTIONAL: Slot<String> = Slot::new(K::DeathLocation, "postdir");
pub const DEATH_LOCATION_CITY: Slot<String> = Slot::new(K::DeathLocation, "city");
pub const DEATH_LOCATION_CITY_CODE: Slot<String> = Slot::new(K::DeathLocation, "cityCode");
pub const DEATH_LOCATION_COUNTY: Slot<String> = Slot::new(K::DeathLocation, "county");
pub const DEATH_LOCATION_COUNTY_CODE: Slot<String> = Slot::new(K::DeathLocation, "countyCode");
pub const DEATH_LOCATION_STATE_NAME: Slot<String> = Slot::new(K::DeathLocation, "stateName");
pub const DEATH_LOCATION_ZIP: Slot<String> = Slot::new(K::DeathLocation, "zip");
pub const DEATH_LOCATION_COUNTRY: Slot<String> = Slot::new(K::DeathLocation, "country");
pub const DEATH_LOCATION_COUNTRY_NAME: Slot<String> = Slot::new(K::DeathLocation, "countryName");
pub const DEATH_LOCATION_LATITUDE: Slot<String> = Slot::new(K::DeathLocation, "latitude");
pub const DEATH_LOCATION_LONGITUDE: Slot<String> = Slot::new(K::DeathLocation, "longitude");

pub const INJURY_DATE: Slot<PartialDateTime> = Slot::new(K::InjuryIncident, "value");
pub const INJURY_TIME_UNIT: Slot<CodedValue> = Slot::new(K::InjuryIncident, "timeUnit");
pub const INJURY_AT_WORK: Slot<CodedValue> = Slot::new(K::InjuryIncident, "atWork");
pub const INJURY_PLACE: Slot<CodedValue> = Slot::new(K::InjuryIncident, "place");
pub const INJURY_PLACE_LITERAL: Slot<String> = Slot::new(K::InjuryIncident, "placeLiteral");
pub const INJURY_DESCRIPTION: Slot<String> = Slot::new(K::InjuryIncident, "description");
pub const TRANSPORTATION_ROLE: Slot<CodedValue> =
    Slot::new(K::InjuryIncident, "transportationRole");

pub const INJURY_LOCATION_COUNTY: Slot<String> = Slot::new(K::InjuryLocation, "county");
pub const INJURY_LOCATION_COUNTY_CODE: Slot<String> = Slot::new(K::InjuryLocation, "countyCode");
pub const INJURY_LOCATION_CITY: Slot<String> = Slot::new(K::InjuryLocation, "city");
pub const INJURY_LOCATION_CITY_CODE: Slot<String> = Slot::new(K::InjuryLocation, "cityCode");
pub const INJURY_LOCATION_STATE: Slot<String> = Slot::new(K::InjuryLocation, "state");
pub const INJURY_LOCATION_STATE_NAME: Slot<String> = Slot::new(K::InjuryLocation, "stateName");
pub const INJURY_LOCATION_LATITUDE: Slot<String> = Slot::new(K::InjuryLocation, "latitude");
pub const INJURY_LOCATION_LONGITUDE: Slot<String> = Slot::new(K::InjuryLocation, "longitude");

pub const AUTOPSY_PERFORMED: Slot<CodedValue> = Slot::new(K::Autopsy, "performed");
pub const AUTOPSY_RESULTS_AVAILABLE: Slot<CodedValue> = Slot::new(K::Autopsy, "resultsAvailable");

pub const PREGNANCY_STATUS: Slot<CodedValue> = Slot::new(K::Pregnancy, "value");
pub const PREGNANCY_EDIT_FLAG: Slot<CodedValue> = Slot::new(K::Pregnancy, "editFlag");

pub const TOBACCO_USE: Slot<CodedValue> = Slot::new(K::TobaccoUse, "value");
pub const EXAMINER_CONTACTED: Slot<CodedValue> = Slot::new(K::ExaminerContacted, "value");
pub const SURGERY_DATE: Slot<PartialDateTime> = Slot::new(K::Surgery, "date");

// =============================================================================
// Death certification
// =============================================================================

pub const CERTIFICATE_NUMBER: Slot<u32> = Slot::new(K::Certificate, "number");
pub const STATE_AUXILIARY_ID: Slot<String> = Slot::new(K::Certificate, "auxiliaryId");
pub const STATE_AUXILIARY_ID2: Slot<String> = Slot::new(K::Certificate, "auxiliaryId2");
pub const FILING_FORMAT: Slot<CodedValue> = Slot::new(K::Certificate, "filingFormat");
pub const REGISTRATION_DATE: Slot<PartialDateTime> = Slot::new(K::Certificate, "registered");
pub const CERTIFIED_DATE: Slot<PartialDateTime> = Slot::new(K::Certificate, "certified");
pub const STATE_SPECIFIC: Slot<String> = Slot::new(K::Certificate, "stateSpecific");
pub const EMERGENCY_REGISTRATION: Slot<String> =
    Slot::new(K::Certificate, "emergencyRegistration");
pub const SPECIAL_EVENT: Slot<String> = Slot::new(K::Certificate, "specialEvent");

/// Jurisdiction-defined one-character fields (`PLACE1_1`..`PLACE1_6`).
pub const JURISDICTION_FLAGS: [Slot<String>; 6] = [
    Slot::new(K::Certificate, "place1_1"),
    Slot::new(K::Certificate, "place1_2"),
    Slot::new(K::Certificate, "place1_3"),
    Slot::new(K::Certificate, "place1_4"),
    Slot::new(K::Certificate, "place1_5"),
    Slot::new(K::Certificate, "place1_6"),
];

/// Jurisdiction-defined eight-character fields (`PLACE8_1`..`PLACE8_3`).
pub const JURISDICTION_CODES: [Slot<String>; 3] = [
    Slot::new(K::Certificate, "place8_1"),
    Slot::new(K::Certificate, "place8_2"),
    Slot::new(K::Certificate, "place8_3"),
];

/// Jurisdiction-defined twenty-character field (`PLACE20`).
pub const JURISDICTION_TEXT: Slot<String> = Slot::new(K::Certificate, "place20");

pub const CERTIFIER_GIVEN_NAME: Slot<String> = Slot::new(K::Certifier, "givenName");
pub const CERTIFIER_MIDDLE_NAME: Slot<String> = Slot::new(K::Certifier, "middleName");
pub const CERTIFIER_LAST_NAME: Slot<String> = Slot::new(K::Certifier, "lastName");
pub const CERTIFIER_SUFFIX: Slot<String> = Slot::new(K::Certifier, "suffix");
pub const CERTIFIER_TYPE: Slot<CodedValue> = Slot::new(K::Certifier, "type");
pub const CERTIFIER_LINE: Slot<String> = Slot::new(K::Certifier, "line");
pub const CERTIFIER_STREET_NUMBER: Slot<String> = Slot::new(K::Certifier, "streetNumber");
pub const CERTIFIER_PREDIRECTIONAL: Slot<String> = Slot::new(K::Certifier, "predir");
pub const CERTIFIER_STREET_NAME: Slot<String> = Slot::new(K::Certifier, "streetName");
pub const CERTIFIER_STREET_DESIGNATOR: Slot<String> = Slot::new(K::Certifier, "streetDesignator");
pub const CERTIFIER_POSTDIRECTIONAL: Slot<String> = Slot::new(K::Certifier, "postdir");
pub const CERTIFIER_UNIT_NUMBER: Slot<String> = Slot::new(K::Certifier, "unitNumber");
pub const CERTIFIER_CITY: Slot<String> = Slot::new(K::Certifier, "city");
pub const CERTIFIER_STATE: Slot<String> = Slot::new(K::Certifier, "state");
pub const CERTIFIER_STATE_NAME: Slot<String> = Slot::new(K::Certifier, "stateName");
pub const CERTIFIER_ZIP: Slot<String> = Slot::new(K::Certifier, "zip");

pub const MANNER_OF_DEATH: Slot<CodedValue> = Slot::new(K::MannerOfDeath, "value");

pub const COD_LINE_A: Slot<String> = Slot::new(K::CauseOfDeathPart1, "lineA");
pub const COD_INTERVAL_A: Slot<String> = Slot::new(K::CauseOfDeathPart1, "intervalA");
pub const COD_LINE_B: Slot<String> = Slot::new(K::CauseOfDeathPart1, "lineB");
pub const COD_INTERVAL_B: Slot<String> = Slot::new(K::CauseOfDeathPart1, "intervalB");
pub const COD_LINE_C: Slot<String> = Slot::new(K::CauseOfDeathPart1, "lineC");
pub const COD_INTERVAL_C: Slot<String> = Slot::new(K::CauseOfDeathPart1, "intervalC");
pub const COD_LINE_D: Slot<String> = Slot::new(K::CauseOfDeathPart1, "lineD");
pub const COD_INTERVAL_D: Slot<String> = Slot::new(K::CauseOfDeathPart1, "intervalD");
pub const CONTRIBUTING_CONDITIONS: Slot<String> = Slot::new(K::CauseOfDeathPart2, "value");

// =============================================================================
// Decedent disposition
// =============================================================================

pub const DISPOSITION_METHOD: Slot<CodedValue> = Slot::new(K::DispositionMethod, "value");

pub const DISPOSITION_STATE: Slot<String> = Slot::new(K::DispositionLocation, "state");
pub const DISPOSITION_STATE_NAME: Slot<String> = Slot::new(K::DispositionLocation, "stateName");
pub const DISPOSITION_CITY: Slot<String> = Slot::new(K::DispositionLocation, "city");
pub const DISPOSITION_CITY_CODE: Slot<String> = Slot::new(K::DispositionLocation, "cityCode");

pub const FUNERAL_HOME_NAME: Slot<String> = Slot::new(K::FuneralHome, "name");
pub const FUNERAL_HOME_LINE: Slot<String> = Slot::new(K::FuneralHome, "line");
pub const FUNERAL_HOME_STREET_NUMBER: Slot<String> = Slot::new(K::FuneralHome, "streetNumber");
pub const FUNERAL_HOME_PREDIRECTIONAL: Slot<String> = Slot::new(K::FuneralHome, "predir");
pub const FUNERAL_HOME_STREET_NAME: Slot<String> = Slot::new(K::FuneralHome, "streetName");
pub const FUNERAL_HOME_STREET_DESIGNATOR: Slot<String> =
    Slot::new(K::FuneralHome, "streetDesignator");
pub const FUNERAL_HOME_POSTDIRECTIONAL: Slot<String> = Slot::new(K::FuneralHome, "postdir");
pub const FUNERAL_HOME_UNIT_NUMBER: Slot<String> = Slot::new(K::FuneralHome, "unitNumber");
pub const FUNERAL_HOME_CITY: Slot<String> = Slot::new(K::FuneralHome, "city");
pub const FUNERAL_HOME_COUNTY: Slot<String> = Slot::new(K::FuneralHome, "county");
pub const FUNERAL_HOME_STATE: Slot<String> = Slot::new(K::FuneralHome, "state");
pub const FUNERAL_HOME_STATE_NAME: Slot<String> = Slot::new(K::FuneralHome, "stateName");
pub const FUNERAL_HOME_ZIP: Slot<String> = Slot::new(K::FuneralHome, "zip");

// =============================================================================
// Coded content
// =============================================================================

pub const RECEIPT_DATE: Slot<PartialDateTime> = Slot::new(K::CodingStatus, "receiptDate");
pub const INTENTIONAL_REJECT: Slot<CodedValue> = Slot::new(K::CodingStatus, "intentionalReject");
pub const SYSTEM_REJECT: Slot<CodedValue> = Slot::new(K::CodingStatus, "systemReject");
pub const TRANSAX_CONVERSION: Slot<CodedValue> = Slot::new(K::CodingStatus, "transaxConversion");

pub const ACTIVITY_AT_TIME_OF_DEATH: Slot<CodedValue> =
    Slot::new(K::ActivityAtTimeOfDeath, "value");

pub const MANUAL_UNDERLYING_CAUSE: Slot<String> = Slot::new(K::UnderlyingCause, "manual");
pub const AUTOMATED_UNDERLYING_CAUSE: Slot<String> = Slot::new(K::UnderlyingCause, "automated");

pub const ENTITY_AXIS: Slot<Vec<EntityAxisEntry>> = Slot::new(K::EntityAxis, "entries");
pub const RECORD_AXIS: Slot<Vec<RecordAxisEntry>> = Slot::new(K::RecordAxis, "entries");

pub const OCCUPATION_CODE: Slot<String> = Slot::new(K::CodedOccupation, "occupation");
pub const INDUSTRY_CODE: Slot<String> = Slot::new(K::CodedOccupation, "industry");
pub const OCCUPATION_CODE_4: Slot<String> = Slot::new(K::CodedOccupation, "occupation4");
pub const INDUSTRY_CODE_4: Slot<String> = Slot::new(K::CodedOccupation, "industry4");

/// First through eighth coded race (`RACE1E`..`RACE8E`).
pub const CODED_RACE: [Slot<String>; 8] = [
    Slot::new(K::CodedRaceAndEthnicity, "race1E"),
    Slot::new(K::CodedRaceAndEthnicity, "race2E"),
    Slot::new(K::CodedRaceAndEthnicity, "race3E"),
    Slot::new(K::CodedRaceAndEthnicity, "race4E"),
    Slot::new(K::CodedRaceAndEthnicity, "race5E"),
    Slot::new(K::CodedRaceAndEthnicity, "race6E"),
    Slot::new(K::CodedRaceAndEthnicity, "race7E"),
    Slot::new(K::CodedRaceAndEthnicity, "race8E"),
];

/// Codes for the race literals (`RACE16C`..`RACE23C`).
pub const CODED_RACE_LITERAL: [Slot<String>; 8] = [
    Slot::new(K::CodedRaceAndEthnicity, "race16C"),
    Slot::new(K::CodedRaceAndEthnicity, "race17C"),
    Slot::new(K::CodedRaceAndEthnicity, "race18C"),
    Slot::new(K::CodedRaceAndEthnicity, "race19C"),
    Slot::new(K::CodedRaceAndEthnicity, "race20C"),
    Slot::new(K::CodedRaceAndEthnicity, "race21C"),
    Slot::new(K::CodedRaceAndEthnicity, "race22C"),
    Slot::new(K::CodedRaceAndEthnicity, "race23C"),
];

/// Birthplace as coded by the national office.
pub const CODED_BIRTHPLACE_STATE: Slot<String> =
    Slot::new(K::CodedRaceAndEthnicity, "birthplaceStateCode");
pub const CODED_BIRTHPLACE_COUNTRY: Slot<String> =
    Slot::new(K::CodedRaceAndEthnicity, "birthplaceCountryCode");

pub const BRIDGED_RACE: Slot<String> = Slot::new(K::CodedRaceAndEthnicity, "bridgedRace");
pub const HISPANIC_CODE: Slot<String> = Slot::new(K::CodedRaceAndEthnicity, "hispanicCode");
pub const HISPANIC_LITERAL_CODE: Slot<String> =
    Slot::new(K::CodedRaceAndEthnicity, "hispanicLiteralCode");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_display() {
        assert_eq!(GIVEN_NAME.to_string(), "decedent.givenName");
        assert_eq!(race(RaceCategory::Samoan).element(), "Samoan");
    }

    #[test]
    fn test_empty_values() {
        assert!(String::new().is_empty_value());
        assert!(TriState::<u32>::Unspecified.is_empty_value());
        assert!(!TriState::<u32>::ExplicitlyUnknown.is_empty_value());
        assert!(PartialDateTime::default().is_empty_value());
    }
}
