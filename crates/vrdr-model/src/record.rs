//! The death record and its typed accessors.

use crate::axis::{EntityAxisEntry, RecordAxisEntry};
use crate::coded::CodedValue;
use crate::graph::{Element, ResourceGraph};
use crate::error::Result;
use crate::identifier::{RecordIdentifier, check_certificate_number};
use crate::partial::{PartialDateTime, TriState};
use crate::race::RaceCategory;
use crate::slots::{self, ElementValue, Slot};

/// A death certificate.
///
/// Accessors are views over the resource graph. Setting a value attaches its
/// resource to the right section once; setting an empty value (or `None`)
/// removes the element and detaches a resource left without data.
///
/// ```
/// use vrdr_model::DeathRecord;
///
/// let mut record = DeathRecord::new();
/// record.set_given_name("Madelyn");
/// record.set_death_jurisdiction("MA");
/// record.set_certificate_number(Some(1234)).unwrap();
/// assert_eq!(record.given_name(), Some("Madelyn"));
/// assert_eq!(record.identifier().to_string(), "0000MA001234");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeathRecord {
    graph: ResourceGraph,
}

impl DeathRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a graph that has already been validated.
    pub(crate) fn from_graph(graph: ResourceGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &ResourceGraph {
        &self.graph
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Read a slot.
    pub fn get<T: ElementValue>(&self, slot: Slot<T>) -> Option<T> {
        self.graph
            .element(slot.resource(), slot.element())
            .and_then(T::from_element)
    }

    /// Write a slot; `None` or an empty value clears it.
    pub fn set<T: ElementValue>(&mut self, slot: Slot<T>, value: Option<T>) {
        match value {
            Some(value) if !value.is_empty_value() => {
                self.graph
                    .set_element(slot.resource(), slot.element(), value.into_element());
            }
            _ => self.clear(slot),
        }
    }

    pub fn clear<T>(&mut self, slot: Slot<T>) {
        self.graph.remove_element(slot.resource(), slot.element());
    }

    /// Borrow a text slot.
    pub fn text(&self, slot: Slot<String>) -> Option<&str> {
        match self.graph.element(slot.resource(), slot.element())? {
            Element::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Write a text slot; an empty string clears it.
    pub fn set_text(&mut self, slot: Slot<String>, value: &str) {
        self.set(slot, Some(value.to_string()));
    }

    /// Year, jurisdiction and certificate number.
    pub fn identifier(&self) -> RecordIdentifier {
        let year = self
            .death_date()
            .and_then(|date| date.year.known())
            .and_then(|year| u32::try_from(year).ok());
        RecordIdentifier::new(
            year,
            self.death_jurisdiction().map(str::to_string),
            self.certificate_number(),
        )
    }

    pub fn certificate_number(&self) -> Option<u32> {
        self.get(slots::CERTIFICATE_NUMBER)
    }

    /// Set the certificate number; numbers wider than six digits are
    /// rejected and leave the record unchanged.
    pub fn set_certificate_number(&mut self, value: Option<u32>) -> Result<()> {
        let value = value.map(check_certificate_number).transpose()?;
        self.set(slots::CERTIFICATE_NUMBER, value);
        Ok(())
    }

    /// Reported race as `(category, value)` pairs in category order.
    pub fn race(&self) -> Vec<(RaceCategory, String)> {
        RaceCategory::ALL
            .into_iter()
            .filter_map(|category| {
                self.text(slots::race(category))
                    .map(|value| (category, value.to_string()))
            })
            .collect()
    }

    /// Replace the reported race.
    pub fn set_race<S: AsRef<str>>(&mut self, race: &[(RaceCategory, S)]) {
        for category in RaceCategory::ALL {
            self.clear(slots::race(category));
        }
        for (category, value) in race {
            self.set_text(slots::race(*category), value.as_ref());
        }
    }

    /// Year of death; `-1` when explicitly unknown.
    pub fn death_year(&self) -> Option<i64> {
        self.death_date()?.year_value()
    }

    /// Month of death; `-1` when explicitly unknown.
    pub fn death_month(&self) -> Option<i64> {
        self.death_date()?.month_value()
    }

    /// Day of death; `-1` when explicitly unknown.
    pub fn death_day(&self) -> Option<i64> {
        self.death_date()?.day_value()
    }

    /// `YYYY-MM-DD` when the full date of death is known.
    pub fn date_of_death(&self) -> Option<String> {
        self.death_date()?.to_iso_date()
    }

    pub fn birth_year(&self) -> Option<i64> {
        self.birth_date()?.year_value()
    }

    pub fn birth_month(&self) -> Option<i64> {
        self.birth_date()?.month_value()
    }

    pub fn birth_day(&self) -> Option<i64> {
        self.birth_date()?.day_value()
    }

    /// `YYYY-MM-DD` when the full date of birth is known.
    pub fn date_of_birth(&self) -> Option<String> {
        self.birth_date()?.to_iso_date()
    }

    /// Jurisdiction-defined one-character field `index` (0-based).
    pub fn jurisdiction_flag(&self, index: usize) -> Option<&str> {
        slots::JURISDICTION_FLAGS
            .get(index)
            .and_then(|slot| self.text(*slot))
    }

    /// Jurisdiction-defined eight-character field `index` (0-based).
    pub fn jurisdiction_code(&self, index: usize) -> Option<&str> {
        slots::JURISDICTION_CODES
            .get(index)
            .and_then(|slot| self.text(*slot))
    }

    /// Coded race entries `RACE1E`..`RACE8E` that are present.
    pub fn coded_race(&self) -> Vec<String> {
        slots::CODED_RACE
            .iter()
            .filter_map(|slot| self.text(*slot).map(str::to_string))
            .collect()
    }
}

macro_rules! text_accessors {
    ($($(#[$meta:meta])* $get:ident / $set:ident => $slot:ident;)*) => {
        impl DeathRecord {
            $(
                $(#[$meta])*
                pub fn $get(&self) -> Option<&str> {
                    self.text(slots::$slot)
                }

                pub fn $set(&mut self, value: &str) {
                    self.set_text(slots::$slot, value);
                }
            )*
        }
    };
}

macro_rules! value_accessors {
    ($($(#[$meta:meta])* $get:ident / $set:ident: $ty:ty => $slot:ident;)*) => {
        impl DeathRecord {
            $(
                $(#[$meta])*
                pub fn $get(&self) -> Option<$ty> {
                    self.get(slots::$slot)
                }

                pub fn $set(&mut self, value: Option<$ty>) {
                    self.set(slots::$slot, value);
                }
            )*
        }
    };
}

text_accessors! {
    /// First given name of the decedent.
    given_name / set_given_name => GIVEN_NAME;
    middle_name / set_middle_name => MIDDLE_NAME;
    /// Middle initial when recorded separately from the middle name.
    middle_initial / set_middle_initial => MIDDLE_INITIAL;
    last_name / set_last_name => LAST_NAME;
    suffix / set_suffix => SUFFIX;
    /// Social security number, digits only.
    ssn / set_ssn => SSN;
    informant_relationship / set_informant_relationship => INFORMANT_RELATIONSHIP;

    birthplace_country / set_birthplace_country => BIRTHPLACE_COUNTRY;
    birthplace_state / set_birthplace_state => BIRTHPLACE_STATE;
    birthplace_state_name / set_birthplace_state_name => BIRTHPLACE_STATE_NAME;
    birthplace_city / set_birthplace_city => BIRTHPLACE_CITY;
    birthplace_city_code / set_birthplace_city_code => BIRTHPLACE_CITY_CODE;

    /// Full residence address line.
    residence_line / set_residence_line => RESIDENCE_LINE;
    residence_street_number / set_residence_street_number => RESIDENCE_STREET_NUMBER;
    residence_predirectional / set_residence_predirectional => RESIDENCE_PREDIRECTIONAL;
    residence_street_name / set_residence_street_name => RESIDENCE_STREET_NAME;
    residence_street_designator / set_residence_street_designator => RESIDENCE_STREET_DESIGNATOR;
    residence_postdirectional / set_residence_postdirectional => RESIDENCE_POSTDIRECTIONAL;
    residence_unit_number / set_residence_unit_number => RESIDENCE_UNIT_NUMBER;
    residence_city / set_residence_city => RESIDENCE_CITY;
    residence_city_code / set_residence_city_code => RESIDENCE_CITY_CODE;
    residence_county / set_residence_county => RESIDENCE_COUNTY;
    residence_county_code / set_residence_county_code => RESIDENCE_COUNTY_CODE;
    /// Two-letter state of residence.
    residence_state / set_residence_state => RESIDENCE_STATE;
    residence_state_name / set_residence_state_name => RESIDENCE_STATE_NAME;
    residence_zip / set_residence_zip => RESIDENCE_ZIP;
    residence_country / set_residence_country => RESIDENCE_COUNTRY;
    residence_country_name / set_residence_country_name => RESIDENCE_COUNTRY_NAME;

    occupation / set_occupation => OCCUPATION;
    industry / set_industry => INDUSTRY;
    ethnicity_literal / set_ethnicity_literal => ETHNICITY_LITERAL;

    /// Birth certificate number for infant deaths.
    birth_record_id / set_birth_record_id => BIRTH_RECORD_ID;
    birth_record_state / set_birth_record_state => BIRTH_RECORD_STATE;

    father_given_name / set_father_given_name => FATHER_GIVEN_NAME;
    father_middle_name / set_father_middle_name => FATHER_MIDDLE_NAME;
    father_last_name / set_father_last_name => FATHER_LAST_NAME;
    father_suffix / set_father_suffix => FATHER_SUFFIX;
    mother_given_name / set_mother_given_name => MOTHER_GIVEN_NAME;
    mother_middle_name / set_mother_middle_name => MOTHER_MIDDLE_NAME;
    mother_maiden_name / set_mother_maiden_name => MOTHER_MAIDEN_NAME;
    mother_suffix / set_mother_suffix => MOTHER_SUFFIX;
    spouse_given_name / set_spouse_given_name => SPOUSE_GIVEN_NAME;
    spouse_middle_name / set_spouse_middle_name => SPOUSE_MIDDLE_NAME;
    spouse_last_name / set_spouse_last_name => SPOUSE_LAST_NAME;
    spouse_suffix / set_spouse_suffix => SPOUSE_SUFFIX;

    /// Two-letter code of the jurisdiction where death occurred.
    death_jurisdiction / set_death_jurisdiction => DEATH_JURISDICTION;
    death_location_name / set_death_location_name => DEATH_LOCATION_NAME;
    death_location_line / set_death_location_line => DEATH_LOCATION_LINE;
    death_location_street_number / set_death_location_street_number => DEATH_LOCATION_STREET_NUMBER;
    death_location_predirectional / set_death_location_predirectional => DEATH_LOCATION_PREDIRECTIONAL;
    death_location_street_name / set_death_location_street_name => DEATH_LOCATION_STREET_NAME;
    death_location_street_designator / set_death_location_street_designator => DEATH_LOCATION_STREET_DESIGNATOR;
    death_location_postdirectional / set_death_location_postdirectional => DEATH_LOCATION_POSTDIRECTIONAL;
    death_location_city / set_death_location_city => DEATH_LOCATION_CITY;
    death_location_city_code / set_death_location_city_code => DEATH_LOCATION_CITY_CODE;
    death_location_county / set_death_location_county => DEATH_LOCATION_COUNTY;
    death_location_county_code / set_death_location_county_code => DEATH_LOCATION_COUNTY_CODE;
    death_location_state_name / set_death_location_state_name => DEATH_LOCATION_STATE_NAME;
    death_location_zip / set_death_location_zip => DEATH_LOCATION_ZIP;
    death_location_country / set_death_location_country => DEATH_LOCATION_COUNTRY;
    death_location_country_name / set_death_location_country_name => DEATH_LOCATION_COUNTRY_NAME;
    death_location_latitude / set_death_location_latitude => DEATH_LOCATION_LATITUDE;
    death_location_longitude / set_death_location_longitude => DEATH_LOCATION_LONGITUDE;

    injury_place_literal / set_injury_place_literal => INJURY_PLACE_LITERAL;
    /// How the injury occurred.
    injury_description / set_injury_description => INJURY_DESCRIPTION;
    injury_location_county / set_injury_location_county => INJURY_LOCATION_COUNTY;
    injury_location_county_code / set_injury_location_county_code => INJURY_LOCATION_COUNTY_CODE;
    injury_location_city / set_injury_location_city => INJURY_LOCATION_CITY;
    injury_location_city_code / set_injury_location_city_code => INJURY_LOCATION_CITY_CODE;
    injury_location_state / set_injury_location_state => INJURY_LOCATION_STATE;
    injury_location_state_name / set_injury_location_state_name => INJURY_LOCATION_STATE_NAME;
    injury_location_latitude / set_injury_location_latitude => INJURY_LOCATION_LATITUDE;
    injury_location_longitude / set_injury_location_longitude => INJURY_LOCATION_LONGITUDE;

    state_auxiliary_id / set_state_auxiliary_id => STATE_AUXILIARY_ID;
    state_auxiliary_id2 / set_state_auxiliary_id2 => STATE_AUXILIARY_ID2;
    state_specific / set_state_specific => STATE_SPECIFIC;
    emergency_registration / set_emergency_registration => EMERGENCY_REGISTRATION;
    special_event / set_special_event => SPECIAL_EVENT;
    jurisdiction_text / set_jurisdiction_text => JURISDICTION_TEXT;

    certifier_given_name / set_certifier_given_name => CERTIFIER_GIVEN_NAME;
    certifier_middle_name / set_certifier_middle_name => CERTIFIER_MIDDLE_NAME;
    certifier_last_name / set_certifier_last_name => CERTIFIER_LAST_NAME;
    certifier_suffix / set_certifier_suffix => CERTIFIER_SUFFIX;
    certifier_line / set_certifier_line => CERTIFIER_LINE;
    certifier_street_number / set_certifier_street_number => CERTIFIER_STREET_NUMBER;
    certifier_predirectional / set_certifier_predirectional => CERTIFIER_PREDIRECTIONAL;
    certifier_street_name / set_certifier_street_name => CERTIFIER_STREET_NAME;
    certifier_street_designator / set_certifier_street_designator => CERTIFIER_STREET_DESIGNATOR;
    certifier_postdirectional / set_certifier_postdirectional => CERTIFIER_POSTDIRECTIONAL;
    certifier_unit_number / set_certifier_unit_number => CERTIFIER_UNIT_NUMBER;
    certifier_city / set_certifier_city => CERTIFIER_CITY;
    certifier_state / set_certifier_state => CERTIFIER_STATE;
    certifier_state_name / set_certifier_state_name => CERTIFIER_STATE_NAME;
    certifier_zip / set_certifier_zip => CERTIFIER_ZIP;

    /// Immediate cause (part I, line a).
    cod_line_a / set_cod_line_a => COD_LINE_A;
    cod_interval_a / set_cod_interval_a => COD_INTERVAL_A;
    cod_line_b / set_cod_line_b => COD_LINE_B;
    cod_interval_b / set_cod_interval_b => COD_INTERVAL_B;
    cod_line_c / set_cod_line_c => COD_LINE_C;
    cod_interval_c / set_cod_interval_c => COD_INTERVAL_C;
    cod_line_d / set_cod_line_d => COD_LINE_D;
    cod_interval_d / set_cod_interval_d => COD_INTERVAL_D;
    /// Other significant conditions (part II).
    contributing_conditions / set_contributing_conditions => CONTRIBUTING_CONDITIONS;

    disposition_state / set_disposition_state => DISPOSITION_STATE;
    disposition_state_name / set_disposition_state_name => DISPOSITION_STATE_NAME;
    disposition_city / set_disposition_city => DISPOSITION_CITY;
    disposition_city_code / set_disposition_city_code => DISPOSITION_CITY_CODE;

    funeral_home_name / set_funeral_home_name => FUNERAL_HOME_NAME;
    funeral_home_line / set_funeral_home_line => FUNERAL_HOME_LINE;
    funeral_home_street_number / set_funeral_home_street_number => FUNERAL_HOME_STREET_NUMBER;
    funeral_home_predirectional / set_funeral_home_predirectional => FUNERAL_HOME_PREDIRECTIONAL;
    funeral_home_street_name / set_funeral_home_street_name => FUNERAL_HOME_STREET_NAME;
    funeral_home_street_designator / set_funeral_home_street_designator => FUNERAL_HOME_STREET_DESIGNATOR;
    funeral_home_postdirectional / set_funeral_home_postdirectional => FUNERAL_HOME_POSTDIRECTIONAL;
    funeral_home_unit_number / set_funeral_home_unit_number => FUNERAL_HOME_UNIT_NUMBER;
    funeral_home_city / set_funeral_home_city => FUNERAL_HOME_CITY;
    funeral_home_county / set_funeral_home_county => FUNERAL_HOME_COUNTY;
    funeral_home_state / set_funeral_home_state => FUNERAL_HOME_STATE;
    funeral_home_state_name / set_funeral_home_state_name => FUNERAL_HOME_STATE_NAME;
    funeral_home_zip / set_funeral_home_zip => FUNERAL_HOME_ZIP;

    /// Manually coded underlying cause (ICD-10, dotted).
    manual_underlying_cause / set_manual_underlying_cause => MANUAL_UNDERLYING_CAUSE;
    /// Automatically coded underlying cause (ICD-10, dotted).
    automated_underlying_cause / set_automated_underlying_cause => AUTOMATED_UNDERLYING_CAUSE;
    occupation_code / set_occupation_code => OCCUPATION_CODE;
    industry_code / set_industry_code => INDUSTRY_CODE;
    occupation_code_4 / set_occupation_code_4 => OCCUPATION_CODE_4;
    industry_code_4 / set_industry_code_4 => INDUSTRY_CODE_4;
    coded_birthplace_state / set_coded_birthplace_state => CODED_BIRTHPLACE_STATE;
    coded_birthplace_country / set_coded_birthplace_country => CODED_BIRTHPLACE_COUNTRY;
    bridged_race / set_bridged_race => BRIDGED_RACE;
    hispanic_code / set_hispanic_code => HISPANIC_CODE;
    hispanic_literal_code / set_hispanic_literal_code => HISPANIC_LITERAL_CODE;
}

value_accessors! {
    sex / set_sex: CodedValue => SEX;
    sex_edit_flag / set_sex_edit_flag: CodedValue => SEX_EDIT_FLAG;
    birth_date / set_birth_date: PartialDateTime => BIRTH_DATE;
    marital_status / set_marital_status: CodedValue => MARITAL_STATUS;
    marital_status_edit_flag / set_marital_status_edit_flag: CodedValue => MARITAL_STATUS_EDIT_FLAG;
    residence_within_city_limits / set_residence_within_city_limits: CodedValue => RESIDENCE_WITHIN_CITY_LIMITS;
    /// Age at death; explicitly unknown when the certificate says so.
    age_value / set_age_value: TriState<u32> => AGE_VALUE;
    age_unit / set_age_unit: CodedValue => AGE_UNIT;
    age_edit_flag / set_age_edit_flag: CodedValue => AGE_EDIT_FLAG;
    education_level / set_education_level: CodedValue => EDUCATION_LEVEL;
    education_edit_flag / set_education_edit_flag: CodedValue => EDUCATION_EDIT_FLAG;
    military_service / set_military_service: CodedValue => MILITARY_SERVICE;
    ethnicity_mexican / set_ethnicity_mexican: CodedValue => ETHNICITY_MEXICAN;
    ethnicity_puerto_rican / set_ethnicity_puerto_rican: CodedValue => ETHNICITY_PUERTO_RICAN;
    ethnicity_cuban / set_ethnicity_cuban: CodedValue => ETHNICITY_CUBAN;
    ethnicity_other / set_ethnicity_other: CodedValue => ETHNICITY_OTHER;
    race_missing_value_reason / set_race_missing_value_reason: CodedValue => RACE_MISSING_VALUE_REASON;
    birth_record_year / set_birth_record_year: PartialDateTime => BIRTH_RECORD_YEAR;
    spouse_alive / set_spouse_alive: CodedValue => SPOUSE_ALIVE;

    /// Date and time of death, part by part.
    death_date / set_death_date: PartialDateTime => DEATH_DATE;
    pronouncement_date / set_pronouncement_date: PartialDateTime => PRONOUNCEMENT_DATE;
    death_place_type / set_death_place_type: CodedValue => DEATH_PLACE_TYPE;
    injury_date / set_injury_date: PartialDateTime => INJURY_DATE;
    /// Clock convention of the injury time.
    injury_time_unit / set_injury_time_unit: CodedValue => INJURY_TIME_UNIT;
    injury_at_work / set_injury_at_work: CodedValue => INJURY_AT_WORK;
    injury_place / set_injury_place: CodedValue => INJURY_PLACE;
    /// Role in a transportation event; unmapped roles keep their literal.
    transportation_role / set_transportation_role: CodedValue => TRANSPORTATION_ROLE;
    autopsy_performed / set_autopsy_performed: CodedValue => AUTOPSY_PERFORMED;
    autopsy_results_available / set_autopsy_results_available: CodedValue => AUTOPSY_RESULTS_AVAILABLE;
    pregnancy_status / set_pregnancy_status: CodedValue => PREGNANCY_STATUS;
    pregnancy_edit_flag / set_pregnancy_edit_flag: CodedValue => PREGNANCY_EDIT_FLAG;
    tobacco_use / set_tobacco_use: CodedValue => TOBACCO_USE;
    examiner_contacted / set_examiner_contacted: CodedValue => EXAMINER_CONTACTED;
    surgery_date / set_surgery_date: PartialDateTime => SURGERY_DATE;

    filing_format / set_filing_format: CodedValue => FILING_FORMAT;
    /// Certifier role; unmapped titles keep their literal.
    certifier_type / set_certifier_type: CodedValue => CERTIFIER_TYPE;
    registration_date / set_registration_date: PartialDateTime => REGISTRATION_DATE;
    certified_date / set_certified_date: PartialDateTime => CERTIFIED_DATE;
    manner_of_death / set_manner_of_death: CodedValue => MANNER_OF_DEATH;
    disposition_method / set_disposition_method: CodedValue => DISPOSITION_METHOD;

    receipt_date / set_receipt_date: PartialDateTime => RECEIPT_DATE;
    intentional_reject / set_intentional_reject: CodedValue => INTENTIONAL_REJECT;
    system_reject / set_system_reject: CodedValue => SYSTEM_REJECT;
    transax_conversion / set_transax_conversion: CodedValue => TRANSAX_CONVERSION;
    activity_at_time_of_death / set_activity_at_time_of_death: CodedValue => ACTIVITY_AT_TIME_OF_DEATH;
    entity_axis / set_entity_axis: Vec<EntityAxisEntry> => ENTITY_AXIS;
    record_axis / set_record_axis: Vec<RecordAxisEntry> => RECORD_AXIS;
}
