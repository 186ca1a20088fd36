//! The IJE mortality field catalog.
//!
//! Every field of the 5000-character record is declared once in [`FIELDS`]
//! with its 1-based start column, width, content priority and binding.
//! Columns not covered by a field are filler and stay blank.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;
use vrdr_model::{
    CodedValue, DatePart, EntityAxisEntry, PartialDateTime, RaceCategory, RecordAxisEntry, Slot,
    TriState, slots as s,
};
use vrdr_standards::{CodeTable, tables as t};

use crate::descriptor::{Binding, FieldDescriptor, PlaceList, Priority};
use Priority::{
    Certification as CERT, CodedContent as CODED, Demographics as DEMO, Disposition as DISP,
    Identifiers as ID, Investigation as INV,
};
use RaceCategory as R;

/// Length of an IJE mortality record.
pub const IJE_LENGTH: usize = 5000;

/// Field ordering for listings and dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrder {
    /// By start column.
    #[default]
    Position,
    /// By content priority, then start column.
    Priority,
}

// =============================================================================
// Binding shorthands
// =============================================================================

const fn text(slot: Slot<String>) -> Binding {
    Binding::Text(slot)
}

const fn coded(slot: Slot<CodedValue>, table: &'static CodeTable) -> Binding {
    Binding::Coded { slot, table }
}

const fn year(slot: Slot<PartialDateTime>) -> Binding {
    Binding::DatePart {
        slot,
        part: DatePart::Year,
    }
}

const fn month(slot: Slot<PartialDateTime>) -> Binding {
    Binding::DatePart {
        slot,
        part: DatePart::Month,
    }
}

const fn day(slot: Slot<PartialDateTime>) -> Binding {
    Binding::DatePart {
        slot,
        part: DatePart::Day,
    }
}

const fn time(slot: Slot<PartialDateTime>) -> Binding {
    Binding::DatePart {
        slot,
        part: DatePart::Time,
    }
}

const fn state_name(slot: Slot<String>, code: Slot<String>) -> Binding {
    Binding::PlaceName {
        slot,
        code,
        list: PlaceList::Jurisdiction,
    }
}

const fn country_name(slot: Slot<String>, code: Slot<String>) -> Binding {
    Binding::PlaceName {
        slot,
        code,
        list: PlaceList::Country,
    }
}

const fn quantity(slot: Slot<TriState<u32>>) -> Binding {
    Binding::Quantity(slot)
}

const fn entity_axis(slot: Slot<Vec<EntityAxisEntry>>) -> Binding {
    Binding::EntityAxis(slot)
}

const fn record_axis(slot: Slot<Vec<RecordAxisEntry>>) -> Binding {
    Binding::RecordAxis(slot)
}

const fn race(category: RaceCategory) -> Binding {
    Binding::Race(category)
}

const fn f(
    name: &'static str,
    start: usize,
    width: usize,
    priority: Priority,
    binding: Binding,
    description: &'static str,
) -> FieldDescriptor {
    FieldDescriptor::new(name, start, width, priority, binding, description)
}

// =============================================================================
// Fields
// =============================================================================

/// Every field, in start-column order.
pub static FIELDS: &[FieldDescriptor] = &[
    f("DOD_YR", 1, 4, ID, year(s::DEATH_DATE), "Date of death--year"),
    f("DSTATE", 5, 2, ID, Binding::Jurisdiction(s::DEATH_JURISDICTION), "State, U.S. territory or Canadian province of death--code"),
    f("FILENO", 7, 6, ID, Binding::Digits(s::CERTIFICATE_NUMBER), "Certificate number"),
    f("VOID", 13, 1, ID, Binding::Control("1"), "Void flag"),
    f("AUXNO", 14, 12, ID, text(s::STATE_AUXILIARY_ID), "Auxiliary state file number"),
    f("MFILED", 26, 1, ID, coded(s::FILING_FORMAT, &t::FILING_FORMAT), "Source flag: paper/electronic"),
    f("GNAME", 27, 50, DEMO, text(s::GIVEN_NAME), "Decedent's legal name--given"),
    f("MNAME", 77, 1, DEMO, Binding::Initial { slot: s::MIDDLE_INITIAL, source: s::MIDDLE_NAME }, "Decedent's legal name--middle initial"),
    f("LNAME", 78, 50, DEMO, text(s::LAST_NAME), "Decedent's legal name--last"),
    f("SUFF", 128, 10, DEMO, text(s::SUFFIX), "Decedent's legal name--suffix"),
    f("ALIAS", 138, 1, ID, Binding::Control("0"), "Decedent's legal name--alias"),
    f("FLNAME", 139, 50, DEMO, text(s::FATHER_LAST_NAME), "Father's surname"),
    f("SEX", 189, 1, DEMO, coded(s::SEX, &t::SEX), "Sex"),
    f("SEX_BYPASS", 190, 1, DEMO, coded(s::SEX_EDIT_FLAG, &t::EDIT_FLAG), "Sex--edit flag"),
    f("SSN", 191, 9, DEMO, text(s::SSN), "Social security number"),
    f("AGETYPE", 200, 1, DEMO, coded(s::AGE_UNIT, &t::AGE_UNIT), "Decedent's age--type"),
    f("AGE", 201, 3, DEMO, quantity(s::AGE_VALUE), "Decedent's age--units"),
    f("AGE_BYPASS", 204, 1, DEMO, coded(s::AGE_EDIT_FLAG, &t::EDIT_FLAG), "Decedent's age--edit flag"),
    f("DOB_YR", 205, 4, DEMO, year(s::BIRTH_DATE), "Date of birth--year"),
    f("DOB_MO", 209, 2, DEMO, month(s::BIRTH_DATE), "Date of birth--month"),
    f("DOB_DY", 211, 2, DEMO, day(s::BIRTH_DATE), "Date of birth--day"),
    f("BPLACE_CNT", 213, 2, DEMO, Binding::Country(s::BIRTHPLACE_COUNTRY), "Birthplace--country"),
    f("BPLACE_ST", 215, 2, DEMO, Binding::Jurisdiction(s::BIRTHPLACE_STATE), "State, U.S. territory or Canadian province of birth--code"),
    f("CITYC", 217, 5, DEMO, text(s::RESIDENCE_CITY_CODE), "Decedent's residence--city"),
    f("COUNTYC", 222, 3, DEMO, text(s::RESIDENCE_COUNTY_CODE), "Decedent's residence--county"),
    f("STATEC", 225, 2, DEMO, Binding::Jurisdiction(s::RESIDENCE_STATE), "State, U.S. territory or Canadian province of decedent's residence--code"),
    f("COUNTRYC", 227, 2, DEMO, Binding::Country(s::RESIDENCE_COUNTRY), "Decedent's residence--country"),
    f("LIMITS", 229, 1, DEMO, coded(s::RESIDENCE_WITHIN_CITY_LIMITS, &t::YES_NO_UNKNOWN), "Decedent's residence--inside city limits"),
    f("MARITAL", 230, 1, DEMO, coded(s::MARITAL_STATUS, &t::MARITAL_STATUS), "Marital status"),
    f("MARITAL_BYPASS", 231, 1, DEMO, coded(s::MARITAL_STATUS_EDIT_FLAG, &t::MARITAL_EDIT_FLAG), "Marital status--edit flag"),
    f("DPLACE", 232, 1, INV, coded(s::DEATH_PLACE_TYPE, &t::PLACE_OF_DEATH), "Place of death"),
    f("COD", 233, 3, INV, text(s::DEATH_LOCATION_COUNTY_CODE), "County of death occurrence"),
    f("DISP", 236, 1, DISP, coded(s::DISPOSITION_METHOD, &t::DISPOSITION_METHOD), "Method of disposition"),
    f("DOD_MO", 237, 2, INV, month(s::DEATH_DATE), "Date of death--month"),
    f("DOD_DY", 239, 2, INV, day(s::DEATH_DATE), "Date of death--day"),
    f("TOD", 241, 4, INV, time(s::DEATH_DATE), "Time of death"),
    f("DEDUC", 245, 1, DEMO, coded(s::EDUCATION_LEVEL, &t::EDUCATION), "Decedent's education"),
    f("DEDUC_BYPASS", 246, 1, DEMO, coded(s::EDUCATION_EDIT_FLAG, &t::EDIT_FLAG), "Decedent's education--edit flag"),
    f("DETHNIC1", 247, 1, DEMO, coded(s::ETHNICITY_MEXICAN, &t::HISPANIC_ORIGIN), "Decedent of Hispanic origin?--Mexican"),
    f("DETHNIC2", 248, 1, DEMO, coded(s::ETHNICITY_PUERTO_RICAN, &t::HISPANIC_ORIGIN), "Decedent of Hispanic origin?--Puerto Rican"),
    f("DETHNIC3", 249, 1, DEMO, coded(s::ETHNICITY_CUBAN, &t::HISPANIC_ORIGIN), "Decedent of Hispanic origin?--Cuban"),
    f("DETHNIC4", 250, 1, DEMO, coded(s::ETHNICITY_OTHER, &t::HISPANIC_ORIGIN), "Decedent of Hispanic origin?--other"),
    f("DETHNIC5", 251, 20, DEMO, text(s::ETHNICITY_LITERAL), "Decedent of Hispanic origin?--other, literal"),
    f("RACE1", 271, 1, DEMO, race(R::White), "Decedent's race--White"),
    f("RACE2", 272, 1, DEMO, race(R::BlackOrAfricanAmerican), "Decedent's race--Black or African American"),
    f("RACE3", 273, 1, DEMO, race(R::AmericanIndianOrAlaskaNative), "Decedent's race--American Indian or Alaska Native"),
    f("RACE4", 274, 1, DEMO, race(R::AsianIndian), "Decedent's race--Asian Indian"),
    f("RACE5", 275, 1, DEMO, race(R::Chinese), "Decedent's race--Chinese"),
    f("RACE6", 276, 1, DEMO, race(R::Filipino), "Decedent's race--Filipino"),
    f("RACE7", 277, 1, DEMO, race(R::Japanese), "Decedent's race--Japanese"),
    f("RACE8", 278, 1, DEMO, race(R::Korean), "Decedent's race--Korean"),
    f("RACE9", 279, 1, DEMO, race(R::Vietnamese), "Decedent's race--Vietnamese"),
    f("RACE10", 280, 1, DEMO, race(R::OtherAsian), "Decedent's race--other Asian"),
    f("RACE11", 281, 1, DEMO, race(R::NativeHawaiian), "Decedent's race--Native Hawaiian"),
    f("RACE12", 282, 1, DEMO, race(R::GuamanianOrChamorro), "Decedent's race--Guamanian or Chamorro"),
    f("RACE13", 283, 1, DEMO, race(R::Samoan), "Decedent's race--Samoan"),
    f("RACE14", 284, 1, DEMO, race(R::OtherPacificIslander), "Decedent's race--other Pacific Islander"),
    f("RACE15", 285, 1, DEMO, race(R::OtherRace), "Decedent's race--other"),
    f("RACE16", 286, 30, DEMO, race(R::FirstAmericanIndianOrAlaskaNativeLiteral), "Decedent's race--first American Indian or Alaska Native literal"),
    f("RACE17", 316, 30, DEMO, race(R::SecondAmericanIndianOrAlaskaNativeLiteral), "Decedent's race--second American Indian or Alaska Native literal"),
    f("RACE18", 346, 30, DEMO, race(R::FirstOtherAsianLiteral), "Decedent's race--first other Asian literal"),
    f("RACE19", 376, 30, DEMO, race(R::SecondOtherAsianLiteral), "Decedent's race--second other Asian literal"),
    f("RACE20", 406, 30, DEMO, race(R::FirstOtherPacificIslanderLiteral), "Decedent's race--first other Pacific Islander literal"),
    f("RACE21", 436, 30, DEMO, race(R::SecondOtherPacificIslanderLiteral), "Decedent's race--second other Pacific Islander literal"),
    f("RACE22", 466, 30, DEMO, race(R::FirstOtherRaceLiteral), "Decedent's race--first other literal"),
    f("RACE23", 496, 30, DEMO, race(R::SecondOtherRaceLiteral), "Decedent's race--second other literal"),
    f("RACE_MVR", 526, 1, DEMO, coded(s::RACE_MISSING_VALUE_REASON, &t::RACE_MISSING_VALUE_REASON), "Decedent's race--missing"),
    f("OCCUP", 527, 40, DEMO, text(s::OCCUPATION), "Occupation--literal"),
    f("OCCUPC", 567, 3, CODED, text(s::OCCUPATION_CODE), "Occupation--code"),
    f("INDUST", 570, 40, DEMO, text(s::INDUSTRY), "Industry--literal"),
    f("INDUSTC", 610, 3, CODED, text(s::INDUSTRY_CODE), "Industry--code"),
    f("BCNO", 613, 6, DEMO, text(s::BIRTH_RECORD_ID), "Infant death/birth linking--birth certificate number"),
    f("IDOB_YR", 619, 4, DEMO, year(s::BIRTH_RECORD_YEAR), "Infant death/birth linking--year of birth"),
    f("BSTATE", 623, 2, DEMO, Binding::Jurisdiction(s::BIRTH_RECORD_STATE), "Infant death/birth linking--state, U.S. territory or Canadian province of birth--code"),
    f("R_YR", 625, 4, CODED, year(s::RECEIPT_DATE), "Receipt date--year"),
    f("R_MO", 629, 2, CODED, month(s::RECEIPT_DATE), "Receipt date--month"),
    f("R_DY", 631, 2, CODED, day(s::RECEIPT_DATE), "Receipt date--day"),
    f("OCCUPC4", 633, 4, CODED, text(s::OCCUPATION_CODE_4), "Occupation--4 digit code"),
    f("INDUSTC4", 637, 4, CODED, text(s::INDUSTRY_CODE_4), "Industry--4 digit code"),
    f("DOR_YR", 641, 4, CERT, year(s::REGISTRATION_DATE), "Date of registration--year"),
    f("DOR_MO", 645, 2, CERT, month(s::REGISTRATION_DATE), "Date of registration--month"),
    f("DOR_DY", 647, 2, CERT, day(s::REGISTRATION_DATE), "Date of registration--day"),
    f("MANNER", 653, 1, CERT, coded(s::MANNER_OF_DEATH, &t::MANNER_OF_DEATH), "Manner of death"),
    f("INT_REJ", 654, 1, CODED, coded(s::INTENTIONAL_REJECT, &t::INTENTIONAL_REJECT), "Intentional reject"),
    f("SYS_REJ", 655, 1, CODED, coded(s::SYSTEM_REJECT, &t::SYSTEM_REJECT), "Acme system reject codes"),
    f("INJPL", 656, 1, INV, coded(s::INJURY_PLACE, &t::PLACE_OF_INJURY), "Place of injury (computer generated)"),
    f("MAN_UC", 657, 5, CODED, Binding::Icd10(s::MANUAL_UNDERLYING_CAUSE), "Manual underlying cause"),
    f("ACME_UC", 662, 5, CODED, Binding::Icd10(s::AUTOMATED_UNDERLYING_CAUSE), "ACME underlying cause"),
    f("EAC", 667, 160, CODED, entity_axis(s::ENTITY_AXIS), "Entity-axis codes"),
    f("TRX_FLG", 827, 1, CODED, coded(s::TRANSAX_CONVERSION, &t::TRANSAX_CONVERSION), "Transax conversion flag"),
    f("RAC", 828, 100, CODED, record_axis(s::RECORD_AXIS), "Record-axis codes"),
    f("AUTOP", 928, 1, INV, coded(s::AUTOPSY_PERFORMED, &t::YES_NO_UNKNOWN), "Was autopsy performed"),
    f("AUTOPF", 929, 1, INV, coded(s::AUTOPSY_RESULTS_AVAILABLE, &t::YES_NO_NOT_APPLICABLE), "Were autopsy findings available to complete the cause of death"),
    f("TOBAC", 930, 1, INV, coded(s::TOBACCO_USE, &t::TOBACCO_USE), "Did tobacco use contribute to death"),
    f("PREG", 931, 1, INV, coded(s::PREGNANCY_STATUS, &t::PREGNANCY_STATUS), "Pregnancy"),
    f("PREG_BYPASS", 932, 1, INV, coded(s::PREGNANCY_EDIT_FLAG, &t::EDIT_FLAG), "Pregnancy--edit flag"),
    f("DOI_MO", 933, 2, INV, month(s::INJURY_DATE), "Date of injury--month"),
    f("DOI_DY", 935, 2, INV, day(s::INJURY_DATE), "Date of injury--day"),
    f("DOI_YR", 937, 4, INV, year(s::INJURY_DATE), "Date of injury--year"),
    f("TOI_HR", 941, 4, INV, time(s::INJURY_DATE), "Time of injury"),
    f("WORKINJ", 945, 1, INV, coded(s::INJURY_AT_WORK, &t::YES_NO_UNKNOWN), "Injury at work"),
    f("CERTL", 946, 30, CERT, Binding::CodedWithLiteral { slot: s::CERTIFIER_TYPE, table: &t::CERTIFIER_TYPE }, "Title of certifier"),
    f("INACT", 976, 1, CODED, coded(s::ACTIVITY_AT_TIME_OF_DEATH, &t::ACTIVITY_AT_TIME_OF_DEATH), "Activity at time of death (computer generated)"),
    f("AUXNO2", 977, 12, ID, text(s::STATE_AUXILIARY_ID2), "Auxiliary state file number 2"),
    f("STATESP", 989, 30, CERT, text(s::STATE_SPECIFIC), "State specific data"),
    f("SUR_MO", 1019, 2, INV, month(s::SURGERY_DATE), "Surgery date--month"),
    f("SUR_DY", 1021, 2, INV, day(s::SURGERY_DATE), "Surgery date--day"),
    f("SUR_YR", 1023, 4, INV, year(s::SURGERY_DATE), "Surgery date--year"),
    f("TOI_UNIT", 1027, 1, INV, coded(s::INJURY_TIME_UNIT, &t::TIME_UNIT), "Time of injury unit"),
    f("ARMEDF", 1033, 1, DEMO, coded(s::MILITARY_SERVICE, &t::YES_NO_UNKNOWN), "Decedent ever served in armed forces"),
    f("DINSTI", 1034, 30, INV, text(s::DEATH_LOCATION_NAME), "Death institution name"),
    f("ADDRESS_D", 1064, 50, INV, text(s::DEATH_LOCATION_LINE), "Long string address for place of death"),
    f("STNUM_D", 1114, 10, INV, text(s::DEATH_LOCATION_STREET_NUMBER), "Place of death--street number"),
    f("PREDIR_D", 1124, 10, INV, text(s::DEATH_LOCATION_PREDIRECTIONAL), "Place of death--pre directional"),
    f("STNAME_D", 1134, 50, INV, text(s::DEATH_LOCATION_STREET_NAME), "Place of death--street name"),
    f("STDESIG_D", 1184, 10, INV, text(s::DEATH_LOCATION_STREET_DESIGNATOR), "Place of death--street designator"),
    f("POSTDIR_D", 1194, 10, INV, text(s::DEATH_LOCATION_POSTDIRECTIONAL), "Place of death--post directional"),
    f("CITYTEXT_D", 1204, 28, INV, text(s::DEATH_LOCATION_CITY), "Place of death--city or town name"),
    f("STATETEXT_D", 1232, 28, INV, state_name(s::DEATH_LOCATION_STATE_NAME, s::DEATH_JURISDICTION), "Place of death--state name literal"),
    f("ZIP9_D", 1260, 9, INV, text(s::DEATH_LOCATION_ZIP), "Place of death--zip"),
    f("COUNTYTEXT_D", 1269, 28, INV, text(s::DEATH_LOCATION_COUNTY), "Place of death--county of death"),
    f("CITYCODE_D", 1297, 5, INV, text(s::DEATH_LOCATION_CITY_CODE), "Place of death--city FIPS code"),
    f("LONG_D", 1302, 17, INV, text(s::DEATH_LOCATION_LONGITUDE), "Place of death--longitude"),
    f("LAT_D", 1319, 17, INV, text(s::DEATH_LOCATION_LATITUDE), "Place of death--latitude"),
    f("SPOUSELV", 1336, 1, DEMO, coded(s::SPOUSE_ALIVE, &t::SPOUSE_ALIVE), "Decedent's spouse living at decedent's death"),
    f("SPOUSEF", 1337, 50, DEMO, text(s::SPOUSE_GIVEN_NAME), "Spouse's first name"),
    f("SPOUSEL", 1387, 50, DEMO, text(s::SPOUSE_LAST_NAME), "Husband's surname/wife's maiden last name"),
    f("STNUM_R", 1437, 10, DEMO, text(s::RESIDENCE_STREET_NUMBER), "Decedent's residence--street number"),
    f("PREDIR_R", 1447, 10, DEMO, text(s::RESIDENCE_PREDIRECTIONAL), "Decedent's residence--pre directional"),
    f("STNAME_R", 1457, 28, DEMO, text(s::RESIDENCE_STREET_NAME), "Decedent's residence--street name"),
    f("STDESIG_R", 1485, 10, DEMO, text(s::RESIDENCE_STREET_DESIGNATOR), "Decedent's residence--street designator"),
    f("POSTDIR_R", 1495, 10, DEMO, text(s::RESIDENCE_POSTDIRECTIONAL), "Decedent's residence--post directional"),
    f("UNITNUM_R", 1505, 7, DEMO, text(s::RESIDENCE_UNIT_NUMBER), "Decedent's residence--unit number"),
    f("CITYTEXT_R", 1512, 28, DEMO, text(s::RESIDENCE_CITY), "Decedent's residence--city or town name"),
    f("ZIP9_R", 1540, 9, DEMO, text(s::RESIDENCE_ZIP), "Decedent's residence--zip code"),
    f("COUNTYTEXT_R", 1549, 28, DEMO, text(s::RESIDENCE_COUNTY), "Decedent's residence--county"),
    f("STATETEXT_R", 1577, 28, DEMO, state_name(s::RESIDENCE_STATE_NAME, s::RESIDENCE_STATE), "Decedent's residence--state name"),
    f("COUNTRYTEXT_R", 1605, 28, DEMO, country_name(s::RESIDENCE_COUNTRY_NAME, s::RESIDENCE_COUNTRY), "Decedent's residence--country name"),
    f("ADDRESS_R", 1633, 50, DEMO, text(s::RESIDENCE_LINE), "Long string address for decedent's place of residence"),
    f("DMIDDLE", 1688, 50, DEMO, text(s::MIDDLE_NAME), "Middle name of decedent"),
    f("POILITRL", 1738, 50, INV, text(s::INJURY_PLACE_LITERAL), "Place of injury--literal"),
    f("HOWINJ", 1788, 250, INV, text(s::INJURY_DESCRIPTION), "Describe how injury occurred"),
    f("TRANSPRT", 2038, 30, INV, Binding::CodedWithLiteral { slot: s::TRANSPORTATION_ROLE, table: &t::TRANSPORTATION_ROLE }, "If transportation accident, specify"),
    f("COUNTYTEXT_I", 2068, 28, INV, text(s::INJURY_LOCATION_COUNTY), "County of injury--literal"),
    f("COUNTYCODE_I", 2096, 3, INV, text(s::INJURY_LOCATION_COUNTY_CODE), "County of injury code"),
    f("CITYTEXT_I", 2099, 28, INV, text(s::INJURY_LOCATION_CITY), "Town/city of injury--literal"),
    f("CITYCODE_I", 2127, 5, INV, text(s::INJURY_LOCATION_CITY_CODE), "Town/city of injury code"),
    f("STATECODE_I", 2132, 2, INV, Binding::Jurisdiction(s::INJURY_LOCATION_STATE), "State, U.S. territory or Canadian province of injury--code"),
    f("LONG_I", 2134, 17, INV, text(s::INJURY_LOCATION_LONGITUDE), "Place of injury--longitude"),
    f("LAT_I", 2151, 17, INV, text(s::INJURY_LOCATION_LATITUDE), "Place of injury--latitude"),
    f("REPLACE", 2168, 1, ID, Binding::Legacy, "Replacement record (retired)"),
    f("COD1A", 2169, 120, CERT, text(s::COD_LINE_A), "Cause of death part I line a"),
    f("INTERVAL1A", 2289, 20, CERT, text(s::COD_INTERVAL_A), "Cause of death part I interval, line a"),
    f("COD1B", 2309, 120, CERT, text(s::COD_LINE_B), "Cause of death part I line b"),
    f("INTERVAL1B", 2429, 20, CERT, text(s::COD_INTERVAL_B), "Cause of death part I interval, line b"),
    f("COD1C", 2449, 120, CERT, text(s::COD_LINE_C), "Cause of death part I line c"),
    f("INTERVAL1C", 2569, 20, CERT, text(s::COD_INTERVAL_C), "Cause of death part I interval, line c"),
    f("COD1D", 2589, 120, CERT, text(s::COD_LINE_D), "Cause of death part I line d"),
    f("INTERVAL1D", 2709, 20, CERT, text(s::COD_INTERVAL_D), "Cause of death part I interval, line d"),
    f("OTHERCONDITION", 2729, 240, CERT, text(s::CONTRIBUTING_CONDITIONS), "Cause of death part II"),
    f("DBPLACECITYCODE", 2969, 5, DEMO, text(s::BIRTHPLACE_CITY_CODE), "Decedent's birth place city--code"),
    f("DBPLACECITY", 2974, 28, DEMO, text(s::BIRTHPLACE_CITY), "Decedent's birth place city--literal"),
    f("SPOUSEMIDNAME", 3002, 50, DEMO, text(s::SPOUSE_MIDDLE_NAME), "Spouse's middle name"),
    f("SPOUSESUFFIX", 3052, 10, DEMO, text(s::SPOUSE_SUFFIX), "Spouse's suffix"),
    f("FATHERFNAME", 3062, 50, DEMO, text(s::FATHER_GIVEN_NAME), "Father's first name"),
    f("FATHERMNAME", 3112, 50, DEMO, text(s::FATHER_MIDDLE_NAME), "Father's middle name"),
    f("FATHERSUFFIX", 3162, 10, DEMO, text(s::FATHER_SUFFIX), "Father's suffix"),
    f("MOTHERFNAME", 3172, 50, DEMO, text(s::MOTHER_GIVEN_NAME), "Mother's first name"),
    f("MOTHERMNAME", 3222, 50, DEMO, text(s::MOTHER_MIDDLE_NAME), "Mother's middle name"),
    f("MOTHERMDNAME", 3272, 50, DEMO, text(s::MOTHER_MAIDEN_NAME), "Mother's maiden surname"),
    f("MOTHERSUFFIX", 3322, 10, DEMO, text(s::MOTHER_SUFFIX), "Mother's suffix"),
    f("INFORMRELATE", 3332, 30, DEMO, text(s::INFORMANT_RELATIONSHIP), "Informant's relationship"),
    f("DISPSTATECD", 3362, 2, DISP, Binding::Jurisdiction(s::DISPOSITION_STATE), "State, U.S. territory or Canadian province of disposition--code"),
    f("DISPSTATE", 3364, 28, DISP, state_name(s::DISPOSITION_STATE_NAME, s::DISPOSITION_STATE), "Disposition state or territory--literal"),
    f("DISPCITYCODE", 3392, 5, DISP, text(s::DISPOSITION_CITY_CODE), "Disposition city--code"),
    f("DISPCITY", 3397, 28, DISP, text(s::DISPOSITION_CITY), "Disposition city--literal"),
    f("FUNFACNAME", 3425, 100, DISP, text(s::FUNERAL_HOME_NAME), "Funeral facility name"),
    f("FUNFACSTNUM", 3525, 10, DISP, text(s::FUNERAL_HOME_STREET_NUMBER), "Funeral facility--street number"),
    f("FUNFACPREDIR", 3535, 10, DISP, text(s::FUNERAL_HOME_PREDIRECTIONAL), "Funeral facility--pre directional"),
    f("FUNFACSTRNAME", 3545, 28, DISP, text(s::FUNERAL_HOME_STREET_NAME), "Funeral facility--street name"),
    f("FUNFACSTRDESIG", 3573, 10, DISP, text(s::FUNERAL_HOME_STREET_DESIGNATOR), "Funeral facility--street designator"),
    f("FUNPOSTDIR", 3583, 10, DISP, text(s::FUNERAL_HOME_POSTDIRECTIONAL), "Funeral facility--post directional"),
    f("FUNUNITNUM", 3593, 7, DISP, text(s::FUNERAL_HOME_UNIT_NUMBER), "Funeral facility--unit or apt number"),
    f("FUNFACADDRESS", 3600, 50, DISP, text(s::FUNERAL_HOME_LINE), "Long string address for funeral facility"),
    f("FUNFACCITY", 3650, 28, DISP, text(s::FUNERAL_HOME_CITY), "Funeral facility--city or town name"),
    f("FUNFACCNTY", 3678, 28, DISP, text(s::FUNERAL_HOME_COUNTY), "Funeral facility--county"),
    f("FUNFACSTATE", 3706, 28, DISP, state_name(s::FUNERAL_HOME_STATE_NAME, s::FUNERAL_HOME_STATE), "Funeral facility--state name"),
    f("FUNFACSTATECD", 3734, 2, DISP, Binding::Jurisdiction(s::FUNERAL_HOME_STATE), "Funeral facility--state, U.S. territory or Canadian province--code"),
    f("FUNFACZIP", 3736, 9, DISP, text(s::FUNERAL_HOME_ZIP), "Funeral facility--zip"),
    f("PPDATESIGNED", 3745, 8, INV, Binding::FullDate(s::PRONOUNCEMENT_DATE), "Person pronouncing date signed"),
    f("PPTIME", 3753, 4, INV, time(s::PRONOUNCEMENT_DATE), "Person pronouncing time pronounced"),
    f("CERTFIRST", 3757, 50, CERT, text(s::CERTIFIER_GIVEN_NAME), "Certifier's first name"),
    f("CERTMIDDLE", 3807, 50, CERT, text(s::CERTIFIER_MIDDLE_NAME), "Certifier's middle name"),
    f("CERTLAST", 3857, 50, CERT, text(s::CERTIFIER_LAST_NAME), "Certifier's last name"),
    f("CERTSUFFIX", 3907, 10, CERT, text(s::CERTIFIER_SUFFIX), "Certifier's suffix name"),
    f("CERTSTNUM", 3917, 10, CERT, text(s::CERTIFIER_STREET_NUMBER), "Certifier--street number"),
    f("CERTPREDIR", 3927, 10, CERT, text(s::CERTIFIER_PREDIRECTIONAL), "Certifier--pre directional"),
    f("CERTSTRNAME", 3937, 28, CERT, text(s::CERTIFIER_STREET_NAME), "Certifier--street name"),
    f("CERTSTRDESIG", 3965, 10, CERT, text(s::CERTIFIER_STREET_DESIGNATOR), "Certifier--street designator"),
    f("CERTPOSTDIR", 3975, 10, CERT, text(s::CERTIFIER_POSTDIRECTIONAL), "Certifier--post directional"),
    f("CERTUNITNUM", 3985, 7, CERT, text(s::CERTIFIER_UNIT_NUMBER), "Certifier--unit or apt number"),
    f("CERTADDRESS", 3992, 50, CERT, text(s::CERTIFIER_LINE), "Long string address for certifier"),
    f("CERTCITYTEXT", 4042, 28, CERT, text(s::CERTIFIER_CITY), "Certifier--city or town name"),
    f("CERTSTATECD", 4070, 2, CERT, Binding::Jurisdiction(s::CERTIFIER_STATE), "State, U.S. territory or Canadian province of certifier--code"),
    f("CERTSTATE", 4072, 28, CERT, state_name(s::CERTIFIER_STATE_NAME, s::CERTIFIER_STATE), "State, U.S. territory or Canadian province of certifier--literal"),
    f("CERTZIP", 4100, 9, CERT, text(s::CERTIFIER_ZIP), "Certifier--zip"),
    f("CERTDATE", 4109, 8, CERT, Binding::FullDate(s::CERTIFIED_DATE), "Certifier date signed"),
    f("STINJURY", 4117, 28, INV, state_name(s::INJURY_LOCATION_STATE_NAME, s::INJURY_LOCATION_STATE), "State, U.S. territory or Canadian province of injury--literal"),
    f("STATEBTH", 4145, 28, DEMO, state_name(s::BIRTHPLACE_STATE_NAME, s::BIRTHPLACE_STATE), "State, U.S. territory or Canadian province of birth--literal"),
    f("DTHCOUNTRYCD", 4173, 2, INV, Binding::Country(s::DEATH_LOCATION_COUNTRY), "Country of death--code"),
    f("DTHCOUNTRY", 4175, 28, INV, country_name(s::DEATH_LOCATION_COUNTRY_NAME, s::DEATH_LOCATION_COUNTRY), "Country of death--literal"),
    f("REFERRED", 4203, 1, INV, coded(s::EXAMINER_CONTACTED, &t::YES_NO_UNKNOWN), "Was case referred to medical examiner/coroner"),
    f("RACE1E", 4204, 3, CODED, text(s::CODED_RACE[0]), "First edited code"),
    f("RACE2E", 4207, 3, CODED, text(s::CODED_RACE[1]), "Second edited code"),
    f("RACE3E", 4210, 3, CODED, text(s::CODED_RACE[2]), "Third edited code"),
    f("RACE4E", 4213, 3, CODED, text(s::CODED_RACE[3]), "Fourth edited code"),
    f("RACE5E", 4216, 3, CODED, text(s::CODED_RACE[4]), "Fifth edited code"),
    f("RACE6E", 4219, 3, CODED, text(s::CODED_RACE[5]), "Sixth edited code"),
    f("RACE7E", 4222, 3, CODED, text(s::CODED_RACE[6]), "Seventh edited code"),
    f("RACE8E", 4225, 3, CODED, text(s::CODED_RACE[7]), "Eighth edited code"),
    f("RACE16C", 4228, 3, CODED, text(s::CODED_RACE_LITERAL[0]), "First American Indian code"),
    f("RACE17C", 4231, 3, CODED, text(s::CODED_RACE_LITERAL[1]), "Second American Indian code"),
    f("RACE18C", 4234, 3, CODED, text(s::CODED_RACE_LITERAL[2]), "First other Asian code"),
    f("RACE19C", 4237, 3, CODED, text(s::CODED_RACE_LITERAL[3]), "Second other Asian code"),
    f("RACE20C", 4240, 3, CODED, text(s::CODED_RACE_LITERAL[4]), "First other Pacific Islander code"),
    f("RACE21C", 4243, 3, CODED, text(s::CODED_RACE_LITERAL[5]), "Second other Pacific Islander code"),
    f("RACE22C", 4246, 3, CODED, text(s::CODED_RACE_LITERAL[6]), "First other race code"),
    f("RACE23C", 4249, 3, CODED, text(s::CODED_RACE_LITERAL[7]), "Second other race code"),
    f("RACEBRG", 4252, 2, CODED, text(s::BRIDGED_RACE), "Bridged race"),
    f("DETHNICE", 4254, 3, CODED, text(s::HISPANIC_CODE), "Hispanic code"),
    f("DETHNIC5C", 4257, 3, CODED, text(s::HISPANIC_LITERAL_CODE), "Hispanic code for literal"),
    f("PLACE1_1", 4260, 1, CERT, text(s::JURISDICTION_FLAGS[0]), "Jurisdiction one-byte field 1"),
    f("PLACE1_2", 4261, 1, CERT, text(s::JURISDICTION_FLAGS[1]), "Jurisdiction one-byte field 2"),
    f("PLACE1_3", 4262, 1, CERT, text(s::JURISDICTION_FLAGS[2]), "Jurisdiction one-byte field 3"),
    f("PLACE1_4", 4263, 1, CERT, text(s::JURISDICTION_FLAGS[3]), "Jurisdiction one-byte field 4"),
    f("PLACE1_5", 4264, 1, CERT, text(s::JURISDICTION_FLAGS[4]), "Jurisdiction one-byte field 5"),
    f("PLACE1_6", 4265, 1, CERT, text(s::JURISDICTION_FLAGS[5]), "Jurisdiction one-byte field 6"),
    f("PLACE8_1", 4266, 8, CERT, text(s::JURISDICTION_CODES[0]), "Jurisdiction eight-byte field 1"),
    f("PLACE8_2", 4274, 8, CERT, text(s::JURISDICTION_CODES[1]), "Jurisdiction eight-byte field 2"),
    f("PLACE8_3", 4282, 8, CERT, text(s::JURISDICTION_CODES[2]), "Jurisdiction eight-byte field 3"),
    f("PLACE20", 4290, 20, CERT, text(s::JURISDICTION_TEXT), "Jurisdiction twenty-byte field"),
    f("BPLACEC_ST_TER", 4310, 2, CODED, Binding::Jurisdiction(s::CODED_BIRTHPLACE_STATE), "State, U.S. territory or Canadian province of birth--NCHS code"),
    f("BPLACEC_CNT", 4312, 2, CODED, Binding::Country(s::CODED_BIRTHPLACE_COUNTRY), "Birthplace country--NCHS code"),
    f("EMERGREG", 4314, 1, CERT, text(s::EMERGENCY_REGISTRATION), "Emergency registration"),
    f("SPEVENT", 4315, 50, CERT, text(s::SPECIAL_EVENT), "Special event"),
];

// =============================================================================
// Catalog views
// =============================================================================

/// Indexed views over [`FIELDS`].
#[derive(Debug)]
pub struct Catalog {
    fields: &'static [FieldDescriptor],
    by_start: Vec<&'static FieldDescriptor>,
    by_priority: Vec<&'static FieldDescriptor>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    fn build(fields: &'static [FieldDescriptor]) -> Self {
        let mut by_start: Vec<_> = fields.iter().collect();
        by_start.sort_by_key(|field| field.start);

        // Fields that fall back to another datum decode after it.
        let mut by_priority = by_start.clone();
        by_priority.sort_by_key(|field| (field.priority, field.binding.is_derived(), field.start));

        let by_name = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name.to_ascii_uppercase(), index))
            .collect();

        Self {
            fields,
            by_start,
            by_priority,
            by_name,
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn by_start(&self) -> &[&'static FieldDescriptor] {
        &self.by_start
    }

    pub fn by_priority(&self) -> &[&'static FieldDescriptor] {
        &self.by_priority
    }

    pub fn ordered(&self, order: FieldOrder) -> &[&'static FieldDescriptor] {
        match order {
            FieldOrder::Position => &self.by_start,
            FieldOrder::Priority => &self.by_priority,
        }
    }

    /// Look a field up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&'static FieldDescriptor> {
        let fields = self.fields;
        self.by_name
            .get(&name.trim().to_ascii_uppercase())
            .and_then(|&index| fields.get(index))
    }

    /// Field covering a 0-based column, if any.
    pub fn at_offset(&self, offset: usize) -> Option<&'static FieldDescriptor> {
        self.by_start
            .iter()
            .copied()
            .find(|field| field.range().contains(&offset))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The IJE mortality catalog, built on first use.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let catalog = Catalog::build(FIELDS);
        debug!(fields = catalog.len(), "Built IJE field catalog");
        catalog
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fields_fit_and_do_not_overlap() {
        let fields = catalog().by_start();
        for pair in fields.windows(2) {
            assert!(
                pair[0].end() <= pair[1].offset(),
                "{} overlaps {}",
                pair[0].name,
                pair[1].name
            );
        }
        let last = fields.last().unwrap();
        assert!(last.end() <= IJE_LENGTH);
        assert!(fields.iter().all(|field| field.width > 0));
    }

    #[test]
    fn test_declared_in_start_order() {
        assert!(FIELDS.windows(2).all(|pair| pair[0].start < pair[1].start));
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = FIELDS.iter().map(|field| field.name).collect();
        assert_eq!(names.len(), FIELDS.len());
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(catalog().get("dstate").map(|f| f.start), Some(5));
        assert_eq!(catalog().get("Statetext_D").map(|f| f.width), Some(28));
        assert!(catalog().get("NOPE").is_none());
    }

    #[test]
    fn test_priority_order_puts_fallbacks_last() {
        let order = catalog().by_priority();
        let position = |name: &str| order.iter().position(|f| f.name == name).unwrap();
        assert!(position("FUNFACSTATECD") < position("FUNFACSTATE"));
        assert!(position("DMIDDLE") < position("MNAME"));
        assert!(position("DOD_YR") < position("GNAME"));
        assert!(position("GNAME") < position("DOD_MO"));
    }

    #[test]
    fn test_at_offset() {
        assert_eq!(catalog().at_offset(0).map(|f| f.name), Some("DOD_YR"));
        assert_eq!(catalog().at_offset(12).map(|f| f.name), Some("VOID"));
        assert!(catalog().at_offset(649).is_none());
    }
}
