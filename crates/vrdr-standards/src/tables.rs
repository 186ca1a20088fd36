//! The code tables of the fixed-width format.
//!
//! Each table lists every category the format defines for one field family.
//! Tables are plain statics; [`all`] enumerates them for tooling and tests.

use crate::systems as sys;
use crate::table::{CodeRow, CodeTable};

const fn row(
    ije: &'static str,
    code: &'static str,
    system: &'static str,
    display: &'static str,
) -> CodeRow {
    CodeRow::new(ije, code, system, display)
}

const UNKNOWN: &str = "unknown";

// =============================================================================
// Decedent demographics
// =============================================================================

pub static SEX: CodeTable = CodeTable::new(
    "sex",
    &[
        row("M", "male", sys::ADMINISTRATIVE_GENDER, "Male"),
        row("F", "female", sys::ADMINISTRATIVE_GENDER, "Female"),
        row("U", "unknown", sys::ADMINISTRATIVE_GENDER, "Unknown"),
    ],
);

pub static MARITAL_STATUS: CodeTable = CodeTable::new(
    "marital status",
    &[
        row("M", "M", sys::MARITAL_STATUS, "Married"),
        row("A", "L", sys::MARITAL_STATUS, "Legally Separated"),
        row("W", "W", sys::MARITAL_STATUS, "Widowed"),
        row("D", "D", sys::MARITAL_STATUS, "Divorced"),
        row("S", "S", sys::MARITAL_STATUS, "Never Married"),
        row("T", "T", sys::MARITAL_STATUS, "Domestic partner"),
        row("U", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

pub static EDUCATION: CodeTable = CodeTable::new(
    "education level",
    &[
        row("1", "PHC1448", sys::PHINVADS, "8th grade or less"),
        row("2", "PHC1449", sys::PHINVADS, "9th through 12th grade; no diploma"),
        row("3", "PHC1450", sys::PHINVADS, "High School Graduate or GED Completed"),
        row("4", "PHC1451", sys::PHINVADS, "Some college credit, but no degree"),
        row("5", "PHC1452", sys::PHINVADS, "Associate Degree"),
        row("6", "PHC1453", sys::PHINVADS, "Bachelor's Degree"),
        row("7", "PHC1454", sys::PHINVADS, "Master's Degree"),
        row("8", "PHC1455", sys::PHINVADS, "Doctorate Degree or Professional Degree"),
        row("9", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

pub static AGE_UNIT: CodeTable = CodeTable::new(
    "age unit",
    &[
        row("1", "a", sys::UCUM, "Years"),
        row("2", "mo", sys::UCUM, "Months"),
        row("4", "d", sys::UCUM, "Days"),
        row("5", "h", sys::UCUM, "Hours"),
        row("6", "min", sys::UCUM, "Minutes"),
        row("9", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

/// Hispanic-origin flags: `H` marks the origin as present.
pub static HISPANIC_ORIGIN: CodeTable = CodeTable::new(
    "hispanic origin",
    &[
        row("H", "Y", sys::YES_NO, "Yes"),
        row("N", "N", sys::YES_NO, "No"),
        row("U", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

/// Checkbox race categories.
pub static RACE_FLAG: CodeTable = CodeTable::new(
    "race flag",
    &[
        row("Y", "Y", sys::YES_NO, "Yes"),
        row("N", "N", sys::YES_NO, "No"),
    ],
);

pub static RACE_MISSING_VALUE_REASON: CodeTable = CodeTable::new(
    "race missing value reason",
    &[
        row("R", "R", sys::MISSING_VALUE_REASON, "Refused"),
        row("S", "S", sys::MISSING_VALUE_REASON, "Sought, but unknown"),
        row("C", "C", sys::MISSING_VALUE_REASON, "Not obtainable"),
    ],
);

pub static SPOUSE_ALIVE: CodeTable = CodeTable::new(
    "spouse alive",
    &[
        row("1", "Y", sys::YES_NO, "Yes"),
        row("2", "N", sys::YES_NO, "No"),
        row("8", "NA", sys::NULL_FLAVOR, "not applicable"),
        row("9", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

// =============================================================================
// Yes / no
// =============================================================================

pub static YES_NO_UNKNOWN: CodeTable = CodeTable::new(
    "yes/no/unknown",
    &[
        row("Y", "Y", sys::YES_NO, "Yes"),
        row("N", "N", sys::YES_NO, "No"),
        row("U", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

/// Autopsy findings: `X` when no autopsy was performed.
pub static YES_NO_NOT_APPLICABLE: CodeTable = CodeTable::new(
    "yes/no/not applicable",
    &[
        row("Y", "Y", sys::YES_NO, "Yes"),
        row("N", "N", sys::YES_NO, "No"),
        row("X", "NA", sys::NULL_FLAVOR, "not applicable"),
    ],
);

// =============================================================================
// Investigation
// =============================================================================

pub static PLACE_OF_DEATH: CodeTable = CodeTable::new(
    "place of death",
    &[
        row("1", "16983000", sys::SNOMED_CT, "Death in hospital"),
        row("2", "450391000124102", sys::SNOMED_CT, "Death in emergency Room/Outpatient"),
        row("3", "63238001", sys::SNOMED_CT, "Dead on arrival at hospital"),
        row("4", "440081000124100", sys::SNOMED_CT, "Death in home"),
        row("5", "440071000124103", sys::SNOMED_CT, "Death in hospice"),
        row(
            "6",
            "450381000124100",
            sys::SNOMED_CT,
            "Death in nursing home or long term care facility",
        ),
        row("7", "OTH", sys::NULL_FLAVOR, "other"),
        row("9", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

pub static MANNER_OF_DEATH: CodeTable = CodeTable::new(
    "manner of death",
    &[
        row("N", "38605008", sys::SNOMED_CT, "Natural death"),
        row("A", "7878000", sys::SNOMED_CT, "Accidental death"),
        row("S", "44301001", sys::SNOMED_CT, "Suicide"),
        row("H", "27935005", sys::SNOMED_CT, "Homicide"),
        row("P", "185973002", sys::SNOMED_CT, "Patient awaiting investigation"),
        row("C", "65037004", sys::SNOMED_CT, "Death, manner undetermined"),
    ],
);

pub static TOBACCO_USE: CodeTable = CodeTable::new(
    "tobacco use",
    &[
        row("Y", "373066001", sys::SNOMED_CT, "Yes"),
        row("N", "373067005", sys::SNOMED_CT, "No"),
        row("P", "2931005", sys::SNOMED_CT, "Probably"),
        row("U", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

pub static PREGNANCY_STATUS: CodeTable = CodeTable::new(
    "pregnancy status",
    &[
        row("1", "PHC1260", sys::PHINVADS, "Not pregnant within past year"),
        row("2", "PHC1261", sys::PHINVADS, "Pregnant at time of death"),
        row(
            "3",
            "PHC1262",
            sys::PHINVADS,
            "Not pregnant, but pregnant within 42 days of death",
        ),
        row(
            "4",
            "PHC1263",
            sys::PHINVADS,
            "Not pregnant, but pregnant 43 days to 1 year before death",
        ),
        row("9", "PHC1264", sys::PHINVADS, "Unknown if pregnant within the past year"),
        row("8", "NA", sys::NULL_FLAVOR, "not applicable"),
    ],
);

pub static PLACE_OF_INJURY: CodeTable = CodeTable::new(
    "place of injury",
    &[
        row("0", "0", sys::PLACE_OF_INJURY, "Home"),
        row("1", "1", sys::PLACE_OF_INJURY, "Residential institution"),
        row(
            "2",
            "2",
            sys::PLACE_OF_INJURY,
            "School, other institution and public administrative area",
        ),
        row("3", "3", sys::PLACE_OF_INJURY, "Sports and athletics area"),
        row("4", "4", sys::PLACE_OF_INJURY, "Street/highway"),
        row("5", "5", sys::PLACE_OF_INJURY, "Trade and service area"),
        row("6", "6", sys::PLACE_OF_INJURY, "Industrial and construction area"),
        row("7", "7", sys::PLACE_OF_INJURY, "Farm"),
        row("8", "8", sys::PLACE_OF_INJURY, "Other Specified Place"),
        row("9", "9", sys::PLACE_OF_INJURY, "Unspecified"),
    ],
);

/// Transportation role. Roles outside the table travel as their literal.
pub static TRANSPORTATION_ROLE: CodeTable = CodeTable::new(
    "transportation role",
    &[
        row("DR", "236320001", sys::SNOMED_CT, "Vehicle driver"),
        row("PA", "257500003", sys::SNOMED_CT, "Passenger"),
        row("PE", "257518000", sys::SNOMED_CT, "Pedestrian"),
    ],
)
.with_other(row("", "OTH", sys::NULL_FLAVOR, "Other"));

/// Clock convention of the time of injury.
pub static TIME_UNIT: CodeTable = CodeTable::new(
    "time unit",
    &[
        row("A", "AM", sys::TIME_UNIT, "A.M."),
        row("P", "PM", sys::TIME_UNIT, "P.M."),
        row("M", "24HR", sys::TIME_UNIT, "Military (24 hour clock)"),
        row("U", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

// =============================================================================
// Edit flags
// =============================================================================

pub static EDIT_FLAG: CodeTable = CodeTable::new(
    "edit flag",
    &[
        row("0", "0", sys::BYPASS_EDIT_FLAG, "Edit Passed"),
        row("1", "1", sys::BYPASS_EDIT_FLAG, "Edit Failed, Data Queried, and Verified"),
        row(
            "2",
            "2",
            sys::BYPASS_EDIT_FLAG,
            "Edit Failed, Data Queried, but not Verified",
        ),
    ],
);

/// Marital status edits may also be left awaiting a query.
pub static MARITAL_EDIT_FLAG: CodeTable = CodeTable::new(
    "marital status edit flag",
    &[
        row("0", "0", sys::BYPASS_EDIT_FLAG, "Edit Passed"),
        row("1", "1", sys::BYPASS_EDIT_FLAG, "Edit Failed, Data Queried, and Verified"),
        row(
            "2",
            "2",
            sys::BYPASS_EDIT_FLAG,
            "Edit Failed, Data Queried, but not Verified",
        ),
        row("4", "4", sys::BYPASS_EDIT_FLAG, "Edit Failed, Query Needed"),
    ],
);

// =============================================================================
// Certification and disposition
// =============================================================================

pub static DISPOSITION_METHOD: CodeTable = CodeTable::new(
    "disposition method",
    &[
        row("B", "449971000124106", sys::SNOMED_CT, "Burial"),
        row("C", "449961000124104", sys::SNOMED_CT, "Cremation"),
        row("D", "449951000124101", sys::SNOMED_CT, "Donation"),
        row("E", "449931000124108", sys::SNOMED_CT, "Entombment"),
        row("R", "449941000124103", sys::SNOMED_CT, "Removal from state"),
        row("H", "455401000124109", sys::SNOMED_CT, "Hospital Disposition"),
        row("O", "OTH", sys::NULL_FLAVOR, "other"),
        row("U", "UNK", sys::NULL_FLAVOR, UNKNOWN),
    ],
);

/// Certifier role. Other titles travel as their literal.
pub static CERTIFIER_TYPE: CodeTable = CodeTable::new(
    "certifier type",
    &[
        row("D", "434651000124107", sys::SNOMED_CT, "Physician (Certifier)"),
        row(
            "P",
            "434641000124105",
            sys::SNOMED_CT,
            "Physician (Pronouncer and Certifier)",
        ),
        row("M", "455381000124103", sys::SNOMED_CT, "Medical Examiner/Coroner"),
    ],
)
.with_other(row("", "OTH", sys::NULL_FLAVOR, "Other"));

pub static FILING_FORMAT: CodeTable = CodeTable::new(
    "filing format",
    &[
        row("0", "electronic", sys::FILING_FORMAT, "Electronic"),
        row("1", "paper", sys::FILING_FORMAT, "Paper"),
        row("2", "mixed", sys::FILING_FORMAT, "Mixed"),
    ],
);

// =============================================================================
// Coded content
// =============================================================================

pub static INTENTIONAL_REJECT: CodeTable = CodeTable::new(
    "intentional reject",
    &[
        row("1", "1", sys::INTENTIONAL_REJECT, "Reject1"),
        row("2", "2", sys::INTENTIONAL_REJECT, "Reject2"),
        row("3", "3", sys::INTENTIONAL_REJECT, "Reject3"),
        row("4", "4", sys::INTENTIONAL_REJECT, "Reject4"),
        row("5", "5", sys::INTENTIONAL_REJECT, "Reject5"),
        row("9", "9", sys::INTENTIONAL_REJECT, "Reject9"),
    ],
);

pub static SYSTEM_REJECT: CodeTable = CodeTable::new(
    "system reject",
    &[
        row("0", "0", sys::SYSTEM_REJECT, "Not Rejected"),
        row("1", "1", sys::SYSTEM_REJECT, "MICAR Reject - Dictionary Match"),
        row("2", "2", sys::SYSTEM_REJECT, "ACME Reject"),
        row("3", "3", sys::SYSTEM_REJECT, "MICAR Reject - Rule Application"),
        row("4", "4", sys::SYSTEM_REJECT, "Reviewer Reject"),
    ],
);

pub static TRANSAX_CONVERSION: CodeTable = CodeTable::new(
    "transax conversion",
    &[
        row(
            "3",
            "3",
            sys::TRANSAX_CONVERSION,
            "Conversion using non-ambivalent table entries",
        ),
        row("4", "4", sys::TRANSAX_CONVERSION, "Conversion using ambivalent table entries"),
        row(
            "5",
            "5",
            sys::TRANSAX_CONVERSION,
            "Duplicate entity-axis codes deleted; no other action involved",
        ),
        row(
            "6",
            "6",
            sys::TRANSAX_CONVERSION,
            "Artificial code conversion; no other action",
        ),
    ],
);

pub static ACTIVITY_AT_TIME_OF_DEATH: CodeTable = CodeTable::new(
    "activity at time of death",
    &[
        row("0", "0", sys::ACTIVITY_AT_TIME_OF_DEATH, "While engaged in sports activity"),
        row("1", "1", sys::ACTIVITY_AT_TIME_OF_DEATH, "While engaged in leisure activities"),
        row("2", "2", sys::ACTIVITY_AT_TIME_OF_DEATH, "While working for income"),
        row(
            "3",
            "3",
            sys::ACTIVITY_AT_TIME_OF_DEATH,
            "While engaged in other types of work",
        ),
        row(
            "4",
            "4",
            sys::ACTIVITY_AT_TIME_OF_DEATH,
            "While resting, sleeping, eating, or engaging in other vital activities",
        ),
        row(
            "8",
            "8",
            sys::ACTIVITY_AT_TIME_OF_DEATH,
            "While engaged in other specified activities",
        ),
        row("9", "9", sys::ACTIVITY_AT_TIME_OF_DEATH, "During unspecified activity"),
    ],
);

/// Every table, for listing and consistency checks.
pub fn all() -> &'static [&'static CodeTable] {
    static ALL: [&CodeTable; 26] = [
        &SEX,
        &MARITAL_STATUS,
        &EDUCATION,
        &AGE_UNIT,
        &HISPANIC_ORIGIN,
        &RACE_FLAG,
        &RACE_MISSING_VALUE_REASON,
        &SPOUSE_ALIVE,
        &YES_NO_UNKNOWN,
        &YES_NO_NOT_APPLICABLE,
        &PLACE_OF_DEATH,
        &MANNER_OF_DEATH,
        &TOBACCO_USE,
        &PREGNANCY_STATUS,
        &PLACE_OF_INJURY,
        &TRANSPORTATION_ROLE,
        &TIME_UNIT,
        &EDIT_FLAG,
        &MARITAL_EDIT_FLAG,
        &DISPOSITION_METHOD,
        &CERTIFIER_TYPE,
        &FILING_FORMAT,
        &INTENTIONAL_REJECT,
        &SYSTEM_REJECT,
        &TRANSAX_CONVERSION,
        &ACTIVITY_AT_TIME_OF_DEATH,
    ];
    &ALL
}
