//! Code system URIs.

pub const ADMINISTRATIVE_GENDER: &str = "http://hl7.org/fhir/administrative-gender";
pub const YES_NO: &str = "http://terminology.hl7.org/CodeSystem/v2-0136";
pub const NULL_FLAVOR: &str = "http://terminology.hl7.org/CodeSystem/v3-NullFlavor";
pub const MARITAL_STATUS: &str = "http://terminology.hl7.org/CodeSystem/v3-MaritalStatus";
pub const SNOMED_CT: &str = "http://snomed.info/sct";
pub const UCUM: &str = "http://unitsofmeasure.org";
/// PHIN VADS value sets (education level, pregnancy status).
pub const PHINVADS: &str = "urn:oid:2.16.840.1.114222.4.5.274";

// Local code systems of the death record guide
pub const BYPASS_EDIT_FLAG: &str = "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-bypass-edit-flag-cs";
pub const PLACE_OF_INJURY: &str = "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-place-of-injury-cs";
pub const MISSING_VALUE_REASON: &str =
    "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-missing-value-reason-cs";
pub const FILING_FORMAT: &str = "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-filing-format-cs";
pub const INTENTIONAL_REJECT: &str =
    "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-intentional-reject-cs";
pub const SYSTEM_REJECT: &str = "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-system-reject-cs";
pub const TRANSAX_CONVERSION: &str =
    "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-transax-conversion-cs";
pub const ACTIVITY_AT_TIME_OF_DEATH: &str =
    "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-activity-at-time-of-death-cs";
/// Clock convention of a recorded time of injury.
pub const TIME_UNIT: &str = "http://hl7.org/fhir/us/vrdr/CodeSystem/vrdr-time-unit-cs";
