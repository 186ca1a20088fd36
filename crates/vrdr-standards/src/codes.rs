//! Factory functions for coded values, grouped by code system.
//!
//! Use these instead of spelling out code/system/display triples at call
//! sites.

use vrdr_model::CodedValue;

use crate::systems as sys;

pub fn snomed(code: &str, display: &str) -> CodedValue {
    CodedValue::new(code, sys::SNOMED_CT, display)
}

pub fn null_flavor(code: &str, display: &str) -> CodedValue {
    CodedValue::new(code, sys::NULL_FLAVOR, display)
}

pub fn yes() -> CodedValue {
    CodedValue::new("Y", sys::YES_NO, "Yes")
}

pub fn no() -> CodedValue {
    CodedValue::new("N", sys::YES_NO, "No")
}

pub fn unknown() -> CodedValue {
    null_flavor("UNK", "unknown")
}

pub fn not_applicable() -> CodedValue {
    null_flavor("NA", "not applicable")
}

/// Other, with the literal the category could not express.
pub fn other(text: &str) -> CodedValue {
    null_flavor("OTH", "Other").with_text(text)
}

pub fn administrative_gender(code: &str) -> CodedValue {
    let display = match code {
        "male" => "Male",
        "female" => "Female",
        _ => "Unknown",
    };
    CodedValue::new(code, sys::ADMINISTRATIVE_GENDER, display)
}

pub fn ucum(unit: &str, display: &str) -> CodedValue {
    CodedValue::new(unit, sys::UCUM, display)
}

pub fn edit_flag(code: &str, display: &str) -> CodedValue {
    CodedValue::new(code, sys::BYPASS_EDIT_FLAG, display)
}
