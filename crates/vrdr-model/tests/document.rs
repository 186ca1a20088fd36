//! Tests for the JSON document collaborator.

use vrdr_model::{
    CodedValue, DeathRecord, DocumentFormat, JsonDocument, ModelError, PartialDateTime, TriState,
};

fn populated() -> DeathRecord {
    let mut record = DeathRecord::new();
    record.set_given_name("Madelyn");
    record.set_last_name("Patel");
    record.set_father_given_name("Ravi");
    record.set_death_jurisdiction("MA");
    record.set_certificate_number(Some(1)).unwrap();
    record.set_death_date(Some(PartialDateTime::new(
        TriState::Known(2019),
        TriState::Known(2),
        TriState::ExplicitlyUnknown,
    )));
    record.set_manner_of_death(Some(CodedValue::new(
        "7878000",
        "http://snomed.info/sct",
        "Accidental death",
    )));
    record
}

// =========================================================================
// Round trip
// =========================================================================

#[test]
fn test_document_roundtrip_compact_and_pretty() {
    let record = populated();
    for format in [JsonDocument::new(), JsonDocument::new().pretty(true)] {
        let text = format.serialize(&record).unwrap();
        assert_eq!(format.parse(&text).unwrap(), record);
    }
}

#[test]
fn test_value_roundtrip() {
    let record = populated();
    let value = vrdr_model::document::to_value(&record).unwrap();
    assert_eq!(vrdr_model::document::from_value(value).unwrap(), record);
}

// =========================================================================
// Structural errors
// =========================================================================

#[test]
fn test_wide_certificate_number_rejected() {
    let text = JsonDocument::new().serialize(&populated()).unwrap();
    let wide = text.replace(
        r#"{"kind":"integer","value":1}"#,
        r#"{"kind":"integer","value":1234567}"#,
    );
    assert_ne!(wide, text);
    let err = JsonDocument::new().parse(&wide).unwrap_err();
    assert!(matches!(err, ModelError::CertificateNumber { value: 1_234_567 }));
    insta::assert_snapshot!(err.to_string(), @"certificate number 1234567 does not fit in six digits");
}

#[test]
fn test_syntax_error_has_position() {
    let err = JsonDocument::new()
        .parse("{\n\"resourceType\": \"DeathCertificateDocument\",\n\"sections\": [")
        .unwrap_err();
    match err {
        ModelError::Syntax { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_missing_code() {
    let text = r#"{
        "resourceType": "DeathCertificateDocument",
        "sections": {
            "deathCertification": {
                "mannerOfDeath": {
                    "resourceType": "Observation",
                    "elements": { "value": { "kind": "coded", "value": { "code": "" } } }
                }
            }
        }
    }"#;
    let err = JsonDocument::new().parse(text).unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingCode { ref resource, ref element }
            if resource == "mannerOfDeath" && element == "value"
    ));
}

#[test]
fn test_missing_relationship() {
    let text = r#"{
        "resourceType": "DeathCertificateDocument",
        "sections": {
            "decedentDemographics": {
                "father": {
                    "resourceType": "RelatedPerson",
                    "elements": { "givenName": { "kind": "text", "value": "Ravi" } }
                }
            }
        }
    }"#;
    let err = JsonDocument::new().parse(text).unwrap_err();
    assert!(matches!(err, ModelError::MissingRelationship { .. }));
}

#[test]
fn test_missing_value() {
    let text = r#"{
        "resourceType": "DeathCertificateDocument",
        "sections": {
            "deathInvestigation": {
                "autopsy": { "resourceType": "Observation", "elements": {} }
            }
        }
    }"#;
    let err = JsonDocument::new().parse(text).unwrap_err();
    assert_eq!(err.to_string(), "resource autopsy: missing required value");
}

#[test]
fn test_malformed_partial_date() {
    let text = r#"{
        "resourceType": "DeathCertificateDocument",
        "sections": {
            "deathInvestigation": {
                "deathDate": {
                    "resourceType": "Observation",
                    "elements": {
                        "value": { "kind": "date", "value": { "year": { "known": 2021 }, "month": { "known": 13 } } }
                    }
                }
            }
        }
    }"#;
    let err = JsonDocument::new().parse(text).unwrap_err();
    assert!(matches!(err, ModelError::MalformedDate { .. }));
}

#[test]
fn test_misplaced_resource() {
    let text = r#"{
        "resourceType": "DeathCertificateDocument",
        "sections": {
            "codedContent": {
                "decedent": {
                    "resourceType": "Patient",
                    "elements": { "givenName": { "kind": "text", "value": "X" } }
                }
            }
        }
    }"#;
    let err = JsonDocument::new().parse(text).unwrap_err();
    assert!(matches!(err, ModelError::MisplacedResource { .. }));
}
