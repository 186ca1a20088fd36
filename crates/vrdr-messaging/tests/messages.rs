//! Message construction, wire round trips and error responses.

use proptest::prelude::*;
use serde_json::{Value, json};
use vrdr_ije::{CodecOptions, IjeRecord};
use vrdr_messaging::{
    AliasNames, IjeFieldFilter, Issue, Message, MessageError, MessageFilter, MessageKind,
    ParseErrorKind, RecordIds,
};
use vrdr_model::{DeathRecord, PartialDateTime, TriState};

fn registered() -> DeathRecord {
    let mut record = DeathRecord::new();
    record.set_death_date(Some(PartialDateTime::new(
        TriState::Known(2018),
        TriState::Known(2),
        TriState::Known(20),
    )));
    record.set_death_jurisdiction("MA");
    record.set_certificate_number(Some(1234)).unwrap();
    record.set_state_auxiliary_id("000182");
    record.set_given_name("Madelyn");
    record.set_last_name("Patel");
    record
}

fn parse_error(text: &str) -> vrdr_messaging::MessageParseError {
    match Message::parse(text) {
        Err(MessageError::Parse(err)) => *err,
        other => panic!("expected parse error, got {other:?}"),
    }
}

// =========================================================================
// Round trips
// =========================================================================

#[test]
fn test_submission_roundtrip() {
    let message = Message::submission(registered())
        .with_source("http://mitre.org/vrdr")
        .with_destination("http://nchs.cdc.gov/vrdr_submission");
    let parsed = Message::parse(&message.to_json().unwrap()).unwrap();
    assert_eq!(parsed, message);
    assert_eq!(parsed.nchs_id().as_deref(), Some("2018MA001234"));
    assert_eq!(parsed.record().unwrap().given_name(), Some("Madelyn"));
}

#[test]
fn test_pretty_output_parses() {
    let message = Message::update(registered());
    let parsed = Message::parse(&message.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, message);
}

#[test]
fn test_void_and_alias_roundtrip() {
    let void = Message::void(&registered(), Some(10));
    let parsed = Message::parse(&void.to_json().unwrap()).unwrap();
    assert_eq!(parsed.kind(), MessageKind::Void);
    assert_eq!(parsed.block_count(), Some(10));
    assert_eq!(parsed.certificate_number(), Some(1234));

    let names = AliasNames {
        first_name: Some("Maddy".to_string()),
        social_security_number: Some("123456789".to_string()),
        ..AliasNames::default()
    };
    let alias = Message::alias(&registered(), names.clone());
    let parsed = Message::parse(&alias.to_json().unwrap()).unwrap();
    assert_eq!(parsed.alias_names(), Some(&names));
    assert_eq!(parsed, alias);
}

#[test]
fn test_coding_response_keeps_parameters() {
    let mut response = Message::from_record(MessageKind::CauseOfDeathCoding, registered());
    response.set_state_auxiliary_id(Some("aux-7"));
    let parsed = Message::parse(&response.to_json().unwrap()).unwrap();
    assert!(parsed.kind().is_coding_response());
    assert_eq!(parsed.state_auxiliary_id(), Some("aux-7"));
}

#[test]
fn test_wire_carries_derived_nchs_id() {
    let message = Message::submission(registered());
    let value: Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    let parameters = value["entry"][1]["resource"]["parameter"].as_array().unwrap();
    let nchs_id = parameters
        .iter()
        .find(|p| p["name"] == "nchs_id")
        .map(|p| p["valueString"].clone());
    assert_eq!(nchs_id, Some(json!("2018MA001234")));
    let cert_no = parameters.iter().find(|p| p["name"] == "cert_no").unwrap();
    assert_eq!(cert_no["valueUnsignedInt"], 1234);
}

// =========================================================================
// Acknowledgements and replies
// =========================================================================

#[test]
fn test_acknowledge_swaps_endpoints() {
    let submission = Message::submission(registered())
        .with_source("http://state")
        .with_destination("http://nchs");
    let ack = Message::acknowledge(Some(&submission));
    assert_eq!(ack.kind(), MessageKind::Acknowledgement);
    assert_eq!(ack.response_to(), Some(submission.id()));
    assert_eq!(ack.source(), Some("http://nchs"));
    assert_eq!(ack.destination(), Some("http://state"));
    assert_eq!(ack.ids(), submission.ids());
    assert_eq!(ack.block_count(), None);
}

#[test]
fn test_acknowledge_void_copies_block_count() {
    let void = Message::void(&registered(), Some(3));
    let ack = Message::acknowledge(Some(&void));
    assert_eq!(ack.block_count(), Some(3));
    let parsed = Message::parse(&ack.to_json().unwrap()).unwrap();
    assert_eq!(parsed.block_count(), Some(3));
    assert_eq!(parsed.response_to(), Some(void.id()));
}

#[test]
fn test_acknowledge_nothing() {
    let ack = Message::acknowledge(None);
    assert_eq!(ack.kind(), MessageKind::Acknowledgement);
    assert_eq!(ack.response_to(), None);
    assert_eq!(ack.source(), None);
    assert_eq!(ack.destination(), None);
    assert!(ack.ids().is_empty());
    assert_eq!(ack.nchs_id(), None);
    assert!(Message::parse(&ack.to_json().unwrap()).is_ok());
}

#[test]
fn test_reply_as_coding_response() {
    let submission = Message::submission(registered()).with_source("http://state");
    let reply = Message::reply(MessageKind::DemographicsCoding, Some(&submission));
    assert_eq!(reply.response_to(), Some(submission.id()));
    assert_eq!(reply.destination(), Some("http://state"));
    assert_eq!(reply.certificate_number(), Some(1234));
    assert!(reply.record().unwrap().is_empty());
}

#[test]
fn test_extraction_error_roundtrip() {
    let submission = Message::submission(registered());
    let error = Message::extraction_error(
        Some(&submission),
        vec![Issue::error("Unable to code cause of death")],
    );
    let parsed = Message::parse(&error.to_json().unwrap()).unwrap();
    assert_eq!(parsed.kind(), MessageKind::ExtractionError);
    assert_eq!(parsed.issues(), error.issues());
    assert_eq!(parsed.issues()[0].message, "Unable to code cause of death");
}

// =========================================================================
// Parse failures
// =========================================================================

fn bundle(event_uri: &str) -> Value {
    json!({
        "resourceType": "Bundle",
        "type": "message",
        "id": "msg-42",
        "entry": [
            {"resource": {
                "resourceType": "MessageHeader",
                "eventUri": event_uri,
                "source": {"endpoint": "http://state"},
                "destination": [{"endpoint": "http://nchs"}]
            }},
            {"resource": {"resourceType": "Parameters", "parameter": [
                {"name": "cert_no", "valueUnsignedInt": 77},
                {"name": "jurisdiction_id", "valueString": "NY"},
                {"name": "death_year", "valueUnsignedInt": 2019}
            ]}}
        ]
    })
}

#[test]
fn test_deprecated_uris_rejected() {
    for uri in [
        "http://nchs.cdc.gov/vrdr_coding",
        "http://nchs.cdc.gov/vrdr_coding_update",
    ] {
        let err = parse_error(&bundle(uri).to_string());
        assert_eq!(err.kind, ParseErrorKind::DeprecatedEventType, "{uri}");
    }
}

#[test]
fn test_unknown_uri_rejected() {
    let err = parse_error(&bundle("http://nchs.cdc.gov/vrdr_whatever").to_string());
    assert_eq!(err.kind, ParseErrorKind::UnsupportedEventType);
    insta::assert_snapshot!(
        MessageError::from(err).to_string(),
        @"failed to parse message: unsupported event type: http://nchs.cdc.gov/vrdr_whatever"
    );
}

#[test]
fn test_extraction_error_salvages_context() {
    // A submission without its record.
    let err = parse_error(&bundle("http://nchs.cdc.gov/vrdr_submission").to_string());
    assert_eq!(err.kind, ParseErrorKind::MissingRecord);

    let response = err.response();
    assert_eq!(response.kind(), MessageKind::ExtractionError);
    assert_eq!(response.response_to(), Some("msg-42"));
    assert_eq!(response.source(), Some("http://nchs"));
    assert_eq!(response.destination(), Some("http://state"));
    assert_eq!(response.nchs_id().as_deref(), Some("2019NY000077"));
    assert_eq!(response.issues().len(), 1);
    assert!(response.issues()[0].message.starts_with("missing death record"));
}

#[test]
fn test_unreadable_message_gets_generic_response() {
    let err = parse_error("not json");
    assert_eq!(err.kind, ParseErrorKind::InvalidJson);
    let response = err.response();
    assert_eq!(response.response_to(), None);
    assert!(response.ids().is_empty());
    assert_eq!(response.issues().len(), 1);
}

#[test]
fn test_invalid_record_reported() {
    let mut value = bundle("http://nchs.cdc.gov/vrdr_submission");
    value["entry"]
        .as_array_mut()
        .unwrap()
        .push(json!({"resource": {"resourceType": "DeathCertificateDocument", "extra": 1}}));
    let err = parse_error(&value.to_string());
    assert_eq!(err.kind, ParseErrorKind::InvalidRecord);
    assert_eq!(err.context.ids.certificate_number, Some(77));
}

// =========================================================================
// Filter
// =========================================================================

#[test]
fn test_ije_filter_keeps_allowed_fields() {
    let message = Message::submission(registered());
    let filtered = IjeFieldFilter::default()
        .filter(&message, &["DOD_YR", "DSTATE", "FILENO", "GNAME"])
        .unwrap();

    let record = filtered.record().unwrap();
    assert_eq!(record.given_name(), Some("Madelyn"));
    assert_eq!(record.last_name(), None);
    assert_eq!(record.certificate_number(), Some(1234));
    assert_eq!(filtered.ids(), message.ids());
    assert_eq!(filtered.id(), message.id());

    let ije = IjeRecord::from_record(record, &CodecOptions::strict()).unwrap();
    assert_eq!(ije.value("LNAME").unwrap(), "");
}

#[test]
fn test_ije_filter_keeps_envelope_ids_when_identifiers_dropped() {
    let message = Message::submission(registered());
    let filtered = IjeFieldFilter::default().filter(&message, &["GNAME"]).unwrap();
    assert_eq!(filtered.record().unwrap().certificate_number(), None);
    assert_eq!(filtered.nchs_id(), message.nchs_id());
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn prop_nchs_id_composition(
        year in proptest::option::of(1900u32..=2100),
        jurisdiction in proptest::option::of("[A-Z]{2}"),
        cert in proptest::option::of(0u32..=999_999),
    ) {
        let ids = RecordIds {
            certificate_number: cert,
            jurisdiction_id: jurisdiction.clone(),
            death_year: year,
            state_auxiliary_id: None,
        };
        let id = ids.nchs_id();
        if year.is_none() && jurisdiction.is_none() && cert.is_none() {
            prop_assert_eq!(id, None);
        } else {
            let id = id.unwrap();
            prop_assert_eq!(id.len(), 12);
            prop_assert_eq!(&id[..4], format!("{:04}", year.unwrap_or(0)));
            prop_assert_eq!(&id[4..6], jurisdiction.as_deref().unwrap_or("XX"));
            prop_assert_eq!(&id[6..], format!("{:06}", cert.unwrap_or(0)));
        }
    }
}
