//! JSON wire form of a message.
//!
//! A message travels as a bundle:
//!
//! ```json
//! {
//!   "resourceType": "Bundle",
//!   "type": "message",
//!   "id": "…",
//!   "timestamp": "…",
//!   "entry": [
//!     { "resource": { "resourceType": "MessageHeader", "eventUri": "…" } },
//!     { "resource": { "resourceType": "Parameters", "parameter": [ … ] } },
//!     { "resource": { "resourceType": "DeathCertificateDocument", … } }
//!   ]
//! }
//! ```
//!
//! The public [`Message`] is translated to and from private wire structs.
//! Parsing keeps whatever header and identifier data it has read so far, so a
//! failure can still be answered with an addressed extraction error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use vrdr_model::MAX_CERTIFICATE_NUMBER;
use vrdr_model::document::{self, DOCUMENT_RESOURCE_TYPE};

use crate::error::{MessageError, MessageParseError, ParseContext, ParseErrorKind, Result};
use crate::ids::RecordIds;
use crate::kind::{MessageKind, constructor};
use crate::message::{AliasNames, Issue, IssueSeverity, Message, Payload};

const BUNDLE: &str = "Bundle";
const BUNDLE_TYPE: &str = "message";
const HEADER: &str = "MessageHeader";
const PARAMETERS: &str = "Parameters";
const OUTCOME: &str = "OperationOutcome";

/// Parameter names.
mod param {
    pub const CERT_NO: &str = "cert_no";
    pub const DEATH_YEAR: &str = "death_year";
    pub const JURISDICTION_ID: &str = "jurisdiction_id";
    pub const STATE_AUXILIARY_ID: &str = "state_auxiliary_id";
    pub const NCHS_ID: &str = "nchs_id";
    pub const BLOCK_COUNT: &str = "block_count";
    pub const ALIAS_FIRST_NAME: &str = "alias_decedent_first_name";
    pub const ALIAS_MIDDLE_NAME: &str = "alias_decedent_middle_name";
    pub const ALIAS_LAST_NAME: &str = "alias_decedent_last_name";
    pub const ALIAS_NAME_SUFFIX: &str = "alias_decedent_name_suffix";
    pub const ALIAS_FATHER_SURNAME: &str = "alias_father_surname";
    pub const ALIAS_SSN: &str = "alias_social_security_number";
}

// =============================================================================
// Wire structs
// =============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleWire {
    resource_type: String,
    #[serde(rename = "type")]
    bundle_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    entry: Vec<EntryWire>,
}

#[derive(Serialize, Deserialize)]
struct EntryWire {
    resource: Value,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeaderWire {
    resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<EndpointWire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    destination: Vec<EndpointWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response: Option<ResponseWire>,
}

#[derive(Serialize, Deserialize)]
struct EndpointWire {
    endpoint: String,
}

#[derive(Serialize, Deserialize)]
struct ResponseWire {
    identifier: String,
    #[serde(default = "ok_code")]
    code: String,
}

fn ok_code() -> String {
    "ok".to_string()
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParametersWire {
    resource_type: String,
    #[serde(default)]
    parameter: Vec<ParameterWire>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParameterWire {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_unsigned_int: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_string: Option<String>,
}

impl ParameterWire {
    fn number(name: &str, value: Option<u32>) -> Option<Self> {
        value.map(|v| Self {
            name: name.to_string(),
            value_unsigned_int: Some(v),
            value_string: None,
        })
    }

    fn text(name: &str, value: Option<&str>) -> Option<Self> {
        value.map(|v| Self {
            name: name.to_string(),
            value_unsigned_int: None,
            value_string: Some(v.to_string()),
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeWire {
    resource_type: String,
    #[serde(default)]
    issue: Vec<IssueWire>,
}

#[derive(Serialize, Deserialize)]
struct IssueWire {
    severity: String,
    code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    diagnostics: String,
}

// =============================================================================
// Serialization
// =============================================================================

fn resource<T: Serialize>(value: &T) -> Result<EntryWire> {
    serde_json::to_value(value)
        .map(|resource| EntryWire { resource })
        .map_err(|e| MessageError::serialize(&e))
}

fn header_wire(message: &Message) -> HeaderWire {
    let header = message.header();
    HeaderWire {
        resource_type: HEADER.to_string(),
        event_uri: Some(message.kind().uri().to_string()),
        source: header.source.clone().map(|endpoint| EndpointWire { endpoint }),
        destination: header
            .destination
            .clone()
            .map(|endpoint| EndpointWire { endpoint })
            .into_iter()
            .collect(),
        response: header.response_to.clone().map(|identifier| ResponseWire {
            identifier,
            code: ok_code(),
        }),
    }
}

fn parameters_wire(message: &Message) -> ParametersWire {
    let ids = message.ids();
    let nchs_id = message.nchs_id();
    let mut parameter: Vec<ParameterWire> = [
        ParameterWire::number(param::CERT_NO, ids.certificate_number),
        ParameterWire::text(param::JURISDICTION_ID, ids.jurisdiction_id.as_deref()),
        ParameterWire::number(param::DEATH_YEAR, ids.death_year),
        ParameterWire::text(param::STATE_AUXILIARY_ID, ids.state_auxiliary_id.as_deref()),
        ParameterWire::text(param::NCHS_ID, nchs_id.as_deref()),
        ParameterWire::number(param::BLOCK_COUNT, message.block_count()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if let Some(names) = message.alias_names() {
        parameter.extend(
            [
                (param::ALIAS_FIRST_NAME, &names.first_name),
                (param::ALIAS_MIDDLE_NAME, &names.middle_name),
                (param::ALIAS_LAST_NAME, &names.last_name),
                (param::ALIAS_NAME_SUFFIX, &names.name_suffix),
                (param::ALIAS_FATHER_SURNAME, &names.father_surname),
                (param::ALIAS_SSN, &names.social_security_number),
            ]
            .into_iter()
            .filter_map(|(name, value)| ParameterWire::text(name, value.as_deref())),
        );
    }
    ParametersWire {
        resource_type: PARAMETERS.to_string(),
        parameter,
    }
}

fn outcome_wire(issues: &[Issue]) -> OutcomeWire {
    OutcomeWire {
        resource_type: OUTCOME.to_string(),
        issue: issues
            .iter()
            .map(|issue| IssueWire {
                severity: issue.severity.as_str().to_string(),
                code: issue.code.clone(),
                diagnostics: issue.message.clone(),
            })
            .collect(),
    }
}

fn bundle_wire(message: &Message) -> Result<BundleWire> {
    let mut entry = vec![
        resource(&header_wire(message))?,
        resource(&parameters_wire(message))?,
    ];
    match message.payload() {
        Payload::Record(record) => entry.push(EntryWire {
            resource: document::to_value(record)?,
        }),
        Payload::ExtractionError { issues } => entry.push(resource(&outcome_wire(issues))?),
        Payload::Void { .. } | Payload::Alias(_) | Payload::Acknowledgement { .. } => {}
    }
    Ok(BundleWire {
        resource_type: BUNDLE.to_string(),
        bundle_type: BUNDLE_TYPE.to_string(),
        id: Some(message.id().to_string()),
        timestamp: Some(message.timestamp()),
        entry,
    })
}

// =============================================================================
// Parsing
// =============================================================================

/// Carries the context salvaged so far into each failure.
struct Reader {
    context: ParseContext,
}

impl Reader {
    fn fail(&self, kind: ParseErrorKind, detail: impl Into<String>) -> MessageParseError {
        MessageParseError::new(kind, detail, self.context.clone())
    }
}

fn resource_type(value: &Value) -> Option<&str> {
    value.get("resourceType").and_then(Value::as_str)
}

fn find_entry<'a>(bundle: &'a BundleWire, kind: &str) -> Option<&'a Value> {
    bundle
        .entry
        .iter()
        .map(|entry| &entry.resource)
        .find(|resource| resource_type(resource) == Some(kind))
}

/// Parameter values by name; later duplicates win.
#[derive(Default)]
struct Params {
    numbers: Vec<(String, u32)>,
    strings: Vec<(String, String)>,
}

impl Params {
    fn number(&self, name: &str) -> Option<u32> {
        self.numbers.iter().rev().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    fn string(&self, name: &str) -> Option<String> {
        self.strings
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    }

    fn ids(&self) -> RecordIds {
        RecordIds {
            certificate_number: self.number(param::CERT_NO),
            jurisdiction_id: self.string(param::JURISDICTION_ID),
            death_year: self.number(param::DEATH_YEAR),
            state_auxiliary_id: self.string(param::STATE_AUXILIARY_ID),
        }
    }

    fn alias_names(&self) -> AliasNames {
        AliasNames {
            first_name: self.string(param::ALIAS_FIRST_NAME),
            middle_name: self.string(param::ALIAS_MIDDLE_NAME),
            last_name: self.string(param::ALIAS_LAST_NAME),
            name_suffix: self.string(param::ALIAS_NAME_SUFFIX),
            father_surname: self.string(param::ALIAS_FATHER_SURNAME),
            social_security_number: self.string(param::ALIAS_SSN),
        }
    }
}

const NUMBER_PARAMS: [&str; 3] = [param::CERT_NO, param::DEATH_YEAR, param::BLOCK_COUNT];

fn read_params(reader: &Reader, value: &Value) -> std::result::Result<Params, MessageParseError> {
    let wire: ParametersWire = serde_json::from_value(value.clone())
        .map_err(|e| reader.fail(ParseErrorKind::InvalidParameter, e.to_string()))?;
    let mut params = Params::default();
    for parameter in wire.parameter {
        if NUMBER_PARAMS.contains(&parameter.name.as_str()) {
            let number = parameter.value_unsigned_int.ok_or_else(|| {
                reader.fail(
                    ParseErrorKind::InvalidParameter,
                    format!("{} must be an unsigned integer", parameter.name),
                )
            })?;
            if parameter.name == param::CERT_NO && number > MAX_CERTIFICATE_NUMBER {
                return Err(reader.fail(
                    ParseErrorKind::InvalidParameter,
                    format!("{} {number} does not fit in six digits", param::CERT_NO),
                ));
            }
            params.numbers.push((parameter.name, number));
        } else if let Some(text) = parameter.value_string {
            params.strings.push((parameter.name, text));
        }
    }
    Ok(params)
}

fn read_issues(reader: &Reader, value: Option<&Value>) -> std::result::Result<Vec<Issue>, MessageParseError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let wire: OutcomeWire = serde_json::from_value(value.clone())
        .map_err(|e| reader.fail(ParseErrorKind::InvalidParameter, e.to_string()))?;
    Ok(wire
        .issue
        .into_iter()
        .map(|issue| Issue {
            severity: IssueSeverity::from_name(&issue.severity).unwrap_or(IssueSeverity::Error),
            code: issue.code,
            message: issue.diagnostics,
        })
        .collect())
}

fn parse_bundle(text: &str) -> std::result::Result<Message, MessageParseError> {
    let mut reader = Reader {
        context: ParseContext::default(),
    };
    let value: Value = serde_json::from_str(text)
        .map_err(|e| reader.fail(ParseErrorKind::InvalidJson, e.to_string()))?;
    if resource_type(&value) != Some(BUNDLE) {
        return Err(reader.fail(
            ParseErrorKind::NotABundle,
            format!("resourceType is {:?}", resource_type(&value).unwrap_or("")),
        ));
    }
    let bundle: BundleWire = serde_json::from_value(value)
        .map_err(|e| reader.fail(ParseErrorKind::NotABundle, e.to_string()))?;
    reader.context.message_id.clone_from(&bundle.id);
    if bundle.bundle_type != BUNDLE_TYPE {
        return Err(reader.fail(
            ParseErrorKind::WrongBundleType,
            format!("expected type {BUNDLE_TYPE}, found {}", bundle.bundle_type),
        ));
    }

    let header_value = find_entry(&bundle, HEADER)
        .ok_or_else(|| reader.fail(ParseErrorKind::MissingHeader, "no MessageHeader entry"))?;
    let header: HeaderWire = serde_json::from_value(header_value.clone())
        .map_err(|e| reader.fail(ParseErrorKind::MissingHeader, e.to_string()))?;
    reader.context.source = header.source.map(|s| s.endpoint);
    reader.context.destination = header.destination.into_iter().next().map(|d| d.endpoint);

    let params = match find_entry(&bundle, PARAMETERS) {
        Some(value) => Some(read_params(&reader, value)?),
        None => None,
    };
    if let Some(params) = &params {
        reader.context.ids = params.ids();
    }

    let uri = header
        .event_uri
        .ok_or_else(|| reader.fail(ParseErrorKind::MissingEventType, "header has no eventUri"))?;
    if MessageKind::is_deprecated_uri(&uri) {
        return Err(reader.fail(ParseErrorKind::DeprecatedEventType, uri));
    }
    let build = constructor(&uri)
        .ok_or_else(|| reader.fail(ParseErrorKind::UnsupportedEventType, uri.clone()))?;

    let mut message = build();
    if let Some(id) = reader.context.message_id.clone() {
        message.header.id = id;
    }
    if let Some(timestamp) = bundle.timestamp {
        message.header.timestamp = timestamp;
    }
    message.header.source = reader.context.source.clone();
    message.header.destination = reader.context.destination.clone();
    message.header.response_to = header.response.map(|r| r.identifier);
    message.ids = reader.context.ids.clone();

    let params = params.unwrap_or_default();
    match &mut message.payload {
        Payload::Record(slot) => {
            let value = find_entry(&bundle, DOCUMENT_RESOURCE_TYPE).ok_or_else(|| {
                reader.fail(ParseErrorKind::MissingRecord, format!("{uri} carries no record"))
            })?;
            let record = document::from_value(value.clone())
                .map_err(|e| reader.fail(ParseErrorKind::InvalidRecord, e.to_string()))?;
            if message.ids.is_empty() {
                message.ids = RecordIds::from_record(&record);
            }
            **slot = record;
        }
        Payload::Void { block_count } | Payload::Acknowledgement { block_count } => {
            *block_count = params.number(param::BLOCK_COUNT);
        }
        Payload::Alias(names) => *names = params.alias_names(),
        Payload::ExtractionError { issues } => {
            *issues = read_issues(&reader, find_entry(&bundle, OUTCOME))?;
        }
    }
    debug!(
        kind = %message.kind(),
        id = message.id(),
        entries = bundle.entry.len(),
        "parsed message"
    );
    Ok(message)
}

impl Message {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&bundle_wire(self)?).map_err(|e| MessageError::serialize(&e))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&bundle_wire(self)?).map_err(|e| MessageError::serialize(&e))
    }

    /// Read a bundle, choosing the message kind from its event URI.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(parse_bundle(text)?)
    }

    /// Read a bundle that must declare `kind`.
    pub fn parse_as(kind: MessageKind, text: &str) -> Result<Self> {
        let message = parse_bundle(text)?;
        if message.kind() != kind {
            let context = ParseContext {
                message_id: Some(message.id().to_string()),
                source: message.source().map(str::to_string),
                destination: message.destination().map(str::to_string),
                ids: message.ids().clone(),
            };
            return Err(MessageParseError::new(
                ParseErrorKind::UnsupportedEventType,
                format!("expected {kind}, found {}", message.kind()),
                context,
            )
            .into());
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_err(value: &Value) -> MessageParseError {
        match Message::parse(&value.to_string()) {
            Err(MessageError::Parse(err)) => *err,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_bundle_shape() {
        let message = Message::new(MessageKind::Void).with_source("http://state");
        let value: Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
        assert_eq!(value["resourceType"], "Bundle");
        assert_eq!(value["type"], "message");
        assert_eq!(value["entry"][0]["resource"]["resourceType"], "MessageHeader");
        assert_eq!(
            value["entry"][0]["resource"]["eventUri"],
            "http://nchs.cdc.gov/vrdr_submission_void"
        );
        assert_eq!(value["entry"][0]["resource"]["source"]["endpoint"], "http://state");
        assert_eq!(value["entry"][1]["resource"]["resourceType"], "Parameters");
        assert_eq!(value["entry"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_not_a_bundle() {
        let err = parse_err(&json!({"resourceType": "Patient"}));
        assert_eq!(err.kind, ParseErrorKind::NotABundle);
        let err = parse_err(&json!({"resourceType": "Bundle", "type": "document"}));
        assert_eq!(err.kind, ParseErrorKind::WrongBundleType);
    }

    #[test]
    fn test_invalid_json() {
        let err = match Message::parse("{") {
            Err(MessageError::Parse(err)) => err,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(err.kind, ParseErrorKind::InvalidJson);
        assert_eq!(err.context, ParseContext::default());
    }

    #[test]
    fn test_missing_header_and_event() {
        let err = parse_err(&json!({"resourceType": "Bundle", "type": "message", "id": "m1"}));
        assert_eq!(err.kind, ParseErrorKind::MissingHeader);
        assert_eq!(err.context.message_id.as_deref(), Some("m1"));

        let err = parse_err(&json!({
            "resourceType": "Bundle",
            "type": "message",
            "entry": [{"resource": {"resourceType": "MessageHeader"}}]
        }));
        assert_eq!(err.kind, ParseErrorKind::MissingEventType);
    }

    #[test]
    fn test_number_parameter_must_be_unsigned() {
        let err = parse_err(&json!({
            "resourceType": "Bundle",
            "type": "message",
            "entry": [
                {"resource": {"resourceType": "MessageHeader",
                    "eventUri": "http://nchs.cdc.gov/vrdr_submission_void"}},
                {"resource": {"resourceType": "Parameters",
                    "parameter": [{"name": "cert_no", "valueString": "12"}]}}
            ]
        }));
        assert_eq!(err.kind, ParseErrorKind::InvalidParameter);
    }

    #[test]
    fn test_certificate_parameter_width() {
        let err = parse_err(&json!({
            "resourceType": "Bundle",
            "type": "message",
            "entry": [
                {"resource": {"resourceType": "MessageHeader",
                    "eventUri": "http://nchs.cdc.gov/vrdr_submission_void"}},
                {"resource": {"resourceType": "Parameters",
                    "parameter": [{"name": "cert_no", "valueUnsignedInt": 1234567}]}}
            ]
        }));
        assert_eq!(err.kind, ParseErrorKind::InvalidParameter);
        assert!(err.detail.contains("1234567"));
    }

    #[test]
    fn test_nchs_id_parameter_ignored() {
        let message = Message::parse(
            &json!({
                "resourceType": "Bundle",
                "type": "message",
                "entry": [
                    {"resource": {"resourceType": "MessageHeader",
                        "eventUri": "http://nchs.cdc.gov/vrdr_submission_void"}},
                    {"resource": {"resourceType": "Parameters", "parameter": [
                        {"name": "cert_no", "valueUnsignedInt": 5},
                        {"name": "nchs_id", "valueString": "1999ZZ999999"}
                    ]}}
                ]
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(message.nchs_id().as_deref(), Some("0000XX000005"));
    }

    #[test]
    fn test_parse_as_wrong_kind() {
        let text = Message::new(MessageKind::Void).to_json().unwrap();
        let err = Message::parse_as(MessageKind::Alias, &text).unwrap_err();
        let parse = err.as_parse().unwrap();
        assert_eq!(parse.kind, ParseErrorKind::UnsupportedEventType);
        assert!(Message::parse_as(MessageKind::Void, &text).is_ok());
    }
}
