//! Flattened key/value projection of a record.
//!
//! Keys are `section.resource.element`; values are the element rendered as
//! compact JSON. The projection reads back into an equal record, which makes
//! it convenient for diffs between tools.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::graph::{Element, ResourceGraph, ResourceKey, Section};
use crate::record::DeathRecord;

fn parse_name<T: DeserializeOwned>(key: &str, name: &str) -> Result<T> {
    serde_json::from_value(Value::String(name.to_string()))
        .map_err(|_| ModelError::property(key, format!("unknown name '{name}'")))
}

impl DeathRecord {
    /// Every recorded element as `section.resource.element` → JSON text.
    pub fn to_properties(&self) -> Result<BTreeMap<String, String>> {
        let mut properties = BTreeMap::new();
        for (section, key, resource) in self.graph().resources() {
            for (name, element) in resource.data_elements() {
                let value = serde_json::to_string(element).map_err(|e| ModelError::Serialize {
                    message: e.to_string(),
                })?;
                properties.insert(format!("{section}.{key}.{name}"), value);
            }
        }
        Ok(properties)
    }

    /// Rebuild a record from [`DeathRecord::to_properties`] output.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Result<Self> {
        let mut graph = ResourceGraph::new();
        for (key, value) in properties {
            let mut parts = key.splitn(3, '.');
            let (Some(section), Some(resource), Some(name)) =
                (parts.next(), parts.next(), parts.next())
            else {
                return Err(ModelError::property(
                    key,
                    "expected section.resource.element",
                ));
            };
            let section: Section = parse_name(key, section)?;
            let resource: ResourceKey = parse_name(key, resource)?;
            if resource.section() != section {
                return Err(ModelError::property(
                    key,
                    format!("{resource} belongs in section {}", resource.section()),
                ));
            }
            let element: Element = serde_json::from_str(value)
                .map_err(|e| ModelError::property(key, e.to_string()))?;
            graph.set_element(resource, name, element);
        }
        graph.validate()?;
        Ok(Self::from_graph(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coded::CodedValue;
    use crate::partial::{PartialDateTime, TriState};

    fn sample() -> DeathRecord {
        let mut record = DeathRecord::new();
        record.set_given_name("Example");
        record.set_father_last_name("Middle");
        record.set_sex(Some(CodedValue::new(
            "female",
            "http://hl7.org/fhir/administrative-gender",
            "Female",
        )));
        record.set_death_date(Some(PartialDateTime::new(
            TriState::Known(2021),
            TriState::ExplicitlyUnknown,
            TriState::Unspecified,
        )));
        record.set_age_value(Some(TriState::ExplicitlyUnknown));
        record
    }

    #[test]
    fn test_projection_keys() {
        let properties = sample().to_properties().unwrap();
        assert!(properties.contains_key("decedentDemographics.decedent.givenName"));
        assert!(properties.contains_key("deathInvestigation.deathDate.value"));
        assert!(!properties.keys().any(|k| k.ends_with(".relationship")));
    }

    #[test]
    fn test_projection_roundtrip() {
        let record = sample();
        let properties = record.to_properties().unwrap();
        assert_eq!(DeathRecord::from_properties(&properties).unwrap(), record);
    }

    #[test]
    fn test_projection_rejects_wrong_section() {
        let mut properties = BTreeMap::new();
        properties.insert(
            "deathInvestigation.decedent.givenName".to_string(),
            r#"{"kind":"text","value":"X"}"#.to_string(),
        );
        assert!(matches!(
            DeathRecord::from_properties(&properties),
            Err(ModelError::Property { .. })
        ));
    }
}
