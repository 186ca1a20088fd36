//! The resource graph behind a death record.
//!
//! Resources are grouped into sections. Each [`ResourceKey`] belongs to
//! exactly one section and has one resource type; a resource holds named
//! [`Element`] values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::{EntityAxisEntry, RecordAxisEntry};
use crate::coded::CodedValue;
use crate::error::{ModelError, Result};
use crate::partial::{PartialDateTime, TriState};

/// Element name of the fixed relationship code on related persons.
pub const RELATIONSHIP_ELEMENT: &str = "relationship";

const ROLE_CODE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/v3-RoleCode";

/// Logical sections of the certificate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    DecedentDemographics,
    DeathInvestigation,
    DeathCertification,
    DecedentDisposition,
    /// Content coded by the national coding authority.
    CodedContent,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::DecedentDemographics,
        Self::DeathInvestigation,
        Self::DeathCertification,
        Self::DecedentDisposition,
        Self::CodedContent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DecedentDemographics => "decedentDemographics",
            Self::DeathInvestigation => "deathInvestigation",
            Self::DeathCertification => "deathCertification",
            Self::DecedentDisposition => "decedentDisposition",
            Self::CodedContent => "codedContent",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of resource in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    RelatedPerson,
    Practitioner,
    Observation,
    Location,
    Procedure,
    Organization,
    Composition,
    Parameters,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Patient => "Patient",
            Self::RelatedPerson => "RelatedPerson",
            Self::Practitioner => "Practitioner",
            Self::Observation => "Observation",
            Self::Location => "Location",
            Self::Procedure => "Procedure",
            Self::Organization => "Organization",
            Self::Composition => "Composition",
            Self::Parameters => "Parameters",
        };
        f.write_str(name)
    }
}

/// Identity of a resource within the graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKey {
    // Decedent demographics
    Decedent,
    DecedentAge,
    Education,
    UsualWork,
    MilitaryService,
    InputRaceAndEthnicity,
    BirthRecord,
    Father,
    Mother,
    Spouse,
    // Death investigation
    DeathDate,
    DeathLocation,
    InjuryIncident,
    InjuryLocation,
    Autopsy,
    Pregnancy,
    TobaccoUse,
    ExaminerContacted,
    Surgery,
    // Death certification
    Certificate,
    Certifier,
    MannerOfDeath,
    CauseOfDeathPart1,
    CauseOfDeathPart2,
    // Decedent disposition
    DispositionMethod,
    DispositionLocation,
    FuneralHome,
    // Coded content
    CodingStatus,
    ActivityAtTimeOfDeath,
    UnderlyingCause,
    EntityAxis,
    RecordAxis,
    CodedOccupation,
    CodedRaceAndEthnicity,
}

impl ResourceKey {
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Decedent
            | Self::DecedentAge
            | Self::Education
            | Self::UsualWork
            | Self::MilitaryService
            | Self::InputRaceAndEthnicity
            | Self::BirthRecord
            | Self::Father
            | Self::Mother
            | Self::Spouse => Section::DecedentDemographics,
            Self::DeathDate
            | Self::DeathLocation
            | Self::InjuryIncident
            | Self::InjuryLocation
            | Self::Autopsy
            | Self::Pregnancy
            | Self::TobaccoUse
            | Self::ExaminerContacted
            | Self::Surgery => Section::DeathInvestigation,
            Self::Certificate
            | Self::Certifier
            | Self::MannerOfDeath
            | Self::CauseOfDeathPart1
            | Self::CauseOfDeathPart2 => Section::DeathCertification,
            Self::DispositionMethod | Self::DispositionLocation | Self::FuneralHome => {
                Section::DecedentDisposition
            }
            Self::CodingStatus
            | Self::ActivityAtTimeOfDeath
            | Self::UnderlyingCause
            | Self::EntityAxis
            | Self::RecordAxis
            | Self::CodedOccupation
            | Self::CodedRaceAndEthnicity => Section::CodedContent,
        }
    }

    #[must_use]
    pub const fn resource_type(self) -> ResourceType {
        match self {
            Self::Decedent => ResourceType::Patient,
            Self::Father | Self::Mother | Self::Spouse => ResourceType::RelatedPerson,
            Self::Certifier => ResourceType::Practitioner,
            Self::DeathLocation | Self::InjuryLocation | Self::DispositionLocation => {
                ResourceType::Location
            }
            Self::Surgery | Self::DispositionMethod => ResourceType::Procedure,
            Self::FuneralHome => ResourceType::Organization,
            Self::Certificate => ResourceType::Composition,
            Self::CodingStatus => ResourceType::Parameters,
            _ => ResourceType::Observation,
        }
    }

    /// Relationship code fixed on related-person resources.
    #[must_use]
    pub const fn relationship_code(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Father => Some(("FTH", "father")),
            Self::Mother => Some(("MTH", "mother")),
            Self::Spouse => Some(("SPS", "spouse")),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decedent => "decedent",
            Self::DecedentAge => "decedentAge",
            Self::Education => "education",
            Self::UsualWork => "usualWork",
            Self::MilitaryService => "militaryService",
            Self::InputRaceAndEthnicity => "inputRaceAndEthnicity",
            Self::BirthRecord => "birthRecord",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Spouse => "spouse",
            Self::DeathDate => "deathDate",
            Self::DeathLocation => "deathLocation",
            Self::InjuryIncident => "injuryIncident",
            Self::InjuryLocation => "injuryLocation",
            Self::Autopsy => "autopsy",
            Self::Pregnancy => "pregnancy",
            Self::TobaccoUse => "tobaccoUse",
            Self::ExaminerContacted => "examinerContacted",
            Self::Surgery => "surgery",
            Self::Certificate => "certificate",
            Self::Certifier => "certifier",
            Self::MannerOfDeath => "mannerOfDeath",
            Self::CauseOfDeathPart1 => "causeOfDeathPart1",
            Self::CauseOfDeathPart2 => "causeOfDeathPart2",
            Self::DispositionMethod => "dispositionMethod",
            Self::DispositionLocation => "dispositionLocation",
            Self::FuneralHome => "funeralHome",
            Self::CodingStatus => "codingStatus",
            Self::ActivityAtTimeOfDeath => "activityAtTimeOfDeath",
            Self::UnderlyingCause => "underlyingCause",
            Self::EntityAxis => "entityAxis",
            Self::RecordAxis => "recordAxis",
            Self::CodedOccupation => "codedOccupation",
            Self::CodedRaceAndEthnicity => "codedRaceAndEthnicity",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Element {
    Text(String),
    Integer(u32),
    Coded(CodedValue),
    Date(PartialDateTime),
    Quantity(TriState<u32>),
    EntityAxis(Vec<EntityAxisEntry>),
    RecordAxis(Vec<RecordAxisEntry>),
}

impl Element {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Coded(_) => "coded",
            Self::Date(_) => "date",
            Self::Quantity(_) => "quantity",
            Self::EntityAxis(_) => "entityAxis",
            Self::RecordAxis(_) => "recordAxis",
        }
    }
}

/// A resource: a typed bag of named elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "resourceType")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub elements: BTreeMap<String, Element>,
}

impl Resource {
    /// A new resource with the key's fixed elements attached.
    pub fn new(key: ResourceKey) -> Self {
        let mut elements = BTreeMap::new();
        if let Some((code, display)) = key.relationship_code() {
            elements.insert(
                RELATIONSHIP_ELEMENT.to_string(),
                Element::Coded(CodedValue::new(code, ROLE_CODE_SYSTEM, display)),
            );
        }
        Self {
            resource_type: key.resource_type(),
            elements,
        }
    }

    /// Elements other than fixed ones.
    pub fn data_elements(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.elements
            .iter()
            .filter(|(name, _)| name.as_str() != RELATIONSHIP_ELEMENT)
            .map(|(name, element)| (name.as_str(), element))
    }

    pub fn has_data(&self) -> bool {
        self.data_elements().next().is_some()
    }
}

/// Resources grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceGraph {
    sections: BTreeMap<Section, BTreeMap<ResourceKey, Resource>>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn resource(&self, key: ResourceKey) -> Option<&Resource> {
        self.sections.get(&key.section())?.get(&key)
    }

    pub fn element(&self, key: ResourceKey, name: &str) -> Option<&Element> {
        self.resource(key)?.elements.get(name)
    }

    /// Store an element, attaching the resource to its section once.
    pub fn set_element(&mut self, key: ResourceKey, name: &str, element: Element) {
        self.sections
            .entry(key.section())
            .or_default()
            .entry(key)
            .or_insert_with(|| Resource::new(key))
            .elements
            .insert(name.to_string(), element);
    }

    /// Remove an element; a resource left without data is detached.
    pub fn remove_element(&mut self, key: ResourceKey, name: &str) -> Option<Element> {
        let section = key.section();
        let resources = self.sections.get_mut(&section)?;
        let resource = resources.get_mut(&key)?;
        let removed = resource.elements.remove(name);
        if !resource.has_data() {
            resources.remove(&key);
        }
        if resources.is_empty() {
            self.sections.remove(&section);
        }
        removed
    }

    /// All resources in section order.
    pub fn resources(&self) -> impl Iterator<Item = (Section, ResourceKey, &Resource)> {
        self.sections.iter().flat_map(|(section, resources)| {
            resources
                .iter()
                .map(move |(key, resource)| (*section, *key, resource))
        })
    }

    pub fn resource_count(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Structural checks applied to graphs read from documents.
    pub fn validate(&self) -> Result<()> {
        for (section, key, resource) in self.resources() {
            let name = key.as_str();
            if key.section() != section {
                return Err(ModelError::MisplacedResource {
                    resource: name.to_string(),
                    expected: key.section().to_string(),
                    found: section.to_string(),
                });
            }
            if key.resource_type() != resource.resource_type {
                return Err(ModelError::WrongResourceType {
                    resource: name.to_string(),
                    expected: key.resource_type().to_string(),
                    found: resource.resource_type.to_string(),
                });
            }
            if key.relationship_code().is_some() {
                match resource.elements.get(RELATIONSHIP_ELEMENT) {
                    Some(Element::Coded(value)) if !value.is_empty() => {}
                    _ => {
                        return Err(ModelError::MissingRelationship {
                            resource: name.to_string(),
                        });
                    }
                }
            }
            if !resource.has_data() {
                return Err(ModelError::MissingValue {
                    resource: name.to_string(),
                });
            }
            for (element, value) in resource.data_elements() {
                match value {
                    Element::Coded(coded) if coded.is_empty() => {
                        return Err(ModelError::missing_code(name, element));
                    }
                    Element::Date(date) => {
                        date.validate().map_err(|source| ModelError::MalformedDate {
                            resource: name.to_string(),
                            element: element.to_string(),
                            source,
                        })?;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
