//! Concepts: typed, inheritable units of meaning.

use arcstr::ArcStr;
use dspl_core::Identifier;
use serde::{Deserialize, Serialize};

use crate::{
    attribute::Attribute,
    info::Info,
    value::{DataType, Value},
};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Concept {
    pub id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    pub data_type: DataType,
    /// The concept this concept extends, possibly in another dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Identifier>,
    /// Ids of topics in the declaring dataset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<ArcStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<ConceptProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<ConceptTableMapping>,
}

impl Concept {
    pub fn new(id: impl Into<ArcStr>, data_type: DataType) -> Self {
        Self {
            id: id.into(),
            info: Info::default(),
            data_type,
            parent: None,
            topics: vec![],
            attributes: vec![],
            properties: vec![],
            default_value: None,
            table: None,
        }
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    pub fn with_parent(mut self, parent: Identifier) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_topic(mut self, topic_id: impl Into<ArcStr>) -> Self {
        self.topics.push(topic_id.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_property(mut self, property: ConceptProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_table(mut self, table: ConceptTableMapping) -> Self {
        self.table = Some(table);
        self
    }

    /// Own attribute, not considering the parent chain.
    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.id.as_str() == id)
    }

    /// Own property, not considering the parent chain.
    pub fn property(&self, id: &str) -> Option<&ConceptProperty> {
        self.properties
            .iter()
            .find(|property| property.id.as_str() == id)
    }
}

/// A named relationship from the owning concept to a target concept.
///
/// `is_parent` and `is_mapping` are independent declarations.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConceptProperty {
    pub id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    pub data_type: DataType,
    pub concept: Identifier,
    /// The property also encodes a hierarchical parent link
    #[serde(default)]
    pub is_parent: bool,
    /// The relationship is one-to-one
    #[serde(default)]
    pub is_mapping: bool,
}

impl ConceptProperty {
    /// A property referring to `concept`, with the property id taken from the
    /// concept's local id.
    pub fn to_concept(concept: Identifier) -> Self {
        Self {
            id: concept.object_id().clone(),
            info: Info::default(),
            data_type: DataType::Concept,
            concept,
            is_parent: false,
            is_mapping: false,
        }
    }

    pub fn new(id: impl Into<ArcStr>, data_type: DataType, concept: Identifier) -> Self {
        Self {
            id: id.into(),
            info: Info::default(),
            data_type,
            concept,
            is_parent: false,
            is_mapping: false,
        }
    }

    pub fn parent(mut self) -> Self {
        self.is_parent = true;
        self
    }

    pub fn mapping(mut self) -> Self {
        self.is_mapping = true;
        self
    }
}

/// Binding of a concept's values and properties to the columns of a table.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConceptTableMapping {
    pub table_id: ArcStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_mapping_column: Option<ArcStr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_mappings: Vec<PropertyMapping>,
}

impl ConceptTableMapping {
    pub fn new(table_id: impl Into<ArcStr>) -> Self {
        Self {
            table_id: table_id.into(),
            concept_mapping_column: None,
            property_mappings: vec![],
        }
    }

    pub fn with_concept_column(mut self, column: impl Into<ArcStr>) -> Self {
        self.concept_mapping_column = Some(column.into());
        self
    }

    pub fn with_property_mapping(mut self, mapping: PropertyMapping) -> Self {
        self.property_mappings.push(mapping);
        self
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PropertyMapping {
    pub property_id: ArcStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<ArcStr>,
    pub to_column: ArcStr,
}

impl PropertyMapping {
    pub fn new(property_id: impl Into<ArcStr>, to_column: impl Into<ArcStr>) -> Self {
        Self {
            property_id: property_id.into(),
            language: None,
            to_column: to_column.into(),
        }
    }

    pub fn localized(
        property_id: impl Into<ArcStr>,
        language: impl Into<ArcStr>,
        to_column: impl Into<ArcStr>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            language: Some(language.into()),
            to_column: to_column.into(),
        }
    }
}
