//! Slices: primary-key combinations of dimension concepts plus metrics.

use arcstr::ArcStr;
use dspl_core::Identifier;
use serde::{Deserialize, Serialize};

use crate::info::Info;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Slice {
    pub id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    /// The primary key of the slice. Order is significant.
    pub dimensions: Vec<Identifier>,
    pub metrics: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableMapping>,
}

impl Slice {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self {
            id: id.into(),
            info: Info::default(),
            dimensions: vec![],
            metrics: vec![],
            table: None,
        }
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    pub fn with_dimension(mut self, concept: Identifier) -> Self {
        self.dimensions.push(concept);
        self
    }

    pub fn with_metric(mut self, concept: Identifier) -> Self {
        self.metrics.push(concept);
        self
    }

    pub fn with_table(mut self, table: TableMapping) -> Self {
        self.table = Some(table);
        self
    }

    pub fn has_dimension(&self, concept: &Identifier) -> bool {
        self.dimensions.contains(concept)
    }

    pub fn has_metric(&self, concept: &Identifier) -> bool {
        self.metrics.contains(concept)
    }

    pub fn table_id(&self) -> Option<&ArcStr> {
        self.table.as_ref().map(|table| &table.table_id)
    }
}

/// Which list of a slice a concept belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SliceRole {
    Dimension,
    Metric,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TableMapping {
    pub table_id: ArcStr,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimension_mappings: Vec<ConceptMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metric_mappings: Vec<ConceptMapping>,
}

impl TableMapping {
    pub fn new(table_id: impl Into<ArcStr>) -> Self {
        Self {
            table_id: table_id.into(),
            dimension_mappings: vec![],
            metric_mappings: vec![],
        }
    }

    pub fn with_dimension_mapping(mut self, mapping: ConceptMapping) -> Self {
        self.dimension_mappings.push(mapping);
        self
    }

    pub fn with_metric_mapping(mut self, mapping: ConceptMapping) -> Self {
        self.metric_mappings.push(mapping);
        self
    }

    pub fn mappings(&self, role: SliceRole) -> &[ConceptMapping] {
        match role {
            SliceRole::Dimension => &self.dimension_mappings,
            SliceRole::Metric => &self.metric_mappings,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ConceptMapping {
    pub concept: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_column: Option<ArcStr>,
}

impl ConceptMapping {
    pub fn new(concept: Identifier, to_column: impl Into<ArcStr>) -> Self {
        Self {
            concept,
            to_column: Some(to_column.into()),
        }
    }

    /// Mapping that names the concept without overriding its column.
    pub fn unnamed(concept: Identifier) -> Self {
        Self {
            concept,
            to_column: None,
        }
    }
}
