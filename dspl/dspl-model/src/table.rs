//! Column metadata of the tables a dataset binds concepts and slices to.
//!
//! Table data itself is never read here.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::{info::Info, value::DataType};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Table {
    pub id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<TableColumn>,
}

impl Table {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self {
            id: id.into(),
            info: Info::default(),
            columns: vec![],
        }
    }

    pub fn with_column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn column(&self, id: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|column| column.id.as_str() == id)
    }

    /// A table without declared columns accepts any column id.
    pub fn accepts_column(&self, id: &str) -> bool {
        self.columns.is_empty() || self.column(id).is_some()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TableColumn {
    pub id: ArcStr,
    pub data_type: DataType,
    /// Parse format, required for date columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ArcStr>,
}

impl TableColumn {
    pub fn new(id: impl Into<ArcStr>, data_type: DataType) -> Self {
        Self {
            id: id.into(),
            data_type,
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<ArcStr>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// A resolved location of values: a column of a table.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct ColumnBinding {
    /// `None` when the owner has no table mapping
    pub table_id: Option<ArcStr>,
    pub column: ArcStr,
}
