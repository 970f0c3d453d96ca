//! Mapping of concepts and properties to table columns.
//!
//! Every lookup is two-tiered: an explicit mapping entry wins, otherwise the
//! column is named after the concept or property itself.

use dspl_core::Identifier;
use itertools::Itertools;
use tracing::trace;

use crate::{
    concept::{Concept, ConceptTableMapping, PropertyMapping},
    error::{ResolveError, ResolveResult},
    slice::{ConceptMapping, Slice, SliceRole, TableMapping},
    table::ColumnBinding,
};

impl ConceptTableMapping {
    /// Column holding the concept's own values.
    pub fn concept_column<'a>(&'a self, concept_id: &'a str) -> &'a str {
        self.concept_mapping_column
            .as_deref()
            .unwrap_or(concept_id)
    }

    /// Column of a property in the requested language.
    ///
    /// An entry for exactly `(property_id, language)` wins. Failing that, a
    /// language-agnostic entry for the property is used. Failing that, the
    /// column is named after the property.
    pub fn property_column<'a>(
        &'a self,
        property_id: &'a str,
        language: Option<&str>,
    ) -> ResolveResult<&'a str> {
        let exact = self.find_property_mapping(property_id, language)?;
        if let Some(mapping) = exact {
            return Ok(mapping.to_column.as_str());
        }

        if language.is_some() {
            if let Some(mapping) = self.find_property_mapping(property_id, None)? {
                trace!("`{property_id}`: no {language:?} mapping, using language-agnostic one");
                return Ok(mapping.to_column.as_str());
            }
        }

        trace!("`{property_id}`: no mapping, defaulting to property id");
        Ok(property_id)
    }

    fn find_property_mapping(
        &self,
        property_id: &str,
        language: Option<&str>,
    ) -> ResolveResult<Option<&PropertyMapping>> {
        single_match(
            self.property_mappings.iter().filter(|mapping| {
                mapping.property_id.as_str() == property_id
                    && mapping.language.as_deref() == language
            }),
            || match language {
                Some(language) => format!("property `{property_id}` in `{language}`"),
                None => format!("property `{property_id}`"),
            },
        )
    }
}

impl Concept {
    /// Column holding the concept's own values: the mapped column if any,
    /// else the concept's local id.
    pub fn concept_column(&self) -> &str {
        match &self.table {
            Some(table) => table.concept_column(&self.id),
            None => self.id.as_str(),
        }
    }

    /// Column holding `property_id` for this concept, see
    /// [ConceptTableMapping::property_column].
    pub fn property_column<'a>(
        &'a self,
        property_id: &'a str,
        language: Option<&str>,
    ) -> ResolveResult<&'a str> {
        match &self.table {
            Some(table) => table.property_column(property_id, language),
            None => Ok(property_id),
        }
    }

    pub fn concept_binding(&self) -> ColumnBinding {
        ColumnBinding {
            table_id: self.table.as_ref().map(|table| table.table_id.clone()),
            column: self.concept_column().into(),
        }
    }

    pub fn property_binding(
        &self,
        property_id: &str,
        language: Option<&str>,
    ) -> ResolveResult<ColumnBinding> {
        Ok(ColumnBinding {
            table_id: self.table.as_ref().map(|table| table.table_id.clone()),
            column: self.property_column(property_id, language)?.into(),
        })
    }
}

impl TableMapping {
    /// The single mapping entry for `concept` among dimensions or metrics.
    pub fn find_concept_mapping(
        &self,
        role: SliceRole,
        concept: &Identifier,
    ) -> ResolveResult<Option<&ConceptMapping>> {
        single_match(
            self.mappings(role)
                .iter()
                .filter(|mapping| &mapping.concept == concept),
            || format!("{role:?} {concept}").to_lowercase(),
        )
    }
}

/// A dimension or metric of a slice together with its column.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SliceColumn {
    pub role: SliceRole,
    pub concept: Identifier,
    pub binding: ColumnBinding,
}

impl Slice {
    /// Column holding the values of `concept`.
    ///
    /// The dataset qualifier of `concept` never takes part in the column name.
    pub fn column<'a>(
        &'a self,
        role: SliceRole,
        concept: &'a Identifier,
    ) -> ResolveResult<&'a str> {
        if let Some(table) = &self.table {
            if let Some(column) = table
                .find_concept_mapping(role, concept)?
                .and_then(|mapping| mapping.to_column.as_deref())
            {
                return Ok(column);
            }
        }

        trace!("slice `{}`: {concept:?} defaults to its object id", self.id);
        Ok(concept.object_id().as_str())
    }

    pub fn dimension_column<'a>(&'a self, concept: &'a Identifier) -> ResolveResult<&'a str> {
        self.column(SliceRole::Dimension, concept)
    }

    pub fn metric_column<'a>(&'a self, concept: &'a Identifier) -> ResolveResult<&'a str> {
        self.column(SliceRole::Metric, concept)
    }

    /// Fails on the first dimension that appears more than once.
    pub fn check_dimensions(&self) -> ResolveResult<()> {
        match self.dimensions.iter().duplicates().next() {
            Some(duplicate) => Err(ResolveError::DuplicateDimension(duplicate.clone())),
            None => Ok(()),
        }
    }

    /// Columns of all dimensions in key order.
    pub fn dimension_columns(&self) -> ResolveResult<Vec<&str>> {
        self.check_dimensions()?;
        self.dimensions
            .iter()
            .map(|dimension| self.dimension_column(dimension))
            .collect()
    }

    /// Bindings of all dimensions, then all metrics.
    pub fn column_bindings(&self) -> ResolveResult<Vec<SliceColumn>> {
        self.check_dimensions()?;

        let table_id = self.table_id().cloned();
        let dimensions = self
            .dimensions
            .iter()
            .map(|concept| (SliceRole::Dimension, concept));
        let metrics = self
            .metrics
            .iter()
            .map(|concept| (SliceRole::Metric, concept));

        dimensions
            .chain(metrics)
            .map(|(role, concept)| {
                Ok(SliceColumn {
                    role,
                    concept: concept.clone(),
                    binding: ColumnBinding {
                        table_id: table_id.clone(),
                        column: self.column(role, concept)?.into(),
                    },
                })
            })
            .collect()
    }
}

fn single_match<'a, T>(
    mut matches: impl Iterator<Item = &'a T>,
    key: impl FnOnce() -> String,
) -> ResolveResult<Option<&'a T>> {
    let Some(first) = matches.next() else {
        return Ok(None);
    };
    let rest = matches.count();
    if rest > 0 {
        Err(ResolveError::AmbiguousMapping {
            key: key(),
            count: rest + 1,
        })
    } else {
        Ok(Some(first))
    }
}
