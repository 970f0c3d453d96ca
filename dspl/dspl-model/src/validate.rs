//! Document checks: invariants and reference integrity of a loaded dataset.
//!
//! Checks never fail; everything found is reported as an [Issue].

use std::{collections::BTreeMap, fmt::Display};

use arcstr::ArcStr;
use dspl_core::Identifier;
use fnv::FnvHashSet;
use itertools::Itertools;
use tracing::debug;

use crate::{
    attribute::{Attribute, AttributeValue},
    concept::Concept,
    config::ValidationConfig,
    dataset::Dataset,
    error::ResolveError,
    registry::DatasetRegistry,
    resolve::Resolver,
    slice::{Slice, SliceRole},
    table::Table,
    value::DataType,
};

/// The part of the document an issue was found in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IssueScope {
    General,
    Concept,
    Slice,
    Table,
}

#[derive(Clone, PartialEq, Debug, displaydoc::Display)]
pub enum IssueKind {
    /// dataset declares no concepts
    NoConcepts,
    /// dataset declares no slices
    NoSlices,
    /// dataset declares no tables
    NoTables,
    /// unresolved reference: {0}
    UnresolvedReference(ResolveError),
    /// invalid parent chain: {0}
    InvalidParentChain(ResolveError),
    /// unknown topic `{0}`
    UnknownTopic(ArcStr),
    /// unknown table `{0}`
    UnknownTable(ArcStr),
    /// duplicate attribute `{0}`
    DuplicateAttribute(ArcStr),
    /// attribute `{attribute}` is declared {declared} but holds a {actual} value
    AttributeTypeMismatch {
        attribute: ArcStr,
        declared: DataType,
        actual: DataType,
    },
    /// localized attribute `{0}` is declared {1}, expected string
    LocalizedAttributeNotString(ArcStr, DataType),
    /// default value is a {actual} but the concept is declared {declared}
    DefaultValueTypeMismatch { declared: DataType, actual: DataType },
    /// {0}
    AmbiguousMapping(ResolveError),
    /// concept is used as a slice dimension but has no table mapping
    DimensionWithoutTable,
    /// slice has no dimensions
    NoDimensions,
    /// slice has no metrics
    NoMetrics,
    /// duplicate dimension {0}
    DuplicateDimension(Identifier),
    /// slice has the same dimensions as slice `{0}`
    SameDimensionsAs(ArcStr),
    /// slice has no table mapping
    NoTableMapping,
    /// mapping for {0}, which the slice does not list in that role
    StrayMapping(Identifier),
    /// column `{column}` is not declared by table `{table}`
    UnknownColumn { table: ArcStr, column: ArcStr },
    /// slice has no dimension from dataset `{0}`
    NoTimeDimension(String),
    /// date column `{0}` has no format
    DateColumnWithoutFormat(ArcStr),
    /// duplicate column `{0}`
    DuplicateColumn(ArcStr),
}

/// A problem found in a dataset document.
#[derive(Clone, PartialEq, Debug)]
pub struct Issue {
    pub scope: IssueScope,
    /// Id of the concept, slice, table or attribute the issue is about
    pub entity_id: Option<ArcStr>,
    pub kind: IssueKind,
}

impl Issue {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = match self.scope {
            IssueScope::General => "dataset",
            IssueScope::Concept => "concept",
            IssueScope::Slice => "slice",
            IssueScope::Table => "table",
        };
        match &self.entity_id {
            Some(id) => write!(f, "{scope} `{id}`: {}", self.kind),
            None => write!(f, "{scope}: {}", self.kind),
        }
    }
}

/// Run every document check on `dataset`.
///
/// Qualified references are resolved through `registry`.
pub fn validate<R: DatasetRegistry + ?Sized>(
    dataset: &Dataset,
    registry: &R,
    config: &ValidationConfig,
) -> Vec<Issue> {
    let mut validator = Validator {
        resolver: Resolver::new(dataset, registry),
        config,
        issues: vec![],
    };

    validator.check_general();
    validator.check_concepts();
    validator.check_slices();
    validator.check_tables();

    debug!(
        "dataset `{}`: {} issues",
        dataset.dataset_id(),
        validator.issues.len()
    );

    validator.issues
}

struct Validator<'a, R: ?Sized> {
    resolver: Resolver<'a, R>,
    config: &'a ValidationConfig,
    issues: Vec<Issue>,
}

impl<'a, R: DatasetRegistry + ?Sized> Validator<'a, R> {
    fn dataset(&self) -> &'a Dataset {
        self.resolver.current()
    }

    fn report(&mut self, scope: IssueScope, entity_id: Option<&ArcStr>, kind: IssueKind) {
        self.issues.push(Issue {
            scope,
            entity_id: entity_id.cloned(),
            kind,
        });
    }

    fn check_general(&mut self) {
        let dataset = self.dataset();

        if dataset.concepts().is_empty() {
            self.report(IssueScope::General, None, IssueKind::NoConcepts);
        }
        if dataset.slices().is_empty() {
            self.report(IssueScope::General, None, IssueKind::NoSlices);
        }
        if self.config.require_tables && dataset.tables().is_empty() {
            self.report(IssueScope::General, None, IssueKind::NoTables);
        }

        self.check_attributes(IssueScope::General, None, dataset.attributes());
    }

    fn check_attributes(
        &mut self,
        scope: IssueScope,
        entity_id: Option<&ArcStr>,
        attributes: &[Attribute],
    ) {
        for duplicate in attributes.iter().map(|attribute| &attribute.id).duplicates() {
            self.report(
                scope,
                entity_id,
                IssueKind::DuplicateAttribute(duplicate.clone()),
            );
        }

        for attribute in attributes {
            match &attribute.value {
                Some(AttributeValue::Single(value)) if value.data_type() != attribute.data_type => {
                    self.report(
                        scope,
                        entity_id,
                        IssueKind::AttributeTypeMismatch {
                            attribute: attribute.id.clone(),
                            declared: attribute.data_type,
                            actual: value.data_type(),
                        },
                    );
                }
                Some(AttributeValue::Localized(_)) if attribute.data_type != DataType::String => {
                    self.report(
                        scope,
                        entity_id,
                        IssueKind::LocalizedAttributeNotString(
                            attribute.id.clone(),
                            attribute.data_type,
                        ),
                    );
                }
                _ => {}
            }
        }
    }

    fn check_concepts(&mut self) {
        let dataset = self.dataset();

        // local concepts keying some slice
        let dimension_ids: FnvHashSet<&str> = dataset
            .slices()
            .iter()
            .flat_map(|slice| &slice.dimensions)
            .filter(|dimension| dimension.is_local())
            .map(|dimension| dimension.object_id().as_str())
            .collect();

        for concept in dataset.concepts() {
            self.check_concept(concept, dimension_ids.contains(concept.id.as_str()));
        }
    }

    fn check_concept(&mut self, concept: &'a Concept, is_dimension: bool) {
        let dataset = self.dataset();
        let entity_id = Some(&concept.id);
        let scope = IssueScope::Concept;

        if concept.parent.is_some() {
            if let Err(error) = self.resolver.chain(concept) {
                self.report(scope, entity_id, IssueKind::InvalidParentChain(error));
            }
        }

        for property in &concept.properties {
            if let Err(error) = self.resolver.resolve_concept(&property.concept) {
                self.report(scope, entity_id, IssueKind::UnresolvedReference(error));
            }
        }

        for topic_id in &concept.topics {
            if dataset.topic(topic_id).is_none() {
                self.report(scope, entity_id, IssueKind::UnknownTopic(topic_id.clone()));
            }
        }

        self.check_attributes(scope, entity_id, &concept.attributes);

        if let Some(default_value) = &concept.default_value {
            if default_value.data_type() != concept.data_type {
                self.report(
                    scope,
                    entity_id,
                    IssueKind::DefaultValueTypeMismatch {
                        declared: concept.data_type,
                        actual: default_value.data_type(),
                    },
                );
            }
        }

        let Some(mapping) = &concept.table else {
            if is_dimension {
                self.report(scope, entity_id, IssueKind::DimensionWithoutTable);
            }
            return;
        };

        let duplicated_keys = mapping
            .property_mappings
            .iter()
            .map(|mapping| (mapping.property_id.as_str(), mapping.language.as_deref()))
            .duplicates();
        for (property_id, language) in duplicated_keys {
            if let Err(error) = mapping.property_column(property_id, language) {
                self.report(scope, entity_id, IssueKind::AmbiguousMapping(error));
            }
        }

        match dataset.table(&mapping.table_id) {
            None => {
                self.report(
                    scope,
                    entity_id,
                    IssueKind::UnknownTable(mapping.table_id.clone()),
                );
            }
            Some(table) => {
                let columns = std::iter::once(concept.concept_column()).chain(
                    mapping
                        .property_mappings
                        .iter()
                        .map(|mapping| mapping.to_column.as_str()),
                );
                for column in columns.unique() {
                    self.check_column(scope, entity_id, table, column);
                }
            }
        }
    }

    fn check_column(
        &mut self,
        scope: IssueScope,
        entity_id: Option<&ArcStr>,
        table: &Table,
        column: &str,
    ) {
        if !table.accepts_column(column) {
            self.report(
                scope,
                entity_id,
                IssueKind::UnknownColumn {
                    table: table.id.clone(),
                    column: column.into(),
                },
            );
        }
    }

    fn check_slices(&mut self) {
        let dataset = self.dataset();
        let mut dimension_sets: BTreeMap<Vec<&Identifier>, &ArcStr> = BTreeMap::new();

        for slice in dataset.slices() {
            self.check_slice(slice);

            if slice.dimensions.is_empty() {
                continue;
            }
            let key: Vec<&Identifier> = slice.dimensions.iter().sorted().dedup().collect();
            match dimension_sets.get(&key) {
                Some(earlier) => {
                    self.report(
                        IssueScope::Slice,
                        Some(&slice.id),
                        IssueKind::SameDimensionsAs((*earlier).clone()),
                    );
                }
                None => {
                    dimension_sets.insert(key, &slice.id);
                }
            }
        }
    }

    fn check_slice(&mut self, slice: &'a Slice) {
        let dataset = self.dataset();
        let entity_id = Some(&slice.id);
        let scope = IssueScope::Slice;

        if slice.dimensions.is_empty() {
            self.report(scope, entity_id, IssueKind::NoDimensions);
        }
        if slice.metrics.is_empty() {
            self.report(scope, entity_id, IssueKind::NoMetrics);
        }
        for duplicate in slice.dimensions.iter().duplicates() {
            self.report(
                scope,
                entity_id,
                IssueKind::DuplicateDimension(duplicate.clone()),
            );
        }

        for concept in slice.dimensions.iter().chain(&slice.metrics).unique() {
            if let Err(error) = self.resolver.resolve_concept(concept) {
                self.report(scope, entity_id, IssueKind::UnresolvedReference(error));
            }
        }

        if self.config.require_time_dimension
            && !slice.dimensions.is_empty()
            && !slice
                .dimensions
                .iter()
                .any(|dimension| self.is_time_concept(dimension))
        {
            self.report(
                scope,
                entity_id,
                IssueKind::NoTimeDimension(self.config.time_dataset_id.clone()),
            );
        }

        let Some(mapping) = &slice.table else {
            if self.config.require_slice_table {
                self.report(scope, entity_id, IssueKind::NoTableMapping);
            }
            return;
        };

        for (role, listed) in [
            (SliceRole::Dimension, &slice.dimensions),
            (SliceRole::Metric, &slice.metrics),
        ] {
            for concept_mapping in mapping.mappings(role) {
                if !listed.contains(&concept_mapping.concept) {
                    self.report(
                        scope,
                        entity_id,
                        IssueKind::StrayMapping(concept_mapping.concept.clone()),
                    );
                }
            }
        }

        let table = dataset.table(&mapping.table_id);
        if table.is_none() {
            self.report(
                scope,
                entity_id,
                IssueKind::UnknownTable(mapping.table_id.clone()),
            );
        }

        match slice.column_bindings() {
            Ok(bindings) => {
                if let Some(table) = table {
                    for binding in bindings {
                        self.check_column(scope, entity_id, table, &binding.binding.column);
                    }
                }
            }
            Err(error @ ResolveError::AmbiguousMapping { .. }) => {
                self.report(scope, entity_id, IssueKind::AmbiguousMapping(error));
            }
            // duplicate dimensions are reported above
            Err(_) => {}
        }
    }

    /// Whether the concept comes from, or extends a concept of, the time dataset.
    fn is_time_concept(&self, id: &Identifier) -> bool {
        let time_dataset_id = self.config.time_dataset_id.as_str();
        if id.dataset_id().map(ArcStr::as_str) == Some(time_dataset_id) {
            return true;
        }

        let Ok(resolved) = self.resolver.resolve_concept(id) else {
            return false;
        };
        self.resolver
            .relative_to(resolved.dataset)
            .parent_chain(resolved.object)
            .map_while(Result::ok)
            .any(|link| link.dataset.dataset_id().as_str() == time_dataset_id)
    }

    fn check_tables(&mut self) {
        let dataset = self.dataset();
        let scope = IssueScope::Table;

        for table in dataset.tables() {
            let entity_id = Some(&table.id);

            for duplicate in table.columns.iter().map(|column| &column.id).duplicates() {
                self.report(
                    scope,
                    entity_id,
                    IssueKind::DuplicateColumn(duplicate.clone()),
                );
            }

            for column in &table.columns {
                if column.data_type == DataType::Date && column.format.is_none() {
                    self.report(
                        scope,
                        entity_id,
                        IssueKind::DateColumnWithoutFormat(column.id.clone()),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use crate::{
        concept::{ConceptTableMapping, PropertyMapping},
        registry::{InMemoryRegistry, NoRegistry},
        slice::{ConceptMapping, TableMapping},
        table::TableColumn,
        topic::Topic,
        value::Value,
    };

    use super::*;

    fn kinds(issues: &[Issue]) -> Vec<&IssueKind> {
        issues.iter().map(|issue| &issue.kind).collect()
    }

    fn sound() -> Dataset {
        Dataset::builder("census")
            .topic(Topic::new("people"))
            .concept(
                Concept::new("country", DataType::String)
                    .with_topic("people")
                    .with_table(ConceptTableMapping::new("countries")),
            )
            .concept(Concept::new("population", DataType::Integer).with_topic("people"))
            .slice(
                Slice::new("by_country")
                    .with_dimension(Identifier::local("country"))
                    .with_metric(Identifier::local("population"))
                    .with_table(TableMapping::new("by_country_csv")),
            )
            .table(Table::new("countries").with_column(TableColumn::new("country", DataType::String)))
            .table(
                Table::new("by_country_csv")
                    .with_column(TableColumn::new("country", DataType::String))
                    .with_column(TableColumn::new("population", DataType::Integer)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn sound_dataset_has_no_issues() {
        assert_eq!(
            Vec::<Issue>::new(),
            validate(&sound(), &NoRegistry, &ValidationConfig::default())
        );
    }

    #[test]
    fn empty_dataset() {
        let dataset = Dataset::builder("empty").build().unwrap();

        let issues = validate(&dataset, &NoRegistry, &ValidationConfig::default());
        assert_eq!(
            vec![&IssueKind::NoConcepts, &IssueKind::NoSlices, &IssueKind::NoTables],
            kinds(&issues)
        );
        assert!(issues.iter().all(|issue| issue.scope == IssueScope::General));

        let issues = validate(
            &dataset,
            &NoRegistry,
            &ValidationConfig {
                require_tables: false,
                ..Default::default()
            },
        );
        assert_eq!(vec![&IssueKind::NoConcepts, &IssueKind::NoSlices], kinds(&issues));
    }

    #[test]
    fn concept_issues() {
        let dataset = Dataset::builder("census")
            .concept(
                Concept::new("city", DataType::String)
                    .with_parent(Identifier::local("by_city"))
                    .with_topic("places")
                    .with_attribute(Attribute::new("area", DataType::Float).with_value(12_i64))
                    .with_attribute(Attribute::new("area", DataType::Float))
                    .with_attribute(
                        Attribute::new("motto", DataType::Integer).with_localized_value("en", "Go"),
                    )
                    .with_default_value(Value::from(true)),
            )
            .slice(Slice::new("by_city").with_metric(Identifier::local("city")))
            .build()
            .unwrap();

        let issues: Vec<_> = validate(&dataset, &NoRegistry, &ValidationConfig::default())
            .into_iter()
            .filter(|issue| issue.scope == IssueScope::Concept)
            .collect();

        assert_eq!(
            vec![
                &IssueKind::InvalidParentChain(ResolveError::NotAConcept(Identifier::local(
                    "by_city"
                ))),
                &IssueKind::UnknownTopic("places".into()),
                &IssueKind::DuplicateAttribute("area".into()),
                &IssueKind::AttributeTypeMismatch {
                    attribute: "area".into(),
                    declared: DataType::Float,
                    actual: DataType::Integer,
                },
                &IssueKind::LocalizedAttributeNotString("motto".into(), DataType::Integer),
                &IssueKind::DefaultValueTypeMismatch {
                    declared: DataType::String,
                    actual: DataType::Boolean,
                },
            ],
            kinds(&issues)
        );
        assert!(issues
            .iter()
            .all(|issue| issue.entity_id.as_deref() == Some("city")));
    }

    #[test]
    fn cyclic_parents_are_reported_per_concept() {
        let dataset = Dataset::builder("census")
            .concept(Concept::new("a", DataType::String).with_parent(Identifier::local("b")))
            .concept(Concept::new("b", DataType::String).with_parent(Identifier::local("a")))
            .build()
            .unwrap();

        let cycles: Vec<_> = validate(&dataset, &NoRegistry, &ValidationConfig::default())
            .into_iter()
            .filter_map(|issue| match issue.kind {
                IssueKind::InvalidParentChain(ResolveError::CyclicInheritance(_)) => {
                    issue.entity_id
                }
                _ => None,
            })
            .collect();

        assert_eq!(vec![ArcStr::from("a"), ArcStr::from("b")], cycles);
    }

    #[test]
    fn concept_table_mapping_issues() {
        let dataset = Dataset::builder("census")
            .concept(
                Concept::new("country", DataType::String).with_table(
                    ConceptTableMapping::new("countries")
                        .with_concept_column("iso")
                        .with_property_mapping(PropertyMapping::localized("name", "en", "name_en"))
                        .with_property_mapping(PropertyMapping::localized("name", "en", "name_en2")),
                ),
            )
            .concept(
                Concept::new("region", DataType::String)
                    .with_table(ConceptTableMapping::new("regions")),
            )
            .table(Table::new("countries").with_column(TableColumn::new("iso", DataType::String)))
            .build()
            .unwrap();

        let issues = validate(&dataset, &NoRegistry, &ValidationConfig::default());
        let concept_issues: Vec<_> = issues
            .iter()
            .filter(|issue| issue.scope == IssueScope::Concept)
            .map(|issue| (issue.entity_id.as_deref(), &issue.kind))
            .collect();

        assert_eq!(
            vec![
                (
                    Some("country"),
                    &IssueKind::AmbiguousMapping(ResolveError::AmbiguousMapping {
                        key: "property `name` in `en`".into(),
                        count: 2
                    })
                ),
                (
                    Some("country"),
                    &IssueKind::UnknownColumn {
                        table: "countries".into(),
                        column: "name_en".into()
                    }
                ),
                (
                    Some("country"),
                    &IssueKind::UnknownColumn {
                        table: "countries".into(),
                        column: "name_en2".into()
                    }
                ),
                (Some("region"), &IssueKind::UnknownTable("regions".into())),
            ],
            concept_issues
        );
    }

    #[test]
    fn dimension_concept_needs_table() {
        let dataset = Dataset::builder("census")
            .concept(Concept::new("country", DataType::String))
            .concept(Concept::new("population", DataType::Integer))
            .slice(
                Slice::new("by_country")
                    .with_dimension(Identifier::local("country"))
                    .with_metric(Identifier::local("population")),
            )
            .build()
            .unwrap();

        let issues = validate(
            &dataset,
            &NoRegistry,
            &ValidationConfig {
                require_tables: false,
                require_slice_table: false,
                ..Default::default()
            },
        );

        assert_eq!(
            vec![Issue {
                scope: IssueScope::Concept,
                entity_id: Some("country".into()),
                kind: IssueKind::DimensionWithoutTable,
            }],
            issues
        );
    }

    #[test]
    fn slice_issues() {
        let dataset = Dataset::builder("census")
            .concept(
                Concept::new("country", DataType::String)
                    .with_table(ConceptTableMapping::new("countries")),
            )
            .concept(Concept::new("population", DataType::Integer))
            .slice(
                Slice::new("by_country")
                    .with_dimension(Identifier::local("country"))
                    .with_metric(Identifier::local("population")),
            )
            .slice(
                Slice::new("again")
                    .with_dimension(Identifier::local("country"))
                    .with_dimension(Identifier::local("country"))
                    .with_dimension(Identifier::qualified("time", "year"))
                    .with_table(
                        TableMapping::new("missing")
                            .with_metric_mapping(ConceptMapping::new(
                                Identifier::local("population"),
                                "pop",
                            )),
                    ),
            )
            .slice(
                Slice::new("same")
                    .with_dimension(Identifier::qualified("time", "year"))
                    .with_dimension(Identifier::local("country"))
                    .with_metric(Identifier::local("population"))
                    .with_table(TableMapping::new("countries")),
            )
            .table(Table::new("countries").with_column(TableColumn::new("country", DataType::String)))
            .build()
            .unwrap();

        let issues: Vec<_> = validate(&dataset, &NoRegistry, &ValidationConfig::default())
            .into_iter()
            .filter(|issue| issue.scope == IssueScope::Slice)
            .map(|issue| (issue.entity_id.unwrap(), issue.kind))
            .collect();

        let unknown_time = ResolveError::UnknownDataset("time".into());
        let expected: Vec<(ArcStr, IssueKind)> = vec![
                ("by_country".into(), IssueKind::NoTableMapping),
                ("again".into(), IssueKind::NoMetrics),
                (
                    "again".into(),
                    IssueKind::DuplicateDimension(Identifier::local("country"))
                ),
                (
                    "again".into(),
                    IssueKind::UnresolvedReference(unknown_time.clone())
                ),
                (
                    "again".into(),
                    IssueKind::StrayMapping(Identifier::local("population"))
                ),
                ("again".into(), IssueKind::UnknownTable("missing".into())),
                ("same".into(), IssueKind::UnresolvedReference(unknown_time)),
                (
                    "same".into(),
                    IssueKind::UnknownColumn {
                        table: "countries".into(),
                        column: "year".into()
                    }
                ),
                (
                    "same".into(),
                    IssueKind::UnknownColumn {
                        table: "countries".into(),
                        column: "population".into()
                    }
                ),
                ("same".into(), IssueKind::SameDimensionsAs("again".into())),
        ];
        assert_eq!(expected, issues);
    }

    #[test]
    fn time_dimension_through_parent() {
        let time = Dataset::builder("time")
            .concept(Concept::new("year", DataType::Date))
            .build()
            .unwrap();
        let dataset = Dataset::builder("census")
            .concept(
                Concept::new("fiscal_year", DataType::Date)
                    .with_parent(Identifier::qualified("time", "year"))
                    .with_table(ConceptTableMapping::new("years")),
            )
            .concept(Concept::new("budget", DataType::Float))
            .slice(
                Slice::new("by_year")
                    .with_dimension(Identifier::local("fiscal_year"))
                    .with_metric(Identifier::local("budget")),
            )
            .slice(Slice::new("flat").with_metric(Identifier::local("budget")))
            .table(Table::new("years"))
            .build()
            .unwrap();
        let config = ValidationConfig {
            require_tables: false,
            require_slice_table: false,
            require_time_dimension: true,
            ..Default::default()
        };

        let registry = InMemoryRegistry::new().with(time);
        let issues = validate(&dataset, &registry, &config);
        assert_eq!(vec![&IssueKind::NoDimensions], kinds(&issues));

        // without the time dataset the parent cannot be followed
        let issues = validate(&dataset, &NoRegistry, &config);
        assert_matches!(
            kinds(&issues).as_slice(),
            [
                IssueKind::InvalidParentChain(ResolveError::UnknownDataset(_)),
                IssueKind::NoTimeDimension(time_dataset_id),
                IssueKind::NoDimensions,
            ] if time_dataset_id == "time"
        );
    }

    #[test]
    fn table_issues() {
        let mut dataset = sound().into_data();
        dataset.tables.push(
            Table::new("dates")
                .with_column(TableColumn::new("day", DataType::Date))
                .with_column(TableColumn::new("month", DataType::Date).with_format("yyyy-MM"))
                .with_column(TableColumn::new("month", DataType::Date).with_format("yyyy-MM")),
        );
        let dataset = Dataset::try_from(dataset).unwrap();

        let issues = validate(&dataset, &NoRegistry, &ValidationConfig::default());
        assert_eq!(
            vec![
                &IssueKind::DuplicateColumn("month".into()),
                &IssueKind::DateColumnWithoutFormat("day".into()),
            ],
            kinds(&issues)
        );
    }

    #[test]
    fn issue_display() {
        let issue = Issue {
            scope: IssueScope::Slice,
            entity_id: Some("by_country".into()),
            kind: IssueKind::UnknownColumn {
                table: "countries".into(),
                column: "year".into(),
            },
        };
        assert_eq!(
            "slice `by_country`: column `year` is not declared by table `countries`",
            issue.to_string()
        );
        assert_eq!(
            "dataset: dataset declares no slices",
            Issue {
                scope: IssueScope::General,
                entity_id: None,
                kind: IssueKind::NoSlices,
            }
            .to_string()
        );
    }
}
