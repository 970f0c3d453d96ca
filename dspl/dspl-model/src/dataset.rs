//! The dataset, root aggregate of the model.

use arcstr::ArcStr;
use dspl_core::Identifier;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    attribute::Attribute,
    concept::Concept,
    error::{ResolveError, ResolveResult},
    info::Info,
    slice::Slice,
    table::Table,
    topic::{Topic, TopicTreeIter},
};

use self::builder::DatasetBuilder;

pub mod builder;

/// A loaded dataset.
///
/// Datasets are immutable once constructed. Concepts, slices and topics share
/// one namespace, which is indexed at construction.
#[derive(Debug, Deserialize)]
#[serde(try_from = "DatasetData")]
pub struct Dataset {
    data: DatasetData,
    namespace: FnvHashMap<ArcStr, NamespaceEntry>,
}

/// All of the information that makes a Dataset.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct DatasetData {
    pub dataset_id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub provider: Info,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<Topic>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<Concept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slices: Vec<Slice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
}

#[derive(Clone, Debug)]
enum NamespaceEntry {
    Concept(usize),
    Slice(usize),
    /// Child indexes from a root topic
    Topic(Vec<usize>),
}

/// Reference to a member of a dataset's namespace.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ObjectRef<'a> {
    Concept(&'a Concept),
    Slice(&'a Slice),
    Topic(&'a Topic),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObjectKind {
    Concept,
    Slice,
    Topic,
}

impl<'a> ObjectRef<'a> {
    pub fn id(&self) -> &'a ArcStr {
        match self {
            Self::Concept(concept) => &concept.id,
            Self::Slice(slice) => &slice.id,
            Self::Topic(topic) => &topic.id,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Concept(_) => ObjectKind::Concept,
            Self::Slice(_) => ObjectKind::Slice,
            Self::Topic(_) => ObjectKind::Topic,
        }
    }

    pub fn as_concept(&self) -> Option<&'a Concept> {
        match self {
            Self::Concept(concept) => Some(concept),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&'a Slice> {
        match self {
            Self::Slice(slice) => Some(slice),
            _ => None,
        }
    }

    pub fn as_topic(&self) -> Option<&'a Topic> {
        match self {
            Self::Topic(topic) => Some(topic),
            _ => None,
        }
    }
}

impl Dataset {
    /// Make a builder for building a Dataset from scratch.
    pub fn builder(dataset_id: impl Into<ArcStr>) -> DatasetBuilder {
        DatasetBuilder::new(dataset_id.into())
    }

    pub fn data(&self) -> &DatasetData {
        &self.data
    }

    pub fn into_data(self) -> DatasetData {
        self.data
    }

    pub fn dataset_id(&self) -> &ArcStr {
        &self.data.dataset_id
    }

    pub fn info(&self) -> &Info {
        &self.data.info
    }

    pub fn provider(&self) -> &Info {
        &self.data.provider
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.data.attributes
    }

    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.data
            .attributes
            .iter()
            .find(|attribute| attribute.id.as_str() == id)
    }

    /// The roots of the topic forest.
    pub fn topics(&self) -> &[Topic] {
        &self.data.topics
    }

    /// All topics in the forest, depth first.
    pub fn iter_topics(&self) -> TopicTreeIter<'_> {
        TopicTreeIter::forest(&self.data.topics)
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.data.concepts
    }

    pub fn slices(&self) -> &[Slice] {
        &self.data.slices
    }

    pub fn tables(&self) -> &[Table] {
        &self.data.tables
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.data.tables.iter().find(|table| table.id.as_str() == id)
    }

    pub fn concept(&self, id: &str) -> Option<&Concept> {
        self.find_object(id)?.as_concept()
    }

    pub fn slice(&self, id: &str) -> Option<&Slice> {
        self.find_object(id)?.as_slice()
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.find_object(id)?.as_topic()
    }

    pub fn contains_object(&self, id: &str) -> bool {
        self.namespace.contains_key(id)
    }

    /// Look up an object id in the combined concept/slice/topic namespace.
    pub fn find_object(&self, id: &str) -> Option<ObjectRef<'_>> {
        match self.namespace.get(id)? {
            NamespaceEntry::Concept(index) => {
                self.data.concepts.get(*index).map(ObjectRef::Concept)
            }
            NamespaceEntry::Slice(index) => self.data.slices.get(*index).map(ObjectRef::Slice),
            NamespaceEntry::Topic(path) => {
                let (first, rest) = path.split_first()?;
                let mut topic = self.data.topics.get(*first)?;
                for index in rest {
                    topic = topic.child_topics.get(*index)?;
                }
                Some(ObjectRef::Topic(topic))
            }
        }
    }

    /// The qualified identifier of a member of this dataset.
    pub fn identifier(&self, object_id: impl Into<ArcStr>) -> Identifier {
        Identifier::qualified(self.data.dataset_id.clone(), object_id)
    }
}

impl TryFrom<DatasetData> for Dataset {
    type Error = ResolveError;

    fn try_from(data: DatasetData) -> Result<Self, Self::Error> {
        let namespace = index_namespace(&data)?;

        debug!(
            "dataset `{}`: {} concepts, {} slices, {} topics, {} tables",
            data.dataset_id,
            data.concepts.len(),
            data.slices.len(),
            namespace.len() - data.concepts.len() - data.slices.len(),
            data.tables.len()
        );

        Ok(Self { data, namespace })
    }
}

impl Serialize for Dataset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

fn index_namespace(data: &DatasetData) -> ResolveResult<FnvHashMap<ArcStr, NamespaceEntry>> {
    let mut namespace: FnvHashMap<ArcStr, NamespaceEntry> = Default::default();

    let mut register = |id: &ArcStr, entry: NamespaceEntry| {
        if id.is_empty() {
            Err(ResolveError::EmptyObjectId(data.dataset_id.clone()))
        } else if namespace.insert(id.clone(), entry).is_some() {
            Err(ResolveError::DuplicateObjectId(id.clone()))
        } else {
            Ok(())
        }
    };

    for (index, concept) in data.concepts.iter().enumerate() {
        register(&concept.id, NamespaceEntry::Concept(index))?;
    }
    for (index, slice) in data.slices.iter().enumerate() {
        register(&slice.id, NamespaceEntry::Slice(index))?;
    }

    let mut stack: Vec<(Vec<usize>, &Topic)> = data
        .topics
        .iter()
        .enumerate()
        .map(|(index, topic)| (vec![index], topic))
        .collect();

    while let Some((path, topic)) = stack.pop() {
        for (index, child) in topic.child_topics.iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(index);
            stack.push((child_path, child));
        }
        register(&topic.id, NamespaceEntry::Topic(path))?;
    }

    Ok(namespace)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use crate::value::DataType;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::builder("census")
            .topic(
                Topic::new("people")
                    .with_child(Topic::new("households").with_child(Topic::new("size"))),
            )
            .concept(Concept::new("country", DataType::String))
            .concept(Concept::new("population", DataType::Integer))
            .slice(Slice::new("by_country"))
            .table(Table::new("country_table"))
            .build()
            .unwrap()
    }

    #[test]
    fn combined_namespace() {
        let dataset = dataset();

        assert_matches!(dataset.find_object("country"), Some(ObjectRef::Concept(_)));
        assert_matches!(dataset.find_object("by_country"), Some(ObjectRef::Slice(_)));
        assert_matches!(dataset.find_object("people"), Some(ObjectRef::Topic(_)));
        assert_eq!(
            Some("size"),
            dataset.topic("size").map(|topic| topic.id.as_str())
        );
        assert_eq!(None, dataset.find_object("country_table"));
        assert_eq!(None, dataset.concept("by_country"));
        assert!(dataset.table("country_table").is_some());
    }

    #[test]
    fn duplicate_ids_across_kinds_are_rejected() {
        let result = Dataset::builder("census")
            .concept(Concept::new("country", DataType::String))
            .topic(Topic::new("economy").with_child(Topic::new("country")))
            .build();

        assert_eq!(
            ResolveError::DuplicateObjectId("country".into()),
            result.unwrap_err()
        );
    }

    #[test]
    fn empty_object_ids_are_rejected() {
        let empty_concept = Dataset::builder("census")
            .concept(Concept::new("", DataType::String))
            .build();
        assert_eq!(
            ResolveError::EmptyObjectId("census".into()),
            empty_concept.unwrap_err()
        );

        let empty_topic = Dataset::builder("census")
            .topic(Topic::new("economy").with_child(Topic::new("")))
            .build();
        assert_eq!(
            ResolveError::EmptyObjectId("census".into()),
            empty_topic.unwrap_err()
        );

        let error = serde_json::from_value::<Dataset>(serde_json::json!({
            "dataset_id": "census",
            "slices": [{ "id": "", "dimensions": [], "metrics": [] }]
        }))
        .unwrap_err();
        assert!(error.to_string().contains("empty object id"));

        assert_eq!(None, dataset().find_object(""));
    }

    #[test]
    fn dataset_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dataset>();
    }

    #[test]
    fn serde_round_trip_rebuilds_namespace() {
        let json = serde_json::to_value(dataset()).unwrap();
        assert_eq!("census", json["dataset_id"]);

        let dataset: Dataset = serde_json::from_value(json).unwrap();
        assert!(dataset.concept("population").is_some());
        assert!(dataset.topic("households").is_some());
    }

    #[test]
    fn deserialization_rejects_duplicate_ids() {
        let result = serde_json::from_value::<Dataset>(serde_json::json!({
            "dataset_id": "census",
            "concepts": [
                { "id": "year", "data_type": "date" },
                { "id": "year", "data_type": "integer" }
            ]
        }));

        assert!(result.is_err());
    }
}
