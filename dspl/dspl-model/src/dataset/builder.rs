use arcstr::ArcStr;

use crate::{
    attribute::Attribute, concept::Concept, error::ResolveResult, info::Info, slice::Slice,
    table::Table, topic::Topic,
};

use super::{Dataset, DatasetData};

/// Construction-time population of a [Dataset].
pub struct DatasetBuilder {
    data: DatasetData,
}

impl DatasetBuilder {
    pub(super) fn new(dataset_id: ArcStr) -> Self {
        Self {
            data: DatasetData {
                dataset_id,
                ..Default::default()
            },
        }
    }

    pub fn info(mut self, info: Info) -> Self {
        self.data.info = info;
        self
    }

    pub fn provider(mut self, provider: Info) -> Self {
        self.data.provider = provider;
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.data.attributes.push(attribute);
        self
    }

    /// Add a root topic.
    pub fn topic(mut self, topic: Topic) -> Self {
        self.data.topics.push(topic);
        self
    }

    pub fn concept(mut self, concept: Concept) -> Self {
        self.data.concepts.push(concept);
        self
    }

    pub fn concepts(mut self, concepts: impl IntoIterator<Item = Concept>) -> Self {
        self.data.concepts.extend(concepts);
        self
    }

    pub fn slice(mut self, slice: Slice) -> Self {
        self.data.slices.push(slice);
        self
    }

    pub fn table(mut self, table: Table) -> Self {
        self.data.tables.push(table);
        self
    }

    pub fn data_mut(&mut self) -> &mut DatasetData {
        &mut self.data
    }

    /// Finish the dataset, indexing its namespace.
    pub fn build(self) -> ResolveResult<Dataset> {
        Dataset::try_from(self.data)
    }
}
