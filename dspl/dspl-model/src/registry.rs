//! Access to datasets referenced by qualified identifiers.

use std::sync::Arc;

use arcstr::ArcStr;
use fnv::FnvHashMap;
use tracing::debug;

use crate::dataset::Dataset;

/// Supplies loaded datasets by their id.
///
/// How datasets are obtained or cached is up to the implementation.
#[cfg_attr(feature = "unimock", unimock::unimock(api = DatasetRegistryMock))]
pub trait DatasetRegistry {
    fn lookup(&self, dataset_id: &str) -> Option<&Dataset>;
}

/// Registry for self-contained documents: knows no datasets.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoRegistry;

impl DatasetRegistry for NoRegistry {
    fn lookup(&self, dataset_id: &str) -> Option<&Dataset> {
        debug!("no registry: cannot supply `{dataset_id}`");
        None
    }
}

/// A registry of already loaded datasets.
#[derive(Clone, Default, Debug)]
pub struct InMemoryRegistry {
    datasets: FnvHashMap<ArcStr, Arc<Dataset>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dataset: Dataset) -> Self {
        self.insert(Arc::new(dataset));
        self
    }

    /// Register a dataset under its own id, returning a replaced dataset if any.
    pub fn insert(&mut self, dataset: Arc<Dataset>) -> Option<Arc<Dataset>> {
        self.datasets.insert(dataset.dataset_id().clone(), dataset)
    }

    pub fn get(&self, dataset_id: &str) -> Option<&Arc<Dataset>> {
        self.datasets.get(dataset_id)
    }

    pub fn dataset_ids(&self) -> impl Iterator<Item = &ArcStr> {
        self.datasets.keys()
    }
}

impl DatasetRegistry for InMemoryRegistry {
    fn lookup(&self, dataset_id: &str) -> Option<&Dataset> {
        self.datasets.get(dataset_id).map(Arc::as_ref)
    }
}

impl<R: DatasetRegistry + ?Sized> DatasetRegistry for &R {
    fn lookup(&self, dataset_id: &str) -> Option<&Dataset> {
        (**self).lookup(dataset_id)
    }
}
