//! Identifier resolution, locally or across datasets.

use dspl_core::Identifier;
use tracing::{debug, trace};

use crate::{
    concept::Concept,
    dataset::{Dataset, ObjectRef},
    error::{ResolveError, ResolveResult},
    registry::DatasetRegistry,
};

/// An object together with the dataset that declares it.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a, T> {
    pub dataset: &'a Dataset,
    pub object: T,
}

impl<'a, T> Resolved<'a, T> {
    /// Identifier of `object_id` qualified with the declaring dataset.
    pub fn qualify(&self, object_id: &Identifier) -> Identifier {
        object_id.in_dataset(self.dataset.dataset_id())
    }
}

/// Resolves identifiers relative to one dataset, consulting a registry for
/// qualified identifiers.
pub struct Resolver<'a, R: ?Sized> {
    current: &'a Dataset,
    registry: &'a R,
}

impl<R: ?Sized> Clone for Resolver<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for Resolver<'_, R> {}

impl<'a, R: DatasetRegistry + ?Sized> Resolver<'a, R> {
    pub fn new(current: &'a Dataset, registry: &'a R) -> Self {
        Self { current, registry }
    }

    pub fn current(&self) -> &'a Dataset {
        self.current
    }

    pub fn registry(&self) -> &'a R {
        self.registry
    }

    /// A resolver for another dataset, sharing the registry.
    pub fn relative_to(&self, dataset: &'a Dataset) -> Self {
        Self {
            current: dataset,
            registry: self.registry,
        }
    }

    /// The dataset an identifier points into.
    ///
    /// Local identifiers never consult the registry.
    pub fn resolve_dataset(&self, id: &Identifier) -> ResolveResult<&'a Dataset> {
        match id.dataset_id() {
            None => Ok(self.current),
            Some(dataset_id) => {
                debug!("registry lookup of `{dataset_id}` for {id:?}");
                self.registry
                    .lookup(dataset_id)
                    .ok_or_else(|| ResolveError::UnknownDataset(dataset_id.clone()))
            }
        }
    }

    pub fn resolve(&self, id: &Identifier) -> ResolveResult<Resolved<'a, ObjectRef<'a>>> {
        let dataset = self.resolve_dataset(id)?;
        let object = dataset
            .find_object(id.object_id())
            .ok_or_else(|| ResolveError::NotFound(id.clone()))?;

        trace!("resolved {id:?} to {:?} in `{}`", object.kind(), dataset.dataset_id());

        Ok(Resolved { dataset, object })
    }

    /// Resolve an identifier that must point to a concept.
    pub fn resolve_concept(&self, id: &Identifier) -> ResolveResult<Resolved<'a, &'a Concept>> {
        let resolved = self.resolve(id)?;
        match resolved.object {
            ObjectRef::Concept(concept) => Ok(Resolved {
                dataset: resolved.dataset,
                object: concept,
            }),
            _ => Err(ResolveError::NotAConcept(id.clone())),
        }
    }
}

/// Resolve `id` relative to `current`.
pub fn resolve<'a, R: DatasetRegistry + ?Sized>(
    id: &Identifier,
    current: &'a Dataset,
    registry: &'a R,
) -> ResolveResult<Resolved<'a, ObjectRef<'a>>> {
    Resolver::new(current, registry).resolve(id)
}
