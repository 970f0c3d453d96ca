//! Concept inheritance along parent chains.
//!
//! Nearer concepts shadow farther ones: attributes and properties by id, the
//! default value by being present at all.

use arcstr::ArcStr;
use fnv::FnvHashSet;
use tracing::trace;

use crate::{
    FnvIndexMap,
    attribute::Attribute,
    concept::{Concept, ConceptProperty},
    dataset::Dataset,
    error::{ResolveError, ResolveResult},
    registry::DatasetRegistry,
    resolve::{Resolved, Resolver},
    value::Value,
};

/// Iterator over a concept and its ancestors, nearest first.
///
/// Each parent is resolved relative to the dataset declaring the child.
/// Yields an error and stops when a parent cannot be resolved or when the chain
/// revisits a concept.
pub struct ParentChain<'a, R: ?Sized> {
    resolver: Resolver<'a, R>,
    next: Option<ResolveResult<Resolved<'a, &'a Concept>>>,
    visited: FnvHashSet<(ArcStr, ArcStr)>,
}

impl<'a, R: DatasetRegistry + ?Sized> Iterator for ParentChain<'a, R> {
    type Item = ResolveResult<Resolved<'a, &'a Concept>>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = match self.next.take()? {
            Ok(link) => link,
            Err(error) => return Some(Err(error)),
        };

        let key = (link.dataset.dataset_id().clone(), link.object.id.clone());
        if !self.visited.insert(key) {
            return Some(Err(ResolveError::CyclicInheritance(
                link.dataset.identifier(link.object.id.clone()),
            )));
        }

        if let Some(parent) = &link.object.parent {
            trace!(
                "`{}:{}` extends {parent:?}",
                link.dataset.dataset_id(),
                link.object.id
            );
            self.next = Some(
                self.resolver
                    .relative_to(link.dataset)
                    .resolve_concept(parent),
            );
        }

        Some(Ok(link))
    }
}

/// Everything a concept inherits, resolved over its whole parent chain.
#[derive(Clone, Debug)]
pub struct Inherited<'a> {
    pub attributes: Vec<&'a Attribute>,
    pub properties: Vec<&'a ConceptProperty>,
    pub default_value: Option<&'a Value>,
    /// The first concept in the chain without a parent
    pub root: Resolved<'a, &'a Concept>,
}

impl<'a, R: DatasetRegistry + ?Sized> Resolver<'a, R> {
    /// Walk the parent chain of `concept`, which must belong to the current dataset.
    pub fn parent_chain(&self, concept: &'a Concept) -> ParentChain<'a, R> {
        ParentChain {
            resolver: *self,
            next: Some(Ok(Resolved {
                dataset: self.current(),
                object: concept,
            })),
            visited: Default::default(),
        }
    }

    /// The full parent chain, nearest first.
    pub fn chain(&self, concept: &'a Concept) -> ResolveResult<Vec<Resolved<'a, &'a Concept>>> {
        self.parent_chain(concept).collect()
    }

    pub fn inherited(&self, concept: &'a Concept) -> ResolveResult<Inherited<'a>> {
        let chain = self.chain(concept)?;

        let mut attributes: FnvIndexMap<&str, &'a Attribute> = Default::default();
        let mut properties: FnvIndexMap<&str, &'a ConceptProperty> = Default::default();
        let mut default_value = None;

        for link in &chain {
            let concept: &'a Concept = link.object;
            for attribute in &concept.attributes {
                attributes.entry(attribute.id.as_str()).or_insert(attribute);
            }
            for property in &concept.properties {
                properties.entry(property.id.as_str()).or_insert(property);
            }
            if default_value.is_none() {
                default_value = concept.default_value.as_ref();
            }
        }

        let root = match chain.last() {
            Some(root) => *root,
            None => Resolved {
                dataset: self.current(),
                object: concept,
            },
        };

        Ok(Inherited {
            attributes: attributes.into_values().collect(),
            properties: properties.into_values().collect(),
            default_value,
            root,
        })
    }

    /// Attributes of `concept` including inherited ones.
    pub fn effective_attributes(
        &self,
        concept: &'a Concept,
    ) -> ResolveResult<Vec<&'a Attribute>> {
        Ok(self.inherited(concept)?.attributes)
    }

    /// Properties of `concept` including inherited ones.
    pub fn effective_properties(
        &self,
        concept: &'a Concept,
    ) -> ResolveResult<Vec<&'a ConceptProperty>> {
        Ok(self.inherited(concept)?.properties)
    }

    /// The nearest default value along the parent chain.
    pub fn effective_default_value(
        &self,
        concept: &'a Concept,
    ) -> ResolveResult<Option<&'a Value>> {
        Ok(self.inherited(concept)?.default_value)
    }

    /// Whether `ancestor` is a strict ancestor of `concept`.
    pub fn extends(
        &self,
        concept: &'a Concept,
        ancestor: &Resolved<'a, &'a Concept>,
    ) -> ResolveResult<bool> {
        for link in self.parent_chain(concept).skip(1) {
            let link = link?;
            if link.dataset.dataset_id() == ancestor.dataset.dataset_id()
                && link.object.id == ancestor.object.id
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Attributes of `concept`, declared in `current`, including inherited ones.
pub fn effective_attributes<'a, R: DatasetRegistry + ?Sized>(
    concept: &'a Concept,
    current: &'a Dataset,
    registry: &'a R,
) -> ResolveResult<Vec<&'a Attribute>> {
    Resolver::new(current, registry).effective_attributes(concept)
}
