use arcstr::ArcStr;
use dspl_core::Identifier;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ResolveError {
    #[error("object not found: {0}")]
    NotFound(Identifier),
    #[error("unknown dataset: {0}")]
    UnknownDataset(ArcStr),
    #[error("cyclic parent chain at {0}")]
    CyclicInheritance(Identifier),
    #[error("ambiguous mapping: {count} entries for {key}")]
    AmbiguousMapping { key: String, count: usize },
    #[error("duplicate dimension: {0}")]
    DuplicateDimension(Identifier),
    #[error("not a concept: {0}")]
    NotAConcept(Identifier),
    #[error("duplicate object id: {0}")]
    DuplicateObjectId(ArcStr),
    #[error("empty object id in dataset `{0}`")]
    EmptyObjectId(ArcStr),
}

pub type ResolveResult<T> = Result<T, ResolveError>;
