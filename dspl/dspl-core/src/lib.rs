#![forbid(unsafe_code)]

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

pub mod locale;

extern crate self as dspl_core;

/// Reference to a concept, slice or topic.
///
/// An identifier without a dataset qualifier points into the document that
/// contains it. A qualified identifier points into another dataset that must
/// be loaded through a registry.
///
/// An empty dataset qualifier is treated the same as an absent one, both for
/// equality and hashing. A local identifier is never equal to a qualified one,
/// even if the qualifier names the containing dataset.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "IdentifierData")]
pub struct Identifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dataset_id: Option<ArcStr>,
    object_id: ArcStr,
}

/// Serialized form, normalized through [Identifier::qualified].
#[derive(Deserialize)]
struct IdentifierData {
    #[serde(default)]
    dataset_id: Option<ArcStr>,
    object_id: ArcStr,
}

impl Identifier {
    /// Identifier of an object in the current dataset.
    pub fn local(object_id: impl Into<ArcStr>) -> Self {
        Self {
            dataset_id: None,
            object_id: object_id.into(),
        }
    }

    /// Identifier of an object in the dataset `dataset_id`.
    pub fn qualified(dataset_id: impl Into<ArcStr>, object_id: impl Into<ArcStr>) -> Self {
        let dataset_id: ArcStr = dataset_id.into();
        Self {
            dataset_id: if dataset_id.is_empty() {
                None
            } else {
                Some(dataset_id)
            },
            object_id: object_id.into(),
        }
    }

    pub fn dataset_id(&self) -> Option<&ArcStr> {
        self.dataset_id.as_ref().filter(|id| !id.is_empty())
    }

    pub fn object_id(&self) -> &ArcStr {
        &self.object_id
    }

    pub fn is_local(&self) -> bool {
        self.dataset_id().is_none()
    }

    /// Qualify a local identifier with `dataset_id`.
    /// Already qualified identifiers are returned unchanged.
    pub fn in_dataset(&self, dataset_id: &ArcStr) -> Self {
        match self.dataset_id() {
            Some(_) => self.clone(),
            None => Self::qualified(dataset_id.clone(), self.object_id.clone()),
        }
    }

    fn key(&self) -> (Option<&str>, &str) {
        (self.dataset_id().map(ArcStr::as_str), self.object_id.as_str())
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dataset_id() {
            Some(dataset_id) => write!(f, "{dataset_id}:{}", self.object_id),
            None => write!(f, "{}", self.object_id),
        }
    }
}

/// This forces single-line output even when pretty-printed
impl Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id@{self}")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseIdentifierError {
    #[error("empty object id")]
    EmptyObjectId,
    #[error("empty dataset id")]
    EmptyDatasetId,
}

impl TryFrom<IdentifierData> for Identifier {
    type Error = ParseIdentifierError;

    fn try_from(data: IdentifierData) -> Result<Self, Self::Error> {
        if data.object_id.is_empty() {
            return Err(ParseIdentifierError::EmptyObjectId);
        }
        Ok(match data.dataset_id {
            Some(dataset_id) => Self::qualified(dataset_id, data.object_id),
            None => Self::local(data.object_id),
        })
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((dataset_id, object_id)) => {
                if dataset_id.is_empty() {
                    return Err(ParseIdentifierError::EmptyDatasetId);
                }
                if object_id.is_empty() {
                    return Err(ParseIdentifierError::EmptyObjectId);
                }
                Ok(Self::qualified(dataset_id, object_id))
            }
            None if s.is_empty() => Err(ParseIdentifierError::EmptyObjectId),
            None => Ok(Self::local(s)),
        }
    }
}
