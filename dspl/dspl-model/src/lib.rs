#![forbid(unsafe_code)]

use fnv::FnvBuildHasher;
use indexmap::IndexMap;

pub use dspl_core::{Identifier, ParseIdentifierError, locale::LocalizedText};

pub mod attribute;
pub mod concept;
pub mod config;
pub mod dataset;
pub mod error;
pub mod info;
pub mod inherit;
pub mod mapping;
pub mod registry;
pub mod resolve;
pub mod slice;
pub mod table;
pub mod topic;
pub mod validate;
pub mod value;

pub use dataset::{Dataset, DatasetData};
pub use error::{ResolveError, ResolveResult};
pub use registry::{DatasetRegistry, InMemoryRegistry, NoRegistry};
pub use resolve::{Resolved, Resolver, resolve};
pub use validate::validate;

pub type FnvIndexMap<K, V> = IndexMap<K, V, FnvBuildHasher>;
