//! Shared fixtures for the dataset model tests.

#![forbid(unsafe_code)]

use dspl_model::InMemoryRegistry;
use tracing::debug;

pub mod fixtures;

mod init_tracing;

pub use init_tracing::init_test_tracing;

/// A registry holding the `time` and `geo` fixture datasets.
pub fn fixture_registry() -> InMemoryRegistry {
    let registry = InMemoryRegistry::new()
        .with(fixtures::time_dataset())
        .with(fixtures::geo_dataset());
    debug!(
        "fixture registry: {:?}",
        registry.dataset_ids().collect::<Vec<_>>()
    );
    registry
}
