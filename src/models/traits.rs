//! Trait definitions for domain models

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A trait that keyed domain models implement.
///
/// `EntityModel` provides identifier access and a string key representation,
/// so collections of entities can be indexed uniformly.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}

/// Build a key-indexed lookup from a slice of entities
#[must_use]
pub fn create_lookup<E: EntityModel>(entities: &[E]) -> FxHashMap<String, E> {
    let mut lookup = FxHashMap::default();
    for entity in entities {
        lookup.insert(entity.key(), entity.clone());
    }
    lookup
}
