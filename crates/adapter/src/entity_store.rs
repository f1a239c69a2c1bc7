use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use crate::core::ports::{EntityStore, StoreError};

/// In-memory [`EntityStore`] for any clonable per-player entity
#[derive(Debug)]
pub struct InMemoryEntityStore<T> {
    entries: DashMap<String, T>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<T> InMemoryEntityStore<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> EntityStore<T> for InMemoryEntityStore<T> {
    fn load(&self, player: &str) -> Result<Option<T>, StoreError> {
        Ok(self.entries.get(player).map(|entry| entry.value().clone()))
    }

    fn save(&self, player: &str, entity: T) -> Result<(), StoreError> {
        self.entries.insert(player.to_string(), entity);
        Ok(())
    }

    fn remove(&self, player: &str) -> Result<(), StoreError> {
        self.entries.remove(player);
        Ok(())
    }

    fn entity_lock(&self, player: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(player.to_string())
            .or_default()
            .value()
            .clone()
    }
}
