// src/application/taxonomy/cache.rs
use std::sync::{Arc, PoisonError, RwLock};

/// Single-slot cache holding a whole collection.
///
/// Readers get a shared snapshot; writers swap the slot wholesale. An empty
/// collection is never served from the slot.
pub struct CollectionCache<T> {
    slot: RwLock<Option<Arc<Vec<T>>>>,
}

impl<T> CollectionCache<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    pub fn snapshot(&self) -> Option<Arc<Vec<T>>> {
        let guard = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().filter(|items| !items.is_empty()).cloned()
    }

    pub fn replace(&self, items: Vec<T>) -> Arc<Vec<T>> {
        let items = Arc::new(items);
        let mut guard = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&items));
        items
    }

    pub fn clear(&self) {
        let mut guard = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
