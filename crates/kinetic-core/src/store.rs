use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::entity::Entity;

type Items<E> = RwLock<Vec<Arc<E>>>;

/// The canonical in-memory collection behind one list view.
///
/// Cloning yields another handle to the same collection. Elements are
/// shared as `Arc<E>`, so an element that is not touched by an update keeps
/// its identity.
pub struct EntityStore<E> {
    items: Arc<Items<E>>,
}

impl<E> Clone for EntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<E> Default for EntityStore<E> {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current collection, in order.
    pub fn list(&self) -> Vec<Arc<E>> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<Arc<E>> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
    }

    /// Replace the whole collection, e.g. after a fetch.
    pub fn replace(&self, all: Vec<E>) {
        let fresh = all.into_iter().map(Arc::new).collect();
        *self.items.write().unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    pub fn append(&self, entity: E) -> Arc<E> {
        let entity = Arc::new(entity);
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&entity));
        entity
    }

    /// Replace the element whose identifier is `id`. Returns false if no
    /// element matched.
    pub fn patch_one(&self, id: &str, updated: E) -> bool {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        match items.iter_mut().find(|item| item.id() == Some(id)) {
            Some(slot) => {
                *slot = Arc::new(updated);
                true
            }
            None => false,
        }
    }

    /// Drop the element whose identifier is `id`. Returns false if no
    /// element matched.
    pub fn remove_one(&self, id: &str) -> bool {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let before = items.len();
        let kept: Vec<Arc<E>> = items
            .iter()
            .filter(|item| item.id() != Some(id))
            .cloned()
            .collect();
        *items = kept;
        items.len() != before
    }

    pub fn downgrade(&self) -> WeakStore<E> {
        WeakStore {
            items: Arc::downgrade(&self.items),
        }
    }
}

/// A handle that does not keep the collection alive. Results of a
/// submission that outlives its list view are dropped instead of applied.
pub struct WeakStore<E> {
    items: Weak<Items<E>>,
}

impl<E> Clone for WeakStore<E> {
    fn clone(&self) -> Self {
        Self {
            items: Weak::clone(&self.items),
        }
    }
}

impl<E: Entity> WeakStore<E> {
    pub fn upgrade(&self) -> Option<EntityStore<E>> {
        self.items.upgrade().map(|items| EntityStore { items })
    }
}
