//! Read-through template cache with single-flight population.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::Culture;

type CacheKey = (String, Culture);
type Slot = Arc<OnceLock<Option<Arc<str>>>>;
type Slots = HashMap<CacheKey, Slot>;

/// Caches *unsubstituted* templates keyed by `(resource key, requested
/// culture)`.
///
/// Each entry is an `Arc<OnceLock>` slot: concurrent first resolutions of
/// the same key clone the same slot and race into `get_or_init`, so at most
/// one of them runs the provider traversal while the rest block briefly and
/// reuse its result. Misses are never retained — the slot is dropped again
/// so a later provider mutation is observed by the next resolution.
pub(crate) struct ResolutionCache {
    slots: RwLock<Slots>,
}

impl ResolutionCache {
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached template for `(key, culture)`, resolving and
    /// storing it via `resolve` on first use.
    pub(crate) fn get_or_resolve(
        &self,
        key: &str,
        culture: &Culture,
        resolve: impl FnOnce() -> Option<String>,
    ) -> Option<Arc<str>> {
        let cache_key = (key.to_owned(), culture.clone());
        let slot = self.slot(&cache_key);
        let value = slot.get_or_init(|| resolve().map(Arc::from)).clone();
        if value.is_none() {
            self.drop_slot(&cache_key, &slot);
        }
        value
    }

    /// Forget a single cached template.
    pub(crate) fn invalidate(&self, key: &str, culture: &Culture) {
        self.write_slots()
            .remove(&(key.to_owned(), culture.clone()));
    }

    /// Forget every cached template.
    pub(crate) fn clear(&self) {
        self.write_slots().clear();
    }

    /// Number of populated or in-flight cache slots.
    pub(crate) fn len(&self) -> usize {
        self.read_slots().len()
    }

    fn slot(&self, cache_key: &CacheKey) -> Slot {
        if let Some(slot) = self.read_slots().get(cache_key) {
            return Arc::clone(slot);
        }
        let mut slots = self.write_slots();
        Arc::clone(slots.entry(cache_key.clone()).or_default())
    }

    /// Remove a slot that resolved to a miss, but only if it is still the
    /// same slot; a racing invalidate-and-repopulate must not be discarded.
    fn drop_slot(&self, cache_key: &CacheKey, slot: &Slot) {
        let mut slots = self.write_slots();
        if slots.get(cache_key).is_some_and(|s| Arc::ptr_eq(s, slot)) {
            slots.remove(cache_key);
        }
    }

    fn read_slots(&self) -> RwLockReadGuard<'_, Slots> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slots(&self) -> RwLockWriteGuard<'_, Slots> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}
