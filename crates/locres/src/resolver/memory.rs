//! Mutable in-memory resource provider.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::resolver::provider::ResourceProvider;
use crate::types::Culture;

type Store = HashMap<Culture, BTreeMap<String, String>>;

/// A [`ResourceProvider`] backed by an owned two-level map
/// (culture → key → template).
///
/// Mutation methods may be called at any time, including while other
/// threads resolve strings through the same provider: the store sits behind
/// a reader-writer lock, so reads never block each other and writes are
/// mutually exclusive.
///
/// # Example
///
/// ```
/// use locres::{Culture, InMemoryProvider, ResourceProvider};
///
/// let provider = InMemoryProvider::new(100);
/// provider.add_or_update("tr-TR", "Hello", "Merhaba");
///
/// let tr = Culture::new("tr-TR");
/// assert_eq!(provider.get_string("Hello", &tr), Some("Merhaba".to_owned()));
/// assert!(provider.get_string("Hello", &Culture::new("en-US")).is_none());
/// ```
pub struct InMemoryProvider {
    priority: i32,
    store: RwLock<Store>,
}

impl InMemoryProvider {
    /// Create an empty provider with the given priority.
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider seeded from nested `(culture, [(key, value)])`
    /// pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use locres::{Culture, InMemoryProvider, ResourceProvider};
    ///
    /// let provider = InMemoryProvider::with_resources(
    ///     [
    ///         ("en-US", vec![("Hello", "Hello"), ("Goodbye", "Goodbye")]),
    ///         ("tr-TR", vec![("Hello", "Merhaba"), ("Goodbye", "Güle güle")]),
    ///     ],
    ///     100,
    /// );
    /// assert!(provider.has_key("Hello", &Culture::new("tr-TR")));
    /// ```
    pub fn with_resources<C, E, K, V, I>(resources: I, priority: i32) -> Self
    where
        I: IntoIterator<Item = (C, E)>,
        C: Into<Culture>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let provider = Self::new(priority);
        {
            let mut store = provider.write_store();
            for (culture, entries) in resources {
                let bucket = store.entry(culture.into()).or_default();
                for (key, value) in entries {
                    bucket.insert(key.into(), value.into());
                }
            }
        }
        provider
    }

    /// Insert or overwrite a single resource entry.
    pub fn add_or_update(
        &self,
        culture: impl Into<Culture>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.write_store()
            .entry(culture.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Remove a resource entry. Returns true iff an entry existed and was
    /// removed; removing a non-existent entry is not an error.
    pub fn remove(&self, culture: &Culture, key: &str) -> bool {
        let mut store = self.write_store();
        match store.get_mut(culture) {
            Some(bucket) => bucket.remove(key).is_some(),
            None => false,
        }
    }

    /// Drop every resource for every culture.
    pub fn clear(&self) {
        self.write_store().clear();
    }

    // A poisoned lock only means another thread panicked mid-write; the map
    // itself is still structurally sound, so recover the guard.
    fn read_store(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResourceProvider for InMemoryProvider {
    fn get_string(&self, key: &str, culture: &Culture) -> Option<String> {
        self.read_store()
            .get(culture)
            .and_then(|bucket| bucket.get(key).cloned())
    }

    fn all_keys(&self, culture: &Culture) -> Vec<String> {
        self.read_store()
            .get(culture)
            .map(|bucket| bucket.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn has_key(&self, key: &str, culture: &Culture) -> bool {
        self.read_store()
            .get(culture)
            .is_some_and(|bucket| bucket.contains_key(key))
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
