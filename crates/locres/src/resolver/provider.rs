//! The resource provider capability.

use crate::types::Culture;

/// A source of localized strings for one or more cultures.
///
/// The engine holds an ordered collection of providers and never inspects
/// concrete types, so alternative backends (and test doubles) only need to
/// implement this trait.
///
/// `get_string` is an **exact-culture** lookup: a provider queried for
/// `"tr-TR"` when it only holds the key under `"tr"` returns `None`.
/// Walking the culture hierarchy is the resolution engine's job, which
/// supplies `"tr"` as a later entry in its fallback chain.
pub trait ResourceProvider: Send + Sync {
    /// Look up a template for an exact culture. Absence is `None`, never an
    /// error.
    fn get_string(&self, key: &str, culture: &Culture) -> Option<String>;

    /// The keys registered for the exact culture passed, sorted. Not a
    /// union across the hierarchy.
    fn all_keys(&self, culture: &Culture) -> Vec<String>;

    /// Whether a key exists for the exact culture.
    fn has_key(&self, key: &str, culture: &Culture) -> bool {
        self.get_string(key, culture).is_some()
    }

    /// Ordering weight: higher-priority providers are consulted first.
    /// Fixed per instance.
    fn priority(&self) -> i32;
}
