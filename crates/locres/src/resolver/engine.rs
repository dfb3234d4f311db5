//! The resolution engine.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::format::substitute;
use crate::resolver::cache::ResolutionCache;
use crate::resolver::error::{LocalizeError, compute_suggestions};
use crate::resolver::options::LocalizerOptions;
use crate::resolver::provider::ResourceProvider;
use crate::types::{Culture, Value};

/// Resolves localized strings across an ordered set of resource providers.
///
/// The engine owns no resources itself: it holds shared references to its
/// providers, applies the culture fallback algorithm, optionally caches the
/// winning templates, and substitutes positional arguments. Construct one
/// engine at startup and pass it by reference to all call sites; every
/// method takes `&self` and the engine is safe for concurrent use.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locres::{args, InMemoryProvider, Localizer, LocalizerOptions};
///
/// let provider = Arc::new(InMemoryProvider::with_resources(
///     [("en-US", vec![("Welcome", "Welcome to {0}")])],
///     100,
/// ));
///
/// let localizer = Localizer::new(vec![provider], LocalizerOptions::default());
/// let text = localizer.get_string("Welcome", &args!["the application"]).unwrap();
/// assert_eq!(text, "Welcome to the application");
/// ```
pub struct Localizer {
    /// Descending priority; stable sort keeps registration order for ties.
    providers: Vec<Arc<dyn ResourceProvider>>,
    options: LocalizerOptions,
    cache: Option<ResolutionCache>,
}

impl Localizer {
    /// Create an engine over the given providers.
    ///
    /// Providers are consulted in descending priority order, with ties
    /// broken by registration order (first registered wins).
    pub fn new(mut providers: Vec<Arc<dyn ResourceProvider>>, options: LocalizerOptions) -> Self {
        providers.sort_by_key(|provider| Reverse(provider.priority()));
        let cache = options.caching_enabled.then(ResolutionCache::new);
        Self {
            providers,
            options,
            cache,
        }
    }

    /// The engine configuration.
    pub fn options(&self) -> &LocalizerOptions {
        &self.options
    }

    /// The configured supported cultures, verbatim.
    pub fn supported_cultures(&self) -> &[Culture] {
        &self.options.supported_cultures
    }

    // =========================================================================
    // String Retrieval
    // =========================================================================

    /// Resolve a key in the default culture and substitute `args`.
    ///
    /// Unless `throw_on_missing` is configured, this always produces a
    /// usable string: the resolved value, or the key itself as a last
    /// resort. Substitution errors are surfaced regardless, since they
    /// indicate a broken template or call site.
    pub fn get_string(&self, key: &str, args: &[Value]) -> Result<String, LocalizeError> {
        self.get_string_in(key, &self.options.default_culture, args)
    }

    /// Resolve a key in an explicit culture and substitute `args`.
    pub fn get_string_in(
        &self,
        key: &str,
        culture: &Culture,
        args: &[Value],
    ) -> Result<String, LocalizeError> {
        match self.resolve_template(key, culture) {
            Some(template) => {
                if args.is_empty() {
                    Ok(template.as_ref().to_owned())
                } else {
                    Ok(substitute(&template, args)?)
                }
            }
            None if self.options.throw_on_missing => {
                self.log_near_misses(key, culture);
                Err(LocalizeError::ResourceNotFound {
                    key: key.to_owned(),
                    culture: culture.clone(),
                })
            }
            None => {
                debug!(key, culture = %culture, "resolution miss, echoing key");
                Ok(key.to_owned())
            }
        }
    }

    /// Resolve a key with the same fallback chain as [`Self::get_string`],
    /// but report absence as `None` instead of echoing or erroring.
    ///
    /// No substitution is performed; the raw template is returned.
    pub fn try_get_string(&self, key: &str, culture: Option<&Culture>) -> Option<String> {
        let culture = culture.unwrap_or(&self.options.default_culture);
        self.resolve_template(key, culture)
            .map(|template| template.as_ref().to_owned())
    }

    /// The key's value in every supported culture that defines it exactly.
    ///
    /// One entry per configured supported culture; cultures without an
    /// exact-culture value are omitted rather than filled from the fallback
    /// chain, so the result reflects actual translation coverage.
    pub fn all_strings(&self, key: &str) -> BTreeMap<Culture, String> {
        let mut out = BTreeMap::new();
        for culture in &self.options.supported_cultures {
            if let Some(value) = self.exact_lookup(key, culture) {
                out.insert(culture.clone(), value);
            }
        }
        out
    }

    /// The known keys for a culture.
    ///
    /// Delegates to the exact-culture view of the highest-priority provider
    /// that has entries for that culture; keys are not merged across
    /// providers or across the fallback chain.
    pub fn all_keys(&self, culture: &Culture) -> Vec<String> {
        for provider in &self.providers {
            let keys = provider.all_keys(culture);
            if !keys.is_empty() {
                return keys;
            }
        }
        Vec::new()
    }

    // =========================================================================
    // Cache Control
    // =========================================================================

    /// Forget the cached template for `(key, culture)`.
    ///
    /// The cache deliberately does not observe provider mutation, so a
    /// caller that updates a provider after warm-up invalidates the
    /// affected entries (or clears the cache) itself.
    pub fn invalidate(&self, key: &str, culture: &Culture) {
        if let Some(cache) = &self.cache {
            cache.invalidate(key, culture);
        }
    }

    /// Forget every cached template.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Number of cached templates. Always zero when caching is disabled.
    pub fn cached_templates(&self) -> usize {
        self.cache.as_ref().map_or(0, ResolutionCache::len)
    }

    // =========================================================================
    // Resolution Internals
    // =========================================================================

    /// Cache-aware template resolution: consult the cache under the
    /// *requested* culture, falling through to the full chain walk on miss.
    fn resolve_template(&self, key: &str, culture: &Culture) -> Option<Arc<str>> {
        match &self.cache {
            Some(cache) => cache.get_or_resolve(key, culture, || self.walk_chain(key, culture)),
            None => self.walk_chain(key, culture).map(Arc::from),
        }
    }

    /// The fallback algorithm: requested culture hierarchy, then the
    /// fallback culture hierarchy, skipping already-visited cultures. Per
    /// culture, providers are tried in order and the first non-empty value
    /// wins immediately.
    fn walk_chain(&self, key: &str, culture: &Culture) -> Option<String> {
        let mut visited: Vec<Culture> = Vec::new();
        let chain = culture
            .self_and_ancestors()
            .chain(self.options.fallback_culture.self_and_ancestors());

        for candidate in chain {
            if visited.contains(&candidate) {
                continue;
            }
            visited.push(candidate.clone());

            if let Some(value) = self.exact_lookup(key, &candidate) {
                if candidate != *culture {
                    debug!(key, requested = %culture, resolved = %candidate, "fallback hit");
                }
                return Some(value);
            }
        }

        warn!(key, culture = %culture, "fallback chain exhausted");
        None
    }

    /// Query every provider, in order, for one exact culture. Empty values
    /// are treated as absent.
    fn exact_lookup(&self, key: &str, culture: &Culture) -> Option<String> {
        self.providers
            .iter()
            .filter_map(|provider| provider.get_string(key, culture))
            .find(|value| !value.is_empty())
    }

    fn log_near_misses(&self, key: &str, culture: &Culture) {
        let known = self.all_keys(culture);
        let suggestions = compute_suggestions(key, &known);
        if !suggestions.is_empty() {
            debug!(key, candidates = ?suggestions, "similar keys exist");
        }
    }
}
