//! Engine configuration.

use bon::Builder;

use crate::types::Culture;

/// Configuration for a [`crate::Localizer`].
///
/// Constructed once at startup and immutable for the lifetime of the
/// engine. All fields have defaults, so `LocalizerOptions::default()` gives
/// a usable en-US configuration.
///
/// # Example
///
/// ```
/// use locres::{Culture, LocalizerOptions};
///
/// let options = LocalizerOptions::builder()
///     .default_culture("en-US")
///     .fallback_culture("en")
///     .supported_cultures(vec![Culture::new("en-US"), Culture::new("tr-TR")])
///     .throw_on_missing(false)
///     .caching_enabled(true)
///     .build();
///
/// assert_eq!(options.default_culture.as_str(), "en-US");
/// ```
#[derive(Builder, Debug, Clone)]
#[builder(on(Culture, into))]
pub struct LocalizerOptions {
    /// Ambient culture used when the caller omits one.
    #[builder(default = Culture::new("en-US"))]
    pub default_culture: Culture,

    /// Second-tier fallback culture appended to every resolution chain.
    #[builder(default = Culture::new("en-US"))]
    pub fallback_culture: Culture,

    /// The cultures surfaced by `supported_cultures()` and used to bound
    /// `all_strings`.
    #[builder(default)]
    pub supported_cultures: Vec<Culture>,

    /// When true, an exhausted fallback chain is an error instead of a
    /// key echo.
    #[builder(default)]
    pub throw_on_missing: bool,

    /// Gates the read-through template cache.
    #[builder(default)]
    pub caching_enabled: bool,
}

impl Default for LocalizerOptions {
    fn default() -> Self {
        LocalizerOptions::builder().build()
    }
}
