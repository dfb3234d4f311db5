//! Error types for resource resolution.

use std::cmp::Ordering;

use thiserror::Error;

use crate::format::FormatError;
use crate::types::Culture;

/// An error surfaced by the resolution engine.
///
/// Resolution misses only become errors when the engine is configured with
/// `throw_on_missing`; substitution failures are always surfaced because
/// they indicate a template/caller contract violation, not a missing
/// translation.
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// The full fallback chain was exhausted without finding the key.
    #[error("resource key '{key}' not found for culture '{culture}'")]
    ResourceNotFound { key: String, culture: Culture },

    /// Placeholder substitution failed on the resolved template.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Rank known keys by similarity to a missing key.
///
/// Returns up to three close matches, best first, for "did you mean"
/// diagnostics on resolution misses. Keys below a similarity floor are
/// dropped entirely so unrelated keys are never suggested.
pub fn compute_suggestions(missing: &str, known: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = known
        .iter()
        .map(|key| (strsim::jaro_winkler(missing, key), key))
        .filter(|(score, _)| *score > 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, key)| key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_key_is_suggested_first() {
        let known = vec![
            "Welcome".to_owned(),
            "WelcomeBack".to_owned(),
            "Goodbye".to_owned(),
        ];
        let suggestions = compute_suggestions("Welcom", &known);
        assert_eq!(suggestions.first().map(String::as_str), Some("Welcome"));
    }

    #[test]
    fn unrelated_keys_are_not_suggested() {
        let known = vec!["Xyzzy".to_owned()];
        assert!(compute_suggestions("Welcome", &known).is_empty());
    }
}
