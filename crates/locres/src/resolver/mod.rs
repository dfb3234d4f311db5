//! Resource resolution: providers, options, cache, and the engine.
//!
//! This module implements the core contract: resolve a key to a template by
//! walking the requested culture's hierarchy and then the configured
//! fallback culture's, consulting providers in priority order, with an
//! optional read-through cache in front of the walk.

mod cache;
mod engine;
mod error;
mod memory;
mod options;
mod provider;

pub use engine::Localizer;
pub use error::{LocalizeError, compute_suggestions};
pub use memory::InMemoryProvider;
pub use options::LocalizerOptions;
pub use provider::ResourceProvider;
