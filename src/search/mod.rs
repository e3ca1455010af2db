//! Fuzzy search infrastructure for the content corpus.
//!
//! This module provides per-platform weighted indices, approximate string scoring,
//! and snippet extraction for matched fields.

// Module declarations
pub(crate) mod index;
pub(crate) mod scoring;
pub(crate) mod snippet;

// Public re-exports (used via lib.rs)
pub use index::{FIELD_WEIGHTS, IndexField, IndexRecord, NearMiss, SearchHit, SearchIndex};
pub use scoring::{SEARCH_THRESHOLD, SUGGEST_THRESHOLD};
pub use snippet::extract_snippet;
