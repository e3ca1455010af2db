//! Error handling types and utilities.

use crate::content::{Format, Platform};
use std::path::PathBuf;

/// A specialized Result type for the binary and glue code.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the content document cannot be loaded.
///
/// Fatal: without content no query can be answered, so this is surfaced to the
/// process owner. `Clone` because every caller waiting on the shared build
/// receives its own copy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The content file is missing or unreadable.
    #[error("Failed to read content document at {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
    /// The document is not valid JSON or does not have the expected shape.
    #[error("Malformed content document: {message}")]
    Malformed { message: String },
    /// A required platform key is absent from the document.
    #[error("Content document is missing the required '{platform}' platform")]
    MissingPlatform { platform: &'static str },
    /// The same component name appears twice within one platform.
    #[error(
        "Duplicate component '{name}' on {platform}: defined in both '{first_category}' and '{second_category}'"
    )]
    DuplicateComponent {
        platform: &'static str,
        name: String,
        first_category: String,
        second_category: String,
    },
}

/// Error returned by Query Engine operations.
///
/// `NotFound` and `FormatUnavailable` are expected outcomes and carry enough
/// context for the caller to build a helpful reply.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Content index is not initialized")]
    NotInitialized,
    #[error("Component '{name}' not found on {platform}")]
    NotFound {
        platform: Platform,
        name: String,
        /// Near-miss component names, best first.
        suggestions: Vec<String>,
    },
    #[error("Component '{name}' on {platform} has no {format} content")]
    FormatUnavailable {
        platform: Platform,
        name: String,
        format: Format,
        /// Formats this component does provide.
        available: Vec<Format>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use assert2::{check, let_assert};

    fn load_fatally() -> Result<()> {
        Err(LoadError::MissingPlatform { platform: "web" }).context("Failed to load content")
    }

    #[test]
    fn test_result_keeps_load_error_as_source() {
        let_assert!(Err(error) = load_fatally());
        check!(error.to_string() == "Failed to load content");
        check!(
            error.downcast_ref::<LoadError>()
                == Some(&LoadError::MissingPlatform { platform: "web" })
        );
    }
}
