//! Loading and validating the serialized content document.

use super::{ContentStructure, Platform};
use crate::error::LoadError;
use ahash::AHashMap;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the content document comes from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// A JSON file on disk. A leading `~` is expanded to the home directory.
    File(PathBuf),
    /// An in-memory JSON document.
    Inline(Arc<str>),
}

impl ContentSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn inline(json: impl Into<Arc<str>>) -> Self {
        Self::Inline(json.into())
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

/// Reads and parses the content document.
pub async fn load(source: &ContentSource) -> Result<ContentStructure, LoadError> {
    match source {
        ContentSource::File(path) => {
            let path = PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref());
            tracing::debug!("Reading content document from {}", path.display());

            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| LoadError::Read {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            parse(&text)
        }
        ContentSource::Inline(json) => parse(json),
    }
}

/// Parses a content document and checks its invariants.
pub fn parse(text: &str) -> Result<ContentStructure, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| LoadError::Malformed {
            message: e.to_string(),
        })?;

    let Some(object) = value.as_object() else {
        return Err(LoadError::Malformed {
            message: "top-level value must be an object".to_string(),
        });
    };

    // Report a missing platform by name rather than as a generic serde error
    for platform in Platform::ALL {
        if !object.contains_key(platform.as_str()) {
            return Err(LoadError::MissingPlatform {
                platform: platform.as_str(),
            });
        }
    }

    let structure: ContentStructure =
        serde_json::from_value(value).map_err(|e| LoadError::Malformed {
            message: e.to_string(),
        })?;

    for platform in Platform::ALL {
        check_unique_names(&structure, platform)?;
    }

    Ok(structure)
}

fn check_unique_names(structure: &ContentStructure, platform: Platform) -> Result<(), LoadError> {
    let mut seen: AHashMap<&str, &str> = AHashMap::new();

    for category in structure.categories(platform) {
        for item in &category.children {
            if let Some(first_category) = seen.insert(&item.name, &category.name) {
                tracing::warn!(
                    "Rejecting duplicate component '{}' on {} ('{}' and '{}')",
                    item.name,
                    platform,
                    first_category,
                    category.name
                );
                return Err(LoadError::DuplicateComponent {
                    platform: platform.as_str(),
                    name: item.name.clone(),
                    first_category: first_category.to_string(),
                    second_category: category.name.clone(),
                });
            }
        }
    }

    Ok(())
}
