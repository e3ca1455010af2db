//! Result shapes returned by the Query Engine.

use crate::content::{ContentItem, Format};
use crate::search::{IndexField, IndexRecord};
use serde::Serialize;

/// One row of a component listing, with per-format presence flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub has_gherkin: bool,
    pub has_condensed: bool,
    pub has_developer_notes: bool,
    pub has_android_notes: bool,
    pub has_ios_notes: bool,
}

impl From<&IndexRecord> for ComponentSummary {
    fn from(record: &IndexRecord) -> Self {
        let item = &record.item;
        Self {
            name: item.name.clone(),
            display_name: item.label.clone(),
            category: record.category.clone(),
            has_gherkin: item.has(Format::Gherkin),
            has_condensed: item.has(Format::Condensed),
            has_developer_notes: item.has(Format::DeveloperNotes),
            has_android_notes: item.has(Format::AndroidDeveloperNotes),
            has_ios_notes: item.has(Format::IosDeveloperNotes),
        }
    }
}

/// A component's full record plus the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    #[serde(flatten)]
    pub item: ContentItem,
    pub category: String,
    pub category_label: String,
}

impl From<&IndexRecord> for ComponentDetail {
    fn from(record: &IndexRecord) -> Self {
        Self {
            item: record.item.clone(),
            category: record.category.clone(),
            category_label: record.category_label.clone(),
        }
    }
}

/// Text excerpt from one matched field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    pub field: IndexField,
    pub snippet: String,
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub category_label: String,
    /// Matched fields, identity fields first.
    pub matches: Vec<FieldMatch>,
    /// In `[0, 1]`; 1.0 is an exact match.
    pub relevance: f64,
}

/// A component that is close to a name that was not found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub score: f64,
}
