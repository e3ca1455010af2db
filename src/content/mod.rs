//! Typed content corpus: platform → category → component → fields.

mod load;

pub use load::{ContentSource, expand_tilde, load, parse};

use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A searchable platform partition of the corpus.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub const ALL: [Self; 2] = [Self::Web, Self::Native];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Self::Web),
            "native" => Ok(Self::Native),
            other => Err(format!(
                "unknown platform '{}' (expected 'web' or 'native')",
                other
            )),
        }
    }
}

/// A named textual field of a component that can be extracted on its own.
///
/// DO NOT add doc comments to individual variants (see [`Platform`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Gherkin,
    Condensed,
    DeveloperNotes,
    AndroidDeveloperNotes,
    IosDeveloperNotes,
}

impl Format {
    pub const ALL: [Self; 5] = [
        Self::Gherkin,
        Self::Condensed,
        Self::DeveloperNotes,
        Self::AndroidDeveloperNotes,
        Self::IosDeveloperNotes,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gherkin => "gherkin",
            Self::Condensed => "condensed",
            Self::DeveloperNotes => "developerNotes",
            Self::AndroidDeveloperNotes => "androidDeveloperNotes",
            Self::IosDeveloperNotes => "iosDeveloperNotes",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    /// Accepts camelCase, kebab-case and snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown format '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// One component's full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub name: String,
    pub label: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub general_notes: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub gherkin: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub condensed: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub developer_notes: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub android_developer_notes: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub ios_developer_notes: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub videos: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,
}

impl ContentItem {
    /// Text of a single format, `None` when the component does not provide it.
    pub fn field(&self, format: Format) -> Option<&str> {
        match format {
            Format::Gherkin => self.gherkin.as_deref(),
            Format::Condensed => self.condensed.as_deref(),
            Format::DeveloperNotes => self.developer_notes.as_deref(),
            Format::AndroidDeveloperNotes => self.android_developer_notes.as_deref(),
            Format::IosDeveloperNotes => self.ios_developer_notes.as_deref(),
        }
    }

    pub fn has(&self, format: Format) -> bool {
        self.field(format).is_some()
    }

    /// Formats present on this component, in [`Format::ALL`] order.
    pub fn formats(&self) -> Vec<Format> {
        Format::ALL
            .into_iter()
            .filter(|format| self.has(*format))
            .collect()
    }
}

/// A named grouping of components within one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<ContentItem>,
}

/// The whole corpus as produced by the conversion pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStructure {
    pub web: Vec<Category>,
    pub native: Vec<Category>,
    /// Testing guides; loaded but never indexed.
    #[serde(rename = "how-to-test", default)]
    pub how_to_test: Vec<Category>,
}

impl ContentStructure {
    pub fn categories(&self, platform: Platform) -> &[Category] {
        match platform {
            Platform::Web => &self.web,
            Platform::Native => &self.native,
        }
    }

    /// Total number of components across all categories of a platform.
    pub fn component_count(&self, platform: Platform) -> usize {
        self.categories(platform)
            .iter()
            .map(|category| category.children.len())
            .sum()
    }
}

/// Treats empty and whitespace-only strings as an absent field.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("gherkin", Format::Gherkin)]
    #[case("developerNotes", Format::DeveloperNotes)]
    #[case("developer-notes", Format::DeveloperNotes)]
    #[case("ios_developer_notes", Format::IosDeveloperNotes)]
    #[case("ANDROIDDEVELOPERNOTES", Format::AndroidDeveloperNotes)]
    fn test_format_from_str(#[case] input: &str, #[case] expected: Format) {
        check!(input.parse::<Format>() == Ok(expected));
    }

    #[test]
    fn test_format_from_str_rejects_unknown() {
        let err = "videos".parse::<Format>().unwrap_err();
        check!(err.contains("unknown format 'videos'"));
        check!(err.contains("iosDeveloperNotes"));
    }

    #[rstest]
    #[case("web", Platform::Web)]
    #[case(" Native ", Platform::Native)]
    fn test_platform_from_str(#[case] input: &str, #[case] expected: Platform) {
        check!(input.parse::<Platform>() == Ok(expected));
    }

    #[test]
    fn test_platform_rejects_how_to_test() {
        check!("how-to-test".parse::<Platform>().is_err());
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let item: ContentItem = serde_json::from_str(
            r#"{"name": "button", "label": "Button", "gherkin": "Given a button", "condensed": "   ", "developerNotes": null}"#,
        )
        .unwrap();

        check!(item.gherkin.as_deref() == Some("Given a button"));
        check!(item.condensed.is_none());
        check!(item.developer_notes.is_none());
        check!(item.formats() == vec![Format::Gherkin]);
    }

    #[test]
    fn test_format_serializes_camel_case() {
        let json = serde_json::to_string(&Format::AndroidDeveloperNotes).unwrap();
        check!(json == "\"androidDeveloperNotes\"");
    }
}
