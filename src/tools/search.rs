//! Fuzzy search handler for finding components by name, label or content.

use super::render_query_error;
use crate::content::Platform;
use crate::engine::{DEFAULT_SEARCH_LIMIT, QueryEngine};
use crate::types::SearchResult;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Upper bound on requested results.
pub const MAX_SEARCH_RESULTS: usize = 50;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Platform to search: web or native
    pub platform: Platform,
    /// Search query (component name, label, or words from the criteria)
    pub query: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_max_results")]
    pub max_results: Option<usize>,
}

fn default_max_results() -> Option<usize> {
    Some(DEFAULT_SEARCH_LIMIT)
}

/// Execute the search and render ranked results.
pub fn handle_search(engine: &QueryEngine, request: SearchRequest) -> Result<String, String> {
    let limit = request
        .max_results
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_RESULTS);

    let results = engine
        .search(request.platform, &request.query, limit)
        .map_err(|e| render_query_error(&e))?;

    if results.is_empty() {
        let mut msg = format!(
            "No results found for '{}' on {}.\n\n",
            request.query, request.platform
        );

        // Provide helpful suggestions
        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search for component names like 'button', 'checkbox', 'tabs'\n");
        msg.push_str("• Use list_components to browse everything on a platform\n");

        if request.platform == Platform::Web {
            msg.push_str("• Native-only components are found with platform 'native'\n");
        }

        return Ok(msg);
    }

    Ok(format_search_results(
        &results,
        &request.query,
        request.platform,
    ))
}

/// Format search results into a readable string output.
fn format_search_results(results: &[SearchResult], query: &str, platform: Platform) -> String {
    let mut output = format!("Search results for '{}' on {}:\n\n", query, platform);

    for (idx, result) in results.iter().enumerate() {
        let relevance = (result.relevance * 100.0).round() as u8;
        let _ = writeln!(
            output,
            "{}. `{}` ({}) in {} - relevance: {}%",
            idx + 1,
            result.name,
            result.display_name,
            result.category_label,
            relevance
        );

        for field_match in &result.matches {
            let snippet = field_match.snippet.replace('\n', " ");
            let _ = writeln!(output, "   [{}] {}", field_match.field, snippet.trim());
        }

        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::IndexField;
    use crate::types::FieldMatch;
    use assert2::check;

    #[test]
    fn test_format_search_results() {
        let results = vec![SearchResult {
            name: "button".to_string(),
            display_name: "Button".to_string(),
            category: "controls".to_string(),
            category_label: "Controls".to_string(),
            matches: vec![FieldMatch {
                field: IndexField::Gherkin,
                snippet: "Given a button\nis focused".to_string(),
            }],
            relevance: 0.875,
        }];

        let output = format_search_results(&results, "button", Platform::Web);
        check!(output.starts_with("Search results for 'button' on web:"));
        check!(output.contains("1. `button` (Button) in Controls - relevance: 88%"));
        check!(output.contains("[gherkin] Given a button is focused"));
    }

    #[test]
    fn test_default_max_results() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"platform": "web", "query": "button"}"#).unwrap();
        check!(request.max_results == Some(10));
        check!(request.platform == Platform::Web);
    }
}
