use super::render_query_error;
use crate::content::Platform;
use crate::engine::{DEFAULT_SUGGESTION_LIMIT, QueryEngine};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for get_similar_components tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimilarComponentsRequest {
    /// Platform to look in: web or native
    pub platform: Platform,
    /// Component name that may be misspelled or approximate
    pub name: String,
    /// Maximum number of suggestions (default: 5)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_limit() -> Option<usize> {
    Some(DEFAULT_SUGGESTION_LIMIT)
}

/// Suggest components whose name or label is close to the given name.
pub fn handle_similar_components(
    engine: &QueryEngine,
    request: SimilarComponentsRequest,
) -> Result<String, String> {
    let limit = request.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let suggestions = engine
        .get_similar_components(request.platform, &request.name, limit)
        .map_err(|e| render_query_error(&e))?;

    if suggestions.is_empty() {
        return Ok(format!(
            "No components similar to '{}' on {}.\n",
            request.name, request.platform
        ));
    }

    let mut output = format!(
        "Components similar to '{}' on {}:\n\n",
        request.name, request.platform
    );
    for suggestion in &suggestions {
        let _ = writeln!(
            output,
            "• `{}` - {} ({}) - similarity: {}%",
            suggestion.name,
            suggestion.display_name,
            suggestion.category,
            (suggestion.score * 100.0).round() as u8
        );
    }

    Ok(output)
}
