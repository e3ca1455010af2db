use super::list_components::capitalize;
use super::render_query_error;
use crate::content::Platform;
use crate::engine::QueryEngine;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for list_categories tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCategoriesRequest {
    /// Platform whose categories to list: web or native
    pub platform: Platform,
}

/// List the category names of a platform, sorted.
pub fn handle_list_categories(
    engine: &QueryEngine,
    request: ListCategoriesRequest,
) -> Result<String, String> {
    let categories = engine
        .get_categories(request.platform)
        .map_err(|e| render_query_error(&e))?;

    if categories.is_empty() {
        return Ok(format!("No categories found on {}.\n", request.platform));
    }

    let mut output = format!(
        "{} categories ({}):\n\n",
        capitalize(request.platform.as_str()),
        categories.len()
    );
    for category in &categories {
        let _ = writeln!(output, "• {}", category);
    }

    Ok(output)
}
