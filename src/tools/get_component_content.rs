use super::render_query_error;
use crate::content::{Format, Platform};
use crate::engine::QueryEngine;
use rmcp::schemars;
use serde::Deserialize;

/// Parameters for get_component_content tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetComponentContentRequest {
    /// Platform the component belongs to: web or native
    pub platform: Platform,
    /// Component name, e.g. "button"
    pub name: String,
    /// Which format to return
    pub format: Format,
}

/// Return the raw text of a single format of a component.
pub fn handle_get_component_content(
    engine: &QueryEngine,
    request: GetComponentContentRequest,
) -> Result<String, String> {
    engine
        .get_component_content(request.platform, &request.name, request.format)
        .map_err(|e| render_query_error(&e))
}
