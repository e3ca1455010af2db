use super::{format_list, render_query_error};
use crate::content::{Format, Platform};
use crate::engine::QueryEngine;
use crate::types::ComponentSummary;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for list_components tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListComponentsRequest {
    /// Platform to list: web or native
    pub platform: Platform,
    /// Optional category name or label to filter by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// List the components of a platform, sorted by name, with the formats each provides.
pub fn handle_list_components(
    engine: &QueryEngine,
    request: ListComponentsRequest,
) -> Result<String, String> {
    let components = engine
        .list_components(request.platform, request.category.as_deref())
        .map_err(|e| render_query_error(&e))?;

    let scope = match &request.category {
        Some(category) => format!(" in category '{}'", category),
        None => String::new(),
    };

    if components.is_empty() {
        let mut msg = format!("No {} components found{}.\n", request.platform, scope);
        if request.category.is_some() {
            msg.push_str("\nUse list_categories to see the available categories.\n");
        }
        return Ok(msg);
    }

    let mut output = format!(
        "{} components{} ({}):\n\n",
        capitalize(request.platform.as_str()),
        scope,
        components.len()
    );

    for component in &components {
        let _ = write!(
            output,
            "• `{}` - {} ({})",
            component.name, component.display_name, component.category
        );

        let formats = present_formats(component);
        if !formats.is_empty() {
            let _ = write!(output, " [{}]", format_list(&formats));
        }
        output.push('\n');
    }

    Ok(output)
}

fn present_formats(component: &ComponentSummary) -> Vec<Format> {
    [
        (component.has_gherkin, Format::Gherkin),
        (component.has_condensed, Format::Condensed),
        (component.has_developer_notes, Format::DeveloperNotes),
        (component.has_android_notes, Format::AndroidDeveloperNotes),
        (component.has_ios_notes, Format::IosDeveloperNotes),
    ]
    .into_iter()
    .filter_map(|(present, format)| present.then_some(format))
    .collect()
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
