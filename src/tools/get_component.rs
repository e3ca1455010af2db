use super::{format_list, render_query_error};
use crate::content::Platform;
use crate::engine::QueryEngine;
use crate::types::ComponentDetail;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for get_component tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetComponentRequest {
    /// Platform the component belongs to: web or native
    pub platform: Platform,
    /// Component name, e.g. "button"
    pub name: String,
}

/// Show every available section of a component's acceptance criteria.
pub fn handle_get_component(
    engine: &QueryEngine,
    request: GetComponentRequest,
) -> Result<String, String> {
    let detail = engine
        .get_component(request.platform, &request.name)
        .map_err(|e| render_query_error(&e))?;

    Ok(format_component(&detail, request.platform))
}

fn format_component(detail: &ComponentDetail, platform: Platform) -> String {
    let item = &detail.item;
    let mut output = format!("# {} (`{}`)\n\n", item.label, item.name);

    let _ = writeln!(output, "Platform: {}", platform);
    let _ = writeln!(
        output,
        "Category: {} (`{}`)",
        detail.category_label, detail.category
    );

    let formats = item.formats();
    if formats.is_empty() {
        output.push_str("Available formats: none\n");
    } else {
        let _ = writeln!(output, "Available formats: {}", format_list(&formats));
    }

    let sections = [
        ("General notes", item.general_notes.as_deref()),
        ("Criteria", item.criteria.as_deref()),
        ("Gherkin", item.gherkin.as_deref()),
        ("Condensed", item.condensed.as_deref()),
        ("Developer notes", item.developer_notes.as_deref()),
        ("Android developer notes", item.android_developer_notes.as_deref()),
        ("iOS developer notes", item.ios_developer_notes.as_deref()),
        ("Videos", item.videos.as_deref()),
    ];

    for (title, text) in sections {
        if let Some(text) = text {
            let _ = write!(output, "\n## {}\n\n{}\n", title, text.trim_end());
        }
    }

    output
}
