//! Tool handlers: each maps one typed request onto one Query Engine operation and
//! renders the result as text.

pub mod get_component;
pub mod get_component_content;
pub mod list_categories;
pub mod list_components;
pub mod search;
pub mod similar_components;

pub use get_component::*;
pub use get_component_content::*;
pub use list_categories::*;
pub use list_components::*;
pub use search::*;
pub use similar_components::*;

use crate::content::Format;
use crate::error::QueryError;
use std::fmt::Write as _;

/// Render a query failure with whatever context helps the caller recover.
pub fn render_query_error(error: &QueryError) -> String {
    match error {
        QueryError::NotInitialized => {
            "Content index is not initialized yet. The server is still loading its content; try again shortly."
                .to_string()
        }
        QueryError::NotFound {
            platform,
            name,
            suggestions,
        } => {
            let mut output = format!("Component '{}' not found on {}.\n\n", name, platform);
            if suggestions.is_empty() {
                let _ = writeln!(
                    output,
                    "Use list_components with platform '{}' to see available components.",
                    platform
                );
            } else {
                output.push_str("Did you mean one of these?\n");
                for suggestion in suggestions {
                    let _ = writeln!(output, "• `{}`", suggestion);
                }
            }
            output
        }
        QueryError::FormatUnavailable {
            platform,
            name,
            format,
            available,
        } => {
            let mut output = format!(
                "Component '{}' on {} has no {} content.\n\n",
                name, platform, format
            );
            if available.is_empty() {
                output.push_str("This component has no format-specific content.\n");
            } else {
                let _ = writeln!(output, "Available formats: {}", format_list(available));
            }
            output
        }
    }
}

/// Comma-separated format names.
pub(crate) fn format_list(formats: &[Format]) -> String {
    formats
        .iter()
        .map(|format| format.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
