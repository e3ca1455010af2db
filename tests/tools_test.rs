mod common;

use a11y_criteria_mcp::tools::{
    GetComponentContentRequest, GetComponentRequest, ListCategoriesRequest,
    ListComponentsRequest, SearchRequest, SimilarComponentsRequest, handle_get_component,
    handle_get_component_content, handle_list_categories, handle_list_components,
    handle_search, handle_similar_components,
};
use a11y_criteria_mcp::{Format, Platform, QueryEngine};
use assert2::{check, let_assert};
use common::{engine, ready};
use rstest::rstest;

/// Test: every tool reports the not-initialized state instead of failing silently.
#[rstest]
fn tools_before_initialize(engine: QueryEngine) {
    let result = handle_list_components(
        &engine,
        ListComponentsRequest {
            platform: Platform::Web,
            category: None,
        },
    );
    let_assert!(Err(message) = result);
    check!(message.contains("not initialized"));

    let result = handle_search(
        &engine,
        SearchRequest {
            platform: Platform::Web,
            query: "button".to_string(),
            max_results: None,
        },
    );
    check!(result.is_err());
}

#[rstest]
#[tokio::test]
async fn list_components_output(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_list_components(
        &engine,
        ListComponentsRequest {
            platform: Platform::Web,
            category: None,
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.starts_with("Web components (5):"));
    check!(
        output.contains("• `button` - Button (controls) [gherkin, condensed, developerNotes]"),
        "Should list button with its formats: {}",
        output
    );
    check!(output.contains("• `text-input` - Text input (forms)\n"));

    // Sorted by name
    let button = output.find("`button`").unwrap();
    let checkbox = output.find("`checkbox`").unwrap();
    let link = output.find("`link`").unwrap();
    check!(button < checkbox && checkbox < link);
}

#[rstest]
#[tokio::test]
async fn list_components_unknown_category(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_list_components(
        &engine,
        ListComponentsRequest {
            platform: Platform::Native,
            category: Some("forms".to_string()),
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.contains("No native components found in category 'forms'"));
    check!(output.contains("list_categories"));
}

#[rstest]
#[tokio::test]
async fn list_categories_output(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_list_categories(
        &engine,
        ListCategoriesRequest {
            platform: Platform::Native,
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.starts_with("Native categories (2):"));
    check!(output.contains("• controls\n• notifications"));
}

#[rstest]
#[tokio::test]
async fn get_component_renders_sections(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_get_component(
        &engine,
        GetComponentRequest {
            platform: Platform::Native,
            name: "button".to_string(),
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.starts_with("# Button (`button`)"));
    check!(output.contains("Platform: native"));
    check!(output.contains("Available formats: gherkin, androidDeveloperNotes, iosDeveloperNotes"));
    check!(output.contains("## Android developer notes\n\nUse android.widget.Button"));
    check!(output.contains("## iOS developer notes\n\nUse UIButton"));
    check!(!output.contains("## Condensed"));
}

#[rstest]
#[tokio::test]
async fn get_component_not_found_suggests(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_get_component(
        &engine,
        GetComponentRequest {
            platform: Platform::Web,
            name: "chekbox".to_string(),
        },
    );
    let_assert!(Err(message) = result);
    check!(message.contains("Component 'chekbox' not found on web"));
    check!(message.contains("Did you mean one of these?"));
    check!(message.contains("• `checkbox`"));
}

#[rstest]
#[tokio::test]
async fn get_component_content_returns_raw_text(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_get_component_content(
        &engine,
        GetComponentContentRequest {
            platform: Platform::Native,
            name: "switch".to_string(),
            format: Format::IosDeveloperNotes,
        },
    );
    check!(result == Ok("Use UISwitch".to_string()));
}

#[rstest]
#[tokio::test]
async fn get_component_content_lists_available_formats(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_get_component_content(
        &engine,
        GetComponentContentRequest {
            platform: Platform::Native,
            name: "switch".to_string(),
            format: Format::Gherkin,
        },
    );
    let_assert!(Err(message) = result);
    check!(message.contains("Component 'switch' on native has no gherkin content"));
    check!(message.contains("Available formats: condensed, iosDeveloperNotes"));
}

#[rstest]
#[tokio::test]
async fn search_output_ranks_and_quotes(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_search(
        &engine,
        SearchRequest {
            platform: Platform::Web,
            query: "button".to_string(),
            max_results: Some(5),
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.starts_with("Search results for 'button' on web:"));
    check!(output.contains("1. `button` (Button) in Controls - relevance: 100%"));
    check!(output.contains("2. `toggle-button` (Toggle button) in Controls"));
    check!(output.contains("[name] button"));
}

#[rstest]
#[tokio::test]
async fn search_without_results_gives_tips(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_search(
        &engine,
        SearchRequest {
            platform: Platform::Web,
            query: "zzzzqqq".to_string(),
            max_results: None,
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.contains("No results found for 'zzzzqqq' on web"));
    check!(output.contains("Search tips:"));
}

#[rstest]
#[tokio::test]
async fn similar_components_output(engine: QueryEngine) {
    let engine = ready(engine).await;

    let result = handle_similar_components(
        &engine,
        SimilarComponentsRequest {
            platform: Platform::Native,
            name: "swich".to_string(),
            limit: None,
        },
    );
    let_assert!(Ok(output) = result);
    check!(output.starts_with("Components similar to 'swich' on native:"));
    check!(output.contains("• `switch` - Switch (controls)"));
}
