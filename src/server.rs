//! MCP server exposing the Query Engine as tools.

use crate::engine::QueryEngine;
use crate::tools::{
    GetComponentContentRequest, GetComponentRequest, ListCategoriesRequest,
    ListComponentsRequest, SearchRequest, SimilarComponentsRequest, handle_get_component,
    handle_get_component_content, handle_list_categories, handle_list_components,
    handle_search, handle_similar_components,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for accessibility acceptance-criteria queries
#[derive(Clone)]
pub struct CriteriaServer {
    /// Shared query engine (initialized before serving)
    engine: Arc<QueryEngine>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for CriteriaServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CriteriaServer")
            .field("engine", &self.engine)
            .finish()
    }
}

#[tool_router]
impl CriteriaServer {
    /// Create a new CriteriaServer over a shared engine.
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List accessibility components for a platform (web or native), sorted by name, with the content formats each one provides. Optionally filter by category.",
        input_schema = inline_schema_for_type::<ListComponentsRequest>()
    )]
    async fn list_components(
        &self,
        Parameters(request): Parameters<ListComponentsRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_components(&self.engine, request)
    }

    #[tool(
        description = "List the component categories of a platform (web or native).",
        input_schema = inline_schema_for_type::<ListCategoriesRequest>()
    )]
    async fn list_categories(
        &self,
        Parameters(request): Parameters<ListCategoriesRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_categories(&self.engine, request)
    }

    #[tool(
        description = "Get the full accessibility acceptance criteria for a component: general notes, Gherkin scenarios, condensed criteria, and developer notes for web, Android and iOS.",
        input_schema = inline_schema_for_type::<GetComponentRequest>()
    )]
    async fn get_component(
        &self,
        Parameters(request): Parameters<GetComponentRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_component(&self.engine, request)
    }

    #[tool(
        description = "Get one content format of a component as raw text: gherkin, condensed, developerNotes, androidDeveloperNotes or iosDeveloperNotes.",
        input_schema = inline_schema_for_type::<GetComponentContentRequest>()
    )]
    async fn get_component_content(
        &self,
        Parameters(request): Parameters<GetComponentContentRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_component_content(&self.engine, request)
    }

    #[tool(
        description = "Fuzzy search components by name, label and criteria text. Tolerates typos; results are ranked by relevance with matching snippets.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.engine, request)
    }

    #[tool(
        description = "Suggest components whose name or label is close to a possibly misspelled component name.",
        input_schema = inline_schema_for_type::<SimilarComponentsRequest>()
    )]
    async fn get_similar_components(
        &self,
        Parameters(request): Parameters<SimilarComponentsRequest>,
    ) -> std::result::Result<String, String> {
        handle_similar_components(&self.engine, request)
    }
}

#[tool_handler]
impl ServerHandler for CriteriaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "a11y-criteria-mcp: accessibility acceptance criteria for web and native components. \
                 Use list_components or search to find a component, then get_component for the full criteria \
                 or get_component_content for a single format."
                    .to_string(),
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
