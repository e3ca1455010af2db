use a11y_criteria_mcp::QueryError;
use a11y_criteria_mcp::cli::{Cli, Commands, QueryCommand};
use a11y_criteria_mcp::content::ContentSource;
use a11y_criteria_mcp::engine::QueryEngine;
use a11y_criteria_mcp::error::Result;
use a11y_criteria_mcp::server::CriteriaServer;
use a11y_criteria_mcp::tools::{
    GetComponentContentRequest, GetComponentRequest, ListCategoriesRequest,
    ListComponentsRequest, SearchRequest, handle_get_component, handle_get_component_content,
    handle_list_categories, handle_list_components, handle_search, render_query_error,
};
use anyhow::{Context, anyhow};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging - write to stderr to avoid interfering with MCP protocol on stdout
    a11y_criteria_mcp::tracing::init(cli.log_format);

    let engine = Arc::new(QueryEngine::new(ContentSource::File(cli.content.clone())));

    // Without content no query can be answered, so a load failure ends the process
    engine
        .initialize()
        .await
        .with_context(|| format!("Failed to load content from {}", cli.content.display()))?;

    match cli.command {
        None | Some(Commands::Serve) => serve(engine).await,
        Some(Commands::Query(command)) => run_offline(&engine, command),
    }
}

async fn serve(engine: Arc<QueryEngine>) -> Result<()> {
    tracing::info!("Starting a11y-criteria-mcp MCP server");

    // Create and serve the MCP server over stdio
    let server = CriteriaServer::new(engine);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}

/// Runs a one-shot query against the engine and prints the result to stdout.
fn run_offline(engine: &QueryEngine, command: QueryCommand) -> Result<()> {
    let output = match command {
        QueryCommand::Search {
            platform,
            query,
            limit,
            json: true,
        } => to_json(&engine.search(platform, &query, limit))?,
        QueryCommand::Search {
            platform,
            query,
            limit,
            json: false,
        } => handle_search(
            engine,
            SearchRequest {
                platform,
                query,
                max_results: Some(limit),
            },
        ),
        QueryCommand::Show {
            platform,
            name,
            format: Some(format),
            ..
        } => handle_get_component_content(
            engine,
            GetComponentContentRequest {
                platform,
                name,
                format,
            },
        ),
        QueryCommand::Show {
            platform,
            name,
            format: None,
            json: true,
        } => to_json(&engine.get_component(platform, &name))?,
        QueryCommand::Show {
            platform,
            name,
            format: None,
            json: false,
        } => handle_get_component(engine, GetComponentRequest { platform, name }),
        QueryCommand::List {
            platform,
            category,
            json: true,
        } => to_json(&engine.list_components(platform, category.as_deref()))?,
        QueryCommand::List {
            platform,
            category,
            json: false,
        } => handle_list_components(engine, ListComponentsRequest { platform, category }),
        QueryCommand::Categories { platform } => {
            handle_list_categories(engine, ListCategoriesRequest { platform })
        }
    };

    match output {
        Ok(text) => {
            println!("{}", text.trim_end());
            Ok(())
        }
        Err(message) => Err(anyhow!(message)),
    }
}

fn to_json<T: serde::Serialize>(
    result: &std::result::Result<T, QueryError>,
) -> Result<std::result::Result<String, String>> {
    match result {
        Ok(value) => Ok(Ok(
            serde_json::to_string_pretty(value).context("Failed to serialize result")?
        )),
        Err(e) => Ok(Err(render_query_error(e))),
    }
}
