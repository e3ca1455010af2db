use crate::content::{Format, Platform};
use crate::tracing::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "a11y-criteria-mcp", version)]
#[command(about = "Accessibility acceptance criteria for AI assistants", long_about = None)]
pub struct Cli {
    /// Path to the content document (JSON)
    #[arg(
        long,
        env = "A11Y_CONTENT_PATH",
        default_value = "data/content.json",
        global = true
    )]
    pub content: PathBuf,

    /// Log line format on stderr
    #[arg(long, env = "A11Y_LOG_FORMAT", value_enum, default_value_t, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the MCP tools over stdio (default)
    Serve,
    #[command(flatten)]
    Query(QueryCommand),
}

/// One-shot queries printed to stdout.
#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Fuzzy search components
    Search {
        platform: Platform,
        query: String,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a component, or one of its formats
    Show {
        platform: Platform,
        name: String,
        #[arg(short, long)]
        format: Option<Format>,
        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List components of a platform
    List {
        platform: Platform,
        #[arg(short, long)]
        category: Option<String>,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories of a platform
    Categories { platform: Platform },
}
