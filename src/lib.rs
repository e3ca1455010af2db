//! In-memory content index and search engine for accessibility acceptance criteria,
//! served to AI assistants over MCP.

pub mod cli;
pub mod content;
pub mod engine;
pub mod error;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;
pub mod types;

pub use content::{Category, ContentItem, ContentSource, ContentStructure, Format, Platform};
pub use engine::{Catalog, Phase, QueryEngine};
pub use error::{LoadError, QueryError};
pub use types::{ComponentDetail, ComponentSummary, FieldMatch, SearchResult, Suggestion};
