//! Query Engine: exact lookups, fuzzy search and near-miss suggestions over the
//! loaded catalog.
//!
//! Every query is a pure read of the immutable [`Catalog`]. Before
//! [`QueryEngine::initialize`] has completed, all queries fail with
//! [`QueryError::NotInitialized`].

mod state;

pub use state::{Catalog, Phase};

use crate::content::{ContentSource, Format, Platform};
use crate::error::{LoadError, QueryError};
use crate::search::{SEARCH_THRESHOLD, SUGGEST_THRESHOLD, SearchIndex, extract_snippet};
use crate::types::{ComponentDetail, ComponentSummary, FieldMatch, SearchResult, Suggestion};
use state::Lifecycle;
use std::sync::Arc;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default number of near-miss suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Public entry point for all content queries.
#[derive(Debug)]
pub struct QueryEngine {
    lifecycle: Lifecycle,
}

impl QueryEngine {
    /// Create an uninitialized engine for the given content source.
    pub fn new(source: ContentSource) -> Self {
        Self {
            lifecycle: Lifecycle::new(source),
        }
    }

    /// Load the content and build both platform indices.
    ///
    /// Idempotent: concurrent and repeated calls share one build and return the
    /// same catalog.
    pub async fn initialize(&self) -> Result<Arc<Catalog>, LoadError> {
        self.lifecycle.initialize().await
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle.ready().is_some()
    }

    pub async fn phase(&self) -> Phase {
        self.lifecycle.phase().await
    }

    /// Number of catalog builds started so far.
    pub fn build_count(&self) -> usize {
        self.lifecycle.build_count()
    }

    fn catalog(&self) -> Result<&Catalog, QueryError> {
        self.lifecycle
            .ready()
            .map(|catalog| &**catalog)
            .ok_or(QueryError::NotInitialized)
    }

    fn index(&self, platform: Platform) -> Result<&SearchIndex, QueryError> {
        Ok(self.catalog()?.index(platform))
    }

    /// Components of a platform sorted by name, optionally limited to one category.
    ///
    /// The category filter matches the category name or label, ignoring ASCII case.
    pub fn list_components(
        &self,
        platform: Platform,
        category: Option<&str>,
    ) -> Result<Vec<ComponentSummary>, QueryError> {
        let index = self.index(platform)?;
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        let mut components: Vec<ComponentSummary> = index
            .records()
            .iter()
            .filter(|record| {
                category.is_none_or(|filter| {
                    record.category.eq_ignore_ascii_case(filter)
                        || record.category_label.eq_ignore_ascii_case(filter)
                })
            })
            .map(ComponentSummary::from)
            .collect();

        components.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(components)
    }

    /// Category names of a platform, sorted.
    pub fn get_categories(&self, platform: Platform) -> Result<Vec<String>, QueryError> {
        let catalog = self.catalog()?;
        let mut names: Vec<String> = catalog
            .content()
            .categories(platform)
            .iter()
            .map(|category| category.name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Full record of one component.
    pub fn get_component(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<ComponentDetail, QueryError> {
        let index = self.index(platform)?;
        index
            .get(name.trim())
            .map(ComponentDetail::from)
            .ok_or_else(|| not_found(index, name))
    }

    /// Raw text of one format of a component.
    pub fn get_component_content(
        &self,
        platform: Platform,
        name: &str,
        format: Format,
    ) -> Result<String, QueryError> {
        let index = self.index(platform)?;
        let record = index
            .get(name.trim())
            .ok_or_else(|| not_found(index, name))?;

        record
            .item
            .field(format)
            .map(str::to_string)
            .ok_or_else(|| QueryError::FormatUnavailable {
                platform,
                name: record.item.name.clone(),
                format,
                available: record.item.formats(),
            })
    }

    /// Ranked fuzzy search over a platform, at most `max_results` results.
    pub fn search(
        &self,
        platform: Platform,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, QueryError> {
        let index = self.index(platform)?;
        let hits = index.search(query, max_results, SEARCH_THRESHOLD);

        tracing::debug!(
            "Search '{}' on {} returned {} results",
            query,
            platform,
            hits.len()
        );

        Ok(hits
            .into_iter()
            .map(|hit| {
                let record = &index.records()[hit.record];
                let matches = hit
                    .fields
                    .iter()
                    .filter_map(|field| {
                        record.field(*field).map(|text| FieldMatch {
                            field: *field,
                            snippet: extract_snippet(text, query),
                        })
                    })
                    .collect();

                SearchResult {
                    name: record.item.name.clone(),
                    display_name: record.item.label.clone(),
                    category: record.category.clone(),
                    category_label: record.category_label.clone(),
                    matches,
                    relevance: hit.relevance,
                }
            })
            .collect())
    }

    /// Components whose name or label is close to `name`, best first.
    pub fn get_similar_components(
        &self,
        platform: Platform,
        name: &str,
        limit: usize,
    ) -> Result<Vec<Suggestion>, QueryError> {
        let index = self.index(platform)?;
        Ok(similar(index, name, limit))
    }

    /// Formats present on a component; empty when the component does not exist.
    pub fn get_available_formats(
        &self,
        platform: Platform,
        name: &str,
    ) -> Result<Vec<Format>, QueryError> {
        let index = self.index(platform)?;
        Ok(index
            .get(name.trim())
            .map(|record| record.item.formats())
            .unwrap_or_default())
    }
}

fn similar(index: &SearchIndex, name: &str, limit: usize) -> Vec<Suggestion> {
    index
        .near_misses(name, limit, SUGGEST_THRESHOLD)
        .into_iter()
        .map(|miss| {
            let record = &index.records()[miss.record];
            Suggestion {
                name: record.item.name.clone(),
                display_name: record.item.label.clone(),
                category: record.category.clone(),
                score: miss.score,
            }
        })
        .collect()
}

fn not_found(index: &SearchIndex, name: &str) -> QueryError {
    let suggestions = similar(index, name, DEFAULT_SUGGESTION_LIMIT)
        .into_iter()
        .map(|suggestion| suggestion.name)
        .collect();

    QueryError::NotFound {
        platform: index.platform(),
        name: name.to_string(),
        suggestions,
    }
}
