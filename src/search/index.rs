//! Per-platform weighted fuzzy index over flattened component records.

use super::scoring::{Relevance, field_similarity, is_match, normalize, suggestion_similarity};
use crate::content::{ContentItem, ContentStructure, Platform};
use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// A searchable field of an [`IndexRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexField {
    Label,
    Name,
    GeneralNotes,
    Gherkin,
    Condensed,
    DeveloperNotes,
}

impl IndexField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Name => "name",
            Self::GeneralNotes => "generalNotes",
            Self::Gherkin => "gherkin",
            Self::Condensed => "condensed",
            Self::DeveloperNotes => "developerNotes",
        }
    }

    /// Name and label identify a component; the rest is prose.
    pub const fn is_identity(self) -> bool {
        matches!(self, Self::Name | Self::Label)
    }

    fn text(self, item: &ContentItem) -> Option<&str> {
        match self {
            Self::Label => Some(&item.label),
            Self::Name => Some(&item.name),
            Self::GeneralNotes => item.general_notes.as_deref(),
            Self::Gherkin => item.gherkin.as_deref(),
            Self::Condensed => item.condensed.as_deref(),
            Self::DeveloperNotes => item.developer_notes.as_deref(),
        }
    }
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const FIELD_COUNT: usize = 6;

/// Indexed fields and their ranking weights. Identity fields dominate prose.
pub const FIELD_WEIGHTS: [(IndexField, f64); FIELD_COUNT] = [
    (IndexField::Label, 0.3),
    (IndexField::Name, 0.3),
    (IndexField::GeneralNotes, 0.1),
    (IndexField::Gherkin, 0.1),
    (IndexField::Condensed, 0.1),
    (IndexField::DeveloperNotes, 0.1),
];

/// A component denormalized with its owning category.
#[derive(Debug, Clone)]
pub struct IndexRecord {
    pub item: ContentItem,
    pub category: String,
    pub category_label: String,
}

impl IndexRecord {
    pub fn field(&self, field: IndexField) -> Option<&str> {
        field.text(&self.item)
    }
}

/// A record that passed the match threshold.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Position of the record in corpus order.
    pub record: usize,
    pub relevance: f64,
    /// Matched fields in [`FIELD_WEIGHTS`] order.
    pub fields: Vec<IndexField>,
}

/// A near-miss for a name that does not exist.
#[derive(Debug, Clone)]
pub struct NearMiss {
    pub record: usize,
    pub score: f64,
}

/// Lower-cased copies of the indexed fields, one slot per [`FIELD_WEIGHTS`] entry.
#[derive(Debug, Clone)]
struct NormalizedFields([Option<String>; FIELD_COUNT]);

impl NormalizedFields {
    fn new(record: &IndexRecord) -> Self {
        Self(FIELD_WEIGHTS.map(|(field, _)| record.field(field).map(normalize)))
    }

    fn get(&self, slot: usize) -> Option<&str> {
        self.0[slot].as_deref()
    }
}

/// Weighted approximate-match index for one platform. Immutable once built.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    platform: Platform,
    records: Vec<IndexRecord>,
    normalized: Vec<NormalizedFields>,
    by_name: AHashMap<String, usize>,
}

impl SearchIndex {
    /// Flattens every category of `platform` into records, in corpus order.
    pub fn build(structure: &ContentStructure, platform: Platform) -> Self {
        let records: Vec<IndexRecord> = structure
            .categories(platform)
            .iter()
            .flat_map(|category| {
                category.children.iter().map(|item| IndexRecord {
                    item: item.clone(),
                    category: category.name.clone(),
                    category_label: category.label.clone(),
                })
            })
            .collect();

        let normalized = records.iter().map(NormalizedFields::new).collect();
        let by_name = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.item.name.clone(), idx))
            .collect();

        tracing::debug!(
            "Built {} search index with {} records",
            platform,
            records.len()
        );

        Self {
            platform,
            records,
            normalized,
            by_name,
        }
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// All records in corpus order.
    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by component name.
    pub fn get(&self, name: &str) -> Option<&IndexRecord> {
        self.by_name.get(name).map(|idx| &self.records[*idx])
    }

    /// Ranks records against `query`, best first, at most `limit` hits.
    ///
    /// Equal relevance keeps corpus order.
    pub fn search(&self, query: &str, limit: usize, threshold: f64) -> Vec<SearchHit> {
        let query = normalize(query);
        if query.is_empty() || limit == 0 {
            return vec![];
        }

        let mut hits: Vec<SearchHit> = self
            .normalized
            .iter()
            .enumerate()
            .filter_map(|(record, fields)| {
                let mut relevance = Relevance::default();
                let mut matched = Vec::new();

                for (slot, (field, weight)) in FIELD_WEIGHTS.iter().enumerate() {
                    let Some(text) = fields.get(slot) else {
                        continue;
                    };
                    let similarity = field_similarity(&query, text);
                    if is_match(similarity, threshold) {
                        relevance.add(similarity, *weight, field.is_identity());
                        matched.push(*field);
                    }
                }

                relevance.is_matched().then(|| SearchHit {
                    record,
                    relevance: relevance.value(),
                    fields: matched,
                })
            })
            .collect();

        // Stable sort keeps corpus order for ties
        hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        hits.truncate(limit);
        hits
    }

    /// Records whose name or label is close to `candidate`, best first.
    pub fn near_misses(&self, candidate: &str, limit: usize, threshold: f64) -> Vec<NearMiss> {
        let candidate = normalize(candidate);
        if candidate.is_empty() || limit == 0 {
            return vec![];
        }

        let identity_slots = [IndexField::Name, IndexField::Label].map(|field| {
            FIELD_WEIGHTS
                .iter()
                .position(|(f, _)| *f == field)
                .unwrap_or_default()
        });

        let mut misses: Vec<NearMiss> = self
            .normalized
            .iter()
            .enumerate()
            .filter_map(|(record, fields)| {
                let score = identity_slots
                    .iter()
                    .filter_map(|slot| fields.get(*slot))
                    .map(|text| suggestion_similarity(&candidate, text))
                    .fold(0.0, f64::max);

                is_match(score, threshold).then_some(NearMiss { record, score })
            })
            .collect();

        misses.sort_by(|a, b| b.score.total_cmp(&a.score));
        misses.truncate(limit);
        misses
    }
}
