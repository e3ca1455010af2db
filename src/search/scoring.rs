//! Approximate string matching and relevance ranking.
//!
//! Every field is scored independently with a similarity in `[0, 1]`. Fields below
//! the match threshold are dropped entirely; the remaining ones are combined as a
//! weighted product of distances so that a close hit on a heavily weighted field
//! (name, label) outranks the same hit buried in prose.

use rapidfuzz::distance::levenshtein;

/// Maximum distance (`1 - similarity`) for a field to count as a search match.
pub const SEARCH_THRESHOLD: f64 = 0.4;

/// Maximum distance for a near-miss suggestion. Looser than [`SEARCH_THRESHOLD`].
pub const SUGGEST_THRESHOLD: f64 = 0.6;

/// Fields at most this many characters long are also compared as a whole.
const SHORT_FIELD_CHARS: usize = 64;

/// Base similarity for a verbatim substring hit; coverage adds up to 0.2 on top.
const SUBSTRING_BASE: f64 = 0.8;

/// Share of the text an intra-word substring must cover to earn substring credit.
const MIN_SUBSTRING_COVERAGE: f64 = 0.5;

/// Floor for a matched field's distance, so only identity fields can reach 1.0.
const MIN_FIELD_DISTANCE: f64 = 1e-3;

/// Normalizes a query or field for comparison.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Similarity between a normalized query and a normalized field text.
///
/// - 1.0: exact match
/// - 0.8..1.0: the query occurs verbatim as whole words, or covers at least half
///   of the field, scaled by how much of the field it covers
/// - otherwise: best normalized Levenshtein similarity over word windows the
///   size of the query (plus the whole field when it is short)
pub(crate) fn field_similarity(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }
    if query == text {
        return 1.0;
    }
    if let Some(similarity) = substring_credit(query, text) {
        return similarity;
    }

    let query_words = query.split_whitespace().count().max(1);
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .filter(|word| !word.is_empty())
        .collect();

    let mut best = if text.chars().count() <= SHORT_FIELD_CHARS {
        levenshtein::normalized_similarity(query.chars(), text.chars())
    } else {
        0.0
    };

    let mut window = String::new();
    for start in 0..words.len().saturating_sub(query_words - 1) {
        window.clear();
        for (offset, word) in words[start..start + query_words].iter().enumerate() {
            if offset > 0 {
                window.push(' ');
            }
            window.push_str(word);
        }

        let score = levenshtein::normalized_similarity(query.chars(), window.chars());
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }

    best
}

/// Similarity for suggestions: also credits a candidate whose name is contained
/// in the query (e.g. `missing-button` → `button`).
pub(crate) fn suggestion_similarity(candidate: &str, text: &str) -> f64 {
    let forward = field_similarity(candidate, text);
    if text.is_empty() {
        return forward;
    }
    substring_credit(text, candidate).map_or(forward, |reverse| forward.max(reverse))
}

/// Substring similarity of `needle` in `haystack`, when the hit is substantial.
///
/// A hit inside a longer word (`on` in `button`) only counts when it covers at
/// least [`MIN_SUBSTRING_COVERAGE`] of the haystack.
fn substring_credit(needle: &str, haystack: &str) -> Option<f64> {
    if !haystack.contains(needle) {
        return None;
    }

    let coverage = needle.chars().count() as f64 / haystack.chars().count().max(1) as f64;
    if coverage < MIN_SUBSTRING_COVERAGE && !occurs_as_word(needle, haystack) {
        return None;
    }

    Some((1.0 - SUBSTRING_BASE).mul_add(coverage.min(1.0), SUBSTRING_BASE))
}

/// Whether some occurrence of `needle` is not glued to a letter or digit on either side.
fn occurs_as_word(needle: &str, haystack: &str) -> bool {
    haystack.match_indices(needle).any(|(start, hit)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + hit.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Whether a similarity is close enough under the given distance threshold.
pub(crate) fn is_match(similarity: f64, threshold: f64) -> bool {
    similarity > 0.0 && 1.0 - similarity <= threshold
}

/// Accumulates matched fields into a single relevance in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Relevance {
    distance: f64,
    matched: bool,
    exact_identity: bool,
}

impl Default for Relevance {
    fn default() -> Self {
        Self {
            distance: 1.0,
            matched: false,
            exact_identity: false,
        }
    }
}

impl Relevance {
    /// Folds one matched field into the score.
    ///
    /// `identity` marks the name and label fields; only an exact hit on one of
    /// them yields a relevance of 1.0.
    pub(crate) fn add(&mut self, similarity: f64, weight: f64, identity: bool) {
        if identity && similarity >= 1.0 {
            self.exact_identity = true;
        }
        let distance = (1.0 - similarity).clamp(MIN_FIELD_DISTANCE, 1.0);
        self.distance *= distance.powf(weight);
        self.matched = true;
    }

    pub(crate) const fn is_matched(&self) -> bool {
        self.matched
    }

    /// 1.0 for an exact name or label match; 0.0 when nothing matched.
    pub(crate) fn value(&self) -> f64 {
        if self.exact_identity {
            1.0
        } else if self.matched {
            (1.0 - self.distance).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
