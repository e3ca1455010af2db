//! Context windows around a query hit inside a matched field.
//!
//! The window runs from 50 characters before the hit to 150 characters after the
//! start of the hit, so the hit itself counts against the trailing context and a
//! long query leaves less text after it.

/// Characters of context kept before the hit.
const LEADING_CONTEXT: usize = 50;

/// Characters kept from the start of the hit onwards.
const TRAILING_CONTEXT: usize = 150;

/// Total window size, also used when the query does not occur verbatim.
const SNIPPET_LEN: usize = LEADING_CONTEXT + TRAILING_CONTEXT;

const ELLIPSIS: &str = "...";

/// Extracts a window of `text` around the first case-insensitive occurrence of `query`.
///
/// Positions are counted in characters. Falls back to the head of the field when the
/// field matched only approximately.
pub fn extract_snippet(text: &str, query: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.trim().chars().collect();

    let (start, end) = match find_case_insensitive(&chars, &needle) {
        Some(hit) => (
            hit.saturating_sub(LEADING_CONTEXT),
            chars.len().min(hit + TRAILING_CONTEXT),
        ),
        None => (0, chars.len().min(SNIPPET_LEN)),
    };

    let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// Character index of the first case-insensitive occurrence of `needle`.
fn find_case_insensitive(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_short_field_is_returned_whole() {
        check!(extract_snippet("Given a button is focused", "BUTTON") == "Given a button is focused");
    }

    #[test]
    fn test_window_around_late_hit() {
        let text = format!("{}needle{}", "a".repeat(100), "b".repeat(300));
        let snippet = extract_snippet(&text, "Needle");

        check!(snippet.starts_with("..."));
        check!(snippet.ends_with("..."));
        let body = snippet.trim_matches('.');
        check!(body.chars().count() == 200);
        check!(body.starts_with(&"a".repeat(50)));
        check!(body.contains("needle"));
    }

    #[test]
    fn test_hit_near_start_has_no_leading_ellipsis() {
        let text = format!("needle{}", "b".repeat(300));
        let snippet = extract_snippet(&text, "needle");
        check!(snippet.starts_with("needle"));
        check!(snippet.ends_with("..."));
        check!(snippet.chars().count() == 150 + 3);
    }

    #[test]
    fn test_hit_near_end_has_no_trailing_ellipsis() {
        let text = format!("{}needle tail", "a".repeat(300));
        let snippet = extract_snippet(&text, "needle");
        check!(snippet.starts_with("..."));
        check!(snippet.ends_with("needle tail"));
    }

    #[test]
    fn test_trailing_context_counts_from_hit_start() {
        let query = "q".repeat(100);
        let text = format!("{}{}{}", "a".repeat(10), query, "b".repeat(300));
        let snippet = extract_snippet(&text, &query);
        check!(snippet == format!("{}{}{}...", "a".repeat(10), query, "b".repeat(50)));
    }

    #[test]
    fn test_fallback_to_head_when_not_verbatim() {
        let text = "x".repeat(250);
        let snippet = extract_snippet(&text, "buton");
        check!(snippet == format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = format!("{}ボタン{}", "é".repeat(80), "ü".repeat(200));
        let snippet = extract_snippet(&text, "ボタン");
        let body = snippet.trim_start_matches("...").trim_end_matches("...");
        check!(body.chars().count() == 200);
        check!(body.contains("ボタン"));
    }
}
