//! Lexical relevance scoring.
//!
//! An intentionally cheap, deterministic heuristic: four additive weighted
//! signals, clamped to [0, 1]. Token matching is bidirectional substring
//! containment ("test" matches "testing" and "unittest"), which is kept
//! exactly as-is for scoring compatibility, short-token false positives
//! included.

use super::Document;

const TITLE_WEIGHT: f32 = 0.4;
const WORD_OVERLAP_WEIGHT: f32 = 0.4;
const CATEGORY_WEIGHT: f32 = 0.1;
const TAG_WEIGHT: f32 = 0.1;

/// Score a query against one document. Result is in [0, 1].
#[must_use]
pub fn score(query: &str, doc: &Document) -> f32 {
    let query_lower = query.to_lowercase();
    let query_tokens: Vec<&str> = query_lower.split_whitespace().collect();

    let mut total = 0.0_f32;

    // Title containment: binary, full weight.
    let title_lower = doc.title().to_lowercase();
    if !title_lower.is_empty() && title_lower.contains(&query_lower) {
        total += TITLE_WEIGHT;
    }

    // Word overlap: fraction of query tokens with a bidirectional substring
    // match against some body token.
    if !query_tokens.is_empty() {
        let body_lower = doc.body.to_lowercase();
        let body_tokens: Vec<&str> = body_lower.split_whitespace().collect();
        let matched = query_tokens
            .iter()
            .filter(|q| body_tokens.iter().any(|b| tokens_overlap(q, b)))
            .count();
        #[allow(clippy::cast_precision_loss)]
        {
            total += (matched as f32 / query_tokens.len() as f32) * WORD_OVERLAP_WEIGHT;
        }
    }

    // Category mention: binary.
    if query_lower.contains(doc.category().as_str()) {
        total += CATEGORY_WEIGHT;
    }

    // Tag overlap: fraction of tags matching, denominator never below one.
    let tags = doc.tags();
    if !tags.is_empty() {
        let matched = tags
            .iter()
            .filter(|tag| {
                let tag_lower = tag.to_lowercase();
                query_lower.contains(&tag_lower) || tag_lower.contains(&query_lower)
            })
            .count();
        #[allow(clippy::cast_precision_loss)]
        {
            total += (matched as f32 / tags.len().max(1) as f32) * TAG_WEIGHT;
        }
    }

    total.min(1.0)
}

/// Bidirectional substring containment between two lower-cased tokens.
fn tokens_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn doc(title: &str, category: &str, tags: &str, body: &str) -> Document {
        let mut header = HashMap::new();
        if !title.is_empty() {
            header.insert("title".to_string(), title.to_string());
        }
        header.insert("category".to_string(), category.to_string());
        if !tags.is_empty() {
            header.insert("tags".to_string(), tags.to_string());
        }
        Document {
            path: PathBuf::from("/solutions/test.md"),
            header,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_score_is_bounded_when_all_signals_max_out() {
        // Query contains the category name and the tag, title contains the
        // query, and every query token appears in the body.
        let d = doc(
            "technical auth technical",
            "technical",
            "technical,auth",
            "technical auth technical auth",
        );
        let s = score("technical auth", &d);
        assert!(s <= 1.0);
        assert!(s >= 0.9);
    }

    #[test]
    fn test_exact_title_match_scores_at_least_title_weight() {
        let d = doc("implement login", "technical", "", "unrelated body words");
        let s = score("implement login", &d);
        assert!(s >= 0.4, "score was {s}");
    }

    #[test]
    fn test_title_match_is_binary_not_partial() {
        let d = doc("implement login flow", "process", "", "");
        // Query is a substring of the title: full weight.
        let with_containment = score("login", &d);
        // Query not contained: no title contribution.
        let without = score("logout", &d);
        assert!(with_containment >= 0.4);
        assert!(without < 0.4);
    }

    #[test]
    fn test_word_overlap_is_bidirectional() {
        let d = doc("x", "technical", "", "testing the unittest suite");
        // "test" is a substring of "testing" and of "unittest".
        let s = score("test", &d);
        assert!(s >= 0.39, "score was {s}");
    }

    #[test]
    fn test_word_overlap_is_fractional() {
        let d = doc("x", "technical", "", "alpha beta");
        // One of two query tokens matches.
        let s = score("alpha zzzqqq", &d);
        assert!((s - 0.2).abs() < 0.01, "score was {s}");
    }

    #[test]
    fn test_category_mention_adds_weight() {
        let d = doc("x", "decision", "", "");
        let with_category = score("why this decision", &d);
        let without = score("why this", &d);
        assert!(with_category > without);
    }

    #[test]
    fn test_tag_overlap_either_direction() {
        let d = doc("x", "technical", "jwt", "");
        // Query contains the tag.
        assert!(score("jwt rotation", &d) > 0.0);
        // Tag contains the query.
        let d2 = doc("x", "technical", "authentication", "");
        assert!(score("auth", &d2) > 0.0);
    }

    #[test]
    fn test_no_signals_scores_zero() {
        let d = doc("alpha", "technical", "", "beta gamma");
        let s = score("zzzqqq", &d);
        assert!(s.abs() < f32::EPSILON, "score was {s}");
    }

    #[test]
    fn test_score_never_negative_or_above_one() {
        let docs = [
            doc("", "technical", "", ""),
            doc("t", "pattern", "a,b,c", "some body"),
        ];
        for d in &docs {
            for q in ["", "a", "pattern pattern pattern", "t"] {
                let s = score(q, d);
                assert!((0.0..=1.0).contains(&s), "query {q:?} scored {s}");
            }
        }
    }
}
