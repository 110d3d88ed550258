//! Insight document formatting and filename derivation.
//!
//! The writer turns an [`InsightRecord`] into canonical document text and a
//! deterministic filename. Naming is lossy on purpose: sanitized 30-char
//! prefixes of task and solution joined by an underscore, so two insights
//! with identical prefixes overwrite one another. The scheme is kept
//! byte-compatible with existing stores.

use super::{Confidence, InsightRecord};

/// Maximum characters kept from each of the task and solution prefixes.
const NAME_PREFIX_CHARS: usize = 30;

/// Derive the document filename for an insight.
#[must_use]
pub fn insight_filename(record: &InsightRecord) -> String {
    format!(
        "{}_{}.md",
        sanitize_name(&record.task),
        sanitize_name(&record.solution)
    )
}

/// Render the canonical document text for an insight.
///
/// `created_date` is an ISO date string supplied by the facade's clock.
#[must_use]
pub fn render_insight(record: &InsightRecord, created_date: &str) -> String {
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str(&format!("title: {}\n", record.task));
    out.push_str(&format!("category: {}\n", record.category));
    out.push_str(&format!("confidence: {}\n", record.confidence));
    out.push_str(&format!("created_date: {created_date}\n"));
    if !record.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", record.tags.join(", ")));
    }
    out.push_str("---\n\n");

    out.push_str(&format!("# {}\n\n", record.task));
    out.push_str(&format!("## Solution\n\n{}\n\n", record.solution));
    out.push_str(&format!("## Reasoning\n\n{}\n\n", record.reasoning));

    if !record.evidence.is_empty() {
        out.push_str("## Evidence\n\n");
        for item in &record.evidence {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }

    if !record.related_files.is_empty() {
        out.push_str("## Related Files\n\n");
        for file in &record.related_files {
            out.push_str(&format!("- {file}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "## Confidence\n\n{} - {}\n",
        record.confidence,
        Confidence::describe_raw(record.confidence.as_str())
    ));

    out
}

/// Keep only alphanumeric and CJK characters, capped at the prefix length.
fn sanitize_name(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_cjk(*c))
        .take(NAME_PREFIX_CHARS)
        .collect()
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{parse_document, Category};
    use std::path::PathBuf;

    fn record() -> InsightRecord {
        InsightRecord {
            task: "implement login".to_string(),
            solution: "use JWT".to_string(),
            reasoning: "stateless".to_string(),
            evidence: vec!["passed auth tests".to_string()],
            category: Category::Technical,
            confidence: Confidence::High,
            tags: vec!["auth".to_string(), "jwt".to_string()],
            related_files: vec!["src/auth.rs".to_string()],
        }
    }

    #[test]
    fn test_filename_strips_punctuation_and_spaces() {
        let name = insight_filename(&record());
        assert_eq!(name, "implementlogin_useJWT.md");
    }

    #[test]
    fn test_filename_preserves_cjk() {
        let mut r = record();
        r.task = "修复登录问题!".to_string();
        r.solution = "使用 JWT".to_string();
        assert_eq!(insight_filename(&r), "修复登录问题_使用JWT.md");
    }

    #[test]
    fn test_filename_caps_each_prefix_at_thirty_chars() {
        let mut r = record();
        r.task = "a".repeat(50);
        r.solution = "b".repeat(50);
        let name = insight_filename(&r);
        assert_eq!(name, format!("{}_{}.md", "a".repeat(30), "b".repeat(30)));
    }

    #[test]
    fn test_identical_prefixes_collide() {
        let mut a = record();
        let mut b = record();
        a.task = format!("{}x", "t".repeat(30));
        b.task = format!("{}y", "t".repeat(30));
        // Divergence beyond the prefix is lost; both map to the same file.
        assert_eq!(insight_filename(&a), insight_filename(&b));
    }

    #[test]
    fn test_rendered_document_parses_back() {
        let text = render_insight(&record(), "2024-06-01");
        let doc = parse_document(PathBuf::from("/s/x.md"), &text);

        assert_eq!(doc.title(), "implement login");
        assert_eq!(doc.category(), Category::Technical);
        assert_eq!(doc.created_date(), "2024-06-01");
        assert_eq!(doc.tags(), vec!["auth", "jwt"]);
        assert!(doc.body.contains("## Solution"));
        assert!(doc.body.contains("use JWT"));
        assert!(doc.body.contains("stateless"));
        assert!(doc.body.contains("passed auth tests"));
        assert!(doc.body.contains("src/auth.rs"));
    }

    #[test]
    fn test_confidence_description_is_embedded() {
        let text = render_insight(&record(), "2024-06-01");
        assert!(text.contains("high - thoroughly validated"));

        let mut r = record();
        r.confidence = Confidence::Low;
        let text = render_insight(&r, "2024-06-01");
        assert!(text.contains("experimental, needs further validation"));
    }

    #[test]
    fn test_empty_evidence_omits_section() {
        let mut r = record();
        r.evidence.clear();
        r.related_files.clear();
        let text = render_insight(&r, "2024-06-01");
        assert!(!text.contains("## Evidence"));
        assert!(!text.contains("## Related Files"));
        assert!(text.contains("## Confidence"));
    }
}
