//! Document header parsing.
//!
//! Documents may start with a delimited header block:
//!
//! ```text
//! ---
//! title: fixing the login flow
//! category: technical
//! created_date: 2024-06-01
//! ---
//!
//! body text...
//! ```
//!
//! Parsing never fails: a document without an opening delimiter on its first
//! line gets the default header, and malformed lines inside a block are
//! skipped.

use std::collections::HashMap;
use std::path::PathBuf;

use super::Document;

/// Marker line opening and closing a header block.
pub const HEADER_DELIMITER: &str = "---";

/// Parse the header block of a document.
///
/// Returns the default header (`category: technical`, empty `created_date`
/// and `title`) when the text does not start with the delimiter. Each header
/// line is split on its first colon; later colons stay in the value, so
/// timestamp values survive.
#[must_use]
pub fn parse_header(text: &str) -> HashMap<String, String> {
    let mut lines = text.lines();

    let opens_block = lines
        .next()
        .is_some_and(|first| first.trim_end() == HEADER_DELIMITER);
    if !opens_block {
        return default_header();
    }

    let mut header = HashMap::new();
    for line in lines {
        if line.trim_end() == HEADER_DELIMITER {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                header.insert(key.to_string(), value.trim().to_string());
            }
        }
        // Lines without a colon are silently skipped.
    }
    header
}

/// The body of a document: everything after the header block, or the whole
/// text when no header is present.
#[must_use]
pub fn document_body(text: &str) -> String {
    let mut lines = text.lines();

    let opens_block = lines
        .next()
        .is_some_and(|first| first.trim_end() == HEADER_DELIMITER);
    if !opens_block {
        return text.to_string();
    }

    let mut body_lines = lines.skip_while(|line| line.trim_end() != HEADER_DELIMITER);
    // Consume the closing delimiter itself.
    if body_lines.next().is_none() {
        return String::new();
    }
    body_lines.collect::<Vec<_>>().join("\n").trim_start().to_string()
}

/// Parse raw text into a [`Document`] at the given path.
#[must_use]
pub fn parse_document(path: PathBuf, text: &str) -> Document {
    Document {
        path,
        header: parse_header(text),
        body: document_body(text),
    }
}

fn default_header() -> HashMap<String, String> {
    let mut header = HashMap::new();
    header.insert("category".to_string(), "technical".to_string());
    header.insert("created_date".to_string(), String::new());
    header.insert("title".to_string(), String::new());
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\ntitle: fix login\ncategory: decision\ncreated_date: 2024-06-01\ntags: auth, jwt\n---\n\n# Fix login\n\nBody text here.\n";

    #[test]
    fn test_parse_header_fields() {
        let header = parse_header(DOC);
        assert_eq!(header["title"], "fix login");
        assert_eq!(header["category"], "decision");
        assert_eq!(header["created_date"], "2024-06-01");
        assert_eq!(header["tags"], "auth, jwt");
    }

    #[test]
    fn test_missing_header_yields_defaults() {
        let header = parse_header("# Just a heading\n\nNo header block.");
        assert_eq!(header["category"], "technical");
        assert_eq!(header["created_date"], "");
        assert_eq!(header["title"], "");
    }

    #[test]
    fn test_delimiter_not_at_position_zero_is_no_header() {
        let header = parse_header("\n---\ntitle: late\n---\n");
        assert_eq!(header["category"], "technical");
        assert!(!header.contains_key("tags"));
    }

    #[test]
    fn test_value_keeps_colons_after_first() {
        let header = parse_header("---\nupdated: 2024-06-01T12:30:00Z\n---\n");
        assert_eq!(header["updated"], "2024-06-01T12:30:00Z");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let header = parse_header("---\nno colon here\ntitle: ok\n---\n");
        assert_eq!(header.len(), 1);
        assert_eq!(header["title"], "ok");
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let header = parse_header("");
        assert_eq!(header["category"], "technical");
    }

    #[test]
    fn test_unclosed_header_consumes_rest() {
        let header = parse_header("---\ntitle: dangling");
        assert_eq!(header["title"], "dangling");
        assert_eq!(document_body("---\ntitle: dangling"), "");
    }

    #[test]
    fn test_body_strips_header_block() {
        let body = document_body(DOC);
        assert!(body.starts_with("# Fix login"));
        assert!(!body.contains("created_date"));
    }

    #[test]
    fn test_body_without_header_is_whole_text() {
        let text = "plain body only";
        assert_eq!(document_body(text), text);
    }

    #[test]
    fn test_parse_document_roundtrip() {
        let doc = parse_document(PathBuf::from("/s/fix.md"), DOC);
        assert_eq!(doc.title(), "fix login");
        assert_eq!(doc.tags(), vec!["auth", "jwt"]);
        assert!(doc.body.contains("Body text here."));
    }
}
