//! Navigational index generation.
//!
//! `KNOWLEDGE.md` is regenerated from the current collection state: document
//! counts, a one-line summary per file, and frequency counts for a fixed
//! vocabulary of technology keywords matched against filenames.

/// Placeholder when a document has no summarizable line.
pub const NO_SUMMARY: &str = "No summary available";

/// Minimum length of a body line considered a summary.
const SUMMARY_MIN_CHARS: usize = 50;
/// Maximum length of a rendered summary line.
const SUMMARY_MAX_CHARS: usize = 200;

/// Fixed vocabulary matched case-insensitively against filenames.
const TECH_KEYWORDS: &[&str] = &[
    "rust", "python", "javascript", "typescript", "react", "vue", "node", "docker", "kubernetes",
    "sql", "database", "redis", "git", "api", "http", "auth", "jwt", "test", "async", "cache",
    "linux", "network", "build", "deploy", "config",
];

/// One line of the generated index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// File name within its collection.
    pub name: String,
    /// One-line summary of the document body.
    pub summary: String,
}

/// Safely truncate a string at a character boundary.
///
/// Unlike byte slicing, this will not panic on multi-byte UTF-8 characters.
fn safe_truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// One-line summary of a document body: the first non-heading line longer
/// than 50 characters, truncated to 200; the placeholder otherwise.
#[must_use]
pub fn summarize(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| !line.starts_with('#') && line.chars().count() > SUMMARY_MIN_CHARS)
        .map_or_else(
            || NO_SUMMARY.to_string(),
            |line| safe_truncate(line, SUMMARY_MAX_CHARS).to_string(),
        )
}

/// Count technology keywords appearing in any of the given filenames.
///
/// Returns `(keyword, count)` pairs for keywords with at least one hit, in
/// vocabulary order.
#[must_use]
pub fn keyword_counts(filenames: &[String]) -> Vec<(String, usize)> {
    let lowered: Vec<String> = filenames.iter().map(|f| f.to_lowercase()).collect();
    TECH_KEYWORDS
        .iter()
        .filter_map(|kw| {
            let count = lowered.iter().filter(|name| name.contains(kw)).count();
            (count > 0).then(|| ((*kw).to_string(), count))
        })
        .collect()
}

/// Render the full index document.
#[must_use]
pub fn render_index(
    solutions: &[IndexEntry],
    docs: &[IndexEntry],
    keywords: &[(String, usize)],
) -> String {
    let mut out = String::new();

    out.push_str("# Knowledge Index\n\n");
    out.push_str("Auto-generated overview of the local knowledge store. Do not edit by hand.\n\n");

    out.push_str("## Overview\n\n");
    out.push_str(&format!("- Solutions: {}\n", solutions.len()));
    out.push_str(&format!("- Docs: {}\n\n", docs.len()));

    render_section(&mut out, "Solutions", "solutions", solutions);
    render_section(&mut out, "Docs", "docs", docs);

    out.push_str("## Technology Keywords\n\n");
    if keywords.is_empty() {
        out.push_str("(none detected)\n");
    } else {
        for (keyword, count) in keywords {
            out.push_str(&format!("- {keyword}: {count}\n"));
        }
    }

    out
}

fn render_section(out: &mut String, title: &str, dir: &str, entries: &[IndexEntry]) {
    out.push_str(&format!("## {title}\n\n"));
    if entries.is_empty() {
        out.push_str("(empty)\n\n");
        return;
    }
    for entry in entries {
        out.push_str(&format!("- `{dir}/{}`: {}\n", entry.name, entry.summary));
    }
    out.push('\n');
}
