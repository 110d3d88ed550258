//! Colored CLI display utilities.
//!
//! This module provides functions for printing colored, formatted output
//! for search results, context snapshots and store operations.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::store::{FactDocument, ProjectContext};

/// Maximum length for truncated display strings.
const DEFAULT_MAX_LEN: usize = 100;

/// Truncate a string to a maximum length, adding ellipsis if truncated.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Print a ranked list of search results.
pub fn print_results(results: &[FactDocument]) {
    if results.is_empty() {
        println!("{} no results", "[SEARCH]".blue().bold());
        let _ = io::stdout().flush();
        return;
    }

    for result in results {
        if result.category == "command" {
            println!(
                "{} {} - {}",
                "[COMMAND]".magenta().bold(),
                result.title.bold(),
                truncate(&result.summary, DEFAULT_MAX_LEN)
            );
            if let Some(docs) = &result.related_docs {
                println!("          see: {}", docs.join(", ").dimmed());
            }
        } else {
            println!(
                "{} {:.2} {} {} ({})",
                "[HIT]".green().bold(),
                result.relevance_score,
                result.title.bold(),
                result.category.cyan(),
                result.path.dimmed()
            );
            println!("       {}", truncate(&result.summary, DEFAULT_MAX_LEN).dimmed());
        }
    }
    let _ = io::stdout().flush();
}

/// Print a project context snapshot.
pub fn print_context(context: &ProjectContext) {
    println!(
        "{} local docs: {}, facts: {}",
        "[CONTEXT]".blue().bold(),
        if context.has_local_docs { "yes".green().to_string() } else { "no".red().to_string() },
        context.fact_count
    );
    if !context.categories.is_empty() {
        println!("          categories: {}", context.categories.join(", ").cyan());
    }
    println!("          last updated: {}", context.last_updated.dimmed());
    let _ = io::stdout().flush();
}

/// Print the path of a freshly recorded insight.
pub fn print_recorded(path: &str) {
    println!("{} {}", "[RECORDED]".green().bold(), path);
    let _ = io::stdout().flush();
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
    let _ = io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 3), "...");
        assert_eq!(truncate("hello", 0), "...");
    }

    #[test]
    fn test_truncate_multibyte_does_not_panic() {
        let s = "中".repeat(20);
        let t = truncate(&s, 10);
        assert!(t.ends_with("..."));
        assert_eq!(t.chars().count(), 10);
    }
}
