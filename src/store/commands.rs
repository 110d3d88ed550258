//! Project command parsing and matching.
//!
//! The commands file (`USER_COMMAND.md`) holds mandatory project directives
//! as level-2 markdown sections. Field labels inside a section are bilingual
//! ("description"/"描述", "related docs"/"相关文档", "last updated"/"更新时间").
//! Matched commands outrank every scored document: they are returned with a
//! pinned relevance of 1.0 and prepended to search results.

use std::path::Path;

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};

use super::FactDocument;

/// A directive extracted from the commands file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub last_updated: Option<String>,
    pub related_docs: Vec<String>,
}

impl Command {
    /// Whether any whitespace token of the query appears in the command
    /// name or description (case-insensitive substring).
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let name_lower = self.name.to_lowercase();
        let desc_lower = self.description.to_lowercase();
        query
            .to_lowercase()
            .split_whitespace()
            .any(|token| name_lower.contains(token) || desc_lower.contains(token))
    }

    /// Convert to a synthetic search result pinned to maximal relevance.
    #[must_use]
    pub fn to_fact(&self, commands_path: &Path) -> FactDocument {
        FactDocument {
            path: commands_path.to_string_lossy().into_owned(),
            title: self.name.clone(),
            category: "command".to_string(),
            relevance_score: 1.0,
            summary: self.description.clone(),
            last_updated: self.last_updated.clone().unwrap_or_default(),
            related_docs: if self.related_docs.is_empty() {
                None
            } else {
                Some(self.related_docs.clone())
            },
        }
    }
}

/// Parse the commands file into discrete commands.
///
/// Sections without a name and without a description are dropped. Never
/// fails; unparsable content simply yields no commands.
#[must_use]
pub fn parse_commands(content: &str) -> Vec<Command> {
    let arena = Arena::new();
    let options = Options::default();
    let root = parse_document(&arena, content, &options);

    let mut commands = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_lines: Vec<String> = Vec::new();

    for node in root.children() {
        match &node.data.borrow().value {
            NodeValue::Heading(heading) if heading.level == 2 => {
                if let Some(name) = current_name.take() {
                    if let Some(cmd) = section_to_command(name, &current_lines) {
                        commands.push(cmd);
                    }
                }
                current_lines.clear();
                current_name = Some(extract_text(node));
            }
            NodeValue::Heading(_) => {
                // Deeper or top-level headings do not start a new command.
            }
            _ => {
                if current_name.is_some() {
                    let text = node_to_text(node);
                    current_lines.extend(text.lines().map(String::from));
                }
            }
        }
    }

    if let Some(name) = current_name {
        if let Some(cmd) = section_to_command(name, &current_lines) {
            commands.push(cmd);
        }
    }

    commands
}

/// Build a command from a section name and its content lines.
fn section_to_command(name: String, lines: &[String]) -> Option<Command> {
    let mut description: Option<String> = None;
    let mut fallback_description: Option<String> = None;
    let mut last_updated: Option<String> = None;
    let mut related_docs: Vec<String> = Vec::new();

    for raw in lines {
        let line = strip_line_markers(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(value) = labeled_value(line, &["description", "描述"]) {
            if description.is_none() {
                description = Some(value);
            }
        } else if let Some(value) = labeled_value(line, &["related docs", "相关文档"]) {
            related_docs.extend(
                value
                    .split([',', '，'])
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(String::from),
            );
        } else if let Some(value) = labeled_value(line, &["last updated", "更新时间"]) {
            if last_updated.is_none() {
                last_updated = Some(value);
            }
        } else if fallback_description.is_none() {
            fallback_description = Some(line.to_string());
        }
    }

    let name = name.trim().to_string();
    let description = description.or(fallback_description).unwrap_or_default();
    if name.is_empty() && description.is_empty() {
        return None;
    }

    Some(Command {
        name,
        description,
        last_updated,
        related_docs,
    })
}

/// Strip list bullets and bold markers from a content line.
fn strip_line_markers(line: &str) -> &str {
    let line = line.trim();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .unwrap_or(line);
    line.trim_matches('*').trim()
}

/// If the line starts with one of the labels followed by a colon (ASCII or
/// full-width), return the trimmed value after it.
fn labeled_value(line: &str, labels: &[&str]) -> Option<String> {
    let line_lower = line.to_lowercase();
    for label in labels {
        if let Some(rest) = line_lower.strip_prefix(label) {
            let rest = rest.trim_start().trim_start_matches('*');
            if let Some(stripped) = rest.strip_prefix(':').or_else(|| rest.strip_prefix('：')) {
                // Recover the original-cased value by offset from the end.
                let value_len = stripped.trim_start().chars().count();
                let value: String = line
                    .chars()
                    .skip(line.chars().count().saturating_sub(value_len))
                    .collect();
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// Extract plain text from a heading node.
fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().to_string()
}

/// Recursively collect text, preserving line structure.
fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => out.push_str(t),
        NodeValue::Code(c) => out.push_str(&c.literal),
        NodeValue::CodeBlock(cb) => out.push_str(&cb.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
        NodeValue::Item(_) => {
            out.push_str("- ");
            for child in node.children() {
                collect_text(child, out);
            }
            out.push('\n');
        }
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Convert a block node to approximate plain text.
fn node_to_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}
