//! Knowledge store data types.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StoreError;

/// Kind of insight being recorded.
///
/// `Unknown` is produced only when parsing a stored document whose header
/// carries an unrecognized category; it is never accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Process,
    Decision,
    Pattern,
    #[serde(skip)]
    Unknown,
}

impl Category {
    /// Lenient parse used on stored document headers: unrecognized values
    /// fall back to `Unknown` instead of erroring a scan.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Unknown)
    }

    /// Canonical lower-case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Pattern => "pattern",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "process" => Ok(Self::Process),
            "decision" => Ok(Self::Decision),
            "pattern" => Ok(Self::Pattern),
            other => Err(StoreError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How validated the recorded solution is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl Confidence {
    /// Canonical lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Human-readable description embedded in stored documents.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::High => "thoroughly validated",
            Self::Medium => "workable but context-dependent",
            Self::Low => "experimental, needs further validation",
        }
    }

    /// Description for a raw header value, tolerating unknown strings.
    #[must_use]
    pub fn describe_raw(value: &str) -> &'static str {
        Self::from_str(value).map_or("unassessed", Self::description)
    }
}

impl FromStr for Confidence {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(StoreError::InvalidConfidence(other.to_string())),
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured record of a solved problem, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    /// What was being attempted.
    pub task: String,
    /// What solved it.
    pub solution: String,
    /// Why the solution works.
    pub reasoning: String,
    /// Supporting evidence lines.
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Required insight kind; drives both the header and the filename.
    pub category: Category,
    /// Defaults to medium.
    #[serde(default)]
    pub confidence: Confidence,
    /// Searchable tags stored in the header.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Files this insight relates to.
    #[serde(default)]
    pub related_files: Vec<String>,
}

/// A persisted document: parsed header plus free-form body.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique location key.
    pub path: PathBuf,
    /// Parsed `key: value` header fields.
    pub header: HashMap<String, String>,
    /// Text following the header block.
    pub body: String,
}

impl Document {
    /// Title from the header, falling back to the filename stem.
    #[must_use]
    pub fn title(&self) -> String {
        let from_header = self.header.get("title").map(String::as_str).unwrap_or("");
        if from_header.is_empty() {
            self.path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            from_header.to_string()
        }
    }

    /// Category from the header, `technical` if absent, `unknown` if
    /// unrecognized.
    #[must_use]
    pub fn category(&self) -> Category {
        self.header
            .get("category")
            .map_or(Category::Technical, |v| Category::parse_lenient(v))
    }

    /// Category label for display: the raw header value lower-cased, so an
    /// unrecognized category shows verbatim; `technical` when absent.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.header
            .get("category")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "technical".to_string())
    }

    /// Tags from the header. A bare string without separators is a
    /// one-element sequence.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.header.get("tags").map_or_else(Vec::new, |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
    }

    /// Creation date from the header, empty string if absent.
    #[must_use]
    pub fn created_date(&self) -> &str {
        self.header
            .get("created_date")
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A relevance-ranked search hit. Derived per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactDocument {
    /// Location of the backing document (or commands file for commands).
    pub path: String,
    pub title: String,
    pub category: String,
    /// Score in [0, 1]; commands are pinned to 1.0.
    pub relevance_score: f32,
    pub summary: String,
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_docs: Option<Vec<String>>,
}

/// Aggregate snapshot of the collection state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    /// Whether the document collection exists on disk.
    pub has_local_docs: bool,
    /// Total number of documents across both collections.
    pub fact_count: usize,
    /// Distinct categories observed, sorted.
    pub categories: Vec<String>,
    /// Most recent `created_date`, or "now" when none is recorded.
    pub last_updated: String,
}

/// Knobs for a search call.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Documents scoring below this are excluded.
    pub min_relevance: f32,
    /// Maximum number of scored documents returned.
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_relevance: 0.5,
            max_results: 10,
        }
    }
}
