//! Tool request and response types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every tool operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
    /// ISO 8601 timestamp of the response.
    pub timestamp: String,
}

impl ToolResponse {
    /// Successful response.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Option<serde_json::Value>, timestamp: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            timestamp,
        }
    }

    /// Failed response. Never carries data.
    #[must_use]
    pub fn fail(message: impl Into<String>, timestamp: String) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp,
        }
    }
}

/// Caller-declared urgency for `how_to_solve`. Validated, echoed back,
/// and deliberately not used to perturb ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Canonical lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority string outside the recognized set.
#[derive(Debug, thiserror::Error)]
#[error("Unknown priority '{0}' (expected low, medium or high)")]
pub struct InvalidPriority(pub String);

/// Parameters of the `how_to_solve` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HowToSolveRequest {
    pub problem: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Parameters of the `record_insight` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordInsightRequest {
    pub task: String,
    pub solution: String,
    pub reasoning: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_files: Vec<String>,
}

/// Parameters of the `init_facts_system` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRequest {
    #[serde(default)]
    pub project_path: Option<String>,
    #[serde(default)]
    pub enable_auto_capture: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let resp = ToolResponse::ok(
            "done",
            Some(serde_json::json!({"count": 1})),
            "2024-06-01T12:00:00+00:00".to_string(),
        );
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""message":"done""#));
        assert!(json.contains(r#""timestamp""#));

        let parsed: ToolResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resp);
    }

    #[test]
    fn test_fail_envelope_has_no_data() {
        let resp = ToolResponse::fail("boom", "2024-06-01T12:00:00+00:00".to_string());
        assert!(!resp.success);
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_priority_from_str() {
        use std::str::FromStr;
        assert_eq!(Priority::from_str("High").unwrap(), Priority::High);
        assert_eq!(Priority::from_str(" low ").unwrap(), Priority::Low);
        assert!(Priority::from_str("urgent").is_err());
    }

    #[test]
    fn test_record_request_camel_case_wire_format() {
        let json = r#"{
            "task": "t",
            "solution": "s",
            "reasoning": "r",
            "category": "technical",
            "relatedFiles": ["src/a.rs"]
        }"#;
        let req: RecordInsightRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.related_files, vec!["src/a.rs"]);
        assert!(req.confidence.is_none());
    }

    #[test]
    fn test_init_request_defaults() {
        let req: InitRequest = serde_json::from_str("{}").unwrap();
        assert!(req.project_path.is_none());
        assert!(req.enable_auto_capture.is_none());
    }
}
