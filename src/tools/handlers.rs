//! Tool operation handlers.
//!
//! Each handler validates its inputs before touching storage, delegates to
//! the store facade, and folds any error into the response envelope.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::json;

use crate::clock::Clock;
use crate::storage::{Storage, StoreLayout};
use crate::store::{Category, Confidence, FactStore, InsightRecord, SearchOptions};

use super::{HowToSolveRequest, InitRequest, Priority, RecordInsightRequest, ToolResponse};

/// Tool layer over the knowledge store.
pub struct FactsTools {
    default_root: PathBuf,
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
}

impl FactsTools {
    /// Create the tool layer with a default store root.
    #[must_use]
    pub fn new(default_root: PathBuf, storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            default_root,
            storage,
            clock,
        }
    }

    /// Search the store for prior solutions to a problem.
    pub async fn how_to_solve(&self, request: HowToSolveRequest) -> ToolResponse {
        let priority = match request.priority.as_deref() {
            None => Priority::default(),
            Some(raw) => match Priority::from_str(raw) {
                Ok(p) => p,
                Err(e) => return ToolResponse::fail(e.to_string(), self.timestamp()),
            },
        };

        // Context and constraints widen the lexical query.
        let mut query = request.problem.clone();
        if let Some(context) = &request.context {
            query.push(' ');
            query.push_str(context);
        }
        if let Some(constraints) = &request.constraints {
            query.push(' ');
            query.push_str(constraints);
        }

        let store = self.store(None);
        match store.search(&query, SearchOptions::default()).await {
            Ok(results) => {
                let message = if results.is_empty() {
                    "No relevant knowledge found".to_string()
                } else {
                    format!("Found {} relevant result(s)", results.len())
                };
                ToolResponse::ok(
                    message,
                    Some(json!({
                        "results": results,
                        "priority": priority.as_str(),
                    })),
                    self.timestamp(),
                )
            }
            Err(e) => {
                tracing::warn!(error = %e, "how_to_solve failed");
                ToolResponse::fail(format!("Search failed: {e}"), self.timestamp())
            }
        }
    }

    /// Record a solved problem as a new insight document.
    pub async fn record_insight(&self, request: RecordInsightRequest) -> ToolResponse {
        // Validation happens before any storage access.
        let category = match Category::from_str(&request.category) {
            Ok(c) => c,
            Err(e) => return ToolResponse::fail(e.to_string(), self.timestamp()),
        };
        let confidence = match request.confidence.as_deref() {
            None => Confidence::default(),
            Some(raw) => match Confidence::from_str(raw) {
                Ok(c) => c,
                Err(e) => return ToolResponse::fail(e.to_string(), self.timestamp()),
            },
        };

        let record = InsightRecord {
            task: request.task,
            solution: request.solution,
            reasoning: request.reasoning,
            evidence: request.evidence,
            category,
            confidence,
            tags: request.tags,
            related_files: request.related_files,
        };

        let store = self.store(None);
        match store.record(&record).await {
            Ok(path) => ToolResponse::ok(
                "Insight recorded",
                Some(json!({ "path": path.to_string_lossy() })),
                self.timestamp(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "record_insight failed");
                ToolResponse::fail(format!("Failed to record insight: {e}"), self.timestamp())
            }
        }
    }

    /// Initialize the store directories, optionally at an explicit root.
    pub async fn init_facts_system(&self, request: InitRequest) -> ToolResponse {
        let root = request.project_path.clone().map(PathBuf::from);
        let store = self.store(root);
        let root_display = store.layout().root().display().to_string();
        let auto_capture = request.enable_auto_capture.unwrap_or(false);

        match store.initialize().await {
            Ok(()) => ToolResponse::ok(
                format!("Facts system initialized at {root_display}"),
                Some(json!({
                    "root": root_display,
                    "autoCapture": auto_capture,
                })),
                self.timestamp(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "init_facts_system failed");
                ToolResponse::fail(format!("Initialization failed: {e}"), self.timestamp())
            }
        }
    }

    fn store(&self, root: Option<PathBuf>) -> FactStore {
        let root = root.unwrap_or_else(|| self.default_root.clone());
        FactStore::new(
            StoreLayout::new(root),
            Arc::clone(&self.storage),
            Arc::clone(&self.clock),
        )
    }

    fn timestamp(&self) -> String {
        self.clock.now().to_rfc3339()
    }
}
