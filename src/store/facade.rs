//! Knowledge store facade.
//!
//! [`FactStore`] owns all storage access and composes header parsing,
//! scoring, command matching, the insight writer and the index builder into
//! four operations: `search`, `record`, `context` and `initialize`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::future::join_all;

use crate::clock::Clock;
use crate::storage::{Storage, StoreLayout};

use super::{
    insight_filename, keyword_counts, parse_commands, parse_document, render_index,
    render_insight, score, summarize, Document, FactDocument, IndexEntry, InsightRecord,
    ProjectContext, SearchOptions, StoreError,
};

/// The file-backed knowledge store.
pub struct FactStore {
    layout: StoreLayout,
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
}

impl FactStore {
    /// Create a store over the given layout, storage backend and clock.
    #[must_use]
    pub fn new(layout: StoreLayout, storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            layout,
            storage,
            clock,
        }
    }

    /// The on-disk layout of this store.
    #[must_use]
    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Idempotently ensure the root and both collection directories exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a directory cannot be created.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        for dir in self.layout.directories() {
            self.storage.mkdir(&dir).await?;
        }
        tracing::info!(root = %self.layout.root().display(), "Knowledge store initialized");
        Ok(())
    }

    /// Relevance-ranked search: matched project commands first (pinned to
    /// 1.0), then scored documents above the threshold.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a collection listing fails. Individual
    /// unreadable files are skipped.
    pub async fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<FactDocument>, StoreError> {
        let mut results = self.matching_commands(query).await;
        let command_count = results.len();

        let documents = self.scan_all().await?;
        let mut scored: Vec<FactDocument> = documents
            .iter()
            .filter_map(|doc| {
                let relevance = score(query, doc);
                if relevance < options.min_relevance {
                    return None;
                }
                Some(document_to_fact(doc, relevance))
            })
            .collect();

        scored.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        scored.truncate(options.max_results);
        results.extend(scored);

        tracing::debug!(
            query = %query,
            commands = command_count,
            documents = results.len() - command_count,
            "Search complete"
        );
        Ok(results)
    }

    /// Persist an insight as a new solutions document, then rebuild the
    /// index. A failed rebuild is logged but never fails the write.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the document write fails.
    pub async fn record(&self, record: &InsightRecord) -> Result<PathBuf, StoreError> {
        let created_date = self.clock.now().format("%Y-%m-%d").to_string();
        let path = self.layout.solutions_dir().join(insight_filename(record));
        let text = render_insight(record, &created_date);

        self.storage.write(&path, &text).await?;
        tracing::info!(path = %path.display(), category = %record.category, "Insight recorded");

        if let Err(e) = self.rebuild_index().await {
            tracing::warn!(error = %e, "Index rebuild failed after record; insight is durable");
        }
        Ok(path)
    }

    /// Regenerate `KNOWLEDGE.md` from the current collection state.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a listing or the index write fails.
    /// Unreadable documents are skipped.
    pub async fn rebuild_index(&self) -> Result<(), StoreError> {
        let solutions = self.scan_collection(&self.layout.solutions_dir()).await?;
        let docs = self.scan_collection(&self.layout.docs_dir()).await?;

        let filenames: Vec<String> = solutions
            .iter()
            .chain(docs.iter())
            .filter_map(|d| d.path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        let keywords = keyword_counts(&filenames);

        let index = render_index(
            &collection_entries(&solutions),
            &collection_entries(&docs),
            &keywords,
        );
        self.storage.write(&self.layout.index_file(), &index).await?;
        tracing::debug!(
            solutions = solutions.len(),
            docs = docs.len(),
            "Index rebuilt"
        );
        Ok(())
    }

    /// Aggregate snapshot of the collection state.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a collection listing fails.
    pub async fn context(&self) -> Result<ProjectContext, StoreError> {
        let has_local_docs = self.storage.exists(&self.layout.solutions_dir()).await
            || self.storage.exists(&self.layout.docs_dir()).await;

        let documents = self.scan_all().await?;
        let categories: BTreeSet<String> = documents
            .iter()
            .map(|d| d.category().as_str().to_string())
            .collect();

        let last_updated = documents
            .iter()
            .map(Document::created_date)
            .filter(|d| !d.is_empty())
            .max()
            .map_or_else(|| self.clock.now().to_rfc3339(), String::from);

        Ok(ProjectContext {
            has_local_docs,
            fact_count: documents.len(),
            categories: categories.into_iter().collect(),
            last_updated,
        })
    }

    /// Commands matching the query, as synthetic maximal-relevance results.
    ///
    /// A missing or unreadable commands file yields no commands; the
    /// ordinary pipeline runs alone.
    async fn matching_commands(&self, query: &str) -> Vec<FactDocument> {
        let commands_path = self.layout.commands_file();
        let content = match self.storage.read(&commands_path).await {
            Ok(content) => content,
            Err(crate::storage::StorageError::NotFound(_)) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable commands file");
                return Vec::new();
            }
        };

        parse_commands(&content)
            .iter()
            .filter(|cmd| cmd.matches(query))
            .map(|cmd| cmd.to_fact(&commands_path))
            .collect()
    }

    /// All documents across both collections, solutions first.
    async fn scan_all(&self) -> Result<Vec<Document>, StoreError> {
        let mut documents = self.scan_collection(&self.layout.solutions_dir()).await?;
        documents.extend(self.scan_collection(&self.layout.docs_dir()).await?);
        Ok(documents)
    }

    /// Read and parse every `*.md` file in one collection directory.
    ///
    /// Reads fan out in parallel; result order follows the directory
    /// listing. Per-file read failures are logged and skipped.
    async fn scan_collection(&self, dir: &Path) -> Result<Vec<Document>, StoreError> {
        let names = self.storage.list(dir).await?;
        let paths: Vec<PathBuf> = names
            .iter()
            .filter(|name| name.ends_with(".md"))
            .map(|name| dir.join(name))
            .collect();

        let reads = join_all(paths.iter().map(|path| self.storage.read(path))).await;

        let mut documents = Vec::with_capacity(paths.len());
        for (path, read) in paths.into_iter().zip(reads) {
            match read {
                Ok(text) => documents.push(parse_document(path, &text)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable document");
                }
            }
        }
        Ok(documents)
    }
}

/// Index entries for one collection, in listing order.
fn collection_entries(documents: &[Document]) -> Vec<IndexEntry> {
    documents
        .iter()
        .map(|doc| IndexEntry {
            name: doc
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            summary: summarize(&doc.body),
        })
        .collect()
}

/// Build a search result from a scored document.
fn document_to_fact(doc: &Document, score: f32) -> FactDocument {
    FactDocument {
        path: doc.path.to_string_lossy().into_owned(),
        title: doc.title(),
        category: doc.category_label(),
        relevance_score: score,
        summary: summarize(&doc.body),
        last_updated: doc.created_date().to_string(),
        related_docs: None,
    }
}
