//! Configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::SearchOptions;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    /// Store root directory.
    pub root: PathBuf,
    /// Search defaults.
    pub search: SearchConfig,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".facts"),
            search: SearchConfig::default(),
        }
    }
}

/// Search defaults, overridable per CLI invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Documents scoring below this are excluded.
    pub min_relevance: f32,
    /// Maximum number of scored documents returned.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_relevance: 0.5,
            max_results: 10,
        }
    }
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        Self {
            min_relevance: config.min_relevance,
            max_results: config.max_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FactsConfig::default();
        assert_eq!(config.root, PathBuf::from(".facts"));
        assert!((config.search.min_relevance - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.search.max_results, 10);
    }

    #[test]
    fn test_search_config_into_options() {
        let options: SearchOptions = SearchConfig {
            min_relevance: 0.3,
            max_results: 5,
        }
        .into();
        assert!((options.min_relevance - 0.3).abs() < f32::EPSILON);
        assert_eq!(options.max_results, 5);
    }
}
