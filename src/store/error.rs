//! Knowledge store error types.

use crate::storage::StorageError;

/// Errors that can occur in knowledge store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A storage operation failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Caller supplied a category outside the recognized set.
    #[error("Unknown category '{0}' (expected technical, process, decision or pattern)")]
    InvalidCategory(String),

    /// Caller supplied a confidence outside the recognized set.
    #[error("Unknown confidence '{0}' (expected high, medium or low)")]
    InvalidConfidence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_display() {
        let err = StoreError::InvalidCategory("magic".to_string());
        assert!(err.to_string().contains("magic"));
        assert!(err.to_string().contains("technical"));
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let inner = StorageError::NotFound(std::path::PathBuf::from("/x"));
        let msg = inner.to_string();
        let err = StoreError::from(inner);
        assert_eq!(err.to_string(), msg);
    }
}
