//! Filesystem storage backend over `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;

use super::{Storage, StorageError};

/// Storage backend reading and writing real files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl FsStorage {
    /// Create a new filesystem storage backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Storage for FsStorage {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> Result<String, StorageError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StorageError::from_io(path.to_path_buf(), e))
    }

    async fn write(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::from_io(parent.to_path_buf(), e))?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| StorageError::from_io(path.to_path_buf(), e))
    }

    async fn list(&self, dir: &Path) -> Result<Vec<String>, StorageError> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::from_io(dir.to_path_buf(), e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::from_io(dir.to_path_buf(), e))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    async fn mkdir(&self, path: &Path) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| StorageError::from_io(path.to_path_buf(), e))
    }
}
