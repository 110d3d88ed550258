//! Storage abstraction for the knowledge store.
//!
//! All disk access goes through the [`Storage`] trait so the store logic can
//! be exercised against temporary roots in tests. The production
//! implementation is [`FsStorage`] over `tokio::fs`.

mod error;
mod fs;
mod layout;

pub use error::*;
pub use fs::*;
pub use layout::*;

use std::path::Path;

use async_trait::async_trait;

/// Asynchronous file storage backend.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Check whether a path exists.
    async fn exists(&self, path: &Path) -> bool;

    /// Read a file to a string.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the path does not exist, or
    /// [`StorageError::Io`] for any other I/O failure.
    async fn read(&self, path: &Path) -> Result<String, StorageError>;

    /// Write a string to a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the write fails.
    async fn write(&self, path: &Path, content: &str) -> Result<(), StorageError>;

    /// List entry names in a directory.
    ///
    /// Returns an empty vec if the directory does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory exists but cannot be read.
    async fn list(&self, dir: &Path) -> Result<Vec<String>, StorageError>;

    /// Recursively create a directory. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if creation fails.
    async fn mkdir(&self, path: &Path) -> Result<(), StorageError>;
}
