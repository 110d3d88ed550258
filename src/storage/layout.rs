//! On-disk layout of a knowledge store root.
//!
//! A store root contains `USER_COMMAND.md` (project commands),
//! `KNOWLEDGE.md` (generated index) and the two document collections
//! `solutions/` and `docs/`.

use std::path::{Path, PathBuf};

/// Name of the project commands file.
pub const COMMANDS_FILE: &str = "USER_COMMAND.md";
/// Name of the generated index document.
pub const INDEX_FILE: &str = "KNOWLEDGE.md";
/// Directory holding recorded insights.
pub const SOLUTIONS_DIR: &str = "solutions";
/// Directory holding reference excerpts.
pub const DOCS_DIR: &str = "docs";

/// Resolves canonical sub-paths under a store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    /// Create a layout rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the solutions collection.
    #[must_use]
    pub fn solutions_dir(&self) -> PathBuf {
        self.root.join(SOLUTIONS_DIR)
    }

    /// Path of the docs collection.
    #[must_use]
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(DOCS_DIR)
    }

    /// Path of the project commands file.
    #[must_use]
    pub fn commands_file(&self) -> PathBuf {
        self.root.join(COMMANDS_FILE)
    }

    /// Path of the generated index document.
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// The directories ensured by initialization: root, solutions, docs.
    #[must_use]
    pub fn directories(&self) -> [PathBuf; 3] {
        [self.root.clone(), self.solutions_dir(), self.docs_dir()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = StoreLayout::new("/tmp/facts");
        assert_eq!(layout.solutions_dir(), PathBuf::from("/tmp/facts/solutions"));
        assert_eq!(layout.docs_dir(), PathBuf::from("/tmp/facts/docs"));
        assert_eq!(
            layout.commands_file(),
            PathBuf::from("/tmp/facts/USER_COMMAND.md")
        );
        assert_eq!(layout.index_file(), PathBuf::from("/tmp/facts/KNOWLEDGE.md"));
    }

    #[test]
    fn test_directories_cover_root_and_collections() {
        let layout = StoreLayout::new("/tmp/facts");
        let dirs = layout.directories();
        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[0], PathBuf::from("/tmp/facts"));
    }
}
