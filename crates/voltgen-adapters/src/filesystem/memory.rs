//! In-memory file writer for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use voltgen_core::{
    application::ports::FileWriter,
    error::{VoltError, VoltResult},
};

/// In-memory file writer. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileWriter {
    inner: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemoryFileWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let files = self.inner.read().ok()?;
        files.get(path).cloned()
    }

    /// List all written files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl FileWriter for MemoryFileWriter {
    fn write(&self, path: &Path, content: &str) -> VoltResult<()> {
        let mut files = self.inner.write().map_err(|_| VoltError::Internal {
            message: "memory writer lock poisoned".into(),
        })?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_files() {
        let writer = MemoryFileWriter::new();
        let handle = writer.clone();
        let path = Path::new("/app/Livewire/Posts/Cards.php");

        writer.write(path, "<div></div>").unwrap();

        assert!(handle.exists(path));
        assert_eq!(handle.read_file(path).as_deref(), Some("<div></div>"));
        assert_eq!(handle.list_files(), vec![path.to_path_buf()]);
    }
}
