//! Local filesystem writer using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;
use voltgen_core::{
    application::{ApplicationError, ports::FileWriter},
    error::{VoltError, VoltResult},
};

/// Production file writer using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileWriter;

impl LocalFileWriter {
    /// Create a new local file writer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter for LocalFileWriter {
    fn write(&self, path: &Path, content: &str) -> VoltResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }

        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        debug!(path = %path.display(), bytes = content.len(), "file written");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> VoltError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
