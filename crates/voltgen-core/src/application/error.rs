//! Application layer errors.
//!
//! These errors represent failures reaching the outside world through the
//! ports, not invalid requests. Request errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during generation orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The model resolver does not know the requested model.
    #[error("Model '{name}' not found")]
    ModelNotFound { name: String },

    /// Neither a project override nor a packaged stub exists.
    #[error("No template found for {kind} (looked for {stub})")]
    TemplateNotFound { kind: ArtifactKind, stub: String },

    /// The schema provider could not list the table's columns.
    #[error("Schema unavailable for table '{table}': {reason}")]
    SchemaUnavailable { table: String, reason: String },

    /// A schema manifest exists but cannot be read.
    #[error("Invalid schema manifest {path}: {reason}")]
    SchemaInvalid { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModelNotFound { name } => vec![
                format!("Declare '{name}' under [[models]] in your schema manifest"),
                "Or pass --schema to point at a different manifest".into(),
            ],
            Self::TemplateNotFound { stub, .. } => vec![
                format!("Add stubs/{stub} to your project"),
                "Or enable the packaged stubs in your configuration".into(),
            ],
            Self::SchemaUnavailable { table, .. } => vec![
                format!("Declare the columns of '{table}' under [tables] in your schema manifest"),
            ],
            Self::SchemaInvalid { path, .. } => vec![
                format!("Check the TOML syntax of {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelNotFound { .. }
            | Self::TemplateNotFound { .. }
            | Self::SchemaUnavailable { .. } => ErrorCategory::NotFound,
            Self::SchemaInvalid { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
