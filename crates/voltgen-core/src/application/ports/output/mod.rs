//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what generation needs from the outside world.
//! The `voltgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, ColumnMetadata, ModelDefinition, SqlType};
use crate::error::VoltResult;

/// Port for turning a model name into its class, table and fillable list.
///
/// Implemented by:
/// - `voltgen_adapters::schema::ManifestSchema` (TOML manifest)
/// - `voltgen_adapters::schema::InMemorySchema` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ModelResolver: Send + Sync {
    /// Resolve `name`, failing with `ModelNotFound`.
    fn resolve(&self, name: &str) -> VoltResult<ModelDefinition>;
}

/// Port for column metadata of a table.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaProvider: Send + Sync {
    /// All columns of `table`, in table order.
    fn list_columns(&self, table: &str) -> VoltResult<Vec<ColumnMetadata>>;

    /// Type of one column, or `None` if the table has no such column.
    fn column_type(&self, table: &str, column: &str) -> VoltResult<Option<SqlType>>;
}

/// Port for stub template text.
///
/// Implemented by:
/// - `voltgen_adapters::templates::StubTemplateSource` (project override,
///   then packaged stub)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Load the template for `kind`, failing with `TemplateNotFound`.
    fn load_template(&self, kind: ArtifactKind) -> VoltResult<String>;
}

/// Port for writing generated files.
///
/// Implemented by:
/// - `voltgen_adapters::filesystem::LocalFileWriter` (production)
/// - `voltgen_adapters::filesystem::MemoryFileWriter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait FileWriter: Send + Sync {
    /// Write `content` to `path`, creating parent directories and
    /// overwriting any existing file.
    fn write(&self, path: &Path, content: &str) -> VoltResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
