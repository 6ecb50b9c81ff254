//! TOML schema manifest.
//!
//! Declares the models a project exposes and the ordered columns of their
//! tables. One file serves both the model resolver and the schema provider.
//!
//! # `volt-schema.toml` format
//!
//! ```toml
//! model_namespace = "App\\Models"      # optional, default shown
//!
//! [[models]]
//! name     = "Product"
//! class    = "App\\Models\\Product"    # optional
//! table    = "products"                # optional, default: snake plural
//! fillable = ["name", "price", "is_active"]
//!
//! [models.rules]                       # optional validation overrides
//! price = "required|numeric|min:0"
//!
//! [tables]
//! products = [
//!     { name = "id",        type = "bigint" },
//!     { name = "name",      type = "string" },
//!     { name = "price",     type = "decimal(8,2)" },
//!     { name = "is_active", type = "boolean" },
//! ]
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use voltgen_core::{
    application::{
        ApplicationError,
        ports::{ModelResolver, SchemaProvider},
    },
    domain::{ColumnMetadata, ModelDefinition, SqlType, entities::column::default_table, inflector},
    error::VoltResult,
};

/// Default manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "volt-schema.toml";

const DEFAULT_MODEL_NAMESPACE: &str = "App\\Models";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised `volt-schema.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaManifest {
    #[serde(default)]
    pub model_namespace: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<ColumnMetadata>>,
}

/// One `[[models]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub fillable: Vec<String>,
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
enum ManifestError {
    #[error("failed to read: {0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] toml::de::Error),

    #[error("model '{0}' is declared more than once")]
    DuplicateModel(String),
}

impl ModelEntry {
    fn definition(&self, namespace: &str) -> ModelDefinition {
        let name = inflector::studly(&self.name);
        let mut model = ModelDefinition::new(name.clone(), namespace)
            .with_table(self.table.clone().unwrap_or_else(|| default_table(&name)))
            .with_fillable(self.fillable.iter().cloned());
        if let Some(class) = &self.class {
            model.class = class.clone();
        }
        model.rules = self.rules.clone();
        model
    }
}

// ── Adapter ───────────────────────────────────────────────────────────────────

/// Resolver and schema provider backed by a [`SchemaManifest`].
#[derive(Debug, Clone)]
pub struct ManifestSchema {
    source: PathBuf,
    models: BTreeMap<String, ModelDefinition>,
    tables: BTreeMap<String, Vec<ColumnMetadata>>,
}

impl ManifestSchema {
    /// Load and validate the manifest at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> VoltResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(ManifestError::from)
            .map_err(|e| invalid(path, &e))?;
        Self::parse(path, &raw)
    }

    /// Parse manifest text; `source` only labels errors.
    pub fn from_toml(source: impl Into<PathBuf>, raw: &str) -> VoltResult<Self> {
        let source = source.into();
        Self::parse(&source, raw)
    }

    /// Adapter over an already-built manifest.
    pub fn from_manifest(
        source: impl Into<PathBuf>,
        manifest: SchemaManifest,
    ) -> VoltResult<Self> {
        let source = source.into();
        Self::build(&source, manifest).map_err(|e| invalid(&source, &e))
    }

    fn parse(source: &Path, raw: &str) -> VoltResult<Self> {
        let manifest: SchemaManifest = toml::from_str(raw)
            .map_err(ManifestError::from)
            .map_err(|e| invalid(source, &e))?;
        Self::build(source, manifest).map_err(|e| invalid(source, &e))
    }

    fn build(source: &Path, manifest: SchemaManifest) -> Result<Self, ManifestError> {
        let namespace = manifest
            .model_namespace
            .as_deref()
            .unwrap_or(DEFAULT_MODEL_NAMESPACE);

        let mut models = BTreeMap::new();
        for entry in &manifest.models {
            let model = entry.definition(namespace);
            if models.contains_key(&model.name) {
                return Err(ManifestError::DuplicateModel(model.name));
            }
            models.insert(model.name.clone(), model);
        }

        debug!(
            models = models.len(),
            tables = manifest.tables.len(),
            "schema manifest loaded"
        );
        Ok(Self {
            source: source.to_path_buf(),
            models,
            tables: manifest.tables,
        })
    }

    /// Where the manifest was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Declared model names, sorted.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }
}

fn invalid(path: &Path, e: &ManifestError) -> voltgen_core::error::VoltError {
    ApplicationError::SchemaInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

impl ModelResolver for ManifestSchema {
    fn resolve(&self, name: &str) -> VoltResult<ModelDefinition> {
        self.models
            .get(&inflector::studly(name))
            .cloned()
            .ok_or_else(|| {
                ApplicationError::ModelNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

impl SchemaProvider for ManifestSchema {
    fn list_columns(&self, table: &str) -> VoltResult<Vec<ColumnMetadata>> {
        self.tables.get(table).cloned().ok_or_else(|| {
            ApplicationError::SchemaUnavailable {
                table: table.to_string(),
                reason: format!("no [tables] entry in {}", self.source.display()),
            }
            .into()
        })
    }

    fn column_type(&self, table: &str, column: &str) -> VoltResult<Option<SqlType>> {
        Ok(self
            .list_columns(table)?
            .into_iter()
            .find(|c| c.name == column)
            .map(|c| c.sql_type))
    }
}
