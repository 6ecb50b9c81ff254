//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! generator settings inside it are handed to the core as-is; everything
//! else only concerns the CLI.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `VOLTGEN__*` environment variables, `__` separating nested keys
//!    (`VOLTGEN__GENERATOR__CARD__PER_PAGE=24`)
//! 3. `--config FILE`, or else `.voltgen.toml` in the current directory over
//!    the global `config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use voltgen_adapters::MANIFEST_FILE;
use voltgen_core::application::GeneratorSettings;

use crate::error::{CliError, CliResult};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".voltgen.toml";

const ENV_PREFIX: &str = "VOLTGEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorSettings,
    pub schema: SchemaConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Manifest path, relative to the project root unless absolute.
    pub manifest: PathBuf,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Stub override directory, relative to the project root. `None` means
    /// `<project>/stubs`.
    pub stubs_dir: Option<PathBuf>,
    /// Fall back to the stubs shipped with voltgen.
    pub packaged: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            stubs_dir: None,
            packaged: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "using explicit config file");
                builder = builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                for path in Self::search_paths() {
                    builder = builder.add_source(
                        File::from(path.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to the local file when no home directory is known.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "voltgen", "voltgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Implicit config files, lowest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![Self::config_path()];
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if !paths.contains(&local) {
            paths.push(local);
        }
        paths
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Look up a dotted key such as `generator.card.per_page`.
    ///
    /// Scalars come back bare; sections come back as pretty JSON.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let unknown = || CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        };

        let root = serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;

        let value = key
            .split('.')
            .try_fold(&root, |node, part| node.get(part))
            .ok_or_else(unknown)?;

        Ok(match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::to_string_pretty(value).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to format '{key}': {e}"),
                    source: Some(Box::new(e)),
                })?
            }
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use voltgen_core::domain::CardLayout;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator, GeneratorSettings::default());
        assert_eq!(cfg.schema.manifest, PathBuf::from("volt-schema.toml"));
        assert!(cfg.templates.packaged);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voltgen.toml");
        std::fs::write(
            &path,
            "[generator.card]\ndefault_layout = \"list\"\nper_page = 24\n\n[templates]\npackaged = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generator.card.default_layout, CardLayout::List);
        assert_eq!(cfg.generator.card.per_page, 24);
        assert!(!cfg.templates.packaged);
        // untouched sections keep their defaults
        assert_eq!(cfg.generator.datatable.per_page, 10);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn default_config_survives_a_toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voltgen.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn get_by_dotted_key() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generator.output_path").unwrap(), "app/Livewire");
        assert_eq!(cfg.get("generator.datatable.per_page").unwrap(), "10");
        assert_eq!(cfg.get("generator.card.default_layout").unwrap(), "grid");
        assert_eq!(cfg.get("templates.packaged").unwrap(), "true");
        assert!(cfg.get("generator.modal").unwrap().contains("\"sizes\""));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
        assert!(!AppConfig::search_paths().is_empty());
    }
}
