//! Stub template source.
//!
//! A project may override any stub by placing a file of the same name in
//! its stubs directory:
//!
//! ```text
//! <project>/
//! └── stubs/
//!     ├── volt-datatable.stub   ← used instead of the packaged one
//!     └── volt-modal.stub
//! ```
//!
//! Kinds without an override fall back to the stubs packaged with this
//! crate, unless packaged stubs are disabled.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use voltgen_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::ArtifactKind,
    error::VoltResult,
};

use crate::filesystem::map_io_error;

/// Packaged stub text for `kind`.
pub fn packaged_stub(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::DataTable => include_str!("../stubs/volt-datatable.stub"),
        ArtifactKind::Chart => include_str!("../stubs/volt-chart.stub"),
        ArtifactKind::Form => include_str!("../stubs/volt-form.stub"),
        ArtifactKind::Card => include_str!("../stubs/volt-card.stub"),
        ArtifactKind::Modal => include_str!("../stubs/volt-modal.stub"),
        ArtifactKind::Search => include_str!("../stubs/volt-search.stub"),
    }
}

/// Project override first, then the packaged stub.
#[derive(Debug, Clone)]
pub struct StubTemplateSource {
    stubs_dir: PathBuf,
    packaged: bool,
}

impl StubTemplateSource {
    /// Look for overrides in `<project_root>/stubs`.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            stubs_dir: project_root.as_ref().join("stubs"),
            packaged: true,
        }
    }

    /// Look for overrides in `dir` instead.
    pub fn with_stubs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stubs_dir = dir.into();
        self
    }

    /// Disable the packaged fallback.
    pub fn with_packaged(mut self, enabled: bool) -> Self {
        self.packaged = enabled;
        self
    }

    pub fn override_path(&self, kind: ArtifactKind) -> PathBuf {
        self.stubs_dir.join(kind.stub_name())
    }
}

impl TemplateSource for StubTemplateSource {
    #[instrument(skip(self), fields(kind = %kind))]
    fn load_template(&self, kind: ArtifactKind) -> VoltResult<String> {
        let path = self.override_path(kind);
        if path.is_file() {
            debug!(path = %path.display(), "using project stub");
            return std::fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read stub"));
        }

        if self.packaged {
            debug!("using packaged stub");
            return Ok(packaged_stub(kind).to_string());
        }

        Err(ApplicationError::TemplateNotFound {
            kind,
            stub: kind.stub_name(),
        }
        .into())
    }
}
