//! voltgen core - domain and application layers.
//!
//! Generates Livewire Volt single-file components (data tables, charts,
//! forms, cards, modals and search panels) from a model's column metadata,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           voltgen-cli (CLI)             │
//! │      (parses options, builds request)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, artifact builders) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (ModelResolver, SchemaProvider,         │
//! │  TemplateSource, FileWriter)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    voltgen-adapters (Infrastructure)    │
//! │ (ManifestSchema, StubTemplateSource,    │
//! │  LocalFileWriter)                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (classifier, renderer, query builder, binder) is pure
//! and has no port access.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voltgen_core::prelude::*;
//!
//! # fn run(service: GenerationService) -> VoltResult<()> {
//! let request = GenerationRequest::new("product", ArtifactOptions::DataTable)?;
//! let artifact = service.generate(&request)?;
//! println!("{}", artifact.path.display());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GeneratedArtifact, GenerationService, GeneratorSettings,
        ports::{FileWriter, ModelResolver, SchemaProvider, TemplateSource},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactOptions, CardLayout, CardOptions, ChartOptions, ChartType,
        ColumnMetadata, DomainError, FormAction, FormOptions, GenerationRequest, MetricKind,
        ModalOptions, ModalType, ModelDefinition, SearchOptions, SqlType, TimeUnit,
    };
    pub use crate::error::{ErrorCategory, VoltError, VoltResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
