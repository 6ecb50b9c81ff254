//! Application services - orchestrate use cases.
//!
//! `GenerationService` runs one generation request end to end. The
//! per-artifact builders in [`artifacts`] are pure and know nothing of the
//! ports.

pub mod artifacts;
pub mod generation_service;
pub mod settings;

pub use generation_service::{GeneratedArtifact, GenerationService};
pub use settings::{
    CardSettings, ChartSettings, DataTableSettings, FormSettings, GeneratorSettings,
    ModalSettings, ModalSizes, SearchSettings,
};
