//! Application layer for voltgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`GenerationService`) and the
//!   per-artifact placeholder builders
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Classification, markup and query rules live in `crate::domain`; this
//! layer wires them to the ports.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GeneratedArtifact, GenerationService, GeneratorSettings};

// Re-export port traits (for adapter implementation)
pub use ports::{FileWriter, ModelResolver, SchemaProvider, TemplateSource};

pub use error::ApplicationError;
