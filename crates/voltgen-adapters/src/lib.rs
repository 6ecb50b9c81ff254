//! Infrastructure adapters for voltgen.
//!
//! This crate implements the ports defined in `voltgen_core::application::ports`.
//! It contains all I/O: reading the schema manifest and stub templates,
//! and writing generated components.

pub mod filesystem;
pub mod schema;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFileWriter, MemoryFileWriter};
pub use schema::{InMemorySchema, MANIFEST_FILE, ManifestSchema, SchemaManifest};
pub use templates::{StubTemplateSource, packaged_stub};
