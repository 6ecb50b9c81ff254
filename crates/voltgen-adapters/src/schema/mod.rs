//! Model and schema adapters.

mod manifest;
mod memory;

pub use manifest::{MANIFEST_FILE, ManifestSchema, SchemaManifest};
pub use memory::InMemorySchema;
