//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `voltgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ModelResolver`: model name to class/table/fillable
//!   - `SchemaProvider`: column listing and types
//!   - `TemplateSource`: stub template text
//!   - `FileWriter`: generated file output
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `GenerationService`)

pub mod output;

pub use output::{FileWriter, ModelResolver, SchemaProvider, TemplateSource};
