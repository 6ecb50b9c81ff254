// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for voltgen.
//!
//! Pure, synchronous logic: classify columns, render field markup, build
//! query fragments and bind templates. No I/O; schema lookup, template
//! loading and file writes are reached through the application ports.
//!
//! ## Pipeline
//!
//! ```text
//! ColumnMetadata ──► ColumnClassifier ──► FieldDescriptor
//!                                              │
//!                  ┌───────────────────────────┼──────────────────┐
//!                  ▼                           ▼                  ▼
//!            FieldRenderer              QueryLogicBuilder    (state, rules)
//!                  └───────────────► PlaceholderMap ◄─────────────┘
//!                                          │
//!                                          ▼
//!                                   TemplateBinder ──► source text
//! ```
pub mod binder;
pub mod classifier;
pub mod entities;
pub mod error;
pub mod inflector;
pub mod query;
pub mod renderer;
pub mod value_objects;

// Re-exports for convenience
pub use classifier::ColumnClassifier;
pub use entities::{
    ArtifactOptions, CardOptions, ChartOptions, ColumnMetadata, DefaultValue, FieldDescriptor,
    FormOptions, GenerationRequest, ModalOptions, ModelDefinition, PlaceholderMap, SearchOptions,
    ValidationRule,
};
pub use error::{DomainError, ErrorCategory};
pub use query::{
    Aggregation, Comparison, FilterPredicate, FilterState, Operator, QueryLogic, SearchPredicate,
};
pub use renderer::FieldRenderer;
pub use value_objects::{
    ArtifactKind, CardLayout, ChartType, FormAction, InputKind, MetricKind, ModalSize, ModalType,
    Role, SqlType, Theme, TimeUnit,
};
