pub mod column;
pub mod field;
pub mod placeholder;
pub mod request;

pub use column::{ColumnMetadata, ModelDefinition};
pub use field::{DefaultValue, FieldDescriptor, ValidationRule};
pub use placeholder::PlaceholderMap;
pub use request::{
    ArtifactOptions, CardOptions, ChartOptions, FormOptions, GenerationRequest, ModalOptions,
    SearchOptions,
};
