//! Per-artifact placeholder builders.
//!
//! Each builder turns a resolved model, its columns and the settings into an
//! [`ArtifactPlan`]: the component class name, the placeholder map for its
//! stub and any follow-up notes for the user. Builders are pure; the
//! service owns all port access.

pub mod card;
pub mod chart;
pub mod datatable;
pub mod form;
pub mod modal;
pub mod search;

use tracing::warn;

use crate::application::services::settings::GeneratorSettings;
use crate::domain::{
    ColumnClassifier, ColumnMetadata, FieldDescriptor, ModelDefinition, PlaceholderMap, SqlType,
    inflector,
};

/// Everything a builder may read.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactContext<'a> {
    pub model: &'a ModelDefinition,
    pub columns: &'a [ColumnMetadata],
    pub settings: &'a GeneratorSettings,
    /// Explicitly named columns the listing did not include, typed one by one.
    pub named_columns: &'a [ColumnMetadata],
}

/// Output of a builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPlan {
    /// Component class name, also the output file stem.
    pub class: String,
    pub placeholders: PlaceholderMap,
    pub notes: Vec<String>,
}

impl<'a> ArtifactContext<'a> {
    pub fn new(
        model: &'a ModelDefinition,
        columns: &'a [ColumnMetadata],
        settings: &'a GeneratorSettings,
    ) -> Self {
        Self {
            model,
            columns,
            settings,
            named_columns: &[],
        }
    }

    pub fn with_named_columns(mut self, named: &'a [ColumnMetadata]) -> Self {
        self.named_columns = named;
        self
    }

    pub fn column(&self, name: &str) -> Option<&'a ColumnMetadata> {
        self.columns
            .iter()
            .chain(self.named_columns)
            .find(|c| c.name == name)
    }

    pub fn column_type(&self, name: &str) -> Option<SqlType> {
        self.column(name).map(|c| c.sql_type.clone())
    }

    /// The model's fillable fields as columns, in declaration order. A
    /// fillable field missing from the schema is kept with an unknown type.
    /// Without a fillable list, every column.
    pub fn fillable_columns(&self) -> Vec<ColumnMetadata> {
        if self.model.fillable.is_empty() {
            return self.columns.to_vec();
        }

        self.model
            .fillable
            .iter()
            .map(|name| match self.column(name) {
                Some(column) => column.clone(),
                None => {
                    warn!(field = %name, table = %self.model.table, "fillable field missing from schema");
                    ColumnMetadata::new(name.clone(), SqlType::Other("unknown".into()))
                }
            })
            .collect()
    }

    /// Classifier with `excluded` and the model's rule overrides.
    pub fn classifier(&self, excluded: &[String]) -> ColumnClassifier {
        ColumnClassifier::new(excluded).with_rule_overrides(self.model.rules.clone())
    }

    // ── Names ────────────────────────────────────────────────────────────────

    /// Short model class, e.g. `BlogPost`.
    pub fn model_name(&self) -> &'a str {
        self.model.short_class()
    }

    /// `blogPost`
    pub fn model_variable(&self) -> String {
        inflector::camel(self.model_name())
    }

    /// `BlogPosts`, also the component directory.
    pub fn plural_class(&self) -> String {
        inflector::plural(&self.model.name)
    }

    /// `blogPosts`
    pub fn plural_variable(&self) -> String {
        inflector::camel(&self.plural_class())
    }

    /// `Blog Post`
    pub fn display_name(&self) -> String {
        inflector::headline(&inflector::snake(self.model_name()))
    }

    /// Placeholders shared by every stub.
    pub fn common_placeholders(&self, class: &str) -> PlaceholderMap {
        let plural_class = self.plural_class();
        PlaceholderMap::new()
            .with(
                "namespace",
                format!("{}\\{}", self.settings.namespace.trim_end_matches('\\'), plural_class),
            )
            .with("class", class)
            .with("model_class", self.model.class.clone())
            .with("model_name", self.model_name())
            .with("model_display", self.display_name())
            .with("model_variable", self.model_variable())
            .with("plural_model", plural_class.to_lowercase())
            .with("plural_model_class", plural_class)
            .with("plural_model_variable", self.plural_variable())
            .with("table", self.model.table.clone())
    }
}

// ── Shared fragments ──────────────────────────────────────────────────────────

/// `'form' => [ 'field' => default, ... ]` with entries at `indent`.
pub(crate) fn form_state(fields: &[FieldDescriptor], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let close = " ".repeat(indent.saturating_sub(4));
    if fields.is_empty() {
        return "'form' => []".to_string();
    }
    let entries = fields
        .iter()
        .map(|f| format!("{pad}'{}' => {}", f.name, f.default_value.literal()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("'form' => [\n{entries},\n{close}]")
}

/// `'form.field' => 'rule',` lines at `indent`.
pub(crate) fn validation_rules(fields: &[FieldDescriptor], indent: usize) -> String {
    let pad = " ".repeat(indent);
    fields
        .iter()
        .map(|f| format!("{pad}'form.{}' => '{}',", f.name, f.validation))
        .collect::<Vec<_>>()
        .join("\n")
}
