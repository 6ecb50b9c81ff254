//! In-memory model registry and schema, for tests and embedding.

use std::collections::BTreeMap;

use voltgen_core::{
    application::{
        ApplicationError,
        ports::{ModelResolver, SchemaProvider},
    },
    domain::{ColumnMetadata, ModelDefinition, SqlType},
    error::VoltResult,
};

/// Models keyed by StudlyCase name, tables keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchema {
    models: BTreeMap<String, ModelDefinition>,
    tables: BTreeMap<String, Vec<ColumnMetadata>>,
}

impl InMemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: ModelDefinition) -> Self {
        self.models.insert(model.name.clone(), model);
        self
    }

    pub fn with_table(mut self, table: impl Into<String>, columns: Vec<ColumnMetadata>) -> Self {
        self.tables.insert(table.into(), columns);
        self
    }
}

impl ModelResolver for InMemorySchema {
    fn resolve(&self, name: &str) -> VoltResult<ModelDefinition> {
        self.models.get(name).cloned().ok_or_else(|| {
            ApplicationError::ModelNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

impl SchemaProvider for InMemorySchema {
    fn list_columns(&self, table: &str) -> VoltResult<Vec<ColumnMetadata>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }

    fn column_type(&self, table: &str, column: &str) -> VoltResult<Option<SqlType>> {
        Ok(self
            .tables
            .get(table)
            .and_then(|cols| cols.iter().find(|c| c.name == column))
            .map(|c| c.sql_type.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltgen_core::error::VoltError;

    #[test]
    fn resolves_registered_models_only() {
        let schema = InMemorySchema::new()
            .with_model(ModelDefinition::new("Post", "App\\Models"))
            .with_table("posts", vec![ColumnMetadata::new("title", SqlType::String)]);

        assert_eq!(schema.resolve("Post").unwrap().table, "posts");
        assert!(matches!(
            schema.resolve("Comment"),
            Err(VoltError::Application(ApplicationError::ModelNotFound { .. }))
        ));
        assert_eq!(
            schema.column_type("posts", "title").unwrap(),
            Some(SqlType::String)
        );
        assert!(schema.list_columns("comments").unwrap().is_empty());
    }
}
