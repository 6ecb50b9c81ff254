use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{inflector, value_objects::SqlType};

/// One physical column of a table, as reported by the schema provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub sql_type: SqlType,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }
}

/// A resolved data model: its class, table and mass-assignable fields.
///
/// `fillable` keeps declaration order; generated forms list fields in that
/// order. `rules` holds per-field validation overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    pub class: String,
    pub table: String,
    #[serde(default)]
    pub fillable: Vec<String>,
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
}

impl ModelDefinition {
    /// Model with conventional class and table names: `App\Models\BlogPost`
    /// backed by `blog_posts`.
    pub fn new(name: impl Into<String>, namespace: &str) -> Self {
        let name = name.into();
        let class = format!("{}\\{}", namespace.trim_end_matches('\\'), name);
        let table = default_table(&name);
        Self {
            name,
            class,
            table,
            fillable: Vec::new(),
            rules: BTreeMap::new(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_fillable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fillable = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rule(mut self, field: impl Into<String>, rule: impl Into<String>) -> Self {
        self.rules.insert(field.into(), rule.into());
        self
    }

    /// Unqualified class name, used for type hints in generated code.
    pub fn short_class(&self) -> &str {
        inflector::class_basename(&self.class)
    }

    pub fn rule_for(&self, field: &str) -> Option<&str> {
        self.rules.get(field).map(String::as_str)
    }
}

/// Conventional table name for a model: snake-cased plural.
pub fn default_table(model: &str) -> String {
    inflector::snake(&inflector::plural(model))
}
