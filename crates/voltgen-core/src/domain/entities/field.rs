use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::{InputKind, SqlType};

// ── ValidationRule ────────────────────────────────────────────────────────────

/// Ordered validation tokens, rendered `|`-joined (`required|email`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ValidationRule(Vec<String>);

impl ValidationRule {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Parse an already `|`-joined rule string.
    pub fn parse(rule: &str) -> Self {
        Self::new(rule.split('|').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("|"))
    }
}

impl From<String> for ValidationRule {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ValidationRule> for String {
    fn from(value: ValidationRule) -> Self {
        value.to_string()
    }
}

// ── DefaultValue ──────────────────────────────────────────────────────────────

/// Initial value of a field in generated component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    EmptyString,
    Zero,
    False,
}

impl DefaultValue {
    /// The value as a source literal.
    pub const fn literal(&self) -> &'static str {
        match self {
            Self::EmptyString => "''",
            Self::Zero => "0",
            Self::False => "false",
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

// ── FieldDescriptor ───────────────────────────────────────────────────────────

/// Everything the renderers need to know about one column.
///
/// Derived on every invocation, never persisted. `input_kind` is a pure
/// function of name, SQL type and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub sql_type: SqlType,
    pub input_kind: InputKind,
    pub validation: ValidationRule,
    pub default_value: DefaultValue,
    pub searchable: bool,
    pub filterable: bool,
}

impl FieldDescriptor {
    /// Replace the derived validation rule with a model-supplied one.
    pub fn with_rule_override(mut self, rule: &str) -> Self {
        self.validation = ValidationRule::parse(rule);
        self
    }
}
