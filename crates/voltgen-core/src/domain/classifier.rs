//! Column classification: column name + SQL type -> field descriptor.
//!
//! All name checks are case-insensitive substring matches. Classification is
//! total; the only way a column produces no descriptor is by being excluded.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::{
    entities::{ColumnMetadata, DefaultValue, FieldDescriptor, ValidationRule},
    inflector,
    value_objects::{InputKind, Role, SqlType},
};

/// Name fragments that make a column a search candidate outright.
const SEARCH_HINTS: &[&str] = &["name", "title", "description", "email", "username", "slug"];

/// Columns never searched even though they carry no `_id`.
const SEARCH_DENY: &[&str] = &["password", "token", "api_key"];

const FILTER_HINTS: &[&str] = &["_id", "status", "type", "category", "active", "enabled"];

/// Name fragments used by the type-based filter fallback.
const FILTER_FALLBACK_HINTS: &[&str] = &["_id", "status", "type", "category"];

/// Bookkeeping columns skipped by both type fallbacks.
const SYSTEM_COLUMNS: &[&str] = &["id", "created_at", "updated_at", "deleted_at", "remember_token"];

/// Turns column metadata into [`FieldDescriptor`]s for one artifact.
///
/// Each artifact kind owns its exclusion set; excluded columns never reach a
/// descriptor or any derived field list.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    excluded: BTreeSet<String>,
    rule_overrides: BTreeMap<String, String>,
    default_searchable: Vec<String>,
}

impl ColumnClassifier {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(|s| s.as_ref().to_ascii_lowercase())
                .collect(),
            ..Self::default()
        }
    }

    /// Per-field validation rules that replace the derived rule entirely.
    pub fn with_rule_overrides(mut self, rules: BTreeMap<String, String>) -> Self {
        self.rule_overrides = rules;
        self
    }

    /// Last-resort searchable columns, used when neither heuristic finds one.
    pub fn with_default_searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_searchable = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_excluded(&self, column: &str) -> bool {
        self.excluded.contains(&column.to_ascii_lowercase())
    }

    /// Columns that survive the exclusion set, in input order.
    pub fn retain<'a>(&self, columns: &'a [ColumnMetadata]) -> Vec<&'a ColumnMetadata> {
        columns.iter().filter(|c| !self.is_excluded(&c.name)).collect()
    }

    // ── Single column ────────────────────────────────────────────────────────

    /// Classify one column, or `None` if it is excluded.
    pub fn classify(&self, column: &ColumnMetadata, role: Role) -> Option<FieldDescriptor> {
        if self.is_excluded(&column.name) {
            debug!(column = %column.name, "column excluded");
            return None;
        }

        let descriptor = FieldDescriptor {
            name: column.name.clone(),
            label: inflector::headline(&column.name),
            sql_type: column.sql_type.clone(),
            input_kind: input_kind(&column.name, &column.sql_type, role),
            validation: validation_rule(&column.name, &column.sql_type),
            default_value: default_value(&column.sql_type),
            searchable: is_searchable(&column.name),
            filterable: is_filterable(&column.name),
        };

        let descriptor = match self.rule_overrides.get(&column.name) {
            Some(rule) => descriptor.with_rule_override(rule),
            None => descriptor,
        };

        debug!(
            column = %descriptor.name,
            kind = %descriptor.input_kind,
            rule = %descriptor.validation,
            "column classified"
        );
        Some(descriptor)
    }

    /// Classify every non-excluded column, preserving order.
    pub fn classify_all(&self, columns: &[ColumnMetadata], role: Role) -> Vec<FieldDescriptor> {
        columns
            .iter()
            .filter_map(|c| self.classify(c, role))
            .collect()
    }

    // ── Field lists ──────────────────────────────────────────────────────────

    /// Searchable column names.
    ///
    /// `candidates` are checked by name first. If none qualify, textual
    /// columns of the full `schema` are used, minus bookkeeping columns. If
    /// that is still empty, the configured defaults that exist in `schema`.
    pub fn searchable_fields(
        &self,
        candidates: &[ColumnMetadata],
        schema: &[ColumnMetadata],
    ) -> Vec<String> {
        let by_name: Vec<String> = self
            .retain(candidates)
            .into_iter()
            .filter(|c| is_searchable(&c.name))
            .map(|c| c.name.clone())
            .collect();
        if !by_name.is_empty() {
            return by_name;
        }

        let by_type: Vec<String> = self
            .retain(schema)
            .into_iter()
            .filter(|c| c.sql_type.is_textual() && !is_system_column(&c.name))
            .map(|c| c.name.clone())
            .collect();
        if !by_type.is_empty() {
            debug!(fields = ?by_type, "searchable fields from column types");
            return by_type;
        }

        let defaults: Vec<String> = self
            .default_searchable
            .iter()
            .filter(|f| schema.iter().any(|c| &c.name == *f) && !self.is_excluded(f))
            .cloned()
            .collect();
        debug!(fields = ?defaults, "searchable fields from configured defaults");
        defaults
    }

    /// Filterable column names: name hints over `candidates`, then a
    /// type-based pass over `schema`.
    pub fn filterable_fields(
        &self,
        candidates: &[ColumnMetadata],
        schema: &[ColumnMetadata],
    ) -> Vec<String> {
        let by_name: Vec<String> = self
            .retain(candidates)
            .into_iter()
            .filter(|c| is_filterable(&c.name))
            .map(|c| c.name.clone())
            .collect();
        if !by_name.is_empty() {
            return by_name;
        }

        self.retain(schema)
            .into_iter()
            .filter(|c| !is_system_column(&c.name))
            .filter(|c| {
                matches!(c.sql_type, SqlType::Boolean)
                    || c.sql_type.is_temporal()
                    || contains_any(&c.name, FILTER_FALLBACK_HINTS)
            })
            .map(|c| c.name.clone())
            .collect()
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Input kind for `name`/`sql_type` under `role`.
pub fn input_kind(name: &str, sql_type: &SqlType, role: Role) -> InputKind {
    match role {
        Role::Form | Role::Search => form_input_kind(name, sql_type),
        Role::Filter => filter_input_kind(name, sql_type),
    }
}

fn form_input_kind(name: &str, sql_type: &SqlType) -> InputKind {
    if contains_any(name, &["email"]) {
        return InputKind::Email;
    }
    if contains_any(name, &["password"]) {
        return InputKind::Password;
    }
    if contains_any(name, &["phone"]) {
        return InputKind::Tel;
    }
    if contains_any(name, &["url", "website"]) {
        return InputKind::Url;
    }

    match sql_type {
        SqlType::Text | SqlType::LongText => InputKind::Textarea,
        t if t.is_numeric() => InputKind::Number,
        SqlType::Date => InputKind::Date,
        SqlType::DateTime | SqlType::Timestamp => InputKind::Datetime,
        SqlType::Time => InputKind::Time,
        SqlType::Boolean => InputKind::Checkbox,
        _ => InputKind::Text,
    }
}

fn filter_input_kind(name: &str, sql_type: &SqlType) -> InputKind {
    if matches!(sql_type, SqlType::Boolean) {
        InputKind::Select
    } else if sql_type.is_temporal() {
        InputKind::Date
    } else if contains_any(name, &["_id", "status", "type"]) {
        InputKind::Select
    } else {
        InputKind::Text
    }
}

/// Derived validation rule. Boolean columns get exactly `boolean`.
pub fn validation_rule(name: &str, sql_type: &SqlType) -> ValidationRule {
    if matches!(sql_type, SqlType::Boolean) {
        return ValidationRule::new(["boolean"]);
    }

    let mut tokens = vec!["required"];
    if contains_any(name, &["email"]) {
        tokens.push("email");
    }
    if sql_type.is_integer() {
        tokens.push("integer");
    }
    if sql_type.is_fractional() {
        tokens.push("numeric");
    }
    if sql_type.is_temporal() {
        tokens.push("date");
    }
    ValidationRule::new(tokens)
}

pub fn default_value(sql_type: &SqlType) -> DefaultValue {
    if matches!(sql_type, SqlType::Boolean) {
        DefaultValue::False
    } else if sql_type.is_numeric() {
        DefaultValue::Zero
    } else {
        DefaultValue::EmptyString
    }
}

pub fn is_searchable(name: &str) -> bool {
    if contains_any(name, SEARCH_HINTS) {
        return true;
    }
    let lower = name.to_ascii_lowercase();
    !lower.contains("_id") && !SEARCH_DENY.contains(&lower.as_str())
}

pub fn is_filterable(name: &str) -> bool {
    contains_any(name, FILTER_HINTS)
}

fn is_system_column(name: &str) -> bool {
    SYSTEM_COLUMNS.contains(&name.to_ascii_lowercase().as_str())
}

fn contains_any(name: &str, needles: &[&str]) -> bool {
    let lower = name.to_ascii_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, ty: SqlType) -> ColumnMetadata {
        ColumnMetadata::new(name, ty)
    }

    fn users_table() -> Vec<ColumnMetadata> {
        vec![
            col("id", SqlType::BigInt),
            col("name", SqlType::String),
            col("email", SqlType::String),
            col("email_verified_at", SqlType::Timestamp),
            col("password", SqlType::String),
            col("remember_token", SqlType::String),
            col("created_at", SqlType::Timestamp),
            col("updated_at", SqlType::Timestamp),
        ]
    }

    fn display_exclusions() -> ColumnClassifier {
        ColumnClassifier::new([
            "id",
            "password",
            "remember_token",
            "email_verified_at",
            "created_at",
            "updated_at",
            "deleted_at",
        ])
    }

    #[test]
    fn email_name_wins_over_type() {
        for ty in [SqlType::String, SqlType::Text, SqlType::Integer] {
            let field = ColumnClassifier::default()
                .classify(&col("contact_email", ty), Role::Form)
                .unwrap();
            assert_eq!(field.input_kind, InputKind::Email);
            assert!(field.validation.contains("email"));
        }
    }

    #[test]
    fn name_precedence_order() {
        let kind = |name: &str| input_kind(name, &SqlType::String, Role::Form);
        assert_eq!(kind("password"), InputKind::Password);
        assert_eq!(kind("phone_number"), InputKind::Tel);
        assert_eq!(kind("website"), InputKind::Url);
        assert_eq!(kind("avatar_url"), InputKind::Url);
        assert_eq!(kind("EMAIL_password"), InputKind::Email);
    }

    #[test]
    fn type_mapping_for_form_role() {
        let kind = |ty: SqlType| input_kind("value", &ty, Role::Form);
        assert_eq!(kind(SqlType::LongText), InputKind::Textarea);
        assert_eq!(kind(SqlType::BigInt), InputKind::Number);
        assert_eq!(kind(SqlType::Date), InputKind::Date);
        assert_eq!(kind(SqlType::Timestamp), InputKind::Datetime);
        assert_eq!(kind(SqlType::Time), InputKind::Time);
        assert_eq!(kind(SqlType::Boolean), InputKind::Checkbox);
        assert_eq!(kind(SqlType::Other("json".into())), InputKind::Text);
    }

    #[test]
    fn filter_role_widgets() {
        let kind = |name: &str, ty: SqlType| input_kind(name, &ty, Role::Filter);
        assert_eq!(kind("is_active", SqlType::Boolean), InputKind::Select);
        assert_eq!(kind("published_at", SqlType::DateTime), InputKind::Date);
        assert_eq!(kind("category_id", SqlType::BigInt), InputKind::Select);
        assert_eq!(kind("status", SqlType::String), InputKind::Select);
        assert_eq!(kind("city", SqlType::String), InputKind::Text);
    }

    #[test]
    fn boolean_columns() {
        let field = ColumnClassifier::default()
            .classify(&col("is_active", SqlType::Boolean), Role::Form)
            .unwrap();
        assert_eq!(field.validation.to_string(), "boolean");
        assert_eq!(field.default_value, DefaultValue::False);
    }

    #[test]
    fn price_is_numeric() {
        let field = ColumnClassifier::default()
            .classify(&col("price", SqlType::Decimal), Role::Form)
            .unwrap();
        assert_eq!(field.input_kind, InputKind::Number);
        assert_eq!(field.validation.to_string(), "required|numeric");
        assert_eq!(field.default_value.literal(), "0");
        assert_eq!(field.label, "Price");
    }

    #[test]
    fn validation_token_order() {
        assert_eq!(
            validation_rule("backup_email", &SqlType::Integer).to_string(),
            "required|email|integer"
        );
        assert_eq!(
            validation_rule("starts_on", &SqlType::Date).to_string(),
            "required|date"
        );
        assert_eq!(validation_rule("name", &SqlType::String).to_string(), "required");
    }

    #[test]
    fn excluded_column_has_no_descriptor() {
        let classifier = display_exclusions();
        let column = col("email_verified_at", SqlType::Timestamp);
        assert!(classifier.classify(&column, Role::Form).is_none());

        let names: Vec<_> = classifier
            .classify_all(&users_table(), Role::Form)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["name", "email"]);
    }

    #[test]
    fn rule_override_replaces_derived_rule() {
        let mut rules = BTreeMap::new();
        rules.insert("email".to_string(), "required|email|unique:users".to_string());
        let classifier = ColumnClassifier::default().with_rule_overrides(rules);

        let field = classifier
            .classify(&col("email", SqlType::String), Role::Form)
            .unwrap();
        assert_eq!(field.validation.to_string(), "required|email|unique:users");
    }

    #[test]
    fn searchable_name_heuristic() {
        assert!(is_searchable("title"));
        assert!(is_searchable("price"));
        assert!(is_searchable("author_username"));
        assert!(!is_searchable("user_id"));
        assert!(!is_searchable("password"));
        assert!(!is_searchable("api_key"));
    }

    #[test]
    fn searchable_and_filterable_may_overlap() {
        let field = ColumnClassifier::default()
            .classify(&col("status", SqlType::String), Role::Search)
            .unwrap();
        assert!(field.searchable);
        assert!(field.filterable);
    }

    #[test]
    fn searchable_falls_back_to_textual_columns() {
        let classifier = ColumnClassifier::default();
        let candidates = vec![col("user_id", SqlType::BigInt)];
        let schema = vec![
            col("id", SqlType::BigInt),
            col("user_id", SqlType::BigInt),
            col("body", SqlType::LongText),
            col("remember_token", SqlType::String),
        ];
        assert_eq!(classifier.searchable_fields(&candidates, &schema), ["body"]);
    }

    #[test]
    fn searchable_final_fallback_uses_configured_defaults() {
        let classifier = ColumnClassifier::default().with_default_searchable(["name", "title"]);
        let schema = vec![col("token", SqlType::Integer), col("name", SqlType::Integer)];
        let candidates = vec![col("token", SqlType::Integer)];
        assert!(classifier.searchable_fields(&candidates, &[]).is_empty());
        // `token` is not a search candidate and `name` is not textual.
        assert_eq!(classifier.searchable_fields(&candidates, &schema), ["name"]);
    }

    #[test]
    fn filterable_by_name_then_type() {
        let classifier = ColumnClassifier::new(["password"]);
        let candidates = vec![
            col("name", SqlType::String),
            col("category_id", SqlType::BigInt),
            col("is_enabled", SqlType::Boolean),
        ];
        assert_eq!(
            classifier.filterable_fields(&candidates, &candidates),
            ["category_id", "is_enabled"]
        );

        let schema = vec![
            col("id", SqlType::BigInt),
            col("name", SqlType::String),
            col("published", SqlType::Boolean),
            col("released_on", SqlType::Date),
            col("created_at", SqlType::Timestamp),
        ];
        let none = vec![col("name", SqlType::String)];
        assert_eq!(
            classifier.filterable_fields(&none, &schema),
            ["published", "released_on"]
        );
    }

    #[test]
    fn exclusion_is_case_insensitive() {
        let classifier = ColumnClassifier::new(["Password"]);
        assert!(classifier.is_excluded("PASSWORD"));
        assert!(!classifier.is_excluded("password_hint"));
    }
}
