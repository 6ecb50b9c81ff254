//! Domain value objects: column types, input kinds and the per-artifact
//! option enums.
//!
//! # Design
//!
//! These are pure value types: `Copy` where possible, equality-by-value, no
//! identity. Each has an `as_str` form, a `Display` impl and a lenient,
//! case-insensitive `FromStr` parser. Option enums reject unknown values with
//! [`DomainError::InvalidOption`] naming the accepted choices.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── SqlType ───────────────────────────────────────────────────────────────────

/// Persisted column type as reported by the schema provider.
///
/// Types outside the known set are kept as [`SqlType::Other`] and take the
/// default branch of every classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SqlType {
    String,
    Text,
    LongText,
    Integer,
    BigInt,
    Decimal,
    Float,
    Double,
    Boolean,
    Date,
    DateTime,
    Timestamp,
    Time,
    Other(String),
}

impl SqlType {
    /// Parse a raw driver type name. Never fails.
    ///
    /// Length/precision suffixes (`varchar(255)`, `decimal(8,2)`) are ignored.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        let base = lowered.split('(').next().unwrap_or_default().trim();

        match base {
            "string" | "varchar" | "char" | "character varying" => Self::String,
            "text" | "tinytext" | "mediumtext" => Self::Text,
            "longtext" => Self::LongText,
            "integer" | "int" | "smallint" | "mediumint" | "tinyint" => Self::Integer,
            "bigint" | "biginteger" => Self::BigInt,
            "decimal" | "numeric" => Self::Decimal,
            "float" | "real" => Self::Float,
            "double" | "double precision" => Self::Double,
            "boolean" | "bool" => Self::Boolean,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "timestamp" | "timestamptz" => Self::Timestamp,
            "time" => Self::Time,
            _ => Self::Other(base.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::LongText => "longtext",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Other(name) => name,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer | Self::BigInt)
    }

    pub fn is_fractional(&self) -> bool {
        matches!(self, Self::Decimal | Self::Float | Self::Double)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_fractional()
    }

    /// `date`, `datetime` and `timestamp`. `time` is not a calendar value.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Timestamp)
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Text | Self::LongText)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SqlType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SqlType> for String {
    fn from(value: SqlType) -> Self {
        value.as_str().to_string()
    }
}

// ── InputKind ─────────────────────────────────────────────────────────────────

/// The UI control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Password,
    Tel,
    Url,
    Textarea,
    Number,
    Date,
    Datetime,
    Time,
    Checkbox,
    Select,
}

impl InputKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
        }
    }

    /// Value of the `type` attribute on a single-line `<input>`.
    pub const fn html_type(&self) -> &'static str {
        match self {
            Self::Datetime => "datetime-local",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Role / Theme ──────────────────────────────────────────────────────────────

/// What a field descriptor is being derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Form,
    Filter,
    Search,
}

/// Styling variant for form-field markup. Changes class tokens and
/// indentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Form,
    Modal,
}

impl Theme {
    /// Accent colour used for focus rings and checkboxes.
    pub const fn accent(&self) -> &'static str {
        match self {
            Self::Form => "indigo",
            Self::Modal => "blue",
        }
    }

    /// Leading whitespace of every rendered line.
    pub const fn indent(&self) -> usize {
        match self {
            Self::Form => 8,
            Self::Modal => 16,
        }
    }
}

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// One of the six generated component families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    DataTable,
    Chart,
    Form,
    Card,
    Modal,
    Search,
}

impl ArtifactKind {
    pub const ALL: [Self; 6] = [
        Self::DataTable,
        Self::Chart,
        Self::Form,
        Self::Card,
        Self::Modal,
        Self::Search,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DataTable => "datatable",
            Self::Chart => "chart",
            Self::Form => "form",
            Self::Card => "card",
            Self::Modal => "modal",
            Self::Search => "search",
        }
    }

    /// File name of the stub template, e.g. `volt-datatable.stub`.
    pub fn stub_name(&self) -> String {
        format!("volt-{}.stub", self.as_str())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "datatable" | "data-table" | "table" => Ok(Self::DataTable),
            "chart" => Ok(Self::Chart),
            "form" => Ok(Self::Form),
            "card" | "cards" => Ok(Self::Card),
            "modal" => Ok(Self::Modal),
            "search" => Ok(Self::Search),
            other => Err(DomainError::invalid_choice(
                "kind",
                other,
                &["datatable", "chart", "form", "card", "modal", "search"],
            )),
        }
    }
}

// ── ChartType ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            "doughnut" => Ok(Self::Doughnut),
            other => Err(DomainError::invalid_choice(
                "type",
                other,
                &["bar", "line", "pie", "doughnut"],
            )),
        }
    }
}

// ── MetricKind ────────────────────────────────────────────────────────────────

/// Aggregate applied per chart bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Count,
    Sum,
    Avg,
}

impl MetricKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::Avg => "avg",
        }
    }

    /// SQL aggregate function name.
    pub const fn sql_function(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
        }
    }

    pub const fn needs_column(&self) -> bool {
        matches!(self, Self::Sum | Self::Avg)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(Self::Count),
            "sum" => Ok(Self::Sum),
            "avg" => Ok(Self::Avg),
            other => Err(DomainError::invalid_choice(
                "metric",
                other,
                &["count", "sum", "avg"],
            )),
        }
    }
}

// ── TimeUnit ──────────────────────────────────────────────────────────────────

/// Bucket width for time-series charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    #[default]
    Month,
    Year,
}

impl TimeUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// MySQL `DATE_FORMAT` pattern for this bucket.
    pub const fn date_format(&self) -> &'static str {
        match self {
            Self::Day => "%Y-%m-%d",
            Self::Month => "%Y-%m",
            Self::Year => "%Y",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(DomainError::invalid_choice(
                "time-unit",
                other,
                &["day", "month", "year"],
            )),
        }
    }
}

// ── FormAction ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    #[default]
    Create,
    Edit,
    Both,
}

impl FormAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Both => "both",
        }
    }

    /// Component class name, which is also the output file stem.
    pub const fn component_name(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit => "Edit",
            Self::Both => "Form",
        }
    }

    /// Whether the component holds an existing record.
    pub const fn binds_model(&self) -> bool {
        matches!(self, Self::Edit | Self::Both)
    }
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "edit" => Ok(Self::Edit),
            "both" => Ok(Self::Both),
            other => Err(DomainError::invalid_choice(
                "action",
                other,
                &["create", "edit", "both"],
            )),
        }
    }
}

// ── ModalType ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalType {
    #[default]
    Crud,
    Confirm,
    View,
    Custom,
}

impl ModalType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crud => "crud",
            Self::Confirm => "confirm",
            Self::View => "view",
            Self::Custom => "custom",
        }
    }

    pub const fn component_name(&self) -> &'static str {
        match self {
            Self::Crud => "CrudModal",
            Self::Confirm => "ConfirmModal",
            Self::View => "ViewModal",
            Self::Custom => "CustomModal",
        }
    }

    /// Crud and custom modals carry an editable form.
    pub const fn has_form(&self) -> bool {
        matches!(self, Self::Crud | Self::Custom)
    }
}

impl fmt::Display for ModalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crud" => Ok(Self::Crud),
            "confirm" => Ok(Self::Confirm),
            "view" => Ok(Self::View),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::invalid_choice(
                "type",
                other,
                &["crud", "confirm", "view", "custom"],
            )),
        }
    }
}

// ── ModalSize ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Tailwind max-width class of the dialog panel.
    pub const fn max_width_class(&self) -> &'static str {
        match self {
            Self::Sm => "max-w-md",
            Self::Md => "max-w-2xl",
            Self::Lg => "max-w-3xl",
            Self::Xl => "max-w-5xl",
        }
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            other => Err(DomainError::invalid_choice(
                "size",
                other,
                &["sm", "md", "lg", "xl"],
            )),
        }
    }
}

// ── CardLayout ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    #[default]
    Grid,
    List,
    Masonry,
}

impl CardLayout {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Masonry => "masonry",
        }
    }

    /// Container classes for `columns` grid columns on large screens.
    pub fn container_classes(&self, columns: u8) -> String {
        match self {
            Self::Grid => format!("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-{columns} gap-6"),
            Self::List => "space-y-4".to_string(),
            Self::Masonry => {
                format!("columns-1 md:columns-2 lg:columns-{columns} gap-6 space-y-6")
            }
        }
    }

    pub fn card_classes(&self) -> String {
        let base = "bg-white rounded-lg shadow-sm border border-gray-200 hover:shadow-md transition-shadow duration-200";
        let extra = match self {
            Self::Grid => " p-6",
            Self::List => " p-4 flex items-start space-x-4",
            Self::Masonry => " p-4 break-inside-avoid mb-6",
        };
        format!("{base}{extra}")
    }

    /// Classes of the inner content wrapper.
    pub const fn content_classes(&self) -> &'static str {
        match self {
            Self::Grid => "",
            Self::List => "flex-1",
            Self::Masonry => "w-full",
        }
    }
}

impl fmt::Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardLayout {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            "masonry" => Ok(Self::Masonry),
            other => Err(DomainError::invalid_choice(
                "layout",
                other,
                &["grid", "list", "masonry"],
            )),
        }
    }
}
