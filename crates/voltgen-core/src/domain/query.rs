//! Query fragments for generated components: the live search predicate,
//! per-field filter predicates and chart aggregations.
//!
//! Predicates are modelled as values first and rendered to Eloquent PHP
//! second, so the applicability rules (which comparisons fire for a given
//! filter state) can be checked without generating code.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{MetricKind, SqlType, TimeUnit},
};

/// Live filter values keyed by filter slot (`status`, `created_at_from`, ...).
pub type FilterState = BTreeMap<String, String>;

/// Dimensions rendered as time series.
const PERIOD_DIMENSIONS: &[&str] = &["created_at", "updated_at"];

/// Name fragments that make a filter field a date range.
const DATE_NAME_HINTS: &[&str] = &["date", "created", "updated"];

// ── Comparisons ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Like,
    Equals,
    OnOrAfter,
    OnOrBefore,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Like => "like",
            Self::Equals => "=",
            Self::OnOrAfter => ">=",
            Self::OnOrBefore => "<=",
        })
    }
}

/// A single column comparison against a runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Comparison {
    fn new(field: &str, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value: value.into(),
        }
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// OR of "contains" comparisons against the live search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPredicate {
    fields: Vec<String>,
}

impl SearchPredicate {
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The OR-ed terms for `term`. Empty when the term is empty, since the
    /// generated guard skips the whole predicate.
    pub fn terms(&self, term: &str) -> Vec<Comparison> {
        if term.is_empty() {
            return Vec::new();
        }
        self.fields
            .iter()
            .map(|f| Comparison::new(f, Operator::Like, format!("%{term}%")))
            .collect()
    }

    /// Guarded Eloquent block, every line indented by `indent`.
    pub fn render(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let terms = self
            .fields
            .iter()
            .map(|f| format!("->orWhere('{f}', 'like', '%' . $this->search . '%')"))
            .collect::<Vec<_>>()
            .join(&format!("\n{pad}          "));

        [
            format!("{pad}// Apply search"),
            format!("{pad}if (!empty($this->search)) {{"),
            format!("{pad}    $query->where(function ($q) {{"),
            format!("{pad}        $q{terms};"),
            format!("{pad}    }});"),
            format!("{pad}}}"),
        ]
        .join("\n")
    }
}

/// Build the search predicate; `None` for an empty field list.
pub fn build_search_predicate(fields: &[String]) -> Option<SearchPredicate> {
    if fields.is_empty() {
        return None;
    }
    Some(SearchPredicate {
        fields: fields.to_vec(),
    })
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// One field's filter. Each bound applies only when its slot is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPredicate {
    Equals { field: String },
    DateRange { field: String },
}

impl FilterPredicate {
    pub fn field(&self) -> &str {
        match self {
            Self::Equals { field } | Self::DateRange { field } => field,
        }
    }

    /// Keys this predicate reads from the filter state.
    pub fn state_keys(&self) -> Vec<String> {
        match self {
            Self::Equals { field } => vec![field.clone()],
            Self::DateRange { field } => vec![format!("{field}_from"), format!("{field}_to")],
        }
    }

    /// Comparisons that apply under `state`. Missing and empty slots are
    /// inactive; `"0"` is a value.
    pub fn active_comparisons(&self, state: &FilterState) -> Vec<Comparison> {
        let slot = |key: String| state.get(&key).filter(|v| !v.is_empty()).cloned();

        match self {
            Self::Equals { field } => slot(field.clone())
                .map(|v| Comparison::new(field, Operator::Equals, v))
                .into_iter()
                .collect(),
            Self::DateRange { field } => {
                let from = slot(format!("{field}_from"))
                    .map(|v| Comparison::new(field, Operator::OnOrAfter, v));
                let to = slot(format!("{field}_to"))
                    .map(|v| Comparison::new(field, Operator::OnOrBefore, v));
                from.into_iter().chain(to).collect()
            }
        }
    }

    pub fn render(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let guarded = |key: &str, body: String| {
            [
                format!("{pad}if (($this->filters['{key}'] ?? '') !== '') {{"),
                format!("{pad}    {body}"),
                format!("{pad}}}"),
            ]
            .join("\n")
        };

        match self {
            Self::Equals { field } => guarded(
                field,
                format!("$query->where('{field}', $this->filters['{field}']);"),
            ),
            Self::DateRange { field } => {
                let from = format!("{field}_from");
                let to = format!("{field}_to");
                [
                    format!("{pad}// Filter by {field}"),
                    guarded(
                        &from,
                        format!("$query->whereDate('{field}', '>=', $this->filters['{from}']);"),
                    ),
                    guarded(
                        &to,
                        format!("$query->whereDate('{field}', '<=', $this->filters['{to}']);"),
                    ),
                ]
                .join("\n")
            }
        }
    }
}

/// Whether a filter on `field` is a date range.
pub fn is_date_like(field: &str, sql_type: Option<&SqlType>) -> bool {
    let lower = field.to_ascii_lowercase();
    sql_type.is_some_and(SqlType::is_temporal) || DATE_NAME_HINTS.iter().any(|h| lower.contains(h))
}

/// One predicate per field, in order.
pub fn build_filter_predicates<F>(fields: &[String], column_type: F) -> Vec<FilterPredicate>
where
    F: Fn(&str) -> Option<SqlType>,
{
    fields
        .iter()
        .map(|field| {
            let field = field.clone();
            if is_date_like(&field, column_type(&field).as_ref()) {
                FilterPredicate::DateRange { field }
            } else {
                FilterPredicate::Equals { field }
            }
        })
        .collect()
}

// ── Combined ──────────────────────────────────────────────────────────────────

/// Search predicate AND-ed with every filter predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLogic {
    pub search: Option<SearchPredicate>,
    pub filters: Vec<FilterPredicate>,
}

impl QueryLogic {
    pub fn new(search: Option<SearchPredicate>, filters: Vec<FilterPredicate>) -> Self {
        Self { search, filters }
    }

    /// Every comparison that applies for the given term and filter state.
    /// The search terms form one OR group; everything else is AND-ed.
    pub fn active_comparisons(&self, term: &str, state: &FilterState) -> (Vec<Comparison>, Vec<Comparison>) {
        let search = self
            .search
            .as_ref()
            .map(|s| s.terms(term))
            .unwrap_or_default();
        let filters = self
            .filters
            .iter()
            .flat_map(|f| f.active_comparisons(state))
            .collect();
        (search, filters)
    }

    pub fn render(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut blocks = Vec::new();

        if let Some(search) = &self.search {
            blocks.push(search.render(indent));
        }
        if !self.filters.is_empty() {
            let filters = self
                .filters
                .iter()
                .map(|f| f.render(indent))
                .collect::<Vec<_>>()
                .join("\n\n");
            blocks.push(format!("{pad}// Apply filters\n{filters}"));
        }

        blocks.join("\n\n")
    }
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Chart query: group by a dimension and aggregate per bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    dimension: String,
    metric: MetricKind,
    metric_column: Option<String>,
    time_unit: TimeUnit,
}

impl Aggregation {
    /// Time-series dimensions bucket by formatted date and sort ascending.
    pub fn is_period(&self) -> bool {
        PERIOD_DIMENSIONS.contains(&self.dimension.as_str())
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Column the labels are plucked from.
    pub fn labels_key(&self) -> &str {
        if self.is_period() { "period" } else { &self.dimension }
    }

    /// Column the data points are plucked from.
    pub fn data_key(&self) -> &'static str {
        match self.metric {
            MetricKind::Count => "count",
            MetricKind::Sum | MetricKind::Avg => "value",
        }
    }

    /// `COUNT(*) as count` or `SUM(col) as value`.
    pub fn aggregate_expression(&self) -> String {
        match (&self.metric, &self.metric_column) {
            (MetricKind::Count, _) | (_, None) => "COUNT(*) as count".to_string(),
            (metric, Some(column)) => format!("{}({column}) as value", metric.sql_function()),
        }
    }

    /// Bucket expression for time series, e.g.
    /// `DATE_FORMAT(created_at, '%Y-%m') as period`.
    pub fn period_expression(&self) -> Option<String> {
        self.is_period().then(|| {
            format!(
                "DATE_FORMAT({}, '{}') as period",
                self.dimension,
                self.time_unit.date_format()
            )
        })
    }

    /// Eloquent statements filling `$this->labels` and `$this->data`.
    pub fn render(&self, model_class: &str, var: &str, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let aggregate = self.aggregate_expression();

        let query = match self.period_expression() {
            Some(period) => [
                format!("{pad}${var} = {model_class}::selectRaw(\"{period}, {aggregate}\")"),
                format!("{pad}    ->groupBy('period')"),
                format!("{pad}    ->orderBy('period')"),
                format!("{pad}    ->get();"),
            ],
            None => [
                format!("{pad}${var} = {model_class}::groupBy('{}')", self.dimension),
                format!("{pad}    ->selectRaw('{}, {aggregate}')", self.dimension),
                format!("{pad}    ->orderBy('{}')", self.dimension),
                format!("{pad}    ->get();"),
            ],
        };

        format!(
            "{}\n\n{pad}$this->labels = ${var}->pluck('{}')->toArray();\n{pad}$this->data = ${var}->pluck('{}')->toArray();",
            query.join("\n"),
            self.labels_key(),
            self.data_key()
        )
    }
}

/// Build a chart aggregation. `sum` and `avg` need a metric column.
pub fn build_aggregation(
    dimension: &str,
    metric: MetricKind,
    metric_column: Option<&str>,
    time_unit: TimeUnit,
) -> Result<Aggregation, DomainError> {
    let metric_column = metric_column.map(str::trim).filter(|c| !c.is_empty());
    if metric.needs_column() && metric_column.is_none() {
        return Err(DomainError::missing_companion(
            "metric-column",
            "sum or avg metrics",
        ));
    }

    Ok(Aggregation {
        dimension: dimension.to_string(),
        metric,
        metric_column: metric_column.map(str::to_string),
        time_unit,
    })
}
