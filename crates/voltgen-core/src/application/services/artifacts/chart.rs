//! Aggregated chart (Chart.js) over one dimension of the model.

use tracing::warn;

use crate::domain::{ChartOptions, inflector, query::build_aggregation};
use crate::error::{VoltError, VoltResult};

use super::{ArtifactContext, ArtifactPlan};

const CLASS: &str = "Chart";

pub fn build(ctx: &ArtifactContext<'_>, options: &ChartOptions) -> VoltResult<ArtifactPlan> {
    let settings = &ctx.settings.chart;
    let chart_type = options.chart_type.unwrap_or(settings.default_type);
    let dimension = options
        .dimension
        .clone()
        .unwrap_or_else(|| settings.default_dimension.clone());

    if !ctx.columns.is_empty() && ctx.column(&dimension).is_none() {
        warn!(dimension = %dimension, table = %ctx.model.table, "chart dimension not in schema");
    }
    if let Some(column) = &options.metric_column {
        if !ctx.columns.is_empty() && ctx.column(column).is_none() {
            warn!(column = %column, table = %ctx.model.table, "metric column not in schema");
        }
    }

    let aggregation = build_aggregation(
        &dimension,
        options.metric,
        options.metric_column.as_deref(),
        options.time_unit,
    )?;

    let colors = serde_json::to_string(&settings.colors).map_err(|e| VoltError::Internal {
        message: format!("failed to encode chart colors: {e}"),
    })?;

    let plural_display = inflector::plural(&ctx.display_name());
    let dimension_label = inflector::headline(&dimension);
    let title = match &options.metric_column {
        Some(column) if options.metric.needs_column() => format!(
            "{} of {} by {dimension_label}",
            inflector::headline(options.metric.as_str()),
            inflector::headline(column)
        ),
        _ => format!("{plural_display} by {dimension_label}"),
    };

    let placeholders = ctx
        .common_placeholders(CLASS)
        .with("chart_type", chart_type.as_str())
        .with("chart_colors", colors)
        .with("chart_title", title)
        .with("chart_label", plural_display)
        .with("dimension", aggregation.dimension())
        .with("metric", aggregation.metric().as_str())
        .with(
            "query_logic",
            aggregation.render(ctx.model_name(), &ctx.plural_variable(), 4),
        );

    Ok(ArtifactPlan {
        class: CLASS.to_string(),
        placeholders,
        notes: vec!["Don't forget to install Chart.js: npm install chart.js".into()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{artifacts::fixtures, settings::GeneratorSettings};
    use crate::domain::{ChartType, MetricKind, TimeUnit};

    #[test]
    fn defaults_to_monthly_count_over_created_at() {
        let (model, columns) = fixtures::products();
        let settings = GeneratorSettings::default();
        let ctx = ArtifactContext::new(&model, &columns, &settings);
        let plan = build(&ctx, &ChartOptions::default()).unwrap();
        let p = &plan.placeholders;

        assert_eq!(p.get("chart_type"), Some("bar"));
        assert!(p.get("chart_colors").unwrap().starts_with("[\"#3B82F6\",\"#EF4444\""));
        let query = p.get("query_logic").unwrap();
        assert!(query.contains("DATE_FORMAT(created_at, '%Y-%m') as period, COUNT(*) as count"));
        assert!(query.starts_with("    $products = Product::selectRaw("));
        assert_eq!(p.get("chart_title"), Some("Products by Created At"));
        assert!(plan.notes[0].contains("npm install chart.js"));
    }

    #[test]
    fn sum_over_category() {
        let (model, columns) = fixtures::products();
        let settings = GeneratorSettings::default();
        let ctx = ArtifactContext::new(&model, &columns, &settings);
        let options = ChartOptions {
            chart_type: Some(ChartType::Pie),
            dimension: Some("category_id".into()),
            metric: MetricKind::Sum,
            metric_column: Some("price".into()),
            time_unit: TimeUnit::Day,
        };
        let plan = build(&ctx, &options).unwrap();
        let query = plan.placeholders.get("query_logic").unwrap();

        assert!(query.contains("->selectRaw('category_id, SUM(price) as value')"));
        assert_eq!(plan.placeholders.get("chart_title"), Some("Sum of Price by Category Id"));
    }

    #[test]
    fn avg_without_column_fails() {
        let (model, columns) = fixtures::products();
        let settings = GeneratorSettings::default();
        let ctx = ArtifactContext::new(&model, &columns, &settings);
        let options = ChartOptions {
            metric: MetricKind::Avg,
            ..ChartOptions::default()
        };
        assert!(matches!(build(&ctx, &options), Err(VoltError::Domain(_))));
    }
}
