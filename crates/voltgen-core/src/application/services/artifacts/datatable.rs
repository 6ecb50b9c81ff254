//! Paginated, searchable table of every displayable column.

use crate::domain::{
    Role,
    query::{QueryLogic, build_search_predicate},
    renderer::{join_lines, table_cell, table_header},
};
use crate::error::VoltResult;

use super::{ArtifactContext, ArtifactPlan};

const CLASS: &str = "DataTable";

pub fn build(ctx: &ArtifactContext<'_>) -> VoltResult<ArtifactPlan> {
    let settings = &ctx.settings.datatable;
    let classifier = ctx.classifier(&settings.exclude_columns);
    let fields = classifier.classify_all(ctx.columns, Role::Search);
    let var = ctx.model_variable();

    // Searchable display columns, with the usual fallbacks.
    let displayed: Vec<_> = ctx
        .columns
        .iter()
        .filter(|c| fields.iter().any(|f| f.name == c.name))
        .cloned()
        .collect();
    let searchable = classifier.searchable_fields(&displayed, ctx.columns);
    let logic = QueryLogic::new(build_search_predicate(&searchable), Vec::new());

    let (layout_import, layout) = match &settings.base_view {
        Some(view) => (", layout".to_string(), format!("\nlayout('{view}');\n")),
        None => (String::new(), String::new()),
    };

    let placeholders = ctx
        .common_placeholders(CLASS)
        .with("table_headers", join_lines(fields.iter().map(table_header)))
        .with(
            "table_rows",
            join_lines(fields.iter().map(|f| table_cell(f, &var))),
        )
        .with("search_logic", logic.render(4))
        .with("search_fields", searchable.join(", "))
        .with("table_colspan", (fields.len() + 1).to_string())
        .with("per_page", settings.per_page.to_string())
        .with("layout_import", layout_import)
        .with("layout", layout);

    Ok(ArtifactPlan {
        class: CLASS.to_string(),
        placeholders,
        notes: Vec::new(),
    })
}
