//! Paginated card collection in a grid, list or masonry layout.

use crate::domain::{CardOptions, DomainError, Role, renderer::card_entry};
use crate::error::VoltResult;

use super::{ArtifactContext, ArtifactPlan};

const CLASS: &str = "Cards";

/// Largest grid column count Tailwind ships classes for.
const MAX_COLUMNS: u8 = 12;

pub fn build(ctx: &ArtifactContext<'_>, options: &CardOptions) -> VoltResult<ArtifactPlan> {
    let settings = &ctx.settings.card;
    let layout = options.layout.unwrap_or(settings.default_layout);
    let columns = options.columns.unwrap_or(settings.default_columns);

    if !(1..=MAX_COLUMNS).contains(&columns) {
        return Err(DomainError::InvalidOption {
            option: "columns".into(),
            reason: format!("{columns} is out of range, expected 1 to {MAX_COLUMNS}"),
        }
        .into());
    }

    let fields = ctx
        .classifier(&settings.exclude_columns)
        .classify_all(ctx.columns, Role::Form);
    let var = ctx.model_variable();
    let content = fields
        .iter()
        .map(|f| card_entry(f, &var))
        .collect::<Vec<_>>()
        .join("\n");

    let placeholders = ctx
        .common_placeholders(CLASS)
        .with("card_content", content)
        .with("grid_classes", layout.container_classes(columns))
        .with("card_classes", layout.card_classes())
        .with("layout_specific_classes", layout.content_classes())
        .with("layout", layout.as_str())
        .with("columns", columns.to_string())
        .with("per_page", settings.per_page.to_string());

    Ok(ArtifactPlan {
        class: CLASS.to_string(),
        placeholders,
        notes: vec![format!("Layout: {layout} with {columns} columns")],
    })
}
