//! Live search panel with a collapsible set of filters.

use crate::domain::{
    ColumnClassifier, ColumnMetadata, InputKind, Role, SearchOptions, SqlType,
    query::{FilterPredicate, QueryLogic, build_filter_predicates, build_search_predicate},
    renderer::filter_widget,
};
use crate::error::VoltResult;

use super::{ArtifactContext, ArtifactPlan};

const CLASS: &str = "Search";

pub fn build(ctx: &ArtifactContext<'_>, options: &SearchOptions) -> VoltResult<ArtifactPlan> {
    let settings = &ctx.settings.search;
    let classifier = ctx
        .classifier(&settings.exclude_columns)
        .with_default_searchable(settings.default_searchable_fields.iter().cloned());

    // Name heuristics only look at declared fillable fields.
    let candidates = if ctx.model.fillable.is_empty() {
        Vec::new()
    } else {
        ctx.fillable_columns()
    };

    let searchable = if options.fields.is_empty() {
        classifier.searchable_fields(&candidates, ctx.columns)
    } else {
        options.fields.clone()
    };
    let filterable = if options.filters.is_empty() {
        classifier.filterable_fields(&candidates, ctx.columns)
    } else {
        options.filters.clone()
    };

    let predicates = build_filter_predicates(&filterable, |f| ctx.column_type(f));
    let logic = QueryLogic::new(build_search_predicate(&searchable), predicates.clone());

    let placeholders = ctx
        .common_placeholders(CLASS)
        .with("search_fields", quoted(&searchable))
        .with("filter_fields", quoted(&filterable))
        .with("filter_inputs", filter_inputs(ctx, &predicates, settings.debounce_delay))
        .with("search_logic", logic.render(4))
        .with("state_variables", state_variables(&predicates))
        .with("reset_method", reset_items(&predicates))
        .with("debounce", settings.debounce_delay.to_string())
        .with("per_page", settings.per_page.to_string());

    let mut notes = Vec::new();
    if searchable.is_empty() {
        notes.push(format!(
            "No searchable fields found for {}; pass --fields to choose them",
            ctx.model.table
        ));
    }

    Ok(ArtifactPlan {
        class: CLASS.to_string(),
        placeholders,
        notes,
    })
}

fn quoted(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| format!("'{f}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Filter widgets in order, one per predicate. A date-range predicate always
/// gets the from/to pair and an equality predicate never does, so widget keys
/// match the state and query keys. Explicit fields missing from the schema
/// get a plain text filter.
fn filter_inputs(ctx: &ArtifactContext<'_>, predicates: &[FilterPredicate], debounce_ms: u32) -> String {
    let classifier = ColumnClassifier::default();
    predicates
        .iter()
        .filter_map(|predicate| {
            let name = predicate.field();
            let column = ctx
                .column(name)
                .cloned()
                .unwrap_or_else(|| ColumnMetadata::new(name, SqlType::Other("unknown".into())));
            let mut field = classifier.classify(&column, Role::Filter)?;
            field.input_kind = match (predicate, field.input_kind) {
                (FilterPredicate::DateRange { .. }, _) => InputKind::Date,
                (FilterPredicate::Equals { .. }, InputKind::Date) => InputKind::Text,
                (FilterPredicate::Equals { .. }, kind) => kind,
            };
            Some(filter_widget(&field, debounce_ms))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn state_variables(predicates: &[FilterPredicate]) -> String {
    let keys: Vec<String> = predicates.iter().flat_map(FilterPredicate::state_keys).collect();
    let filters = if keys.is_empty() {
        "'filters' => []".to_string()
    } else {
        let entries = keys
            .iter()
            .map(|k| format!("        '{k}' => ''"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("'filters' => [\n{entries}\n    ]")
    };

    format!("'search' => '', 'results' => [], 'loading' => false, 'showFilters' => false, {filters}")
}

fn reset_items(predicates: &[FilterPredicate]) -> String {
    ["'search'".to_string(), "'results'".to_string()]
        .into_iter()
        .chain(
            predicates
                .iter()
                .flat_map(FilterPredicate::state_keys)
                .map(|k| format!("'filters.{k}'")),
        )
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{artifacts::fixtures, settings::GeneratorSettings};
    use crate::domain::ModelDefinition;

    fn plan(model: &ModelDefinition, columns: &[ColumnMetadata], options: SearchOptions) -> ArtifactPlan {
        let settings = GeneratorSettings::default();
        build(&ArtifactContext::new(model, columns, &settings), &options).unwrap()
    }

    #[test]
    fn detects_fields_from_fillable() {
        let (model, columns) = fixtures::products();
        let model = model.with_fillable(["name", "description", "category_id", "is_active"]);
        let plan = plan(&model, &columns, SearchOptions::default());
        let p = &plan.placeholders;

        assert_eq!(plan.class, "Search");
        assert_eq!(p.get("search_fields"), Some("'name', 'description', 'is_active'"));
        assert_eq!(p.get("filter_fields"), Some("'category_id', 'is_active'"));
        let inputs = p.get("filter_inputs").unwrap();
        assert!(inputs.contains("wire:model.live=\"filters.category_id\""));
        assert!(inputs.contains("<option value=\"1\">Yes</option>"));
        assert!(p.get("search_logic").unwrap().contains("// Apply filters"));
        assert_eq!(
            p.get("reset_method"),
            Some("'search', 'results', 'filters.category_id', 'filters.is_active'")
        );
    }

    #[test]
    fn schema_fallback_without_fillable() {
        let (model, columns) = fixtures::users();
        let plan = plan(&model, &columns, SearchOptions::default());
        let p = &plan.placeholders;

        assert_eq!(p.get("search_fields"), Some("'name', 'email'"));
        // Only timestamps qualify, and those are bookkeeping columns.
        assert_eq!(p.get("filter_fields"), Some(""));
        assert!(p.get("state_variables").unwrap().ends_with("'filters' => []"));
        assert_eq!(p.get("filter_inputs"), Some(""));
    }

    #[test]
    fn explicit_lists_win_and_may_overlap() {
        let (model, columns) = fixtures::products();
        let options = SearchOptions {
            fields: vec!["name".into(), "is_active".into()],
            filters: vec!["is_active".into(), "created_at".into()],
        };
        let plan = plan(&model, &columns, options);
        let p = &plan.placeholders;

        assert_eq!(p.get("search_fields"), Some("'name', 'is_active'"));
        let state = p.get("state_variables").unwrap();
        assert!(state.contains("        'created_at_from' => ''"));
        assert!(state.contains("        'created_at_to' => ''"));
        let logic = p.get("search_logic").unwrap();
        assert!(logic.contains("whereDate('created_at', '>=', $this->filters['created_at_from'])"));
        assert!(logic.contains("$query->where('is_active', $this->filters['is_active']);"));
        assert!(p.get("filter_inputs").unwrap().contains("filters.created_at_from"));
    }

    #[test]
    fn widget_keys_follow_the_filter_predicate() {
        let (model, mut columns) = fixtures::products();
        columns.push(ColumnMetadata::new("created_by_id", SqlType::BigInt));
        columns.push(ColumnMetadata::new("release_date", SqlType::String));
        let options = SearchOptions {
            fields: Vec::new(),
            filters: vec!["created_by_id".into(), "release_date".into(), "category_id".into()],
        };
        let plan = plan(&model, &columns, options);
        let p = &plan.placeholders;
        let inputs = p.get("filter_inputs").unwrap();
        let state = p.get("state_variables").unwrap();

        for field in ["created_by_id", "release_date"] {
            assert!(inputs.contains(&format!("filters.{field}_from")), "{field}");
            assert!(inputs.contains(&format!("filters.{field}_to")), "{field}");
            assert!(!inputs.contains(&format!("\"filters.{field}\"")), "{field}");
            assert!(state.contains(&format!("'{field}_from' => ''")), "{field}");
        }
        assert!(inputs.contains("wire:model.live=\"filters.category_id\""));
        assert!(state.contains("'category_id' => ''"));
    }

    #[test]
    fn unknown_filter_column_renders_text_input() {
        let (model, columns) = fixtures::products();
        let options = SearchOptions {
            fields: Vec::new(),
            filters: vec!["brand".into()],
        };
        let plan = plan(&model, &columns, options);

        assert!(
            plan.placeholders
                .get("filter_inputs")
                .unwrap()
                .contains("wire:model.live.debounce.300ms=\"filters.brand\"")
        );
    }
}
