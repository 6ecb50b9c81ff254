//! Create/edit form bound to `form.*` state with validation rules.

use crate::domain::{FieldRenderer, FormAction, FormOptions, Role, Theme};
use crate::error::VoltResult;

use super::{ArtifactContext, ArtifactPlan, form_state, validation_rules};

pub fn build(ctx: &ArtifactContext<'_>, options: &FormOptions) -> VoltResult<ArtifactPlan> {
    let settings = &ctx.settings.form;
    let action = options.action.unwrap_or(settings.default_action);
    let class = action.component_name();

    let fields = ctx
        .classifier(&settings.exclude_columns)
        .classify_all(&ctx.fillable_columns(), Role::Form);

    let mut state = form_state(&fields, 4);
    if action.binds_model() {
        state.push_str(", 'model' => null");
    }

    let mount = mount_method(action, ctx.model_name());
    let display = ctx.display_name();

    let placeholders = ctx
        .common_placeholders(class)
        .with("action", action.as_str())
        .with("form_fields", FieldRenderer::new(Theme::Form).render_all(&fields))
        .with("validation_rules", validation_rules(&fields, 4))
        .with("state_variables", state)
        .with("submit_method", submit_method(action, ctx.model_name(), &display))
        .with("submit_label", submit_label(action, &display))
        .with("mount_method_import", if mount.is_empty() { "" } else { ", mount" })
        .with("mount_method", mount);

    Ok(ArtifactPlan {
        class: class.to_string(),
        placeholders,
        notes: Vec::new(),
    })
}

/// Body of `$save` after validation, indented one level.
fn submit_method(action: FormAction, model: &str, display: &str) -> String {
    match action {
        FormAction::Create => format!(
            "    {model}::create($this->form);\n\n    session()->flash('message', '{display} created successfully!');\n\n    $this->reset('form');"
        ),
        FormAction::Edit => format!(
            "    $this->model->update($this->form);\n\n    session()->flash('message', '{display} updated successfully!');"
        ),
        FormAction::Both => [
            "    if ($this->model) {".to_string(),
            "        $this->model->update($this->form);".to_string(),
            format!("        session()->flash('message', '{display} updated successfully!');"),
            "    } else {".to_string(),
            format!("        {model}::create($this->form);"),
            format!("        session()->flash('message', '{display} created successfully!');"),
            "        $this->reset('form');".to_string(),
            "    }".to_string(),
        ]
        .join("\n"),
    }
}

fn mount_method(action: FormAction, model: &str) -> String {
    match action {
        FormAction::Create => String::new(),
        FormAction::Edit => format!(
            "mount(function ({model} $model) {{\n    $this->model = $model;\n    $this->form = $model->toArray();\n}});"
        ),
        FormAction::Both => format!(
            "mount(function (?{model} $model = null) {{\n    $this->model = $model;\n    if ($model) {{\n        $this->form = $model->toArray();\n    }}\n}});"
        ),
    }
}

fn submit_label(action: FormAction, display: &str) -> String {
    match action {
        FormAction::Create => format!("Create {display}"),
        FormAction::Edit => format!("Update {display}"),
        FormAction::Both => "Save".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{artifacts::fixtures, settings::GeneratorSettings};

    fn plan_for(action: Option<FormAction>) -> ArtifactPlan {
        let (model, columns) = fixtures::users();
        let settings = GeneratorSettings::default();
        let ctx = ArtifactContext::new(&model, &columns, &settings);
        build(&ctx, &FormOptions { action }).unwrap()
    }

    #[test]
    fn create_form_for_users() {
        let plan = plan_for(None);
        let p = &plan.placeholders;

        assert_eq!(plan.class, "Create");
        let rules = p.get("validation_rules").unwrap();
        assert!(rules.contains("'form.name' => 'required'"));
        assert!(rules.contains("'form.email' => 'required|email'"));
        assert!(!rules.contains("password"));
        assert!(p.get("submit_method").unwrap().contains("User::create($this->form);"));
        assert_eq!(p.get("mount_method"), Some(""));
        assert_eq!(p.get("mount_method_import"), Some(""));
        assert!(!p.get("state_variables").unwrap().contains("'model'"));
        assert!(p.get("form_fields").unwrap().contains("type=\"email\""));
    }

    #[test]
    fn edit_form_binds_model() {
        let plan = plan_for(Some(FormAction::Edit));
        let p = &plan.placeholders;

        assert_eq!(plan.class, "Edit");
        assert!(p.get("state_variables").unwrap().ends_with(", 'model' => null"));
        assert!(p.get("mount_method").unwrap().starts_with("mount(function (User $model) {"));
        assert_eq!(p.get("mount_method_import"), Some(", mount"));
        assert!(p.get("submit_method").unwrap().contains("updated successfully!"));
    }

    #[test]
    fn both_form_branches_on_model() {
        let plan = plan_for(Some(FormAction::Both));
        let submit = plan.placeholders.get("submit_method").unwrap().to_string();

        assert_eq!(plan.class, "Form");
        assert!(submit.contains("if ($this->model) {"));
        assert!(submit.contains("created successfully!"));
        assert!(plan.placeholders.get("mount_method").unwrap().contains("?User $model = null"));
    }

    #[test]
    fn fillable_order_and_overrides() {
        let (model, columns) = fixtures::products();
        let model = model
            .with_fillable(["price", "name"])
            .with_rule("price", "required|numeric|min:0");
        let settings = GeneratorSettings::default();
        let ctx = ArtifactContext::new(&model, &columns, &settings);
        let plan = build(&ctx, &FormOptions::default()).unwrap();

        let rules = plan.placeholders.get("validation_rules").unwrap();
        assert_eq!(
            rules,
            "    'form.price' => 'required|numeric|min:0',\n    'form.name' => 'required',"
        );
    }
}
