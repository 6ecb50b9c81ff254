//! Modal dialog: CRUD form, delete confirmation, read-only view or a blank
//! custom body.

use crate::domain::{
    FieldRenderer, ModalOptions, ModalType, Role, Theme,
    renderer::detail_row,
};
use crate::error::VoltResult;

use super::{ArtifactContext, ArtifactPlan, form_state, validation_rules};

/// Indent of the dialog body inside the stub.
const BODY_INDENT: usize = 16;
const FOOTER_INDENT: usize = 20;

pub fn build(ctx: &ArtifactContext<'_>, options: &ModalOptions) -> VoltResult<ArtifactPlan> {
    let settings = &ctx.settings.modal;
    let modal_type = options.modal_type.unwrap_or(settings.default_type);
    let class = modal_type.component_name();
    let size = settings.sizes.for_type(modal_type);

    let fields = ctx
        .classifier(&settings.exclude_columns)
        .classify_all(&ctx.fillable_columns(), Role::Form);
    let display = ctx.display_name();
    let model = ctx.model_name();

    let content = match modal_type {
        ModalType::Crud => FieldRenderer::new(Theme::Modal).render_all(&fields),
        ModalType::Confirm => confirm_body(&display),
        ModalType::View => {
            let pad = " ".repeat(BODY_INDENT);
            let rows = fields.iter().map(detail_row).collect::<Vec<_>>().join("\n\n");
            format!("{pad}<dl class=\"divide-y divide-gray-200\">\n{rows}\n{pad}</dl>")
        }
        ModalType::Custom => format!(
            "{}<p class=\"text-sm text-gray-600\">Add your custom modal content here.</p>",
            " ".repeat(BODY_INDENT)
        ),
    };

    let (state, rules) = if modal_type.has_form() {
        (
            format!("'showModal' => false, 'model' => null, {}", form_state(&fields, 4)),
            validation_rules(&fields, 4),
        )
    } else {
        ("'showModal' => false, 'model' => null".to_string(), String::new())
    };

    let title = match modal_type {
        ModalType::Crud => format!("$model ? 'Edit {display}' : 'Create {display}'"),
        ModalType::Confirm => format!("'Delete {display}'"),
        ModalType::View => format!("'View {display}'"),
        ModalType::Custom => format!("'{display} Modal'"),
    };

    let placeholders = ctx
        .common_placeholders(class)
        .with("modal_type", modal_type.as_str())
        .with("modal_title", title)
        .with("modal_size", size.max_width_class())
        .with("modal_content", content)
        .with("modal_actions", actions(modal_type))
        .with("modal_methods", methods(modal_type, model, &display))
        .with("state_variables", state)
        .with("validation_rules", rules)
        .with("mount_method", mount_method(modal_type, model))
        .with("mount_method_import", ", mount");

    Ok(ArtifactPlan {
        class: class.to_string(),
        placeholders,
        notes: Vec::new(),
    })
}

fn confirm_body(display: &str) -> String {
    let pad = " ".repeat(BODY_INDENT);
    let lower = display.to_lowercase();
    [
        "<div class=\"flex items-start space-x-4\">".to_string(),
        "    <div class=\"flex-shrink-0 w-10 h-10 rounded-full bg-red-100 flex items-center justify-center\">".to_string(),
        "        <svg class=\"w-6 h-6 text-red-600\" fill=\"none\" stroke=\"currentColor\" viewBox=\"0 0 24 24\">".to_string(),
        "            <path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"M12 9v2m0 4h.01M5.07 19h13.86c1.54 0 2.5-1.67 1.73-3L13.73 4c-.77-1.33-2.69-1.33-3.46 0L3.34 16c-.77 1.33.19 3 1.73 3z\"></path>".to_string(),
        "        </svg>".to_string(),
        "    </div>".to_string(),
        "    <div>".to_string(),
        format!("        <h4 class=\"text-lg font-medium text-gray-900\">Delete {display}</h4>"),
        format!(
            "        <p class=\"mt-2 text-sm text-gray-600\">Are you sure you want to delete this {lower}? This action cannot be undone.</p>"
        ),
        "        <p class=\"mt-2 text-sm font-medium text-gray-900\">{{ $model->name ?? $model->title ?? $model->id }}</p>".to_string(),
        "    </div>".to_string(),
        "</div>".to_string(),
    ]
    .iter()
    .map(|line| format!("{pad}{line}"))
    .collect::<Vec<_>>()
    .join("\n")
}

fn actions(modal_type: ModalType) -> String {
    const SECONDARY: &str = "px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50";
    const PRIMARY: &str = "px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700";
    const DANGER: &str = "px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-md hover:bg-red-700";

    let button = |method: &str, classes: &str, label: &str| {
        format!(
            "{}<button type=\"button\" wire:click=\"{method}\" class=\"{classes}\">{label}</button>",
            " ".repeat(FOOTER_INDENT)
        )
    };

    match modal_type {
        ModalType::Crud => [
            button("closeModal", SECONDARY, "Cancel"),
            button("save", PRIMARY, "Save"),
        ]
        .join("\n"),
        ModalType::Confirm => [
            button("closeModal", SECONDARY, "Cancel"),
            button("confirmDelete", DANGER, "Delete"),
        ]
        .join("\n"),
        ModalType::View => button("closeModal", SECONDARY, "Close"),
        ModalType::Custom => [
            button("closeModal", SECONDARY, "Cancel"),
            button("handleAction", PRIMARY, "Confirm"),
        ]
        .join("\n"),
    }
}

fn methods(modal_type: ModalType, model: &str, display: &str) -> String {
    let close = if modal_type.has_form() {
        "$closeModal = function () {\n    $this->showModal = false;\n    $this->reset('form');\n};"
    } else {
        "$closeModal = function () {\n    $this->showModal = false;\n};"
    };

    let primary = match modal_type {
        ModalType::Crud => Some(format!(
            "$save = function () {{\n    $this->validate();\n\n    if ($this->model) {{\n        $this->model->update($this->form);\n        $message = '{display} updated successfully!';\n    }} else {{\n        {model}::create($this->form);\n        $message = '{display} created successfully!';\n    }}\n\n    $this->dispatch('modal-closed', ['message' => $message]);\n    $this->closeModal();\n}};"
        )),
        ModalType::Confirm => Some(format!(
            "$confirmDelete = function () {{\n    $this->model->delete();\n\n    $this->dispatch('modal-closed', ['message' => '{display} deleted successfully!']);\n    $this->closeModal();\n}};"
        )),
        ModalType::View => None,
        ModalType::Custom => Some(
            "$handleAction = function () {\n    // Custom action\n\n    $this->dispatch('modal-closed');\n    $this->closeModal();\n};"
                .to_string(),
        ),
    };

    match primary {
        Some(method) => format!("{method}\n\n{close}"),
        None => close.to_string(),
    }
}

fn mount_method(modal_type: ModalType, model: &str) -> String {
    match modal_type {
        ModalType::Crud => format!(
            "mount(function (?{model} $model = null) {{\n    $this->model = $model;\n    if ($model) {{\n        $this->form = $model->toArray();\n    }}\n    $this->showModal = true;\n}});"
        ),
        ModalType::Confirm | ModalType::View => format!(
            "mount(function ({model} $model) {{\n    $this->model = $model;\n    $this->showModal = true;\n}});"
        ),
        ModalType::Custom => format!(
            "mount(function (?{model} $model = null) {{\n    $this->model = $model;\n    $this->showModal = true;\n}});"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{artifacts::fixtures, settings::GeneratorSettings};

    fn plan_for(modal_type: Option<ModalType>) -> ArtifactPlan {
        let (model, columns) = fixtures::products();
        let settings = GeneratorSettings::default();
        let ctx = ArtifactContext::new(&model, &columns, &settings);
        build(&ctx, &ModalOptions { modal_type }).unwrap()
    }

    #[test]
    fn crud_modal_carries_form() {
        let plan = plan_for(None);
        let p = &plan.placeholders;

        assert_eq!(plan.class, "CrudModal");
        assert_eq!(p.get("modal_size"), Some("max-w-2xl"));
        assert_eq!(
            p.get("modal_title"),
            Some("$model ? 'Edit Product' : 'Create Product'")
        );
        assert!(p.get("state_variables").unwrap().contains("'form' => ["));
        assert!(p.get("validation_rules").unwrap().contains("'form.price'"));
        assert!(p.get("modal_content").unwrap().starts_with("                <div>"));
        assert!(p.get("modal_methods").unwrap().contains("Product::create($this->form);"));
        assert!(p.get("modal_actions").unwrap().contains(">Save</button>"));
    }

    #[test]
    fn confirm_modal_has_no_form() {
        let plan = plan_for(Some(ModalType::Confirm));
        let p = &plan.placeholders;

        assert_eq!(plan.class, "ConfirmModal");
        assert_eq!(p.get("modal_size"), Some("max-w-md"));
        assert_eq!(p.get("validation_rules"), Some(""));
        assert_eq!(p.get("state_variables"), Some("'showModal' => false, 'model' => null"));
        assert!(p.get("modal_content").unwrap().contains("delete this product?"));
        assert!(p.get("modal_methods").unwrap().contains("$this->model->delete();"));
        assert!(p.get("mount_method").unwrap().starts_with("mount(function (Product $model)"));
        assert!(!p.get("modal_methods").unwrap().contains("reset('form')"));
    }

    #[test]
    fn view_modal_lists_details() {
        let plan = plan_for(Some(ModalType::View));
        let content = plan.placeholders.get("modal_content").unwrap();

        assert_eq!(plan.class, "ViewModal");
        assert!(content.starts_with("                <dl class=\"divide-y divide-gray-200\">"));
        assert!(content.contains("{{ $model->price ?? 'N/A' }}"));
        assert!(content.ends_with("</dl>"));
        assert_eq!(
            plan.placeholders.get("modal_methods").unwrap().matches("function").count(),
            1
        );
    }

    #[test]
    fn custom_modal_keeps_form_state() {
        let plan = plan_for(Some(ModalType::Custom));
        let p = &plan.placeholders;

        assert_eq!(plan.class, "CustomModal");
        assert_eq!(p.get("modal_title"), Some("'Product Modal'"));
        assert!(p.get("state_variables").unwrap().contains("'form' => ["));
        assert!(p.get("modal_methods").unwrap().contains("$handleAction"));
    }
}
