//! Markup fragments for classified fields.
//!
//! Every fragment carries its own leading indentation, so stubs place the
//! matching placeholder at column zero.

use crate::domain::{
    entities::FieldDescriptor,
    value_objects::{InputKind, SqlType, Theme},
};

/// Indent of filter widgets inside the search panel.
const FILTER_INDENT: usize = 20;
const TABLE_HEADER_INDENT: usize = 20;
const TABLE_CELL_INDENT: usize = 24;
const CARD_ENTRY_INDENT: usize = 24;
const DETAIL_ROW_INDENT: usize = 20;

const LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 mb-2";

// ── Markup builder ────────────────────────────────────────────────────────────

/// Line accumulator with a base indent and four-space nesting steps.
struct Markup {
    base: usize,
    lines: Vec<String>,
}

impl Markup {
    fn new(base: usize) -> Self {
        Self {
            base,
            lines: Vec::new(),
        }
    }

    fn line(mut self, depth: usize, text: impl AsRef<str>) -> Self {
        let pad = " ".repeat(self.base + depth * 4);
        self.lines.push(format!("{pad}{}", text.as_ref()));
        self
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn input_classes(accent: &str) -> String {
    format!(
        "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-{accent}-500 focus:border-{accent}-500"
    )
}

fn error_directive(field: &str, span_classes: &str) -> String {
    format!(
        "@error('form.{field}') <span class=\"{span_classes}\">{{{{ $message }}}}</span> @enderror"
    )
}

// ── Form fields ───────────────────────────────────────────────────────────────

/// Renders editable form fields bound to `form.{field}`.
///
/// The theme changes accent colour and indentation only; the branch taken
/// depends solely on the field's input kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldRenderer {
    theme: Theme,
}

impl FieldRenderer {
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, field: &FieldDescriptor) -> String {
        match field.input_kind {
            InputKind::Textarea => self.textarea(field),
            InputKind::Checkbox => self.checkbox(field),
            _ => self.input(field),
        }
    }

    /// Render fields in the given order, separated by a blank line.
    pub fn render_all(&self, fields: &[FieldDescriptor]) -> String {
        fields
            .iter()
            .map(|f| self.render(f))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn textarea(&self, field: &FieldDescriptor) -> String {
        let accent = self.theme.accent();
        Markup::new(self.theme.indent())
            .line(0, "<div>")
            .line(1, label(field))
            .line(1, "<textarea ")
            .line(2, format!("wire:model=\"form.{}\" ", field.name))
            .line(2, format!("id=\"{}\"", field.name))
            .line(2, "rows=\"4\"")
            .line(2, format!("class=\"{}\"", input_classes(accent)))
            .line(2, format!("placeholder=\"Enter {}\"", field.label))
            .line(1, "></textarea>")
            .line(1, error_directive(&field.name, "text-red-500 text-xs mt-1"))
            .line(0, "</div>")
            .finish()
    }

    fn checkbox(&self, field: &FieldDescriptor) -> String {
        let accent = self.theme.accent();
        Markup::new(self.theme.indent())
            .line(0, "<div class=\"flex items-center\">")
            .line(1, "<input ")
            .line(2, format!("wire:model=\"form.{}\" ", field.name))
            .line(2, format!("id=\"{}\"", field.name))
            .line(2, "type=\"checkbox\"")
            .line(
                2,
                format!(
                    "class=\"h-4 w-4 text-{accent}-600 focus:ring-{accent}-500 border-gray-300 rounded\""
                ),
            )
            .line(1, ">")
            .line(
                1,
                format!(
                    "<label for=\"{}\" class=\"ml-2 block text-sm text-gray-900\">{}</label>",
                    field.name, field.label
                ),
            )
            .line(1, error_directive(&field.name, "text-red-500 text-xs ml-6"))
            .line(0, "</div>")
            .finish()
    }

    fn input(&self, field: &FieldDescriptor) -> String {
        let accent = self.theme.accent();
        Markup::new(self.theme.indent())
            .line(0, "<div>")
            .line(1, label(field))
            .line(1, "<input ")
            .line(2, format!("wire:model=\"form.{}\" ", field.name))
            .line(2, format!("type=\"{}\"", field.input_kind.html_type()))
            .line(2, format!("id=\"{}\"", field.name))
            .line(2, format!("class=\"{}\"", input_classes(accent)))
            .line(2, format!("placeholder=\"Enter {}\"", field.label))
            .line(1, ">")
            .line(1, error_directive(&field.name, "text-red-500 text-xs mt-1"))
            .line(0, "</div>")
            .finish()
    }
}

fn label(field: &FieldDescriptor) -> String {
    format!(
        "<label for=\"{}\" class=\"{LABEL_CLASSES}\">{}</label>",
        field.name, field.label
    )
}

// ── Filter widgets ────────────────────────────────────────────────────────────

/// Filter control for the search panel, chosen from a descriptor classified
/// under the filter role. Text filters debounce by `debounce_ms`.
pub fn filter_widget(field: &FieldDescriptor, debounce_ms: u32) -> String {
    let classes = input_classes("indigo");
    let markup = Markup::new(FILTER_INDENT);

    match field.input_kind {
        InputKind::Select if field.sql_type == SqlType::Boolean => markup
            .line(0, "<div>")
            .line(1, format!("<label class=\"{LABEL_CLASSES}\">{}</label>", field.label))
            .line(
                1,
                format!(
                    "<select wire:model.live=\"filters.{}\" class=\"{classes}\">",
                    field.name
                ),
            )
            .line(2, "<option value=\"\">All</option>")
            .line(2, "<option value=\"1\">Yes</option>")
            .line(2, "<option value=\"0\">No</option>")
            .line(1, "</select>")
            .line(0, "</div>")
            .finish(),
        InputKind::Select => markup
            .line(0, "<div>")
            .line(1, format!("<label class=\"{LABEL_CLASSES}\">{}</label>", field.label))
            .line(
                1,
                format!(
                    "<select wire:model.live=\"filters.{}\" class=\"{classes}\">",
                    field.name
                ),
            )
            .line(2, "<option value=\"\">All</option>")
            .line(2, "<!-- Add options dynamically based on your data -->")
            .line(1, "</select>")
            .line(0, "</div>")
            .finish(),
        InputKind::Date => {
            let bound = |markup: Markup, suffix: &str, caption: &str| {
                markup
                    .line(1, "<div>")
                    .line(
                        2,
                        format!(
                            "<label class=\"{LABEL_CLASSES}\">{} {caption}</label>",
                            field.label
                        ),
                    )
                    .line(2, "<input ")
                    .line(3, format!("wire:model.live=\"filters.{}_{suffix}\" ", field.name))
                    .line(3, "type=\"date\"")
                    .line(3, format!("class=\"{classes}\""))
                    .line(2, ">")
                    .line(1, "</div>")
            };
            let markup = markup.line(0, "<div class=\"grid grid-cols-2 gap-2\">");
            let markup = bound(markup, "from", "From");
            let markup = bound(markup, "to", "To");
            markup.line(0, "</div>").finish()
        }
        _ => markup
            .line(0, "<div>")
            .line(1, format!("<label class=\"{LABEL_CLASSES}\">{}</label>", field.label))
            .line(1, "<input ")
            .line(
                2,
                format!(
                    "wire:model.live.debounce.{debounce_ms}ms=\"filters.{}\"",
                    field.name
                ),
            )
            .line(2, "type=\"text\"")
            .line(2, format!("placeholder=\"Filter by {}\"", field.label))
            .line(2, format!("class=\"{classes}\""))
            .line(1, ">")
            .line(0, "</div>")
            .finish(),
    }
}

// ── Display fragments ─────────────────────────────────────────────────────────

pub fn table_header(field: &FieldDescriptor) -> String {
    Markup::new(TABLE_HEADER_INDENT)
        .line(
            0,
            format!(
                "<th class=\"px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider\">{}</th>",
                field.label
            ),
        )
        .finish()
}

/// Table cell echoing `$var->field`.
pub fn table_cell(field: &FieldDescriptor, var: &str) -> String {
    Markup::new(TABLE_CELL_INDENT)
        .line(
            0,
            format!(
                "<td class=\"px-6 py-4 whitespace-nowrap text-sm text-gray-900\">{{{{ ${var}->{} }}}}</td>",
                field.name
            ),
        )
        .finish()
}

pub fn card_entry(field: &FieldDescriptor, var: &str) -> String {
    Markup::new(CARD_ENTRY_INDENT)
        .line(0, "<div class=\"mb-2\">")
        .line(
            1,
            format!(
                "<span class=\"text-sm font-medium text-gray-500\">{}:</span>",
                field.label
            ),
        )
        .line(
            1,
            format!(
                "<p class=\"text-sm text-gray-900 mt-1\">{{{{ ${var}->{} }}}}</p>",
                field.name
            ),
        )
        .line(0, "</div>")
        .finish()
}

/// Read-only definition-list row for the view modal.
pub fn detail_row(field: &FieldDescriptor) -> String {
    Markup::new(DETAIL_ROW_INDENT)
        .line(0, "<div class=\"border-b border-gray-200 py-3\">")
        .line(
            1,
            format!(
                "<dt class=\"text-sm font-medium text-gray-500\">{}</dt>",
                field.label
            ),
        )
        .line(
            1,
            format!(
                "<dd class=\"mt-1 text-sm text-gray-900\">{{{{ $model->{} ?? 'N/A' }}}}</dd>",
                field.name
            ),
        )
        .line(0, "</div>")
        .finish()
}

/// Join fragments one per line.
pub fn join_lines<I>(fragments: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fragments.into_iter().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        classifier::ColumnClassifier,
        entities::ColumnMetadata,
        value_objects::Role,
    };

    fn field(name: &str, ty: SqlType, role: Role) -> FieldDescriptor {
        ColumnClassifier::default()
            .classify(&ColumnMetadata::new(name, ty), role)
            .unwrap()
    }

    #[test]
    fn textarea_has_four_rows_and_placeholder() {
        let out = FieldRenderer::new(Theme::Form).render(&field("description", SqlType::Text, Role::Form));
        assert!(out.contains("<textarea "));
        assert!(out.contains("rows=\"4\""));
        assert!(out.contains("placeholder=\"Enter Description\""));
        assert!(out.contains("wire:model=\"form.description\""));
        assert!(out.starts_with("        <div>"));
    }

    #[test]
    fn checkbox_label_follows_input_without_placeholder() {
        let out = FieldRenderer::new(Theme::Form).render(&field("is_active", SqlType::Boolean, Role::Form));
        assert!(!out.contains("placeholder"));
        let input = out.find("type=\"checkbox\"").unwrap();
        let label = out.find("<label").unwrap();
        let error = out.find("@error('form.is_active')").unwrap();
        assert!(input < label && label < error);
    }

    #[test]
    fn input_uses_html_type() {
        let out = FieldRenderer::new(Theme::Form).render(&field("published_at", SqlType::DateTime, Role::Form));
        assert!(out.contains("type=\"datetime-local\""));
        assert!(out.contains("placeholder=\"Enter Published At\""));
    }

    #[test]
    fn theme_changes_accent_and_indent_only() {
        let f = field("email", SqlType::String, Role::Form);
        let form = FieldRenderer::new(Theme::Form).render(&f);
        let modal = FieldRenderer::new(Theme::Modal).render(&f);

        assert!(form.contains("focus:ring-indigo-500"));
        assert!(modal.contains("focus:ring-blue-500"));
        assert!(modal.starts_with("                <div>"));

        let normalise = |s: &str| {
            s.lines()
                .map(str::trim_start)
                .collect::<Vec<_>>()
                .join("\n")
                .replace("blue", "indigo")
        };
        assert_eq!(normalise(&form), normalise(&modal));
    }

    #[test]
    fn render_all_keeps_caller_order() {
        let fields = vec![
            field("stock", SqlType::Integer, Role::Form),
            field("name", SqlType::String, Role::Form),
        ];
        let out = FieldRenderer::new(Theme::Form).render_all(&fields);
        assert!(out.find("form.stock").unwrap() < out.find("form.name").unwrap());
        assert!(out.contains("</div>\n\n        <div>"));
    }

    #[test]
    fn filter_widgets_by_kind() {
        let boolean = filter_widget(&field("is_active", SqlType::Boolean, Role::Filter), 300);
        assert!(boolean.contains("<option value=\"1\">Yes</option>"));

        let range = filter_widget(&field("created_at", SqlType::Timestamp, Role::Filter), 300);
        assert!(range.contains("filters.created_at_from"));
        assert!(range.contains("filters.created_at_to"));
        assert!(range.contains("Created At From"));

        let select = filter_widget(&field("category_id", SqlType::BigInt, Role::Filter), 300);
        assert!(select.contains("<option value=\"\">All</option>"));
        assert!(!select.contains("Yes"));

        let text = filter_widget(&field("city", SqlType::String, Role::Filter), 500);
        assert!(text.contains("wire:model.live.debounce.500ms=\"filters.city\""));
    }

    #[test]
    fn display_fragments_echo_model_attributes() {
        let f = field("name", SqlType::String, Role::Form);
        assert!(table_header(&f).trim().ends_with(">Name</th>"));
        assert_eq!(
            table_cell(&f, "user").trim(),
            "<td class=\"px-6 py-4 whitespace-nowrap text-sm text-gray-900\">{{ $user->name }}</td>"
        );
        assert!(card_entry(&f, "product").contains("{{ $product->name }}"));
        assert!(detail_row(&f).contains("{{ $model->name ?? 'N/A' }}"));
    }
}
