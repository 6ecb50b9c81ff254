//! Generator settings: output layout and per-artifact defaults.
//!
//! Read once at start-up and shared read-only by every generation. Every
//! field has a default, so a partial configuration file deserializes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{CardLayout, ChartType, FormAction, ModalSize, ModalType};

fn display_exclusions() -> Vec<String> {
    [
        "id",
        "password",
        "remember_token",
        "email_verified_at",
        "created_at",
        "updated_at",
        "deleted_at",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Directory, relative to the project root, that receives components.
    pub output_path: PathBuf,
    /// PHP namespace of generated components.
    pub namespace: String,
    /// PHP namespace models live in when the resolver names no class.
    pub model_namespace: String,
    pub datatable: DataTableSettings,
    pub chart: ChartSettings,
    pub form: FormSettings,
    pub card: CardSettings,
    pub modal: ModalSettings,
    pub search: SearchSettings,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("app/Livewire"),
            namespace: "App\\Livewire".into(),
            model_namespace: "App\\Models".into(),
            datatable: DataTableSettings::default(),
            chart: ChartSettings::default(),
            form: FormSettings::default(),
            card: CardSettings::default(),
            modal: ModalSettings::default(),
            search: SearchSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataTableSettings {
    pub exclude_columns: Vec<String>,
    pub per_page: u32,
    /// Layout view the component renders inside, e.g. `layouts.app`.
    pub base_view: Option<String>,
}

impl Default for DataTableSettings {
    fn default() -> Self {
        Self {
            exclude_columns: display_exclusions(),
            per_page: 10,
            base_view: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub default_type: ChartType,
    pub default_dimension: String,
    pub colors: Vec<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_type: ChartType::Bar,
            default_dimension: "created_at".into(),
            colors: [
                "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#F97316", "#06B6D4",
                "#84CC16", "#EC4899", "#6B7280",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub exclude_columns: Vec<String>,
    pub default_action: FormAction,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            exclude_columns: display_exclusions(),
            default_action: FormAction::Create,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    pub exclude_columns: Vec<String>,
    pub default_layout: CardLayout,
    pub default_columns: u8,
    pub per_page: u32,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            exclude_columns: display_exclusions(),
            default_layout: CardLayout::Grid,
            default_columns: 3,
            per_page: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalSettings {
    pub exclude_columns: Vec<String>,
    pub default_type: ModalType,
    pub sizes: ModalSizes,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            exclude_columns: display_exclusions(),
            default_type: ModalType::Crud,
            sizes: ModalSizes::default(),
        }
    }
}

/// Dialog size per modal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalSizes {
    pub crud: ModalSize,
    pub confirm: ModalSize,
    pub view: ModalSize,
    pub custom: ModalSize,
}

impl ModalSizes {
    pub const fn for_type(&self, modal_type: ModalType) -> ModalSize {
        match modal_type {
            ModalType::Crud => self.crud,
            ModalType::Confirm => self.confirm,
            ModalType::View => self.view,
            ModalType::Custom => self.custom,
        }
    }
}

impl Default for ModalSizes {
    fn default() -> Self {
        Self {
            crud: ModalSize::Md,
            confirm: ModalSize::Sm,
            view: ModalSize::Lg,
            custom: ModalSize::Md,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub exclude_columns: Vec<String>,
    /// Debounce of live text inputs, in milliseconds.
    pub debounce_delay: u32,
    pub per_page: u32,
    pub default_searchable_fields: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            exclude_columns: ["password", "remember_token", "email_verified_at"]
                .into_iter()
                .map(String::from)
                .collect(),
            debounce_delay: 300,
            per_page: 10,
            default_searchable_fields: ["name", "title", "description", "email"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.output_path, PathBuf::from("app/Livewire"));
        assert_eq!(settings.chart.colors.len(), 10);
        assert_eq!(settings.card.default_columns, 3);
        assert_eq!(settings.card.per_page, 12);
        assert_eq!(settings.modal.sizes.for_type(ModalType::View), ModalSize::Lg);
        assert!(settings.form.exclude_columns.contains(&"email_verified_at".to_string()));
        assert!(!settings.search.exclude_columns.contains(&"id".to_string()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: GeneratorSettings =
            serde_json::from_str(r#"{"card": {"default_layout": "masonry"}}"#).unwrap();
        assert_eq!(settings.card.default_layout, CardLayout::Masonry);
        assert_eq!(settings.card.per_page, 12);
        assert_eq!(settings.search.debounce_delay, 300);
    }
}
