use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    inflector,
    value_objects::{
        ArtifactKind, CardLayout, ChartType, FormAction, MetricKind, ModalType, TimeUnit,
    },
};

/// Options for the chart artifact. Unset fields fall back to settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub chart_type: Option<ChartType>,
    pub dimension: Option<String>,
    pub metric: MetricKind,
    pub metric_column: Option<String>,
    pub time_unit: TimeUnit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    pub action: Option<FormAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOptions {
    pub layout: Option<CardLayout>,
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalOptions {
    pub modal_type: Option<ModalType>,
}

/// Explicit field lists for the search panel. Empty means "detect".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub fields: Vec<String>,
    pub filters: Vec<String>,
}

/// Per-artifact options; the variant determines the artifact kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArtifactOptions {
    DataTable,
    Chart(ChartOptions),
    Form(FormOptions),
    Card(CardOptions),
    Modal(ModalOptions),
    Search(SearchOptions),
}

impl ArtifactOptions {
    pub const fn kind(&self) -> ArtifactKind {
        match self {
            Self::DataTable => ArtifactKind::DataTable,
            Self::Chart(_) => ArtifactKind::Chart,
            Self::Form(_) => ArtifactKind::Form,
            Self::Card(_) => ArtifactKind::Card,
            Self::Modal(_) => ArtifactKind::Modal,
            Self::Search(_) => ArtifactKind::Search,
        }
    }

    /// Reject column names that are not plain identifiers; they end up
    /// quoted inside generated PHP and raw SQL.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Chart(chart) => {
                if let Some(dimension) = &chart.dimension {
                    inflector::column_name("dimension", dimension)?;
                }
                if let Some(column) = &chart.metric_column {
                    inflector::column_name("metric-column", column)?;
                }
                Ok(())
            }
            Self::Search(search) => {
                for field in &search.fields {
                    inflector::column_name("fields", field)?;
                }
                for filter in &search.filters {
                    inflector::column_name("filters", filter)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// One command execution: which model, which artifact, which options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    model_name: String,
    kind: ArtifactKind,
    options: ArtifactOptions,
}

impl GenerationRequest {
    /// Build a request, normalising the model name to StudlyCase.
    pub fn new(model_name: &str, options: ArtifactOptions) -> Result<Self, DomainError> {
        let model_name = inflector::model_name(model_name)?;
        options.validate()?;
        Ok(Self {
            model_name,
            kind: options.kind(),
            options,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn options(&self) -> &ArtifactOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_kind_follows_options() {
        let request =
            GenerationRequest::new("product", ArtifactOptions::Form(FormOptions::default()))
                .unwrap();
        assert_eq!(request.kind(), ArtifactKind::Form);
        assert_eq!(request.model_name(), "Product");
    }

    #[test]
    fn request_rejects_non_identifier_columns() {
        let chart = ArtifactOptions::Chart(ChartOptions {
            dimension: Some("status) FROM users; --".into()),
            ..ChartOptions::default()
        });
        assert!(matches!(
            GenerationRequest::new("Order", chart),
            Err(DomainError::InvalidOption { ref option, .. }) if option == "dimension"
        ));

        let chart = ArtifactOptions::Chart(ChartOptions {
            metric: MetricKind::Sum,
            metric_column: Some("total'".into()),
            ..ChartOptions::default()
        });
        assert!(matches!(
            GenerationRequest::new("Order", chart),
            Err(DomainError::InvalidOption { ref option, .. }) if option == "metric-column"
        ));

        let search = ArtifactOptions::Search(SearchOptions {
            fields: vec!["name".into()],
            filters: vec!["status'".into()],
        });
        assert!(matches!(
            GenerationRequest::new("Order", search),
            Err(DomainError::InvalidOption { ref option, .. }) if option == "filters"
        ));

        let search = ArtifactOptions::Search(SearchOptions {
            fields: vec!["customer_name".into()],
            filters: vec!["status".into()],
        });
        assert!(GenerationRequest::new("Order", search).is_ok());
    }

    #[test]
    fn request_rejects_bad_model_name() {
        let result = GenerationRequest::new("", ArtifactOptions::DataTable);
        assert!(matches!(result, Err(DomainError::InvalidModelName { .. })));
    }
}
