//! Generation Service - main application orchestrator.
//!
//! One request runs the whole pipeline:
//! 1. Resolve the model and list its table's columns
//! 2. Build the artifact's placeholder map
//! 3. Load the stub and bind it
//! 4. Write the component under the output directory
//!
//! Nothing is written unless every earlier step succeeded.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{FileWriter, ModelResolver, SchemaProvider, TemplateSource},
        services::{
            artifacts::{self, ArtifactContext, ArtifactPlan},
            settings::GeneratorSettings,
        },
    },
    domain::{ArtifactKind, ArtifactOptions, ColumnMetadata, GenerationRequest},
    error::{VoltError, VoltResult},
};

/// A bound component, ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    /// Fully qualified model class.
    pub model: String,
    /// Component class name.
    pub class: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
    /// Follow-up hints for the user, e.g. packages to install.
    pub notes: Vec<String>,
}

/// Main generation service.
pub struct GenerationService {
    resolver: Box<dyn ModelResolver>,
    schema: Box<dyn SchemaProvider>,
    templates: Box<dyn TemplateSource>,
    writer: Box<dyn FileWriter>,
    settings: GeneratorSettings,
    project_root: PathBuf,
}

impl GenerationService {
    /// Create a service over the given adapters, rooted at the current
    /// directory.
    pub fn new(
        resolver: Box<dyn ModelResolver>,
        schema: Box<dyn SchemaProvider>,
        templates: Box<dyn TemplateSource>,
        writer: Box<dyn FileWriter>,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            resolver,
            schema,
            templates,
            writer,
            settings,
            project_root: PathBuf::from("."),
        }
    }

    /// Root the output directory at `root` instead of the current directory.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Where the component for `class` of `model_name` lands.
    pub fn output_path(&self, model_name: &str, class: &str) -> PathBuf {
        let plural = crate::domain::inflector::plural(model_name);
        self.project_root
            .join(&self.settings.output_path)
            .join(plural)
            .join(format!("{class}.php"))
    }

    /// Bind the component for `request` without writing it.
    #[instrument(
        skip_all,
        fields(model = %request.model_name(), kind = %request.kind())
    )]
    pub fn render(&self, request: &GenerationRequest) -> VoltResult<GeneratedArtifact> {
        let model = self.resolver.resolve(request.model_name())?;
        debug!(class = %model.class, table = %model.table, "model resolved");

        let columns = self
            .schema
            .list_columns(&model.table)
            .map_err(|e| match e {
                VoltError::Application(ApplicationError::SchemaUnavailable { .. }) => e,
                other => ApplicationError::SchemaUnavailable {
                    table: model.table.clone(),
                    reason: other.to_string(),
                }
                .into(),
            })?;
        debug!(count = columns.len(), "columns listed");

        let named = self.named_columns(&model.table, request.options(), &columns)?;
        let ctx = ArtifactContext::new(&model, &columns, &self.settings).with_named_columns(&named);
        let plan = build_plan(&ctx, request.options())?;
        debug!(class = %plan.class, placeholders = plan.placeholders.len(), "plan built");

        let template = self.templates.load_template(request.kind())?;
        let content = plan.placeholders.bind(&template);

        Ok(GeneratedArtifact {
            kind: request.kind(),
            model: model.class.clone(),
            path: self.output_path(&model.name, &plan.class),
            class: plan.class,
            content,
            notes: plan.notes,
        })
    }

    /// Render and write the component. Returns what was written.
    #[instrument(
        skip_all,
        fields(model = %request.model_name(), kind = %request.kind())
    )]
    pub fn generate(&self, request: &GenerationRequest) -> VoltResult<GeneratedArtifact> {
        let artifact = self.render(request)?;

        if self.writer.exists(&artifact.path) {
            debug!(path = %artifact.path.display(), "overwriting existing component");
        }
        self.writer.write(&artifact.path, &artifact.content)?;

        info!(path = %artifact.path.display(), "component written");
        Ok(artifact)
    }

    /// Columns named on the command line that the listing lacks, typed
    /// through `SchemaProvider::column_type`. Names the table does not have
    /// are skipped.
    fn named_columns(
        &self,
        table: &str,
        options: &ArtifactOptions,
        listed: &[ColumnMetadata],
    ) -> VoltResult<Vec<ColumnMetadata>> {
        let ArtifactOptions::Search(search) = options else {
            return Ok(Vec::new());
        };

        let mut found: Vec<ColumnMetadata> = Vec::new();
        for name in search.fields.iter().chain(&search.filters) {
            if listed.iter().chain(&found).any(|c| &c.name == name) {
                continue;
            }
            if let Some(sql_type) = self.schema.column_type(table, name)? {
                debug!(column = %name, "column typed individually");
                found.push(ColumnMetadata::new(name.clone(), sql_type));
            }
        }
        Ok(found)
    }

    /// Project root the output directory is resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

fn build_plan(ctx: &ArtifactContext<'_>, options: &ArtifactOptions) -> VoltResult<ArtifactPlan> {
    match options {
        ArtifactOptions::DataTable => artifacts::datatable::build(ctx),
        ArtifactOptions::Chart(o) => artifacts::chart::build(ctx, o),
        ArtifactOptions::Form(o) => artifacts::form::build(ctx, o),
        ArtifactOptions::Card(o) => artifacts::card::build(ctx, o),
        ArtifactOptions::Modal(o) => artifacts::modal::build(ctx, o),
        ArtifactOptions::Search(o) => artifacts::search::build(ctx, o),
    }
}
