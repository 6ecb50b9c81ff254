//! The six generator commands.
//!
//! Responsibility: turn CLI arguments into a `GenerationRequest`, wire the
//! adapters into a `GenerationService` and report the result. No generation
//! logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use voltgen_adapters::{LocalFileWriter, ManifestSchema, StubTemplateSource};
use voltgen_core::{
    application::{GeneratedArtifact, GenerationService},
    domain::{
        ArtifactOptions, CardOptions, ChartOptions, DomainError, FormOptions, GenerationRequest,
        ModalOptions, SearchOptions,
    },
};

use crate::{
    cli::{CardArgs, ChartArgs, FormArgs, ModalArgs, OutputFormat, SearchArgs, TargetArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

// ── Option conversion CLI → core ──────────────────────────────────────────────

fn parse_opt<T>(value: Option<&str>) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError>,
{
    value.map(str::parse).transpose()
}

pub fn chart_options(args: &ChartArgs) -> Result<ArtifactOptions, DomainError> {
    Ok(ArtifactOptions::Chart(ChartOptions {
        chart_type: parse_opt(args.chart_type.as_deref())?,
        dimension: args.dimension.clone(),
        metric: parse_opt(args.metric.as_deref())?.unwrap_or_default(),
        metric_column: args.metric_column.clone(),
        time_unit: parse_opt(args.time_unit.as_deref())?.unwrap_or_default(),
    }))
}

pub fn form_options(args: &FormArgs) -> Result<ArtifactOptions, DomainError> {
    Ok(ArtifactOptions::Form(FormOptions {
        action: parse_opt(args.action.as_deref())?,
    }))
}

pub fn card_options(args: &CardArgs) -> Result<ArtifactOptions, DomainError> {
    Ok(ArtifactOptions::Card(CardOptions {
        layout: parse_opt(args.layout.as_deref())?,
        columns: args.columns,
    }))
}

pub fn modal_options(args: &ModalArgs) -> Result<ArtifactOptions, DomainError> {
    Ok(ArtifactOptions::Modal(ModalOptions {
        modal_type: parse_opt(args.modal_type.as_deref())?,
    }))
}

pub fn search_options(args: &SearchArgs) -> ArtifactOptions {
    let clean = |list: &[String]| {
        list.iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    };
    ArtifactOptions::Search(SearchOptions {
        fields: clean(&args.fields),
        filters: clean(&args.filters),
    })
}

// ── Execution ─────────────────────────────────────────────────────────────────

/// JSON shape of a dry run: the artifact plus its text.
#[derive(Serialize)]
struct Preview<'a> {
    #[serde(flatten)]
    artifact: &'a GeneratedArtifact,
    content: &'a str,
}

/// Generate one component.
///
/// 1. Validate the model name and options
/// 2. Load the schema manifest
/// 3. Render through `GenerationService`
/// 4. Write, unless `--dry-run`
/// 5. Report the path and any notes
#[instrument(skip_all, fields(model = %target.model, kind = %options.kind()))]
pub fn execute(
    target: &TargetArgs,
    options: ArtifactOptions,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = GenerationRequest::new(&target.model, options)?;
    let service = build_service(target, config)?;

    if target.dry_run {
        let artifact = service.render(&request)?;
        debug!(path = %artifact.path.display(), "dry run, nothing written");
        return match output.format() {
            OutputFormat::Json => Ok(output.json(&Preview {
                artifact: &artifact,
                content: &artifact.content,
            })?),
            _ => {
                output.info(&format!("Dry run: would write {}", artifact.path.display()))?;
                output.emit(&artifact.content)?;
                Ok(())
            }
        };
    }

    let artifact = service.generate(&request)?;
    info!(path = %artifact.path.display(), "component written");
    report(&artifact, output)
}

fn build_service(target: &TargetArgs, config: AppConfig) -> CliResult<GenerationService> {
    let project_root = target.project.clone().unwrap_or_else(|| PathBuf::from("."));
    if !project_root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("project directory '{}' does not exist", project_root.display()),
            source: None,
        });
    }
    let manifest = target
        .schema
        .clone()
        .unwrap_or_else(|| project_root.join(&config.schema.manifest));
    debug!(
        project = %project_root.display(),
        manifest = %manifest.display(),
        "resolving project"
    );

    let schema = ManifestSchema::from_path(&manifest)?;
    let templates = template_source(&project_root, &config);

    Ok(GenerationService::new(
        Box::new(schema.clone()),
        Box::new(schema),
        Box::new(templates),
        Box::new(LocalFileWriter::new()),
        config.generator,
    )
    .with_project_root(project_root))
}

fn template_source(project_root: &Path, config: &AppConfig) -> StubTemplateSource {
    let source = StubTemplateSource::new(project_root).with_packaged(config.templates.packaged);
    match &config.templates.stubs_dir {
        Some(dir) => source.with_stubs_dir(project_root.join(dir)),
        None => source,
    }
}

fn report(artifact: &GeneratedArtifact, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(artifact)?;
        return Ok(());
    }

    output.success(&format!(
        "{} {} created: {}",
        artifact.model,
        artifact.kind,
        artifact.path.display()
    ))?;
    for note in &artifact.notes {
        output.info(note)?;
    }
    Ok(())
}
