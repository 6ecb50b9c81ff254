//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names, aliases
//! and help text. Option values that map onto generator choices (chart type,
//! form action, ...) are kept as strings here and parsed by the core, so an
//! unsupported value is reported the same way from every entry point.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name     = "voltgen",
    bin_name = "voltgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Livewire Volt components from your model schema",
    long_about = "voltgen reads a model/table manifest and generates ready-to-edit \
                  Livewire Volt components: data tables, charts, forms, cards, \
                  modals and search panels.",
    after_help = "EXAMPLES:\n\
        \x20 voltgen datatable Product\n\
        \x20 voltgen chart Order --type line --metric sum --metric-column total --time-unit month\n\
        \x20 voltgen form User --action edit\n\
        \x20 voltgen search Product --fields name,sku --filters category_id",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Paginated, searchable, sortable table.
    #[command(
        visible_alias = "make:volt-datatable",
        about = "Generate a data table component",
        after_help = "EXAMPLES:\n\
            \x20 voltgen datatable Product\n\
            \x20 voltgen datatable blog_post --dry-run"
    )]
    Datatable(TargetArgs),

    /// Chart.js chart over an aggregated query.
    #[command(
        visible_alias = "make:volt-chart",
        about = "Generate a chart component",
        after_help = "EXAMPLES:\n\
            \x20 voltgen chart Order\n\
            \x20 voltgen chart Order --type line --time-unit day\n\
            \x20 voltgen chart Order --metric avg --metric-column total_amount"
    )]
    Chart(ChartArgs),

    /// Create/edit form with validation rules.
    #[command(
        visible_alias = "make:volt-form",
        about = "Generate a form component",
        after_help = "EXAMPLES:\n\
            \x20 voltgen form User\n\
            \x20 voltgen form User --action both"
    )]
    Form(FormArgs),

    /// Paginated card grid, list or masonry.
    #[command(
        visible_alias = "make:volt-card",
        about = "Generate a card layout component",
        after_help = "EXAMPLES:\n\
            \x20 voltgen card Product --layout masonry --columns 4"
    )]
    Card(CardArgs),

    /// Modal dialog.
    #[command(
        visible_alias = "make:volt-modal",
        about = "Generate a modal component",
        after_help = "EXAMPLES:\n\
            \x20 voltgen modal Product\n\
            \x20 voltgen modal Product --type confirm"
    )]
    Modal(ModalArgs),

    /// Live search panel with filters.
    #[command(
        visible_alias = "make:volt-search",
        about = "Generate a search component",
        after_help = "EXAMPLES:\n\
            \x20 voltgen search Product\n\
            \x20 voltgen search Product --fields name,description --filters category_id,is_active"
    )]
    Search(SearchArgs),

    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 voltgen init           # global config\n\
            \x20 voltgen init --local   # .voltgen.toml in the current directory"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 voltgen completions bash > ~/.local/share/bash-completion/completions/voltgen\n\
            \x20 voltgen completions zsh  > ~/.zfunc/_voltgen\n\
            \x20 voltgen completions fish > ~/.config/fish/completions/voltgen.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 voltgen config get generator.datatable.per_page\n\
            \x20 voltgen config list\n\
            \x20 voltgen config path"
    )]
    Config(ConfigCommands),
}

// ── generator arguments ───────────────────────────────────────────────────────

/// Arguments shared by every generator command.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    /// Model name, e.g. `Product` or `blog_post`.
    #[arg(value_name = "MODEL", help = "Model to generate the component for")]
    pub model: String,

    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub project: Option<PathBuf>,

    /// Defaults to `<project>/volt-schema.toml`.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        help = "Schema manifest describing models and tables"
    )]
    pub schema: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Print the component instead of writing it")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Chart type: bar, line, pie or doughnut"
    )]
    pub chart_type: Option<String>,

    #[arg(
        short = 'd',
        long = "dimension",
        value_name = "COLUMN",
        help = "Column to group by (default: created_at)"
    )]
    pub dimension: Option<String>,

    #[arg(
        short = 'm',
        long = "metric",
        value_name = "METRIC",
        help = "Aggregate: count, sum or avg"
    )]
    pub metric: Option<String>,

    #[arg(
        long = "metric-column",
        value_name = "COLUMN",
        help = "Column aggregated by sum/avg"
    )]
    pub metric_column: Option<String>,

    #[arg(
        long = "time-unit",
        value_name = "UNIT",
        help = "Bucket size for date dimensions: day, month or year"
    )]
    pub time_unit: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(
        short = 'a',
        long = "action",
        value_name = "ACTION",
        help = "Form action: create, edit or both"
    )]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(
        short = 'l',
        long = "layout",
        value_name = "LAYOUT",
        help = "Card layout: grid, list or masonry"
    )]
    pub layout: Option<String>,

    #[arg(
        long = "columns",
        value_name = "N",
        help = "Grid columns, 1 to 12"
    )]
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, Args)]
pub struct ModalArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Modal type: crud, confirm, view or custom"
    )]
    pub modal_type: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(
        long = "fields",
        value_name = "COLUMNS",
        value_delimiter = ',',
        help = "Comma-separated searchable columns (default: detected)"
    )]
    pub fields: Vec<String>,

    #[arg(
        long = "filters",
        value_name = "COLUMNS",
        value_delimiter = ',',
        help = "Comma-separated filter columns (default: detected)"
    )]
    pub filters: Vec<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.voltgen.toml` in the current directory instead of the global
    /// config location.
    #[arg(long = "local", help = "Create local configuration in current directory")]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.card.default_layout`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the configuration files that are consulted.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
