//! # voltgen
//!
//! Generates Livewire Volt components from a model/table manifest.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success, `--help`, `--version`           |
//! |  1   | Any failure, including argument errors   |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};
use voltgen_core::domain::ArtifactOptions;

use crate::{
    cli::{Cli, Commands},
    commands::generate,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                eprintln!("{}", e.render().ansi());
                1
            } else {
                // --help / --version
                println!("{}", e.render().ansi());
                0
            };
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("voltgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Datatable(args) => {
            generate::execute(&args, ArtifactOptions::DataTable, config, &output)
        }
        Commands::Chart(args) => {
            let options = generate::chart_options(&args)?;
            generate::execute(&args.target, options, config, &output)
        }
        Commands::Form(args) => {
            let options = generate::form_options(&args)?;
            generate::execute(&args.target, options, config, &output)
        }
        Commands::Card(args) => {
            let options = generate::card_options(&args)?;
            generate::execute(&args.target, options, config, &output)
        }
        Commands::Modal(args) => {
            let options = generate::modal_options(&args)?;
            generate::execute(&args.target, options, config, &output)
        }
        Commands::Search(args) => {
            let options = generate::search_options(&args);
            generate::execute(&args.target, options, config, &output)
        }
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// The single place where structured errors become stderr output and an
/// exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
