//! # Command Dispatch
//!
//! Wires the parsed command line to the API and the renderer.
//!
//! ## Flow
//!
//! 1. Parse arguments and set up logging
//! 2. Resolve config and build `AppContext` (API over the CSV file)
//! 3. Preload the listing cache, print how it went
//! 4. With a subcommand: run it once and exit. Without: start the shell.
//!
//! The cache is always loaded before any command runs, in both modes, so a
//! command never ranks an empty, not-yet-loaded dataset.

use super::render::{print_messages, render_listing_table, render_messages};
use super::setup::{Cli, Commands};
use super::shell;
use airlist::api::ListingsApi;
use airlist::commands::CmdMessage;
use airlist::config::AirlistConfig;
use airlist::display::tabulate;
use airlist::error::{AirlistError, Result};
use airlist::history::append_history;
use airlist::source::csv_file::CsvFileSource;
use airlist::source::ListingSource;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub(super) struct AppContext<S: ListingSource> {
    pub api: ListingsApi<S>,
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
}

impl<S: ListingSource> AppContext<S> {
    /// Best effort: a history write failure is logged and otherwise ignored.
    pub fn record_history(&self, line: &str) {
        if let Some(path) = &self.history_file {
            if let Err(e) = append_history(path, line) {
                warn!(path = %path.display(), error = %e, "could not save command history");
            }
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = init_context(&cli, &cwd);

    let preload = ctx.api.preload();
    print_messages(&preload.messages);

    match cli.command {
        Some(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_once(&ctx, command, &mut out)
        }
        None => shell::run_interactive(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("airlist=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("airlist=warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn init_context(cli: &Cli, cwd: &Path) -> AppContext<CsvFileSource> {
    let config = AirlistConfig::resolve(cwd);

    let data_file = match &cli.data {
        Some(path) if path.is_relative() => cwd.join(path),
        Some(path) => path.clone(),
        None => config.data_file.clone(),
    };
    debug!(
        data_file = %data_file.display(),
        history = %config.history_file.display(),
        "resolved paths"
    );

    let api =
        ListingsApi::new(CsvFileSource::new(data_file)).with_default_count(config.default_count);

    AppContext {
        api,
        history_file: Some(config.history_file),
        history_size: config.history_size,
    }
}

/// Non-interactive mode. A rejected count is reported like in the shell and
/// does not fail the process.
fn run_once<S: ListingSource, W: Write>(
    ctx: &AppContext<S>,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    let line = command.history_line();
    match execute(&ctx.api, command, out) {
        Ok(()) => {
            out.flush()?;
            ctx.record_history(&line);
        }
        Err(AirlistError::Validation(message)) => {
            write!(out, "{}", render_messages(&[validation_error(&message)]))?;
            out.flush()?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

pub(super) fn validation_error(message: &str) -> CmdMessage {
    CmdMessage::error(format!("Error: {}", message))
}

/// Runs one parsed command and writes its output.
pub(super) fn execute<S: ListingSource, W: Write>(
    api: &ListingsApi<S>,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::ListTop { count } => {
            let result = api.top_listings(count.as_deref())?;
            if !result.listings.is_empty() {
                write!(out, "{}", render_listing_table(&tabulate(&result.listings)))?;
            }
            write!(out, "{}", render_messages(&result.messages))?;
        }
    }
    Ok(())
}
