//! # Interactive Shell
//!
//! A plain read → dispatch → repeat loop. Each line is split on whitespace
//! and parsed with the same clap definition as the process arguments, so
//! `list-top 5` means the same thing typed at the prompt or on the command line.
//!
//! The loop only talks to a [`LineReader`] and a `Write` sink. Production uses
//! rustyline (line editing, history recall); tests feed scripted lines.

use super::commands::{execute, validation_error, AppContext};
use super::render::render_messages;
use super::setup::{get_welcome_text, Cli, FAREWELL, PROMPT, SHORT_HELP};
use airlist::commands::CmdMessage;
use airlist::error::{AirlistError, Result};
use airlist::history::load_history;
use airlist::source::ListingSource;
use clap::error::ErrorKind;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing::debug;

/// Source of input lines for the shell.
pub(super) trait LineReader {
    /// Reads one line. `Ok(None)` means the user ended the session.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Makes a successfully executed line available for recall.
    fn remember(&mut self, line: &str);
}

pub(super) struct RustylineReader {
    editor: DefaultEditor,
}

impl RustylineReader {
    pub fn new(history: &[String], history_size: usize) -> Result<Self> {
        let config = rustyline::Config::builder()
            .max_history_size(history_size.max(1))
            .map_err(shell_error)?
            .auto_add_history(false)
            .build();
        let mut editor = DefaultEditor::with_config(config).map_err(shell_error)?;
        for entry in history {
            let _ = editor.add_history_entry(entry.as_str());
        }
        Ok(Self { editor })
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(shell_error(e)),
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

fn shell_error(e: ReadlineError) -> AirlistError {
    AirlistError::Shell(e.to_string())
}

#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    Executed,
    Skipped,
    Quit,
}

/// Starts the interactive session on the terminal.
pub(super) fn run_interactive<S: ListingSource>(ctx: &mut AppContext<S>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", get_welcome_text())?;
    out.flush()?;

    let history = ctx
        .history_file
        .as_deref()
        .map(|path| load_history(path, ctx.history_size))
        .unwrap_or_default();
    debug!(entries = history.len(), "loaded shell history");

    let mut reader = RustylineReader::new(&history, ctx.history_size)?;
    run_loop(ctx, &mut reader, &mut out)
}

pub(super) fn run_loop<S, R, W>(
    ctx: &mut AppContext<S>,
    reader: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: ListingSource,
    R: LineReader,
    W: Write,
{
    while let Some(line) = reader.read_line(PROMPT)? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match dispatch_line(ctx, line, out)? {
            LineOutcome::Quit => break,
            LineOutcome::Executed => {
                reader.remember(line);
                ctx.record_history(line);
                writeln!(out)?;
                writeln!(out, "{}", SHORT_HELP)?;
            }
            LineOutcome::Skipped => {}
        }
        out.flush()?;
    }

    writeln!(out, "{}", FAREWELL)?;
    out.flush()?;
    Ok(())
}

fn dispatch_line<S: ListingSource, W: Write>(
    ctx: &mut AppContext<S>,
    line: &str,
    out: &mut W,
) -> Result<LineOutcome> {
    if matches!(line, "quit" | "exit") {
        return Ok(LineOutcome::Quit);
    }

    let args = std::iter::once("airlist").chain(line.split_whitespace());
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render())?;
            return Ok(LineOutcome::Skipped);
        }
        Err(e) => {
            let messages = [CmdMessage::error(format!("Invalid command: {}", line))];
            write!(out, "{}", render_messages(&messages))?;
            write!(out, "{}", e.render())?;
            return Ok(LineOutcome::Skipped);
        }
    };

    if cli.data.is_some() || cli.verbose {
        let messages = [
            CmdMessage::error(format!("Invalid command: {}", line)),
            CmdMessage::info("--data and --verbose only apply when starting airlist."),
        ];
        write!(out, "{}", render_messages(&messages))?;
        return Ok(LineOutcome::Skipped);
    }

    let Some(command) = cli.command else {
        writeln!(out, "{}", SHORT_HELP)?;
        return Ok(LineOutcome::Skipped);
    };

    match execute(&ctx.api, command, out) {
        Ok(()) => Ok(LineOutcome::Executed),
        Err(AirlistError::Validation(message)) => {
            write!(out, "{}", render_messages(&[validation_error(&message)]))?;
            Ok(LineOutcome::Skipped)
        }
        Err(e) => Err(e),
    }
}
