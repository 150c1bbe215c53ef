//! # CLI Layer
//!
//! This module is the terminal client for airlist. It is the only place that:
//! - Parses arguments (clap, `setup.rs`)
//! - Reads from the terminal (rustyline, `shell.rs`)
//! - Writes to stdout/stderr and formats tables (`render.rs`, `styles.rs`)
//! - Sets up logging
//!
//! ## Modes
//!
//! - `airlist` with no subcommand starts the interactive shell
//! - `airlist list-top [count]` runs once and exits
//!
//! Both modes load the listings file before accepting a command.

mod commands;
mod render;
mod setup;
mod shell;
mod styles;

pub use commands::run;
