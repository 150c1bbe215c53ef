//! # Airlist Architecture
//!
//! Airlist ranks rental listings by price. It loads a CSV file once, keeps the
//! validated rows in memory, and answers "show me the N most expensive
//! listings" as many times as the user asks.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, interactive shell, table rendering         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the listing cache and its source                    │
//! │  - Validates user input, returns `CmdResult`                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure ranking logic over borrowed listings                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Cache + Source (cache.rs, source/)                         │
//! │  - `ListingSource` trait: CSV file or in-memory             │
//! │  - One-shot preload, read-only afterwards                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every UI talks to
//! - [`commands`]: Ranking and the `list-top` command
//! - [`cache`]: Process-lifetime listing cache
//! - [`source`]: CSV loading and row validation
//! - [`display`]: Label mapping and rank tagging for tables
//! - [`model`]: `Listing` and `RankedListing`
//! - [`config`]: Configuration file handling
//! - [`history`]: Shell command history file
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod model;
pub mod source;
