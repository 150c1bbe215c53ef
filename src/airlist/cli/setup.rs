use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub const PROMPT: &str = "> ";
pub const SHORT_HELP: &str = "Type a command to continue (`help` for usage, `quit` or Ctrl-D to exit):";
pub const FAREWELL: &str = "Exiting Airbnb CLI. Have a great day!";

#[derive(Parser, Debug)]
#[command(name = "airlist", bin_name = "airlist", version)]
#[command(about = "Rank rental listings by price", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Listings CSV file (overrides the configured data file)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the top N highest-priced listings (default: 10)
    #[command(visible_alias = "ptoplist", display_order = 1)]
    ListTop {
        /// Number of listings to show
        #[arg(allow_hyphen_values = true)]
        count: Option<String>,
    },
}

impl Commands {
    /// The command as it should be recalled from history. Process-level flags
    /// such as `--data` are left out since they mean nothing inside the shell.
    pub fn history_line(&self) -> String {
        match self {
            Commands::ListTop { count } => match count.as_deref().map(str::trim) {
                Some(count) if !count.is_empty() => format!("list-top {}", count),
                _ => "list-top".to_string(),
            },
        }
    }
}

/// Returns the banner shown when the interactive shell starts.
pub fn get_welcome_text() -> String {
    let cmd = Cli::command();

    let mut output = String::new();
    output.push('\n');
    output.push_str("Welcome to the Airbnb CLI!\n");
    output.push('\n');
    output.push_str("Available commands:\n");

    for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
        let positionals: Vec<String> = sc
            .get_arguments()
            .filter(|arg| arg.is_positional())
            .map(|arg| format!("[{}]", arg.get_id()))
            .collect();
        let usage = if positionals.is_empty() {
            sc.get_name().to_string()
        } else {
            format!("{} {}", sc.get_name(), positionals.join(" "))
        };
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<20} {}\n", usage, about));

        let aliases: Vec<&str> = sc.get_visible_aliases().collect();
        if !aliases.is_empty() {
            output.push_str(&format!("  {:<20} (alias: {})\n", "", aliases.join(", ")));
        }
    }

    output.push('\n');
    output.push_str(SHORT_HELP);
    output.push('\n');
    output
}
