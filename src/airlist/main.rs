//! Binary entry point. All behavior lives in [`cli`]; this file only maps an
//! escaping error to a message and a non-zero exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
