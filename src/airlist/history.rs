//! Command history kept across sessions.
//!
//! The file is plain text, one command per line, and only ever appended to.
//! History is a convenience: a missing or unreadable file never stops the
//! shell from starting, and a failed append never fails a command.

use crate::error::{AirlistError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Reads previous commands, oldest first, keeping at most the last `limit`.
pub fn load_history(path: &Path, limit: usize) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read history");
            return Vec::new();
        }
    };

    let entries: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    let skip = entries.len().saturating_sub(limit);
    entries.into_iter().skip(skip).collect()
}

/// Appends one command. Blank commands are ignored.
pub fn append_history(path: &Path, command: &str) -> Result<()> {
    let command = command.trim();
    if command.is_empty() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(AirlistError::Io)?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(AirlistError::Io)?;
    writeln!(file, "{}", command).map_err(AirlistError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty_history() {
        let temp = TempDir::new().unwrap();
        assert!(load_history(&temp.path().join("none"), 50).is_empty());
    }

    #[test]
    fn append_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data").join(".history");

        append_history(&path, "list-top 5").unwrap();
        append_history(&path, "  list-top  ").unwrap();
        append_history(&path, "   ").unwrap();

        assert_eq!(load_history(&path, 50), vec!["list-top 5", "list-top"]);
    }

    #[test]
    fn load_keeps_most_recent_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".history");
        fs::write(&path, "one\n\ntwo\nthree\nfour\n").unwrap();

        assert_eq!(load_history(&path, 2), vec!["three", "four"]);
        assert_eq!(load_history(&path, 10).len(), 4);
    }

    #[test]
    fn directory_in_place_of_file_is_tolerated() {
        let temp = TempDir::new().unwrap();
        assert!(load_history(temp.path(), 50).is_empty());
        assert!(append_history(temp.path(), "list-top").is_err());
    }
}
