use super::{parse_listings, ListingSource, LoadReport};
use crate::error::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads listings from a CSV file on disk.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingSource for CsvFileSource {
    fn load(&self) -> Result<LoadReport> {
        debug!(path = %self.path.display(), "reading listings file");
        let file = File::open(&self.path)?;
        parse_listings(file)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
