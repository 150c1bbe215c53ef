use super::{parse_listings, ListingSource, LoadReport};
use crate::error::{AirlistError, Result};
use std::cell::Cell;
use std::io;

/// CSV text held in memory. Counts how many times it was loaded so tests can
/// check that the cache only reads once.
#[derive(Default)]
pub struct InMemorySource {
    csv: String,
    fail: bool,
    loads: Cell<usize>,
}

impl InMemorySource {
    pub fn new(csv: impl Into<String>) -> Self {
        Self {
            csv: csv.into(),
            ..Self::default()
        }
    }

    /// A source whose every load fails like a missing file.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl ListingSource for InMemorySource {
    fn load(&self) -> Result<LoadReport> {
        self.loads.set(self.loads.get() + 1);
        if self.fail {
            return Err(AirlistError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "in-memory source configured to fail",
            )));
        }
        parse_listings(self.csv.as_bytes())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
