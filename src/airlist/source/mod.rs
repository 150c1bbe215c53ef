//! # Record Source
//!
//! This module defines where listings come from. The [`ListingSource`] trait lets
//! the rest of the application load listings without knowing whether they live in
//! a file on disk or in a string built by a test.
//!
//! ## Implementations
//!
//! - [`csv_file::CsvFileSource`]: production source, reads a CSV file from a path
//! - [`memory::InMemorySource`]: CSV text held in memory, for tests
//!
//! ## Parsing Rules
//!
//! Both implementations share [`parse_listings`]:
//! - The first row is the header; its names become field names
//! - Whitespace around every value (and header) is trimmed
//! - Empty lines are skipped
//! - Rows missing any of [`REQUIRED_FIELDS`](crate::model::REQUIRED_FIELDS), or
//!   holding an empty value for one, are dropped and counted
//! - Rows that fail to decode are dropped and counted as well
//!
//! Only a broken stream fails the whole load: an unreadable path, an unreadable
//! header row, or an I/O error half-way through.

use crate::error::Result;
use crate::model::Listing;
use std::io::Read;
use tracing::debug;

pub mod csv_file;
pub mod memory;

/// Listings that survived validation plus the number of rows that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub listings: Vec<Listing>,
    pub discarded: usize,
}

/// Anything that can produce the full listing dataset.
pub trait ListingSource {
    fn load(&self) -> Result<LoadReport>;

    /// Human readable origin, used in log lines and messages.
    fn describe(&self) -> String;
}

/// Parses CSV text with a header row into validated listings.
pub fn parse_listings<R: Read>(input: R) -> Result<LoadReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut report = LoadReport::default();

    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!(row = idx + 1, error = %e, "skipping undecodable row");
                report.discarded += 1;
                continue;
            }
        };

        let listing = Listing::from_pairs(headers.iter().zip(record.iter()));
        if listing.has_required_fields() {
            report.listings.push(listing);
        } else {
            report.discarded += 1;
        }
    }

    debug!(
        kept = report.listings.len(),
        discarded = report.discarded,
        "parsed listings"
    );
    Ok(report)
}
