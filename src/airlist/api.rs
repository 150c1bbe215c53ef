//! # API Facade
//!
//! The API layer is a thin facade over the cache and the command layer. Every UI
//! (today only the CLI and its shell) goes through [`ListingsApi`].
//!
//! The facade owns the [`ListingCache`] and the source it is filled from, so
//! there is no process-wide state: tests build an API over an
//! [`InMemorySource`](crate::source::memory::InMemorySource), the CLI builds one
//! over a [`CsvFileSource`](crate::source::csv_file::CsvFileSource).
//!
//! It validates user input before anything runs, and returns structured
//! `CmdResult` values. It never prints.

use crate::cache::{ListingCache, PreloadStatus};
use crate::commands::{self, top::DEFAULT_COUNT, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Listing;
use crate::source::ListingSource;

pub use crate::commands::MessageLevel;

pub struct ListingsApi<S: ListingSource> {
    source: S,
    cache: ListingCache,
    default_count: usize,
}

impl<S: ListingSource> ListingsApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: ListingCache::new(),
            default_count: DEFAULT_COUNT,
        }
    }

    pub fn with_default_count(mut self, count: usize) -> Self {
        if count > 0 {
            self.default_count = count;
        }
        self
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// Fills the cache. Must run before the first `top_listings` call.
    pub fn preload(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        match self.cache.preload(&self.source) {
            PreloadStatus::Loaded { kept, discarded } => {
                result.add_message(CmdMessage::success(format!(
                    "Data loaded successfully! ({} listings)",
                    kept
                )));
                if discarded > 0 {
                    result.add_message(CmdMessage::info(format!(
                        "Skipped {} incomplete rows.",
                        discarded
                    )));
                }
            }
            PreloadStatus::Failed(reason) => {
                result.add_message(CmdMessage::error(format!(
                    "Failed to load data: {}",
                    reason
                )));
            }
            PreloadStatus::AlreadyLoaded => {}
        }
        result
    }

    /// The `list-top` operation: validate the count, then rank the cached data.
    pub fn top_listings(&self, count: Option<&str>) -> Result<CmdResult> {
        let count = commands::top::parse_count(count, self.default_count)?;
        Ok(commands::top::run(self.cache.get(), count))
    }

    pub fn listings(&self) -> &[Listing] {
        self.cache.get()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AirlistError;
    use crate::source::memory::InMemorySource;

    const CSV: &str = "\
listing_id,date,available,price
1,2024-01-01,t,$300
2,2024-01-01,f,\"$1,200.50\"
3,2024-01-02,t,$50
4,2024-01-02,t,
";

    fn loaded_api() -> ListingsApi<InMemorySource> {
        let mut api = ListingsApi::new(InMemorySource::new(CSV));
        api.preload();
        api
    }

    #[test]
    fn preload_reports_counts() {
        let mut api = ListingsApi::new(InMemorySource::new(CSV));
        let result = api.preload();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("3 listings"));
        assert!(result.messages[1].content.contains("Skipped 1"));
        assert_eq!(api.listings().len(), 3);
    }

    #[test]
    fn top_two_by_price() {
        let api = loaded_api();
        let result = api.top_listings(Some("2")).unwrap();

        let prices: Vec<f64> = result.listings.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![1200.5, 300.0]);
        assert!(api
            .listings()
            .iter()
            .all(|l| l.listing_id() != Some("4")));
    }

    #[test]
    fn default_count_applies_without_argument() {
        let api = loaded_api().with_default_count(1);
        let result = api.top_listings(None).unwrap();
        assert_eq!(result.listings.len(), 1);
    }

    #[test]
    fn zero_default_count_is_ignored() {
        let api = loaded_api().with_default_count(0);
        assert_eq!(api.default_count(), DEFAULT_COUNT);
    }

    #[test]
    fn invalid_count_is_rejected_before_ranking() {
        let api = loaded_api();
        for raw in ["0", "-3", "many"] {
            let err = api.top_listings(Some(raw)).unwrap_err();
            assert!(matches!(err, AirlistError::Validation(_)));
        }
    }

    #[test]
    fn missing_source_degrades_to_no_listings() {
        let mut api = ListingsApi::new(InMemorySource::failing());
        let preload = api.preload();
        assert_eq!(preload.messages[0].level, MessageLevel::Error);

        let result = api.top_listings(None).unwrap();
        assert!(result.listings.is_empty());
        assert_eq!(result.messages[0].content, "No listings found.");
    }

    #[test]
    fn repeated_queries_read_source_once() {
        let api = loaded_api();
        api.top_listings(Some("1")).unwrap();
        api.top_listings(Some("3")).unwrap();
        assert_eq!(api.source().load_count(), 1);
    }
}
