//! # Listing Cache
//!
//! The dataset is read once, when the application starts, and served from
//! memory afterwards. [`ListingCache`] is that single holder.
//!
//! There is no refresh or invalidation: the file is assumed not to change
//! while the process runs. A failed load is not retried either; the cache
//! settles on an empty dataset so every later [`ListingCache::get`] still
//! has something defined to return.

use crate::model::Listing;
use crate::source::ListingSource;
use tracing::{debug, error};

/// What happened when [`ListingCache::preload`] ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadStatus {
    Loaded { kept: usize, discarded: usize },
    Failed(String),
    AlreadyLoaded,
}

#[derive(Debug, Default)]
pub struct ListingCache {
    listings: Option<Vec<Listing>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the source into memory. Only the first call touches the source.
    pub fn preload<S: ListingSource>(&mut self, source: &S) -> PreloadStatus {
        if self.listings.is_some() {
            debug!("listing cache already populated, skipping preload");
            return PreloadStatus::AlreadyLoaded;
        }

        match source.load() {
            Ok(report) => {
                let kept = report.listings.len();
                debug!(
                    source = %source.describe(),
                    kept,
                    discarded = report.discarded,
                    "listing cache populated"
                );
                self.listings = Some(report.listings);
                PreloadStatus::Loaded {
                    kept,
                    discarded: report.discarded,
                }
            }
            Err(e) => {
                error!(source = %source.describe(), error = %e, "failed to load listings");
                self.listings = Some(Vec::new());
                PreloadStatus::Failed(e.to_string())
            }
        }
    }

    /// The cached listings; empty until [`preload`](Self::preload) has run.
    pub fn get(&self) -> &[Listing] {
        self.listings.as_deref().unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.listings.is_some()
    }
}
