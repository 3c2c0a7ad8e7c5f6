//! Contribution fetching: turn a username into an ordered day-record sequence.
//!
//! ```text
//! ContributionFetcher ──► ContributionCache (hit) ──► Arc<ContributionSet>
//!          │
//!          └─(miss)──► fetch_contributions ──► dyn ContributionSource
//!                                                ├── GitHubClient (GraphQL)
//!                                                └── InMemorySource (fixtures)
//! ```

pub mod cache;
pub mod error;
#[cfg(feature = "github")]
pub mod github;
pub mod graphql;
pub mod source;

use std::sync::Arc;

use chrono::{DateTime, Utc};

pub use cache::ContributionCache;
pub use error::{FetchError, FetchResult};
#[cfg(feature = "github")]
pub use github::GitHubClient;
pub use source::{
    fetch_contributions, year_windows, ContributionSource, FixtureError, InMemorySource, YearWindow,
};

use crate::layout::{segment_by_year, ArcLayout, LayoutConfig};
use crate::models::{DayRecord, YearSegment};

/// A fetched history together with its year segments.
///
/// Segments are computed once here so per-event lookups stay O(1).
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionSet {
    pub username: String,
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<DayRecord>,
    pub segments: Vec<YearSegment>,
}

impl ContributionSet {
    pub fn new(username: &str, records: Vec<DayRecord>) -> Self {
        Self::fetched_at(username, records, Utc::now())
    }

    pub fn fetched_at(username: &str, records: Vec<DayRecord>, fetched_at: DateTime<Utc>) -> Self {
        let segments = segment_by_year(&records);
        Self {
            username: username.to_string(),
            fetched_at,
            records,
            segments,
        }
    }

    /// Layout view over this set.
    pub fn arc_layout<'a>(&'a self, config: &'a LayoutConfig) -> ArcLayout<'a> {
        ArcLayout::new(&self.records, &self.segments, config)
    }
}

/// Cached front door to a [`ContributionSource`].
pub struct ContributionFetcher {
    source: Option<Arc<dyn ContributionSource>>,
    cache: ContributionCache,
    years: u32,
}

impl ContributionFetcher {
    /// `source` is `None` when no upstream credential is configured; every
    /// uncached fetch then fails with [`FetchError::MissingToken`].
    pub fn new(source: Option<Arc<dyn ContributionSource>>, cache: ContributionCache, years: u32) -> Self {
        Self {
            source,
            cache,
            years,
        }
    }

    pub fn source_name(&self) -> Option<&'static str> {
        self.source.as_ref().map(|s| s.name())
    }

    pub fn cache(&self) -> &ContributionCache {
        &self.cache
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    /// Contribution history of `username`, served from cache when fresh.
    pub async fn fetch(&self, username: Option<&str>) -> FetchResult<Arc<ContributionSet>> {
        self.fetch_at(username, Utc::now()).await
    }

    pub async fn fetch_at(&self, username: Option<&str>, now: DateTime<Utc>) -> FetchResult<Arc<ContributionSet>> {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(FetchError::MissingUsername)?;

        if let Some(set) = self.cache.get(username) {
            log::debug!("cache hit for {}", username);
            return Ok(set);
        }

        let source = self.source.as_ref().ok_or(FetchError::MissingToken)?;
        let records = fetch_contributions(source.as_ref(), username, self.years, now).await?;
        let set = Arc::new(ContributionSet::fetched_at(username, records, now));
        self.cache.insert(username, Arc::clone(&set));
        Ok(set)
    }
}
