//! Contribution sources and the multi-year fetch loop on top of them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use parking_lot::RwLock;

use super::error::{FetchError, FetchResult};
use crate::models::DayRecord;

/// Number of calendar years fetched by default, current year included.
pub const DEFAULT_YEARS: u32 = 5;

/// Upper bound on the configurable number of years; one request is sent per year.
pub const MAX_YEARS: u32 = 20;

/// Errors raised while loading a fixture file for [`InMemorySource`].
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Time range of one calendar request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub year: i32,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl YearWindow {
    /// Whether `date` falls inside this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from.date_naive() && date <= self.to.date_naive()
    }
}

/// Windows for the `years` most recent calendar years, newest first.
///
/// The current year ends at `now`; earlier years end on 31 December 23:59:59.
/// Stops early once a year falls outside the representable date range.
pub fn year_windows(years: u32, now: DateTime<Utc>) -> Vec<YearWindow> {
    let current_year = now.year();

    (0..years)
        .map_while(|i| {
            let i = i32::try_from(i).ok()?;
            let year = current_year - i;
            let from = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?.and_utc();
            let to = if i == 0 {
                now
            } else {
                NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_opt(23, 59, 59)?.and_utc()
            };
            Some(YearWindow { year, from, to })
        })
        .collect()
}

/// Something that can produce one year of a user's contribution calendar.
///
/// `Ok(None)` means the source answered but had no calendar for that window.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    async fn fetch_year(&self, username: &str, window: &YearWindow) -> FetchResult<Option<Vec<DayRecord>>>;

    /// Short name for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Fetch every window in turn and merge the results.
///
/// The first failing window aborts the whole fetch. The merged sequence is
/// sorted by date with duplicate dates removed.
pub async fn fetch_contributions(
    source: &dyn ContributionSource,
    username: &str,
    years: u32,
    now: DateTime<Utc>,
) -> FetchResult<Vec<DayRecord>> {
    let username = username.trim();
    if username.is_empty() {
        return Err(FetchError::MissingUsername);
    }

    let mut records = Vec::new();
    for window in year_windows(years, now) {
        log::info!("Fetching contributions for {}, year {}...", username, window.year);

        match source.fetch_year(username, &window).await {
            Ok(Some(days)) => records.extend(days),
            Ok(None) => log::warn!("No contribution calendar data found for year {}", window.year),
            Err(e) => {
                log::error!("Fetching {} for year {} failed: {}", username, window.year, e);
                return Err(e);
            }
        }
    }

    if records.is_empty() {
        return Err(FetchError::NoData {
            username: username.to_string(),
        });
    }

    records.sort_by_key(|r| r.date);
    records.dedup_by_key(|r| r.date);

    log::info!("Returning {} total contributions for {}.", records.len(), username);
    Ok(records)
}

/// In-memory source backed by fixed per-user record lists.
///
/// Used for offline mode and tests. Usernames are matched case-insensitively.
#[derive(Default)]
pub struct InMemorySource {
    users: RwLock<HashMap<String, Vec<DayRecord>>>,
    failures: RwLock<HashMap<i32, FetchError>>,
    calls: AtomicUsize,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the records of `username`.
    pub fn with_user(self, username: &str, records: Vec<DayRecord>) -> Self {
        self.users.write().insert(username.to_lowercase(), records);
        self
    }

    /// Make every request for `year` fail with `error`.
    pub fn with_failure(self, year: i32, error: FetchError) -> Self {
        self.failures.write().insert(year, error);
        self
    }

    /// Load a JSON object mapping usernames to record arrays.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let users: HashMap<String, Vec<DayRecord>> =
            serde_json::from_str(&content).map_err(|source| FixtureError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let source = Self::new();
        for (username, records) in users {
            source.users.write().insert(username.to_lowercase(), records);
        }
        Ok(source)
    }

    /// Number of `fetch_year` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContributionSource for InMemorySource {
    async fn fetch_year(&self, username: &str, window: &YearWindow) -> FetchResult<Option<Vec<DayRecord>>> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if let Some(error) = self.failures.read().get(&window.year) {
            return Err(error.clone());
        }

        let users = self.users.read();
        let Some(records) = users.get(&username.to_lowercase()) else {
            return Ok(None);
        };

        let days: Vec<DayRecord> = records
            .iter()
            .filter(|r| window.contains(r.date))
            .copied()
            .collect();
        Ok(if days.is_empty() { None } else { Some(days) })
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
