//! Per-user TTL cache in front of the contribution source.
//!
//! GitHub rate-limits the GraphQL API, so a fetched history is reused for a
//! bounded interval (one hour by default) before it is requested again.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::ContributionSet;

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry {
    stored_at: Instant,
    set: Arc<ContributionSet>,
}

/// Shared, cloneable cache keyed by lower-cased username.
#[derive(Clone)]
pub struct ContributionCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl Default for ContributionCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ContributionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn key(username: &str) -> String {
        username.trim().to_lowercase()
    }

    /// Cached set for `username`, if present and still fresh.
    pub fn get(&self, username: &str) -> Option<Arc<ContributionSet>> {
        self.get_at(username, Instant::now())
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) < self.ttl
    }

    /// A stale entry is dropped on lookup.
    fn get_at(&self, username: &str, now: Instant) -> Option<Arc<ContributionSet>> {
        let key = Self::key(username);
        {
            let entries = self.entries.read();
            let entry = entries.get(&key)?;
            if self.is_fresh(entry, now) {
                return Some(Arc::clone(&entry.set));
            }
        }

        let mut entries = self.entries.write();
        if entries.get(&key).is_some_and(|entry| !self.is_fresh(entry, now)) {
            entries.remove(&key);
        }
        None
    }

    pub fn insert(&self, username: &str, set: Arc<ContributionSet>) {
        self.insert_at(username, set, Instant::now());
    }

    /// Expired entries of other users are purged on every insert.
    fn insert_at(&self, username: &str, set: Arc<ContributionSet>, now: Instant) {
        let mut entries = self.entries.write();
        entries.retain(|_, entry| self.is_fresh(entry, now));
        entries.insert(
            Self::key(username),
            CacheEntry {
                stored_at: now,
                set,
            },
        );
    }

    pub fn invalidate(&self, username: &str) -> bool {
        self.entries.write().remove(&Self::key(username)).is_some()
    }

    /// Drop every expired entry and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| self.is_fresh(entry, now));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
