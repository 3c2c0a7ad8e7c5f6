#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{Duration, NaiveDate};
use commit_sky::models::DayRecord;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Record for an ISO date.
pub fn day(date: &str, count: u32) -> DayRecord {
    DayRecord::parse(date, count).expect("valid ISO date")
}

/// Consecutive days starting at `start`, one per entry of `counts`.
pub fn days_from(start: &str, counts: &[u32]) -> Vec<DayRecord> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").expect("valid ISO date");
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| DayRecord::new(start + Duration::days(i as i64), count))
        .collect()
}

/// Every day of `year` with a repeating count pattern.
pub fn full_year(year: i32, pattern: &[u32]) -> Vec<DayRecord> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year");
    start
        .iter_days()
        .take_while(|d| chrono::Datelike::year(d) == year)
        .enumerate()
        .map(|(i, date)| DayRecord::new(date, pattern[i % pattern.len()]))
        .collect()
}

/// `years` full calendar years ending with `last_year`.
pub fn history(last_year: i32, years: i32) -> Vec<DayRecord> {
    (last_year - years + 1..=last_year)
        .flat_map(|year| full_year(year, &[0, 1, 3, 0, 7, 2, 12]))
        .collect()
}
