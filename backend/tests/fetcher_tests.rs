mod support;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};

use commit_sky::fetcher::{
    fetch_contributions, ContributionCache, ContributionFetcher, ContributionSource, FetchError,
    FixtureError, InMemorySource,
};
use commit_sky::layout::LayoutConfig;
use support::{day, history};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 9, 30, 0).unwrap()
}

fn fetcher_for(source: Arc<InMemorySource>, ttl: Duration, years: u32) -> ContributionFetcher {
    ContributionFetcher::new(Some(source as Arc<dyn ContributionSource>), ContributionCache::new(ttl), years)
}

#[tokio::test]
async fn test_five_year_history_is_fetched_per_year() {
    let source = Arc::new(InMemorySource::new().with_user("octocat", history(2024, 6)));
    let fetcher = fetcher_for(source.clone(), Duration::from_secs(60), 5);

    let set = fetcher.fetch_at(Some("octocat"), now()).await.unwrap();
    assert_eq!(source.calls(), 5);
    assert_eq!(set.segments.iter().map(|s| s.year).collect::<Vec<_>>(), vec![2020, 2021, 2022, 2023, 2024]);
    // The current year stops at `now`
    assert_eq!(set.records.last().unwrap().date.to_string(), "2024-12-01");
    assert_eq!(set.fetched_at, now());
    assert!(set.records.windows(2).all(|w| w[0].date < w[1].date));
}

#[tokio::test]
async fn test_sparse_years_are_skipped() {
    let source = InMemorySource::new().with_user("octocat", vec![day("2021-03-01", 2), day("2024-05-05", 1)]);

    let records = fetch_contributions(&source, "octocat", 5, now()).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(source.calls(), 5);
}

#[tokio::test]
async fn test_upstream_error_aborts_and_is_not_cached() {
    let source = Arc::new(
        InMemorySource::new()
            .with_user("octocat", history(2024, 2))
            .with_failure(
                2024,
                FetchError::GraphQl {
                    year: 2024,
                    messages: vec!["Could not resolve to a User".to_string()],
                },
            ),
    );
    let fetcher = fetcher_for(source.clone(), Duration::from_secs(60), 2);

    let err = fetcher.fetch_at(Some("octocat"), now()).await.unwrap_err();
    assert!(matches!(err, FetchError::GraphQl { year: 2024, .. }));
    assert_eq!(err.details().as_deref(), Some("Could not resolve to a User"));
    assert_eq!(source.calls(), 1);
    assert!(fetcher.cache().is_empty());
}

#[tokio::test]
async fn test_expired_cache_refetches() {
    let source = Arc::new(InMemorySource::new().with_user("octocat", history(2024, 1)));
    let fetcher = fetcher_for(source.clone(), Duration::ZERO, 1);

    let first = fetcher.fetch_at(Some("octocat"), now()).await.unwrap();
    let second = fetcher.fetch_at(Some("octocat"), now()).await.unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(source.calls(), 2);
    assert_eq!(first.records, second.records);
}

#[tokio::test]
async fn test_fixture_file_source() {
    let records = vec![day("2024-01-01", 3), day("2024-01-02", 0), day("2024-01-03", 8)];
    let fixture = serde_json::json!({ "OctoCat": records });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture.to_string().as_bytes()).unwrap();

    let source = Arc::new(InMemorySource::from_json_file(file.path()).unwrap());
    let fetcher = fetcher_for(source, Duration::from_secs(60), 1);
    assert_eq!(fetcher.source_name(), Some("in-memory"));

    let set = fetcher.fetch_at(Some("octocat"), now()).await.unwrap();
    assert_eq!(set.records, records);

    let config = LayoutConfig::default();
    assert_eq!(set.arc_layout(&config).anchors().len(), 2);
}

#[test]
fn test_bad_fixture_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"octocat\": [ { \"date\": \"nope\" } ] }").unwrap();

    let err = InMemorySource::from_json_file(file.path()).err().unwrap();
    assert!(matches!(err, FixtureError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse fixture file"));

    let missing = InMemorySource::from_json_file("/no/such/fixture.json").err().unwrap();
    assert!(matches!(missing, FixtureError::Read { .. }));
}

#[tokio::test]
async fn test_shipped_fixture_is_well_formed() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/octocat.json");
    let source = Arc::new(InMemorySource::from_json_file(path).unwrap());
    let fetcher = fetcher_for(source, Duration::from_secs(60), 5);

    let later = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
    let set = fetcher.fetch_at(Some("octocat"), later).await.unwrap();
    assert_eq!(set.records.len(), 365 + 365 + 366);
    assert_eq!(set.segments.iter().map(|s| s.year).collect::<Vec<_>>(), vec![2022, 2023, 2024]);
    assert!(commit_sky::layout::validate_records(&set.records).is_ok());
}

#[tokio::test]
async fn test_cache_stays_bounded_across_many_users() {
    let source = (0..200).fold(InMemorySource::new(), |source, i| {
        source.with_user(&format!("user{i}"), vec![day("2024-06-01", 1)])
    });
    let fetcher = fetcher_for(Arc::new(source), Duration::ZERO, 1);

    for i in 0..200 {
        fetcher.fetch_at(Some(&format!("user{i}")), now()).await.unwrap();
    }
    assert!(fetcher.cache().len() <= 1);
}
