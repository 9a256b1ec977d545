//! Tests for the stats aggregator

use super::*;
use crate::test_support::{profile, repo, FakeStatsClient, HangingClient, ManualClock};
use tracing_test::traced_test;

fn sample_repositories() -> Vec<RepositorySummary> {
    vec![
        repo("Hello-World", 2500, 2000, Some("Ruby")),
        repo("Spoon-Knife", 300, 120, None),
        repo("linguist", 40, 25, Some("Ruby")),
        repo("octo-rs", 5, 5, Some("Rust")),
    ]
}

fn aggregator_with(client: Arc<FakeStatsClient>) -> (StatsAggregator, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let aggregator = StatsAggregator::with_clock(client, DEFAULT_CACHE_TTL_SECS, clock.clone());
    (aggregator, clock)
}

#[test]
fn test_totals_are_sums_over_repositories() {
    let repos = sample_repositories();
    let expected_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let expected_forks: u64 = repos.iter().map(|r| r.forks_count).sum();

    let result = AggregateResult::from_parts(profile("octocat"), repos);

    assert_eq!(result.total_stars, expected_stars);
    assert_eq!(result.total_stars, 2845);
    assert_eq!(result.total_forks, expected_forks);
    assert_eq!(result.repos.len(), 4);
}

#[test]
fn test_languages_skip_repositories_without_language() {
    let repos = sample_repositories();
    let with_language = repos.iter().filter(|r| r.language.is_some()).count() as u64;

    let languages = count_languages(&repos);

    assert_eq!(languages.get("Ruby"), Some(&2));
    assert_eq!(languages.get("Rust"), Some(&1));
    assert_eq!(languages.len(), 2);
    assert_eq!(languages.values().sum::<u64>(), with_language);
}

#[test]
fn test_empty_repository_list_yields_zero_totals() {
    let result = AggregateResult::from_parts(profile("octocat"), vec![]);

    assert_eq!(result.total_stars, 0);
    assert_eq!(result.total_forks, 0);
    assert!(result.languages.is_empty());
}

#[test]
fn test_aggregate_serializes_with_camel_case_totals() {
    let result = AggregateResult::from_parts(profile("octocat"), sample_repositories());

    let value = serde_json::to_value(&result).expect("Should serialize");

    assert_eq!(value["totalStars"], 2845);
    assert_eq!(value["totalForks"], 2150);
    assert_eq!(value["languages"]["Ruby"], 2);
    assert_eq!(value["user"]["login"], "octocat");
    assert_eq!(value["user"]["public_repos"], 8);
    assert!(value["repos"].is_array());
}

#[tokio::test]
async fn test_fetch_stats_aggregates_upstream_data() {
    let client = Arc::new(FakeStatsClient::new(profile("octocat"), sample_repositories()));
    let (aggregator, _clock) = aggregator_with(client.clone());

    let result = aggregator.fetch_stats("octocat").await.unwrap();

    assert_eq!(result.user.login, "octocat");
    assert_eq!(result.total_stars, 2845);
    assert_eq!(client.profile_calls(), 1);
    assert_eq!(client.repository_calls(), 1);
}

#[tokio::test]
async fn test_profile_failure_fails_whole_aggregation() {
    let mut fake = FakeStatsClient::new(profile("ghost"), sample_repositories());
    fake.profile = Err(404);
    let (aggregator, _clock) = aggregator_with(Arc::new(fake));

    let result = aggregator.fetch_stats("ghost").await;

    assert_eq!(result, Err(StatsError::Upstream { status: 404 }));
}

#[tokio::test]
async fn test_repository_failure_fails_whole_aggregation() {
    let mut fake = FakeStatsClient::new(profile("octocat"), vec![]);
    fake.repositories = Err(503);
    let (aggregator, _clock) = aggregator_with(Arc::new(fake));

    let result = aggregator.fetch_stats("octocat").await;

    assert_eq!(result, Err(StatsError::Upstream { status: 503 }));
}

#[tokio::test]
async fn test_repeated_fetch_within_window_is_served_from_cache() {
    let client = Arc::new(FakeStatsClient::new(profile("octocat"), sample_repositories()));
    let (aggregator, clock) = aggregator_with(client.clone());

    let first = aggregator.fetch_stats("octocat").await.unwrap();
    clock.advance(Duration::minutes(59));
    let second = aggregator.fetch_stats("octocat").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(client.profile_calls(), 1);
    assert_eq!(client.repository_calls(), 1);
    assert_eq!(aggregator.cached_handles(), 1);
}

#[tokio::test]
async fn test_fetch_after_window_goes_upstream_again() {
    let client = Arc::new(FakeStatsClient::new(profile("octocat"), sample_repositories()));
    let (aggregator, clock) = aggregator_with(client.clone());

    aggregator.fetch_stats("octocat").await.unwrap();
    clock.advance(Duration::hours(1));
    aggregator.fetch_stats("octocat").await.unwrap();

    assert_eq!(client.profile_calls(), 2);
    assert_eq!(client.repository_calls(), 2);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let mut fake = FakeStatsClient::new(profile("ghost"), vec![]);
    fake.profile = Err(404);
    let client = Arc::new(fake);
    let (aggregator, _clock) = aggregator_with(client.clone());

    let _ = aggregator.fetch_stats("ghost").await;
    let _ = aggregator.fetch_stats("ghost").await;

    assert_eq!(client.profile_calls(), 2);
    assert_eq!(aggregator.cached_handles(), 0);
}

#[tokio::test]
async fn test_concurrent_first_requests_trigger_one_upstream_fetch() {
    let mut fake = FakeStatsClient::new(profile("octocat"), sample_repositories());
    fake.delay = Some(std::time::Duration::from_millis(50));
    let client = Arc::new(fake);
    let (aggregator, _clock) = aggregator_with(client.clone());

    let (a, b) = tokio::join!(
        aggregator.fetch_stats("octocat"),
        aggregator.fetch_stats("octocat")
    );

    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(client.profile_calls(), 1);
    assert_eq!(client.repository_calls(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_cache_hit_is_logged() {
    let client = Arc::new(FakeStatsClient::new(profile("octocat"), sample_repositories()));
    let (aggregator, _clock) = aggregator_with(client);

    aggregator.fetch_stats("octocat").await.unwrap();
    aggregator.fetch_stats("octocat").await.unwrap();

    assert!(logs_contain("Aggregated user statistics"));
    assert!(logs_contain("Serving value from cache"));
}

#[tokio::test(start_paused = true)]
async fn test_hanging_upstream_fails_after_fetch_timeout() {
    let client = Arc::new(HangingClient::default());
    let aggregator = StatsAggregator::with_ttl(client, DEFAULT_CACHE_TTL_SECS)
        .with_fetch_timeout(std::time::Duration::from_secs(5));

    let started = tokio::time::Instant::now();
    let result = aggregator.fetch_stats("octocat").await;

    assert!(matches!(result, Err(StatsError::Transport(_))));
    assert!(started.elapsed() >= std::time::Duration::from_secs(5));
    assert_eq!(aggregator.cached_handles(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_waiters_behind_hanging_fetch_are_bounded_too() {
    let client = Arc::new(HangingClient::default());
    let aggregator = StatsAggregator::with_ttl(client.clone(), DEFAULT_CACHE_TTL_SECS);

    let started = tokio::time::Instant::now();
    let (a, b) = tokio::join!(
        aggregator.fetch_stats("octocat"),
        aggregator.fetch_stats("octocat")
    );

    assert!(a.is_err());
    assert!(b.is_err());
    assert!(started.elapsed() <= DEFAULT_FETCH_TIMEOUT);
}
