//! Cache-backed profile aggregation
//!
//! Composes the GitHub source, the aggregator and the TTL cache. A miss on
//! either aggregate triggers one [`ProfileService::refresh`], which fetches
//! once and writes both the languages and the stats entry.

use crate::aggregator::{aggregate_languages, derive_stats, ContributionStats, LanguageUsage};
use crate::cache::{cache_key, CacheKind, TtlCache};
use crate::config::CardsConfig;
use crate::github::{GitHubClient, ProfileSource};
use crate::{metrics, CardsError, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Both aggregates produced by one remote fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    pub languages: Vec<LanguageUsage>,
    pub stats: ContributionStats,
}

/// Serves aggregates from cache, refreshing from GitHub on a miss
pub struct ProfileService {
    source: Arc<dyn ProfileSource>,
    cache: Arc<TtlCache>,
    default_username: Option<String>,
}

impl ProfileService {
    pub fn new(source: Arc<dyn ProfileSource>, cache: Arc<TtlCache>) -> Self {
        Self {
            source,
            cache,
            default_username: None,
        }
    }

    /// Service backed by the live GitHub API, configured from `config`
    pub fn from_config(config: &CardsConfig) -> Result<Self> {
        let client = GitHubClient::new(&config.github)?;
        if !client.is_authenticated() {
            warn!("No GitHub token configured; GraphQL requests will be rejected");
        }
        let cache = Arc::new(TtlCache::new(config.cache_ttl()));
        Ok(Self::new(Arc::new(client), cache)
            .with_default_username(config.github.default_username.clone()))
    }

    /// Username used when a request names none
    pub fn with_default_username(mut self, username: Option<String>) -> Self {
        self.default_username = username.filter(|u| !u.trim().is_empty());
        self
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// Pick the requested username, falling back to the configured default
    pub fn resolve_username(&self, requested: Option<&str>) -> Result<String> {
        requested
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_username.clone())
            .ok_or(CardsError::MissingUsername)
    }

    /// Fetch from GitHub, aggregate, and write both cache entries
    ///
    /// Nothing is written unless both aggregates were produced.
    pub async fn refresh(&self, username: &str) -> Result<Aggregates> {
        let started = Instant::now();
        let profile = match self.source.fetch_user_profile(username).await {
            Ok(profile) => profile,
            Err(e) => {
                metrics::record_fetch_error(e.kind());
                warn!(username = %username, error = %e, "GitHub profile fetch failed");
                return Err(e);
            }
        };
        metrics::record_fetch_duration(started.elapsed().as_secs_f64());

        let stats = derive_stats(username, profile.contributions.as_ref())?;
        let languages = aggregate_languages(&profile.repositories);

        self.cache
            .set_as(cache_key(username, CacheKind::Languages), &languages)?;
        self.cache
            .set_as(cache_key(username, CacheKind::Stats), &stats)?;

        info!(
            username = %username,
            repositories = profile.repositories.len(),
            languages = languages.len(),
            "Refreshed cached aggregates"
        );

        Ok(Aggregates { languages, stats })
    }

    /// Top languages for `username`, from cache or a fresh fetch
    pub async fn fetch_aggregated_languages(&self, username: &str) -> Result<Vec<LanguageUsage>> {
        let key = cache_key(username, CacheKind::Languages);
        if let Some(languages) = self.cache.get_as::<Vec<LanguageUsage>>(&key)? {
            return Ok(languages);
        }
        Ok(self.refresh(username).await?.languages)
    }

    /// Contribution stats for `username`, from cache or a fresh fetch
    pub async fn fetch_aggregated_stats(&self, username: &str) -> Result<ContributionStats> {
        let key = cache_key(username, CacheKind::Stats);
        if let Some(stats) = self.cache.get_as::<ContributionStats>(&key)? {
            return Ok(stats);
        }
        Ok(self.refresh(username).await?.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::github::{ContributionsSummary, LanguageEdge, RepositoryLanguages, UserProfile};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FakeSource {
        calls: AtomicUsize,
        contributions: Option<ContributionsSummary>,
        fail: bool,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                contributions: Some(ContributionsSummary {
                    total_commit_contributions: 50,
                    total_pull_request_contributions: 10,
                    total_issue_contributions: 5,
                }),
                fail: false,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfileSource for FakeSource {
        async fn fetch_user_profile(&self, username: &str) -> Result<UserProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CardsError::RemoteFetch("HTTP 500".to_string()));
            }
            Ok(UserProfile {
                login: username.to_string(),
                repositories: vec![RepositoryLanguages {
                    name: "cards".to_string(),
                    languages: vec![LanguageEdge::new("Rust", 80), LanguageEdge::new("Go", 20)],
                }],
                contributions: self.contributions,
            })
        }
    }

    fn service(source: Arc<FakeSource>) -> (ProfileService, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let cache = Arc::new(TtlCache::with_clock(Duration::from_secs(60), clock.clone()));
        (ProfileService::new(source, cache), clock)
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let source = Arc::new(FakeSource::new());
        let (service, _clock) = service(source.clone());

        let first = service.fetch_aggregated_languages("octocat").await.unwrap();
        let second = service.fetch_aggregated_languages("octocat").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0], LanguageUsage::new("Rust", 80));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_languages_miss_also_fills_stats() {
        let source = Arc::new(FakeSource::new());
        let (service, _clock) = service(source.clone());

        service.fetch_aggregated_languages("octocat").await.unwrap();
        let stats = service.fetch_aggregated_stats("octocat").await.unwrap();

        assert_eq!(stats, ContributionStats::new(50, 10, 5));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_refetches_after_ttl() {
        let source = Arc::new(FakeSource::new());
        let (service, clock) = service(source.clone());

        service.fetch_aggregated_stats("octocat").await.unwrap();
        clock.advance(Duration::from_secs(60));
        service.fetch_aggregated_stats("octocat").await.unwrap();

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_writes_nothing() {
        let source = Arc::new(FakeSource {
            fail: true,
            ..FakeSource::new()
        });
        let (service, _clock) = service(source.clone());

        let err = service.fetch_aggregated_languages("octocat").await.unwrap_err();
        assert!(matches!(err, CardsError::RemoteFetch(_)));
        assert!(service.cache().is_empty());
    }

    #[tokio::test]
    async fn test_missing_stats_writes_nothing() {
        let source = Arc::new(FakeSource {
            contributions: None,
            ..FakeSource::new()
        });
        let (service, _clock) = service(source.clone());

        let err = service.fetch_aggregated_languages("octocat").await.unwrap_err();
        assert!(matches!(err, CardsError::MissingStats(_)));
        assert!(service.cache().is_empty());
    }

    #[test]
    fn test_resolve_username() {
        let (service, _clock) = service(Arc::new(FakeSource::new()));
        assert!(matches!(
            service.resolve_username(None),
            Err(CardsError::MissingUsername)
        ));

        let service = service.with_default_username(Some("default-user".to_string()));
        assert_eq!(service.resolve_username(Some("  ")).unwrap(), "default-user");
        assert_eq!(service.resolve_username(Some("octocat")).unwrap(), "octocat");
    }
}
