//! Resilient data access for dashboard summaries.
//!
//! Read paths never fail hard: cached summaries are served while fresh,
//! a missing source degrades to deterministic defaults, and only a total
//! orchestration failure surfaces as an error flag on the response.

pub mod cache;
pub mod defaults;
pub mod retry;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::aggregation::{summarize_team, TeamSummary};
use crate::config::{BurnmapConfig, RetryConfig};
use crate::core::errors::{Error, Result};
use crate::core::{Defect, TeamMember};
use crate::priority::triage::{build_triage, TriageSummary};
use cache::{CacheStats, TtlCache};
use defaults::{DefaultSnapshotProvider, FallbackProvider};
use retry::with_retry;

/// Response envelope returned to callers of the caching layer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            is_loading: false,
            error: Some(message.into()),
        }
    }
}

/// Upstream payload envelope. A transport-level not-ok response is
/// represented the same way as `success: false`; both take the
/// default-substitution path.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> SourceEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// Upstream collaborators; each method is one independently failing
/// source. The `Err` arm is the thrown/transport case.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_members(&self, team: &str) -> Result<SourceEnvelope<Vec<TeamMember>>>;
    async fn fetch_defects(&self, team: &str) -> Result<SourceEnvelope<Vec<Defect>>>;
}

/// Cached, summarized view served to the dashboard
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamDashboard {
    pub team: String,
    pub summary: TeamSummary,
    pub triage: TriageSummary,
}

/// Serves team dashboards with caching, retry, and fallback. Owns its
/// cache exclusively.
pub struct TeamInsightsService<S: SnapshotSource> {
    source: S,
    fallback: Box<dyn FallbackProvider>,
    cache: TtlCache<TeamDashboard>,
    retry: RetryConfig,
}

impl<S: SnapshotSource> TeamInsightsService<S> {
    pub fn new(source: S) -> Self {
        Self::with_fallback(source, Box::new(DefaultSnapshotProvider))
    }

    pub fn with_fallback(source: S, fallback: Box<dyn FallbackProvider>) -> Self {
        Self {
            source,
            fallback,
            cache: TtlCache::default(),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_config(source: S, config: &BurnmapConfig) -> Self {
        Self {
            source,
            fallback: Box::new(DefaultSnapshotProvider),
            cache: TtlCache::new(config.cache.ttl()),
            retry: config.retry.clone(),
        }
    }

    fn cache_key(team: &str) -> String {
        format!("team-dashboard:{}", team)
    }

    /// Serve the dashboard for a team, from cache when fresh.
    pub async fn fetch_dashboard(&self, team: &str) -> ServiceResponse<TeamDashboard> {
        self.fetch_dashboard_with_ttl(team, self.cache.default_ttl())
            .await
    }

    /// Same as [`Self::fetch_dashboard`] with a caller-supplied TTL for
    /// the stored result.
    pub async fn fetch_dashboard_with_ttl(
        &self,
        team: &str,
        ttl: Duration,
    ) -> ServiceResponse<TeamDashboard> {
        let key = Self::cache_key(team);
        if let Some(cached) = self.cache.get(&key) {
            log::debug!("Serving cached dashboard for {}", team);
            return ServiceResponse::success(cached);
        }

        match self.assemble_dashboard(team).await {
            Ok(dashboard) => {
                self.cache.insert_with_ttl(key, dashboard.clone(), ttl);
                ServiceResponse::success(dashboard)
            }
            Err(err) => {
                log::warn!("Dashboard assembly failed for {}: {}", team, err);
                ServiceResponse::failure(format!("Unable to load team insights for {}", team))
            }
        }
    }

    /// Fan out both sources, tolerate partial failure, aggregate.
    async fn assemble_dashboard(&self, team: &str) -> Result<TeamDashboard> {
        let source = &self.source;
        let (members_result, defects_result) = tokio::join!(
            with_retry(|| source.fetch_members(team), &self.retry),
            with_retry(|| source.fetch_defects(team), &self.retry),
        );

        if let (Err(members_err), Err(defects_err)) = (&members_result, &defects_result) {
            return Err(Error::source_failure(
                "members+defects",
                format!("{}; {}", members_err, defects_err),
            ));
        }

        let members = match members_result {
            Ok(envelope) => envelope.into_data().unwrap_or_else(|| {
                log::debug!("Members source returned no data for {}; using defaults", team);
                self.fallback.default_members(team)
            }),
            Err(err) => {
                log::debug!("Members source failed for {}: {}; using defaults", team, err);
                self.fallback.default_members(team)
            }
        };

        let defects = match defects_result {
            Ok(envelope) => envelope.into_data().unwrap_or_else(|| {
                log::debug!("Defects source returned no data for {}; using defaults", team);
                self.fallback.default_defects(team)
            }),
            Err(err) => {
                log::debug!("Defects source failed for {}: {}; using defaults", team, err);
                self.fallback.default_defects(team)
            }
        };

        Ok(TeamDashboard {
            team: team.to_string(),
            summary: summarize_team(&members),
            triage: build_triage(&defects),
        })
    }

    /// Drop one team's cached dashboard, or everything.
    pub fn clear_cache(&self, team: Option<&str>) {
        match team {
            Some(team) => self.cache.invalidate(&Self::cache_key(team)),
            None => self.cache.clear(),
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_constructors() {
        let ok: ServiceResponse<u32> = ServiceResponse::success(5);
        assert_eq!(ok.data, Some(5));
        assert!(!ok.is_loading);
        assert!(ok.error.is_none());

        let loading: ServiceResponse<u32> = ServiceResponse::loading();
        assert!(loading.data.is_none());
        assert!(loading.is_loading);

        let failed: ServiceResponse<u32> = ServiceResponse::failure("down");
        assert!(failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("down"));
    }

    #[test]
    fn test_envelope_failed_yields_no_data() {
        let envelope: SourceEnvelope<u32> = SourceEnvelope::failed("HTTP 502");
        assert!(!envelope.success);
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn test_envelope_success_without_payload_yields_no_data() {
        let envelope: SourceEnvelope<u32> = SourceEnvelope {
            success: true,
            data: None,
            error: None,
        };
        assert_eq!(envelope.into_data(), None);
    }
}
