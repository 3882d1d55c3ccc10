//! The rate source: a provider with a guaranteed fallback.

use std::sync::Arc;

use crate::models::{ProviderId, RateSnapshot, RateTable};
use crate::provider::fallback::fallback_rates;
use crate::provider::RateProvider;

/// Fetches rate tables from a provider and degrades to an embedded table.
///
/// [`fetch`](Self::fetch) never fails. Any provider error is logged and the
/// fallback table is returned instead, flagged as
/// [`RateFreshness::Fallback`](crate::RateFreshness::Fallback) so callers
/// can tell approximate rates from live ones.
#[derive(Clone)]
pub struct RateSource {
    provider: Arc<dyn RateProvider>,
    fallback: Arc<RateTable>,
}

impl RateSource {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self {
            provider,
            fallback: fallback_rates(),
        }
    }

    /// Replaces the embedded fallback table.
    pub fn with_fallback(mut self, fallback: RateTable) -> Self {
        self.fallback = Arc::new(fallback);
        self
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// A snapshot of the fallback table, without touching the network.
    pub fn fallback_snapshot(&self, base: &str) -> RateSnapshot {
        RateSnapshot::fallback(self.fallback.clone(), base)
    }

    /// Fetches the latest rates quoted against `base`.
    pub async fn fetch(&self, base: &str) -> RateSnapshot {
        match self.provider.fetch_rates(base).await {
            Ok(table) => {
                log::debug!(
                    "Loaded {} rates for {} from {}",
                    table.row(base).map_or(0, |row| row.len()),
                    base,
                    self.provider.id()
                );
                RateSnapshot::live(table, base, ProviderId::Borrowed(self.provider.id()))
            }
            Err(e) => {
                let outcome = if e.is_provider_response() {
                    "rejected the request"
                } else {
                    "unreachable"
                };
                log::warn!(
                    "Rate provider {} {} for {}, using fallback rates: {}",
                    self.provider.id(),
                    outcome,
                    base,
                    e
                );
                self.fallback_snapshot(base)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MarketDataError;
    use crate::models::RateFreshness;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl RateProvider for FailingProvider {
        fn id(&self) -> &'static str {
            "FAILING"
        }

        async fn fetch_rates(&self, _base: &str) -> Result<RateTable, MarketDataError> {
            Err(MarketDataError::HttpStatus {
                provider: "FAILING".to_string(),
                status: 500,
            })
        }
    }

    struct FixedProvider;

    #[async_trait]
    impl RateProvider for FixedProvider {
        fn id(&self) -> &'static str {
            "FIXED"
        }

        async fn fetch_rates(&self, base: &str) -> Result<RateTable, MarketDataError> {
            Ok(RateTable::from_base(base, [("ARS", 950.0)]))
        }
    }

    #[tokio::test]
    async fn test_failure_returns_fallback() {
        let source = RateSource::new(Arc::new(FailingProvider));
        let first = source.fetch("USD").await;
        let second = source.fetch("USD").await;

        assert_eq!(first.freshness, RateFreshness::Fallback);
        assert_eq!(first.source, "FALLBACK");
        assert_eq!(first.table, second.table);
        assert_eq!(first.table.rate("USD", "ARS"), Some(900.0));
    }

    #[tokio::test]
    async fn test_success_returns_live_table() {
        let source = RateSource::new(Arc::new(FixedProvider));
        let snapshot = source.fetch("USD").await;

        assert!(snapshot.is_live());
        assert_eq!(snapshot.source, "FIXED");
        assert_eq!(snapshot.base, "USD");
        assert_eq!(snapshot.table.rate("USD", "ARS"), Some(950.0));
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let source = RateSource::new(Arc::new(FailingProvider))
            .with_fallback(RateTable::from_base("USD", [("BRL", 5.0)]));
        let snapshot = source.fetch("USD").await;

        assert_eq!(snapshot.table.rate("USD", "BRL"), Some(5.0));
        assert_eq!(snapshot.table.rate("USD", "ARS"), None);
    }
}
