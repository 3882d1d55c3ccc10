use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::rate_table::RateTable;
use super::types::ProviderId;

/// Where the rates in a snapshot came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateFreshness {
    /// Rates returned by the live quote provider.
    Live,
    /// The embedded fallback table, used when the provider was unavailable.
    Fallback,
}

/// An immutable exchange-rate table together with its provenance.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub table: Arc<RateTable>,
    /// Base currency that was requested.
    pub base: String,
    pub freshness: RateFreshness,
    /// Provider that produced the table ("FALLBACK" for the embedded table).
    pub source: ProviderId,
    pub fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn live(table: RateTable, base: &str, source: ProviderId) -> Self {
        Self {
            table: Arc::new(table),
            base: base.to_string(),
            freshness: RateFreshness::Live,
            source,
            fetched_at: Utc::now(),
        }
    }

    pub fn fallback(table: Arc<RateTable>, base: &str) -> Self {
        Self {
            table,
            base: base.to_string(),
            freshness: RateFreshness::Fallback,
            source: ProviderId::Borrowed(crate::provider::fallback::FALLBACK_PROVIDER_ID),
            fetched_at: Utc::now(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.freshness == RateFreshness::Live
    }
}
