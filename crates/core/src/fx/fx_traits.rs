use super::currency::Currency;
use super::fx_model::{FxConversion, RatePoint, Trend};
use crate::errors::Result;
use async_trait::async_trait;
use neexa_market_data::RateSnapshot;
use std::sync::Arc;

/// Trait defining the contract for converter operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Fetches fresh rates for the configured base currency.
    async fn refresh_rates(&self) -> Result<Arc<RateSnapshot>>;

    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<FxConversion>;

    fn historical_rates(&self, from: &str, to: &str, days: usize) -> Result<Vec<RatePoint>>;

    fn trend(&self, from: &str, to: &str) -> Result<Trend>;

    fn format(&self, amount: f64, currency_code: &str) -> String;

    fn currencies(&self) -> &'static [Currency];
}
