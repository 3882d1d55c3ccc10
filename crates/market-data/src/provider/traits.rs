//! Exchange-rate provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RateTable;

/// Trait for exchange-rate providers.
///
/// Implement this trait to add support for a new quote service. Providers
/// report failures as [`MarketDataError`]; deciding what to do about them is
/// left to [`RateSource`](crate::RateSource).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use neexa_market_data::{MarketDataError, RateProvider, RateTable};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl RateProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_rates(&self, base: &str) -> Result<RateTable, MarketDataError> {
///         Ok(RateTable::from_base(base, [("EUR", 0.85)]))
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Used for logging and recorded on every live snapshot.
    fn id(&self) -> &'static str;

    /// Fetch the table of rates quoted against `base`.
    ///
    /// The base currency is passed through as given; providers do not
    /// validate it against any catalog.
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, MarketDataError>;
}
