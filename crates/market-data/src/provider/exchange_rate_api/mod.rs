//! ExchangeRate-API provider for latest exchange rates.
//!
//! Fetches `GET {base_url}/{BASE}` and expects a JSON body with a `rates`
//! object mapping target currency codes to multipliers against `BASE`.
//! Only latest rates are available; there is no historical endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::RateTable;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Public endpoint of the quote service
pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// Default HTTP request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response from ExchangeRate-API
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// `"success"` or `"error"`; older endpoints omit it
    result: Option<String>,
    /// Reason given alongside `"result": "error"`
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    /// Base currency echoed by the service
    base: Option<String>,
    /// 1 base = rate target
    rates: Option<HashMap<String, f64>>,
}

/// ExchangeRate-API provider.
///
/// # Example
///
/// ```ignore
/// use neexa_market_data::ExchangeRateApiProvider;
///
/// let provider = ExchangeRateApiProvider::new(DEFAULT_BASE_URL);
/// let table = provider.fetch_rates("USD").await?;
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiProvider {
    /// Create a provider against `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a provider against `base_url` with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn latest_url(&self, base: &str) -> String {
        format!("{}/{}", self.base_url, base)
    }

    /// Turns a response body for `base` into a rate table.
    fn parse_latest(base: &str, body: &str) -> Result<RateTable, MarketDataError> {
        let invalid = |message: String| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message,
        };

        let parsed: LatestRatesResponse =
            serde_json::from_str(body).map_err(|e| invalid(e.to_string()))?;

        if parsed.result.as_deref() == Some("error") {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: parsed
                    .error_type
                    .unwrap_or_else(|| "unspecified error".to_string()),
            });
        }

        if let Some(echoed) = parsed.base.as_deref() {
            if !echoed.eq_ignore_ascii_case(base) {
                return Err(invalid(format!("asked for {} but got {}", base, echoed)));
            }
        }

        let rates = parsed
            .rates
            .ok_or_else(|| invalid("missing field `rates`".to_string()))?;

        let table = RateTable::from_base(base, rates);
        if table.is_empty() {
            return Err(invalid(format!("no usable rates for {}", base)));
        }

        Ok(table)
    }

    fn map_transport_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    }
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rates(&self, base: &str) -> Result<RateTable, MarketDataError> {
        let url = self.latest_url(base);
        log::debug!("Fetching latest rates for {} from {}", base, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::map_transport_error)?;
        Self::parse_latest(base, &body)
    }
}
