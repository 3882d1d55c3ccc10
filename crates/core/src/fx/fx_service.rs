use super::currency::{currency_by_code, Currency, CURRENCIES};
use super::currency_converter::{convert, resolve_rate};
use super::formatter::CurrencyFormatter;
use super::fx_errors::FxError;
use super::fx_model::{FxConversion, RatePoint, Trend};
use super::fx_traits::FxServiceTrait;
use super::trend::{classify_trend, today, RateHistorySource, SyntheticRateHistory};
use crate::constants::TREND_SAMPLES;
use crate::errors::Result;
use crate::settings::FxSettings;
use async_trait::async_trait;
use neexa_market_data::{ExchangeRateApiProvider, RateSnapshot, RateSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// The installed rate snapshot and the refresh that produced it.
struct RateState {
    snapshot: Arc<RateSnapshot>,
    ticket: u64,
}

/// Converter service: owns the current rate table and answers conversion,
/// trend and formatting requests against it.
///
/// The table is swapped wholesale on refresh. Each refresh takes a ticket
/// before it starts fetching, and a finished fetch is only installed if no
/// later ticket has been installed first, so a slow response can never
/// overwrite a newer table.
#[derive(Clone)]
pub struct FxService {
    source: RateSource,
    base_currency: String,
    formatter: CurrencyFormatter,
    history: Arc<dyn RateHistorySource>,
    state: Arc<RwLock<RateState>>,
    next_ticket: Arc<AtomicU64>,
}

impl FxService {
    /// Creates a service that starts out on the fallback table until the
    /// first refresh.
    pub fn new(source: RateSource, base_currency: &str) -> Self {
        let snapshot = Arc::new(source.fallback_snapshot(base_currency));
        Self {
            source,
            base_currency: base_currency.to_string(),
            formatter: CurrencyFormatter::default(),
            history: Arc::new(SyntheticRateHistory::new()),
            state: Arc::new(RwLock::new(RateState {
                snapshot,
                ticket: 0,
            })),
            next_ticket: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Wires the HTTP quote provider described by `settings`.
    pub fn from_settings(settings: &FxSettings) -> Self {
        let provider = ExchangeRateApiProvider::with_timeout(
            settings.quote_base_url.clone(),
            settings.request_timeout,
        );
        Self::new(RateSource::new(Arc::new(provider)), &settings.base_currency)
            .with_formatter(CurrencyFormatter::new(settings.locale))
    }

    /// Sets the source of rate histories used for trends.
    pub fn with_history_source(mut self, history: Arc<dyn RateHistorySource>) -> Self {
        self.history = history;
        self
    }

    pub fn with_formatter(mut self, formatter: CurrencyFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// The rate snapshot conversions currently run against.
    pub fn snapshot(&self) -> Result<Arc<RateSnapshot>> {
        let state = self
            .state
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        Ok(state.snapshot.clone())
    }

    /// Fetches rates quoted against `base` and installs them unless a newer
    /// refresh already has. Returns the snapshot installed afterwards.
    pub async fn refresh_rates_for(&self, base: &str) -> Result<Arc<RateSnapshot>> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst);
        let fetched = Arc::new(self.source.fetch(base).await);

        let mut state = self
            .state
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;

        if ticket > state.ticket {
            state.snapshot = fetched;
            state.ticket = ticket;
        } else {
            log::debug!(
                "Discarding rates from refresh #{} for {}, refresh #{} is newer",
                ticket,
                base,
                state.ticket
            );
        }

        Ok(state.snapshot.clone())
    }

    /// Units of `to` per unit of `from` under the current snapshot.
    pub fn rate(&self, from: &str, to: &str) -> Result<f64> {
        let snapshot = self.snapshot()?;
        Ok(resolve_rate(from, to, &snapshot.table).0)
    }

    pub fn currency(&self, code: &str) -> Result<&'static Currency> {
        currency_by_code(code).ok_or_else(|| FxError::UnknownCurrency(code.to_string()).into())
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn refresh_rates(&self) -> Result<Arc<RateSnapshot>> {
        self.refresh_rates_for(&self.base_currency).await
    }

    fn convert(&self, amount: f64, from: &str, to: &str) -> Result<FxConversion> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FxError::InvalidAmount(amount).into());
        }

        let snapshot = self.snapshot()?;
        Ok(FxConversion {
            result: convert(amount, from, to, &snapshot.table),
            freshness: snapshot.freshness,
        })
    }

    fn historical_rates(&self, from: &str, to: &str, days: usize) -> Result<Vec<RatePoint>> {
        let current_rate = self.rate(from, to)?;
        Ok(self.history.history(from, to, current_rate, days, today()))
    }

    fn trend(&self, from: &str, to: &str) -> Result<Trend> {
        let history = self.historical_rates(from, to, TREND_SAMPLES - 1)?;
        Ok(classify_trend(&history))
    }

    fn format(&self, amount: f64, currency_code: &str) -> String {
        self.formatter.format(amount, currency_code)
    }

    fn currencies(&self) -> &'static [Currency] {
        CURRENCIES
    }
}
