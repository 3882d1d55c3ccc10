//! FX (Foreign Exchange) module - currency catalog, conversion, trends and formatting.

pub mod currency;
pub mod currency_converter;
pub mod formatter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
pub mod trend;

pub use currency::{currency_by_code, symbol_for, Currency, CURRENCIES};
pub use currency_converter::{convert, resolve_rate};
pub use formatter::{format_currency, parse_formatted, CurrencyFormatter, NumberLocale};
pub use fx_errors::FxError;
pub use fx_model::{ConversionResult, FxConversion, RateConfidence, RatePoint, RateResolution, Trend};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
pub use trend::{classify_trend, percent_change, RateHistorySource, SyntheticRateHistory};
