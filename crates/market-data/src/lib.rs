//! Neexa Market Data Crate
//!
//! Exchange-rate fetching for the Neexa converter.
//!
//! # Overview
//!
//! ```text
//! +------------------+      +------------------+
//! |   RateProvider   | ---> |    RateSource    |  (never fails)
//! +------------------+      +------------------+
//!                                   |
//!          provider error? ---------+--------- ok
//!                 |                                |
//!                 v                                v
//!      +--------------------+          +--------------------+
//!      | fallback snapshot  |          |   live snapshot    |
//!      +--------------------+          +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateTable`] - Rates keyed by base currency, then target currency
//! - [`RateSnapshot`] - A shared table plus where it came from
//! - [`RateFreshness`] - Live or fallback
//! - [`RateProvider`] - Trait implemented by quote services
//! - [`RateSource`] - Provider plus fallback

pub mod errors;
pub mod models;
pub mod provider;
mod source;

pub use errors::MarketDataError;
pub use models::{
    is_usable_rate, CurrencyCode, ProviderId, RateFreshness, RateSnapshot, RateTable, USD,
};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::fallback::{fallback_rates, FALLBACK_PROVIDER_ID};
pub use provider::RateProvider;
pub use source::RateSource;
