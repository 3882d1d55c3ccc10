//! Exchange-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all providers implement
//! - The ExchangeRate-API HTTP provider
//! - The embedded fallback table used when providers are unavailable

pub mod exchange_rate_api;
pub mod fallback;
mod traits;

pub use traits::RateProvider;
