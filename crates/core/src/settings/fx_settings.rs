//! Converter configuration, read from the environment.

use std::time::Duration;

use neexa_market_data::provider::exchange_rate_api::{DEFAULT_BASE_URL, REQUEST_TIMEOUT};

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::{Error, Result};
use crate::fx::NumberLocale;

pub const ENV_QUOTE_BASE_URL: &str = "NEEXA_QUOTE_BASE_URL";
pub const ENV_BASE_CURRENCY: &str = "NEEXA_BASE_CURRENCY";
pub const ENV_QUOTE_TIMEOUT_SECS: &str = "NEEXA_QUOTE_TIMEOUT_SECS";
pub const ENV_LOCALE: &str = "NEEXA_LOCALE";

#[derive(Debug, Clone, PartialEq)]
pub struct FxSettings {
    /// Quote service endpoint; the base currency is appended as a path segment.
    pub quote_base_url: String,
    /// Base currency requested on every refresh.
    pub base_currency: String,
    pub request_timeout: Duration,
    pub locale: NumberLocale,
}

impl Default for FxSettings {
    fn default() -> Self {
        Self {
            quote_base_url: DEFAULT_BASE_URL.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            locale: NumberLocale::default(),
        }
    }
}

impl FxSettings {
    /// Reads settings from `NEEXA_*` environment variables, falling back to
    /// defaults for anything unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut settings = Self::default();

        if let Some(url) = read(ENV_QUOTE_BASE_URL) {
            settings.quote_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(base) = read(ENV_BASE_CURRENCY) {
            settings.base_currency = base.to_ascii_uppercase();
        }

        if let Some(secs) = read(ENV_QUOTE_TIMEOUT_SECS) {
            let secs = secs.parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!("{}={}", ENV_QUOTE_TIMEOUT_SECS, secs))
            })?;
            settings.request_timeout = Duration::from_secs(secs);
        }

        if let Some(tag) = read(ENV_LOCALE) {
            settings.locale = NumberLocale::from_tag(&tag).ok_or_else(|| {
                Error::InvalidConfigValue(format!("{}={}", ENV_LOCALE, tag))
            })?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = FxSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, FxSettings::default());
        assert_eq!(
            settings.quote_base_url,
            "https://api.exchangerate-api.com/v4/latest"
        );
        assert_eq!(settings.base_currency, "USD");
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let settings = FxSettings::from_lookup(lookup(&[
            (ENV_QUOTE_BASE_URL, " http://localhost:9000/latest/ "),
            (ENV_BASE_CURRENCY, "ars"),
            (ENV_QUOTE_TIMEOUT_SECS, "5"),
            (ENV_LOCALE, "es-AR"),
        ]))
        .unwrap();
        assert_eq!(settings.quote_base_url, "http://localhost:9000/latest");
        assert_eq!(settings.base_currency, "ARS");
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.locale, NumberLocale::ES_AR);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let settings =
            FxSettings::from_lookup(lookup(&[(ENV_BASE_CURRENCY, "   ")])).unwrap();
        assert_eq!(settings.base_currency, "USD");
    }

    #[test]
    fn test_invalid_timeout() {
        let err = FxSettings::from_lookup(lookup(&[(ENV_QUOTE_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_invalid_locale() {
        let err = FxSettings::from_lookup(lookup(&[(ENV_LOCALE, "xx")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }
}
