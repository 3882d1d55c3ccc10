//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates from a provider.
///
/// These never reach consumers of [`RateSource`](crate::RateSource): the
/// source logs them and substitutes the fallback table.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider answered, but the body could not be understood.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that answered
        provider: String,
        /// What was wrong with the body
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the provider was reached and answered.
    ///
    /// Transport failures (timeouts, connection errors) return false.
    pub fn is_provider_response(&self) -> bool {
        matches!(
            self,
            Self::ProviderError { .. } | Self::HttpStatus { .. } | Self::InvalidResponse { .. }
        )
    }
}
