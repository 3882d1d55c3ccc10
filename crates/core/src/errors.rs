//! Core error types for the Neexa application.

use thiserror::Error;

use crate::calculator::CalculatorError;
use crate::fx::FxError;
use crate::savings::SavingsError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the Neexa core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Savings error: {0}")]
    Savings(#[from] SavingsError),

    #[error("Calculator error: {0}")]
    Calculator(#[from] CalculatorError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}
