use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Currency '{0}' is not in the catalog")]
    UnknownCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Rate cache error: {0}")]
    CacheError(String),
}
