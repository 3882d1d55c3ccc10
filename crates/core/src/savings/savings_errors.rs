use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SavingsError {
    #[error("Monthly income must be positive, got {0}")]
    InvalidIncome(f64),

    #[error("Challenge duration must be at least one period")]
    InvalidDuration,

    #[error("Savings target must be positive, got {0}")]
    InvalidTarget(f64),

    #[error("Contribution must be positive, got {0}")]
    InvalidContribution(f64),

    #[error("Budget category '{0}' not found")]
    CategoryNotFound(String),
}
