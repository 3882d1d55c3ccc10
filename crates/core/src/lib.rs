//! Neexa Core - currency conversion, savings and budgeting logic.
//!
//! This crate is UI-agnostic: it exposes plain services and value types
//! that a front end composes. Exchange rates come from the
//! `neexa-market-data` crate.

pub mod calculator;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod savings;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
