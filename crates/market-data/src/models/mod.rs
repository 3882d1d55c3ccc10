//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, CurrencyCode)
//! - `rate_table` - Base-currency keyed rate tables (RateTable)
//! - `snapshot` - A rate table plus its provenance (RateSnapshot, RateFreshness)

mod rate_table;
mod snapshot;
mod types;

pub use rate_table::{is_usable_rate, RateTable};
pub use snapshot::{RateFreshness, RateSnapshot};
pub use types::{CurrencyCode, ProviderId, USD};
