//! Embedded exchange rates used when no provider is reachable.

use std::sync::{Arc, OnceLock};

use crate::models::RateTable;

/// Provider ID recorded on fallback snapshots
pub const FALLBACK_PROVIDER_ID: &str = "FALLBACK";

/// The hardcoded ARS/USD/EUR cross rates.
///
/// Built once per process and shared, so every fallback snapshot carries
/// the exact same table.
pub fn fallback_rates() -> Arc<RateTable> {
    static TABLE: OnceLock<Arc<RateTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            Arc::new(
                RateTable::new()
                    .with_row(
                        "ARS",
                        [("USD", 0.0011), ("EUR", 0.0010), ("CLP", 1.08), ("BRL", 0.0055)],
                    )
                    .with_row(
                        "USD",
                        [("ARS", 900.0), ("EUR", 0.85), ("CLP", 980.0), ("BRL", 5.2)],
                    )
                    .with_row(
                        "EUR",
                        [("ARS", 1050.0), ("USD", 1.18), ("CLP", 1150.0), ("BRL", 6.1)],
                    ),
            )
        })
        .clone()
}
