//! Base-currency keyed exchange-rate tables.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::types::CurrencyCode;

/// Exchange rates keyed first by base currency, then by target currency.
///
/// `amount_in_base * table[base][target] = amount_in_target`.
///
/// Tables are built once and then shared behind an `Arc`; there is no API
/// for mutating a table after it has been handed out. Tables may be
/// incomplete, and lookups only ever return usable multipliers: entries
/// that are zero, negative, NaN or infinite are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rows: BTreeMap<CurrencyCode, BTreeMap<CurrencyCode, f64>>,
}

/// Returns true if `rate` can be used as a conversion multiplier.
pub fn is_usable_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table with a single row for `base`.
    ///
    /// Unusable rates are dropped.
    pub fn from_base<I, K>(base: &str, rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<CurrencyCode>,
    {
        Self::new().with_row(base, rates)
    }

    /// Adds (or replaces) the row for `base`. Unusable rates are dropped.
    pub fn with_row<I, K>(mut self, base: &str, rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<CurrencyCode>,
    {
        let row: BTreeMap<CurrencyCode, f64> = rates
            .into_iter()
            .map(|(code, rate)| (code.into(), rate))
            .filter(|(_, rate)| is_usable_rate(*rate))
            .collect();
        self.rows.insert(base.to_string(), row);
        self
    }

    /// Looks up `table[from][to]`, returning it only if usable.
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|rate| is_usable_rate(*rate))
    }

    /// The row of rates quoted against `base`, if any.
    pub fn row(&self, base: &str) -> Option<&BTreeMap<CurrencyCode, f64>> {
        self.rows.get(base)
    }

    /// Base currencies present in the table.
    pub fn bases(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(BTreeMap::is_empty)
    }
}

impl From<HashMap<CurrencyCode, HashMap<CurrencyCode, f64>>> for RateTable {
    fn from(rows: HashMap<CurrencyCode, HashMap<CurrencyCode, f64>>) -> Self {
        rows.into_iter()
            .fold(RateTable::new(), |table, (base, row)| table.with_row(&base, row))
    }
}
