//! Rate history and trend classification.
//!
//! There is no historical-rate feed behind the converter yet. The only
//! [`RateHistorySource`] is [`SyntheticRateHistory`], a random walk around the
//! current rate. It is a UI decoration with no correctness contract; two
//! calls for the same pair can and do disagree.

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::fx_model::{RatePoint, Trend};
use crate::constants::{SYNTHETIC_HISTORY_VARIATION, TREND_THRESHOLD_PERCENT};

/// Supplies a daily rate history for a currency pair.
pub trait RateHistorySource: Send + Sync {
    /// Returns `days + 1` samples, oldest first, ending on `today`.
    ///
    /// `current_rate` is the pair's rate right now.
    fn history(
        &self,
        from: &str,
        to: &str,
        current_rate: f64,
        days: usize,
        today: NaiveDate,
    ) -> Vec<RatePoint>;
}

/// Random ±5% perturbations of the current rate.
pub struct SyntheticRateHistory {
    rng: Mutex<StdRng>,
}

impl SyntheticRateHistory {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A reproducible history source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SyntheticRateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RateHistorySource for SyntheticRateHistory {
    fn history(
        &self,
        _from: &str,
        _to: &str,
        current_rate: f64,
        days: usize,
        today: NaiveDate,
    ) -> Vec<RatePoint> {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        (0..=days)
            .rev()
            .map(|days_ago| {
                let variation =
                    rng.gen_range(-SYNTHETIC_HISTORY_VARIATION..SYNTHETIC_HISTORY_VARIATION);
                RatePoint {
                    date: today
                        .checked_sub_days(Days::new(days_ago as u64))
                        .unwrap_or(today),
                    rate: current_rate * (1.0 + variation),
                }
            })
            .collect()
    }
}

/// Percentage change from the first to the last sample.
///
/// `None` when there are fewer than two samples or the first sample cannot
/// be divided by.
pub fn percent_change(history: &[RatePoint]) -> Option<f64> {
    let (first, last) = match history {
        [first, .., last] => (first.rate, last.rate),
        _ => return None,
    };
    if !first.is_finite() || first <= 0.0 || !last.is_finite() {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Classifies a history as up (> +1%), down (< -1%) or stable.
pub fn classify_trend(history: &[RatePoint]) -> Trend {
    match percent_change(history) {
        Some(change) if change > TREND_THRESHOLD_PERCENT => Trend::Up,
        Some(change) if change < -TREND_THRESHOLD_PERCENT => Trend::Down,
        _ => Trend::Stable,
    }
}

/// Today's date in UTC.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(rates: &[f64]) -> Vec<RatePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        rates
            .iter()
            .enumerate()
            .map(|(i, rate)| RatePoint {
                date: start + Days::new(i as u64),
                rate: *rate,
            })
            .collect()
    }

    #[test]
    fn test_classify_up() {
        assert_eq!(classify_trend(&series(&[100.0, 98.0, 101.5])), Trend::Up);
    }

    #[test]
    fn test_classify_down() {
        assert_eq!(classify_trend(&series(&[100.0, 105.0, 98.9])), Trend::Down);
    }

    #[test]
    fn test_classify_stable_within_threshold() {
        assert_eq!(classify_trend(&series(&[100.0, 100.9])), Trend::Stable);
        assert_eq!(classify_trend(&series(&[100.0, 99.1])), Trend::Stable);
    }

    #[test]
    fn test_short_or_degenerate_history_is_stable() {
        assert_eq!(classify_trend(&[]), Trend::Stable);
        assert_eq!(classify_trend(&series(&[100.0])), Trend::Stable);
        assert_eq!(classify_trend(&series(&[0.0, 5.0])), Trend::Stable);
        assert_eq!(classify_trend(&series(&[f64::NAN, 5.0])), Trend::Stable);
    }

    #[test]
    fn test_percent_change() {
        let change = percent_change(&series(&[200.0, 210.0])).unwrap();
        assert!((change - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_synthetic_history_shape() {
        let source = SyntheticRateHistory::with_seed(7);
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let history = source.history("USD", "ARS", 900.0, 6, today);

        assert_eq!(history.len(), 7);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
        assert_eq!(history[6].date, today);
        for point in &history {
            assert!(point.rate >= 900.0 * 0.95 && point.rate <= 900.0 * 1.05);
        }
    }

    #[test]
    fn test_seeded_history_is_reproducible() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let a = SyntheticRateHistory::with_seed(42).history("USD", "EUR", 0.85, 7, today);
        let b = SyntheticRateHistory::with_seed(42).history("USD", "EUR", 0.85, 7, today);
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }
}
