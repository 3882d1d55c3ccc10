/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Base currency requested from the quote provider by default
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Number of samples used to estimate a pair's trend
pub const TREND_SAMPLES: usize = 7;

/// Percentage change beyond which a pair is trending
pub const TREND_THRESHOLD_PERCENT: f64 = 1.0;

/// Maximum relative perturbation of synthetic history samples (±5%)
pub const SYNTHETIC_HISTORY_VARIATION: f64 = 0.05;
