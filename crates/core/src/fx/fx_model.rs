use chrono::{DateTime, NaiveDate, Utc};
use neexa_market_data::RateFreshness;
use serde::{Deserialize, Serialize};

/// How the unit rate of a conversion was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RateResolution {
    /// Source and target are the same currency.
    Identity,
    /// `table[from][to]`
    Direct,
    /// `1 / table[to][from]`
    Inverse,
    /// Chained through USD with both legs found in the table.
    ViaUsd,
    /// Chained through USD with `missing_legs` legs assumed to be 1:1.
    #[serde(rename_all = "camelCase")]
    ViaUsdDefaulted { missing_legs: u8 },
    /// Chained through USD with both legs found, but their product is not a
    /// finite rate. The rate is taken as 1.
    ViaUsdOutOfRange,
}

impl RateResolution {
    /// True when some or all of the rate was assumed to be 1.
    pub fn is_approximate(&self) -> bool {
        matches!(self, Self::ViaUsdDefaulted { .. } | Self::ViaUsdOutOfRange)
    }
}

/// Outcome of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    /// Units of `to` per unit of `from`.
    pub rate: f64,
    pub resolution: RateResolution,
    pub timestamp: DateTime<Utc>,
}

/// How much a converted figure can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateConfidence {
    /// Computed from live rates.
    Fresh,
    /// Computed from the embedded fallback table.
    StaleFallback,
    /// Part of the rate was assumed 1:1 because the table had no usable path.
    Unresolvable,
}

/// A conversion together with the provenance of the rates it used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxConversion {
    #[serde(flatten)]
    pub result: ConversionResult,
    pub freshness: RateFreshness,
}

impl FxConversion {
    pub fn confidence(&self) -> RateConfidence {
        if self.result.resolution.is_approximate() {
            RateConfidence::Unresolvable
        } else if self.freshness == RateFreshness::Fallback
            && self.result.resolution != RateResolution::Identity
        {
            RateConfidence::StaleFallback
        } else {
            RateConfidence::Fresh
        }
    }
}

/// Coarse direction of a currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One sample of a rate history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(resolution: RateResolution) -> ConversionResult {
        ConversionResult {
            from: "USD".to_string(),
            to: "ARS".to_string(),
            amount: 1.0,
            result: 900.0,
            rate: 900.0,
            resolution,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_confidence() {
        let live = |resolution| FxConversion {
            result: result(resolution),
            freshness: RateFreshness::Live,
        };
        let fallback = |resolution| FxConversion {
            result: result(resolution),
            freshness: RateFreshness::Fallback,
        };

        assert_eq!(live(RateResolution::Direct).confidence(), RateConfidence::Fresh);
        assert_eq!(
            fallback(RateResolution::Inverse).confidence(),
            RateConfidence::StaleFallback
        );
        assert_eq!(
            live(RateResolution::ViaUsdDefaulted { missing_legs: 1 }).confidence(),
            RateConfidence::Unresolvable
        );
        assert_eq!(
            live(RateResolution::ViaUsdOutOfRange).confidence(),
            RateConfidence::Unresolvable
        );
        assert_eq!(
            fallback(RateResolution::Identity).confidence(),
            RateConfidence::Fresh
        );
    }

    #[test]
    fn test_serialized_shape() {
        let conversion = FxConversion {
            result: result(RateResolution::ViaUsdDefaulted { missing_legs: 2 }),
            freshness: RateFreshness::Fallback,
        };
        let value = serde_json::to_value(&conversion).unwrap();

        assert_eq!(value["from"], "USD");
        assert_eq!(value["result"], 900.0);
        assert_eq!(value["freshness"], "FALLBACK");
        assert_eq!(
            value["resolution"],
            json!({ "kind": "viaUsdDefaulted", "missingLegs": 2 })
        );
        assert_eq!(serde_json::to_value(Trend::Up).unwrap(), "up");
    }
}
