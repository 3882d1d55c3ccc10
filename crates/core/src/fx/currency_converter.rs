//! Rate resolution and amount conversion over a [`RateTable`].

use chrono::Utc;
use neexa_market_data::{is_usable_rate, RateTable, USD};

use super::fx_model::{ConversionResult, RateResolution};

/// Converts `amount` from `from` to `to` using `table`.
///
/// Resolution order:
/// 1. same currency: rate 1, the table is not consulted
/// 2. `table[from][to]`
/// 3. `1 / table[to][from]`
/// 4. chained through USD, each leg direct or inverse; a leg that cannot be
///    found is taken as 1 and reported through
///    [`RateResolution::ViaUsdDefaulted`]; if the legs multiply out of the
///    f64 range the whole rate is taken as 1
///    ([`RateResolution::ViaUsdOutOfRange`])
///
/// Rates that are zero, negative or non-finite never take part in a
/// resolution; they are skipped like missing entries. No rounding is applied.
pub fn convert(amount: f64, from: &str, to: &str, table: &RateTable) -> ConversionResult {
    let (rate, resolution) = resolve_rate(from, to, table);

    ConversionResult {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        result: amount * rate,
        rate,
        resolution,
        timestamp: Utc::now(),
    }
}

/// Finds the unit rate `from -> to` and how it was obtained.
pub fn resolve_rate(from: &str, to: &str, table: &RateTable) -> (f64, RateResolution) {
    if from == to {
        return (1.0, RateResolution::Identity);
    }

    if let Some(rate) = table.rate(from, to) {
        return (rate, RateResolution::Direct);
    }

    if let Some(rate) = inverse_rate(from, to, table) {
        return (rate, RateResolution::Inverse);
    }

    let to_usd = leg_rate(from, USD, table);
    let from_usd = leg_rate(USD, to, table);
    let missing_legs = [to_usd, from_usd].iter().filter(|leg| leg.is_none()).count() as u8;
    let rate = to_usd.unwrap_or(1.0) * from_usd.unwrap_or(1.0);

    if !is_usable_rate(rate) {
        // Found legs multiply to zero or infinity.
        log::debug!("USD-mediated rate {}->{} is not finite", from, to);
        return (1.0, RateResolution::ViaUsdOutOfRange);
    }

    if missing_legs > 0 {
        log::debug!(
            "No USD path for {}->{}, {} leg(s) defaulted to 1",
            from,
            to,
            missing_legs
        );
        return (rate, RateResolution::ViaUsdDefaulted { missing_legs });
    }

    (rate, RateResolution::ViaUsd)
}

/// `1 / table[to][from]`, if that is a usable rate.
fn inverse_rate(from: &str, to: &str, table: &RateTable) -> Option<f64> {
    table
        .rate(to, from)
        .map(|rate| 1.0 / rate)
        .filter(|rate| is_usable_rate(*rate))
}

/// One leg of a USD-mediated chain: direct, then inverse.
fn leg_rate(from: &str, to: &str, table: &RateTable) -> Option<f64> {
    if from == to {
        return Some(1.0);
    }
    table
        .rate(from, to)
        .or_else(|| inverse_rate(from, to, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn usd_ars() -> RateTable {
        RateTable::from_base("USD", [("ARS", 900.0)])
    }

    fn usd_ars_eur() -> RateTable {
        RateTable::from_base("USD", [("ARS", 900.0), ("EUR", 0.85)])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_direct_rate() {
        let conversion = convert(10.0, "USD", "ARS", &usd_ars());
        assert_eq!(conversion.result, 9000.0);
        assert_eq!(conversion.rate, 900.0);
        assert_eq!(conversion.resolution, RateResolution::Direct);
        assert_eq!(conversion.from, "USD");
        assert_eq!(conversion.to, "ARS");
        assert_eq!(conversion.amount, 10.0);
    }

    #[test]
    fn test_inverse_rate() {
        let conversion = convert(900.0, "ARS", "USD", &usd_ars());
        assert_close(conversion.result, 1.0);
        assert_close(conversion.rate, 0.001111111111);
        assert_eq!(conversion.resolution, RateResolution::Inverse);
    }

    #[test]
    fn test_mediated_through_usd() {
        let conversion = convert(900.0, "ARS", "EUR", &usd_ars_eur());
        assert_close(conversion.rate, 0.85 / 900.0);
        assert_close(conversion.result, 0.85);
        assert_eq!(conversion.resolution, RateResolution::ViaUsd);
    }

    #[test]
    fn test_direct_preferred_over_inverse() {
        let table = RateTable::new()
            .with_row("EUR", [("USD", 1.18)])
            .with_row("USD", [("EUR", 0.85)]);
        let (rate, resolution) = resolve_rate("EUR", "USD", &table);
        assert_eq!(rate, 1.18);
        assert_eq!(resolution, RateResolution::Direct);
    }

    #[test]
    fn test_zero_direct_rate_falls_through_to_inverse() {
        let table = RateTable::new()
            .with_row("ARS", [("USD", 0.0)])
            .with_row("USD", [("ARS", 1000.0)]);
        let conversion = convert(1000.0, "ARS", "USD", &table);
        assert_close(conversion.result, 1.0);
        assert_eq!(conversion.resolution, RateResolution::Inverse);
    }

    #[test]
    fn test_zero_leg_is_treated_as_missing() {
        let table = RateTable::from_base("USD", [("ARS", 0.0), ("EUR", 0.85)]);
        let conversion = convert(100.0, "ARS", "EUR", &table);
        assert!(conversion.result.is_finite());
        assert_close(conversion.rate, 0.85);
        assert_eq!(
            conversion.resolution,
            RateResolution::ViaUsdDefaulted { missing_legs: 1 }
        );
    }

    #[test]
    fn test_unknown_pair_defaults_to_one() {
        let conversion = convert(42.0, "JPY", "GBP", &usd_ars());
        assert_eq!(conversion.rate, 1.0);
        assert_eq!(conversion.result, 42.0);
        assert_eq!(
            conversion.resolution,
            RateResolution::ViaUsdDefaulted { missing_legs: 2 }
        );
        assert!(conversion.resolution.is_approximate());
    }

    #[test]
    fn test_usd_leg_is_identity() {
        // USD -> BRL with only BRL -> ARS quoted: the USD->USD leg is not "missing".
        let table = RateTable::from_base("ARS", [("BRL", 0.0055)]);
        let (_, resolution) = resolve_rate("USD", "BRL", &table);
        assert_eq!(resolution, RateResolution::ViaUsdDefaulted { missing_legs: 1 });
    }

    #[test]
    fn test_mediated_rate_out_of_range() {
        let table = RateTable::new()
            .with_row("USD", [("BRL", 1e300)])
            .with_row("EUR", [("USD", 1e300)]);
        let conversion = convert(3.0, "EUR", "BRL", &table);
        assert_eq!(conversion.rate, 1.0);
        assert_eq!(conversion.result, 3.0);
        assert_eq!(conversion.resolution, RateResolution::ViaUsdOutOfRange);
        assert!(conversion.resolution.is_approximate());

        let underflow = RateTable::new()
            .with_row("USD", [("BRL", 1e-300)])
            .with_row("EUR", [("USD", 1e-300)]);
        let (rate, resolution) = resolve_rate("EUR", "BRL", &underflow);
        assert_eq!(rate, 1.0);
        assert_eq!(resolution, RateResolution::ViaUsdOutOfRange);
    }

    #[test]
    fn test_identity_ignores_table() {
        let table = RateTable::from_base("USD", [("USD", 2.0)]);
        let conversion = convert(15.5, "USD", "USD", &table);
        assert_eq!(conversion.result, 15.5);
        assert_eq!(conversion.rate, 1.0);
        assert_eq!(conversion.resolution, RateResolution::Identity);
    }

    proptest! {
        #[test]
        fn prop_identity_for_any_table(
            amount in 0.0f64..1e12,
            code in "[A-Z]{3}",
            rate in 0.0001f64..10_000.0,
        ) {
            for table in [RateTable::new(), RateTable::from_base(&code, [(code.clone(), rate)])] {
                let conversion = convert(amount, &code, &code, &table);
                prop_assert_eq!(conversion.result, amount);
                prop_assert_eq!(conversion.rate, 1.0);
            }
        }

        #[test]
        fn prop_direct_rate_multiplies(amount in 0.0f64..1e9, rate in 0.0001f64..10_000.0) {
            let table = RateTable::from_base("EUR", [("BRL", rate)]);
            let conversion = convert(amount, "EUR", "BRL", &table);
            prop_assert_eq!(conversion.result, amount * rate);
            prop_assert_eq!(conversion.rate, rate);
        }

        #[test]
        fn prop_inverse_only_is_reciprocal(amount in 0.0f64..1e9, rate in 0.0001f64..10_000.0) {
            let table = RateTable::from_base("BRL", [("EUR", rate)]);
            let conversion = convert(amount, "EUR", "BRL", &table);
            prop_assert!((conversion.rate - 1.0 / rate).abs() <= 1e-12 * (1.0 / rate));
        }

        #[test]
        fn prop_zero_amount_converts_to_zero(from in "[A-Z]{3}", to in "[A-Z]{3}") {
            for table in [RateTable::new(), usd_ars_eur(), RateTable::from_base(&from, [(to.clone(), 3.5)])] {
                prop_assert_eq!(convert(0.0, &from, &to, &table).result, 0.0);
            }
        }

        #[test]
        fn prop_rate_is_always_usable(from in "[A-Z]{3}", to in "[A-Z]{3}", rate in prop::num::f64::ANY) {
            let table = RateTable::new()
                .with_row(&from, [(to.clone(), rate)])
                .with_row("USD", [(from.clone(), rate), (to.clone(), rate)]);
            let (resolved, _) = resolve_rate(&from, &to, &table);
            prop_assert!(is_usable_rate(resolved));
        }
    }
}
