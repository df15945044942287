//! Payoff curve sampling.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::constants::{MIN_PRICE_RANGE, RANGE_FRACTION};
use super::leg::{StrategyLeg, strategy_payoff};

/// One sample of the payoff curve. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Underlying price.
    pub price: Decimal,
    /// Strategy payoff at that price.
    pub payoff: Decimal,
}

/// Round to cents, half away from zero (currency display convention).
pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sample the strategy payoff over a price domain.
///
/// Produces `points + 1` evenly spaced samples spanning `min` to `max`
/// inclusive. When bounds are not supplied, the domain is centered on
/// the arithmetic mean of the legs' strikes with half-width
/// `max(avg_strike * 0.5, 50)`, floored at zero on the low side.
/// Explicit bounds override the derivation unconditionally.
///
/// Both coordinates are rounded to cents on the sample; intermediate
/// math is exact. An empty leg list yields an empty curve. `points`
/// must be at least 1 (see
/// [`validate_sample_request`](crate::strategy::validate_sample_request)).
#[must_use]
pub fn sample_curve(
    legs: &[StrategyLeg],
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    points: u32,
) -> Vec<PricePoint> {
    if legs.is_empty() {
        return Vec::new();
    }

    let strike_sum: Decimal = legs.iter().map(|leg| leg.strike).sum();
    let avg_strike = strike_sum / Decimal::from(legs.len());
    let range = (avg_strike * RANGE_FRACTION).max(MIN_PRICE_RANGE);

    let min = min_price.unwrap_or_else(|| (avg_strike - range).max(Decimal::ZERO));
    let max = max_price.unwrap_or(avg_strike + range);
    let step = (max - min) / Decimal::from(points);

    (0..=points)
        .map(|i| {
            let price = min + step * Decimal::from(i);
            PricePoint {
                price: round_cents(price),
                payoff: round_cents(strategy_payoff(legs, price)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::super::leg::{InstrumentType, LegDirection};
    use super::*;

    fn call(strike: Decimal, premium: Decimal) -> StrategyLeg {
        StrategyLeg::new(InstrumentType::Call, LegDirection::Long, strike, premium, 1)
    }

    #[test]
    fn test_empty_legs_yield_empty_curve() {
        assert!(sample_curve(&[], None, None, 100).is_empty());
    }

    #[test]
    fn test_default_domain_centers_on_average_strike() {
        // Average strike 100, half-width max(50, 50) = 50 -> [50, 150]
        let legs = vec![call(dec!(100), dec!(5))];
        let curve = sample_curve(&legs, None, None, 100);
        assert_eq!(curve.len(), 101);
        assert_eq!(curve[0].price, dec!(50.00));
        assert_eq!(curve[100].price, dec!(150.00));
        assert_eq!(curve[1].price - curve[0].price, dec!(1.00));
    }

    #[test]
    fn test_wide_strikes_use_fractional_half_width() {
        // Average strike 200 -> half-width max(100, 50) = 100 -> [100, 300]
        let legs = vec![call(dec!(150), dec!(1)), call(dec!(250), dec!(1))];
        let curve = sample_curve(&legs, None, None, 100);
        assert_eq!(curve[0].price, dec!(100.00));
        assert_eq!(curve[100].price, dec!(300.00));
    }

    #[test]
    fn test_low_strike_domain_floors_at_zero() {
        // Average strike 20, half-width 50 -> min clamps to 0
        let legs = vec![call(dec!(20), dec!(1))];
        let curve = sample_curve(&legs, None, None, 100);
        assert_eq!(curve[0].price, dec!(0.00));
        assert_eq!(curve[100].price, dec!(70.00));
    }

    #[test]
    fn test_explicit_bounds_override_derivation() {
        let legs = vec![call(dec!(100), dec!(5))];
        let curve = sample_curve(&legs, Some(dec!(95)), Some(dec!(105)), 10);
        assert_eq!(curve.len(), 11);
        assert_eq!(curve[0].price, dec!(95.00));
        assert_eq!(curve[10].price, dec!(105.00));
    }

    #[test]
    fn test_prices_round_half_away_from_zero() {
        // Step 1/8 = 0.125; the second sample price 0.125 rounds up to
        // 0.13, not to even (0.12).
        let legs = vec![call(dec!(1), dec!(0))];
        let curve = sample_curve(&legs, Some(dec!(0)), Some(dec!(1)), 8);
        assert_eq!(curve[1].price, dec!(0.13));
    }

    #[test]
    fn test_payoff_rounds_on_sample() {
        // Long call strike 0, premium 0: payoff = price * 100. At the
        // unrounded price 1/3 the payoff is 33.333..., stored as 33.33.
        let legs = vec![call(dec!(0), dec!(0))];
        let curve = sample_curve(&legs, Some(dec!(0)), Some(dec!(1)), 3);
        assert_eq!(curve[1].price, dec!(0.33));
        assert_eq!(curve[1].payoff, dec!(33.33));
    }
}
