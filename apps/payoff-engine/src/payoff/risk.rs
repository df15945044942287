//! Bounded/unbounded classification of maximum profit and loss.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::{EDGE_OFFSET, EDGE_TOLERANCE};
use super::curve::PricePoint;

/// Maximum profit or loss: a finite currency amount, or unbounded.
///
/// Serializes the unbounded variant as the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffBound {
    /// Finite amount in currency units.
    Finite(Decimal),
    /// Grows without a finite ceiling as price moves past the sampled
    /// domain.
    Unlimited,
}

impl PayoffBound {
    /// Returns true for the unbounded marker.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// The finite amount, if bounded.
    #[must_use]
    pub const fn finite(self) -> Option<Decimal> {
        match self {
            Self::Finite(amount) => Some(amount),
            Self::Unlimited => None,
        }
    }
}

/// Classify maximum profit and loss over a sampled curve.
///
/// The extremes are taken over the samples. Profit (or loss) is
/// classified unbounded when the maximum (minimum) payoff sits at an
/// edge of the sampled domain and the payoff still changes by more
/// than [`EDGE_TOLERANCE`] between that edge and the sample
/// [`EDGE_OFFSET`] indices inward; each edge is checked independently.
/// This is a heuristic over a finite window, not a closed-form limit.
///
/// Max profit is reported signed as sampled (it can be negative when
/// the whole curve is underwater); max loss is reported as a
/// magnitude. Curves too short for the edge comparison (fewer than
/// `EDGE_OFFSET + 1` samples) are always classified finite, and an
/// empty curve classifies as zero profit and zero loss.
#[must_use]
pub fn classify(curve: &[PricePoint]) -> (PayoffBound, PayoffBound) {
    let Some(first) = curve.first() else {
        return (
            PayoffBound::Finite(Decimal::ZERO),
            PayoffBound::Finite(Decimal::ZERO),
        );
    };

    let mut max_payoff = first.payoff;
    let mut min_payoff = first.payoff;
    for point in curve {
        max_payoff = max_payoff.max(point.payoff);
        min_payoff = min_payoff.min(point.payoff);
    }

    let first_payoff = first.payoff;
    let last_payoff = curve[curve.len() - 1].payoff;

    let (unlimited_profit, unlimited_loss) = if curve.len() > EDGE_OFFSET {
        let near_first = curve[EDGE_OFFSET].payoff;
        let near_last = curve[curve.len() - 1 - EDGE_OFFSET].payoff;
        let steep_at_first = (first_payoff - near_first).abs() > EDGE_TOLERANCE;
        let steep_at_last = (last_payoff - near_last).abs() > EDGE_TOLERANCE;
        (
            (max_payoff == first_payoff && steep_at_first)
                || (max_payoff == last_payoff && steep_at_last),
            (min_payoff == first_payoff && steep_at_first)
                || (min_payoff == last_payoff && steep_at_last),
        )
    } else {
        (false, false)
    };

    let max_profit = if unlimited_profit {
        PayoffBound::Unlimited
    } else {
        PayoffBound::Finite(max_payoff)
    };
    let max_loss = if unlimited_loss {
        PayoffBound::Unlimited
    } else {
        PayoffBound::Finite(min_payoff.abs())
    };

    (max_profit, max_loss)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    /// Curve with payoffs spaced `slope` apart per sample.
    fn linear_curve(samples: usize, start: Decimal, slope: Decimal) -> Vec<PricePoint> {
        (0..samples)
            .map(|i| PricePoint {
                price: Decimal::from(i),
                payoff: start + slope * Decimal::from(i),
            })
            .collect()
    }

    #[test]
    fn test_empty_curve_classifies_zero() {
        let (profit, loss) = classify(&[]);
        assert_eq!(profit, PayoffBound::Finite(Decimal::ZERO));
        assert_eq!(loss, PayoffBound::Finite(Decimal::ZERO));
    }

    #[test]
    fn test_steep_rising_curve_is_unbounded_both_ways() {
        // Rising 100/sample: max at the right edge, min at the left,
        // both edges steep (500 > 100 over five samples).
        let curve = linear_curve(101, dec!(-5000), dec!(100));
        let (profit, loss) = classify(&curve);
        assert!(profit.is_unlimited());
        assert!(loss.is_unlimited());
    }

    #[test]
    fn test_flat_edges_stay_finite() {
        // Changes of 5/sample never clear the 100 tolerance.
        let curve = linear_curve(101, dec!(-250), dec!(5));
        let (profit, loss) = classify(&curve);
        assert_eq!(profit, PayoffBound::Finite(dec!(250)));
        assert_eq!(loss, PayoffBound::Finite(dec!(250)));
    }

    #[test]
    fn test_interior_extreme_is_finite_despite_steep_edge() {
        // V-shape: minimum in the middle, maxima at steep edges.
        let mut curve = linear_curve(51, dec!(5000), dec!(-100));
        curve.extend(linear_curve(50, dec!(100), dec!(100)).into_iter().map(
            |point| PricePoint {
                price: point.price + dec!(51),
                payoff: point.payoff,
            },
        ));
        let (profit, loss) = classify(&curve);
        assert!(profit.is_unlimited());
        assert_eq!(loss, PayoffBound::Finite(dec!(0)));
    }

    #[test]
    fn test_underwater_curve_reports_negative_max_profit() {
        let curve = linear_curve(101, dec!(-500), dec!(1));
        let (profit, loss) = classify(&curve);
        assert_eq!(profit, PayoffBound::Finite(dec!(-400)));
        assert_eq!(loss, PayoffBound::Finite(dec!(500)));
    }

    #[test]
    fn test_short_curve_never_flags_unbounded() {
        let curve = linear_curve(5, dec!(0), dec!(1000));
        let (profit, loss) = classify(&curve);
        assert_eq!(profit, PayoffBound::Finite(dec!(4000)));
        assert_eq!(loss, PayoffBound::Finite(dec!(0)));
    }

    #[test]
    fn test_unlimited_serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&PayoffBound::Unlimited).unwrap(),
            "\"unlimited\""
        );
    }

    #[test]
    fn test_finite_round_trips() {
        let bound = PayoffBound::Finite(dec!(1250.50));
        let json = serde_json::to_string(&bound).unwrap();
        let back: PayoffBound = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bound);
        assert_eq!(bound.finite(), Some(dec!(1250.50)));
    }
}
