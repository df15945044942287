//! Breakeven detection on a sampled payoff curve.

use rust_decimal::Decimal;

use super::curve::{PricePoint, round_cents};

/// Find the underlying prices at which the sampled payoff crosses zero.
///
/// Walks adjacent sample pairs, left to right, and detects a crossing
/// whenever the endpoint payoffs differ in sign or either endpoint is
/// exactly zero. The crossing price is linearly interpolated within
/// the segment and rounded to cents. Because option payoff is itself
/// piecewise linear in price, this is exact unless a kink falls
/// strictly between grid points.
///
/// Output is ascending by price. Crossings are not deduplicated: a
/// zero landing exactly on a grid point is detected by both segments
/// that share it. A segment whose endpoints are both zero is emitted
/// as a single crossing at the segment start rather than dividing
/// zero by zero.
#[must_use]
pub fn find_breakevens(curve: &[PricePoint]) -> Vec<Decimal> {
    let mut breakevens = Vec::new();

    for pair in curve.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let crosses = (prev.payoff <= Decimal::ZERO && curr.payoff >= Decimal::ZERO)
            || (prev.payoff >= Decimal::ZERO && curr.payoff <= Decimal::ZERO);
        if !crosses {
            continue;
        }

        let denominator = prev.payoff.abs() + curr.payoff.abs();
        if denominator == Decimal::ZERO {
            breakevens.push(prev.price);
            continue;
        }

        let ratio = prev.payoff.abs() / denominator;
        breakevens.push(round_cents(
            prev.price + (curr.price - prev.price) * ratio,
        ));
    }

    breakevens
}
