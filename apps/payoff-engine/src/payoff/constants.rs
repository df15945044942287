//! Decimal constants for payoff analysis.

use rust_decimal::Decimal;

/// One option contract covers 100 shares of the underlying.
pub const CONTRACT_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Default number of sampling intervals (the curve carries one more
/// sample than intervals, so the default curve has 101 points).
pub const DEFAULT_CURVE_POINTS: u32 = 100;

/// Minimum half-width of the auto-selected price domain.
pub const MIN_PRICE_RANGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Auto-domain half-width as a fraction of the average strike. 0.5
pub(crate) const RANGE_FRACTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Payoff change between a curve edge and the sample [`EDGE_OFFSET`]
/// indices inward above which profit/loss at that edge is classified
/// as unbounded.
pub const EDGE_TOLERANCE: Decimal = Decimal::ONE_HUNDRED;

/// Samples inward from each curve edge inspected by the unbounded
/// heuristic.
pub const EDGE_OFFSET: usize = 5;
