//! Payoff analysis for multi-leg options positions.
//!
//! The pipeline: the sampler builds a price grid and evaluates the
//! aggregate payoff (sum of per-leg payoffs) at each grid point; the
//! breakeven finder, risk classifier, and net premium calculator
//! consume the resulting curve. [`analyze`] runs the whole pipeline
//! and returns a single [`StrategyAnalysis`].
//!
//! Every function here is pure and deterministic: identical legs
//! produce bit-identical results.

mod analysis;
mod breakeven;
mod constants;
mod curve;
mod leg;
mod premium;
mod risk;

pub use analysis::{StrategyAnalysis, analyze};
pub use breakeven::find_breakevens;
pub use constants::{
    CONTRACT_MULTIPLIER, DEFAULT_CURVE_POINTS, EDGE_OFFSET, EDGE_TOLERANCE, MIN_PRICE_RANGE,
};
pub use curve::{PricePoint, sample_curve};
pub use leg::{InstrumentType, LegDirection, StrategyLeg, leg_payoff, strategy_payoff};
pub use premium::net_premium;
pub use risk::{PayoffBound, classify};
