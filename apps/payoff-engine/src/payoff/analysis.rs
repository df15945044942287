//! Whole-strategy payoff analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::breakeven::find_breakevens;
use super::constants::DEFAULT_CURVE_POINTS;
use super::curve::{PricePoint, sample_curve};
use super::leg::StrategyLeg;
use super::premium;
use super::risk::{PayoffBound, classify};

/// Complete payoff analysis of a strategy.
///
/// Constructed fresh on every [`analyze`] call and never mutated; it
/// holds no reference back to the legs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyAnalysis {
    /// Breakeven prices, ascending.
    pub breakevens: Vec<Decimal>,
    /// Maximum profit over the sampled domain, signed as sampled (it
    /// can be negative when the whole curve is underwater).
    pub max_profit: PayoffBound,
    /// Maximum loss over the sampled domain, as a magnitude.
    pub max_loss: PayoffBound,
    /// Net premium to enter the position, credit positive.
    pub net_premium: Decimal,
    /// The sampled payoff curve.
    pub curve: Vec<PricePoint>,
}

impl StrategyAnalysis {
    /// The analysis of an empty leg list: no breakevens, zero profit,
    /// loss, and premium, empty curve.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            breakevens: Vec::new(),
            max_profit: PayoffBound::Finite(Decimal::ZERO),
            max_loss: PayoffBound::Finite(Decimal::ZERO),
            net_premium: Decimal::ZERO,
            curve: Vec::new(),
        }
    }
}

/// Analyze a strategy over the default sampled price domain.
///
/// Samples the payoff curve on the auto-derived domain with
/// [`DEFAULT_CURVE_POINTS`] intervals, then derives breakevens, the
/// profit/loss classification, and the net premium. Pure and
/// deterministic: identical legs yield bit-identical results. An
/// empty leg list short-circuits to [`StrategyAnalysis::empty`].
#[must_use]
pub fn analyze(legs: &[StrategyLeg]) -> StrategyAnalysis {
    if legs.is_empty() {
        return StrategyAnalysis::empty();
    }

    let curve = sample_curve(legs, None, None, DEFAULT_CURVE_POINTS);
    let breakevens = find_breakevens(&curve);
    let (max_profit, max_loss) = classify(&curve);
    let net_premium = premium::net_premium(legs);

    debug!(
        legs = legs.len(),
        breakevens = breakevens.len(),
        %net_premium,
        "strategy analyzed"
    );

    StrategyAnalysis {
        breakevens,
        max_profit,
        max_loss,
        net_premium,
        curve,
    }
}
