//! Strategy leg types and per-leg payoff math.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::CONTRACT_MULTIPLIER;

/// Kind of instrument held by a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    /// Call option.
    Call,
    /// Put option.
    Put,
    /// Direct stock holding. The leg's strike is the entry price and
    /// its premium must be zero.
    Stock,
}

/// Position direction for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegDirection {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl LegDirection {
    /// Sign applied to intrinsic value: `+1` for long, `-1` for short.
    #[must_use]
    pub const fn sign(self) -> Decimal {
        match self {
            Self::Long => Decimal::ONE,
            Self::Short => Decimal::NEGATIVE_ONE,
        }
    }
}

/// A single leg of an options strategy.
///
/// `premium` is a cost magnitude, never signed; the cash-flow sign is
/// derived from `direction`. Field names on the wire match the
/// persistence collaborator's JSON (`type`, `position`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    /// Instrument kind.
    #[serde(rename = "type")]
    pub instrument: InstrumentType,
    /// Position direction.
    #[serde(rename = "position")]
    pub direction: LegDirection,
    /// Strike price (entry price for stock legs).
    pub strike: Decimal,
    /// Premium per share (zero for stock legs).
    pub premium: Decimal,
    /// Number of contracts. Must be at least 1.
    pub quantity: u32,
}

impl StrategyLeg {
    /// Create a new strategy leg.
    #[must_use]
    pub const fn new(
        instrument: InstrumentType,
        direction: LegDirection,
        strike: Decimal,
        premium: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            instrument,
            direction,
            strike,
            premium,
            quantity,
        }
    }

    /// Net premium for this leg (positive = credit, negative = debit).
    ///
    /// Stock legs carry no premium and contribute zero regardless of
    /// direction.
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        if self.instrument == InstrumentType::Stock {
            return Decimal::ZERO;
        }
        let scale = CONTRACT_MULTIPLIER * Decimal::from(self.quantity);
        match self.direction {
            LegDirection::Short => self.premium * scale,
            LegDirection::Long => -self.premium * scale,
        }
    }
}

/// Expiration payoff of a single leg at an underlying price.
///
/// Stock legs pay `(price - strike) * sign * quantity * 100`. Option
/// legs pay intrinsic value (signed by direction) net of premium,
/// scaled the same way. The price is taken as supplied; the engine
/// does not clamp negative inputs.
#[must_use]
pub fn leg_payoff(leg: &StrategyLeg, price: Decimal) -> Decimal {
    let scale = Decimal::from(leg.quantity) * CONTRACT_MULTIPLIER;
    match leg.instrument {
        InstrumentType::Stock => (price - leg.strike) * leg.direction.sign() * scale,
        InstrumentType::Call | InstrumentType::Put => {
            let intrinsic = if leg.instrument == InstrumentType::Call {
                (price - leg.strike).max(Decimal::ZERO)
            } else {
                (leg.strike - price).max(Decimal::ZERO)
            };
            let premium_term = match leg.direction {
                LegDirection::Long => -leg.premium,
                LegDirection::Short => leg.premium,
            };
            (intrinsic * leg.direction.sign() + premium_term) * scale
        }
    }
}

/// Total strategy payoff at an underlying price.
///
/// Sums per-leg payoffs in insertion order. An empty leg list pays
/// zero.
#[must_use]
pub fn strategy_payoff(legs: &[StrategyLeg], price: Decimal) -> Decimal {
    legs.iter().map(|leg| leg_payoff(leg, price)).sum()
}
