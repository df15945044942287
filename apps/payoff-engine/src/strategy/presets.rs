//! Preset strategy constructors.
//!
//! The canonical strategies the builder UI ships. Each constructor
//! returns an [`OptionStrategy`] with single-contract legs in display
//! order; premiums are per-share cost magnitudes, as on
//! [`StrategyLeg`].

use rust_decimal::Decimal;

use crate::payoff::{InstrumentType, LegDirection, StrategyLeg};

use super::types::OptionStrategy;

fn leg(
    instrument: InstrumentType,
    direction: LegDirection,
    strike: Decimal,
    premium: Decimal,
) -> StrategyLeg {
    StrategyLeg::new(instrument, direction, strike, premium, 1)
}

/// Buy a call.
#[must_use]
pub fn long_call(strike: Decimal, premium: Decimal) -> OptionStrategy {
    OptionStrategy {
        name: "Long Call".to_string(),
        legs: vec![leg(InstrumentType::Call, LegDirection::Long, strike, premium)],
    }
}

/// Buy a put.
#[must_use]
pub fn long_put(strike: Decimal, premium: Decimal) -> OptionStrategy {
    OptionStrategy {
        name: "Long Put".to_string(),
        legs: vec![leg(InstrumentType::Put, LegDirection::Long, strike, premium)],
    }
}

/// Write a call.
#[must_use]
pub fn short_call(strike: Decimal, premium: Decimal) -> OptionStrategy {
    OptionStrategy {
        name: "Short Call".to_string(),
        legs: vec![leg(
            InstrumentType::Call,
            LegDirection::Short,
            strike,
            premium,
        )],
    }
}

/// Write a put.
#[must_use]
pub fn short_put(strike: Decimal, premium: Decimal) -> OptionStrategy {
    OptionStrategy {
        name: "Short Put".to_string(),
        legs: vec![leg(
            InstrumentType::Put,
            LegDirection::Short,
            strike,
            premium,
        )],
    }
}

/// Buy a call and a put at the same strike (volatility play).
#[must_use]
pub fn long_straddle(
    strike: Decimal,
    call_premium: Decimal,
    put_premium: Decimal,
) -> OptionStrategy {
    OptionStrategy {
        name: "Long Straddle".to_string(),
        legs: vec![
            leg(InstrumentType::Call, LegDirection::Long, strike, call_premium),
            leg(InstrumentType::Put, LegDirection::Long, strike, put_premium),
        ],
    }
}

/// Write a call and a put at the same strike.
#[must_use]
pub fn short_straddle(
    strike: Decimal,
    call_premium: Decimal,
    put_premium: Decimal,
) -> OptionStrategy {
    OptionStrategy {
        name: "Short Straddle".to_string(),
        legs: vec![
            leg(
                InstrumentType::Call,
                LegDirection::Short,
                strike,
                call_premium,
            ),
            leg(InstrumentType::Put, LegDirection::Short, strike, put_premium),
        ],
    }
}

/// Buy an out-of-the-money put and call at different strikes.
#[must_use]
pub fn long_strangle(
    put_strike: Decimal,
    call_strike: Decimal,
    put_premium: Decimal,
    call_premium: Decimal,
) -> OptionStrategy {
    OptionStrategy {
        name: "Long Strangle".to_string(),
        legs: vec![
            leg(InstrumentType::Put, LegDirection::Long, put_strike, put_premium),
            leg(
                InstrumentType::Call,
                LegDirection::Long,
                call_strike,
                call_premium,
            ),
        ],
    }
}

/// Write an out-of-the-money put and call at different strikes.
#[must_use]
pub fn short_strangle(
    put_strike: Decimal,
    call_strike: Decimal,
    put_premium: Decimal,
    call_premium: Decimal,
) -> OptionStrategy {
    OptionStrategy {
        name: "Short Strangle".to_string(),
        legs: vec![
            leg(
                InstrumentType::Put,
                LegDirection::Short,
                put_strike,
                put_premium,
            ),
            leg(
                InstrumentType::Call,
                LegDirection::Short,
                call_strike,
                call_premium,
            ),
        ],
    }
}

/// Buy the lower-strike call, write the upper-strike call (bullish,
/// defined risk).
#[must_use]
pub fn bull_call_spread(
    lower_strike: Decimal,
    upper_strike: Decimal,
    long_premium: Decimal,
    short_premium: Decimal,
) -> OptionStrategy {
    OptionStrategy {
        name: "Bull Call Spread".to_string(),
        legs: vec![
            leg(
                InstrumentType::Call,
                LegDirection::Long,
                lower_strike,
                long_premium,
            ),
            leg(
                InstrumentType::Call,
                LegDirection::Short,
                upper_strike,
                short_premium,
            ),
        ],
    }
}

/// Buy the upper-strike put, write the lower-strike put (bearish,
/// defined risk).
#[must_use]
pub fn bear_put_spread(
    upper_strike: Decimal,
    lower_strike: Decimal,
    long_premium: Decimal,
    short_premium: Decimal,
) -> OptionStrategy {
    OptionStrategy {
        name: "Bear Put Spread".to_string(),
        legs: vec![
            leg(
                InstrumentType::Put,
                LegDirection::Long,
                upper_strike,
                long_premium,
            ),
            leg(
                InstrumentType::Put,
                LegDirection::Short,
                lower_strike,
                short_premium,
            ),
        ],
    }
}

/// Bull put spread plus bear call spread (neutral, defined risk).
///
/// `strikes` and `premiums` run low to high in display order: long
/// put wing, short put, short call, long call wing.
#[must_use]
pub fn iron_condor(strikes: [Decimal; 4], premiums: [Decimal; 4]) -> OptionStrategy {
    let [put_long, put_short, call_short, call_long] = strikes;
    let [put_long_premium, put_short_premium, call_short_premium, call_long_premium] = premiums;
    OptionStrategy {
        name: "Iron Condor".to_string(),
        legs: vec![
            leg(
                InstrumentType::Put,
                LegDirection::Long,
                put_long,
                put_long_premium,
            ),
            leg(
                InstrumentType::Put,
                LegDirection::Short,
                put_short,
                put_short_premium,
            ),
            leg(
                InstrumentType::Call,
                LegDirection::Short,
                call_short,
                call_short_premium,
            ),
            leg(
                InstrumentType::Call,
                LegDirection::Long,
                call_long,
                call_long_premium,
            ),
        ],
    }
}

/// Iron condor with the short strikes collapsed onto the middle
/// strike.
///
/// `premiums` in display order: long put wing, short put, short call,
/// long call wing.
#[must_use]
pub fn iron_butterfly(
    lower_strike: Decimal,
    middle_strike: Decimal,
    upper_strike: Decimal,
    premiums: [Decimal; 4],
) -> OptionStrategy {
    let [put_long_premium, put_short_premium, call_short_premium, call_long_premium] = premiums;
    OptionStrategy {
        name: "Iron Butterfly".to_string(),
        legs: vec![
            leg(
                InstrumentType::Put,
                LegDirection::Long,
                lower_strike,
                put_long_premium,
            ),
            leg(
                InstrumentType::Put,
                LegDirection::Short,
                middle_strike,
                put_short_premium,
            ),
            leg(
                InstrumentType::Call,
                LegDirection::Short,
                middle_strike,
                call_short_premium,
            ),
            leg(
                InstrumentType::Call,
                LegDirection::Long,
                upper_strike,
                call_long_premium,
            ),
        ],
    }
}
