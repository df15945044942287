// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Payoff Engine - Options Strategy Analysis Library
//!
//! Turns a list of position legs (calls, puts, direct stock) into a
//! sampled profit/loss curve, a net premium figure, breakeven prices,
//! and a bounded/unbounded classification of maximum profit and loss.
//!
//! All payoffs are intrinsic value at expiration: there is no pricing
//! model, no implied volatility, and no time decay. The engine is pure
//! and synchronous; storage, authentication, and presentation live on
//! the other side of the function-call surface re-exported from the
//! crate root.
//!
//! # Modules
//!
//! - [`payoff`]: the analysis engine (leg payoffs, curve sampling,
//!   breakevens, risk classification)
//! - [`strategy`]: strategy types, preset constructors, validation,
//!   and the persistence-record shape

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Payoff analysis engine.
pub mod payoff;

/// Strategy construction, presets, validation, and record types.
pub mod strategy;

pub use payoff::{
    InstrumentType, LegDirection, PayoffBound, PricePoint, StrategyAnalysis, StrategyLeg, analyze,
    find_breakevens, leg_payoff, net_premium, sample_curve, strategy_payoff,
};
pub use strategy::{OptionStrategy, SavedStrategy, StrategyError};
