//! Eager validation of legs and sample requests.
//!
//! The payoff functions themselves are total over well-formed legs;
//! these checks exist for the API boundary, where a malformed leg is
//! a caller bug that should surface as a structured error rather than
//! as nonsense numbers.

use rust_decimal::Decimal;

use crate::payoff::{InstrumentType, StrategyLeg};

use super::error::StrategyError;

/// Validate a single leg against the data-model invariants.
///
/// Rejects zero quantity, negative premium, and stock legs carrying a
/// nonzero premium (a stock leg's strike is its entry price; premium
/// does not apply).
pub fn validate_leg(leg: &StrategyLeg) -> Result<(), StrategyError> {
    if leg.quantity == 0 {
        return Err(StrategyError::InvalidLeg {
            message: "quantity must be at least 1".to_string(),
        });
    }
    if leg.premium < Decimal::ZERO {
        return Err(StrategyError::InvalidLeg {
            message: format!(
                "premium must be non-negative, got {}",
                leg.premium
            ),
        });
    }
    if leg.instrument == InstrumentType::Stock && leg.premium != Decimal::ZERO {
        return Err(StrategyError::InvalidLeg {
            message: "stock legs carry no premium".to_string(),
        });
    }
    Ok(())
}

/// Validate every leg of a strategy, failing on the first violation.
pub fn validate_legs(legs: &[StrategyLeg]) -> Result<(), StrategyError> {
    legs.iter().try_for_each(validate_leg)
}

/// Validate a curve sampling request.
pub fn validate_sample_request(points: u32) -> Result<(), StrategyError> {
    if points == 0 {
        return Err(StrategyError::InvalidSampleRequest {
            message: "point count must be at least 1".to_string(),
        });
    }
    Ok(())
}
