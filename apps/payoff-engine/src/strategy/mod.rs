//! Strategy construction, validation, and record types.
//!
//! Includes the preset constructors for the canonical strategies the
//! builder UI ships, eager validation of the leg invariants, and the
//! saved-strategy record exchanged with the persistence collaborator.

mod error;
mod presets;
mod types;
mod validation;

pub use error::StrategyError;
pub use presets::{
    bear_put_spread, bull_call_spread, iron_butterfly, iron_condor, long_call, long_put,
    long_straddle, long_strangle, short_call, short_put, short_straddle, short_strangle,
};
pub use types::{OptionStrategy, SavedStrategy};
pub use validation::{validate_leg, validate_legs, validate_sample_request};
