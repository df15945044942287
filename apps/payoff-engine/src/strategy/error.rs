//! Strategy error types.

use thiserror::Error;

/// Errors from strategy and sample-request validation.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// A leg violates the data-model invariants.
    #[error("Invalid leg: {message}")]
    InvalidLeg {
        /// Error message.
        message: String,
    },

    /// A curve sampling request is malformed.
    #[error("Invalid sample request: {message}")]
    InvalidSampleRequest {
        /// Error message.
        message: String,
    },
}
