//! Strategy and persistence-record types.

use serde::{Deserialize, Serialize};

use crate::payoff::StrategyLeg;

/// A named multi-leg strategy.
///
/// Leg order is insertion order: it does not affect the payoff math
/// but is preserved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionStrategy {
    /// Display name.
    pub name: String,
    /// All legs of the strategy.
    pub legs: Vec<StrategyLeg>,
}

/// A strategy record as exchanged with the persistence collaborator.
///
/// The engine never reads or writes these itself; the type pins the
/// collaborator's JSON shape (camelCase keys, optional `stockSymbol`,
/// opaque identifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedStrategy {
    /// Opaque identifier assigned by the collaborator.
    pub id: String,
    /// Display name.
    pub name: String,
    /// All legs of the strategy.
    pub legs: Vec<StrategyLeg>,
    /// Underlying symbol, when the strategy is tied to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_symbol: Option<String>,
}
