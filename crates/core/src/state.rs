use serde::{Deserialize, Serialize};

/// Mutable aggregate for one round. Mutated only through the engine's
/// operation entry points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundState {
    pub score: i64,
    pub cards_played: u64,
    /// 1 or 2; set by Double Next, consumed by the next event card.
    pub combo_multiplier: i64,
    /// Consecutive chain-eligible cards with no interruption.
    pub defensive_chain: u32,
    /// Derived from `defensive_chain`; kept denormalized so callers
    /// can render it without recomputing.
    pub chain_multiplier: f64,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            score: 0,
            cards_played: 0,
            combo_multiplier: 1,
            defensive_chain: 0,
            chain_multiplier: 1.0,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
