use serde::{Deserialize, Serialize};

/// Tunable rule constants for one round. `Default` carries the
/// standard game's numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRules {
    /// Soft hand size the engine deals and refills toward.
    pub hand_target: usize,
    /// Hard cap; draw effects stop early rather than exceed it.
    pub hand_cap: usize,
    /// Auto-refill to `hand_target` when the hand falls to this size
    /// or below after a play (and cards remain).
    pub refill_threshold: usize,
    /// Advisory "hand low" band, inclusive.
    pub low_hand_min: usize,
    pub low_hand_max: usize,
    /// Extra cards granted by the Draw Cards action.
    pub draw_action_cards: usize,
    /// Base points of the Combo Boost action, scaled by the chain
    /// multiplier at play time.
    pub combo_boost_base: i64,
    /// Flat bonus every `cards_milestone_every` cards played.
    pub cards_milestone_every: u64,
    pub cards_milestone_bonus: i64,
    /// Chain-length milestone interval and per-link bonus scale.
    pub chain_milestone_every: u32,
    pub chain_milestone_scale: i64,
    /// Chain multiplier growth per consecutive chain card and its cap.
    pub chain_mult_step: f64,
    pub chain_mult_cap: f64,
    /// Undo depth; the oldest snapshot is evicted beyond this.
    pub history_limit: usize,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            hand_target: 7,
            hand_cap: 10,
            refill_threshold: 2,
            low_hand_min: 3,
            low_hand_max: 4,
            draw_action_cards: 2,
            combo_boost_base: 3,
            cards_milestone_every: 10,
            cards_milestone_bonus: 5,
            chain_milestone_every: 3,
            chain_milestone_scale: 2,
            chain_mult_step: 0.5,
            chain_mult_cap: 3.0,
            history_limit: 5,
        }
    }
}
