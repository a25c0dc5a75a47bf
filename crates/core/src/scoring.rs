use crate::RoundRules;

/// Chain multiplier for a defensive chain of the given length. A lone
/// chain card (and a chain of two) earns no bonus; from the third
/// consecutive card the multiplier grows by `chain_mult_step` per
/// link, capped at `chain_mult_cap`.
pub fn chain_multiplier(chain: u32, rules: &RoundRules) -> f64 {
    if chain < 3 {
        return 1.0;
    }
    let raw = 1.0 + (chain - 2) as f64 * rules.chain_mult_step;
    raw.min(rules.chain_mult_cap)
}

/// Round-half-up to the nearest integer. Applied independently at each
/// point-awarding step, never on an aggregate.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn scaled_points(points: i64, multiplier: f64) -> i64 {
    round_half_up(points as f64 * multiplier)
}

/// Flat bonus when the cumulative play count hits a milestone.
pub fn cards_milestone(cards_played: u64, rules: &RoundRules) -> Option<i64> {
    if cards_played > 0 && cards_played % rules.cards_milestone_every == 0 {
        Some(rules.cards_milestone_bonus)
    } else {
        None
    }
}

/// Chain-length bonus, scaled by the chain itself.
pub fn chain_milestone(chain: u32, rules: &RoundRules) -> Option<i64> {
    if chain >= rules.chain_milestone_every && chain % rules.chain_milestone_every == 0 {
        Some(chain as i64 * rules.chain_milestone_scale)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_multiplier_sequence() {
        let rules = RoundRules::default();
        let expected = [
            (0, 1.0),
            (1, 1.0),
            (2, 1.0),
            (3, 1.5),
            (4, 2.0),
            (5, 2.5),
            (6, 3.0),
            (7, 3.0),
        ];
        for (chain, mult) in expected {
            assert_eq!(chain_multiplier(chain, &rules), mult, "chain {chain}");
        }
    }

    #[test]
    fn rounding_is_half_up_per_step() {
        assert_eq!(round_half_up(7.5), 8);
        assert_eq!(round_half_up(12.5), 13);
        assert_eq!(round_half_up(12.4), 12);
        assert_eq!(scaled_points(5, 1.5), 8);
        assert_eq!(scaled_points(5, 2.5), 13);
        assert_eq!(scaled_points(3, 1.0), 3);
    }

    #[test]
    fn cards_milestone_multiples_of_ten() {
        let rules = RoundRules::default();
        assert_eq!(cards_milestone(0, &rules), None);
        assert_eq!(cards_milestone(9, &rules), None);
        assert_eq!(cards_milestone(10, &rules), Some(5));
        assert_eq!(cards_milestone(15, &rules), None);
        assert_eq!(cards_milestone(20, &rules), Some(5));
    }

    #[test]
    fn chain_milestone_multiples_of_three() {
        let rules = RoundRules::default();
        assert_eq!(chain_milestone(0, &rules), None);
        assert_eq!(chain_milestone(2, &rules), None);
        assert_eq!(chain_milestone(3, &rules), Some(6));
        assert_eq!(chain_milestone(4, &rules), None);
        assert_eq!(chain_milestone(6, &rules), Some(12));
        assert_eq!(chain_milestone(9, &rules), Some(18));
    }
}
