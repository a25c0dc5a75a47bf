use crate::scoring::round_half_up;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Cross-round record: the three integers the settlement step reads
/// and writes. Anything richer belongs to the caller.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifetimeStats {
    pub personal_best: i64,
    pub games_played: u64,
    pub average_score: i64,
}

impl LifetimeStats {
    /// Fold one settled round into the record. Returns whether the
    /// final score strictly beat the previous best.
    pub fn record_round(&mut self, final_score: i64) -> bool {
        let new_best = final_score > self.personal_best;
        let total = self.average_score * self.games_played as i64 + final_score;
        self.games_played += 1;
        self.average_score = round_half_up(total as f64 / self.games_played as f64);
        if new_best {
            self.personal_best = final_score;
        }
        new_best
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to load stats: {0}")]
    Load(String),
    #[error("failed to save stats: {0}")]
    Save(String),
}

/// Injected persistence collaborator. Read once at engine start,
/// written only by end-of-round settlement.
pub trait StatsStore: fmt::Debug {
    fn load(&mut self) -> Result<LifetimeStats, StatsError>;
    fn save(&mut self, stats: &LifetimeStats) -> Result<(), StatsError>;
}

/// In-memory store for tests and embedders that persist elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStatsStore {
    pub stats: LifetimeStats,
}

impl MemoryStatsStore {
    pub fn with_stats(stats: LifetimeStats) -> Self {
        Self { stats }
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&mut self) -> Result<LifetimeStats, StatsError> {
        Ok(self.stats)
    }

    fn save(&mut self, stats: &LifetimeStats) -> Result<(), StatsError> {
        self.stats = *stats;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_sets_best_and_average() {
        let mut stats = LifetimeStats::default();
        assert!(stats.record_round(10));
        assert_eq!(stats.personal_best, 10);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.average_score, 10);
    }

    #[test]
    fn average_is_rounded_running_mean() {
        let mut stats = LifetimeStats {
            personal_best: 50,
            games_played: 2,
            average_score: 30,
        };
        // (30 * 2 + 10) / 3 = 23.33 -> 23
        assert!(!stats.record_round(10));
        assert_eq!(stats.personal_best, 50);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.average_score, 23);
    }

    #[test]
    fn best_requires_strict_improvement() {
        let mut stats = LifetimeStats {
            personal_best: 10,
            games_played: 1,
            average_score: 10,
        };
        assert!(!stats.record_round(10));
        assert_eq!(stats.personal_best, 10);
        assert!(stats.record_round(11));
        assert_eq!(stats.personal_best, 11);
    }
}
