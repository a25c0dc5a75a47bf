use crate::Card;

/// Snapshot taken before a scoring play resolves. Restoring these
/// fields wholesale also reverts any milestone bonus the play awarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayRecord {
    pub card: Card,
    /// Position the card occupied in hand when it was played.
    pub hand_index: usize,
    pub score: i64,
    pub cards_played: u64,
    pub combo_multiplier: i64,
    pub defensive_chain: u32,
    pub chain_multiplier: f64,
}

/// Bounded undo stack; pushing past the limit evicts the oldest entry.
#[derive(Debug)]
pub struct PlayHistory {
    limit: usize,
    records: Vec<PlayRecord>,
}

impl PlayHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            records: Vec::with_capacity(limit),
        }
    }

    pub fn push(&mut self, record: PlayRecord) {
        if self.limit == 0 {
            return;
        }
        if self.records.len() == self.limit {
            self.records.remove(0);
        }
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<PlayRecord> {
        self.records.pop()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardKind, Category, Rarity};

    fn record(tag: u64) -> PlayRecord {
        PlayRecord {
            card: Card {
                id: format!("first_down_{tag}"),
                name: "First Down".to_string(),
                kind: CardKind::Event,
                points: 1,
                rarity: Rarity::Common,
                category: Category::General,
            },
            hand_index: 0,
            score: tag as i64,
            cards_played: tag,
            combo_multiplier: 1,
            defensive_chain: 0,
            chain_multiplier: 1.0,
        }
    }

    #[test]
    fn evicts_oldest_past_limit() {
        let mut history = PlayHistory::new(5);
        for tag in 0..8 {
            history.push(record(tag));
        }
        assert_eq!(history.len(), 5);
        // Newest first when popping.
        let popped = history.pop().expect("record");
        assert_eq!(popped.cards_played, 7);
        // Oldest surviving snapshot is #3 (0..=2 were evicted).
        let mut last = popped;
        while let Some(next) = history.pop() {
            last = next;
        }
        assert_eq!(last.cards_played, 3);
    }

    #[test]
    fn zero_limit_stores_nothing() {
        let mut history = PlayHistory::new(0);
        history.push(record(1));
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }
}
