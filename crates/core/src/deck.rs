use crate::{Card, CardSet};
use rand::{rngs::StdRng, seq::SliceRandom};

/// Draw pile plus discard pile. Cards are drawn from the tail of
/// `draw` (stack discipline); played cards accumulate in `discard`
/// until a reshuffle folds them back in.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// Build a fresh deck from a template table: `count` copies per
    /// template, each tagged with its zero-based copy index, uniformly
    /// shuffled.
    pub fn from_set(set: &CardSet, rng: &mut StdRng) -> Self {
        let mut draw = Vec::with_capacity(set.total_cards());
        for template in set.templates() {
            for copy in 0..template.count {
                draw.push(Card {
                    id: format!("{}_{}", template.slug, copy),
                    name: template.name.to_string(),
                    kind: template.kind,
                    points: template.points,
                    rarity: template.rarity,
                    category: template.category,
                });
            }
        }
        draw.shuffle(rng);
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn draw_one(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Put a card back into the draw pile and reshuffle it, as the
    /// Discard action does with its chosen target.
    pub fn return_to_draw(&mut self, card: Card, rng: &mut StdRng) {
        self.draw.push(card);
        self.draw.shuffle(rng);
    }

    pub fn reshuffle_discard(&mut self, rng: &mut StdRng) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.append(&mut self.discard);
        self.draw.shuffle(rng);
    }

    /// Cards still available to draw, counting a pending reshuffle.
    pub fn remaining(&self) -> usize {
        self.draw.len() + self.discard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn builds_one_instance_per_copy() {
        let set = CardSet::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::from_set(&set, &mut rng);
        assert_eq!(deck.draw.len(), set.total_cards());
        assert!(deck.discard.is_empty());

        let mut ids: Vec<&str> = deck.draw.iter().map(|card| card.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), set.total_cards(), "instance ids must be unique");
    }

    #[test]
    fn reshuffle_folds_discard_back_in() {
        let set = CardSet::standard();
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::from_set(&set, &mut rng);
        let total = deck.draw.len();
        for _ in 0..5 {
            let card = deck.draw_one().expect("card");
            deck.discard(card);
        }
        assert_eq!(deck.draw.len(), total - 5);
        deck.reshuffle_discard(&mut rng);
        assert_eq!(deck.draw.len(), total);
        assert!(deck.discard.is_empty());
    }
}
