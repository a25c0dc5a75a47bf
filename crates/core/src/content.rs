use crate::{ActionKind, Card, CardKind, Category, Rarity, STARTER_DISCARD_ID};
use thiserror::Error;

/// Deck-construction template: one entry per card name, with the number
/// of copies shuffled into a fresh deck. Descriptions are flavor text
/// and never consulted by the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub slug: &'static str,
    pub name: &'static str,
    pub kind: CardKind,
    pub points: i64,
    pub rarity: Rarity,
    pub category: Category,
    pub description: &'static str,
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum CardSetError {
    #[error("card set has no templates")]
    Empty,
    #[error("card set has no drawable cards")]
    NoDrawableCards,
}

#[derive(Debug, Clone)]
pub struct CardSet {
    templates: Vec<CardTemplate>,
}

impl CardSet {
    pub fn new(templates: Vec<CardTemplate>) -> Result<Self, CardSetError> {
        if templates.is_empty() {
            return Err(CardSetError::Empty);
        }
        if templates.iter().all(|template| template.count == 0) {
            return Err(CardSetError::NoDrawableCards);
        }
        Ok(Self { templates })
    }

    /// The built-in football table.
    pub fn standard() -> Self {
        Self {
            templates: STANDARD_TEMPLATES.to_vec(),
        }
    }

    pub fn templates(&self) -> &[CardTemplate] {
        &self.templates
    }

    /// Total copies across all templates; the denominator of the
    /// deck-completeness accounting invariant.
    pub fn total_cards(&self) -> usize {
        self.templates.iter().map(|template| template.count).sum()
    }
}

/// The one-shot starter Discard card. It is not part of any template
/// table: the engine injects exactly one copy into the first hand of a
/// round, and a consumed copy is gone for the remainder of the round.
pub fn starter_discard() -> Card {
    Card {
        id: STARTER_DISCARD_ID.to_string(),
        name: "Discard".to_string(),
        kind: CardKind::Special,
        points: 0,
        rarity: Rarity::Common,
        category: Category::General,
    }
}

const STANDARD_TEMPLATES: &[CardTemplate] = &[
    CardTemplate {
        slug: "touchdown",
        name: "Touchdown",
        kind: CardKind::Event,
        points: 7,
        rarity: Rarity::Uncommon,
        category: Category::General,
        description: "A player crosses the goal line with the ball",
        count: 8,
    },
    CardTemplate {
        slug: "field_goal",
        name: "Field Goal",
        kind: CardKind::Event,
        points: 3,
        rarity: Rarity::Common,
        category: Category::General,
        description: "Kicker puts the ball through the uprights",
        count: 6,
    },
    CardTemplate {
        slug: "safety",
        name: "Safety",
        kind: CardKind::Event,
        points: 2,
        rarity: Rarity::Rare,
        category: Category::Defensive,
        description: "Ball carrier tackled in his own end zone",
        count: 2,
    },
    CardTemplate {
        slug: "interception",
        name: "Interception",
        kind: CardKind::Event,
        points: 5,
        rarity: Rarity::Uncommon,
        category: Category::Defensive,
        description: "Defense catches a pass meant for the offense",
        count: 4,
    },
    CardTemplate {
        slug: "fumble_recovery",
        name: "Fumble Recovery",
        kind: CardKind::Event,
        points: 4,
        rarity: Rarity::Uncommon,
        category: Category::Defensive,
        description: "Loose ball scooped up by the defense",
        count: 4,
    },
    CardTemplate {
        slug: "sack",
        name: "Sack",
        kind: CardKind::Event,
        points: 3,
        rarity: Rarity::Common,
        category: Category::Defensive,
        description: "Quarterback brought down behind the line",
        count: 6,
    },
    CardTemplate {
        slug: "first_down",
        name: "First Down",
        kind: CardKind::Event,
        points: 1,
        rarity: Rarity::Common,
        category: Category::General,
        description: "Ten or more yards gained for a fresh set of downs",
        count: 12,
    },
    CardTemplate {
        slug: "punt",
        name: "Punt",
        kind: CardKind::Event,
        points: 1,
        rarity: Rarity::Common,
        category: Category::General,
        description: "Fourth down kick flips the field",
        count: 8,
    },
    CardTemplate {
        slug: "hail_mary",
        name: "Hail Mary",
        kind: CardKind::Event,
        points: 9,
        rarity: Rarity::Legendary,
        category: Category::General,
        description: "Desperation heave comes down in the right hands",
        count: 1,
    },
    CardTemplate {
        slug: "goal_line_stand",
        name: "Goal Line Stand",
        kind: CardKind::Defensive,
        points: 4,
        rarity: Rarity::Rare,
        category: Category::Defensive,
        description: "Four downs inside the five, no points allowed",
        count: 3,
    },
    CardTemplate {
        slug: "blocked_kick",
        name: "Blocked Kick",
        kind: CardKind::Defensive,
        points: 3,
        rarity: Rarity::Uncommon,
        category: Category::Defensive,
        description: "A hand gets up and swats the kick away",
        count: 4,
    },
    CardTemplate {
        slug: "pass_breakup",
        name: "Pass Breakup",
        kind: CardKind::Defensive,
        points: 2,
        rarity: Rarity::Common,
        category: Category::Defensive,
        description: "Corner knocks the ball loose at the catch point",
        count: 6,
    },
    CardTemplate {
        slug: "double_next",
        name: "Double Next",
        kind: CardKind::Action(ActionKind::DoubleNext),
        points: 0,
        rarity: Rarity::Uncommon,
        category: Category::General,
        description: "Your next event card scores double",
        count: 3,
    },
    CardTemplate {
        slug: "draw_cards",
        name: "Draw Cards",
        kind: CardKind::Action(ActionKind::DrawCards),
        points: 0,
        rarity: Rarity::Common,
        category: Category::General,
        description: "Draw two extra cards from the deck",
        count: 4,
    },
    CardTemplate {
        slug: "combo_boost",
        name: "Combo Boost",
        kind: CardKind::Action(ActionKind::ComboBoost),
        points: 0,
        rarity: Rarity::Rare,
        category: Category::General,
        description: "Instant points, scaled by your defensive chain",
        count: 3,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_is_valid() {
        let set = CardSet::standard();
        assert!(!set.templates().is_empty());
        assert_eq!(
            set.total_cards(),
            set.templates().iter().map(|t| t.count).sum::<usize>()
        );
        assert!(set.total_cards() > 0);
    }

    #[test]
    fn empty_set_rejected() {
        assert!(matches!(CardSet::new(Vec::new()), Err(CardSetError::Empty)));
    }

    #[test]
    fn all_zero_counts_rejected() {
        let template = CardTemplate {
            slug: "touchdown",
            name: "Touchdown",
            kind: CardKind::Event,
            points: 7,
            rarity: Rarity::Uncommon,
            category: Category::General,
            description: "",
            count: 0,
        };
        assert!(matches!(
            CardSet::new(vec![template]),
            Err(CardSetError::NoDrawableCards)
        ));
    }

    #[test]
    fn starter_discard_shape() {
        let starter = starter_discard();
        assert_eq!(starter.id, STARTER_DISCARD_ID);
        assert_eq!(starter.kind, CardKind::Special);
        assert_eq!(starter.points, 0);
        assert!(!starter.chain_eligible());
    }
}
