use serde::{Deserialize, Serialize};

/// Instance id of the one-shot Discard card injected at round start.
pub const STARTER_DISCARD_ID: &str = "starter_discard";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Drives the defensive-chain mechanic independently of `CardKind`:
/// event cards tagged `Defensive` extend the chain just like
/// defensive-kind cards do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Defensive,
}

/// The closed set of action-card behaviors, matched exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DoubleNext,
    DrawCards,
    ComboBoost,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Event,
    Action(ActionKind),
    Defensive,
    Special,
}

/// One physical copy of a template. Point values, kind, category and
/// rarity are fixed per template; only `id` distinguishes copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub kind: CardKind,
    pub points: i64,
    pub rarity: Rarity,
    pub category: Category,
}

impl Card {
    pub fn chain_eligible(&self) -> bool {
        self.kind == CardKind::Defensive || self.category == Category::Defensive
    }

    pub fn is_legendary(&self) -> bool {
        self.rarity == Rarity::Legendary
    }

    pub fn is_starter_discard(&self) -> bool {
        self.id == STARTER_DISCARD_ID
    }
}
