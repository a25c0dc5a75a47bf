use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Special,
}

/// Everything the engine tells the caller, one notice per observable
/// event. The caller renders `Display` however it likes, transiently
/// or not; nothing here is mechanical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Notice {
    EventScored {
        name: String,
        points: i64,
        multiplier: f64,
        legendary: bool,
    },
    DefensiveScored {
        name: String,
        points: i64,
        multiplier: f64,
    },
    ComboArmed,
    ComboBoost {
        points: i64,
    },
    CardsDrawn {
        count: usize,
    },
    DeckReshuffled {
        count: usize,
    },
    CardsMilestone {
        cards_played: u64,
        bonus: i64,
    },
    ChainMilestone {
        chain: u32,
        bonus: i64,
    },
    HandFull,
    HandLow,
    DiscardPrompt,
    DiscardUnavailable,
    DiscardCancelled,
    CardReturned {
        name: String,
    },
    UndoApplied {
        name: String,
    },
    NothingToUndo,
    RoundSettled {
        final_score: i64,
        penalty: i64,
    },
    NewBest {
        score: i64,
    },
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::EventScored {
                legendary: true, ..
            }
            | Notice::NewBest { .. } => Severity::Special,
            Notice::EventScored { .. }
            | Notice::DefensiveScored { .. }
            | Notice::ComboArmed
            | Notice::ComboBoost { .. }
            | Notice::CardsMilestone { .. }
            | Notice::ChainMilestone { .. }
            | Notice::RoundSettled { .. } => Severity::Success,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EventScored {
                name,
                points,
                multiplier,
                legendary,
            } => {
                if *legendary {
                    write!(f, "Legendary! ")?;
                }
                if *multiplier > 1.0 {
                    write!(f, "{name} scores {points} points ({multiplier}x)")
                } else {
                    write!(f, "{name} scores {points} points")
                }
            }
            Notice::DefensiveScored {
                name,
                points,
                multiplier,
            } => {
                if *multiplier > 1.0 {
                    write!(f, "{name} holds for {points} points ({multiplier}x chain)")
                } else {
                    write!(f, "{name} holds for {points} points")
                }
            }
            Notice::ComboArmed => write!(f, "Double Next armed: your next event scores 2x"),
            Notice::ComboBoost { points } => write!(f, "Combo Boost adds {points} points"),
            Notice::CardsDrawn { count } => {
                if *count == 1 {
                    write!(f, "Drew 1 card")
                } else {
                    write!(f, "Drew {count} cards")
                }
            }
            Notice::DeckReshuffled { count } => {
                write!(f, "Discard pile shuffled back into the deck ({count} cards)")
            }
            Notice::CardsMilestone {
                cards_played,
                bonus,
            } => write!(f, "{cards_played} cards played: +{bonus} bonus"),
            Notice::ChainMilestone { chain, bonus } => {
                write!(f, "Defensive chain of {chain}: +{bonus} bonus")
            }
            Notice::HandFull => write!(f, "Hand is full"),
            Notice::HandLow => write!(f, "Hand is running low"),
            Notice::DiscardPrompt => write!(f, "Choose another card to return to the deck"),
            Notice::DiscardUnavailable => write!(f, "No other card in hand to discard"),
            Notice::DiscardCancelled => write!(f, "Discard cancelled"),
            Notice::CardReturned { name } => write!(f, "{name} returned to the deck"),
            Notice::UndoApplied { name } => write!(f, "Undid {name}"),
            Notice::NothingToUndo => write!(f, "Nothing to undo"),
            Notice::RoundSettled {
                final_score,
                penalty,
            } => write!(
                f,
                "Round over: final score {final_score} after a {penalty} point hand penalty"
            ),
            Notice::NewBest { score } => write!(f, "New personal best: {score}!"),
        }
    }
}

#[derive(Debug, Default)]
pub struct NoticeBus {
    queue: Vec<Notice>,
}

impl NoticeBus {
    pub fn push(&mut self, notice: Notice) {
        self.queue.push(notice);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Notice> + '_ {
        self.queue.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legendary_events_are_special() {
        let notice = Notice::EventScored {
            name: "Hail Mary".to_string(),
            points: 9,
            multiplier: 1.0,
            legendary: true,
        };
        assert_eq!(notice.severity(), Severity::Special);

        let plain = Notice::EventScored {
            name: "Touchdown".to_string(),
            points: 7,
            multiplier: 1.0,
            legendary: false,
        };
        assert_eq!(plain.severity(), Severity::Success);
    }

    #[test]
    fn multiplier_shown_only_above_one() {
        let boosted = Notice::EventScored {
            name: "Touchdown".to_string(),
            points: 14,
            multiplier: 2.0,
            legendary: false,
        };
        assert_eq!(boosted.to_string(), "Touchdown scores 14 points (2x)");

        let flat = Notice::EventScored {
            name: "Punt".to_string(),
            points: 1,
            multiplier: 1.0,
            legendary: false,
        };
        assert_eq!(flat.to_string(), "Punt scores 1 points");
    }

    #[test]
    fn bus_drains_in_order() {
        let mut bus = NoticeBus::default();
        bus.push(Notice::HandLow);
        bus.push(Notice::NothingToUndo);
        let drained: Vec<Notice> = bus.drain().collect();
        assert_eq!(drained, vec![Notice::HandLow, Notice::NothingToUndo]);
        assert_eq!(bus.drain().count(), 0);
    }
}
