use crate::{
    scoring, starter_discard, ActionKind, Card, CardKind, CardSet, Deck, LifetimeStats, Notice,
    NoticeBus, PlayHistory, PlayRecord, RoundRules, RoundState, StatsError, StatsStore,
};
use rand::{rngs::StdRng, SeedableRng};

/// One line of the end-of-round hand penalty breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyLine {
    pub name: String,
    pub points: i64,
}

/// Result of settling a round. The caller acknowledges it by starting
/// the next round with [`RoundEngine::start_round`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub base_score: i64,
    pub penalty: Vec<PenaltyLine>,
    pub hand_penalty: i64,
    pub final_score: i64,
    pub new_best: bool,
}

/// The round engine: owns the deck, the hand and all scoring rules for
/// one player's play-through. Every operation is synchronous and runs
/// to completion; caller misuse (bad indices, undo with no history) is
/// absorbed as a no-op or an advisory notice, never an error. Only the
/// stats store surface can fail.
#[derive(Debug)]
pub struct RoundEngine {
    rules: RoundRules,
    set: CardSet,
    rng: StdRng,
    deck: Deck,
    hand: Vec<Card>,
    state: RoundState,
    history: PlayHistory,
    /// Hand index of a played Discard card awaiting target selection.
    pending_discard: Option<usize>,
    /// One-shot: the starter Discard is injected at most once per round.
    starter_dealt: bool,
    stats: LifetimeStats,
    store: Box<dyn StatsStore>,
}

impl RoundEngine {
    pub fn new(
        set: CardSet,
        rules: RoundRules,
        seed: u64,
        mut store: Box<dyn StatsStore>,
    ) -> Result<Self, StatsError> {
        let stats = store.load()?;
        let history = PlayHistory::new(rules.history_limit);
        // The deck stays empty until `start_round` builds and deals it.
        Ok(Self {
            rules,
            set,
            rng: StdRng::seed_from_u64(seed),
            deck: Deck::default(),
            hand: Vec::new(),
            state: RoundState::new(),
            history,
            pending_discard: None,
            starter_dealt: false,
            stats,
            store,
        })
    }

    /// Engine over the built-in football card set with default rules.
    pub fn standard(seed: u64, store: Box<dyn StatsStore>) -> Result<Self, StatsError> {
        Self::new(CardSet::standard(), RoundRules::default(), seed, store)
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn stats(&self) -> &LifetimeStats {
        &self.stats
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    pub fn card_set(&self) -> &CardSet {
        &self.set
    }

    pub fn deck_len(&self) -> usize {
        self.deck.draw.len()
    }

    pub fn discard_len(&self) -> usize {
        self.deck.discard.len()
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn pending_discard(&self) -> Option<usize> {
        self.pending_discard
    }

    /// Begin a fresh round: new shuffled deck, cleared state and
    /// history, starter flag reset, initial hand dealt.
    pub fn start_round(&mut self, notices: &mut NoticeBus) {
        self.deck = Deck::from_set(&self.set, &mut self.rng);
        self.hand.clear();
        self.state = RoundState::new();
        self.history.clear();
        self.pending_discard = None;
        self.starter_dealt = false;
        self.deal_initial_hand(notices);
    }

    /// Clear and re-deal the hand. The starter Discard is injected only
    /// on the first deal of the round; cleared non-starter cards go to
    /// the discard pile, a cleared starter is simply dropped.
    pub fn deal_initial_hand(&mut self, notices: &mut NoticeBus) {
        self.pending_discard = None;
        let cleared: Vec<Card> = self.hand.drain(..).collect();
        for card in cleared {
            if !card.is_starter_discard() {
                self.deck.discard(card);
            }
        }
        if !self.starter_dealt {
            self.hand.push(starter_discard());
            self.starter_dealt = true;
        }
        self.draw_to_size(self.rules.hand_target, notices);
    }

    /// Play the card at `index`. Out-of-range indices are a silent
    /// no-op; while a discard selection is open, plays are ignored
    /// until it resolves or is cancelled.
    pub fn play_card(&mut self, index: usize, notices: &mut NoticeBus) {
        if self.pending_discard.is_some() {
            return;
        }
        let Some(card) = self.hand.get(index).cloned() else {
            return;
        };

        if card.kind == CardKind::Special {
            if self.hand.len() < 2 {
                notices.push(Notice::DiscardUnavailable);
                return;
            }
            self.pending_discard = Some(index);
            notices.push(Notice::DiscardPrompt);
            return;
        }

        self.history.push(PlayRecord {
            card: card.clone(),
            hand_index: index,
            score: self.state.score,
            cards_played: self.state.cards_played,
            combo_multiplier: self.state.combo_multiplier,
            defensive_chain: self.state.defensive_chain,
            chain_multiplier: self.state.chain_multiplier,
        });

        self.hand.remove(index);
        self.state.cards_played += 1;

        if card.chain_eligible() {
            self.state.defensive_chain += 1;
        } else {
            self.state.defensive_chain = 0;
        }
        self.state.chain_multiplier =
            scoring::chain_multiplier(self.state.defensive_chain, &self.rules);

        match card.kind {
            CardKind::Event => {
                let multiplier = self.state.combo_multiplier as f64 * self.state.chain_multiplier;
                let points = scoring::scaled_points(card.points, multiplier);
                self.state.score += points;
                notices.push(Notice::EventScored {
                    name: card.name.clone(),
                    points,
                    multiplier,
                    legendary: card.is_legendary(),
                });
                // Single-use: consumed by event cards only.
                self.state.combo_multiplier = 1;
            }
            CardKind::Action(action) => match action {
                ActionKind::DoubleNext => {
                    self.state.combo_multiplier = 2;
                    notices.push(Notice::ComboArmed);
                }
                ActionKind::DrawCards => {
                    let count = self.draw_extra(self.rules.draw_action_cards);
                    notices.push(Notice::CardsDrawn { count });
                }
                ActionKind::ComboBoost => {
                    // Chain multiplier, not combo; the combo stays armed.
                    let points = scoring::scaled_points(
                        self.rules.combo_boost_base,
                        self.state.chain_multiplier,
                    );
                    self.state.score += points;
                    notices.push(Notice::ComboBoost { points });
                }
            },
            CardKind::Defensive => {
                let points = scoring::scaled_points(card.points, self.state.chain_multiplier);
                self.state.score += points;
                notices.push(Notice::DefensiveScored {
                    name: card.name.clone(),
                    points,
                    multiplier: self.state.chain_multiplier,
                });
            }
            // Handled before the snapshot above.
            CardKind::Special => {}
        }

        self.deck.discard(card);

        if let Some(bonus) = scoring::cards_milestone(self.state.cards_played, &self.rules) {
            self.state.score += bonus;
            notices.push(Notice::CardsMilestone {
                cards_played: self.state.cards_played,
                bonus,
            });
        }
        if let Some(bonus) = scoring::chain_milestone(self.state.defensive_chain, &self.rules) {
            self.state.score += bonus;
            notices.push(Notice::ChainMilestone {
                chain: self.state.defensive_chain,
                bonus,
            });
        }

        if self.hand.len() <= self.rules.refill_threshold && self.deck.remaining() > 0 {
            self.draw_to_size(self.rules.hand_target, notices);
        }
        self.hand_status(notices);
    }

    /// Resolve an open Discard selection: consume the starter and
    /// return the chosen card to the deck. Invalid or stale indices
    /// are a silent no-op and leave the selection open.
    pub fn select_discard_target(
        &mut self,
        discard_index: usize,
        target_index: usize,
        notices: &mut NoticeBus,
    ) {
        let Some(pending) = self.pending_discard else {
            return;
        };
        if discard_index != pending || discard_index == target_index {
            return;
        }
        if discard_index >= self.hand.len() || target_index >= self.hand.len() {
            return;
        }
        if self.hand[discard_index].kind != CardKind::Special {
            return;
        }

        // Remove the higher index first so the lower one stays valid.
        let (high, low) = if discard_index > target_index {
            (discard_index, target_index)
        } else {
            (target_index, discard_index)
        };
        let first = self.hand.remove(high);
        let second = self.hand.remove(low);
        let target = if high == target_index { first } else { second };
        // The consumed starter is dropped; no replacement this round.

        let name = target.name.clone();
        self.deck.return_to_draw(target, &mut self.rng);
        self.pending_discard = None;
        notices.push(Notice::CardReturned { name });
    }

    /// Close an open Discard selection, leaving the card in hand.
    pub fn cancel_discard(&mut self, notices: &mut NoticeBus) {
        if self.pending_discard.take().is_some() {
            notices.push(Notice::DiscardCancelled);
        }
    }

    /// Reverse the most recent scoring play. Restores the snapshotted
    /// state wholesale, pulls the card back out of whichever pile it
    /// sits in and reinserts it at its original hand position; any
    /// overflow past the hand target goes back to the deck.
    pub fn undo(&mut self, notices: &mut NoticeBus) {
        let Some(record) = self.history.pop() else {
            notices.push(Notice::NothingToUndo);
            return;
        };

        self.state.score = record.score;
        self.state.cards_played = record.cards_played;
        self.state.combo_multiplier = record.combo_multiplier;
        self.state.defensive_chain = record.defensive_chain;
        self.state.chain_multiplier = record.chain_multiplier;

        let name = record.card.name.clone();
        // A refill reshuffle may have moved the played card out of the
        // discard pile, or even drawn it back into the hand; reinsert
        // only if no copy is held, never mint a second one.
        let in_hand = self.hand.iter().any(|card| card.id == record.card.id);
        if !in_hand {
            if let Some(pos) = self
                .deck
                .discard
                .iter()
                .position(|card| card.id == record.card.id)
            {
                self.deck.discard.remove(pos);
            } else if let Some(pos) = self
                .deck
                .draw
                .iter()
                .position(|card| card.id == record.card.id)
            {
                self.deck.draw.remove(pos);
            }
            let index = record.hand_index.min(self.hand.len());
            self.hand.insert(index, record.card);
        }
        while self.hand.len() > self.rules.hand_target {
            if let Some(extra) = self.hand.pop() {
                self.deck.draw.push(extra);
            }
        }

        // Hand indices shifted; any open selection is stale.
        self.pending_discard = None;
        notices.push(Notice::UndoApplied { name });
    }

    /// Settle the round: subtract the hand penalty, fold the result
    /// into the lifetime stats and persist them. Not reversible. The
    /// caller starts the next round with [`start_round`].
    ///
    /// [`start_round`]: RoundEngine::start_round
    pub fn end_round(&mut self, notices: &mut NoticeBus) -> Result<Settlement, StatsError> {
        self.pending_discard = None;
        let penalty: Vec<PenaltyLine> = self
            .hand
            .iter()
            .map(|card| PenaltyLine {
                name: card.name.clone(),
                points: card.points,
            })
            .collect();
        let hand_penalty: i64 = penalty.iter().map(|line| line.points).sum();
        let base_score = self.state.score;
        let final_score = base_score - hand_penalty;

        let new_best = self.stats.record_round(final_score);
        self.store.save(&self.stats)?;

        notices.push(Notice::RoundSettled {
            final_score,
            penalty: hand_penalty,
        });
        if new_best {
            notices.push(Notice::NewBest { score: final_score });
        }

        Ok(Settlement {
            base_score,
            penalty,
            hand_penalty,
            final_score,
            new_best,
        })
    }

    /// Draw from the deck tail until the hand reaches `target`,
    /// reshuffling the discard pile in when the draw pile runs dry.
    /// Never exceeds the hard hand cap; true exhaustion just yields a
    /// smaller hand.
    fn draw_to_size(&mut self, target: usize, notices: &mut NoticeBus) {
        let target = target.min(self.rules.hand_cap);
        while self.hand.len() < target {
            if self.deck.draw.is_empty() {
                if self.deck.discard.is_empty() {
                    break;
                }
                let count = self.deck.discard.len();
                self.deck.reshuffle_discard(&mut self.rng);
                notices.push(Notice::DeckReshuffled { count });
            }
            match self.deck.draw_one() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }
    }

    /// Bonus draw used by the Draw Cards action: capped, and never
    /// triggers a reshuffle.
    fn draw_extra(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count && self.hand.len() < self.rules.hand_cap {
            match self.deck.draw_one() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Advisory only; never blocks play.
    fn hand_status(&self, notices: &mut NoticeBus) {
        if self.deck.remaining() == 0 {
            return;
        }
        let size = self.hand.len();
        if size >= self.rules.hand_cap {
            notices.push(Notice::HandFull);
        } else if size >= self.rules.low_hand_min && size <= self.rules.low_hand_max {
            notices.push(Notice::HandLow);
        }
    }
}
