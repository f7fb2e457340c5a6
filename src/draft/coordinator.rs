//! Draft coordinator.
//!
//! Walks the pick schedule step by step. Opponent steps resolve the moment
//! they are entered, so between calls the draft is always either waiting on
//! the human player or complete. The pick log records every pick in order
//! for a renderer that wants to replay the opponent's turns with a delay.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::deck::Deck;
use super::policy::{uniform_picks, DraftPolicy, PoolCard};
use super::schedule::{pick_order, PickStep};
use crate::cards::Hand;
use crate::core::{GameRng, Rejection, Side, SideMap};

/// Where the draft stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftStatus {
    /// `side` still has to take `remaining` cards in step `step`.
    Picking {
        step: usize,
        side: Side,
        remaining: usize,
    },
    /// Every step is done and every card is drafted.
    Complete,
}

/// One drafted card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Schedule step the pick belongs to.
    pub step: usize,
    /// Side that picked.
    pub side: Side,
    /// Deck position taken.
    pub position: usize,
}

/// The draft state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    deck: Deck,
    steps: Vec<PickStep>,
    step: usize,
    remaining: usize,
    hands: SideMap<Hand>,
    log: Vec<PickRecord>,
}

impl Draft {
    /// Start a draft won by `first` and run any opening opponent steps.
    pub fn begin(
        deck: Deck,
        first: Side,
        pick_counts: &[usize],
        policy: &dyn DraftPolicy,
        rng: &mut GameRng,
    ) -> Self {
        let steps = pick_order(first, pick_counts);
        let remaining = steps.first().map_or(0, |s| s.count);

        let mut draft = Self {
            deck,
            steps,
            step: 0,
            remaining,
            hands: SideMap::with_default(),
            log: Vec::new(),
        };

        debug!(%first, steps = draft.steps.len(), "draft started");
        draft.run_opponent_steps(policy, rng);
        draft
    }

    /// Human player takes the card at `position`.
    ///
    /// On success the opponent's following steps (if any) are resolved
    /// before returning. On rejection nothing changes.
    pub fn pick(
        &mut self,
        position: usize,
        policy: &dyn DraftPolicy,
        rng: &mut GameRng,
    ) -> Result<PickRecord, Rejection> {
        let step = self.current_step().ok_or(Rejection::DraftComplete)?;
        if step.side != Side::Player {
            return Err(Rejection::NotPlayersTurn);
        }

        let record = self.take(position, Side::Player)?;
        debug!(position, remaining = self.remaining, "player drafted");

        self.run_opponent_steps(policy, rng);
        Ok(record)
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> DraftStatus {
        match self.current_step() {
            Some(step) => DraftStatus::Picking {
                step: self.step,
                side: step.side,
                remaining: self.remaining,
            },
            None => DraftStatus::Complete,
        }
    }

    /// Is the draft over?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_step().is_none()
    }

    /// The step being played, `None` once complete.
    #[must_use]
    pub fn current_step(&self) -> Option<PickStep> {
        self.steps.get(self.step).copied()
    }

    /// The full schedule.
    #[must_use]
    pub fn steps(&self) -> &[PickStep] {
        &self.steps
    }

    /// Deck positions the player may click right now.
    ///
    /// Empty unless it is the player's step.
    #[must_use]
    pub fn pickable_positions(&self) -> Vec<usize> {
        match self.current_step() {
            Some(step) if step.side == Side::Player => self.deck.untaken().map(|c| c.position).collect(),
            _ => Vec::new(),
        }
    }

    /// The shared pool.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// One side's drafted cards.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// Every pick so far, in order.
    #[must_use]
    pub fn log(&self) -> &[PickRecord] {
        &self.log
    }

    /// Hand both drafted hands over to the battle.
    #[must_use]
    pub fn into_hands(self) -> SideMap<Hand> {
        self.hands
    }

    fn take(&mut self, position: usize, side: Side) -> Result<PickRecord, Rejection> {
        let card = self.deck.take(position, side)?;
        self.hands[side].push(card);

        let record = PickRecord {
            step: self.step,
            side,
            position,
        };
        self.log.push(record);

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.advance();
        }
        Ok(record)
    }

    fn advance(&mut self) {
        self.step += 1;
        self.remaining = self.current_step().map_or(0, |s| s.count);
    }

    fn run_opponent_steps(&mut self, policy: &dyn DraftPolicy, rng: &mut GameRng) {
        while let Some(step) = self.current_step() {
            if step.side != Side::Opponent {
                return;
            }

            let need = self.remaining;
            let picks = {
                let pool: Vec<PoolCard<'_>> = self.deck.untaken().map(PoolCard::of).collect();
                policy.choose_picks(&pool, need, rng)
            };

            let current = self.step;
            for position in picks.into_iter().take(need) {
                if let Err(reason) = self.take(position, Side::Opponent) {
                    warn!(position, %reason, "draft policy returned an unusable pick");
                }
            }

            // Policy came up short: make up the difference uniformly.
            if self.step == current && self.deck.untaken().next().is_some() {
                warn!(step = current, short = self.remaining, "draft policy under-picked");
                let fill = {
                    let pool: Vec<PoolCard<'_>> = self.deck.untaken().map(PoolCard::of).collect();
                    uniform_picks(&pool, self.remaining, rng)
                };
                for position in fill {
                    if self.take(position, Side::Opponent).is_err() {
                        break;
                    }
                }
            }

            // Pool ran dry: the step still ends.
            if self.step == current {
                self.advance();
            }
        }

        if self.is_complete() {
            debug!(picks = self.log.len(), "draft complete");
        }
    }
}
