//! Battle coordinator.
//!
//! ## Phases
//!
//! ```text
//! AwaitingCardSelection --select_card--> AwaitingAttributeChoice   (player attacks)
//!                       --select_card--> RevealedAwaitingRoll      (opponent attacks)
//! AwaitingAttributeChoice --choose_attribute--> RevealedAwaitingRoll
//! RevealedAwaitingRoll --roll--> RoundResolved | MatchComplete
//! RoundResolved --next_round--> AwaitingCardSelection
//! ```
//!
//! Every transition is only accepted in its source phase. Anything else is
//! rejected and leaves the battle untouched, which is what makes duplicate
//! clicks harmless.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::policy::BattlePolicy;
use super::round::RoundReport;
use super::state::MatchState;
use crate::cards::{Attribute, DraftCard, Hand};
use crate::core::{DieRoller, GameRng, MatchConfig, Rejection, Side, SideMap};

/// Battle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Waiting for the player to commit a hand card.
    AwaitingCardSelection,
    /// Player attacks and must pick the attribute.
    AwaitingAttributeChoice,
    /// Both cards and the attribute are fixed; waiting for the roll.
    RevealedAwaitingRoll,
    /// Round scored; waiting for the next-round trigger.
    RoundResolved,
    /// All rounds played.
    MatchComplete,
}

/// Cards and attribute committed for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Player's hand index.
    pub player: usize,
    /// Opponent's hand index.
    pub opponent: usize,
    /// Contested attribute, once chosen.
    pub attribute: Option<Attribute>,
}

impl Selection {
    fn hand_index(&self) -> SideMap<usize> {
        SideMap::new(|side| match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        })
    }
}

/// The battle state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    hands: SideMap<Hand>,
    state: MatchState,
    phase: BattlePhase,
    selection: Option<Selection>,
    rounds: u8,
    die_faces: u8,
    history: Vec<RoundReport>,
}

impl Battle {
    /// Open round 1 with `attacker` choosing the attribute.
    #[must_use]
    pub fn new(hands: SideMap<Hand>, attacker: Side, config: &MatchConfig) -> Self {
        debug!(%attacker, rounds = config.rounds, "battle started");
        Self {
            hands,
            state: MatchState::new(attacker),
            phase: BattlePhase::AwaitingCardSelection,
            selection: None,
            rounds: config.rounds,
            die_faces: config.die_faces,
            history: Vec::new(),
        }
    }

    /// Player commits hand card `index`; the opponent answers at once.
    pub fn select_card(
        &mut self,
        index: usize,
        policy: &dyn BattlePolicy,
        rng: &mut GameRng,
    ) -> Result<Selection, Rejection> {
        self.expect_phase(BattlePhase::AwaitingCardSelection, "card selection")?;

        let len = self.hands[Side::Player].len();
        if index >= len {
            return Err(Rejection::OutOfRange { index, len });
        }
        if self.state.is_played(Side::Player, index) {
            return Err(Rejection::AlreadyPlayed(index));
        }

        let opponent = self.opponent_card(policy, rng)?;
        let attribute = match self.state.attacker {
            Side::Player => None,
            Side::Opponent => self
                .hands[Side::Opponent]
                .get(opponent)
                .map(|card| policy.choose_attribute(card)),
        };

        let selection = Selection {
            player: index,
            opponent,
            attribute,
        };
        self.selection = Some(selection);
        self.phase = if attribute.is_some() {
            BattlePhase::RevealedAwaitingRoll
        } else {
            BattlePhase::AwaitingAttributeChoice
        };

        debug!(round = self.state.round, player = index, opponent, ?attribute, "cards committed");
        Ok(selection)
    }

    /// Player picks the contested attribute (player attacking only).
    pub fn choose_attribute(&mut self, attribute: Attribute) -> Result<(), Rejection> {
        if self.phase == BattlePhase::RevealedAwaitingRoll && self.state.attacker == Side::Opponent {
            return Err(Rejection::NotAttacker(attribute));
        }
        self.expect_phase(BattlePhase::AwaitingAttributeChoice, "attribute choice")?;

        if let Some(selection) = self.selection.as_mut() {
            selection.attribute = Some(attribute);
        }
        self.phase = BattlePhase::RevealedAwaitingRoll;

        debug!(%attribute, "player chose attribute");
        Ok(())
    }

    /// Roll both dice (player first) and score the round.
    pub fn roll<R>(&mut self, dice: &mut R) -> Result<RoundReport, Rejection>
    where
        R: DieRoller + ?Sized,
    {
        self.expect_phase(BattlePhase::RevealedAwaitingRoll, "roll")?;

        let selection = self.selection.ok_or(Rejection::WrongPhase("roll"))?;
        let attribute = selection.attribute.ok_or(Rejection::WrongPhase("roll"))?;
        let hand_index = selection.hand_index();

        let mut base = SideMap::with_value(0u8);
        for side in Side::ALL {
            base[side] = self.hands[side]
                .get(hand_index[side])
                .map_or(0, |card| card.get(attribute));
        }

        let player_die = dice.roll(self.die_faces);
        let opponent_die = dice.roll(self.die_faces);
        let die = SideMap::new(|side| match side {
            Side::Player => player_die,
            Side::Opponent => opponent_die,
        });

        let report = RoundReport::resolve(self.state.round, self.state.attacker, attribute, hand_index, base, die);
        self.state.record_round(hand_index, report.outcome, report.points);
        self.history.push(report.clone());

        self.phase = if self.state.round >= self.rounds {
            BattlePhase::MatchComplete
        } else {
            BattlePhase::RoundResolved
        };

        debug!(%report, "round resolved");
        if self.phase == BattlePhase::MatchComplete {
            info!(
                player = self.state.scores[Side::Player],
                opponent = self.state.scores[Side::Opponent],
                "battle complete"
            );
        }
        Ok(report)
    }

    /// Move on to the next round.
    pub fn next_round(&mut self) -> Result<(), Rejection> {
        self.expect_phase(BattlePhase::RoundResolved, "next round")?;

        self.state.round += 1;
        self.selection = None;
        self.phase = BattlePhase::AwaitingCardSelection;

        debug!(round = self.state.round, attacker = %self.state.attacker, "round started");
        Ok(())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Is the battle over?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == BattlePhase::MatchComplete
    }

    /// Scores, roles and used cards.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// One side's hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// Current round's commitments, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Committed card for `side` this round.
    #[must_use]
    pub fn committed_card(&self, side: Side) -> Option<&DraftCard> {
        let selection = self.selection?;
        self.hands[side].get(selection.hand_index()[side])
    }

    /// Hand indices the player may click right now.
    ///
    /// Empty outside card selection.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        if self.phase != BattlePhase::AwaitingCardSelection {
            return Vec::new();
        }
        self.state.unplayed(Side::Player, self.hands[Side::Player].len())
    }

    /// Every resolved round, in order.
    #[must_use]
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Total rounds in this battle.
    #[must_use]
    pub fn rounds(&self) -> u8 {
        self.rounds
    }

    fn expect_phase(&self, expected: BattlePhase, event: &'static str) -> Result<(), Rejection> {
        if self.phase == BattlePhase::MatchComplete {
            return Err(Rejection::MatchComplete);
        }
        if self.phase != expected {
            return Err(Rejection::WrongPhase(event));
        }
        Ok(())
    }

    fn opponent_card(&self, policy: &dyn BattlePolicy, rng: &mut GameRng) -> Result<usize, Rejection> {
        let hand = &self.hands[Side::Opponent];
        let unplayed = self.state.unplayed(Side::Opponent, hand.len());
        let first = *unplayed.first().ok_or(Rejection::OpponentExhausted)?;

        match policy.choose_card(hand, &unplayed, rng) {
            Some(index) if unplayed.contains(&index) => Ok(index),
            other => {
                warn!(?other, fallback = first, "battle policy returned an unusable card");
                Ok(first)
            }
        }
    }
}
