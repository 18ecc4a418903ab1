//! Game state owned by the game loop.
//!
//! ## Lifecycle
//!
//! - `Init`: built once from the arbiter's initial dump
//! - `TurnActive`: one iteration per turn, `total_turns` times
//! - `Done`: `money` is the final score
//!
//! `projects` and `money` are replaced wholesale from each snapshot. Exactly
//! one hand slot is replaced per turn: the slot that was just played.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardType};
use super::error::EngineError;
use super::project::Project;

/// Where the game loop is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Init,
    TurnActive,
    Done,
}

/// Complete engine-side game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Turns completed so far (0-based index of the current turn).
    pub turn: u32,

    /// Number of turns in the game.
    pub total_turns: u32,

    /// Money after the most recent replacement purchase.
    pub money: i64,

    /// Number of Invest cards played. Only increases.
    pub invest_level: u32,

    /// Fixed-size hand; a card's identity is its slot index.
    pub cards: Vec<Card>,

    /// Latest project snapshot.
    pub projects: Vec<Project>,

    /// Lifecycle phase.
    pub phase: Phase,
}

impl GameState {
    /// Create the initial state from the arbiter's opening dump.
    #[must_use]
    pub fn new(total_turns: u32, cards: Vec<Card>, projects: Vec<Project>) -> Self {
        Self {
            turn: 0,
            total_turns,
            money: 0,
            invest_level: 0,
            cards,
            projects,
            phase: Phase::Init,
        }
    }

    /// Leave `Init`. A zero-turn game goes straight to `Done`.
    pub fn start(&mut self) {
        self.phase = if self.total_turns == 0 {
            Phase::Done
        } else {
            Phase::TurnActive
        };
    }

    /// Check if the game has finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Record that the card in `slot` is being played.
    ///
    /// Playing an Invest card raises the investment level; going past
    /// `max_invest_level` is fatal.
    pub fn play(&mut self, slot: usize, max_invest_level: u32) -> Result<Card, EngineError> {
        let card = *self.cards.get(slot).ok_or(EngineError::SlotOutOfRange {
            slot,
            len: self.cards.len(),
        })?;

        if card.kind == CardType::Invest {
            let level = self.invest_level + 1;
            if level > max_invest_level {
                return Err(EngineError::InvestCapExceeded {
                    level,
                    cap: max_invest_level,
                });
            }
            self.invest_level = level;
        }

        Ok(card)
    }

    /// Replace projects and money with the arbiter's fresh snapshot.
    pub fn refresh(&mut self, projects: Vec<Project>, money: i64) {
        self.projects = projects;
        self.money = money;
    }

    /// Put an acquired card into `slot` and pay for it.
    ///
    /// Money must stay non-negative after paying.
    pub fn acquire(&mut self, slot: usize, card: Card) -> Result<(), EngineError> {
        let len = self.cards.len();
        let entry = self
            .cards
            .get_mut(slot)
            .ok_or(EngineError::SlotOutOfRange { slot, len })?;
        *entry = card;

        self.money -= card.price;
        if self.money < 0 {
            return Err(EngineError::NegativeMoney {
                turn: self.turn,
                money: self.money,
                price: card.price,
            });
        }
        Ok(())
    }

    /// Finish the current turn.
    pub fn end_turn(&mut self) {
        self.turn += 1;
        if self.turn >= self.total_turns {
            self.phase = Phase::Done;
        }
    }
}
