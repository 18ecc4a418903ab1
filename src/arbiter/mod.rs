//! The boundary between the engine and whoever runs the game.
//!
//! The game loop only talks to an `Arbiter`. Implementations:
//!
//! - `LineArbiter`: the newline-delimited text protocol over any reader/writer
//!   (stdin/stdout in production)
//! - `ScriptedArbiter`: replays canned snapshots and records every decision
//! - `crate::sim::SimulatedArbiter`: plays the actual game rules locally
//!
//! ## Turn sequence
//!
//! `setup` once, then per turn:
//! `submit_action` → `read_projects` → `read_money` → `read_offers` →
//! `submit_selection`.

pub mod protocol;
pub mod scripted;

pub use protocol::LineArbiter;
pub use scripted::{ScriptedArbiter, TurnScript};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Card, Project};

/// A batch of offered replacement cards.
pub type Offers = SmallVec<[Card; 8]>;

/// Everything the arbiter sends before the first turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// Offered cards per turn.
    pub offer_count: usize,

    /// Number of turns to play.
    pub total_turns: u32,

    /// Initial hand (price 0).
    pub cards: Vec<Card>,

    /// Initial projects.
    pub projects: Vec<Project>,
}

impl GameSetup {
    /// Hand size.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.cards.len()
    }

    /// Project count.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// Errors talking to the arbiter.
#[derive(Debug, Error)]
pub enum ArbiterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Line {line}: expected {expected}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Unknown card type code {code}")]
    UnknownCardType { code: i64 },

    #[error("{call} called out of sequence")]
    OutOfSequence { call: &'static str },

    #[error("Illegal action: card {card_slot} on project {target}")]
    IllegalAction { card_slot: usize, target: usize },

    #[error("Illegal selection: offer {offer_index}")]
    IllegalSelection { offer_index: usize },
}

/// The game runner the engine plays against.
pub trait Arbiter {
    /// Read the opening dump: dimensions, initial hand, initial projects.
    fn setup(&mut self) -> Result<GameSetup, ArbiterError>;

    /// Play the card in `card_slot` on project `target`.
    fn submit_action(&mut self, card_slot: usize, target: usize) -> Result<(), ArbiterError>;

    /// Fresh project snapshot after the action.
    fn read_projects(&mut self) -> Result<Vec<Project>, ArbiterError>;

    /// Current money after the action.
    fn read_money(&mut self) -> Result<i64, ArbiterError>;

    /// Replacement cards on offer this turn.
    fn read_offers(&mut self) -> Result<Offers, ArbiterError>;

    /// Buy the offer at `offer_index`.
    fn submit_selection(&mut self, offer_index: usize) -> Result<(), ArbiterError>;

    /// Informational note; never interpreted by the arbiter.
    fn comment(&mut self, _message: &str) -> Result<(), ArbiterError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardType;

    #[test]
    fn test_setup_dimensions() {
        let setup = GameSetup {
            offer_count: 3,
            total_turns: 10,
            cards: vec![Card::free(CardType::WorkSingle, 1); 4],
            projects: vec![Project::new(5, 10); 2],
        };

        assert_eq!(setup.hand_size(), 4);
        assert_eq!(setup.project_count(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = ArbiterError::Malformed {
            line: 3,
            expected: "money",
            found: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3: expected money, found \"abc\"");

        let err = ArbiterError::UnexpectedEof { expected: "projects" };
        assert_eq!(err.to_string(), "Unexpected end of input while reading projects");
    }
}
