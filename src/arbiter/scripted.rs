//! In-memory arbiter that replays a fixed script.
//!
//! Used to drive the game loop deterministically in tests. Every decision the
//! engine sends is recorded for later assertions.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Project};

use super::{Arbiter, ArbiterError, GameSetup, Offers};

/// What the arbiter reports after one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScript {
    /// Project snapshot.
    pub projects: Vec<Project>,
    /// Money before the replacement purchase.
    pub money: i64,
    /// Offered replacement cards.
    pub offers: Vec<Card>,
}

impl TurnScript {
    /// Create a turn script.
    #[must_use]
    pub fn new(projects: Vec<Project>, money: i64, offers: Vec<Card>) -> Self {
        Self {
            projects,
            money,
            offers,
        }
    }
}

/// Arbiter replaying canned snapshots.
#[derive(Clone, Debug, Default)]
pub struct ScriptedArbiter {
    setup: Option<GameSetup>,
    turns: Vec<TurnScript>,
    cursor: usize,

    /// Actions received, as `(card_slot, target)`.
    pub actions: Vec<(usize, usize)>,
    /// Offer indices received.
    pub selections: Vec<usize>,
    /// Comment lines received.
    pub comments: Vec<String>,
}

impl ScriptedArbiter {
    /// Create an arbiter that opens with `setup` and then plays `turns`.
    #[must_use]
    pub fn new(setup: GameSetup, turns: Vec<TurnScript>) -> Self {
        Self {
            setup: Some(setup),
            turns,
            ..Self::default()
        }
    }

    fn current(&self, call: &'static str) -> Result<&TurnScript, ArbiterError> {
        self.turns
            .get(self.cursor)
            .ok_or(ArbiterError::OutOfSequence { call })
    }
}

impl Arbiter for ScriptedArbiter {
    fn setup(&mut self) -> Result<GameSetup, ArbiterError> {
        self.setup
            .take()
            .ok_or(ArbiterError::OutOfSequence { call: "setup" })
    }

    fn submit_action(&mut self, card_slot: usize, target: usize) -> Result<(), ArbiterError> {
        self.current("submit_action")?;
        self.actions.push((card_slot, target));
        Ok(())
    }

    fn read_projects(&mut self) -> Result<Vec<Project>, ArbiterError> {
        Ok(self.current("read_projects")?.projects.clone())
    }

    fn read_money(&mut self) -> Result<i64, ArbiterError> {
        Ok(self.current("read_money")?.money)
    }

    fn read_offers(&mut self) -> Result<Offers, ArbiterError> {
        Ok(self.current("read_offers")?.offers.iter().copied().collect())
    }

    fn submit_selection(&mut self, offer_index: usize) -> Result<(), ArbiterError> {
        let offers = self.current("submit_selection")?.offers.len();
        if offer_index >= offers {
            return Err(ArbiterError::IllegalSelection { offer_index });
        }
        self.selections.push(offer_index);
        self.cursor += 1;
        Ok(())
    }

    fn comment(&mut self, message: &str) -> Result<(), ArbiterError> {
        self.comments.push(message.to_string());
        Ok(())
    }
}
