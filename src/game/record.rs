//! Per-turn records of what the engine decided.
//!
//! A `GameOutcome` holds the final score plus one `TurnRecord` per turn, and
//! serializes to JSON so a finished game can be audited.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardType};
use crate::selection::{ActionChoice, OfferChoice, ProjectSignals};

/// A single turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn index (0-based).
    pub turn: u32,

    /// Signals the action was chosen from.
    pub signals: ProjectSignals,

    /// Card played and its target.
    pub action: ActionChoice,

    /// The card that was played.
    pub played: Card,

    /// Money reported by the arbiter after the action.
    pub money_before_purchase: i64,

    /// Offer bought.
    pub offer: OfferChoice,

    /// The card that was bought.
    pub bought: Card,

    /// Money after paying for the bought card.
    pub money: i64,

    /// Investment level after the action.
    pub invest_level: u32,
}

/// Result of a completed game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Money at the end of the last turn.
    pub score: i64,

    /// Investment level at the end of the game.
    pub final_invest_level: u32,

    /// Every turn, in order.
    pub turns: Vec<TurnRecord>,
}

impl GameOutcome {
    /// Number of turns played.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// How many times a card of `kind` was played.
    #[must_use]
    pub fn plays_of(&self, kind: CardType) -> usize {
        self.turns.iter().filter(|t| t.played.kind == kind).count()
    }

    /// Lowest money seen after any purchase.
    #[must_use]
    pub fn min_money(&self) -> Option<i64> {
        self.turns.iter().map(|t| t.money).min()
    }
}
