//! Fatal engine errors.
//!
//! None of these are recoverable. The game loop stops at the first one and the
//! binary exits non-zero.

use thiserror::Error;

use crate::arbiter::ArbiterError;

/// Errors that abort a game.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Investment level {level} exceeds cap {cap}")]
    InvestCapExceeded { level: u32, cap: u32 },

    #[error("Money went negative on turn {turn}: {money} after paying {price}")]
    NegativeMoney { turn: u32, money: i64, price: i64 },

    #[error("Hand is empty, nothing to play")]
    EmptyHand,

    #[error("Arbiter offered no replacement cards on turn {turn}")]
    EmptyOffer { turn: u32 },

    #[error("Slot {slot} is out of range for a batch of {len}")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error(transparent)]
    Arbiter(#[from] ArbiterError),
}
