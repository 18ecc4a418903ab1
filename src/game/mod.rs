//! Game orchestration: the turn loop and what it records.
//!
//! `GameLoop` runs `Init → TurnActive × T → Done` against any `Arbiter`:
//! choose an action, submit it, take the fresh snapshot, buy a replacement,
//! check invariants, advance.

pub mod record;
pub mod runner;

pub use record::{GameOutcome, TurnRecord};
pub use runner::GameLoop;
