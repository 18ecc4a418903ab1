//! # rust-portfolio
//!
//! A greedy decision engine for a turn-based project/card game played
//! against an external arbiter.
//!
//! Each turn the engine holds a fixed hand of cards and sees a snapshot of
//! projects (remaining work and payout). It plays one card on one project,
//! receives a fresh snapshot and its money, then buys a replacement card from
//! a batch of offers. The goal is the most money after a fixed number of
//! turns without ever going into debt or over-investing.
//!
//! ## Design Principles
//!
//! 1. **Heuristic, not solver**: Cost-effectiveness scores and a fixed
//!    priority order. No search, no lookahead.
//!
//! 2. **Arbiter at the edge**: All I/O goes through the `Arbiter` trait, so
//!    the selectors and the loop run unchanged against stdin/stdout, a
//!    scripted fake, or a local simulator.
//!
//! 3. **Explicit state**: One `GameState` owned by the game loop. Invariant
//!    breaches (investment cap, negative money) are fatal errors.
//!
//! ## Modules
//!
//! - `core`: Projects, cards, state, configuration, errors, RNG
//! - `selection`: Project signals, action selector, offer selector
//! - `arbiter`: The arbiter trait, text protocol, scripted fake
//! - `game`: The turn loop and per-turn records
//! - `sim`: Seeded local arbiter that applies the game rules

pub mod core;
pub mod selection;
pub mod arbiter;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Card, CardType, EngineConfig, EngineError, GameRng, GameState, Phase, Project,
    MAX_INVEST_LEVEL,
};

pub use crate::selection::{
    select_action, select_offer, ActionChoice, OfferChoice, ProjectSignals, SelectionReason,
};

pub use crate::arbiter::{
    Arbiter, ArbiterError, GameSetup, LineArbiter, Offers, ScriptedArbiter, TurnScript,
};

pub use crate::game::{GameLoop, GameOutcome, TurnRecord};

pub use crate::sim::{SimConfig, SimulatedArbiter};
