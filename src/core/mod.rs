//! Core engine types: projects, cards, state, configuration, errors, RNG.
//!
//! This module holds plain data and the invariants on it. Decision logic
//! lives in `selection`; protocol I/O lives in `arbiter`.

pub mod project;
pub mod card;
pub mod config;
pub mod error;
pub mod state;
pub mod rng;

pub use project::Project;
pub use card::{Card, CardType};
pub use config::{EngineConfig, MAX_INVEST_LEVEL};
pub use error::EngineError;
pub use state::{GameState, Phase};
pub use rng::GameRng;
