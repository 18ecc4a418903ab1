//! Local simulation of the arbiter.
//!
//! `SimulatedArbiter` applies the game rules itself, so the engine can be
//! played end to end (and property-tested) without an external process.
//!
//! ```
//! use rust_portfolio::core::EngineConfig;
//! use rust_portfolio::game::GameLoop;
//! use rust_portfolio::sim::{SimConfig, SimulatedArbiter};
//!
//! let sim = SimulatedArbiter::new(SimConfig::new().with_turns(50).with_seed(1));
//! let outcome = GameLoop::new(sim, EngineConfig::default()).run().unwrap();
//! assert_eq!(outcome.turn_count(), 50);
//! assert!(outcome.score >= 0);
//! ```

pub mod config;
pub mod simulator;

pub use config::SimConfig;
pub use simulator::SimulatedArbiter;
