//! The turn loop.

use tracing::{debug, info};

use crate::arbiter::Arbiter;
use crate::core::{EngineConfig, EngineError, GameState};
use crate::selection::{select_action, select_offer, ProjectSignals};

use super::record::{GameOutcome, TurnRecord};

/// Drives one game against an arbiter.
///
/// The loop owns the only `GameState`; selectors see it by reference.
pub struct GameLoop<A: Arbiter> {
    arbiter: A,
    config: EngineConfig,
    keep_history: bool,
}

impl<A: Arbiter> GameLoop<A> {
    /// Create a loop with the given configuration.
    ///
    /// Per-turn history is kept; see `with_history`.
    pub fn new(arbiter: A, config: EngineConfig) -> Self {
        Self {
            arbiter,
            config,
            keep_history: true,
        }
    }

    /// Keep or drop the per-turn records in `GameOutcome::turns`.
    ///
    /// Without history, memory stays flat however many turns the arbiter asks for.
    #[must_use]
    pub fn with_history(mut self, keep: bool) -> Self {
        self.keep_history = keep;
        self
    }

    /// The arbiter being played against.
    pub fn arbiter(&self) -> &A {
        &self.arbiter
    }

    /// Consume the loop, returning the arbiter.
    pub fn into_arbiter(self) -> A {
        self.arbiter
    }

    /// Play the whole game.
    ///
    /// Stops at the first fatal error; the turns played so far are lost.
    pub fn run(&mut self) -> Result<GameOutcome, EngineError> {
        let setup = self.arbiter.setup()?;
        info!(
            hand = setup.hand_size(),
            projects = setup.project_count(),
            offers = setup.offer_count,
            turns = setup.total_turns,
            "game started"
        );

        let mut state = GameState::new(setup.total_turns, setup.cards, setup.projects);
        if state.total_turns > 0 && state.cards.is_empty() {
            return Err(EngineError::EmptyHand);
        }
        state.start();

        let mut turns = Vec::new();
        while !state.is_done() {
            let record = self.play_turn(&mut state)?;
            if self.keep_history {
                turns.push(record);
            }
            state.end_turn();
        }

        info!(score = state.money, invest_level = state.invest_level, "game finished");
        Ok(GameOutcome {
            score: state.money,
            final_invest_level: state.invest_level,
            turns,
        })
    }

    fn play_turn(&mut self, state: &mut GameState) -> Result<TurnRecord, EngineError> {
        let signals = ProjectSignals::compute(&state.projects, &self.config);
        let action = select_action(&state.cards, &state.projects, &signals);
        let played = state.play(action.card_slot, self.config.max_invest_level)?;

        debug!(turn = state.turn, card = %played, target = action.target, reason = ?action.reason, "action");
        if self.config.emit_comments {
            self.arbiter
                .comment(&format!("used {} to target {}", played, action.target))?;
        }
        self.arbiter.submit_action(action.card_slot, action.target)?;

        let projects = self.arbiter.read_projects()?;
        let money = self.arbiter.read_money()?;
        state.refresh(projects, money);

        let offers = self.arbiter.read_offers()?;
        if offers.is_empty() {
            return Err(EngineError::EmptyOffer { turn: state.turn });
        }

        let offer_signals = ProjectSignals::compute(&state.projects, &self.config);
        let offer = select_offer(&offers, state.money, &offer_signals, state.projects.len());
        let bought = *offers.get(offer.offer_index).ok_or(EngineError::SlotOutOfRange {
            slot: offer.offer_index,
            len: offers.len(),
        })?;

        debug!(turn = state.turn, card = %bought, money, reason = ?offer.reason, "purchase");
        self.arbiter.submit_selection(offer.offer_index)?;
        state.acquire(action.card_slot, bought)?;

        Ok(TurnRecord {
            turn: state.turn,
            signals,
            action,
            played,
            money_before_purchase: money,
            offer,
            bought,
            money: state.money,
            invest_level: state.invest_level,
        })
    }
}
