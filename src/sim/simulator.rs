//! Local arbiter that plays the actual game rules.
//!
//! ## Rules
//!
//! - Work cards subtract their work from a project's remaining work
//!   (`WorkAll`: from every project). A project at or below zero pays its
//!   value and is replaced by a new one.
//! - `CancelSingle` replaces one project; `CancelAll` replaces all of them.
//! - `Invest` raises the investment level. New projects and offers are
//!   scaled by `2^level`.
//! - Offer 0 is always a free `WorkSingle` of work 1, so the engine can
//!   always buy something without going into debt.
//! - Invest cards stop being offered once the engine could exceed the cap
//!   by buying one.

use tracing::trace;

use crate::arbiter::{Arbiter, ArbiterError, GameSetup, Offers};
use crate::core::{Card, CardType, GameRng, Project};

use super::config::SimConfig;

/// Relative offer frequency per kind, in `CardType::ALL` order.
const OFFER_WEIGHTS: [f64; 5] = [20.0, 5.0, 10.0, 5.0, 3.0];

/// Seeded, rule-applying arbiter.
#[derive(Clone, Debug)]
pub struct SimulatedArbiter {
    config: SimConfig,
    project_rng: GameRng,
    offer_rng: GameRng,

    projects: Vec<Project>,
    hand: Vec<Card>,
    money: i64,
    invest_level: u32,
    turn: u32,

    /// Slot played this turn, waiting for its replacement.
    pending_slot: Option<usize>,
    offers: Offers,
    started: bool,
}

impl SimulatedArbiter {
    /// Create a simulator for the given game parameters.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            project_rng: rng.for_context("projects"),
            offer_rng: rng.for_context("offers"),
            config,
            projects: Vec::new(),
            hand: Vec::new(),
            money: 0,
            invest_level: 0,
            turn: 0,
            pending_slot: None,
            offers: Offers::new(),
            started: false,
        }
    }

    /// Money as the simulator sees it.
    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Investment level as the simulator sees it.
    #[must_use]
    pub fn invest_level(&self) -> u32 {
        self.invest_level
    }

    /// Turns completed.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Hand as the simulator sees it.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn scale(&self) -> i64 {
        1i64 << self.invest_level
    }

    fn new_project(&mut self) -> Project {
        let scale = self.scale();
        let magnitude = self.project_rng.gen_range_f64(2.0..8.0);
        let skew = self.project_rng.gen_range_f64(-1.5..1.5);

        let work = 2f64.powf(magnitude).round().max(1.0) as i64;
        let value = 2f64.powf(magnitude + skew).round().max(1.0) as i64;
        Project::new(work * scale, value * scale)
    }

    fn invest_allowed(&self) -> bool {
        let held = self.hand.iter().filter(|c| c.kind == CardType::Invest).count() as u32;
        self.invest_level + held < self.config.max_invest_level
    }

    fn new_offer(&mut self, allow_invest: bool) -> Card {
        let scale = self.scale();
        let mut weights = OFFER_WEIGHTS;
        if !allow_invest {
            weights[4] = 0.0;
        }

        let kind = self
            .offer_rng
            .choose_weighted(&weights)
            .map_or(CardType::WorkSingle, |i| CardType::ALL[i]);

        match kind {
            CardType::WorkSingle => {
                let work = self.offer_rng.gen_range_i64(1..51) * scale;
                let markup = self.offer_rng.gen_range_f64(0.5..1.5);
                Card::new(kind, work, ((work as f64 * markup).round() as i64).max(1))
            }
            CardType::WorkAll => {
                let work = self.offer_rng.gen_range_i64(1..51) * scale;
                let markup = self.offer_rng.gen_range_f64(0.5..1.5);
                let reach = self.config.project_count as f64;
                Card::new(kind, work, ((work as f64 * reach * markup).round() as i64).max(1))
            }
            CardType::CancelSingle | CardType::CancelAll => {
                Card::new(kind, 0, self.offer_rng.gen_range_i64(0..11) * scale)
            }
            CardType::Invest => {
                Card::new(kind, 0, self.offer_rng.gen_range_i64(200..1001) * scale)
            }
        }
    }

    fn work_on(&mut self, index: usize, work: i64) {
        let project = &mut self.projects[index];
        project.remaining_work -= work;
        if project.remaining_work <= 0 {
            self.money += project.total_value;
            trace!(index, value = project.total_value, "project completed");
            let fresh = self.new_project();
            self.projects[index] = fresh;
        }
    }
}

impl Arbiter for SimulatedArbiter {
    fn setup(&mut self) -> Result<GameSetup, ArbiterError> {
        if self.started {
            return Err(ArbiterError::OutOfSequence { call: "setup" });
        }
        self.started = true;

        self.hand = vec![Card::free(CardType::WorkSingle, 1); self.config.hand_size];
        let projects: Vec<Project> = (0..self.config.project_count)
            .map(|_| self.new_project())
            .collect();
        self.projects = projects;

        Ok(GameSetup {
            offer_count: self.config.offer_count,
            total_turns: self.config.turns,
            cards: self.hand.clone(),
            projects: self.projects.clone(),
        })
    }

    fn submit_action(&mut self, card_slot: usize, target: usize) -> Result<(), ArbiterError> {
        if !self.started || self.pending_slot.is_some() || self.turn >= self.config.turns {
            return Err(ArbiterError::OutOfSequence { call: "submit_action" });
        }

        let illegal = ArbiterError::IllegalAction { card_slot, target };
        let card = *self.hand.get(card_slot).ok_or(illegal)?;
        if card.kind.needs_target() && target >= self.projects.len() {
            return Err(ArbiterError::IllegalAction { card_slot, target });
        }

        match card.kind {
            CardType::WorkSingle => self.work_on(target, card.work),
            CardType::WorkAll => {
                for index in 0..self.projects.len() {
                    self.work_on(index, card.work);
                }
            }
            CardType::CancelSingle => {
                let fresh = self.new_project();
                self.projects[target] = fresh;
            }
            CardType::CancelAll => {
                let count = self.projects.len();
                let fresh: Vec<Project> = (0..count).map(|_| self.new_project()).collect();
                self.projects = fresh;
            }
            CardType::Invest => {
                if self.invest_level >= self.config.max_invest_level {
                    return Err(ArbiterError::IllegalAction { card_slot, target });
                }
                self.invest_level += 1;
            }
        }

        self.pending_slot = Some(card_slot);
        Ok(())
    }

    fn read_projects(&mut self) -> Result<Vec<Project>, ArbiterError> {
        Ok(self.projects.clone())
    }

    fn read_money(&mut self) -> Result<i64, ArbiterError> {
        Ok(self.money)
    }

    fn read_offers(&mut self) -> Result<Offers, ArbiterError> {
        if self.pending_slot.is_none() {
            return Err(ArbiterError::OutOfSequence { call: "read_offers" });
        }

        let allow_invest = self.invest_allowed();
        let mut offers = Offers::with_capacity(self.config.offer_count);
        for i in 0..self.config.offer_count {
            let card = if i == 0 {
                Card::free(CardType::WorkSingle, 1)
            } else {
                self.new_offer(allow_invest)
            };
            offers.push(card);
        }

        self.offers = offers.clone();
        Ok(offers)
    }

    fn submit_selection(&mut self, offer_index: usize) -> Result<(), ArbiterError> {
        let slot = self
            .pending_slot
            .ok_or(ArbiterError::OutOfSequence { call: "submit_selection" })?;
        let card = *self
            .offers
            .get(offer_index)
            .ok_or(ArbiterError::IllegalSelection { offer_index })?;
        if card.price > self.money {
            return Err(ArbiterError::IllegalSelection { offer_index });
        }

        self.money -= card.price;
        self.hand[slot] = card;
        self.pending_slot = None;
        self.offers.clear();
        self.turn += 1;
        Ok(())
    }
}
