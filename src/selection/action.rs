//! Choosing which card to play and on which project.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Card, CardType, Project};

use super::{pick_by_priority, ProjectSignals, SelectionReason};

/// Target written for cards that do not act on a single project.
pub const NO_TARGET: usize = 0;

/// The card to play this turn and its target project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionChoice {
    /// Hand slot of the card to play.
    pub card_slot: usize,
    /// Project index the card acts on (`NO_TARGET` when irrelevant).
    pub target: usize,
    /// Rule that picked the card.
    pub reason: SelectionReason,
}

/// Choose a card from `cards` and a target among `projects`.
///
/// Falls back to slot 0 when no rule matches, which only happens when the
/// hand holds nothing but cancel cards with nothing worth cancelling.
/// A `CancelSingle` played that way targets project 0, since the protocol
/// has no "no target" value.
#[must_use]
pub fn select_action(cards: &[Card], projects: &[Project], signals: &ProjectSignals) -> ActionChoice {
    let (card_slot, reason) = pick_by_priority(cards.iter().enumerate(), signals, projects.len())
        .unwrap_or_else(|| {
            warn!(hand = cards.len(), "no selection rule matched, playing slot 0");
            (0, SelectionReason::Fallback)
        });

    let target = match cards.get(card_slot) {
        Some(card) => choose_target(card, projects, signals),
        None => NO_TARGET,
    };

    ActionChoice {
        card_slot,
        target,
        reason,
    }
}

fn choose_target(card: &Card, projects: &[Project], signals: &ProjectSignals) -> usize {
    match card.kind {
        CardType::CancelAll | CardType::Invest | CardType::WorkAll => NO_TARGET,
        CardType::CancelSingle => signals.worst_low_value_index.unwrap_or(NO_TARGET),
        CardType::WorkSingle => closest_workload(card.work, projects).unwrap_or(NO_TARGET),
    }
}

/// Project whose remaining work is closest to `work`, by squared difference.
///
/// Ties keep the earliest project.
fn closest_workload(work: i64, projects: &[Project]) -> Option<usize> {
    let mut best: Option<(usize, i128)> = None;
    for (i, project) in projects.iter().enumerate() {
        let diff = i128::from(project.remaining_work) - i128::from(work);
        let squared = diff * diff;
        if best.map_or(true, |(_, top)| squared < top) {
            best = Some((i, squared));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;

    fn choose(cards: &[Card], projects: &[Project]) -> ActionChoice {
        let signals = ProjectSignals::compute(projects, &EngineConfig::default());
        select_action(cards, projects, &signals)
    }

    #[test]
    fn test_exact_work_match() {
        let cards = [Card::free(CardType::WorkSingle, 5)];
        let projects = [Project::new(5, 10)];

        let choice = choose(&cards, &projects);
        assert_eq!(choice.card_slot, 0);
        assert_eq!(choice.target, 0);
        assert_eq!(choice.reason, SelectionReason::BestWork);
    }

    #[test]
    fn test_closest_workload_target() {
        let cards = [Card::free(CardType::WorkSingle, 10)];
        let projects = [Project::new(30, 60), Project::new(12, 24), Project::new(7, 14)];

        assert_eq!(choose(&cards, &projects).target, 1);
    }

    #[test]
    fn test_closest_workload_tie_keeps_earliest() {
        let projects = [Project::new(8, 16), Project::new(12, 24)];
        assert_eq!(closest_workload(10, &projects), Some(0));
        assert_eq!(closest_workload(10, &[]), None);
    }

    #[test]
    fn test_cancel_single_targets_worst_project() {
        let cards = [Card::free(CardType::WorkSingle, 5), Card::free(CardType::CancelSingle, 0)];
        let projects = [Project::new(10, 2), Project::new(1, 50), Project::new(10, 3)];

        let choice = choose(&cards, &projects);
        assert_eq!(choice.card_slot, 1);
        assert_eq!(choice.target, 2);
        assert_eq!(choice.reason, SelectionReason::CancelSingle);
    }

    #[test]
    fn test_invest_beats_work() {
        let cards = [Card::free(CardType::WorkAll, 100), Card::free(CardType::Invest, 0)];
        let projects = [Project::new(5, 10), Project::new(5, 10)];

        let choice = choose(&cards, &projects);
        assert_eq!(choice.card_slot, 1);
        assert_eq!(choice.target, NO_TARGET);
        assert_eq!(choice.reason, SelectionReason::Invest);
    }

    #[test]
    fn test_fallback_to_first_slot() {
        let cards = [Card::free(CardType::CancelSingle, 0), Card::free(CardType::CancelAll, 0)];
        let projects = [Project::new(5, 10)];

        let choice = choose(&cards, &projects);
        assert_eq!(choice.card_slot, 0);
        assert_eq!(choice.target, NO_TARGET);
        assert_eq!(choice.reason, SelectionReason::Fallback);
    }

    #[test]
    fn test_empty_hand() {
        let choice = choose(&[], &[Project::new(5, 10)]);
        assert_eq!(choice.card_slot, 0);
        assert_eq!(choice.reason, SelectionReason::Fallback);
    }
}
