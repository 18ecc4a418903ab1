//! Greedy decision rules.
//!
//! Two selectors share one priority order:
//!
//! 1. `CancelAll` when the whole portfolio is low-value
//! 2. `CancelSingle` when some project is low-value
//! 3. `Invest` whenever one is available
//! 4. Otherwise the most effective work card
//!
//! Rules are strict: every candidate is checked against rule 1 before any is
//! checked against rule 2, and so on. Within a rule the earliest slot wins.
//!
//! - `select_action`: which hand slot to play and on which project
//! - `select_offer`: which offered card to buy, among those strictly cheaper
//!   than current money

pub mod signals;
pub mod action;
pub mod acquisition;

pub use signals::ProjectSignals;
pub use action::{select_action, ActionChoice};
pub use acquisition::{select_offer, OfferChoice};

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardType};

/// Which rule produced a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionReason {
    /// Rule 1: pivot away from a globally low-value portfolio.
    CancelAll,
    /// Rule 2: drop a low-value project.
    CancelSingle,
    /// Rule 3: invest.
    Invest,
    /// Rule 4: highest-effectiveness work card.
    BestWork,
    /// No rule matched; slot 0 was used.
    Fallback,
}

/// Apply the priority rules to `candidates`.
///
/// Returns `None` when no rule matches.
pub(crate) fn pick_by_priority<'a, I>(
    candidates: I,
    signals: &ProjectSignals,
    project_count: usize,
) -> Option<(usize, SelectionReason)>
where
    I: Iterator<Item = (usize, &'a Card)> + Clone,
{
    let first_of = |kind: CardType| {
        candidates
            .clone()
            .find(|(_, card)| card.kind == kind)
            .map(|(slot, _)| slot)
    };

    if signals.overall_low_value {
        if let Some(slot) = first_of(CardType::CancelAll) {
            return Some((slot, SelectionReason::CancelAll));
        }
    }

    if signals.has_low_value_project() {
        if let Some(slot) = first_of(CardType::CancelSingle) {
            return Some((slot, SelectionReason::CancelSingle));
        }
    }

    if let Some(slot) = first_of(CardType::Invest) {
        return Some((slot, SelectionReason::Invest));
    }

    let mut best: Option<(usize, f64)> = None;
    for (slot, card) in candidates.filter(|(_, card)| card.kind.is_work()) {
        let score = card.effectiveness(project_count);
        // Strict comparison keeps the earliest slot on ties.
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((slot, score));
        }
    }
    best.map(|(slot, _)| (slot, SelectionReason::BestWork))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low_everything() -> ProjectSignals {
        ProjectSignals {
            worst_low_value_index: Some(0),
            overall_low_value: true,
        }
    }

    #[test]
    fn test_priority_order() {
        let cards = [
            Card::free(CardType::WorkSingle, 50),
            Card::free(CardType::Invest, 0),
            Card::free(CardType::CancelSingle, 0),
            Card::free(CardType::CancelAll, 0),
        ];

        let picked = pick_by_priority(cards.iter().enumerate(), &low_everything(), 2);
        assert_eq!(picked, Some((3, SelectionReason::CancelAll)));

        let only_single = ProjectSignals {
            worst_low_value_index: Some(1),
            overall_low_value: false,
        };
        let picked = pick_by_priority(cards.iter().enumerate(), &only_single, 2);
        assert_eq!(picked, Some((2, SelectionReason::CancelSingle)));

        let healthy = ProjectSignals::default();
        let picked = pick_by_priority(cards.iter().enumerate(), &healthy, 2);
        assert_eq!(picked, Some((1, SelectionReason::Invest)));
    }

    #[test]
    fn test_best_work_tie_keeps_earliest() {
        let cards = [
            Card::free(CardType::WorkSingle, 4),
            Card::free(CardType::WorkSingle, 8),
            Card::free(CardType::WorkAll, 4),
        ];

        // WorkAll scores 4 * 2 = 8, tying slot 1.
        let picked = pick_by_priority(cards.iter().enumerate(), &ProjectSignals::default(), 2);
        assert_eq!(picked, Some((1, SelectionReason::BestWork)));
    }

    #[test]
    fn test_no_rule_matches() {
        let cards = [Card::free(CardType::CancelSingle, 0), Card::free(CardType::CancelAll, 0)];
        let picked = pick_by_priority(cards.iter().enumerate(), &ProjectSignals::default(), 2);
        assert_eq!(picked, None);
    }
}
