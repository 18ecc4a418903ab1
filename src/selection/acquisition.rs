//! Choosing which offered card replaces the one just played.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Card;

use super::{pick_by_priority, ProjectSignals, SelectionReason};

/// The offer to buy this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferChoice {
    /// Index into the offered batch.
    pub offer_index: usize,
    /// Rule that picked the offer.
    pub reason: SelectionReason,
}

/// Whether `card` can be bought with `money`.
///
/// Strict: a card costing exactly the remaining money is not affordable.
#[must_use]
pub fn is_affordable(card: &Card, money: i64) -> bool {
    card.price < money
}

/// Choose one of `offers` given current `money`.
///
/// Only affordable offers are considered. When none qualifies, offer 0 is
/// taken whatever its price; if that overdraws, the game loop's money check
/// aborts the game.
#[must_use]
pub fn select_offer(
    offers: &[Card],
    money: i64,
    signals: &ProjectSignals,
    project_count: usize,
) -> OfferChoice {
    let affordable = offers
        .iter()
        .enumerate()
        .filter(|(_, card)| is_affordable(card, money));

    let (offer_index, reason) = pick_by_priority(affordable, signals, project_count)
        .unwrap_or_else(|| {
            if let Some(card) = offers.first() {
                if !is_affordable(card, money) {
                    warn!(money, price = card.price, "no affordable offer, taking offer 0");
                }
            }
            (0, SelectionReason::Fallback)
        });

    OfferChoice {
        offer_index,
        reason,
    }
}
