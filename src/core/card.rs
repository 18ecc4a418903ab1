//! Cards: the actions available to the engine each turn.
//!
//! `CardType` is a closed set. Every place that branches on it matches
//! exhaustively, so adding a kind forces every selector and the simulator to
//! decide what it means.

use serde::{Deserialize, Serialize};

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Apply work to one project.
    WorkSingle,
    /// Apply work to every project at once.
    WorkAll,
    /// Discard one project and receive a fresh one.
    CancelSingle,
    /// Discard every project (pivot the whole business).
    CancelAll,
    /// Raise the investment level by one.
    Invest,
}

impl CardType {
    /// All kinds, in wire-code order.
    pub const ALL: [CardType; 5] = [
        CardType::WorkSingle,
        CardType::WorkAll,
        CardType::CancelSingle,
        CardType::CancelAll,
        CardType::Invest,
    ];

    /// Decode the integer code used on the wire.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(CardType::WorkSingle),
            1 => Some(CardType::WorkAll),
            2 => Some(CardType::CancelSingle),
            3 => Some(CardType::CancelAll),
            4 => Some(CardType::Invest),
            _ => None,
        }
    }

    /// The integer code used on the wire.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            CardType::WorkSingle => 0,
            CardType::WorkAll => 1,
            CardType::CancelSingle => 2,
            CardType::CancelAll => 3,
            CardType::Invest => 4,
        }
    }

    /// Work cards are ranked by effectiveness rather than by priority rule.
    #[must_use]
    pub const fn is_work(self) -> bool {
        matches!(self, CardType::WorkSingle | CardType::WorkAll)
    }

    /// Whether playing this card needs a project index.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, CardType::WorkSingle | CardType::CancelSingle)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::WorkSingle => "WorkSingle",
            CardType::WorkAll => "WorkAll",
            CardType::CancelSingle => "CancelSingle",
            CardType::CancelAll => "CancelAll",
            CardType::Invest => "Invest",
        };
        f.write_str(name)
    }
}

/// A card in hand or on offer.
///
/// Cards in the initial hand have `price == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// What the card does.
    pub kind: CardType,

    /// Work delivered (meaningful for work cards, usually 0 otherwise).
    pub work: i64,

    /// Acquisition price.
    pub price: i64,
}

impl Card {
    /// Create a card with a price (an offered replacement).
    #[must_use]
    pub const fn new(kind: CardType, work: i64, price: i64) -> Self {
        Self { kind, work, price }
    }

    /// Create a free card (part of the initial hand).
    #[must_use]
    pub const fn free(kind: CardType, work: i64) -> Self {
        Self::new(kind, work, 0)
    }

    /// Cost-effectiveness score.
    ///
    /// `work / (price + 1)`, multiplied by `project_count` for `WorkAll` since
    /// the work lands on every project. For a free card this is just `work`.
    #[must_use]
    pub fn effectiveness(&self, project_count: usize) -> f64 {
        let base = self.work as f64 / (self.price as f64 + 1.0);
        match self.kind {
            CardType::WorkAll => base * project_count as f64,
            CardType::WorkSingle
            | CardType::CancelSingle
            | CardType::CancelAll
            | CardType::Invest => base,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(w={}, p={})", self.kind, self.work, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in CardType::ALL {
            assert_eq!(CardType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(CardType::from_code(5), None);
        assert_eq!(CardType::from_code(-1), None);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CardType::WorkSingle.is_work());
        assert!(CardType::WorkAll.is_work());
        assert!(!CardType::Invest.is_work());

        assert!(CardType::WorkSingle.needs_target());
        assert!(CardType::CancelSingle.needs_target());
        assert!(!CardType::CancelAll.needs_target());
        assert!(!CardType::WorkAll.needs_target());
    }

    #[test]
    fn test_initial_card_effectiveness() {
        let single = Card::free(CardType::WorkSingle, 5);
        assert_eq!(single.effectiveness(3), 5.0);

        let all = Card::free(CardType::WorkAll, 5);
        assert_eq!(all.effectiveness(3), 15.0);
    }

    #[test]
    fn test_offered_card_effectiveness() {
        let single = Card::new(CardType::WorkSingle, 10, 4);
        assert_eq!(single.effectiveness(2), 2.0);

        let all = Card::new(CardType::WorkAll, 10, 4);
        assert_eq!(all.effectiveness(2), 4.0);
    }

    #[test]
    fn test_effectiveness_with_extreme_price() {
        let card = Card::new(CardType::WorkSingle, 10, i64::MAX);
        let score = card.effectiveness(1);
        assert!(score >= 0.0 && score < 1e-12);
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardType::Invest, 0, 300);
        assert_eq!(format!("{}", card), "Invest(w=0, p=300)");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardType::CancelAll, 0, 7);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
