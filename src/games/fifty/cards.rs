use std::fmt;

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Sequence, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

// Declaration order is rank order: Seven is lowest, Ace highest
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Sequence, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    Seven = 0,
    Eight = 1,
    Nine = 2,
    Ten = 3,
    Jack = 4,
    Queen = 5,
    King = 6,
    Ace = 7,
}

impl Rank {
    /// Comparison weight, 0 (Seven) through 7 (Ace).
    pub fn weight(&self) -> u8 {
        *self as u8
    }

    pub fn short(&self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Rank weight only; the suit never takes part in comparisons.
    pub fn value(&self) -> u8 {
        self.rank.weight()
    }

    /// Whether this card takes the trick over `other` when `lead_suit` was led.
    /// Off-suit cards never beat anything.
    pub fn beats(&self, other: &Card, lead_suit: Suit) -> bool {
        if self.suit != lead_suit {
            return false;
        }
        other.suit != lead_suit || self.value() > other.value()
    }

    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            suit: self.suit,
            rank: self.rank.short().to_string(),
            display_suit: self.suit.label().to_string(),
            value: self.value(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.short())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    pub suit: Suit,
    pub rank: String,
    pub display_suit: String,
    pub value: u8,
}

/// All 32 cards in suit-major order, unshuffled.
pub fn all_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(32);
    for suit in all::<Suit>() {
        for rank in all::<Rank>() {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_order() {
        let ranks: Vec<Rank> = all::<Rank>().collect();
        assert_eq!(
            ranks,
            vec![
                Rank::Seven,
                Rank::Eight,
                Rank::Nine,
                Rank::Ten,
                Rank::Jack,
                Rank::Queen,
                Rank::King,
                Rank::Ace
            ]
        );
        for (weight, rank) in ranks.iter().enumerate() {
            assert_eq!(rank.weight() as usize, weight, "{:?}", rank);
        }
        assert!(Rank::Seven < Rank::Ace);
    }

    #[test]
    fn test_value_ignores_suit() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ten).value(), 3);
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).value(), 3);
        assert_eq!(Card::new(Suit::Clubs, Rank::Ace).value(), 7);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(a, Card::new(Suit::Hearts, Rank::Queen));
        assert_ne!(a, Card::new(Suit::Spades, Rank::Queen));
        assert_ne!(a, Card::new(Suit::Hearts, Rank::King));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "♦10");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "♠A");
        assert_eq!(Card::new(Suit::Hearts, Rank::Seven).to_string(), "♥7");
        assert_eq!(Card::new(Suit::Clubs, Rank::Jack).to_string(), "♣J");
    }

    #[test]
    fn test_beats() {
        let lead = Suit::Spades;
        let low = Card::new(Suit::Spades, Rank::Eight);
        let high = Card::new(Suit::Spades, Rank::King);
        let off = Card::new(Suit::Hearts, Rank::Ace);
        assert!(high.beats(&low, lead));
        assert!(!low.beats(&high, lead));
        assert!(low.beats(&off, lead));
        assert!(!off.beats(&low, lead));
    }

    #[test]
    fn test_all_cards() {
        let cards = all_cards();
        assert_eq!(cards.len(), 32);
        let unique: HashSet<Card> = cards.iter().cloned().collect();
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn test_snapshot() {
        let snapshot = Card::new(Suit::Diamonds, Rank::Queen).snapshot();
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            serde_json::json!({
                "suit": "diamonds",
                "rank": "Q",
                "displaySuit": "Diamonds",
                "value": 5
            })
        );
    }
}
