use std::collections::VecDeque;

use rand::{seq::SliceRandom, thread_rng, Rng};
use tracing::trace;

use super::cards::{all_cards, Card, CardSnapshot};
use super::error::GameError;

/// Source of hands for a game.
pub trait Dealer {
    /// Remove and return `count` cards. Never returns a short batch from a
    /// real deck: asking for more than remains is an error.
    fn deal(&mut self, count: usize) -> Result<Vec<Card>, GameError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 32 card deck shuffled with the given rng.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut cards = all_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn shuffled() -> Self {
        Self::new(&mut thread_rng())
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn snapshot(&self) -> Vec<CardSnapshot> {
        self.cards.iter().map(Card::snapshot).collect()
    }
}

impl Dealer for Deck {
    fn deal(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        // Deal from the top (end) of the deck
        let dealt: Vec<Card> = self.cards.drain(self.cards.len() - count..).rev().collect();
        trace!(count, remaining = self.cards.len(), "dealt cards");
        Ok(dealt)
    }
}

/// Deals pre-arranged hands in order, ignoring `count`. Once the script runs
/// out every further deal is an empty hand.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDealer {
    hands: VecDeque<Vec<Card>>,
}

impl ScriptedDealer {
    pub fn new(hands: impl IntoIterator<Item = Vec<Card>>) -> Self {
        Self {
            hands: hands.into_iter().collect(),
        }
    }
}

impl Dealer for ScriptedDealer {
    fn deal(&mut self, _count: usize) -> Result<Vec<Card>, GameError> {
        Ok(self.hands.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fifty::cards::{Rank, Suit};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_has_every_card_once() {
        let deck = Deck::shuffled();
        assert_eq!(deck.len(), 32);
        let unique: HashSet<Card> = deck.remaining().iter().cloned().collect();
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn test_seeded_decks_match() {
        let a = Deck::new(&mut StdRng::seed_from_u64(42));
        let b = Deck::new(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_until_empty() {
        let mut deck = Deck::new(&mut StdRng::seed_from_u64(7));
        let mut seen: HashSet<Card> = HashSet::new();
        for _ in 0..4 {
            let hand = deck.deal(8).unwrap();
            assert_eq!(hand.len(), 8);
            for card in hand {
                assert!(seen.insert(card), "{} dealt twice", card);
            }
        }
        assert_eq!(seen.len(), 32);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_deal_takes_from_the_top() {
        let mut deck = Deck::new(&mut StdRng::seed_from_u64(3));
        let top = *deck.remaining().last().unwrap();
        let hand = deck.deal(1).unwrap();
        assert_eq!(hand, vec![top]);
        assert_eq!(deck.len(), 31);
    }

    #[test]
    fn test_deal_more_than_remaining_fails() {
        let mut deck = Deck::shuffled();
        deck.deal(30).unwrap();
        assert_eq!(
            deck.deal(3),
            Err(GameError::InsufficientCards {
                requested: 3,
                remaining: 2
            })
        );
        // A failed deal takes nothing
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.deal(2).unwrap().len(), 2);
        assert!(deck.deal(1).is_err());
    }

    #[test]
    fn test_snapshot() {
        let mut deck = Deck::new(&mut StdRng::seed_from_u64(11));
        deck.deal(31).unwrap();
        let last = deck.remaining()[0];

        let json = serde_json::to_value(deck.snapshot()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["rank"], last.rank().short());
        assert_eq!(json[0]["displaySuit"], last.suit().label());
        assert_eq!(json[0]["value"], last.value());

        deck.deal(1).unwrap();
        assert_eq!(serde_json::to_value(deck.snapshot()).unwrap(), serde_json::json!([]));
    }

    #[test]
    fn test_scripted_dealer() {
        let hand = vec![Card::new(Suit::Spades, Rank::Seven)];
        let mut dealer = ScriptedDealer::new(vec![hand.clone(), vec![]]);
        assert_eq!(dealer.deal(8).unwrap(), hand);
        assert_eq!(dealer.deal(8).unwrap(), vec![]);
        assert_eq!(dealer.deal(8).unwrap(), vec![]);
    }
}
