use std::rc::Rc;

use super::cards::{Card, Suit};
use super::error::GameError;
use super::randomizer::Randomizer;

pub trait PlayStrategy {
    /// Index into `hand` of the card to play. `lead_suit` is `None` when
    /// this player leads the trick.
    fn choose_index(&self, hand: &[Card], lead_suit: Option<Suit>) -> Result<usize, GameError>;
}

/// Follows with the lowest card of the lead suit, otherwise plays a random card.
pub struct LowestMatchingElseRandom {
    randomizer: Rc<dyn Randomizer>,
}

impl LowestMatchingElseRandom {
    pub fn new(randomizer: Rc<dyn Randomizer>) -> Self {
        Self { randomizer }
    }
}

impl PlayStrategy for LowestMatchingElseRandom {
    fn choose_index(&self, hand: &[Card], lead_suit: Option<Suit>) -> Result<usize, GameError> {
        if hand.is_empty() {
            return Err(GameError::EmptyHand);
        }
        let random = || self.randomizer.pick_index(0, hand.len() - 1);

        let Some(lead_suit) = lead_suit else {
            return Ok(random());
        };

        // Left to right, keeping the first minimum seen
        let mut lowest: Option<usize> = None;
        for (index, card) in hand.iter().enumerate() {
            if card.suit() != lead_suit {
                continue;
            }
            if lowest.map_or(true, |l| card.value() < hand[l].value()) {
                lowest = Some(index);
            }
        }

        Ok(lowest.unwrap_or_else(random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fifty::cards::Rank;
    use crate::games::fifty::randomizer::{DefaultRandomizer, FixedRandomizer};

    fn hand() -> Vec<Card> {
        vec![
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Spades, Rank::Jack),
            Card::new(Suit::Hearts, Rank::Eight),
            Card::new(Suit::Clubs, Rank::Seven),
            Card::new(Suit::Hearts, Rank::Ten),
        ]
    }

    #[test]
    fn test_follows_with_lowest_of_lead_suit() {
        for seed in 0..20 {
            let strategy = LowestMatchingElseRandom::new(Rc::new(DefaultRandomizer::seeded(seed)));
            assert_eq!(strategy.choose_index(&hand(), Some(Suit::Hearts)), Ok(2));
            assert_eq!(strategy.choose_index(&hand(), Some(Suit::Spades)), Ok(1));
        }
    }

    #[test]
    fn test_no_matching_suit_uses_randomizer() {
        for offset in 0..5 {
            let strategy = LowestMatchingElseRandom::new(Rc::new(FixedRandomizer { offset }));
            assert_eq!(
                strategy.choose_index(&hand(), Some(Suit::Diamonds)),
                Ok(offset)
            );
        }
    }

    #[test]
    fn test_leading_uses_randomizer() {
        let strategy = LowestMatchingElseRandom::new(Rc::new(FixedRandomizer { offset: 3 }));
        assert_eq!(strategy.choose_index(&hand(), None), Ok(3));

        let strategy = LowestMatchingElseRandom::new(Rc::new(DefaultRandomizer::seeded(5)));
        let mut seen = [false; 5];
        for _ in 0..200 {
            let index = strategy.choose_index(&hand(), None).unwrap();
            assert!(index < 5);
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s), "every card should be playable as lead");
    }

    #[test]
    fn test_empty_hand_fails() {
        let strategy = LowestMatchingElseRandom::new(Rc::new(FixedRandomizer::default()));
        assert_eq!(strategy.choose_index(&[], None), Err(GameError::EmptyHand));
        assert_eq!(
            strategy.choose_index(&[], Some(Suit::Clubs)),
            Err(GameError::EmptyHand)
        );
    }
}
