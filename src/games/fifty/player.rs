use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::cards::{Card, CardSnapshot, Suit};
use super::error::GameError;
use super::strategy::PlayStrategy;
use crate::utils::join_cards;

/// Score at which a player has lost the game.
pub const LOSING_SCORE: u32 = 50;

pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: u32,
    strategy: Rc<dyn PlayStrategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Rc<dyn PlayStrategy>) -> Self {
        Self {
            name: name.into(),
            hand: vec![],
            score: 0,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Scores only ever grow, saturating at `u32::MAX`.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn has_lost(&self) -> bool {
        self.score >= LOSING_SCORE
    }

    /// Replace the hand wholesale.
    pub fn set_hand(&mut self, cards: Vec<Card>) -> Result<(), GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card) {
                return Err(GameError::InvalidHand { card: *card });
            }
        }
        self.hand = cards;
        Ok(())
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit() == suit)
    }

    /// Play the card the strategy picks, or `None` when the hand is empty.
    pub fn play_card(&mut self, lead_suit: Option<Suit>) -> Result<Option<Card>, GameError> {
        if self.hand.is_empty() {
            return Ok(None);
        }
        let index = self.strategy.choose_index(&self.hand, lead_suit)?;
        if index >= self.hand.len() {
            return Err(GameError::InvalidChoice {
                index,
                hand_len: self.hand.len(),
            });
        }
        Ok(Some(self.hand.remove(index)))
    }

    pub fn hand_as_string(&self) -> String {
        join_cards(&self.hand)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            score: self.score,
            hand: self.hand.iter().map(Card::snapshot).collect(),
            has_cards: self.has_cards(),
            has_lost: self.has_lost(),
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: u32,
    pub hand: Vec<CardSnapshot>,
    pub has_cards: bool,
    pub has_lost: bool,
}
