use super::cards::{Card, Rank, Suit};

pub trait CardPointsCalculator {
    fn card_points(&self, card: &Card) -> u32;
}

pub trait RoundPointsCalculator {
    /// Total penalty points for the cards played in one trick.
    fn round_points(&self, cards: &[Card]) -> u32;
}

/// Hearts are worth 1, the jack of clubs 2 and the queen of spades 5.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score;

impl CardPointsCalculator for Score {
    fn card_points(&self, card: &Card) -> u32 {
        match (card.suit(), card.rank()) {
            (Suit::Hearts, _) => 1,
            (Suit::Clubs, Rank::Jack) => 2,
            (Suit::Spades, Rank::Queen) => 5,
            _ => 0,
        }
    }
}

impl RoundPointsCalculator for Score {
    fn round_points(&self, cards: &[Card]) -> u32 {
        cards.iter().map(|c| self.card_points(c)).sum()
    }
}
