use std::rc::Rc;

use serde::Serialize;
use tracing::trace;

use super::cards::{Card, Suit};
use super::error::GameError;
use super::player::Player;
use super::score::RoundPointsCalculator;
use super::PLAYER_COUNT;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    // Seat index into the game's players
    pub player: usize,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Cards in the order they were played.
    pub plays: Vec<Play>,
    pub lead_suit: Suit,
    /// Seat of the player charged with the points.
    pub loser: usize,
    pub highest_card: Card,
    pub points: u32,
}

impl RoundResult {
    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|p| p.card).collect()
    }
}

/// Resolves a single trick.
pub struct Round {
    points: Rc<dyn RoundPointsCalculator>,
}

impl Round {
    pub fn new(points: Rc<dyn RoundPointsCalculator>) -> Self {
        Self { points }
    }

    /// Every player with cards plays one, starting at `starting_index`.
    /// Returns `None` when nobody had anything to play.
    pub fn play(
        &self,
        players: &mut [Player; PLAYER_COUNT],
        starting_index: usize,
    ) -> Result<Option<RoundResult>, GameError> {
        let mut plays: Vec<Play> = Vec::with_capacity(PLAYER_COUNT);
        let mut lead_suit: Option<Suit> = None;

        for offset in 0..PLAYER_COUNT {
            let seat = (starting_index + offset) % PLAYER_COUNT;
            // Empty hands are skipped without breaking the rotation
            if let Some(card) = players[seat].play_card(lead_suit)? {
                if lead_suit.is_none() {
                    lead_suit = Some(card.suit());
                }
                plays.push(Play { player: seat, card });
            }
        }

        let Some((lead_suit, highest)) =
            lead_suit.and_then(|lead| Some((lead, highest_of_lead_suit(&plays, lead)?)))
        else {
            trace!(starting_index, "empty trick");
            return Ok(None);
        };

        let cards: Vec<Card> = plays.iter().map(|p| p.card).collect();
        let points = self.points.round_points(&cards);
        trace!(
            lead = ?lead_suit,
            loser = highest.player,
            card = %highest.card,
            points,
            "trick resolved"
        );

        Ok(Some(RoundResult {
            lead_suit,
            loser: highest.player,
            highest_card: highest.card,
            points,
            plays,
        }))
    }
}

// Highest card of the lead suit, falling back to the first play when no
// card followed the lead. `None` only for an empty trick.
fn highest_of_lead_suit(plays: &[Play], lead_suit: Suit) -> Option<Play> {
    let mut highest: Option<Play> = None;
    for play in plays {
        if play.card.suit() != lead_suit {
            continue;
        }
        if highest.map_or(true, |h| play.card.beats(&h.card, lead_suit)) {
            highest = Some(*play);
        }
    }
    highest.or_else(|| plays.first().copied())
}
