use thiserror::Error;

use super::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game requires exactly 4 players, got {count}")]
    WrongPlayerCount { count: usize },

    #[error("Player names must be non-empty (player {index} is blank)")]
    BlankName { index: usize },

    #[error("All player names must be unique ({name} appears more than once)")]
    DuplicateName { name: String },

    #[error("Starting player index must be between 0 and 3, got {index}")]
    InvalidStartingIndex { index: usize },

    #[error("Not enough cards to deal: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    // A hand may never hold the same card twice
    #[error("Invalid hand: {card} appears more than once")]
    InvalidHand { card: Card },

    #[error("Cannot choose a card from an empty hand")]
    EmptyHand,

    #[error("Strategy chose index {index} for a hand of {hand_len} cards")]
    InvalidChoice { index: usize, hand_len: usize },

    #[error("The game has already finished")]
    AlreadyFinished,

    #[error("No player reached the losing score within {rounds} rounds")]
    RoundLimitReached { rounds: u32 },
}
