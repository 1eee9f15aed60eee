/*
Game: Fifty
A four player trick-taking game with a 32 card deck (sevens through aces).
Whoever plays the highest card of the lead suit is charged every penalty point
in the trick: 1 per heart, 2 for the jack of clubs, 5 for the queen of spades.
Hands are redealt whenever everyone runs out of cards. The first player to
reach 50 points loses.
*/

pub mod cards;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod player;
pub mod randomizer;
pub mod round;
pub mod score;
pub mod strategy;

pub const PLAYER_COUNT: usize = 4;

// Re-export the main types
pub use cards::{Card, Rank, Suit};
pub use deck::{Dealer, Deck, ScriptedDealer};
pub use error::GameError;
pub use event::{Event, EventSink, StdoutSink};
pub use game::{Game, GameOptions, GameSnapshot, Phase};
pub use player::{Player, PlayerSnapshot, LOSING_SCORE};
pub use randomizer::{DefaultRandomizer, FixedRandomizer, Randomizer};
pub use round::{Play, Round, RoundResult};
pub use score::{CardPointsCalculator, RoundPointsCalculator, Score};
pub use strategy::{LowestMatchingElseRandom, PlayStrategy};
