use std::fmt;

use super::cards::Card;
use crate::utils::{join_cards, points_label};

/// One line of the game trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    GameStarted {
        names: Vec<String>,
    },
    Dealt {
        name: String,
        hand: Vec<Card>,
    },
    RoundStarted {
        round: u32,
        name: String,
    },
    Played {
        name: String,
        card: Card,
    },
    ScoreUpdated {
        name: String,
        highest_card: Card,
        points: u32,
        total: u32,
    },
    Reshuffle,
    FinalScoresHeader,
    FinalScore {
        name: String,
        score: u32,
    },
    GameLost {
        name: String,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::GameStarted { names } => {
                write!(f, "Starting a game with {}", names.join(", "))
            }
            Event::Dealt { name, hand } => {
                write!(f, "{} has been dealt: {}", name, join_cards(hand))
            }
            Event::RoundStarted { round, name } => {
                write!(f, "Round {}: {} starts the game", round, name)
            }
            Event::Played { name, card } => write!(f, "{} plays: {}", name, card),
            Event::ScoreUpdated {
                name,
                highest_card,
                points,
                total,
            } => write!(
                f,
                "{name} played {highest_card}, the highest matching card of this match \
                 and got {points} {} added to their total score. \
                 {name}'s total score is {total} {}.",
                points_label(*points),
                points_label(*total),
            ),
            Event::Reshuffle => write!(f, "Players ran out of cards. Reshuffle."),
            Event::FinalScoresHeader => write!(f, "Points:"),
            Event::FinalScore { name, score } => write!(f, "{}: {}", name, score),
            Event::GameLost { name } => write!(f, "{} loses the game!", name),
        }
    }
}

/// Receives each trace line, in order, as it happens.
pub trait EventSink {
    fn emit(&mut self, line: &str);
}

impl<F: FnMut(&str)> EventSink for F {
    fn emit(&mut self, line: &str) {
        self(line)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}
