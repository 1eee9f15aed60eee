use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{debug, trace};

use super::deck::{Dealer, Deck};
use super::error::GameError;
use super::event::{Event, EventSink, StdoutSink};
use super::player::{Player, PlayerSnapshot};
use super::randomizer::{DefaultRandomizer, Randomizer};
use super::round::Round;
use super::score::{RoundPointsCalculator, Score};
use super::strategy::{LowestMatchingElseRandom, PlayStrategy};
use super::PLAYER_COUNT;

pub const HAND_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    // Players validated, nothing announced yet
    #[default]
    Initializing,
    // Deal a fresh hand to every player
    Dealing,
    // Play one trick and charge its points
    PlayingRound,
    // Every hand is empty, announce the reshuffle before redealing
    AwaitingReshuffle,
    // Stop if anyone reached the losing score
    CheckingTermination,
    Finished,
}

/// Overrides for a game's collaborators. Anything left as `None` gets the
/// standard implementation.
#[derive(Default)]
pub struct GameOptions {
    /// Seat that leads the first round, picked at random when absent.
    pub starting_index: Option<usize>,
    /// Seeds the default randomizer and the default deck shuffles.
    pub seed: Option<u64>,
    /// Used for every deal. A fresh shuffled deck is used per deal otherwise.
    pub dealer: Option<Box<dyn Dealer>>,
    pub points: Option<Rc<dyn RoundPointsCalculator>>,
    pub randomizer: Option<Rc<dyn Randomizer>>,
    pub strategy: Option<Rc<dyn PlayStrategy>>,
    pub sink: Option<Box<dyn EventSink>>,
    /// Give up with `RoundLimitReached` after this many rounds without a loser.
    pub round_limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub current_player_index: usize,
    pub round_count: u32,
    pub finished: bool,
    pub phase: Phase,
}

pub struct Game {
    // Fixed for the lifetime of the game
    players: [Player; PLAYER_COUNT],
    phase: Phase,
    // Player who leads the next round
    current_player_index: usize,
    round_count: u32,
    loser: Option<usize>,
    round: Round,
    dealer: Option<Box<dyn Dealer>>,
    // Shuffles the default decks
    deck_rng: StdRng,
    sink: Box<dyn EventSink>,
    round_limit: Option<u32>,
}

impl Game {
    pub fn new<S: AsRef<str>>(names: &[S], options: GameOptions) -> Result<Self, GameError> {
        validate_names(names)?;

        let randomizer: Rc<dyn Randomizer> = match (options.randomizer, options.seed) {
            (Some(randomizer), _) => randomizer,
            (None, Some(seed)) => Rc::new(DefaultRandomizer::seeded(seed)),
            (None, None) => Rc::new(DefaultRandomizer::new()),
        };

        let current_player_index = match options.starting_index {
            Some(index) if index >= PLAYER_COUNT => {
                return Err(GameError::InvalidStartingIndex { index })
            }
            Some(index) => index,
            None => randomizer.pick_index(0, PLAYER_COUNT - 1),
        };

        let deck_rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let strategy: Rc<dyn PlayStrategy> = match options.strategy {
            Some(strategy) => strategy,
            None => Rc::new(LowestMatchingElseRandom::new(randomizer.clone())),
        };
        let players: [Player; PLAYER_COUNT] =
            std::array::from_fn(|seat| Player::new(names[seat].as_ref(), strategy.clone()));

        let points: Rc<dyn RoundPointsCalculator> = match options.points {
            Some(points) => points,
            None => Rc::new(Score),
        };
        let sink: Box<dyn EventSink> = match options.sink {
            Some(sink) => sink,
            None => Box::new(StdoutSink),
        };

        debug!(
            players = ?players.iter().map(Player::name).collect::<Vec<_>>(),
            current_player_index,
            "created game"
        );

        Ok(Self {
            players,
            phase: Phase::Initializing,
            current_player_index,
            round_count: 0,
            loser: None,
            round: Round::new(points),
            dealer: options.dealer,
            deck_rng,
            sink,
            round_limit: options.round_limit,
        })
    }

    /// Play until someone loses and return the losing player.
    pub fn run(&mut self) -> Result<&Player, GameError> {
        if self.phase == Phase::Finished {
            return Err(GameError::AlreadyFinished);
        }
        loop {
            if let Some(loser) = self.transition()? {
                return Ok(&self.players[loser]);
            }
        }
    }

    /// Advance a single phase transition and return the phase reached.
    pub fn step(&mut self) -> Result<Phase, GameError> {
        self.transition()?;
        Ok(self.phase)
    }

    // Returns the losing seat on the transition that finishes the game
    fn transition(&mut self) -> Result<Option<usize>, GameError> {
        let mut loser = None;
        let phase = self.phase;
        self.phase = match phase {
            Phase::Initializing => {
                let names = self.players.iter().map(|p| p.name().to_string()).collect();
                self.emit(Event::GameStarted { names });
                Phase::Dealing
            }
            Phase::Dealing => {
                self.deal_cards()?;
                if self.round_count == 0 {
                    Phase::PlayingRound
                } else {
                    Phase::CheckingTermination
                }
            }
            Phase::PlayingRound => {
                self.play_round()?;
                if self.players.iter().any(Player::has_cards) {
                    Phase::CheckingTermination
                } else {
                    Phase::AwaitingReshuffle
                }
            }
            Phase::AwaitingReshuffle => {
                debug!(round = self.round_count, "hands exhausted, reshuffling");
                self.emit(Event::Reshuffle);
                Phase::Dealing
            }
            Phase::CheckingTermination => {
                if let Some(seat) = self.players.iter().position(Player::has_lost) {
                    self.finish(seat);
                    loser = Some(seat);
                    Phase::Finished
                } else {
                    if let Some(limit) = self.round_limit {
                        if self.round_count >= limit {
                            return Err(GameError::RoundLimitReached { rounds: limit });
                        }
                    }
                    Phase::PlayingRound
                }
            }
            Phase::Finished => Phase::Finished,
        };
        Ok(loser)
    }

    fn deal_cards(&mut self) -> Result<(), GameError> {
        let mut fresh_deck;
        let dealer: &mut dyn Dealer = match self.dealer.as_mut() {
            Some(dealer) => dealer.as_mut(),
            None => {
                fresh_deck = Deck::new(&mut self.deck_rng);
                &mut fresh_deck
            }
        };
        for player in self.players.iter_mut() {
            player.set_hand(dealer.deal(HAND_SIZE)?)?;
        }
        debug!(round = self.round_count, "dealt hands");

        for seat in 0..PLAYER_COUNT {
            let player = &self.players[seat];
            let event = Event::Dealt {
                name: player.name().to_string(),
                hand: player.hand().to_vec(),
            };
            self.emit(event);
        }
        Ok(())
    }

    fn play_round(&mut self) -> Result<(), GameError> {
        self.round_count += 1;
        let starter = self.current_player_index;
        self.emit(Event::RoundStarted {
            round: self.round_count,
            name: self.players[starter].name().to_string(),
        });

        if let Some(result) = self.round.play(&mut self.players, starter)? {
            for play in &result.plays {
                let name = self.players[play.player].name().to_string();
                self.emit(Event::Played {
                    name,
                    card: play.card,
                });
            }

            let loser = &mut self.players[result.loser];
            loser.add_score(result.points);
            let event = Event::ScoreUpdated {
                name: loser.name().to_string(),
                highest_card: result.highest_card,
                points: result.points,
                total: loser.score(),
            };
            debug!(
                round = self.round_count,
                loser = loser.name(),
                points = result.points,
                total = loser.score(),
                "charged trick"
            );
            self.emit(event);
        }

        // Rotates even when nobody could play
        self.current_player_index = (starter + 1) % PLAYER_COUNT;
        Ok(())
    }

    fn finish(&mut self, loser: usize) {
        let scores: Vec<(String, u32)> = self
            .players
            .iter()
            .map(|p| (p.name().to_string(), p.score()))
            .collect();
        self.emit(Event::FinalScoresHeader);
        for (name, score) in scores {
            self.emit(Event::FinalScore { name, score });
        }
        let name = self.players[loser].name().to_string();
        debug!(loser = %name, rounds = self.round_count, "game over");
        self.emit(Event::GameLost { name });
        self.loser = Some(loser);
    }

    fn emit(&mut self, event: Event) {
        let line = event.to_string();
        trace!(%line, "event");
        self.sink.emit(&line);
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn loser(&self) -> Option<&Player> {
        self.loser.map(|seat| &self.players[seat])
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.iter().map(Player::snapshot).collect(),
            current_player_index: self.current_player_index,
            round_count: self.round_count,
            finished: self.is_finished(),
            phase: self.phase,
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("phase", &self.phase)
            .field("current_player_index", &self.current_player_index)
            .field("round_count", &self.round_count)
            .finish_non_exhaustive()
    }
}

fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<(), GameError> {
    if names.len() != PLAYER_COUNT {
        return Err(GameError::WrongPlayerCount { count: names.len() });
    }
    for (index, name) in names.iter().enumerate() {
        if name.as_ref().trim().is_empty() {
            return Err(GameError::BlankName { index });
        }
    }
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_ref()) {
            return Err(GameError::DuplicateName {
                name: name.as_ref().to_string(),
            });
        }
    }
    Ok(())
}
