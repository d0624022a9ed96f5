//! Players and the play-decision capability.
//!
//! ## Player
//!
//! A seated player: a unique name, a private hand, and a `Strategy`.
//! Two players are equal iff their names are equal.
//!
//! ## Strategy
//!
//! The one extension point of the engine. Human front-ends, bots and remote
//! clients all implement `decide_play`; the Dealer passes whatever comes back
//! to validation unmodified. `decide_play` is async so a strategy can wait
//! on a person or a socket without blocking anything else in the process.

use async_trait::async_trait;
use smallvec::SmallVec;

use super::event::GameEvent;
use super::state::GameState;
use crate::cards::{Card, Hand};

/// A proposed play. Most plays are one to four cards.
pub type Play = SmallVec<[Card; 4]>;

/// How a player chooses what to play.
#[async_trait]
pub trait Strategy: Send {
    /// Choose a play given the table and the player's own hand.
    async fn decide_play(&mut self, state: &GameState, hand: &Hand) -> Play;

    /// Called after every state change at the table.
    fn update(&mut self, _event: &GameEvent) {}
}

/// A seated player.
pub struct Player {
    name: String,
    hand: Hand,
    strategy: Box<dyn Strategy>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            strategy,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Give cards to this player.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.add_cards(cards);
    }

    /// Ask the strategy for a play.
    pub async fn decide_play(&mut self, state: &GameState) -> Play {
        self.strategy.decide_play(state, &self.hand).await
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn notify(&mut self, event: &GameEvent) {
        self.strategy.update(event);
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
