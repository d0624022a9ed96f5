//! Game events and the observer capability.
//!
//! The Dealer keeps an explicit list of observers and calls them
//! synchronously, in subscription order, after each state change. Seated
//! players are notified through `Strategy::update` as well, so a strategy
//! never has to subscribe separately.
//!
//! Closures are observers:
//!
//! ```
//! use rust_dealer::core::{GameEvent, Observer};
//!
//! let mut seen = Vec::new();
//! let mut observer = |event: &GameEvent| seen.push(event.clone());
//! observer.notify(&GameEvent::DeckBuilt { size: 52 });
//! assert_eq!(seen.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::cards::Card;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player was seated.
    PlayerJoined { name: String },

    /// A player left the table.
    PlayerLeft { name: String },

    /// The deck was rebuilt and shuffled.
    DeckBuilt { size: usize },

    /// A deal completed; hand sizes in roster order.
    Dealt { hand_sizes: Vec<(String, usize)> },

    /// A play was accepted and is now the pile.
    PlayAccepted {
        player: String,
        cards: Vec<Card>,
        turn: u32,
    },

    /// It is now `player`'s turn.
    TurnChanged { player: String, turn: u32 },
}

/// Receives game events.
pub trait Observer: Send {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Forwards events into an unbounded tokio channel.
///
/// Events sent after the receiver is dropped are discarded.
impl Observer for mpsc::UnboundedSender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        if self.send(event.clone()).is_err() {
            log::debug!("event receiver dropped, discarding {:?}", event);
        }
    }
}
