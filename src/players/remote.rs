//! Channel-driven strategy for humans and remote clients.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::cards::Hand;
use crate::core::{GameEvent, GameState, Observer, Play, Strategy};

/// Waits for the next play on a channel.
///
/// Whoever holds the sending half (a UI task, a websocket task) submits
/// plays; `decide_play` suspends until one arrives. If the sender is gone
/// the player passes with an empty play.
#[derive(Debug)]
pub struct Remote {
    plays: mpsc::Receiver<Play>,
    events: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Remote {
    /// Create a remote player and the sender that feeds it plays.
    #[must_use]
    pub fn channel(buffer: usize) -> (mpsc::Sender<Play>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (
            tx,
            Self {
                plays: rx,
                events: None,
            },
        )
    }

    /// Forward table events to the remote side as well.
    #[must_use]
    pub fn with_events(mut self, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }
}

#[async_trait]
impl Strategy for Remote {
    async fn decide_play(&mut self, _state: &GameState, _hand: &Hand) -> Play {
        match self.plays.recv().await {
            Some(play) => play,
            None => {
                log::warn!("remote play channel closed, passing");
                Play::new()
            }
        }
    }

    fn update(&mut self, event: &GameEvent) {
        if let Some(events) = self.events.as_mut() {
            events.notify(event);
        }
    }
}
