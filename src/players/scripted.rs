//! Scripted strategy.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::cards::{Card, Hand};
use crate::core::{GameEvent, GameState, Play, Strategy};

/// Plays a predetermined sequence; an empty play once the script runs out.
///
/// Also records every event it is notified of, which makes it handy for
/// asserting what a seated player saw.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    plays: VecDeque<Play>,
    seen: Vec<GameEvent>,
}

impl Scripted {
    #[must_use]
    pub fn new<I, P>(plays: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = Card>,
    {
        Self {
            plays: plays.into_iter().map(|p| p.into_iter().collect()).collect(),
            seen: Vec::new(),
        }
    }

    /// Plays not yet made.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.plays.len()
    }

    /// Events received so far.
    #[must_use]
    pub fn seen(&self) -> &[GameEvent] {
        &self.seen
    }
}

#[async_trait]
impl Strategy for Scripted {
    async fn decide_play(&mut self, _state: &GameState, _hand: &Hand) -> Play {
        self.plays.pop_front().unwrap_or_default()
    }

    fn update(&mut self, event: &GameEvent) {
        self.seen.push(event.clone());
    }
}
