//! Game state: the pile in play and the turn counter.
//!
//! `GameState` is what players and validation see. Only the Dealer mutates
//! it, through crate-private methods; everyone else gets `&GameState`.
//!
//! The pile is an `im::Vector`, so snapshots handed to observers are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Current game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Number of accepted plays so far (starts at 0).
    turn: u32,

    /// Cards most recently played; the next play must beat these.
    pile: Vector<Card>,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted plays so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The current pile.
    #[must_use]
    pub fn pile(&self) -> &Vector<Card> {
        &self.pile
    }

    /// Rank of the pile's reference (first) card, if any.
    #[must_use]
    pub fn reference_rank(&self) -> Option<Rank> {
        self.pile.front().map(|c| c.rank)
    }

    /// True before the first accepted play.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.pile.is_empty()
    }

    /// Replace the pile with an accepted play and bump the turn.
    ///
    /// Returns the previous pile.
    pub(crate) fn accept_play(&mut self, cards: &[Card]) -> Vector<Card> {
        let previous = std::mem::replace(&mut self.pile, cards.iter().copied().collect());
        self.turn += 1;
        previous
    }

    /// Empty the pile, returning what was on it. The turn counter is kept.
    pub(crate) fn clear_pile(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.pile)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn {} pile ", self.turn)?;
        f.debug_list().entries(self.pile.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), 0);
        assert!(state.is_opening());
        assert_eq!(state.reference_rank(), None);
    }

    #[test]
    fn test_accept_play_replaces_pile() {
        let mut state = GameState::new();

        let previous = state.accept_play(&parse_cards("7C 7D").unwrap());
        assert!(previous.is_empty());
        assert_eq!(state.turn(), 1);
        assert_eq!(state.reference_rank(), Some(Rank::new(7)));

        let previous = state.accept_play(&parse_cards("9S 9H").unwrap());
        assert_eq!(previous.len(), 2);
        assert_eq!(state.turn(), 2);
        assert_eq!(
            state.pile().iter().copied().collect::<Vec<_>>(),
            parse_cards("9S 9H").unwrap()
        );
    }

    #[test]
    fn test_display() {
        let mut state = GameState::new();
        state.accept_play(&parse_cards("7C").unwrap());
        assert_eq!(state.to_string(), "turn 1 pile [7♣]");
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new();
        state.accept_play(&parse_cards("QH QS").unwrap());

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_clear_pile_keeps_turn() {
        let mut state = GameState::new();
        state.accept_play(&parse_cards("7C 7D").unwrap());

        let cleared = state.clear_pile();
        assert_eq!(cleared.len(), 2);
        assert!(state.is_opening());
        assert_eq!(state.turn(), 1);
    }
}
