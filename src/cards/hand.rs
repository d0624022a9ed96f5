//! A player's private hand.
//!
//! Order is irrelevant to the rules; cards are kept in the order received so
//! that display and scripted strategies stay deterministic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Multiset of cards owned by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append cards to the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Check that every card in `cards` is held, counting duplicates.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        let mut held: FxHashMap<Card, usize> = FxHashMap::default();
        for card in &self.cards {
            *held.entry(*card).or_insert(0) += 1;
        }

        cards.iter().all(|card| match held.get_mut(card) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
    }

    /// Remove one copy of each card in `cards`.
    ///
    /// Returns false (and leaves the hand untouched) unless all are held.
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        if !self.contains_all(cards) {
            return false;
        }

        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                self.cards.remove(pos);
            }
        }
        true
    }

    /// Empty the hand, returning its cards.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.cards.iter()).finish()
    }
}
