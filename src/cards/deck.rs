//! Shuffleable, drawable card collections.
//!
//! The Dealer only talks to decks through `DeckProvider`, so any collection
//! honouring that contract (a piquet deck, a double deck, a test fixture)
//! can be dealt from. `Deck` is the stock implementation: it remembers the
//! card-set it was built from and restores it on `build()`.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;
use crate::error::DeckError;

/// Contract between the Dealer and a deck.
pub trait DeckProvider {
    /// Remove every remaining card.
    fn empty(&mut self);

    /// Restore the full card-set (discarding whatever remains).
    fn build(&mut self);

    /// Shuffle the remaining cards.
    fn shuffle(&mut self, rng: &mut GameRng);

    /// Remove and return `n` cards from the top.
    ///
    /// Fails without removing anything if fewer than `n` remain.
    fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError>;

    /// Number of remaining cards.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered collection of cards; the top of the deck is the end of the vec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// The full card-set restored by `build()`.
    template: Vec<Card>,
    cards: Vec<Card>,
}

impl Deck {
    /// A built (unshuffled) standard 52-card deck.
    #[must_use]
    pub fn full_52() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self::from_cards(cards)
    }

    /// A built deck whose full card-set is `cards`.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            template: cards.clone(),
            cards,
        }
    }

    /// Size of the full card-set.
    #[must_use]
    pub fn full_size(&self) -> usize {
        self.template.len()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full_52()
    }
}

impl DeckProvider for Deck {
    fn empty(&mut self) {
        self.cards.clear();
    }

    fn build(&mut self) {
        self.cards.clone_from(&self.template);
    }

    fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.cards.iter()).finish()
    }
}
