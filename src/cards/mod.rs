//! Cards, hands and decks.
//!
//! The rules only need a totally ordered rank and an opaque suit per card,
//! plus a deck that can be emptied, rebuilt, shuffled and dealt from.
//! The Dealer is generic over `DeckProvider`; `Deck` is the stock
//! implementation (52-card or any custom card-set).

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{parse_cards, Card, Rank, Suit};
pub use deck::{Deck, DeckProvider};
pub use hand::Hand;
