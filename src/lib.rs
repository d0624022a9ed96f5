//! # rust-dealer
//!
//! A turn-based card game dealer: it deals a shared deck to a set of
//! players, tracks whose turn it is, validates each proposed play against
//! the pile in play, and advances the game.
//!
//! ## Design Principles
//!
//! 1. **One writer**: the `Dealer` is the only thing that mutates the deck,
//!    the pile, the turn counter and the roster. Everyone else reads
//!    `GameState`.
//!
//! 2. **Validate, then mutate**: every error is returned before any state
//!    changes, so a rejected play can simply be re-prompted.
//!
//! 3. **Pluggable players**: how a play is chosen is a `Strategy`. Humans,
//!    bots and remote clients are independent implementations; decisions
//!    are async so a strategy can wait on input without blocking.
//!
//! ## Rules
//!
//! A play must have as many cards as the pile, and its first card must
//! rank equal or higher than the pile's first card. The opening play (empty
//! pile) may be any non-empty set of cards.
//!
//! ## Modules
//!
//! - `cards`: Card, rank, suit, hand, deck and the `DeckProvider` contract
//! - `core`: Players, game state, events/observers, RNG, configuration
//! - `rules`: Play validation
//! - `dealer`: Roster and the `Dealer`
//! - `players`: Reference strategies (scripted, greedy bot, channel-driven)

pub mod cards;
pub mod core;
pub mod dealer;
pub mod error;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, DeckProvider, Hand, Rank, Suit};

pub use crate::core::{
    DealerConfig, GameEvent, GameRng, GameRngState, GameState, Observer, Play,
    Player, Strategy,
};

pub use crate::dealer::{Dealer, Roster, TurnOutcome};

pub use crate::error::{CardError, DealerError, DeckError};

pub use crate::players::{LowestBeating, Remote, Scripted};

pub use crate::rules::validate_play;
