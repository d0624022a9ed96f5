//! Core engine types: players, state, events, RNG, configuration.
//!
//! These are the building blocks the Dealer works with. Nothing here
//! mutates shared state on its own; the Dealer is the only writer.

pub mod config;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use config::DealerConfig;
pub use event::{GameEvent, Observer};
pub use player::{Play, Player, Strategy};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
