//! Dealing, roster management, play acceptance and turn sequencing.
//!
//! `Dealer` is the only writer of deck, pile, turn counter and roster.
//! Each Dealer is an independent value: run as many games per process as
//! you like, each driven by one game loop.

mod engine;
mod roster;

pub use engine::{Dealer, TurnOutcome};
pub use roster::Roster;
