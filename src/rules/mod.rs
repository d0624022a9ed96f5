//! Play legality.
//!
//! Validation is a pure function of the pile and the candidate play, so
//! the Dealer can always check before it mutates anything.

pub mod validation;

pub use validation::validate_play;
