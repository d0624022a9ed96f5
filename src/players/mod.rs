//! Reference strategies.
//!
//! - `Scripted`: replays a fixed list of plays (tests, replays)
//! - `LowestBeating`: plays the cheapest cards that beat the pile
//! - `Remote`: waits for plays on a channel (human front-ends, network clients)

mod lowest;
mod remote;
mod scripted;

pub use lowest::LowestBeating;
pub use remote::Remote;
pub use scripted::Scripted;
