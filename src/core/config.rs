//! Dealer configuration.
//!
//! Hosts usually build a `DealerConfig` with the builder methods, or load it
//! from JSON alongside the rest of their settings:
//!
//! ```
//! use rust_dealer::core::DealerConfig;
//!
//! let config = DealerConfig::default().with_seed(7).with_max_players(4);
//! assert_eq!(config.seed, 7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

/// Dealer configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealerConfig {
    /// Seed for deck shuffling.
    /// Same seed and roster produce the same deal.
    pub seed: u64,

    /// Maximum number of seated players (at least 1).
    pub max_players: usize,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_players: 255,
        }
    }
}

impl DealerConfig {
    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the roster cap.
    #[must_use]
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_players == 0 {
            return Err("max_players must be at least 1".to_string());
        }
        Ok(())
    }
}
