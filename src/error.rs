//! Error types.
//!
//! Every error is returned before any shared state is mutated, so a caller
//! that receives one can always retry or re-prompt against the same Dealer.

use thiserror::Error;

use crate::cards::Rank;

/// Card parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Number -> Rank conversion failed.
    #[error("invalid rank number: {0}")]
    InvalidRankNumber(u8),

    /// Char -> Rank conversion failed.
    #[error("invalid rank character: {0:?}")]
    InvalidRankChar(char),

    /// Char -> Suit conversion failed.
    #[error("invalid suit character: {0:?}")]
    InvalidSuitChar(char),

    /// String -> Card conversion failed (wrong shape).
    #[error("invalid card notation: {0:?}")]
    InvalidNotation(String),
}

/// Deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// `deal(n)` asked for more cards than remain.
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    NotEnoughCards { requested: usize, remaining: usize },
}

/// Dealer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealerError {
    /// A player with this name is already seated.
    #[error("player {0:?} already exists")]
    DuplicatePlayer(String),

    /// The roster is full.
    #[error("table is full ({0} players)")]
    TableFull(usize),

    /// Dealing or playing requires at least one player.
    #[error("no players at the table")]
    NoPlayers,

    /// No player with this name is seated.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    /// The play does not beat the pile.
    #[error("{required} card(s) of rank equal or higher than {min_rank} must be played")]
    InvalidPlay { required: usize, min_rank: Rank },

    /// An empty play was submitted on an empty pile.
    #[error("the opening play must contain at least one card")]
    EmptyPlay,

    /// A play was submitted out of turn.
    #[error("it is {expected:?}'s turn, not {got:?}'s")]
    NotYourTurn { expected: String, got: String },

    /// The player does not hold every card of the play.
    #[error("player {0:?} does not hold the played cards")]
    CardsNotInHand(String),

    /// The player's strategy did not decide in time.
    #[error("player {0:?} did not decide in time")]
    DecisionTimeout(String),

    /// Deck failure while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl DealerError {
    /// Rejections a game loop can answer by re-prompting the same player.
    #[must_use]
    pub fn is_rejected_play(&self) -> bool {
        matches!(
            self,
            DealerError::InvalidPlay { .. }
                | DealerError::EmptyPlay
                | DealerError::CardsNotInHand(_)
        )
    }
}
