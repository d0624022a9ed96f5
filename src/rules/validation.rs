//! Play validation against the pile.
//!
//! A play beats the pile when it has the same number of cards and its
//! reference (first) card ranks equal or higher than the pile's reference
//! card. Suits are never compared.
//!
//! On an empty pile (the opening play) any non-empty play is accepted.

use crate::cards::Card;
use crate::core::GameState;
use crate::error::DealerError;

/// Check `cards` against the current pile. Pure: never touches state.
pub fn validate_play(state: &GameState, cards: &[Card]) -> Result<(), DealerError> {
    let pile = state.pile();

    let Some(reference) = pile.front() else {
        return if cards.is_empty() {
            Err(DealerError::EmptyPlay)
        } else {
            Ok(())
        };
    };

    let beats = cards.len() == pile.len()
        && cards.first().is_some_and(|c| c.rank >= reference.rank);

    if beats {
        Ok(())
    } else {
        Err(DealerError::InvalidPlay {
            required: pile.len(),
            min_rank: reference.rank,
        })
    }
}
