//! Greedy bot: the cheapest play that beats the pile.

use async_trait::async_trait;

use crate::cards::{Card, Hand};
use crate::core::{GameState, Play, Strategy};

/// Plays the lowest-ranked cards that still beat the pile.
///
/// The lead is the lowest card ranking at least the pile's reference card;
/// the rest of the play prefers cards matching the lead's rank, then the
/// lowest leftovers. Opens with its single lowest card. Returns an empty
/// play when it cannot beat the pile.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestBeating;

impl LowestBeating {
    fn choose(state: &GameState, hand: &Hand) -> Play {
        let mut cards: Vec<Card> = hand.cards().to_vec();
        cards.sort_by_key(|c| c.rank);

        let required = state.pile().len().max(1);
        if cards.len() < required {
            return Play::new();
        }

        let lead_pos = match state.reference_rank() {
            Some(min) => match cards.iter().position(|c| c.rank >= min) {
                Some(pos) => pos,
                None => return Play::new(),
            },
            None => 0,
        };

        let lead = cards.remove(lead_pos);
        // Stable sort: same-rank cards first, otherwise lowest first.
        cards.sort_by_key(|c| (c.rank != lead.rank, c.rank));

        let mut play = Play::new();
        play.push(lead);
        play.extend(cards.into_iter().take(required - 1));
        play
    }
}

#[async_trait]
impl Strategy for LowestBeating {
    async fn decide_play(&mut self, state: &GameState, hand: &Hand) -> Play {
        Self::choose(state, hand)
    }
}
