//! The Dealer: sole mutator of the deck, the pile, the turn counter and
//! the roster, and sole enforcer of play legality.
//!
//! ## Turn cycle
//!
//! ```text
//! AwaitingPlay(current) --valid play--> PlayAccepted --> AwaitingPlay(next)
//!          ^                                                  |
//!          +------ invalid play (state untouched) <-----------+
//! ```
//!
//! There is no terminal state here; ending the game and re-prompting after
//! a rejection belong to the surrounding game loop.
//!
//! ## Example
//!
//! ```
//! use rust_dealer::{cards::parse_cards, Dealer, DealerConfig, Deck, Scripted};
//!
//! let deck = Deck::from_cards(parse_cards("2C 3C 4C 5C 6C 7C").unwrap());
//! let mut dealer = Dealer::new(deck, DealerConfig::default());
//! dealer.add_player("ann", Scripted::default()).unwrap();
//! dealer.add_player("bob", Scripted::default()).unwrap();
//!
//! dealer.init_deck();
//! dealer.deal().unwrap();
//! assert_eq!(dealer.deck_len(), 0);
//! assert_eq!(dealer.player("ann").unwrap().hand().len(), 3);
//! ```

use std::time::Duration;

use crate::cards::{Card, Deck, DeckProvider};
use crate::core::{
    DealerConfig, GameEvent, GameRng, GameRngState, GameState, Observer, Play, Player, Strategy,
};
use crate::error::DealerError;
use crate::rules;

use super::roster::Roster;

/// Result of an accepted play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Who played.
    pub player: String,
    /// What is now the pile.
    pub cards: Vec<Card>,
    /// Turn counter after the play.
    pub turn: u32,
    /// Whose turn it is now.
    pub next: String,
}

/// Mediator between players, the deck and the pile.
pub struct Dealer<D: DeckProvider = Deck> {
    config: DealerConfig,
    deck: D,
    roster: Roster,
    state: GameState,
    /// Piles replaced by later plays, and hands of players who left.
    discard: Vec<Card>,
    rng: GameRng,
    observers: Vec<Box<dyn Observer>>,
}

impl Dealer<Deck> {
    /// A Dealer with a standard 52-card deck.
    #[must_use]
    pub fn standard(config: DealerConfig) -> Self {
        Self::new(Deck::full_52(), config)
    }
}

impl<D: DeckProvider> Dealer<D> {
    /// Create a Dealer owning `deck`, rebuilt to its full card-set.
    ///
    /// Panics if `config` is invalid (see `DealerConfig::validate`).
    pub fn new(mut deck: D, config: DealerConfig) -> Self {
        if let Err(msg) = config.validate() {
            panic!("invalid dealer config: {}", msg);
        }

        deck.empty();
        deck.build();

        Self {
            rng: GameRng::new(config.seed),
            config,
            deck,
            roster: Roster::new(),
            state: GameState::new(),
            discard: Vec::new(),
            observers: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &DealerConfig {
        &self.config
    }

    /// Read-only view of the pile and turn counter.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn deck(&self) -> &D {
        &self.deck
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&str> {
        self.roster.current().map(Player::name)
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.roster.get(name)
    }

    /// Seated players in roster order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Cards across deck, hands, pile and discard.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.roster.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.state.pile().len()
            + self.discard.len()
    }

    /// Snapshot of the shuffle stream, for replaying later builds.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume the shuffle stream from a snapshot taken with `rng_state`.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Observers ===

    /// Register an observer; it sees every event from now on.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
        for player in self.roster.iter_mut() {
            player.notify(&event);
        }
    }

    // === Roster ===

    /// Seat a new player at the end of the roster.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
    ) -> Result<(), DealerError> {
        if self.roster.len() >= self.config.max_players {
            return Err(DealerError::TableFull(self.config.max_players));
        }

        let player = Player::new(name, Box::new(strategy));
        let name = player.name().to_string();
        self.roster.add(player)?;

        log::info!("player {} joined ({} seated)", name, self.roster.len());
        self.emit(GameEvent::PlayerJoined { name });
        Ok(())
    }

    /// Remove the first player named `name`; no-op if absent.
    ///
    /// The player's cards go to the discard pile. If they held the turn,
    /// the next player in cyclic order becomes current.
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        let held_turn = self.roster.position(name)? == self.roster.current_index()?;
        let mut player = self.roster.remove(name)?;
        self.discard.extend(player.hand_mut().take_all());

        log::info!("player {} left ({} seated)", name, self.roster.len());
        self.emit(GameEvent::PlayerLeft {
            name: name.to_string(),
        });

        if held_turn {
            if let Some(next) = self.current_player().map(str::to_string) {
                self.emit(GameEvent::TurnChanged {
                    player: next,
                    turn: self.state.turn(),
                });
            }
        }

        Some(player)
    }

    // === Dealing ===

    /// Collect every card, then rebuild and shuffle the deck.
    ///
    /// Hands, the pile and the discard pile are emptied first, so the full
    /// card-set is back in the deck and nowhere else. The turn counter
    /// keeps counting.
    pub fn init_deck(&mut self) {
        let mut reclaimed = self.discard.len() + self.state.clear_pile().len();
        self.discard.clear();
        for player in self.roster.iter_mut() {
            reclaimed += player.hand_mut().take_all().len();
        }
        if reclaimed > 0 {
            log::debug!("reclaimed {} cards before rebuilding", reclaimed);
        }

        self.deck.empty();
        self.deck.build();

        let mut shuffle_rng = self.rng.fork();
        self.deck.shuffle(&mut shuffle_rng);

        let size = self.deck.len();
        log::info!("deck built: {} cards (shuffle seed {})", size, shuffle_rng.seed());
        self.emit(GameEvent::DeckBuilt { size });
    }

    /// Deal the whole deck one card at a time in roster order.
    ///
    /// Seat 0 always receives the first card, so when the deck does not
    /// divide evenly the earliest seats hold one extra card.
    pub fn deal(&mut self) -> Result<(), DealerError> {
        let seats = self.roster.len();
        if seats == 0 {
            return Err(DealerError::NoPlayers);
        }

        let mut seat = 0;
        while !self.deck.is_empty() {
            let cards = self.deck.deal(1)?;
            if let Some(player) = self.roster.at_mut(seat) {
                player.add_cards(cards);
            }
            seat = (seat + 1) % seats;
        }

        let hand_sizes: Vec<(String, usize)> = self
            .roster
            .iter()
            .map(|p| (p.name().to_string(), p.hand().len()))
            .collect();
        log::info!("dealt to {} players: {:?}", seats, hand_sizes);
        self.emit(GameEvent::Dealt { hand_sizes });
        Ok(())
    }

    /// Give `cards` to the player named `name`.
    pub fn deal_player(
        &mut self,
        name: &str,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<(), DealerError> {
        let player = self
            .roster
            .get_mut(name)
            .ok_or_else(|| DealerError::UnknownPlayer(name.to_string()))?;
        player.add_cards(cards);
        Ok(())
    }

    // === Plays ===

    /// Check `cards` against the current pile without changing anything.
    pub fn validate_play(&self, cards: &[Card]) -> Result<(), DealerError> {
        rules::validate_play(&self.state, cards)
    }

    /// Submit a play on behalf of `name`.
    ///
    /// Fails unless it is `name`'s turn, the play beats the pile and the
    /// player holds every card in it. Nothing changes on failure.
    pub fn submit_play(&mut self, name: &str, cards: &[Card]) -> Result<TurnOutcome, DealerError> {
        let seat = self.roster.current_index().ok_or(DealerError::NoPlayers)?;
        let current = self.roster.at(seat).map(Player::name).unwrap_or_default();

        if current != name {
            if self.roster.get(name).is_none() {
                return Err(DealerError::UnknownPlayer(name.to_string()));
            }
            return Err(DealerError::NotYourTurn {
                expected: current.to_string(),
                got: name.to_string(),
            });
        }

        self.accept(seat, cards)
    }

    /// Pass the turn to the next player without touching the pile.
    ///
    /// The Dealer never does this on its own; a game loop calls it when it
    /// lets a player pass after a rejected play. The turn counter is not
    /// bumped since nothing was played.
    pub fn skip_turn(&mut self) -> Result<String, DealerError> {
        let skipped = self
            .current_player()
            .map(str::to_string)
            .ok_or(DealerError::NoPlayers)?;
        self.roster.advance();

        let next = self.current_player().unwrap_or_default().to_string();
        log::debug!("{} passes, {} is next", skipped, next);
        self.emit(GameEvent::TurnChanged {
            player: next.clone(),
            turn: self.state.turn(),
        });
        Ok(next)
    }

    /// Ask the current player for a play and apply it.
    pub async fn play_turn(&mut self) -> Result<TurnOutcome, DealerError> {
        let seat = self.roster.current_index().ok_or(DealerError::NoPlayers)?;
        let play = self.decide(seat, None).await?;
        self.accept(seat, &play)
    }

    /// Like `play_turn`, giving up after `limit`.
    ///
    /// On timeout the turn is not advanced and nothing is mutated.
    pub async fn play_turn_timeout(&mut self, limit: Duration) -> Result<TurnOutcome, DealerError> {
        let seat = self.roster.current_index().ok_or(DealerError::NoPlayers)?;
        let play = self.decide(seat, Some(limit)).await?;
        self.accept(seat, &play)
    }

    async fn decide(&mut self, seat: usize, limit: Option<Duration>) -> Result<Play, DealerError> {
        let player = self.roster.at_mut(seat).ok_or(DealerError::NoPlayers)?;
        let name = player.name().to_string();
        let decision = player.decide_play(&self.state);

        match limit {
            None => Ok(decision.await),
            Some(limit) => match tokio::time::timeout(limit, decision).await {
                Ok(play) => Ok(play),
                Err(_) => {
                    log::warn!("player {} did not decide within {:?}", name, limit);
                    Err(DealerError::DecisionTimeout(name))
                }
            },
        }
    }

    /// Validate, then move the play from the player's hand to the pile and
    /// advance the turn.
    fn accept(&mut self, seat: usize, cards: &[Card]) -> Result<TurnOutcome, DealerError> {
        let player = self.roster.at_mut(seat).ok_or(DealerError::NoPlayers)?;
        let name = player.name().to_string();

        if let Err(err) = rules::validate_play(&self.state, cards) {
            log::warn!("rejected play {:?} from {}: {}", cards, name, err);
            return Err(err);
        }
        if !player.hand_mut().remove_cards(cards) {
            log::warn!("rejected play {:?} from {}: cards not in hand", cards, name);
            return Err(DealerError::CardsNotInHand(name));
        }

        let previous = self.state.accept_play(cards);
        self.discard.extend(previous);
        self.roster.advance();

        let turn = self.state.turn();
        let next = self.current_player().unwrap_or_default().to_string();
        log::debug!("turn {}: {} played {:?}, {} is next", turn, name, cards, next);

        self.emit(GameEvent::PlayAccepted {
            player: name.clone(),
            cards: cards.to_vec(),
            turn,
        });
        self.emit(GameEvent::TurnChanged {
            player: next.clone(),
            turn,
        });

        Ok(TurnOutcome {
            player: name,
            cards: cards.to_vec(),
            turn,
            next,
        })
    }
}

impl<D: DeckProvider> std::fmt::Debug for Dealer<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dealer")
            .field("config", &self.config)
            .field("deck_len", &self.deck.len())
            .field("roster", &self.roster)
            .field("state", &self.state)
            .field("discard", &self.discard.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};
    use crate::players::Scripted;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn dealer_with(names: &[&str], deck: &str) -> Dealer {
        let mut dealer = Dealer::new(Deck::from_cards(cards(deck)), DealerConfig::default());
        for name in names {
            dealer.add_player(*name, Scripted::default()).unwrap();
        }
        dealer
    }

    #[test]
    fn test_new_builds_deck() {
        let dealer = Dealer::standard(DealerConfig::default());
        assert_eq!(dealer.deck_len(), 52);
        assert_eq!(dealer.state().turn(), 0);
        assert!(dealer.current_player().is_none());
    }

    #[test]
    #[should_panic(expected = "invalid dealer config")]
    fn test_new_rejects_bad_config() {
        let _ = Dealer::standard(DealerConfig::default().with_max_players(0));
    }

    #[test]
    fn test_table_full() {
        let mut dealer = Dealer::standard(DealerConfig::default().with_max_players(2));
        dealer.add_player("ann", Scripted::default()).unwrap();
        dealer.add_player("bob", Scripted::default()).unwrap();
        assert_eq!(
            dealer.add_player("cid", Scripted::default()),
            Err(DealerError::TableFull(2))
        );
        assert_eq!(dealer.player_count(), 2);
    }

    #[test]
    fn test_deal_uneven_favours_early_seats() {
        let mut dealer = dealer_with(&["ann", "bob", "cid"], "2C 3C 4C 5C 6C 7C 8C");
        dealer.deal().unwrap();

        let sizes: Vec<_> = dealer.players().map(|p| p.hand().len()).collect();
        assert_eq!(sizes, vec![3, 2, 2]);
        assert_eq!(dealer.deck_len(), 0);
    }

    #[test]
    fn test_deal_order_is_round_robin() {
        let mut dealer = dealer_with(&["ann", "bob"], "2C 3C 4C 5C");
        dealer.deal().unwrap();

        // top of the deck is the end of the list
        assert_eq!(dealer.player("ann").unwrap().hand().cards(), cards("5C 3C").as_slice());
        assert_eq!(dealer.player("bob").unwrap().hand().cards(), cards("4C 2C").as_slice());
    }

    #[test]
    fn test_deal_player_unknown() {
        let mut dealer = dealer_with(&["ann"], "2C");
        assert_eq!(
            dealer.deal_player("zed", cards("3C")),
            Err(DealerError::UnknownPlayer("zed".into()))
        );
        dealer.deal_player("ann", cards("3C 4C")).unwrap();
        assert_eq!(dealer.player("ann").unwrap().hand().len(), 2);
    }

    #[test]
    fn test_submit_play_out_of_turn() {
        let mut dealer = dealer_with(&["ann", "bob"], "2C 3C 4C 5C");
        dealer.deal().unwrap();

        assert_eq!(
            dealer.submit_play("bob", &cards("4C")),
            Err(DealerError::NotYourTurn {
                expected: "ann".into(),
                got: "bob".into()
            })
        );
        assert_eq!(
            dealer.submit_play("zed", &cards("4C")),
            Err(DealerError::UnknownPlayer("zed".into()))
        );
    }

    #[test]
    fn test_submit_play_cards_not_held() {
        let mut dealer = dealer_with(&["ann", "bob"], "2C 3C 4C 5C");
        dealer.deal().unwrap();

        assert_eq!(
            dealer.submit_play("ann", &cards("KD")),
            Err(DealerError::CardsNotInHand("ann".into()))
        );
        assert_eq!(dealer.state().turn(), 0);
        assert_eq!(dealer.player("ann").unwrap().hand().len(), 2);
    }

    #[test]
    fn test_submit_play_accepts_and_advances() {
        let mut dealer = dealer_with(&["ann", "bob"], "2C 3C 4C 5C");
        dealer.deal().unwrap();

        let outcome = dealer.submit_play("ann", &cards("3C")).unwrap();
        assert_eq!(outcome.turn, 1);
        assert_eq!(outcome.next, "bob");
        assert_eq!(dealer.current_player(), Some("bob"));

        // bob holds 4C 2C; 2C does not beat 3C
        assert_eq!(
            dealer.submit_play("bob", &cards("2C")),
            Err(DealerError::InvalidPlay {
                required: 1,
                min_rank: Rank::new(3)
            })
        );

        dealer.submit_play("bob", &cards("4C")).unwrap();
        assert_eq!(dealer.discard(), cards("3C").as_slice());
        assert_eq!(dealer.total_cards(), 4);
    }

    #[test]
    fn test_remove_player_discards_hand() {
        let mut dealer = dealer_with(&["ann", "bob"], "2C 3C 4C 5C");
        dealer.deal().unwrap();

        let removed = dealer.remove_player("ann").unwrap();
        assert_eq!(removed.name(), "ann");
        assert!(removed.hand().is_empty());
        assert_eq!(dealer.discard().len(), 2);
        assert_eq!(dealer.current_player(), Some("bob"));
        assert_eq!(dealer.total_cards(), 4);
    }

    #[test]
    fn test_skip_turn_keeps_pile() {
        let mut dealer = dealer_with(&["ann", "bob", "cid"], "2C 3C 4C 5C 6C 7C");
        dealer.deal().unwrap();
        dealer.submit_play("ann", &cards("7C")).unwrap();

        assert_eq!(dealer.skip_turn(), Ok("cid".to_string()));
        assert_eq!(dealer.current_player(), Some("cid"));
        assert_eq!(dealer.state().turn(), 1);
        assert_eq!(dealer.state().pile().len(), 1);

        assert_eq!(dealer.skip_turn(), Ok("ann".to_string()));
    }

    #[test]
    fn test_skip_turn_without_players() {
        let mut dealer = Dealer::standard(DealerConfig::default());
        assert_eq!(dealer.skip_turn(), Err(DealerError::NoPlayers));
    }

    #[test]
    fn test_restored_rng_replays_shuffle() {
        let mut original = Dealer::standard(DealerConfig::default().with_seed(3));
        original.init_deck();
        let snapshot = original.rng_state();
        original.init_deck();

        let mut replay = Dealer::standard(DealerConfig::default().with_seed(99));
        replay.restore_rng(&snapshot);
        replay.init_deck();

        assert_eq!(replay.deck().cards(), original.deck().cards());
    }
}
