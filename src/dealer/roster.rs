//! Seated players and the cyclic turn cursor.
//!
//! Roster order is seating order: it decides deal order and turn order.
//! The cursor always points at a seated player while the roster is
//! non-empty.

use crate::core::Player;
use crate::error::DealerError;

#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    current: usize,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seat a player at the end. Fails if the name is taken.
    pub fn add(&mut self, player: Player) -> Result<(), DealerError> {
        if self.players.contains(&player) {
            return Err(DealerError::DuplicatePlayer(player.name().to_string()));
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove the first player named `name`.
    ///
    /// If that player held the turn, the next player in cyclic order
    /// becomes current.
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let idx = self.position(name)?;
        let player = self.players.remove(idx);

        if idx < self.current {
            self.current -= 1;
        }
        if self.current >= self.players.len() {
            self.current = 0;
        }
        Some(player)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name() == name)
    }

    /// Player at seat `idx`.
    #[must_use]
    pub fn at(&self, idx: usize) -> Option<&Player> {
        self.players.get(idx)
    }

    pub fn at_mut(&mut self, idx: usize) -> Option<&mut Player> {
        self.players.get_mut(idx)
    }

    /// Seat index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.players.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Move the turn to the next seat, wrapping around.
    pub fn advance(&mut self) {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Scripted;

    fn roster(names: &[&str]) -> Roster {
        let mut r = Roster::new();
        for name in names {
            r.add(Player::new(*name, Box::new(Scripted::default()))).unwrap();
        }
        r
    }

    fn names(r: &Roster) -> Vec<&str> {
        r.iter().map(Player::name).collect()
    }

    #[test]
    fn test_add_duplicate() {
        let mut r = roster(&["ann", "bob"]);
        let err = r.add(Player::new("ann", Box::new(Scripted::default())));
        assert_eq!(err, Err(DealerError::DuplicatePlayer("ann".into())));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_advance_wraps() {
        let mut r = roster(&["ann", "bob", "cid"]);
        assert_eq!(r.current().unwrap().name(), "ann");
        r.advance();
        r.advance();
        assert_eq!(r.current().unwrap().name(), "cid");
        r.advance();
        assert_eq!(r.current().unwrap().name(), "ann");
    }

    #[test]
    fn test_remove_before_current_keeps_turn() {
        let mut r = roster(&["ann", "bob", "cid"]);
        r.advance(); // bob
        r.remove("ann");
        assert_eq!(r.current().unwrap().name(), "bob");
    }

    #[test]
    fn test_remove_current_passes_turn() {
        let mut r = roster(&["ann", "bob", "cid"]);
        r.advance(); // bob
        r.remove("bob");
        assert_eq!(r.current().unwrap().name(), "cid");
    }

    #[test]
    fn test_remove_last_current_wraps() {
        let mut r = roster(&["ann", "bob", "cid"]);
        r.advance();
        r.advance(); // cid
        r.remove("cid");
        assert_eq!(r.current().unwrap().name(), "ann");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut r = roster(&["ann", "bob"]);
        assert!(r.remove("zed").is_none());
        assert_eq!(names(&r), vec!["ann", "bob"]);
    }

    #[test]
    fn test_remove_everyone() {
        let mut r = roster(&["ann"]);
        r.remove("ann");
        assert!(r.is_empty());
        assert!(r.current().is_none());
        assert_eq!(r.current_index(), None);
    }
}
