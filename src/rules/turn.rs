//! The pending pair of the current turn.
//!
//! A turn holds zero, one or two picks. The second pick can only be recorded
//! once the first exists, and once both are set the turn is *resolved*: it
//! waits for `advance_turn` before any further card can be flipped.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Cards flipped face-up during the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    picks: SmallVec<[CardId; 2]>,
    matched: bool,
}

impl TurnState {
    /// An empty turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First card flipped this turn.
    #[must_use]
    pub fn first_pick(&self) -> Option<CardId> {
        self.picks.first().copied()
    }

    /// Second card flipped this turn.
    #[must_use]
    pub fn second_pick(&self) -> Option<CardId> {
        self.picks.get(1).copied()
    }

    /// Both picks, once the turn is resolved.
    #[must_use]
    pub fn pair(&self) -> Option<(CardId, CardId)> {
        match self.picks.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Cards flipped so far this turn.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.picks
    }

    /// Have both picks been made?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.picks.len() == 2
    }

    /// Whether the pair matched. Only meaningful while the turn is resolved.
    #[must_use]
    pub fn matched(&self) -> Option<bool> {
        self.is_resolved().then_some(self.matched)
    }

    pub(crate) fn open_first(&mut self, card: CardId) {
        debug_assert!(self.picks.is_empty());
        self.picks.push(card);
    }

    pub(crate) fn open_second(&mut self, card: CardId, matched: bool) {
        debug_assert_eq!(self.picks.len(), 1);
        self.picks.push(card);
        self.matched = matched;
    }

    pub(crate) fn clear(&mut self) {
        self.picks.clear();
        self.matched = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_turn() {
        let turn = TurnState::new();

        assert_eq!(turn.first_pick(), None);
        assert_eq!(turn.second_pick(), None);
        assert!(!turn.is_resolved());
        assert_eq!(turn.matched(), None);
        assert!(turn.pending().is_empty());
    }

    #[test]
    fn test_two_picks_resolve() {
        let mut turn = TurnState::new();

        turn.open_first(CardId::new(4));
        assert_eq!(turn.first_pick(), Some(CardId::new(4)));
        assert!(!turn.is_resolved());
        assert_eq!(turn.pair(), None);

        turn.open_second(CardId::new(9), true);
        assert!(turn.is_resolved());
        assert_eq!(turn.second_pick(), Some(CardId::new(9)));
        assert_eq!(turn.pair(), Some((CardId::new(4), CardId::new(9))));
        assert_eq!(turn.matched(), Some(true));
    }

    #[test]
    fn test_clear() {
        let mut turn = TurnState::new();
        turn.open_first(CardId::new(0));
        turn.open_second(CardId::new(1), true);

        turn.clear();

        assert_eq!(turn, TurnState::new());
    }
}
