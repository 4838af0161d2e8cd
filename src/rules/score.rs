//! Per-player scoring.
//!
//! Only tries are stored. Matched counts are always recomputed from the deck
//! so the two can never disagree.

use serde::{Deserialize, Serialize};

use super::result::{GameResult, PlayerResult};
use crate::cards::Deck;
use crate::core::{PlayerId, PlayerMap};

/// Tries taken by each player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    tries_taken: PlayerMap<u32>,
}

impl ScoreBoard {
    /// Zeroed scores for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            tries_taken: PlayerMap::with_default(player_count),
        }
    }

    /// Pairs flipped by a player so far.
    #[must_use]
    pub fn tries_taken(&self, player: PlayerId) -> u32 {
        self.tries_taken[player]
    }

    /// Cards a player holds face-up on the given deck.
    #[must_use]
    pub fn matched_count(&self, deck: &Deck, player: PlayerId) -> usize {
        deck.opened_by(player)
    }

    pub(crate) fn record_try(&mut self, player: PlayerId) {
        self.tries_taken[player] += 1;
    }

    /// Standings for every player against the given deck.
    #[must_use]
    pub fn standings(&self, deck: &Deck) -> GameResult {
        let entries = self
            .tries_taken
            .iter()
            .map(|(player, &tries_taken)| PlayerResult {
                player,
                matched_count: self.matched_count(deck, player),
                tries_taken,
            })
            .collect();

        GameResult::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_tries_start_at_zero() {
        let scores = ScoreBoard::new(3);
        for player in PlayerId::all(3) {
            assert_eq!(scores.tries_taken(player), 0);
        }
    }

    #[test]
    fn test_standings_derive_matches_from_deck() {
        let mut deck = Deck::ordered(2);
        let mut scores = ScoreBoard::new(2);
        let p1 = PlayerId::new(1);

        deck.set_opener(CardId::new(2), Some(p1));
        deck.set_opener(CardId::new(3), Some(p1));
        scores.record_try(p1);
        scores.record_try(p1);

        let standings = scores.standings(&deck);
        let lines = standings.entries();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matched_count, 0);
        assert_eq!(lines[0].tries_taken, 0);
        assert_eq!(lines[1].matched_count, 2);
        assert_eq!(lines[1].tries_taken, 2);
        assert_eq!(scores.matched_count(&deck, p1), 2);
    }
}
