//! Final standings.
//!
//! A `GameResult` is captured once, when the game is finalized, and never
//! changes afterwards. Winners are every player tied for the most matched
//! cards, in seat order.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One player's line in the final standings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    /// Cards this player holds face-up at the end.
    pub matched_count: usize,
    /// Pairs this player flipped, matched or not.
    pub tries_taken: u32,
}

/// Who won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A single player holds the most cards.
    Winner(PlayerId),
    /// Several players share the top count.
    Tie(Vec<PlayerId>),
}

impl Outcome {
    /// Check if a player won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            Outcome::Winner(p) => *p == player,
            Outcome::Tie(ps) => ps.contains(&player),
        }
    }
}

/// Frozen standings, one entry per player in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    entries: Vec<PlayerResult>,
}

impl GameResult {
    pub(crate) fn new(entries: Vec<PlayerResult>) -> Self {
        Self { entries }
    }

    /// Standings in seat order.
    #[must_use]
    pub fn entries(&self) -> &[PlayerResult] {
        &self.entries
    }

    /// A single player's line.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerResult> {
        self.entries.get(player.index())
    }

    /// Highest matched count.
    #[must_use]
    pub fn top_count(&self) -> usize {
        self.entries
            .iter()
            .map(|r| r.matched_count)
            .max()
            .unwrap_or(0)
    }

    /// Every player holding the highest matched count, ascending.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let top = self.top_count();
        self.entries
            .iter()
            .filter(|r| r.matched_count == top)
            .map(|r| r.player)
            .collect()
    }

    /// Single winner or tie.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.winners().as_slice() {
            [only] => Outcome::Winner(*only),
            many => Outcome::Tie(many.to_vec()),
        }
    }
}
