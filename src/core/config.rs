//! Match configuration.
//!
//! A game is described by two numbers: how many players take turns and how
//! many distinct ranks are dealt (each rank appears on exactly two cards).
//! The defaults reproduce the reference board: 12 ranks, 24 cards.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::MAX_PLAYERS;

/// Default number of ranks (24 cards on the board).
pub const DEFAULT_RANK_COUNT: usize = 12;

/// Default number of players.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of players taking turns.
    pub player_count: usize,

    /// Number of distinct ranks; the deck holds `2 * rank_count` cards.
    pub rank_count: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            rank_count: DEFAULT_RANK_COUNT,
        }
    }
}

impl MatchConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(player_count: usize, rank_count: usize) -> Self {
        Self {
            player_count,
            rank_count,
        }
    }

    /// Number of cards a deck built from this configuration holds.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.rank_count * 2
    }

    /// Check the configuration describes a playable game.
    ///
    /// ```
    /// use concentration::core::{GameError, MatchConfig};
    ///
    /// assert!(MatchConfig::new(4, 12).validate().is_ok());
    /// assert_eq!(MatchConfig::new(0, 12).validate(), Err(GameError::InvalidPlayerCount(0)));
    /// assert_eq!(MatchConfig::new(2, 0).validate(), Err(GameError::InvalidRankCount(0)));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }

        // Card ids are u32, two per rank.
        let max_ranks = (u32::MAX / 2) as usize;
        if self.rank_count == 0 || self.rank_count > max_ranks {
            return Err(GameError::InvalidRankCount(self.rank_count));
        }

        Ok(())
    }
}
