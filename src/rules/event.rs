//! Game events for presentation layers.
//!
//! The engine appends an event for every state change it makes. A renderer
//! can poll `GameEngine::drain_events` after each call instead of diffing the
//! board itself.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Rank};
use crate::core::PlayerId;

/// Something that happened during the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was flipped face-up.
    CardRevealed {
        card: CardId,
        rank: Rank,
        player: PlayerId,
    },

    /// The second pick matched the first. The cards stay with `player`.
    PairMatched {
        player: PlayerId,
        rank: Rank,
        cards: [CardId; 2],
    },

    /// The second pick did not match. The cards flip back on the next advance.
    PairMissed {
        player: PlayerId,
        cards: [CardId; 2],
    },

    /// A mismatch was cleared and play moved to the next player.
    TurnPassed { from: PlayerId, to: PlayerId },

    /// Standings were frozen.
    GameFinished { winners: Vec<PlayerId> },
}

impl GameEvent {
    /// The player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardRevealed { player, .. }
            | GameEvent::PairMatched { player, .. }
            | GameEvent::PairMissed { player, .. } => Some(*player),
            GameEvent::TurnPassed { from, .. } => Some(*from),
            GameEvent::GameFinished { .. } => None,
        }
    }
}
