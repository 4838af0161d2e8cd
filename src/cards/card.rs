//! Card identity and face state.
//!
//! A card's `id` and `rank` are fixed when the deck is generated. The only
//! thing that changes during a game is `opener`: which player currently holds
//! the card face-up, or `None` while it lies face-down.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Unique card identifier, assigned in generation order and stable for the
/// lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number printed on a card. Ranks start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u32);

impl Rank {
    /// Create a new rank.
    #[must_use]
    pub const fn new(rank: u32) -> Self {
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity.
    pub id: CardId,

    /// Printed rank; shared with exactly one other card.
    pub rank: Rank,

    /// Player holding the card face-up, `None` if face-down.
    pub opener: Option<PlayerId>,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: CardId, rank: Rank) -> Self {
        Self {
            id,
            rank,
            opener: None,
        }
    }

    /// Is the card showing its rank?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.opener.is_some()
    }

    /// The rank if face-up, `None` if concealed.
    ///
    /// This is what a renderer shows: the number or a placeholder.
    #[must_use]
    pub fn visible_rank(&self) -> Option<Rank> {
        self.opener.map(|_| self.rank)
    }
}
