//! Error types for caller-contract violations.
//!
//! The engine does no I/O, so every error here is a caller bug surfaced
//! synchronously. Out-of-turn calls are not errors: they are no-ops.

use thiserror::Error;

use crate::cards::CardId;

/// Errors returned by engine construction and card selection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// `select_card` was given an id that is not in the deck.
    #[error("no card with id {0} in the deck")]
    InvalidCardReference(CardId),

    /// Player count was zero or above the supported maximum.
    #[error("invalid player count {0}: must be between 1 and 255")]
    InvalidPlayerCount(usize),

    /// Rank count was zero or too large to number every card.
    #[error("invalid rank count {0}: must be at least 1")]
    InvalidRankCount(usize),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidCardReference(CardId::new(99)).to_string(),
            "no card with id 99 in the deck"
        );
        assert_eq!(
            GameError::InvalidPlayerCount(0).to_string(),
            "invalid player count 0: must be between 1 and 255"
        );
        assert_eq!(
            GameError::InvalidRankCount(0).to_string(),
            "invalid rank count 0: must be at least 1"
        );
    }
}
