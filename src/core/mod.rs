//! Core engine types: players, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{fisher_yates, GameRng};
pub use config::{MatchConfig, DEFAULT_PLAYER_COUNT, DEFAULT_RANK_COUNT};
pub use error::{GameError, Result};
