//! # concentration
//!
//! A memory-matching ("concentration") card game engine.
//!
//! Players take turns flipping two face-down cards. A matching pair stays
//! face-up with the player who found it and that player goes again; a miss
//! flips both back and passes the turn. When every card is matched, the
//! player(s) holding the most cards win.
//!
//! ## Design Principles
//!
//! 1. **Plain owned state**: the engine is an ordinary value driven by method
//!    calls. Rendering is left to whoever holds it.
//!
//! 2. **No-ops over errors**: out-of-turn calls (flipping a face-up card,
//!    advancing an unfinished turn) change nothing. Only caller bugs such as
//!    unknown card ids or bad configuration are errors.
//!
//! 3. **Injectable randomness**: the shuffle takes any `rand::Rng`, and the
//!    builder accepts a seed, so games are reproducible in tests.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Cards and the deck
//! - `rules`: Turn state, scoring, results, events, the engine
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, MatchConfig, PlayerId, PlayerMap, Result};

pub use crate::cards::{Card, CardId, Deck, Rank};

pub use crate::rules::{
    Advance, GameEngine, GameEngineBuilder, GameEvent, GameResult, GameView, Outcome, Pick,
    PlayerResult, ScoreBoard, TurnState,
};
