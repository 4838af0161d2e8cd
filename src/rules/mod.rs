//! Turn, scoring and result rules.

pub mod turn;
pub mod score;
pub mod result;
pub mod event;
pub mod engine;

pub use turn::TurnState;
pub use score::ScoreBoard;
pub use result::{GameResult, Outcome, PlayerResult};
pub use event::GameEvent;
pub use engine::{Advance, GameEngine, GameEngineBuilder, GameView, Pick};
