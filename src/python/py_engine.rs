//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::cards::CardId;
use crate::core::DEFAULT_RANK_COUNT;
use crate::rules::{Advance, GameEngine, GameEngineBuilder, Pick};

use super::py_core::{to_py_err, PyPlayerId, PyPlayerResult};

/// Python wrapper for GameEngine.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player_count: Number of players (1-255)
    /// - rank_count: Distinct ranks; the board holds twice as many cards
    /// - seed: Optional shuffle seed for reproducible boards
    #[new]
    #[pyo3(signature = (player_count = 2, rank_count = DEFAULT_RANK_COUNT, seed = None))]
    fn new(player_count: usize, rank_count: usize, seed: Option<u64>) -> PyResult<Self> {
        let mut builder = GameEngineBuilder::new()
            .player_count(player_count)
            .rank_count(rank_count);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let engine = builder.build().map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Flip a card. Returns False if the call was ignored.
    fn select_card(&mut self, card_id: u32) -> PyResult<bool> {
        let pick = self
            .engine
            .select_card(CardId::new(card_id))
            .map_err(to_py_err)?;
        Ok(pick != Pick::Ignored)
    }

    /// Resolve the turn. Returns False if the call was ignored.
    fn advance_turn(&mut self) -> bool {
        self.engine.advance_turn() != Advance::Ignored
    }

    /// Deal a fresh board with the same settings.
    fn restart(&mut self) {
        self.engine.restart();
    }

    fn is_turn_resolved(&self) -> bool {
        self.engine.is_turn_resolved()
    }

    fn is_game_complete(&self) -> bool {
        self.engine.is_game_complete()
    }

    /// Match hint for the resolved turn, None otherwise.
    #[getter]
    fn matched(&self) -> Option<bool> {
        self.engine.last_match()
    }

    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.engine.current_player())
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.engine.player_count()
    }

    /// Board as `(id, rank, opener)` tuples; opener is None when face-down.
    fn cards(&self) -> Vec<(u32, u32, Option<usize>)> {
        self.engine
            .cards()
            .iter()
            .map(|c| (c.id.raw(), c.rank.value(), c.opener.map(|p| p.index())))
            .collect()
    }

    /// Final standings, None until the game is finalized.
    fn result(&self) -> Option<Vec<PyPlayerResult>> {
        self.engine
            .result()
            .map(|r| r.entries().iter().copied().map(PyPlayerResult).collect())
    }

    /// Winning players, None until the game is finalized.
    fn winners(&self) -> Option<Vec<PyPlayerId>> {
        self.engine
            .result()
            .map(|r| r.winners().into_iter().map(PyPlayerId).collect())
    }

    fn __repr__(&self) -> String {
        format!(
            "GameEngine(players={}, cards={}, current={})",
            self.engine.player_count(),
            self.engine.cards().len(),
            self.engine.current_player().index()
        )
    }
}
