//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameError, PlayerId};
use crate::rules::PlayerResult;

/// Map engine errors onto `ValueError`.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Display label, e.g. "Player 1".
    fn label(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// One line of the final standings.
#[pyclass(name = "PlayerResult")]
#[derive(Clone, Debug)]
pub struct PyPlayerResult(pub PlayerResult);

#[pymethods]
impl PyPlayerResult {
    #[getter]
    fn player(&self) -> PyPlayerId {
        PyPlayerId(self.0.player)
    }

    #[getter]
    fn matched_count(&self) -> usize {
        self.0.matched_count
    }

    #[getter]
    fn tries_taken(&self) -> u32 {
        self.0.tries_taken
    }

    fn __repr__(&self) -> String {
        format!(
            "PlayerResult(player={}, matched={}, tries={})",
            self.0.player.index(),
            self.0.matched_count,
            self.0.tries_taken
        )
    }
}
