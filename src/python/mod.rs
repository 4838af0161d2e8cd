//! Python bindings for the concentration engine.
//!
//! Lets a scripting front end drive a game.
//!
//! # Quick Start
//!
//! ```python
//! import concentration as cc
//!
//! game = cc.GameEngine(player_count=2, rank_count=12, seed=42)
//! game.select_card(0)
//! game.select_card(1)
//! if game.is_turn_resolved():
//!     print("match!" if game.matched else "miss")
//!     game.advance_turn()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// concentration: a memory-matching card game engine.
#[pymodule]
fn concentration(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyPlayerResult>()?;
    m.add_class::<PyGameEngine>()?;

    Ok(())
}
