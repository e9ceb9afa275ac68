//! Application Services
//!
//! Orchestration over game snapshots for the outer layers (CLI, web handlers).

mod game;

pub use game::*;
