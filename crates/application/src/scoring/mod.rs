//! Scoring module - Distance evaluation, normalization and ranking
//!
//! Per-question distances come from the evaluators; the engine normalizes
//! them across all participants and builds the leaderboard.

mod engine;
mod evaluators;
mod scrabble;

pub use engine::*;
pub use evaluators::*;
pub use scrabble::*;
