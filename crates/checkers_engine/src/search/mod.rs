//! Adversarial search
//!
//! Iterative-deepening minimax with alpha-beta pruning, null-window
//! re-search, a transposition table keyed by the Zobrist position key, and
//! a capture-only quiescence extension.
//!
//! ## Module Organization
//!
//! - `params` - Search parameters and difficulty presets
//! - `tt` - Transposition table
//! - `context` - Per-search state, timeout signal and statistics
//! - `ordering` - Move ordering heuristics
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `quiescence` - Quiescence search to avoid horizon effect
//! - `iterative` - Iterative deepening driver

mod alphabeta;
mod context;
mod iterative;
mod ordering;
mod params;
mod quiescence;
mod tt;

pub use context::SearchStats;
pub use iterative::{SearchReport, Searcher};
pub use params::{Difficulty, SearchParams};
pub use tt::{Bound, TranspositionTable, TtEntry};
