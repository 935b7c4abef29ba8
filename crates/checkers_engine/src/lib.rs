//! # Checkers Engine
//!
//! Rules and AI for 8×8 checkers with mandatory capture, multi-jumps and
//! flying kings.
//!
//! ## Layout
//!
//! - [`board`] / [`types`] - Board model and value types
//! - [`move_gen`] / [`rules`] / [`make_unmake`] - Rule engine
//! - [`hash`] - Zobrist keys and incremental position hashing
//! - [`evaluation`] - Static evaluator and weight presets
//! - [`search`] - Iterative-deepening alpha-beta with quiescence
//! - [`api`] - Game lifecycle, validated moves, AI entry points
//!
//! ## Example
//!
//! ```rust
//! use checkers_engine::{compute_move, Board, Color, Difficulty};
//!
//! let board = Board::initial();
//! let mv = compute_move(&board, Color::White, &Difficulty::Easy.params());
//! assert!(mv.is_some());
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod make_unmake;
pub mod move_gen;
pub mod rules;
pub mod search;
pub mod types;

pub use api::*;
pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use evaluation::{evaluate, EvalWeights};
pub use make_unmake::{apply_move, make_move, unmake_move, MoveEffect, UndoRecord};
pub use move_gen::{
    all_legal_moves, capture_moves, continuation_moves, generate_moves, has_any_move,
    has_mandatory_jump, jump_sequences, legal_moves, regular_moves, selectable_jumps,
    single_jumps,
};
pub use rules::{outcome, promotes};
pub use search::{Difficulty, SearchParams, SearchReport, SearchStats, Searcher};
pub use types::*;
