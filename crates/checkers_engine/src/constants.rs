//! # Checkers Engine Constants - Board Geometry & Search Limits
//!
//! ## Overview
//!
//! This module centralizes the fixed values used throughout the engine: board geometry, the four
//! diagonal direction vectors, score sentinels used by the alpha-beta search, and the default sizes
//! of the search's working structures. Evaluation weights are *not* here; they are tunable and live
//! in [`crate::evaluation::EvalWeights`] so that difficulty presets can swap them wholesale.
//!
//! ## Board Geometry
//!
//! The board is an 8×8 grid addressed by `(x, y)` with `y = 0` at the top. Only squares where
//! `x + y` is odd are playable. Pieces of color [`Color::White`](crate::types::Color) start on
//! rows 5-7 and move toward row 0; [`Color::Black`](crate::types::Color) starts on rows 0-2 and
//! moves toward row 7.
//!
//! ## Direction Vectors
//!
//! Every move in checkers is diagonal, so move generation only ever walks the four vectors in
//! [`DIAGONALS`]. A man steps one square forward (two of the four vectors, chosen by color) and
//! captures in all four; a king slides any distance in all four.
//!
//! ## Score Sentinels
//!
//! Scores are `i32` from the maximizing side's perspective:
//!
//! - **Static evaluations** stay well within ±10,000.
//! - **Forced results** are `±(WIN_SCORE + remaining_depth)`, so a win found with more depth left
//!   (i.e. sooner) outranks a later one, and a loss found late outranks an early one.
//! - **`SCORE_INF`** bounds the initial alpha-beta window and is never returned as a real score.

/// Width and height of the board
pub const BOARD_SIZE: i8 = 8;

/// Number of cells in the board array (playable or not)
pub const SQUARE_COUNT: usize = 64;

/// Rows filled with men for each side in the opening position
pub const STARTING_ROWS: i8 = 3;

/// Diagonal direction vectors `(dx, dy)`
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// First and last row/column of the 4×4 centre block used by evaluation and ordering
pub const CENTRE_MIN: i8 = 2;
pub const CENTRE_MAX: i8 = 5;

/// Window bound; larger than any score the search can produce
pub const SCORE_INF: i32 = 1_000_000;

/// Base magnitude of a forced win/loss (biased by remaining depth)
pub const WIN_SCORE: i32 = 100_000;

/// Hard ceiling on iterative deepening regardless of the requested depth
pub const MAX_SEARCH_DEPTH: u32 = 64;

/// Nodes visited between two wall-clock checks (main search and quiescence share the counter)
pub const NODE_CHECK_INTERVAL: u64 = 1024;

/// Transposition table slots used when no explicit capacity is configured
pub const DEFAULT_TT_CAPACITY: usize = 1 << 16;

/// Largest transposition table the search will allocate, whatever is configured
pub const MAX_TT_CAPACITY: usize = 1 << 20;

/// Seed for the Zobrist key table; fixed so hashes are reproducible across runs
pub const ZOBRIST_SEED: u64 = 0x5EED_C4EC_4E55_0001;

/// Move-ordering bonus for a man that lands on its promotion row
pub const ORDER_PROMOTION_BONUS: i32 = 500;

/// Move-ordering multiplier applied to the value of a captured piece
pub const ORDER_CAPTURE_MULTIPLIER: i32 = 10;

/// Move-ordering bonus for a king moving into the centre block
pub const ORDER_CENTRE_BONUS: i32 = 20;

/// Move-ordering bonus for a man stepping toward its promotion row
pub const ORDER_FORWARD_BONUS: i32 = 10;
