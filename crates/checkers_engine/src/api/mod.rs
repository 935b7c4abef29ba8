//! Public API for the checkers engine
//!
//! High-level entry points for front-ends: game lifecycle, validated move
//! execution, and AI move computation.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, is_legal_move)
//! - `state` - Game state queries and AI (get_game_state, compute_move, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game, Game};
pub use moves::{do_move, is_legal_move, legal_moves_for};
pub use state::{compute_continuation, compute_move, get_game_state, reply, search_position};
