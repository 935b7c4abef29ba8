//! Rule engine: move generation under the mandatory-capture rule
//!
//! ## Module Structure
//!
//! - [`steps`] - quiet moves for men and kings
//! - [`jumps`] - single capture hops (men in all four directions, flying kings)
//! - [`sequences`] - full multi-jump sequences and their selectable first hops
//!
//! ## Mandatory Capture
//!
//! If any piece of a color can capture, that color must capture: every piece
//! of that color is limited to its jumps, and a piece without a jump has no
//! legal move at all. The obligation is derived from the board every time it
//! is asked for, never cached, so it is always correct after a move or undo.
//!
//! ## Selectable Moves
//!
//! A piece's selectable jumps are the de-duplicated first hops of its
//! maximal capture sequences. Every single jump begins at least one maximal
//! sequence, and sequences are discovered in single-jump order, so that set
//! equals [`jumps::single_jumps`] in the same order; the generators below use
//! the single-jump list directly rather than enumerating whole sequences.
//!
//! None of these functions fail: off-board squares, empty squares or a
//! `piece` that is not the one on `square` simply produce no moves.

pub mod jumps;
pub mod sequences;
pub mod steps;

pub use jumps::single_jumps;
pub use sequences::{first_hops, jump_sequences, JumpChain};
pub use steps::regular_moves;

use crate::board::Board;
use crate::types::*;

/// True iff some piece of `color` has at least one capture
pub fn has_mandatory_jump(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(square, piece)| jumps::has_jump(board, square, piece))
}

/// Selectable moves of `piece` on `square`, honouring the capture obligation
///
/// When its color must capture, only this piece's jumps are returned (empty
/// if it has none even though another piece can capture). Otherwise its jumps
/// are returned if it has any, and its quiet moves if not.
pub fn legal_moves(board: &Board, square: Square, piece: Piece) -> Vec<Move> {
    let mandatory = has_mandatory_jump(board, piece.color);
    piece_moves(board, square, piece, mandatory)
}

fn piece_moves(board: &Board, square: Square, piece: Piece, mandatory: bool) -> Vec<Move> {
    if board.get(square) != Some(piece) {
        return Vec::new();
    }

    let jumps = single_jumps(board, square, piece);
    if mandatory || !jumps.is_empty() {
        jumps
    } else {
        regular_moves(board, square, piece)
    }
}

/// Selectable capture hops of `piece`, equal to the first hops of its sequences
pub fn selectable_jumps(board: &Board, square: Square, piece: Piece) -> Vec<Move> {
    if board.get(square) != Some(piece) {
        return Vec::new();
    }
    single_jumps(board, square, piece)
}

/// Every selectable move for `color`, in board-scan order
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mandatory = has_mandatory_jump(board, color);
    let mut moves = Vec::new();
    for (square, piece) in board.pieces_of(color) {
        if mandatory {
            jumps::generate_jumps(board, square, piece, &mut moves);
        } else {
            steps::generate_steps(board, square, piece, &mut moves);
        }
    }
    moves
}

/// Next hops for the piece on `square` while it is in the middle of a chain
pub fn continuation_moves(board: &Board, square: Square) -> Vec<Move> {
    match board.get(square) {
        Some(piece) => single_jumps(board, square, piece),
        None => Vec::new(),
    }
}

/// Moves for the side to move, restricted to the locked piece mid-chain
pub fn generate_moves(board: &Board, color: Color, chain: Option<Square>) -> Vec<Move> {
    match chain {
        Some(square) => continuation_moves(board, square)
            .into_iter()
            .filter(|mv| board.get(mv.from()).is_some_and(|piece| piece.color == color))
            .collect(),
        None => all_legal_moves(board, color),
    }
}

/// Capture moves only; empty when the side to move has nothing to take
pub fn capture_moves(board: &Board, color: Color, chain: Option<Square>) -> Vec<Move> {
    match chain {
        Some(_) => generate_moves(board, color, chain),
        None => {
            let mut moves = Vec::new();
            for (square, piece) in board.pieces_of(color) {
                jumps::generate_jumps(board, square, piece, &mut moves);
            }
            moves
        }
    }
}

/// True iff `color` has any jump or quiet move anywhere on the board
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(square, piece)| {
        steps::has_step(board, square, piece) || jumps::has_jump(board, square, piece)
    })
}
