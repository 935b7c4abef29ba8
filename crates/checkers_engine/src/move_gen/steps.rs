//! Non-capturing moves
//!
//! ## Movement Rules
//!
//! - **Man**: one square diagonally forward (two candidate squares, the
//!   forward direction depends on color) onto an empty square
//! - **King**: any number of empty squares along each of the four diagonals,
//!   stopping before the first occupied square

use crate::board::Board;
use crate::constants::DIAGONALS;
use crate::types::*;

/// Append the quiet moves of `piece` standing on `from` to `moves`
///
/// # Arguments
///
/// * `board` - Position to generate from
/// * `from` - Square the piece stands on
/// * `piece` - The moving piece (its rank decides man or king movement)
/// * `moves` - Output vector to append steps to
pub fn generate_steps(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    if !from.is_valid() {
        return;
    }

    if piece.is_king() {
        for &(dx, dy) in &DIAGONALS {
            let mut current = from;
            while let Some(next) = current.offset(dx, dy) {
                if !board.is_vacant(next) {
                    break;
                }
                moves.push(Move::Step { from, to: next });
                current = next;
            }
        }
    } else {
        let dy = piece.color.forward();
        for dx in [-1, 1] {
            if let Some(to) = from.offset(dx, dy) {
                if board.is_vacant(to) {
                    moves.push(Move::Step { from, to });
                }
            }
        }
    }
}

pub fn regular_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    generate_steps(board, from, piece, &mut moves);
    moves
}

/// True if `piece` has at least one quiet move (no allocation)
pub(crate) fn has_step(board: &Board, from: Square, piece: Piece) -> bool {
    if piece.is_king() {
        DIAGONALS.iter().any(|&(dx, dy)| {
            from.offset(dx, dy)
                .is_some_and(|next| board.is_vacant(next))
        })
    } else {
        let dy = piece.color.forward();
        [-1, 1].iter().any(|&dx| {
            from.offset(dx, dy)
                .is_some_and(|next| board.is_vacant(next))
        })
    }
}
