//! Move making and unmaking
//!
//! [`make_move`] validates a move's preconditions against the board and only
//! then mutates it, returning an [`UndoRecord`] that [`unmake_move`] uses to
//! restore the exact prior position (placement, hash, captured piece and
//! rank). The search plays every node on one working board this way; the
//! game controller uses [`apply_move`], which additionally reports whether
//! the moving piece must keep jumping.
//!
//! Validation covers what could corrupt the board: squares on the board, a
//! piece to move, an empty destination on the same diagonal, an open path,
//! and for jumps an opponent piece on the path at the claimed square.
//! Whether the move is *legal* (distance for men, capture obligation) is the
//! rule engine's business.

use tracing::warn;

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::move_gen::single_jumps;
use crate::rules::promotes;
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    /// The moving piece as it stood on `from`
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl UndoRecord {
    /// The moving piece as it stands on the destination
    pub fn landed(&self) -> Piece {
        if self.promoted {
            self.piece.crowned()
        } else {
            self.piece
        }
    }
}

/// What applying a move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffect {
    pub undo: UndoRecord,
    /// The same piece must jump again before the turn passes
    pub continues: bool,
}

impl MoveEffect {
    pub fn captured(&self) -> Option<Piece> {
        self.undo.captured
    }

    pub fn promoted(&self) -> bool {
        self.undo.promoted
    }
}

/// Squares strictly between `from` and `to`, or `None` if they are not on one diagonal
fn diagonal_between(from: Square, to: Square) -> Option<Vec<Square>> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0 || dx.abs() != dy.abs() {
        return None;
    }
    let (step_x, step_y) = (dx.signum(), dy.signum());
    let between = (1..dx.abs())
        .map(|i| Square::new(from.x + step_x * i, from.y + step_y * i))
        .collect();
    Some(between)
}

fn validate(board: &Board, mv: Move) -> EngineResult<Piece> {
    let (from, to) = (mv.from(), mv.to());
    for square in [from, to] {
        if !square.is_valid() {
            return Err(EngineError::InvalidSquare {
                x: square.x,
                y: square.y,
            });
        }
    }

    let piece = board
        .get(from)
        .ok_or(EngineError::NoPieceAtSquare { square: from })?;
    if !board.is_vacant(to) {
        return Err(EngineError::DestinationOccupied { square: to });
    }

    let between = diagonal_between(from, to).ok_or(EngineError::NotOnDiagonal { from, to })?;

    match mv {
        Move::Step { .. } => {
            if let Some(&square) = between.iter().find(|&&square| !board.is_vacant(square)) {
                return Err(EngineError::PathBlocked { square });
            }
        }
        Move::Jump { captured, .. } => {
            if !between.contains(&captured) {
                return Err(EngineError::CaptureMismatch { square: captured });
            }
            match board.get(captured) {
                Some(target) if target.color != piece.color => {}
                _ => return Err(EngineError::CaptureMismatch { square: captured }),
            }
            if let Some(&square) = between
                .iter()
                .find(|&&square| square != captured && !board.is_vacant(square))
            {
                return Err(EngineError::PathBlocked { square });
            }
        }
    }

    Ok(piece)
}

/// Play `mv` on `board` after checking its preconditions
///
/// On error the board is untouched.
pub fn make_move(board: &mut Board, mv: Move) -> EngineResult<UndoRecord> {
    let piece = validate(board, mv)?;

    board.remove(mv.from());
    let captured = mv.captured().and_then(|square| board.remove(square));
    board.place(mv.to(), piece);

    let promoted = !piece.is_king() && promotes(piece.color, mv.to().y);
    if promoted {
        board.promote(mv.to());
    }

    Ok(UndoRecord {
        mv,
        piece,
        captured,
        promoted,
    })
}

/// Restore the position from before the move recorded in `undo`
pub fn unmake_move(board: &mut Board, undo: &UndoRecord) {
    board.remove(undo.mv.to());
    board.place(undo.mv.from(), undo.piece);
    if let (Some(square), Some(piece)) = (undo.mv.captured(), undo.captured) {
        board.place(square, piece);
    }
}

/// True if the piece that just moved is obliged to keep jumping
///
/// Only a jump that did not crown the piece can continue, and only while the
/// piece has another capture from its landing square.
pub fn chain_continues(board: &Board, undo: &UndoRecord) -> bool {
    undo.mv.is_jump()
        && !undo.promoted
        && !single_jumps(board, undo.mv.to(), undo.landed()).is_empty()
}

/// Play `mv` and report whether the same piece must continue jumping
pub fn apply_move(board: &mut Board, mv: Move) -> EngineResult<MoveEffect> {
    let undo = make_move(board, mv).inspect_err(|err| {
        warn!("Rejected move {}: {}", mv, err);
    })?;
    let continues = chain_continues(board, &undo);
    Ok(MoveEffect { undo, continues })
}
