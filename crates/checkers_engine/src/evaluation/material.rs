//! Material evaluation
//!
//! Counts piece values for both sides.

use super::EvalWeights;
use crate::board::Board;
use crate::types::*;

/// Material of `color` minus material of its opponent
pub fn evaluate_material(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    side_material(board, color, weights) - side_material(board, color.opponent(), weights)
}

pub(crate) fn side_material(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    board
        .pieces_of(color)
        .map(|(_, piece)| weights.piece_value(piece.is_king()))
        .sum()
}
