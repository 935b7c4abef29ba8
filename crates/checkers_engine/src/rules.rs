//! Promotion and game-end detection

use crate::board::Board;
use crate::move_gen::has_any_move;
use crate::types::*;

/// True iff a man of `color` landing on `row` is crowned
pub fn promotes(color: Color, row: i8) -> bool {
    row == color.promotion_row()
}

/// Decide the game from the board alone
///
/// - both sides without pieces: draw
/// - one side without pieces: the other side wins
/// - both sides with pieces but no move available: draw
/// - one side with pieces but no move available: that side loses
/// - otherwise undecided
pub fn outcome(board: &Board) -> Outcome {
    let white_pieces = board.count(Color::White);
    let black_pieces = board.count(Color::Black);

    match (white_pieces, black_pieces) {
        (0, 0) => return Outcome::Draw,
        (0, _) => return Outcome::BlackWins,
        (_, 0) => return Outcome::WhiteWins,
        _ => {}
    }

    let white_can_move = has_any_move(board, Color::White);
    let black_can_move = has_any_move(board, Color::Black);

    match (white_can_move, black_can_move) {
        (false, false) => Outcome::Draw,
        (false, true) => Outcome::BlackWins,
        (true, false) => Outcome::WhiteWins,
        (true, true) => Outcome::Undecided,
    }
}
