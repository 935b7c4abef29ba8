//! Single capture hops
//!
//! ## Capture Rules
//!
//! - **Man**: captures in all four diagonal directions (not only forward).
//!   The adjacent square must hold an opponent piece and the square directly
//!   beyond it must be empty.
//! - **King**: scans each diagonal outward. Empty squares are skipped; the
//!   first occupied square must hold an opponent piece, otherwise that
//!   direction is blocked. Every empty square beyond the captured piece, up
//!   to the next obstruction, is a separate landing square and therefore a
//!   separate jump.

use crate::board::Board;
use crate::constants::DIAGONALS;
use crate::types::*;

/// Append every single jump of `piece` from `from` to `moves`
pub fn generate_jumps(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    if !from.is_valid() {
        return;
    }

    for &(dx, dy) in &DIAGONALS {
        if piece.is_king() {
            king_jumps_in_direction(board, from, piece.color, dx, dy, moves);
        } else {
            man_jump_in_direction(board, from, piece.color, dx, dy, moves);
        }
    }
}

fn man_jump_in_direction(
    board: &Board,
    from: Square,
    color: Color,
    dx: i8,
    dy: i8,
    moves: &mut Vec<Move>,
) {
    let Some(captured) = from.offset(dx, dy) else {
        return;
    };
    let Some(to) = captured.offset(dx, dy) else {
        return;
    };
    let is_opponent = board
        .get(captured)
        .is_some_and(|target| target.color != color);
    if is_opponent && board.is_vacant(to) {
        moves.push(Move::Jump { from, to, captured });
    }
}

fn king_jumps_in_direction(
    board: &Board,
    from: Square,
    color: Color,
    dx: i8,
    dy: i8,
    moves: &mut Vec<Move>,
) {
    let mut current = from;
    let captured = loop {
        let Some(next) = current.offset(dx, dy) else {
            return;
        };
        match board.get(next) {
            None => current = next,
            Some(target) if target.color != color => break next,
            Some(_) => return,
        }
    };

    let mut landing = captured;
    while let Some(next) = landing.offset(dx, dy) {
        if !board.is_vacant(next) {
            break;
        }
        moves.push(Move::Jump {
            from,
            to: next,
            captured,
        });
        landing = next;
    }
}

pub fn single_jumps(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    generate_jumps(board, from, piece, &mut moves);
    moves
}

/// True if `piece` has at least one capture from `from`
pub(crate) fn has_jump(board: &Board, from: Square, piece: Piece) -> bool {
    let mut moves = Vec::new();
    for &(dx, dy) in &DIAGONALS {
        if piece.is_king() {
            king_jumps_in_direction(board, from, piece.color, dx, dy, &mut moves);
        } else {
            man_jump_in_direction(board, from, piece.color, dx, dy, &mut moves);
        }
        if !moves.is_empty() {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_man_jump_forward() {
        let mut board = Board::empty();
        board.place(Square::new(2, 5), Piece::man(Color::White));
        board.place(Square::new(3, 4), Piece::man(Color::Black));

        let jumps = single_jumps(&board, Square::new(2, 5), Piece::man(Color::White));
        assert_eq!(
            jumps,
            vec![Move::Jump {
                from: Square::new(2, 5),
                to: Square::new(4, 3),
                captured: Square::new(3, 4),
            }]
        );
    }

    #[test]
    fn test_man_captures_backwards() {
        let mut board = Board::empty();
        board.place(Square::new(3, 2), Piece::man(Color::White));
        board.place(Square::new(4, 3), Piece::man(Color::Black));

        let jumps = single_jumps(&board, Square::new(3, 2), Piece::man(Color::White));
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].to(), Square::new(5, 4));
    }

    #[test]
    fn test_man_cannot_jump_friend_or_into_occupied() {
        let mut board = Board::empty();
        board.place(Square::new(2, 5), Piece::man(Color::White));
        board.place(Square::new(3, 4), Piece::man(Color::White));
        board.place(Square::new(1, 4), Piece::man(Color::Black));
        board.place(Square::new(0, 3), Piece::man(Color::Black));

        assert!(single_jumps(&board, Square::new(2, 5), Piece::man(Color::White)).is_empty());
        assert!(!has_jump(&board, Square::new(2, 5), Piece::man(Color::White)));
    }

    #[test]
    fn test_king_long_jump_lands_on_every_empty_square() {
        let mut board = Board::empty();
        let from = Square::new(0, 7);
        board.place(from, Piece::king(Color::White));
        board.place(Square::new(3, 4), Piece::man(Color::Black));

        let jumps = single_jumps(&board, from, Piece::king(Color::White));
        let landings: Vec<Square> = jumps.iter().map(|mv| mv.to()).collect();
        assert_eq!(
            landings,
            vec![
                Square::new(4, 3),
                Square::new(5, 2),
                Square::new(6, 1),
                Square::new(7, 0),
            ]
        );
        assert!(jumps
            .iter()
            .all(|mv| mv.captured() == Some(Square::new(3, 4))));
    }

    #[test]
    fn test_king_jump_stops_at_obstruction() {
        let mut board = Board::empty();
        let from = Square::new(0, 7);
        board.place(from, Piece::king(Color::Black));
        board.place(Square::new(2, 5), Piece::man(Color::White));
        board.place(Square::new(5, 2), Piece::man(Color::Black));

        let jumps = single_jumps(&board, from, Piece::king(Color::Black));
        let landings: Vec<Square> = jumps.iter().map(|mv| mv.to()).collect();
        assert_eq!(landings, vec![Square::new(3, 4), Square::new(4, 3)]);
    }

    #[test]
    fn test_king_blocked_by_two_in_a_row() {
        let mut board = Board::empty();
        let from = Square::new(0, 7);
        board.place(from, Piece::king(Color::White));
        board.place(Square::new(2, 5), Piece::man(Color::Black));
        board.place(Square::new(3, 4), Piece::man(Color::Black));

        assert!(single_jumps(&board, from, Piece::king(Color::White)).is_empty());
    }
}
