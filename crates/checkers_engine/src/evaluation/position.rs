//! Full position evaluation

use super::material::side_material;
use super::EvalWeights;
use crate::board::Board;
use crate::constants::{CENTRE_MAX, CENTRE_MIN, DIAGONALS};
use crate::move_gen::jumps::generate_jumps;
use crate::types::*;

/// Score of `board` from `perspective`'s point of view (positive is good for it)
pub fn evaluate(board: &Board, perspective: Color, weights: &EvalWeights) -> i32 {
    let white = side_score(board, Color::White, weights);
    let black = side_score(board, Color::Black, weights);
    let mut score = white - black;

    if board.total_pieces() < weights.endgame_threshold {
        score += endgame_adjustment(board, weights);
    }

    match perspective {
        Color::White => score,
        Color::Black => -score,
    }
}

fn side_score(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    let mut threats = Vec::new();

    for (square, piece) in board.pieces_of(color) {
        score += weights.piece_value(piece.is_king());

        if in_centre(square) {
            score += weights.centre;
        }

        if piece.is_king() {
            let open = king_mobility(board, square).min(weights.king_mobility_cap);
            score += open * weights.king_mobility;
        } else {
            let advanced = (square.y - color.home_row()).abs() as i32;
            score += advanced * weights.advancement;
            if square.y == color.home_row() {
                score += weights.back_rank;
            }
        }

        generate_jumps(board, square, piece, &mut threats);
    }

    score + threats.len() as i32 * weights.capture_threat
}

/// Amplified material gap plus king activity for the side ahead (White's view)
fn endgame_adjustment(board: &Board, weights: &EvalWeights) -> i32 {
    let gap = side_material(board, Color::White, weights) - side_material(board, Color::Black, weights);
    let mut adjustment = gap * (weights.endgame_material_percent - 100) / 100;

    let leader = match gap.signum() {
        1 => Some(Color::White),
        -1 => Some(Color::Black),
        _ => None,
    };
    if let Some(leader) = leader {
        let mobility: i32 = board
            .pieces_of(leader)
            .filter(|(_, piece)| piece.is_king())
            .map(|(square, _)| king_mobility(board, square))
            .sum();
        let bonus = mobility * weights.endgame_king_mobility;
        adjustment += if leader == Color::White { bonus } else { -bonus };
    }

    adjustment
}

fn in_centre(square: Square) -> bool {
    (CENTRE_MIN..=CENTRE_MAX).contains(&square.x) && (CENTRE_MIN..=CENTRE_MAX).contains(&square.y)
}

/// Empty squares reachable along the four diagonals from `square`
pub fn king_mobility(board: &Board, square: Square) -> i32 {
    let mut open = 0;
    for &(dx, dy) in &DIAGONALS {
        let mut current = square;
        while let Some(next) = current.offset(dx, dy) {
            if !board.is_vacant(next) {
                break;
            }
            open += 1;
            current = next;
        }
    }
    open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::initial();
        for weights in [EvalWeights::basic(), EvalWeights::standard(), EvalWeights::tuned()] {
            assert_eq!(evaluate(&board, Color::White, &weights), 0);
            assert_eq!(evaluate(&board, Color::Black, &weights), 0);
        }
    }

    #[test]
    fn test_perspective_flips_sign() {
        let mut board = Board::initial();
        board.remove(Square::new(1, 2));
        let weights = EvalWeights::standard();
        let white = evaluate(&board, Color::White, &weights);
        assert!(white > 0);
        assert_eq!(evaluate(&board, Color::Black, &weights), -white);
    }

    #[test]
    fn test_advancement_rewards_progress() {
        let weights = EvalWeights::basic();
        let mut home = Board::empty();
        home.place(Square::new(0, 7), Piece::man(Color::White));
        let mut advanced = Board::empty();
        advanced.place(Square::new(1, 2), Piece::man(Color::White));

        assert_eq!(evaluate(&home, Color::White, &weights), 100);
        assert_eq!(evaluate(&advanced, Color::White, &weights), 100 + 5 * 4);
    }

    #[test]
    fn test_king_mobility_is_capped() {
        let mut board = Board::empty();
        board.place(Square::new(3, 4), Piece::king(Color::White));
        assert_eq!(king_mobility(&board, Square::new(3, 4)), 13);

        let mut weights = EvalWeights::basic();
        weights.king_mobility = 1;
        weights.king_mobility_cap = 10;
        assert_eq!(evaluate(&board, Color::White, &weights), 300 + 10);
    }

    #[test]
    fn test_capture_threats_count() {
        let mut board = Board::empty();
        board.place(Square::new(2, 5), Piece::man(Color::White));
        board.place(Square::new(3, 4), Piece::man(Color::Black));
        let mut weights = EvalWeights::basic();
        weights.advancement = 0;
        weights.capture_threat = 15;
        // White can take; Black's man can take back over (2,5) into (1,6).
        assert_eq!(evaluate(&board, Color::White, &weights), 0);

        board.place(Square::new(1, 6), Piece::man(Color::White));
        assert_eq!(evaluate(&board, Color::White, &weights), 100 + 15);
    }

    #[test]
    fn test_endgame_amplifies_material_gap() {
        let mut board = Board::empty();
        board.place(Square::new(1, 6), Piece::man(Color::White));
        board.place(Square::new(5, 6), Piece::man(Color::White));
        board.place(Square::new(6, 1), Piece::man(Color::Black));

        let mut weights = EvalWeights::basic();
        weights.advancement = 0;
        assert_eq!(evaluate(&board, Color::White, &weights), 100);

        weights.endgame_threshold = 8;
        weights.endgame_material_percent = 150;
        assert_eq!(evaluate(&board, Color::White, &weights), 150);
    }
}
