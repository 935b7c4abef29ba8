//! Move ordering for alpha-beta pruning
//!
//! Orders moves so the likely best ones are searched first: captures by the
//! value of the captured piece, then promotions, kings heading for the
//! centre and men advancing. Sorting is stable, so equally scored moves keep
//! generation order and the search stays deterministic.

use crate::board::Board;
use crate::constants::*;
use crate::evaluation::EvalWeights;
use crate::rules::promotes;
use crate::types::*;

/// Cheap static estimate of how promising `mv` is for the side making it
pub(crate) fn score_move(board: &Board, mv: Move, weights: &EvalWeights) -> i32 {
    let Some(piece) = board.get(mv.from()) else {
        return 0;
    };
    let mut score = 0;

    if let Some(victim) = mv.captured().and_then(|square| board.get(square)) {
        score += weights.piece_value(victim.is_king()) * ORDER_CAPTURE_MULTIPLIER;
    }

    let to = mv.to();
    if piece.is_king() {
        let centred = |square: Square| {
            (CENTRE_MIN..=CENTRE_MAX).contains(&square.x)
                && (CENTRE_MIN..=CENTRE_MAX).contains(&square.y)
        };
        if centred(to) && !centred(mv.from()) {
            score += ORDER_CENTRE_BONUS;
        }
    } else {
        if promotes(piece.color, to.y) {
            score += ORDER_PROMOTION_BONUS;
        }
        if (to.y - mv.from().y) * piece.color.forward() > 0 {
            score += ORDER_FORWARD_BONUS;
        }
    }

    score
}

/// Sort `moves` best-first, putting `hint` (if present among them) in front
pub(crate) fn order_moves(board: &Board, moves: &mut [Move], hint: Option<Move>, weights: &EvalWeights) {
    moves.sort_by_cached_key(|&mv| {
        let preferred = Some(mv) == hint;
        (!preferred, -score_move(board, mv, weights))
    });
}

/// Highest-scored move without searching; ties go to the earliest move
pub(crate) fn heuristic_best(board: &Board, moves: &[Move], weights: &EvalWeights) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for &mv in moves {
        let score = score_move(board, mv, weights);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best.map(|(mv, _)| mv)
}
