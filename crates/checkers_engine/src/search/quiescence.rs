//! Quiescence search to avoid the horizon effect
//!
//! Runs where the main search runs out of depth and follows captures only,
//! so a depth cutoff never lands in the middle of an exchange. Outside a
//! chain the static "stand-pat" score bounds the node; inside a chain the
//! piece must keep jumping, so there is no stand-pat. Each capture that
//! passes the turn spends one ply of `qdepth`; chain continuations are free.
//! At `qdepth == 0` the stand-pat score is returned as is.

use tracing::warn;

use super::alphabeta::Node;
use super::context::{SearchContext, SearchResult};
use super::ordering::order_moves;
use crate::constants::SCORE_INF;
use crate::make_unmake::{chain_continues, make_move, unmake_move};
use crate::move_gen::{capture_moves, has_any_move};

pub(crate) fn quiescence(
    ctx: &mut SearchContext<'_>,
    node: Node,
    qdepth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult<i32> {
    ctx.tick()?;
    ctx.stats.quiescence_nodes += 1;

    let mut captures = capture_moves(&ctx.board, node.side, node.chain);
    if captures.is_empty() {
        if node.chain.is_none() && !has_any_move(&ctx.board, node.side) {
            if let Some(score) = ctx.terminal_score(0) {
                return Ok(score);
            }
        }
        return Ok(ctx.evaluate());
    }

    let stand_pat = ctx.evaluate();
    if qdepth == 0 {
        return Ok(stand_pat);
    }

    let maximizing = node.side == ctx.maximizer;
    let mut best = if node.chain.is_some() {
        if maximizing {
            -SCORE_INF
        } else {
            SCORE_INF
        }
    } else {
        if maximizing {
            if stand_pat >= beta {
                return Ok(stand_pat);
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return Ok(stand_pat);
            }
            beta = beta.min(stand_pat);
        }
        stand_pat
    };

    order_moves(&ctx.board, &mut captures, None, ctx.weights);

    for mv in captures {
        let undo = match make_move(&mut ctx.board, mv) {
            Ok(undo) => undo,
            Err(err) => {
                warn!("Skipping generated capture {}: {}", mv, err);
                continue;
            }
        };
        let (child, child_qdepth) = if chain_continues(&ctx.board, &undo) {
            (
                Node {
                    chain: Some(mv.to()),
                    ..node
                },
                qdepth,
            )
        } else {
            (
                Node {
                    side: node.side.opponent(),
                    chain: None,
                    ..node
                },
                qdepth - 1,
            )
        };
        let result = quiescence(ctx, child, child_qdepth, alpha, beta);
        unmake_move(&mut ctx.board, &undo);
        let score = result?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    if best.abs() == SCORE_INF {
        return Ok(stand_pat);
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::evaluation::EvalWeights;
    use crate::search::context::SearchStats;
    use crate::search::tt::TranspositionTable;
    use crate::types::*;

    fn run(board: &Board, side: Color, qdepth: u32) -> i32 {
        let weights = EvalWeights::standard();
        let mut tt = TranspositionTable::new(1);
        let mut ctx = SearchContext {
            board: board.clone(),
            maximizer: Color::White,
            weights: &weights,
            quiescence_depth: qdepth,
            tt: &mut tt,
            deadline: None,
            stats: SearchStats::default(),
        };
        let node = Node {
            depth: 0,
            side,
            chain: None,
        };
        let score = quiescence(&mut ctx, node, qdepth, -SCORE_INF, SCORE_INF).expect("no deadline");
        assert_eq!(&ctx.board, board);
        score
    }

    /// Position after White's forced capture: Black now double-jumps back
    fn exchange_position() -> Board {
        let mut board = Board::empty();
        board.place(Square::new(4, 3), Piece::man(Color::White));
        board.place(Square::new(6, 5), Piece::man(Color::White));
        board.place(Square::new(0, 7), Piece::man(Color::White));
        board.place(Square::new(3, 2), Piece::man(Color::Black));
        board.place(Square::new(2, 1), Piece::man(Color::Black));
        board
    }

    #[test]
    fn test_quiet_position_returns_static_score() {
        let board = Board::initial();
        assert_eq!(run(&board, Color::White, 4), 0);
    }

    #[test]
    fn test_zero_depth_returns_stand_pat() {
        let board = exchange_position();
        let weights = EvalWeights::standard();
        let expected = crate::evaluation::evaluate(&board, Color::White, &weights);
        assert_eq!(run(&board, Color::Black, 0), expected);
        assert!(expected > 0);
    }

    #[test]
    fn test_capture_sequence_resolved() {
        let board = exchange_position();
        let resolved = run(&board, Color::Black, 4);
        assert!(resolved < 0, "expected Black's double jump to swing the score, got {}", resolved);
    }

    #[test]
    fn test_side_without_moves_scores_as_loss() {
        let mut board = Board::empty();
        board.place(Square::new(1, 0), Piece::man(Color::Black));
        board.place(Square::new(0, 1), Piece::man(Color::White));
        board.place(Square::new(2, 1), Piece::man(Color::White));
        board.place(Square::new(3, 2), Piece::man(Color::White));
        assert!(run(&board, Color::Black, 2) >= crate::constants::WIN_SCORE);
    }
}
