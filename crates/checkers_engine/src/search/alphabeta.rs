//! Minimax with alpha-beta pruning and principal-variation re-search
//!
//! Scores are always from the maximizer's point of view; the side to move
//! maximizes when it is the maximizer and minimizes otherwise. The first
//! move at a node is searched with the full window. Later moves are probed
//! with a null window and searched again with the full window only when the
//! probe lands strictly inside it.
//!
//! A jump that leaves the same piece with another capture (and did not
//! crown it) is followed at the same depth with the same side to move,
//! locked to that piece. Any other move spends one ply and passes the turn.

use tracing::warn;

use super::context::{SearchContext, SearchResult};
use super::ordering::order_moves;
use super::quiescence::quiescence;
use super::tt::{Bound, TtEntry};
use crate::constants::SCORE_INF;
use crate::hash::position_key;
use crate::make_unmake::{chain_continues, make_move, unmake_move};
use crate::move_gen::generate_moves;
use crate::types::*;

/// Position to search: plies left, side to move, and the piece locked mid-chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub depth: u32,
    pub side: Color,
    pub chain: Option<Square>,
}

impl Node {
    /// Node reached after `mv`, given whether the moving piece must keep jumping
    fn child(self, mv: Move, continues: bool) -> Node {
        if continues {
            Node {
                chain: Some(mv.to()),
                ..self
            }
        } else {
            Node {
                depth: self.depth.saturating_sub(1),
                side: self.side.opponent(),
                chain: None,
            }
        }
    }
}

/// Interior node search; fail-soft
pub(crate) fn alphabeta(ctx: &mut SearchContext<'_>, node: Node, alpha: i32, beta: i32) -> SearchResult<i32> {
    search_node(ctx, node, alpha, beta, None, false).map(|(score, _)| score)
}

/// Full-window search of the root, trying `previous_best` first
///
/// Returns `None` as the move only when the side to move has no move.
pub(crate) fn search_root(
    ctx: &mut SearchContext<'_>,
    node: Node,
    previous_best: Option<Move>,
) -> SearchResult<(i32, Option<Move>)> {
    search_node(ctx, node, -SCORE_INF, SCORE_INF, previous_best, true)
}

fn search_node(
    ctx: &mut SearchContext<'_>,
    node: Node,
    mut alpha: i32,
    mut beta: i32,
    root_hint: Option<Move>,
    is_root: bool,
) -> SearchResult<(i32, Option<Move>)> {
    ctx.tick()?;

    if !is_root && node.chain.is_none() {
        if let Some(score) = ctx.terminal_score(node.depth) {
            return Ok((score, None));
        }
    }

    if node.depth == 0 {
        let qdepth = ctx.quiescence_depth;
        let score = quiescence(ctx, node, qdepth, alpha, beta)?;
        return Ok((score, None));
    }

    let key = position_key(&ctx.board, node.side, node.chain);
    let mut hint = root_hint;
    if let Some(entry) = ctx.tt.probe(key).copied() {
        hint = hint.or(entry.best_move);
        if !is_root && entry.depth >= node.depth {
            ctx.stats.tt_hits += 1;
            match entry.bound {
                Bound::Exact => return Ok((entry.score, entry.best_move)),
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                ctx.stats.cutoffs += 1;
                return Ok((entry.score, entry.best_move));
            }
        }
    }
    let (window_alpha, window_beta) = (alpha, beta);

    let mut moves = generate_moves(&ctx.board, node.side, node.chain);
    if moves.is_empty() {
        let score = ctx
            .terminal_score(node.depth)
            .unwrap_or_else(|| ctx.evaluate());
        return Ok((score, None));
    }
    order_moves(&ctx.board, &mut moves, hint, ctx.weights);

    let maximizing = node.side == ctx.maximizer;
    let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };
    let mut best_move = None;
    let mut searched = 0;

    for mv in moves {
        let undo = match make_move(&mut ctx.board, mv) {
            Ok(undo) => undo,
            Err(err) => {
                warn!("Skipping generated move {}: {}", mv, err);
                continue;
            }
        };
        let child = node.child(mv, chain_continues(&ctx.board, &undo));
        let result = principal_variation(ctx, child, alpha, beta, maximizing, searched == 0);
        unmake_move(&mut ctx.board, &undo);
        let score = result?;
        searched += 1;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    if best_move.is_none() {
        return Ok((ctx.evaluate(), None));
    }

    let bound = if best_score <= window_alpha {
        Bound::UpperBound
    } else if best_score >= window_beta {
        Bound::LowerBound
    } else {
        Bound::Exact
    };
    ctx.tt.store(TtEntry {
        key,
        depth: node.depth,
        score: best_score,
        bound,
        best_move,
    });

    Ok((best_score, best_move))
}

/// Full window for the first move, null-window probe plus re-search otherwise
fn principal_variation(
    ctx: &mut SearchContext<'_>,
    child: Node,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    first: bool,
) -> SearchResult<i32> {
    if first {
        return alphabeta(ctx, child, alpha, beta);
    }

    let (probe_alpha, probe_beta) = if maximizing {
        (alpha, alpha.saturating_add(1))
    } else {
        (beta.saturating_sub(1), beta)
    };
    let probe = alphabeta(ctx, child, probe_alpha, probe_beta)?;

    if probe > alpha && probe < beta {
        ctx.stats.researches += 1;
        alphabeta(ctx, child, alpha, beta)
    } else {
        Ok(probe)
    }
}
