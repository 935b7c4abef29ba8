//! Per-search state threaded through every node
//!
//! The working board, the fixed maximizing color, the clock and the
//! statistics all live in one [`SearchContext`] passed by `&mut` down the
//! recursion. Running out of time is reported as `Err(Interrupted)` and
//! propagated with `?`; only the iterative-deepening driver consumes it.

use instant::Instant;
use serde::{Deserialize, Serialize};

use super::tt::TranspositionTable;
use crate::board::Board;
use crate::constants::{NODE_CHECK_INTERVAL, WIN_SCORE};
use crate::evaluation::{evaluate, EvalWeights};
use crate::rules::outcome;
use crate::types::*;

/// The clock ran out somewhere below this node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Interrupted;

pub(crate) type SearchResult<T> = Result<T, Interrupted>;

/// Counters collected during one move computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, quiescence included
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub tt_hits: u64,
    pub cutoffs: u64,
    /// Null-window probes that had to be searched again with the full window
    pub researches: u64,
}

pub(crate) struct SearchContext<'a> {
    pub board: Board,
    pub maximizer: Color,
    pub weights: &'a EvalWeights,
    pub quiescence_depth: u32,
    pub tt: &'a mut TranspositionTable,
    pub deadline: Option<Instant>,
    pub stats: SearchStats,
}

impl SearchContext<'_> {
    /// Count a node and check the clock every `NODE_CHECK_INTERVAL` nodes
    pub fn tick(&mut self) -> SearchResult<()> {
        self.stats.nodes += 1;
        if self.stats.nodes % NODE_CHECK_INTERVAL == 0 {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    return Err(Interrupted);
                }
            }
        }
        Ok(())
    }

    /// Static score of the working board for the maximizer
    pub fn evaluate(&self) -> i32 {
        evaluate(&self.board, self.maximizer, self.weights)
    }

    /// Score of a decided position, `None` while the game goes on
    ///
    /// Wins and losses are biased by `depth` (plies remaining) so the search
    /// prefers quick wins and slow losses.
    pub fn terminal_score(&self, depth: u32) -> Option<i32> {
        let bias = WIN_SCORE + depth as i32;
        match outcome(&self.board) {
            Outcome::Undecided => None,
            Outcome::Draw => Some(0),
            decided if decided.winner() == Some(self.maximizer) => Some(bias),
            _ => Some(-bias),
        }
    }
}

/// True for forced win/loss scores
pub fn is_decisive(score: i32) -> bool {
    score.abs() >= WIN_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(
        board: Board,
        tt: &'a mut TranspositionTable,
        weights: &'a EvalWeights,
    ) -> SearchContext<'a> {
        SearchContext {
            board,
            maximizer: Color::White,
            weights,
            quiescence_depth: 0,
            tt,
            deadline: None,
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn test_terminal_scores_prefer_quick_wins() {
        let weights = EvalWeights::standard();
        let mut tt = TranspositionTable::new(1);
        let mut board = Board::empty();
        board.place(Square::new(3, 4), Piece::man(Color::White));
        let ctx = context(board, &mut tt, &weights);

        let soon = ctx.terminal_score(5).expect("decided");
        let late = ctx.terminal_score(1).expect("decided");
        assert!(soon > late);
        assert!(is_decisive(late));
    }

    #[test]
    fn test_terminal_score_for_loss_and_draw() {
        let weights = EvalWeights::standard();
        let mut tt = TranspositionTable::new(1);
        let mut board = Board::empty();
        board.place(Square::new(3, 4), Piece::man(Color::Black));
        let ctx = context(board, &mut tt, &weights);
        assert_eq!(ctx.terminal_score(2), Some(-(WIN_SCORE + 2)));

        let mut tt = TranspositionTable::new(1);
        let ctx = context(Board::empty(), &mut tt, &weights);
        assert_eq!(ctx.terminal_score(2), Some(0));

        let mut tt = TranspositionTable::new(1);
        let ctx = context(Board::initial(), &mut tt, &weights);
        assert_eq!(ctx.terminal_score(2), None);
    }

    #[test]
    fn test_expired_deadline_interrupts_at_interval() {
        let weights = EvalWeights::standard();
        let mut tt = TranspositionTable::new(1);
        let mut ctx = context(Board::initial(), &mut tt, &weights);
        ctx.deadline = Some(Instant::now());

        for _ in 1..NODE_CHECK_INTERVAL {
            assert_eq!(ctx.tick(), Ok(()));
        }
        assert_eq!(ctx.tick(), Err(Interrupted));
    }
}
