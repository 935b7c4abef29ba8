//! Iterative deepening search
//!
//! Searches depth 1, 2, ... up to the target depth, keeping the result of
//! the deepest depth that completed before the time budget ran out. An
//! interrupted depth is thrown away whole. If not even depth 1 completes,
//! the best move by the ordering heuristic is played instead, and the report
//! says so. A side with no move at all gets `best_move: None`, which is a
//! lost (or drawn) position rather than a search failure.

use std::time::Duration;

use futures_lite::future::yield_now;
use instant::Instant;
use tracing::{debug, info, warn};

use super::alphabeta::{search_root, Node};
use super::context::{is_decisive, SearchContext, SearchStats};
use super::ordering::heuristic_best;
use super::params::SearchParams;
use super::tt::TranspositionTable;
use crate::board::Board;
use crate::constants::WIN_SCORE;
use crate::move_gen::generate_moves;
use crate::rules::outcome;
use crate::types::*;

/// Outcome of one move computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` only when the side to move has no move at all
    pub best_move: Option<Move>,
    /// Score of `best_move` from the mover's point of view
    pub score: i32,
    /// Deepest fully completed depth (0 when none completed)
    pub depth_reached: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// No depth completed in time; `best_move` came from the ordering heuristic
    pub fallback: bool,
}

/// Owns the search parameters and the transposition table between moves
pub struct Searcher {
    params: SearchParams,
    tt: TranspositionTable,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        let tt = TranspositionTable::new(params.tt_capacity);
        Searcher { params, tt }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Pick a move for `side` on `board` (read only; a private copy is searched)
    ///
    /// `chain` locks the search to the piece on that square, for a side that
    /// is in the middle of a multi-jump.
    pub fn search(&mut self, board: &Board, side: Color, chain: Option<Square>) -> SearchReport {
        let mut deepening = Deepening::start(self, board, side, chain);
        while deepening.step() {}
        deepening.finish()
    }

    /// Same as [`Searcher::search`], yielding to the executor between depths
    pub async fn search_async(
        &mut self,
        board: &Board,
        side: Color,
        chain: Option<Square>,
    ) -> SearchReport {
        let mut deepening = Deepening::start(self, board, side, chain);
        while deepening.step() {
            yield_now().await;
        }
        deepening.finish()
    }
}

/// One top-level search in progress, advanced a depth at a time
struct Deepening<'a> {
    params: &'a SearchParams,
    tt: &'a mut TranspositionTable,
    board: Board,
    side: Color,
    chain: Option<Square>,
    root_moves: Vec<Move>,
    started: Instant,
    deadline: Option<Instant>,
    next_depth: u32,
    best: Option<(Move, i32)>,
    depth_reached: u32,
    stats: SearchStats,
    done: bool,
}

impl<'a> Deepening<'a> {
    fn start(searcher: &'a mut Searcher, board: &Board, side: Color, chain: Option<Square>) -> Self {
        searcher.tt.clear();
        let started = Instant::now();
        let deadline = searcher.params.time_budget().map(|budget| started + budget);
        let root_moves = generate_moves(board, side, chain);
        let done = root_moves.is_empty();

        Deepening {
            params: &searcher.params,
            tt: &mut searcher.tt,
            board: board.clone(),
            side,
            chain,
            root_moves,
            started,
            deadline,
            next_depth: 1,
            best: None,
            depth_reached: 0,
            stats: SearchStats::default(),
            done,
        }
    }

    /// Search the next depth; false once there is nothing left to do
    fn step(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.next_depth > self.params.depth_limit() || self.out_of_time() {
            self.done = true;
            return false;
        }

        let depth = self.next_depth;
        let mut ctx = SearchContext {
            board: self.board.clone(),
            maximizer: self.side,
            weights: &self.params.weights,
            quiescence_depth: self.params.quiescence_depth,
            tt: &mut *self.tt,
            deadline: self.deadline,
            stats: self.stats,
        };
        let node = Node {
            depth,
            side: self.side,
            chain: self.chain,
        };
        let previous_best = self.best.map(|(mv, _)| mv);
        let result = search_root(&mut ctx, node, previous_best);
        self.stats = ctx.stats;

        match result {
            Ok((score, Some(mv))) => {
                debug!(
                    "Depth {} complete: {} score {} ({} nodes, {:?})",
                    depth,
                    mv,
                    score,
                    self.stats.nodes,
                    self.started.elapsed()
                );
                self.best = Some((mv, score));
                self.depth_reached = depth;
                self.next_depth += 1;
                if is_decisive(score) {
                    debug!("Forced result found at depth {}", depth);
                    self.done = true;
                }
            }
            Ok((_, None)) => self.done = true,
            Err(_) => {
                debug!("Depth {} interrupted after {:?}", depth, self.started.elapsed());
                self.done = true;
            }
        }
        !self.done
    }

    fn out_of_time(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn finish(self) -> SearchReport {
        let elapsed = self.started.elapsed();

        if self.root_moves.is_empty() {
            let score = match outcome(&self.board) {
                Outcome::Draw => 0,
                _ => -WIN_SCORE,
            };
            info!("{} has no move available", self.side);
            return SearchReport {
                best_move: None,
                score,
                depth_reached: 0,
                stats: self.stats,
                elapsed,
                fallback: false,
            };
        }

        let (best_move, score, fallback) = match self.best {
            Some((mv, score)) => (Some(mv), score, false),
            None => {
                let mv = heuristic_best(&self.board, &self.root_moves, &self.params.weights);
                warn!("No depth completed within the time budget, using heuristic move");
                (mv, 0, true)
            }
        };

        if let Some(mv) = best_move {
            info!(
                "{} plays {} (score {}, depth {}, {} nodes, {:?})",
                self.side, mv, score, self.depth_reached, self.stats.nodes, elapsed
            );
        }

        SearchReport {
            best_move,
            score,
            depth_reached: self.depth_reached,
            stats: self.stats,
            elapsed,
            fallback,
        }
    }
}
