//! Background search worker
//!
//! Each request gets its own thread and a bounded channel of capacity one.
//! The thread owns an independent copy of the position, so the controller can
//! keep rendering (or be dropped) without touching the search. Dropping the
//! worker abandons the answer; the thread finishes its search and exits.

use std::thread;

use checkers_engine::{Board, Color, SearchParams, SearchReport, Searcher, Square};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use tracing::{debug, warn};

use crate::game::error::{GameError, GameResult};

/// Everything the worker needs to search one position
#[derive(Debug, Clone)]
pub struct AiRequest {
    pub board: Board,
    pub side: Color,
    /// Square of the piece locked into a multi-jump, if any
    pub chain: Option<Square>,
    pub params: SearchParams,
}

/// Handle to a single in-flight search
pub struct AiWorker {
    rx: Receiver<SearchReport>,
}

impl AiWorker {
    pub fn spawn(request: AiRequest) -> GameResult<Self> {
        let (tx, rx) = bounded(1);

        thread::Builder::new()
            .name("checkers-ai".to_string())
            .spawn(move || {
                let AiRequest {
                    board,
                    side,
                    chain,
                    params,
                } = request;
                let report = Searcher::new(params).search(&board, side, chain);
                debug!(
                    "AI worker finished: {:?} (depth {}, score {})",
                    report.best_move, report.depth_reached, report.score
                );
                // The receiver may have been dropped; nobody is waiting then.
                let _ = tx.send(report);
            })
            .map_err(|err| {
                warn!("Failed to spawn AI worker: {}", err);
                GameError::WorkerDisconnected
            })?;

        Ok(AiWorker { rx })
    }

    /// The report, if the search has finished
    pub fn try_recv(&self) -> GameResult<Option<SearchReport>> {
        match self.rx.try_recv() {
            Ok(report) => Ok(Some(report)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(GameError::WorkerDisconnected),
        }
    }

    /// Block until the search finishes
    pub fn wait(self) -> GameResult<SearchReport> {
        self.rx.recv().map_err(|_| GameError::WorkerDisconnected)
    }
}
