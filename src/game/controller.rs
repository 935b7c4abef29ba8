//! Game controller: turn flow, selection, multi-jump lock and undo
//!
//! The controller owns the authoritative board and is the only place moves
//! are applied during a game. Human, AI and remote moves all pass through
//! [`GameController::submit`]'s validation, so a move that is not among the
//! current legal moves never reaches the board.
//!
//! # Turn flow
//!
//! ```text
//! AwaitingSelection --select--> PieceSelected --play--> AwaitingSelection (turn passes)
//!                                     |                        |
//!                                     +--play (chain)--> PieceSelected (same piece locked)
//! AwaitingSelection --request_ai_move--> AiThinking --poll/wait--> AwaitingSelection
//! any --decided--> GameOver
//! ```
//!
//! A capture that leaves the piece with another capture keeps the turn with
//! the same side and locks selection to that piece until the chain ends.

use checkers_engine::{
    apply_move, generate_moves, has_mandatory_jump, outcome, Board, Color, Move, MoveEffect,
    Outcome, SearchReport, Square,
};
use tracing::{debug, info, warn};

use super::ai::{AiConfig, AiRequest, AiWorker};
use super::captured::CapturedPieces;
use super::error::{GameError, GameResult};
use super::history::{MoveHistory, MoveRecord, Snapshot};
use super::turn::{TurnPhase, TurnState};

pub struct GameController {
    board: Board,
    turn: TurnState,
    config: AiConfig,
    captured: CapturedPieces,
    history: MoveHistory,
    worker: Option<AiWorker>,
    last_report: Option<SearchReport>,
}

impl GameController {
    /// Opening position, White to move
    pub fn new(config: AiConfig) -> Self {
        Self::from_position(Board::initial(), Color::White, config)
    }

    /// Start from an arbitrary position
    ///
    /// A position that is already decided starts in `GameOver`.
    pub fn from_position(board: Board, to_move: Color, config: AiConfig) -> Self {
        let mut controller = GameController {
            board,
            turn: TurnState::new(to_move),
            config,
            captured: CapturedPieces::default(),
            history: MoveHistory::default(),
            worker: None,
            last_report: None,
        };
        controller.check_game_end();
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.turn.to_move
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn chain(&self) -> Option<Square> {
        self.turn.chain
    }

    pub fn selected(&self) -> Option<Square> {
        self.turn.selected
    }

    pub fn outcome(&self) -> Outcome {
        self.turn.outcome
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Report of the most recent AI search
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.config.mode.is_ai(self.turn.to_move)
    }

    /// Whether the side to move is obliged to capture (always true mid-chain)
    pub fn must_jump(&self) -> bool {
        self.turn.chain.is_some() || has_mandatory_jump(&self.board, self.turn.to_move)
    }

    /// Selectable moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        generate_moves(&self.board, self.turn.to_move, self.turn.chain)
    }

    fn ensure_accepts_input(&self) -> GameResult<()> {
        match self.turn.phase {
            TurnPhase::GameOver => Err(GameError::GameOver),
            TurnPhase::AiThinking => Err(GameError::SearchInFlight),
            TurnPhase::AwaitingSelection | TurnPhase::PieceSelected => Ok(()),
        }
    }

    /// Select the piece on `square` and return its legal moves
    ///
    /// The list may be empty, for a piece that is blocked or that has no
    /// capture while another piece must capture.
    pub fn select(&mut self, square: Square) -> GameResult<Vec<Move>> {
        self.ensure_accepts_input()?;

        let piece = self
            .board
            .get(square)
            .ok_or(GameError::NoPieceAt { square })?;
        if piece.color != self.turn.to_move {
            return Err(GameError::NotYourPiece { square });
        }
        if let Some(locked) = self.turn.chain {
            if locked != square {
                return Err(GameError::MustContinueJump { square: locked });
            }
        }

        let moves: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == square)
            .collect();
        self.turn.selected = Some(square);
        self.turn.phase = TurnPhase::PieceSelected;
        Ok(moves)
    }

    /// Drop the current selection (the chain piece stays selected mid-chain)
    pub fn deselect(&mut self) {
        if !self.turn.phase.accepts_input() {
            return;
        }
        self.turn.selected = self.turn.chain;
        if self.turn.chain.is_none() {
            self.turn.phase = TurnPhase::AwaitingSelection;
        }
    }

    /// Play the legal move going from `from` to `to`
    pub fn play(&mut self, from: Square, to: Square) -> GameResult<MoveEffect> {
        self.ensure_accepts_input()?;

        if let Some(locked) = self.turn.chain {
            if locked != from {
                return Err(GameError::MustContinueJump { square: locked });
            }
        }
        let mv = self
            .legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
            .ok_or_else(|| {
                let message = format!("{} to {} is not a legal move", from, to);
                warn!("Rejected input: {}", message);
                GameError::InvalidMove { message }
            })?;
        self.apply(mv)
    }

    /// Play `mv` for the side to move
    pub fn submit(&mut self, mv: Move) -> GameResult<MoveEffect> {
        self.ensure_accepts_input()?;
        self.apply(mv)
    }

    /// Validate and apply `mv`, then advance the turn state
    fn apply(&mut self, mv: Move) -> GameResult<MoveEffect> {
        if !self.legal_moves().contains(&mv) {
            let message = format!("{} is not legal for {}", mv, self.turn.to_move);
            warn!("Rejected move: {}", message);
            return Err(GameError::InvalidMove { message });
        }

        let before = self.snapshot();
        let mover = self.turn.to_move;
        let effect = apply_move(&mut self.board, mv)?;

        if let Some(piece) = effect.captured() {
            self.captured.add_capture(piece);
        }
        self.history.add_move(MoveRecord {
            mv,
            mover,
            promoted: effect.promoted(),
            before,
        });

        info!(
            "{} played {}{}",
            mover,
            mv,
            if effect.promoted() { " and crowned" } else { "" }
        );

        if effect.continues {
            self.turn.continue_chain(mv.to());
            if self.turn.phase != TurnPhase::AiThinking {
                self.turn.phase = TurnPhase::PieceSelected;
            }
        } else {
            self.turn.pass();
            self.check_game_end();
        }
        Ok(effect)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.turn.to_move,
            chain: self.turn.chain,
            captured: self.captured,
            turn_number: self.turn.turn_number,
        }
    }

    fn check_game_end(&mut self) {
        let result = outcome(&self.board);
        if result.is_decided() {
            self.end_game(result);
        }
    }

    /// Record a result decided outside the board (resignation, relay)
    pub fn conclude(&mut self, result: Outcome) {
        self.end_game(result);
    }

    fn end_game(&mut self, result: Outcome) {
        self.worker = None;
        self.turn.finish(result);
        info!("Game over: {:?}", result);
    }

    /// `color` gives up; the opponent wins
    pub fn resign(&mut self, color: Color) -> GameResult<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.end_game(Outcome::win_for(color.opponent()));
        Ok(())
    }

    /// Take back the last hop
    ///
    /// Restores the board, captured tally, side to move and chain lock as
    /// they were before it, and leaves any game-over state.
    pub fn undo(&mut self) -> GameResult<Move> {
        if self.worker.is_some() {
            return Err(GameError::SearchInFlight);
        }
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;
        let Snapshot {
            board,
            to_move,
            chain,
            captured,
            turn_number,
        } = record.before;

        self.board = board;
        self.captured = captured;
        self.turn = TurnState::new(to_move);
        self.turn.turn_number = turn_number;
        match chain {
            Some(square) => {
                self.turn.continue_chain(square);
                self.turn.phase = TurnPhase::PieceSelected;
            }
            None => self.turn.phase = TurnPhase::AwaitingSelection,
        }

        info!("Undid {} by {}", record.mv, record.mover);
        Ok(record.mv)
    }

    /// Start a background search for the side to move
    pub fn request_ai_move(&mut self) -> GameResult<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.worker.is_some() {
            return Err(GameError::SearchInFlight);
        }

        let worker = AiWorker::spawn(AiRequest {
            board: self.board.clone(),
            side: self.turn.to_move,
            chain: self.turn.chain,
            params: self.config.search_params(),
        })?;
        self.worker = Some(worker);
        self.turn.phase = TurnPhase::AiThinking;
        Ok(())
    }

    /// Apply the AI's move if its search has finished
    ///
    /// Returns the hop that was played. When the hop continues a chain the
    /// next search is requested immediately.
    pub fn poll_ai(&mut self) -> GameResult<Option<Move>> {
        let Some(worker) = &self.worker else {
            return Ok(None);
        };
        match worker.try_recv() {
            Ok(Some(report)) => {
                self.worker = None;
                self.finish_ai(report)
            }
            Ok(None) => Ok(None),
            Err(err) => {
                self.abandon_ai();
                Err(err)
            }
        }
    }

    /// Block until the pending search finishes and apply its move
    pub fn wait_ai(&mut self) -> GameResult<Option<Move>> {
        let Some(worker) = self.worker.take() else {
            return Ok(None);
        };
        match worker.wait() {
            Ok(report) => self.finish_ai(report),
            Err(err) => {
                self.abandon_ai();
                Err(err)
            }
        }
    }

    fn abandon_ai(&mut self) {
        self.worker = None;
        if self.turn.phase == TurnPhase::AiThinking {
            self.turn.phase = TurnPhase::AwaitingSelection;
        }
    }

    fn finish_ai(&mut self, report: SearchReport) -> GameResult<Option<Move>> {
        let best_move = report.best_move;
        self.last_report = Some(report);

        let Some(mv) = best_move else {
            let result = match outcome(&self.board) {
                Outcome::Draw => Outcome::Draw,
                _ => Outcome::win_for(self.turn.to_move.opponent()),
            };
            warn!("{} has no move available", self.turn.to_move);
            self.end_game(result);
            return Ok(None);
        };

        let effect = self.apply(mv)?;
        if effect.continues {
            self.request_ai_move()?;
        }
        Ok(Some(mv))
    }

    /// Let the AI play its whole turn, every hop of a chain included
    pub fn play_ai_turn(&mut self) -> GameResult<Vec<Move>> {
        let side = self.turn.to_move;
        let mut hops = Vec::new();

        self.request_ai_move()?;
        while self.worker.is_some() {
            if let Some(mv) = self.wait_ai()? {
                hops.push(mv);
            }
        }

        debug!("{} played {} hop(s)", side, hops.len());
        Ok(hops)
    }
}
