//! Error types for game module
//!
//! Provides custom error types for the game controller: rejected human or
//! remote input, turn-state violations, and failures of the AI worker.
//! Engine and protocol errors convert in with `?`.

use checkers_engine::{EngineError, Square};
use shared::ProtocolError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move is not among the legal moves of the side to move
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// Selected piece belongs to the side not on move
    #[error("Piece at {square} does not belong to the side to move")]
    NotYourPiece { square: Square },

    /// No piece at the selected square
    #[error("No piece at {square}")]
    NoPieceAt { square: Square },

    /// A multi-jump is in progress and only that piece may move
    #[error("The piece on {square} must continue jumping")]
    MustContinueJump { square: Square },

    /// A search is running for this game
    #[error("The AI is still thinking")]
    SearchInFlight,

    /// Game already decided
    #[error("The game is over")]
    GameOver,

    /// Undo with an empty history
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The AI worker thread went away without answering
    #[error("AI worker disconnected")]
    WorkerDisconnected,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
