//! Error types for the checkers engine
//!
//! Rule queries never fail: they return empty move lists for nonsense input.
//! These errors come from the two places that *mutate* or *parse* a board:
//! move application (which validates its preconditions before touching
//! anything) and the text board parser.

use thiserror::Error;

use crate::types::{Move, Square};

/// Errors that can occur when applying a move or building a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Square outside the board, or a piece placed on a light square
    #[error("Invalid square ({x}, {y})")]
    InvalidSquare { x: i8, y: i8 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Destination already holds a piece
    #[error("Destination square {square} is occupied")]
    DestinationOccupied { square: Square },

    /// Source and destination do not share a diagonal
    #[error("Squares {from} and {to} are not on a common diagonal")]
    NotOnDiagonal { from: Square, to: Square },

    /// A square between source and destination is occupied
    #[error("Path is blocked at square {square}")]
    PathBlocked { square: Square },

    /// Jump claims a capture but the square is empty, friendly, or off the path
    #[error("Jump over square {square} has no opponent piece to capture")]
    CaptureMismatch { square: Square },

    /// Move is not among the selectable moves of the side to move
    #[error("Illegal move {mv}")]
    IllegalMove { mv: Move },

    /// Text board could not be parsed
    #[error("Malformed board text: {message}")]
    MalformedBoard { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
