//! Checkers game logic on top of the engine
//!
//! # Module Organization
//!
//! - `controller` - Turn flow, selection, multi-jump lock, undo, AI turns
//! - `turn` - Turn phase and side-to-move state
//! - `history` - Played hops with undo snapshots
//! - `captured` - Captured pieces tally
//! - `ai` - AI configuration and the background search worker
//! - `relay` - Conversion to and from the relay protocol
//! - `error` - Controller errors

pub mod ai;
pub mod captured;
pub mod controller;
pub mod error;
pub mod history;
pub mod relay;
pub mod turn;

pub use ai::{AiConfig, GameMode};
pub use captured::CapturedPieces;
pub use controller::GameController;
pub use error::{GameError, GameResult};
pub use history::{MoveHistory, MoveRecord};
pub use relay::{from_wire, move_made, to_wire};
pub use turn::{TurnPhase, TurnState};
