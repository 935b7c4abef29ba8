//! XFCheckers: checkers against the engine from a terminal
//!
//! - [`game`] - controller, AI worker, relay conversion
//! - [`ui`] - text board and interactive session
//!
//! The rules and the search live in the `checkers_engine` crate; the relay
//! wire format lives in `shared`.

pub mod game;
pub mod ui;

pub use game::{AiConfig, GameController, GameError, GameMode, GameResult};
