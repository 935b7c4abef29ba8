//! Checkers AI opponent
//!
//! The engine runs on a background thread so the front-end never blocks on a
//! search. The controller seeds the worker with its own copy of the board,
//! and the worker answers exactly once.
//!
//! # Architecture
//!
//! - [`AiConfig`]: game mode, difficulty and an optional tuned parameter set
//! - [`AiWorker`]: one search in flight, one-shot request/response over a
//!   crossbeam channel
//!
//! The controller applies the worker's move through the same validation path
//! as human input, and asks again for every further hop of a multi-jump.

pub mod resource;
pub mod worker;

pub use resource::{AiConfig, GameMode};
pub use worker::{AiRequest, AiWorker};
