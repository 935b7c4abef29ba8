//! Text front-end
//!
//! - **terminal**: board rendering, move parsing and the interactive session

pub mod terminal;

pub use terminal::{
    describe_outcome, parse_command, parse_square, render_board, run_session, Command,
};
