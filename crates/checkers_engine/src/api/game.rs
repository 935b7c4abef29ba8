//! Game lifecycle management

use crate::board::Board;
use crate::search::SearchParams;
use crate::types::*;

/// A position together with whose turn it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub to_move: Color,
    /// Square of the piece that must keep jumping, if a chain is in progress
    pub chain: Option<Square>,
    pub params: SearchParams,
}

impl Game {
    pub fn from_position(board: Board, to_move: Color, params: SearchParams) -> Self {
        Game {
            board,
            to_move,
            chain: None,
            params,
        }
    }
}

/// Create a new game with the initial position; White moves first
pub fn new_game(params: SearchParams) -> Game {
    Game::from_position(Board::initial(), Color::White, params)
}

/// Put the pieces back in the opening position, keeping the parameters
pub fn reset_game(game: &mut Game) {
    game.board = Board::initial();
    game.to_move = Color::White;
    game.chain = None;
}
