//! Game state queries and AI move generation

use super::game::Game;
use crate::board::Board;
use crate::rules::outcome;
use crate::search::{SearchParams, SearchReport, Searcher};
use crate::types::*;

/// Result of the game so far
pub fn get_game_state(game: &Game) -> Outcome {
    if game.chain.is_some() {
        return Outcome::Undecided;
    }
    outcome(&game.board)
}

/// Full search report for `color` on `board`, optionally locked mid-chain
pub fn search_position(
    board: &Board,
    color: Color,
    chain: Option<Square>,
    params: &SearchParams,
) -> SearchReport {
    Searcher::new(params.clone()).search(board, color, chain)
}

/// Best move for `color`, or `None` when it has no move available
///
/// The board is only read; the search works on its own copy.
pub fn compute_move(board: &Board, color: Color, params: &SearchParams) -> Option<Move> {
    search_position(board, color, None, params).best_move
}

/// Next hop for the piece on `from` that is in the middle of a multi-jump
pub fn compute_continuation(
    board: &Board,
    color: Color,
    from: Square,
    params: &SearchParams,
) -> Option<Move> {
    search_position(board, color, Some(from), params).best_move
}

/// Get the AI's response to the current position
///
/// Yields to the executor between search depths so a UI can keep painting.
pub async fn reply(game: &Game) -> SearchReport {
    let mut searcher = Searcher::new(game.params.clone());
    searcher
        .search_async(&game.board, game.to_move, game.chain)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{do_move, is_legal_move, new_game};

    // Helper to run async tests in sync context
    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        futures_lite::future::block_on(f)
    }

    #[test]
    fn test_compute_move_does_not_touch_board() {
        let board = Board::initial();
        let snapshot = board.clone();
        let mv = compute_move(&board, Color::White, &SearchParams::fixed_depth(3));
        assert!(mv.is_some());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_reply_returns_legal_move() {
        let game = new_game(SearchParams::fixed_depth(3));
        let report = block_on(reply(&game));
        let mv = report.best_move.expect("should find a move");
        assert!(is_legal_move(&game, mv));
    }

    #[test]
    fn test_reply_for_black() {
        let mut game = new_game(SearchParams::fixed_depth(3));
        let opening = Move::Step {
            from: Square::new(2, 5),
            to: Square::new(3, 4),
        };
        do_move(&mut game, opening).expect("legal opening move");

        let report = block_on(reply(&game));
        let mv = report.best_move.expect("should find a move for black");
        assert_eq!(game.board.get(mv.from()).map(|p| p.color), Some(Color::Black));
    }

    #[test]
    fn test_game_state() {
        let game = new_game(SearchParams::default());
        assert_eq!(get_game_state(&game), Outcome::Undecided);

        let mut board = Board::empty();
        board.place(Square::new(1, 0), Piece::king(Color::Black));
        let game = Game::from_position(board, Color::White, SearchParams::default());
        assert_eq!(get_game_state(&game), Outcome::BlackWins);
        assert_eq!(compute_move(&game.board, Color::White, &game.params), None);
    }

    #[test]
    fn test_compute_continuation_stays_with_piece() {
        let mut board = Board::empty();
        board.place(Square::new(3, 4), Piece::king(Color::Black));
        board.place(Square::new(4, 5), Piece::man(Color::White));
        board.place(Square::new(1, 2), Piece::man(Color::White));
        board.place(Square::new(6, 5), Piece::man(Color::Black));
        let mv = compute_continuation(
            &board,
            Color::Black,
            Square::new(3, 4),
            &SearchParams::fixed_depth(2),
        )
        .expect("continuation available");
        assert_eq!(mv.from(), Square::new(3, 4));
        assert!(mv.is_jump());
    }
}
