//! Move execution and validation

use super::game::Game;
use crate::error::{EngineError, EngineResult};
use crate::make_unmake::{apply_move, MoveEffect};
use crate::move_gen::generate_moves;
use crate::types::*;

/// Selectable moves for the side to move (only the locked piece mid-chain)
pub fn legal_moves_for(game: &Game) -> Vec<Move> {
    generate_moves(&game.board, game.to_move, game.chain)
}

pub fn is_legal_move(game: &Game, mv: Move) -> bool {
    legal_moves_for(game).contains(&mv)
}

/// Play `mv` for the side to move
///
/// The turn stays with the same side while its piece must keep jumping and
/// passes to the opponent otherwise.
///
/// # Errors
///
/// [`EngineError::IllegalMove`] if `mv` is not selectable right now; the
/// game is untouched in that case.
pub fn do_move(game: &mut Game, mv: Move) -> EngineResult<MoveEffect> {
    if !is_legal_move(game, mv) {
        return Err(EngineError::IllegalMove { mv });
    }

    let effect = apply_move(&mut game.board, mv)?;
    if effect.continues {
        game.chain = Some(mv.to());
    } else {
        game.chain = None;
        game.to_move = game.to_move.opponent();
    }
    Ok(effect)
}
