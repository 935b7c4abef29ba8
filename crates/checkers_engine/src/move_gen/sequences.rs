//! Multi-jump sequences
//!
//! A turn that captures keeps going with the same piece for as long as it
//! has another capture from its landing square. Sequences are explored by
//! playing each hop on a scratch board (captured pieces leave the board
//! immediately) and undoing it afterwards. A hop that crowns a man always
//! ends its sequence.
//!
//! Callers only ever select the **first hop** of a sequence; the rest is
//! discovered hop by hop. [`first_hops`] reduces a set of sequences to those
//! selectable moves, dropping repeats while keeping discovery order.

use crate::board::Board;
use crate::make_unmake::{make_move, unmake_move};
use crate::move_gen::jumps::single_jumps;
use crate::types::*;

/// Ordered hops of one maximal capture sequence
pub type JumpChain = Vec<Move>;

/// Every maximal capture sequence available to `piece` on `from`
///
/// Returns an empty list when the piece has no capture at all, or when
/// `piece` is not actually standing on `from`.
pub fn jump_sequences(board: &Board, from: Square, piece: Piece) -> Vec<JumpChain> {
    if board.get(from) != Some(piece) {
        return Vec::new();
    }

    let mut scratch = board.clone();
    let mut prefix = Vec::new();
    let mut sequences = Vec::new();
    extend_sequences(&mut scratch, from, piece, &mut prefix, &mut sequences);
    sequences
}

fn extend_sequences(
    board: &mut Board,
    from: Square,
    piece: Piece,
    prefix: &mut JumpChain,
    sequences: &mut Vec<JumpChain>,
) {
    for hop in single_jumps(board, from, piece) {
        let Ok(undo) = make_move(board, hop) else {
            continue;
        };

        prefix.push(hop);
        if undo.promoted {
            sequences.push(prefix.clone());
        } else {
            let landed = undo.piece;
            let before = sequences.len();
            extend_sequences(board, hop.to(), landed, prefix, sequences);
            if sequences.len() == before {
                sequences.push(prefix.clone());
            }
        }
        prefix.pop();

        unmake_move(board, &undo);
    }
}

/// First hop of each sequence, without repeats, in discovery order
pub fn first_hops(sequences: &[JumpChain]) -> Vec<Move> {
    let mut hops: Vec<Move> = Vec::new();
    for first in sequences.iter().filter_map(|chain| chain.first()) {
        if !hops.contains(first) {
            hops.push(*first);
        }
    }
    hops
}
