//! Zobrist hashing
//!
//! One random 64-bit key per (piece kind, square), one for "Black to move",
//! and one per square for "the side to move is locked mid-chain on this
//! square". The board keeps the XOR of its placement keys up to date as
//! pieces move; the search folds in the side and chain keys when it builds a
//! transposition key.
//!
//! Keys come from a fixed-seed generator so hashes are identical across runs
//! and platforms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

use crate::board::Board;
use crate::constants::{SQUARE_COUNT, ZOBRIST_SEED};
use crate::types::*;

const PIECE_KINDS: usize = 4;

struct ZobristKeys {
    pieces: [[u64; SQUARE_COUNT]; PIECE_KINDS],
    black_to_move: u64,
    chain: [u64; SQUARE_COUNT],
}

impl ZobristKeys {
    fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut pieces = [[0u64; SQUARE_COUNT]; PIECE_KINDS];
        for kind in pieces.iter_mut() {
            for key in kind.iter_mut() {
                *key = rng.random::<u64>();
            }
        }

        let black_to_move = rng.random::<u64>();

        let mut chain = [0u64; SQUARE_COUNT];
        for key in chain.iter_mut() {
            *key = rng.random::<u64>();
        }

        ZobristKeys {
            pieces,
            black_to_move,
            chain,
        }
    }
}

fn keys() -> &'static ZobristKeys {
    static KEYS: OnceLock<ZobristKeys> = OnceLock::new();
    KEYS.get_or_init(|| ZobristKeys::generate(ZOBRIST_SEED))
}

/// Key for `piece` standing on `square` (square must be on the board)
#[inline]
pub fn piece_key(piece: Piece, square: Square) -> u64 {
    keys().pieces[piece.zobrist_index()][square.index()]
}

#[inline]
pub fn side_key(color: Color) -> u64 {
    match color {
        Color::White => 0,
        Color::Black => keys().black_to_move,
    }
}

#[inline]
pub fn chain_key(square: Square) -> u64 {
    keys().chain[square.index()]
}

/// Transposition key: placement, side to move, and the mid-chain lock if any
pub fn position_key(board: &Board, to_move: Color, chain: Option<Square>) -> u64 {
    let mut key = board.hash() ^ side_key(to_move);
    if let Some(square) = chain.filter(|square| square.is_valid()) {
        key ^= chain_key(square);
    }
    key
}

/// Placement hash recomputed from scratch
pub fn full_hash(board: &Board) -> u64 {
    board
        .pieces()
        .fold(0, |acc, (square, piece)| acc ^ piece_key(piece, square))
}
