//! Move history tracking
//!
//! Every applied move is recorded together with a snapshot of the state it
//! replaced, so undo restores the board, the captured tally, the side to
//! move and any chain lock exactly. A multi-jump is recorded hop by hop.

use checkers_engine::{Board, Color, Move, Square};

use super::captured::CapturedPieces;

/// State restored by undoing one hop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub to_move: Color,
    pub chain: Option<Square>,
    pub captured: CapturedPieces,
    pub turn_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub mover: Color,
    pub promoted: bool,
    pub before: Snapshot,
}

#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// Moves in order, one per line, e.g. `White 2,5-3,4`
    pub fn transcript(&self) -> String {
        self.moves
            .iter()
            .map(|record| format!("{} {}", record.mover, record.mv))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
