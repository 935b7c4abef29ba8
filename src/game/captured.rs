//! Captured pieces tracking
//!
//! Tallies the pieces each side has taken, split into men and kings.

use checkers_engine::{Color, Piece};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTally {
    pub men: u32,
    pub kings: u32,
}

impl SideTally {
    pub fn total(&self) -> u32 {
        self.men + self.kings
    }
}

/// Pieces captured by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Black pieces that White has captured
    pub by_white: SideTally,
    /// White pieces that Black has captured
    pub by_black: SideTally,
}

impl CapturedPieces {
    /// Record the capture of `piece` (credited to its opponent)
    pub fn add_capture(&mut self, piece: Piece) {
        let tally = match piece.color {
            Color::White => &mut self.by_black,
            Color::Black => &mut self.by_white,
        };
        if piece.is_king() {
            tally.kings += 1;
        } else {
            tally.men += 1;
        }
    }

    pub fn captured_by(&self, color: Color) -> SideTally {
        match color {
            Color::White => self.by_white,
            Color::Black => self.by_black,
        }
    }
}
