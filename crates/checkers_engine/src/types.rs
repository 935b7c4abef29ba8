//! # Checkers Engine Core Types
//!
//! ## Overview
//!
//! The value types every other module speaks: [`Color`], [`Rank`], [`Piece`], [`Square`],
//! [`Move`] and [`Outcome`]. All of them are small `Copy` values so the search can generate,
//! sort and discard them without allocation pressure beyond the move vectors themselves.
//!
//! ## The `Move` Enum
//!
//! A move is either a quiet [`Move::Step`] or a single capture hop [`Move::Jump`]. A full turn
//! that captures several pieces is a *chain* of jumps by the same piece; the chain is never a
//! single value. Callers select the first hop, apply it, and then ask the rule engine for the
//! continuation from the landing square. This keeps the relay format trivial: every move is
//! a tuple of integers (`from`, `to`, and for jumps `captured`) that can be forwarded verbatim.
//!
//! ## Coordinates
//!
//! [`Square`] stores signed coordinates so that direction arithmetic (`x + dx`) never needs
//! casts. Squares built from untrusted input may be off-board; every board accessor treats an
//! off-board square as empty and every rule query returns an empty result for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::BOARD_SIZE;

/// Side of the board a piece belongs to
///
/// White moves first and advances toward row 0; Black advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a man's forward step
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Back rank this color defends (the opponent's promotion row)
    pub fn home_row(self) -> i8 {
        self.opponent().promotion_row()
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Rank of a piece; a man becomes a king exactly once and never reverts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// The same piece after promotion
    pub fn crowned(self) -> Piece {
        Piece::king(self.color)
    }

    /// Text-board character: `a`/`A` for White man/king, `b`/`B` for Black
    pub fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'a',
            (Color::White, Rank::King) => 'A',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'a' => Some(Piece::man(Color::White)),
            'A' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }

    pub(crate) fn zobrist_index(self) -> usize {
        self.color.index() * 2
            + match self.rank {
                Rank::Man => 0,
                Rank::King => 1,
            }
    }
}

/// Board coordinate `(x, y)`; `y = 0` is Black's back rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    pub const fn new(x: i8, y: i8) -> Self {
        Square { x, y }
    }

    /// Inside the 8×8 grid
    pub fn is_valid(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Inside the grid and on a dark (odd-sum) square
    pub fn is_playable(self) -> bool {
        self.is_valid() && (self.x + self.y) % 2 == 1
    }

    /// Neighbouring square in direction `(dx, dy)`, if it is on the board
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let square = Square::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?);
        square.is_valid().then_some(square)
    }

    /// Linear index `y * 8 + x`; only meaningful for valid squares
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    pub fn from_index(index: usize) -> Square {
        let size = BOARD_SIZE as usize;
        Square::new((index % size) as i8, (index / size) as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One selectable move: a quiet step or a single capture hop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Step {
        from: Square,
        to: Square,
    },
    Jump {
        from: Square,
        to: Square,
        captured: Square,
    },
}

impl Move {
    pub fn from(self) -> Square {
        match self {
            Move::Step { from, .. } | Move::Jump { from, .. } => from,
        }
    }

    pub fn to(self) -> Square {
        match self {
            Move::Step { to, .. } | Move::Jump { to, .. } => to,
        }
    }

    pub fn captured(self) -> Option<Square> {
        match self {
            Move::Step { .. } => None,
            Move::Jump { captured, .. } => Some(captured),
        }
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Move::Jump { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step { from, to } => write!(f, "{}-{}", from, to),
            Move::Jump { from, to, .. } => write!(f, "{}x{}", from, to),
        }
    }
}

/// Result of a position as far as the rules are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    Undecided,
}

impl Outcome {
    pub fn win_for(color: Color) -> Outcome {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::Draw | Outcome::Undecided => None,
        }
    }

    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_directions() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::White.home_row(), 7);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_square_validity() {
        assert!(Square::new(0, 7).is_playable());
        assert!(Square::new(3, 4).is_playable());
        assert!(!Square::new(0, 0).is_playable());
        assert!(Square::new(0, 0).is_valid());
        assert!(!Square::new(8, 1).is_valid());
        assert!(!Square::new(-1, 2).is_valid());
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let corner = Square::new(0, 7);
        assert_eq!(corner.offset(1, -1), Some(Square::new(1, 6)));
        assert_eq!(corner.offset(-1, -1), None);
        assert_eq!(Square::new(i8::MAX, 0).offset(1, 0), None);
    }

    #[test]
    fn test_square_index_round_trip() {
        for index in 0..64 {
            assert_eq!(Square::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_piece_chars() {
        for piece in [
            Piece::man(Color::White),
            Piece::king(Color::White),
            Piece::man(Color::Black),
            Piece::king(Color::Black),
        ] {
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
        }
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn test_move_accessors_and_display() {
        let jump = Move::Jump {
            from: Square::new(2, 5),
            to: Square::new(4, 3),
            captured: Square::new(3, 4),
        };
        assert!(jump.is_jump());
        assert_eq!(jump.captured(), Some(Square::new(3, 4)));
        assert_eq!(jump.to_string(), "2,5x4,3");

        let step = Move::Step {
            from: Square::new(2, 5),
            to: Square::new(1, 4),
        };
        assert!(!step.is_jump());
        assert_eq!(step.captured(), None);
        assert_eq!(step.to_string(), "2,5-1,4");
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::win_for(Color::Black), Outcome::BlackWins);
        assert_eq!(Outcome::WhiteWins.winner(), Some(Color::White));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::Undecided.is_decided());
    }
}
