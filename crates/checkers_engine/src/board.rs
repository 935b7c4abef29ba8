//! Board model
//!
//! An 8×8 grid of optional pieces plus the Zobrist hash of the current
//! placement. The hash is updated by XOR on every mutation primitive
//! ([`Board::place`], [`Board::remove`], [`Board::promote`]), so make/unmake
//! in the search never recomputes it from scratch.
//!
//! Accessors treat off-board squares as empty; nothing here panics on bad
//! coordinates.

use std::fmt;

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::hash::piece_key;
use crate::types::*;

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
    hash: u64,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [None; SQUARE_COUNT],
            hash: 0,
        }
    }

    /// Opening position: twelve men per side on the playable squares of the three back rows
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let square = Square::new(x, y);
                if !square.is_playable() {
                    continue;
                }
                if y < STARTING_ROWS {
                    board.place(square, Piece::man(Color::Black));
                } else if y >= BOARD_SIZE - STARTING_ROWS {
                    board.place(square, Piece::man(Color::White));
                }
            }
        }
        board
    }

    /// Piece at `square`, `None` for empty or off-board squares
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if square.is_valid() {
            self.cells[square.index()]
        } else {
            None
        }
    }

    /// On the board and empty
    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        square.is_valid() && self.cells[square.index()].is_none()
    }

    /// Put `piece` on `square`, returning whatever was there
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        let previous = self.remove(square);
        self.cells[square.index()] = Some(piece);
        self.hash ^= piece_key(piece, square);
        previous
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        let previous = self.cells[square.index()].take();
        if let Some(piece) = previous {
            self.hash ^= piece_key(piece, square);
        }
        previous
    }

    /// Crown the man on `square`; returns false if there is no man there
    pub fn promote(&mut self, square: Square) -> bool {
        match self.get(square) {
            Some(piece) if !piece.is_king() => {
                self.place(square, piece.crowned());
                true
            }
            _ => false,
        }
    }

    /// All pieces in scan order (row 0 first, left to right)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|piece| (Square::from_index(index), piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    pub fn count_rank(&self, color: Color, rank: Rank) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.rank == rank)
            .count()
    }

    pub fn total_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Zobrist hash of the piece placement (side to move is folded in by the search)
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Parse the text form produced by `Display`
    ///
    /// Eight non-empty lines of eight characters, row 0 first. `.` is an
    /// empty square, `a`/`A` a White man/king and `b`/`B` a Black man/king.
    /// Pieces on light squares are rejected.
    pub fn from_text(text: &str) -> EngineResult<Board> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(EngineError::MalformedBoard {
                message: format!("expected {} rows, found {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(EngineError::MalformedBoard {
                    message: format!("row {} has {} cells", y, cells.len()),
                });
            }
            for (x, &c) in cells.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or_else(|| EngineError::MalformedBoard {
                    message: format!("unknown piece '{}' at ({}, {})", c, x, y),
                })?;
                let square = Square::new(x as i8, y as i8);
                if !square.is_playable() {
                    return Err(EngineError::InvalidSquare {
                        x: square.x,
                        y: square.y,
                    });
                }
                board.place(square, piece);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = self
                    .get(Square::new(x, y))
                    .map_or('.', |piece| piece.to_char());
                write!(f, "{}", c)?;
            }
            if y < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ hash: {:#018x} }}", self.hash)?;
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::full_hash;

    #[test]
    fn test_initial_position_layout() {
        let board = Board::initial();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        for (square, piece) in board.pieces() {
            assert!(square.is_playable(), "{} is not playable", square);
            match piece.color {
                Color::Black => assert!(square.y < 3),
                Color::White => assert!(square.y > 4),
            }
        }
    }

    #[test]
    fn test_off_board_access_is_empty() {
        let mut board = Board::initial();
        assert_eq!(board.get(Square::new(-1, 3)), None);
        assert!(!board.is_vacant(Square::new(8, 8)));
        assert_eq!(board.place(Square::new(9, 0), Piece::man(Color::White)), None);
        assert_eq!(board.remove(Square::new(0, -2)), None);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_incremental_hash_matches_full_hash() {
        let mut board = Board::initial();
        assert_eq!(board.hash(), full_hash(&board));

        let piece = board.remove(Square::new(2, 5)).expect("opening man");
        board.place(Square::new(3, 4), piece);
        assert_eq!(board.hash(), full_hash(&board));

        board.remove(Square::new(1, 2));
        board.place(Square::new(1, 0), Piece::man(Color::White));
        assert!(!board.promote(Square::new(1, 1)));
        board.remove(Square::new(1, 0));
        board.place(Square::new(1, 0), Piece::man(Color::White));
        assert!(board.promote(Square::new(1, 0)));
        assert_eq!(board.hash(), full_hash(&board));
    }

    #[test]
    fn test_hash_returns_after_undoing_changes() {
        let mut board = Board::initial();
        let before = board.hash();
        let piece = board.remove(Square::new(0, 5)).expect("opening man");
        board.place(Square::new(1, 4), piece);
        assert_ne!(board.hash(), before);
        board.remove(Square::new(1, 4));
        board.place(Square::new(0, 5), piece);
        assert_eq!(board.hash(), before);
    }

    #[test]
    fn test_text_round_trip() {
        let board = Board::initial();
        let text = board.to_string();
        assert_eq!(Board::from_text(&text).expect("valid text"), board);
        assert!(text.starts_with(".b.b.b.b"));
    }

    #[test]
    fn test_from_text_rejects_bad_input() {
        assert!(matches!(
            Board::from_text("........"),
            Err(EngineError::MalformedBoard { .. })
        ));

        let light_square = "a.......\n........\n........\n........\n........\n........\n........\n........";
        assert_eq!(
            Board::from_text(light_square),
            Err(EngineError::InvalidSquare { x: 0, y: 0 })
        );

        let unknown = ".x......\n........\n........\n........\n........\n........\n........\n........";
        assert!(matches!(
            Board::from_text(unknown),
            Err(EngineError::MalformedBoard { .. })
        ));
    }

    #[test]
    fn test_promote_only_men() {
        let mut board = Board::empty();
        let square = Square::new(3, 0);
        board.place(square, Piece::man(Color::White));
        assert!(board.promote(square));
        assert_eq!(board.get(square), Some(Piece::king(Color::White)));
        assert!(!board.promote(square));
        assert_eq!(board.count_rank(Color::White, Rank::King), 1);
    }
}
