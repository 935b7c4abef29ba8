//! Turn state management for game flow control
//!
//! Tracks whose turn it is, where we are within that turn, and which piece
//! (if any) is locked into a multi-jump. The controller consults the phase
//! before accepting input so a human can never move while the AI is
//! thinking or after the game has ended.

use checkers_engine::{Color, Outcome, Square};

/// Fine-grained turn flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    /// Waiting for the player to select a piece or submit a move
    ///
    /// Valid transitions: → PieceSelected, → AiThinking, → GameOver
    #[default]
    AwaitingSelection,

    /// A piece is selected and its legal moves are on offer
    ///
    /// Valid transitions: → AwaitingSelection (deselect or move played), → GameOver
    PieceSelected,

    /// A search is in flight for the side to move
    ///
    /// Valid transitions: → AwaitingSelection, → AiThinking (next hop of a chain), → GameOver
    AiThinking,

    /// Terminal state
    GameOver,
}

impl TurnPhase {
    /// Check if this state allows human input
    pub fn accepts_input(&self) -> bool {
        matches!(self, TurnPhase::AwaitingSelection | TurnPhase::PieceSelected)
    }
}

/// Everything about the current turn that is not on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub to_move: Color,
    pub phase: TurnPhase,
    /// Piece that must keep jumping before the turn passes
    pub chain: Option<Square>,
    pub selected: Option<Square>,
    pub outcome: Outcome,
    /// Completed turns (a whole multi-jump counts once)
    pub turn_number: u32,
}

impl TurnState {
    pub fn new(to_move: Color) -> Self {
        TurnState {
            to_move,
            phase: TurnPhase::AwaitingSelection,
            chain: None,
            selected: None,
            outcome: Outcome::Undecided,
            turn_number: 0,
        }
    }

    /// Hand the move to the other side
    pub fn pass(&mut self) {
        self.to_move = self.to_move.opponent();
        self.chain = None;
        self.selected = None;
        self.turn_number += 1;
        if self.phase != TurnPhase::GameOver {
            self.phase = TurnPhase::AwaitingSelection;
        }
    }

    /// Keep the move with the same side, locked to the piece on `square`
    pub fn continue_chain(&mut self, square: Square) {
        self.chain = Some(square);
        self.selected = Some(square);
    }

    pub fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.phase = TurnPhase::GameOver;
        self.selected = None;
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_input() {
        assert!(TurnPhase::AwaitingSelection.accepts_input());
        assert!(TurnPhase::PieceSelected.accepts_input());
        assert!(!TurnPhase::AiThinking.accepts_input());
        assert!(!TurnPhase::GameOver.accepts_input());
    }

    #[test]
    fn test_pass_flips_side_and_clears_chain() {
        let mut turn = TurnState::new(Color::White);
        turn.continue_chain(Square::new(3, 4));
        turn.phase = TurnPhase::PieceSelected;
        turn.pass();
        assert_eq!(turn.to_move, Color::Black);
        assert_eq!(turn.chain, None);
        assert_eq!(turn.selected, None);
        assert_eq!(turn.phase, TurnPhase::AwaitingSelection);
        assert_eq!(turn.turn_number, 1);
    }

    #[test]
    fn test_finish_is_terminal() {
        let mut turn = TurnState::new(Color::White);
        turn.finish(Outcome::BlackWins);
        turn.pass();
        assert!(turn.is_over());
        assert_eq!(turn.outcome, Outcome::BlackWins);
    }
}
