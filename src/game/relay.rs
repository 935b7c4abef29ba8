//! Conversion between engine moves and relay messages
//!
//! Moves travel as plain integer tuples. Anything arriving from a peer is
//! checked for coordinates first and then goes through the controller's
//! normal validation, exactly like a human click.

use checkers_engine::{Color, Move, MoveEffect, Outcome, Square};
use shared::{GameMessage, PlayerColor, ProtocolError, WireMove};
use tracing::{info, warn};

use super::controller::GameController;
use super::error::{GameError, GameResult};

pub fn player_color(color: Color) -> PlayerColor {
    match color {
        Color::White => PlayerColor::White,
        Color::Black => PlayerColor::Black,
    }
}

pub fn engine_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::White => Color::White,
        PlayerColor::Black => Color::Black,
    }
}

fn wire_square(square: Square) -> (u8, u8) {
    (square.x as u8, square.y as u8)
}

fn board_square((x, y): (u8, u8)) -> Square {
    Square::new(x as i8, y as i8)
}

/// Wire form of a move taken from the engine (all squares on the board)
pub fn to_wire(mv: Move) -> WireMove {
    WireMove {
        from: wire_square(mv.from()),
        to: wire_square(mv.to()),
        captured: mv.captured().map(wire_square),
    }
}

pub fn from_wire(wire: WireMove) -> Result<Move, ProtocolError> {
    wire.validate()?;
    let (from, to) = (board_square(wire.from), board_square(wire.to));
    Ok(match wire.captured {
        Some(captured) => Move::Jump {
            from,
            to,
            captured: board_square(captured),
        },
        None => Move::Step { from, to },
    })
}

/// Broadcast form of a move just played by `by`
pub fn move_made(mv: Move, by: Color) -> GameMessage {
    GameMessage::MoveMade {
        mv: to_wire(mv),
        by: player_color(by),
    }
}

impl GameController {
    /// Apply a message received from the peer playing `remote`
    ///
    /// Returns the effect of the move for move messages, `None` for messages
    /// that end the game.
    pub fn apply_remote(
        &mut self,
        message: GameMessage,
        remote: Color,
    ) -> GameResult<Option<MoveEffect>> {
        match message {
            GameMessage::SubmitMove { mv } => self.apply_remote_move(mv, remote).map(Some),
            GameMessage::MoveMade { mv, by } => {
                if engine_color(by) != remote {
                    warn!("Relay attributed a move to {:?}, expected {}", by, remote);
                    return Err(GameError::InvalidMove {
                        message: format!("move attributed to {:?}", by),
                    });
                }
                self.apply_remote_move(mv, remote).map(Some)
            }
            GameMessage::Resign => {
                info!("{} resigned", remote);
                self.resign(remote)?;
                Ok(None)
            }
            GameMessage::GameEnd { winner, reason } => {
                info!("Relay ended the game: {}", reason);
                if self.is_over() {
                    return Ok(None);
                }
                let result = match winner {
                    Some(color) => Outcome::win_for(engine_color(color)),
                    None => Outcome::Draw,
                };
                self.conclude(result);
                Ok(None)
            }
        }
    }

    fn apply_remote_move(&mut self, wire: WireMove, remote: Color) -> GameResult<MoveEffect> {
        if self.to_move() != remote {
            return Err(GameError::InvalidMove {
                message: format!("it is not {}'s turn", remote),
            });
        }
        let mv = from_wire(wire)?;
        self.submit(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::{AiConfig, GameMode};
    use shared::{decode_binary, encode_binary};

    fn hot_seat() -> GameController {
        GameController::new(AiConfig {
            mode: GameMode::VsHuman,
            ..AiConfig::default()
        })
    }

    #[test]
    fn test_wire_conversion() {
        let jump = Move::Jump {
            from: Square::new(2, 5),
            to: Square::new(4, 3),
            captured: Square::new(3, 4),
        };
        let wire = to_wire(jump);
        assert_eq!(wire.captured, Some((3, 4)));
        assert_eq!(from_wire(wire).expect("on board"), jump);

        let off_board = WireMove {
            from: (8, 1),
            to: (7, 0),
            captured: None,
        };
        assert!(matches!(
            from_wire(off_board),
            Err(ProtocolError::InvalidSquare { x: 8, y: 1 })
        ));
    }

    #[test]
    fn test_remote_move_goes_through_validation() {
        let mut game = hot_seat();
        let opening = Move::Step {
            from: Square::new(2, 5),
            to: Square::new(3, 4),
        };
        let frame = encode_binary(&move_made(opening, Color::White)).expect("encode");
        let message: GameMessage = decode_binary(&frame).expect("decode");

        game.apply_remote(message, Color::White)
            .expect("legal remote move");
        assert_eq!(game.to_move(), Color::Black);

        let replay = GameMessage::SubmitMove {
            mv: to_wire(opening),
        };
        assert!(matches!(
            game.apply_remote(replay, Color::White),
            Err(GameError::InvalidMove { .. })
        ));

        let bogus = GameMessage::SubmitMove {
            mv: WireMove {
                from: (1, 2),
                to: (1, 3),
                captured: None,
            },
        };
        assert!(matches!(
            game.apply_remote(bogus, Color::Black),
            Err(GameError::InvalidMove { .. })
        ));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_remote_resign_and_game_end() {
        let mut game = hot_seat();
        game.apply_remote(GameMessage::Resign, Color::Black)
            .expect("resign");
        assert_eq!(game.outcome(), Outcome::WhiteWins);

        let mut game = hot_seat();
        let end = GameMessage::GameEnd {
            winner: None,
            reason: "agreed draw".to_string(),
        };
        game.apply_remote(end, Color::Black).expect("game end");
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}
