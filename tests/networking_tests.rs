//! Networking Tests
//!
//! Two controllers kept in sync by relaying moves through the shared
//! protocol, plus message serialization for both codecs.

use checkers_engine::{Color, Move, Outcome, Square};
use shared::{
    decode_binary, decode_json_line, encode_binary, encode_json_line, GameMessage, PlayerColor,
    WireMove,
};
use xfcheckers::game::relay::{engine_color, from_wire, move_made, player_color, to_wire};
use xfcheckers::{AiConfig, GameController, GameError, GameMode};

fn peer() -> GameController {
    GameController::new(AiConfig {
        mode: GameMode::VsHuman,
        ..AiConfig::default()
    })
}

/// Play `from`-`to` on `local` and deliver it to `remote` as a JSON line
fn relay(local: &mut GameController, remote: &mut GameController, from: Square, to: Square) {
    let mover = local.to_move();
    let hop = local
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to)
        .expect("scripted move is legal");
    local.submit(hop).expect("local move");

    let line = encode_json_line(&move_made(hop, mover)).expect("encode");
    assert!(line.ends_with('\n'));
    let message: GameMessage = decode_json_line(&line).expect("decode");
    remote.apply_remote(message, mover).expect("remote move");
}

#[test]
fn test_peers_stay_in_sync() {
    let mut white = peer();
    let mut black = peer();
    let script = [
        (Square::new(2, 5), Square::new(3, 4)),
        (Square::new(1, 2), Square::new(2, 3)),
        (Square::new(3, 4), Square::new(1, 2)),
        (Square::new(0, 1), Square::new(2, 3)),
    ];

    for (ply, (from, to)) in script.into_iter().enumerate() {
        if ply % 2 == 0 {
            relay(&mut white, &mut black, from, to);
        } else {
            relay(&mut black, &mut white, from, to);
        }
        assert_eq!(white.board(), black.board());
        assert_eq!(white.to_move(), black.to_move());
    }
    assert_eq!(white.history().len(), 4);
}

#[test]
fn test_remote_move_out_of_turn_is_rejected() {
    let mut game = peer();
    let message = GameMessage::SubmitMove {
        mv: WireMove {
            from: (1, 2),
            to: (0, 3),
            captured: None,
        },
    };
    assert!(matches!(
        game.apply_remote(message, Color::Black),
        Err(GameError::InvalidMove { .. })
    ));
    assert!(game.history().is_empty());
}

#[test]
fn test_off_board_wire_move_is_a_protocol_error() {
    let mut game = peer();
    let message = GameMessage::SubmitMove {
        mv: WireMove {
            from: (2, 5),
            to: (9, 9),
            captured: None,
        },
    };
    assert!(matches!(
        game.apply_remote(message, Color::White),
        Err(GameError::Protocol(_))
    ));
}

#[test]
fn test_wire_format_is_an_integer_tuple() {
    let jump = Move::Jump {
        from: Square::new(0, 7),
        to: Square::new(5, 2),
        captured: Square::new(3, 4),
    };
    let wire = to_wire(jump);
    assert_eq!(wire.from, (0, 7));
    assert_eq!(wire.to, (5, 2));
    assert_eq!(wire.captured, Some((3, 4)));

    let bytes = encode_binary(&GameMessage::SubmitMove { mv: wire }).expect("encode");
    let decoded: GameMessage = decode_binary(&bytes).expect("decode");
    match decoded {
        GameMessage::SubmitMove { mv } => assert_eq!(from_wire(mv).expect("valid"), jump),
        other => panic!("Wrong message type: {:?}", other),
    }
}

#[test]
fn test_color_mapping() {
    for color in [Color::White, Color::Black] {
        assert_eq!(engine_color(player_color(color)), color);
    }
    let made = move_made(
        Move::Step {
            from: Square::new(1, 2),
            to: Square::new(2, 3),
        },
        Color::Black,
    );
    let bytes = encode_binary(&made).expect("encode");
    match decode_binary::<GameMessage>(&bytes).expect("decode") {
        GameMessage::MoveMade { by, .. } => assert_eq!(by, PlayerColor::Black),
        other => panic!("Wrong message type: {:?}", other),
    }
}

#[test]
fn test_relayed_game_end() {
    let mut game = peer();
    let end = GameMessage::GameEnd {
        winner: Some(PlayerColor::Black),
        reason: "White resigned".to_string(),
    };
    game.apply_remote(end, Color::Black).expect("game end");
    assert_eq!(game.outcome(), Outcome::BlackWins);
    assert!(game.is_over());
}
