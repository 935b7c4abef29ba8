//! Terminal front-end
//!
//! Draws the board as text with coordinates along both edges and reads
//! commands line by line. A move is written as two squares, `x,y x,y`;
//! for a multi-jump each hop is entered separately while the piece stays
//! locked.
//!
//! ```text
//!   0 1 2 3 4 5 6 7
//! 0 . b . b . b . b
//! 1 b . b . b . b .
//! ```

use std::io::{self, BufRead, Write};

use checkers_engine::constants::BOARD_SIZE;
use checkers_engine::{Board, Move, Outcome, Square};

use crate::game::{GameController, GameError, GameResult};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Select(Square),
    Moves,
    Undo,
    Board,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  x,y x,y     move the piece on the first square to the second
  select x,y  show the moves of one piece
  moves       list every legal move
  undo        take back your last move
  board       print the board
  quit        leave the game";

/// Board text with column numbers on top and row numbers on the left
pub fn render_board(board: &Board) -> String {
    let mut out = String::from(" ");
    for x in 0..BOARD_SIZE {
        out.push_str(&format!(" {}", x));
    }
    for (y, line) in board.to_string().lines().enumerate() {
        out.push('\n');
        out.push_str(&y.to_string());
        for cell in line.chars() {
            out.push(' ');
            out.push(cell);
        }
    }
    out
}

pub fn parse_square(token: &str) -> GameResult<Square> {
    let invalid = || GameError::InvalidMove {
        message: format!("'{}' is not a square, expected x,y", token),
    };
    let (x, y) = token.split_once(',').ok_or_else(invalid)?;
    let x: i8 = x.trim().parse().map_err(|_| invalid())?;
    let y: i8 = y.trim().parse().map_err(|_| invalid())?;
    let square = Square::new(x, y);
    if !square.is_valid() {
        return Err(GameError::InvalidMove {
            message: format!("{} is off the board", square),
        });
    }
    Ok(square)
}

pub fn parse_command(line: &str) -> GameResult<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["moves"] => Ok(Command::Moves),
        ["undo"] => Ok(Command::Undo),
        ["board"] => Ok(Command::Board),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["select", square] => Ok(Command::Select(parse_square(square)?)),
        [from, to] => Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
        }),
        _ => Err(GameError::InvalidMove {
            message: format!("unrecognised command '{}', type help", line.trim()),
        }),
    }
}

pub fn describe_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::WhiteWins => "White wins",
        Outcome::BlackWins => "Black wins",
        Outcome::Draw => "Draw",
        Outcome::Undecided => "Undecided",
    }
}

fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "no legal moves".to_string();
    }
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_status<W: Write>(game: &GameController, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render_board(game.board()))?;
    match game.chain() {
        Some(square) => writeln!(out, "{} to move, continue jumping from {}", game.to_move(), square),
        None if game.must_jump() => writeln!(out, "{} to move, capture is mandatory", game.to_move()),
        None => writeln!(out, "{} to move", game.to_move()),
    }
}

/// Undo back to the last position where a human is to move
fn undo_human_turn(game: &mut GameController) -> GameResult<()> {
    game.undo()?;
    while game.config().mode.is_ai(game.to_move()) || game.chain().is_some() {
        match game.undo() {
            Ok(_) => {}
            Err(GameError::NothingToUndo) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Carry out one command; the outer error is I/O, the inner one is for the user
fn execute<W: Write>(
    game: &mut GameController,
    command: Command,
    out: &mut W,
) -> io::Result<GameResult<()>> {
    match command {
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Board => print_status(game, out)?,
        Command::Moves => writeln!(out, "{}", format_moves(&game.legal_moves()))?,
        Command::Select(square) => match game.select(square) {
            Ok(moves) => writeln!(out, "{}", format_moves(&moves))?,
            Err(err) => return Ok(Err(err)),
        },
        Command::Undo => match undo_human_turn(game) {
            Ok(()) => print_status(game, out)?,
            Err(err) => return Ok(Err(err)),
        },
        Command::Move { from, to } => match game.play(from, to) {
            Ok(_) => print_status(game, out)?,
            Err(err) => return Ok(Err(err)),
        },
        Command::Quit => {}
    }
    Ok(Ok(()))
}

/// Run an interactive game until it ends, the user quits or input runs out
pub fn run_session<R: BufRead, W: Write>(
    game: &mut GameController,
    input: R,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut lines = input.lines();
    print_status(game, out)?;

    loop {
        if game.is_over() {
            writeln!(out, "{}", describe_outcome(game.outcome()))?;
            break;
        }

        if game.is_ai_turn() {
            let side = game.to_move();
            match game.play_ai_turn() {
                Ok(hops) => {
                    writeln!(out, "{} plays {}", side, format_moves(&hops))?;
                    print_status(game, out)?;
                }
                Err(err) => {
                    writeln!(out, "AI error: {}", err)?;
                    break;
                }
            }
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(err) = execute(game, command, out)? {
                    writeln!(out, "{}", err)?;
                }
            }
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    Ok(game.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AiConfig, GameMode};

    #[test]
    fn test_render_board_has_coordinates() {
        let text = render_board(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 . b . b . b . b");
        assert_eq!(lines[8], "7 a . a . a . a .");
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("2,5 3,4").expect("move"),
            Command::Move {
                from: Square::new(2, 5),
                to: Square::new(3, 4),
            }
        );
        assert_eq!(
            parse_command(" select 2,5 ").expect("select"),
            Command::Select(Square::new(2, 5))
        );
        assert_eq!(parse_command("moves").expect("moves"), Command::Moves);
        assert!(parse_command("2,5").is_err());
        assert!(parse_command("9,5 3,4").is_err());
        assert!(parse_command("a,b c,d").is_err());
    }

    #[test]
    fn test_session_plays_scripted_moves() {
        let mut game = GameController::new(AiConfig {
            mode: GameMode::VsHuman,
            ..AiConfig::default()
        });
        let script = "moves\n2,5 3,4\n3,4 4,3\n1,2 0,3\nquit\n";
        let mut out = Vec::new();

        let outcome = run_session(&mut game, script.as_bytes(), &mut out).expect("session io");
        assert_eq!(outcome, Outcome::Undecided);
        assert_eq!(game.history().len(), 2);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("2,5-3,4"));
        assert!(text.contains("not a legal move"));
    }
}
