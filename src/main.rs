use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use checkers_engine::{search_position, Board, Color, Difficulty, SearchParams};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use xfcheckers::ui::{describe_outcome, render_board, run_session};
use xfcheckers::{AiConfig, GameController, GameMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Checkers with mandatory jumps and flying kings", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// easy, medium or hard
        #[arg(short, long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Side played by the engine
        #[arg(long, value_enum, default_value_t = Side::Black)]
        ai_color: Side,

        /// Search parameters as JSON, replacing the difficulty preset
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Let the engine play both sides
    Selfplay {
        #[arg(short, long, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,

        #[arg(long)]
        params: Option<PathBuf>,

        /// Stop after this many hops without a result
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
    /// Print the engine's choice for a position
    Hint {
        /// Board text file: 8 lines of `.`, `a`, `A`, `b`, `B`
        board: PathBuf,

        /// Side to move
        #[arg(long, value_enum, default_value_t = Side::White)]
        side: Side,

        #[arg(short, long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        #[arg(long)]
        params: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_params(path: &Path) -> Result<SearchParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let params: SearchParams = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse search parameters in {}", path.display()))?;
    info!("Loaded search parameters from {}", path.display());
    Ok(params)
}

fn ai_config(mode: GameMode, difficulty: Difficulty, params: Option<&Path>) -> Result<AiConfig> {
    let config = AiConfig {
        mode,
        difficulty,
        params: None,
    };
    Ok(match params {
        Some(path) => config.with_params(load_params(path)?),
        None => config,
    })
}

fn play(difficulty: Difficulty, ai_color: Side, params: Option<&Path>) -> Result<()> {
    let mode = GameMode::VsAI {
        ai_color: ai_color.into(),
    };
    let mut game = GameController::new(ai_config(mode, difficulty, params)?);
    info!("Starting game against {} engine", difficulty);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut game, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn selfplay(difficulty: Difficulty, params: Option<&Path>, max_plies: usize) -> Result<()> {
    let mut game = GameController::new(ai_config(GameMode::AiVsAi, difficulty, params)?);

    while !game.is_over() && game.history().len() < max_plies {
        let side = game.to_move();
        let hops = game.play_ai_turn()?;
        let played: Vec<String> = hops.iter().map(|mv| mv.to_string()).collect();
        println!("{}: {}", side, played.join(" "));
    }

    println!("{}", render_board(game.board()));
    if game.is_over() {
        println!("{}", describe_outcome(game.outcome()));
    } else {
        println!("Stopped after {} plies", game.history().len());
    }
    Ok(())
}

fn hint(board: &Path, side: Side, difficulty: Difficulty, params: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(board)
        .with_context(|| format!("Failed to read {}", board.display()))?;
    let board = Board::from_text(&text)?;
    let params = match params {
        Some(path) => load_params(path)?,
        None => difficulty.params(),
    };

    println!("{}", render_board(&board));
    let report = search_position(&board, side.into(), None, &params);
    let Some(best) = report.best_move else {
        bail!("{:?} has no legal move", side);
    };
    println!(
        "best {} score {} depth {} nodes {} in {:?}{}",
        best,
        report.score,
        report.depth_reached,
        report.stats.nodes,
        report.elapsed,
        if report.fallback { " (heuristic fallback)" } else { "" }
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            difficulty,
            ai_color,
            params,
        } => play(difficulty, ai_color, params.as_deref()),
        Commands::Selfplay {
            difficulty,
            params,
            max_plies,
        } => selfplay(difficulty, params.as_deref(), max_plies),
        Commands::Hint {
            board,
            side,
            difficulty,
            params,
        } => hint(&board, side, difficulty, params.as_deref()),
    }
}
