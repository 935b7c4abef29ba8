//! AI configuration: game mode and difficulty settings
//!
//! # Game Modes
//!
//! - **VsHuman**: Two human players (hot-seat)
//! - **VsAI**: One human player vs the engine (specify the AI color)
//! - **AiVsAi**: The engine plays both sides
//!
//! # Difficulty Levels
//!
//! | Difficulty | Target depth | Time/Move | Quiescence |
//! |------------|--------------|-----------|------------|
//! | Easy       | 3            | 0.25s     | 2          |
//! | Medium     | 6            | 1.0s      | 4          |
//! | Hard       | 12           | 3.0s      | 8          |
//!
//! A parameter file loaded with `--params` replaces the preset entirely.
//!
//! ```rust,ignore
//! let config = AiConfig {
//!     mode: GameMode::VsAI { ai_color: Color::Black },
//!     difficulty: Difficulty::Hard,
//!     params: None,
//! };
//! ```

use checkers_engine::{Color, Difficulty, SearchParams};

/// Who controls each side, and how strongly the engine plays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Overrides the difficulty preset when set
    pub params: Option<SearchParams>,
}

impl AiConfig {
    pub fn vs_ai(ai_color: Color, difficulty: Difficulty) -> Self {
        AiConfig {
            mode: GameMode::VsAI { ai_color },
            difficulty,
            params: None,
        }
    }

    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Parameters handed to the engine for every search
    pub fn search_params(&self) -> SearchParams {
        self.params
            .clone()
            .unwrap_or_else(|| self.difficulty.params())
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    VsHuman,
    /// The specified color is played by the engine, the other by a human
    VsAI { ai_color: Color },
    AiVsAi,
}

impl Default for GameMode {
    /// AI plays Black, so the human opens
    fn default() -> Self {
        GameMode::VsAI {
            ai_color: Color::Black,
        }
    }
}

impl GameMode {
    /// True if `color` is moved by the engine in this mode
    pub fn is_ai(self, color: Color) -> bool {
        match self {
            GameMode::VsHuman => false,
            GameMode::VsAI { ai_color } => ai_color == color,
            GameMode::AiVsAi => true,
        }
    }
}
