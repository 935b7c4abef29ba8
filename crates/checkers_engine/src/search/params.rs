//! Search configuration and difficulty presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_TT_CAPACITY, MAX_SEARCH_DEPTH};
use crate::evaluation::EvalWeights;

/// Knobs for one move computation
///
/// `time_budget_ms = None` means no time pressure: the search always runs to
/// `target_depth`, which makes results reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub target_depth: u32,
    pub time_budget_ms: Option<u64>,
    /// Extra plies of capture-only search beyond `target_depth` (0 disables it)
    pub quiescence_depth: u32,
    pub tt_capacity: usize,
    pub weights: EvalWeights,
}

impl SearchParams {
    /// Fixed-depth search without a clock, standard weights
    pub fn fixed_depth(depth: u32) -> Self {
        SearchParams {
            target_depth: depth,
            time_budget_ms: None,
            ..Difficulty::Medium.params()
        }
    }

    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget_ms = budget.map(|d| d.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    pub fn with_quiescence_depth(mut self, depth: u32) -> Self {
        self.quiescence_depth = depth;
        self
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Depth the iterative driver will stop at
    pub fn depth_limit(&self) -> u32 {
        self.target_depth.clamp(1, MAX_SEARCH_DEPTH)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Difficulty::default().params()
    }
}

/// AI strength presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn params(self) -> SearchParams {
        match self {
            Difficulty::Easy => SearchParams {
                target_depth: 3,
                time_budget_ms: Some(250),
                quiescence_depth: 2,
                tt_capacity: 1 << 14,
                weights: EvalWeights::basic(),
            },
            Difficulty::Medium => SearchParams {
                target_depth: 6,
                time_budget_ms: Some(1000),
                quiescence_depth: 4,
                tt_capacity: DEFAULT_TT_CAPACITY,
                weights: EvalWeights::standard(),
            },
            Difficulty::Hard => SearchParams {
                target_depth: 12,
                time_budget_ms: Some(3000),
                quiescence_depth: 8,
                tt_capacity: 1 << 18,
                weights: EvalWeights::tuned(),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty '{}'", s))
    }
}
