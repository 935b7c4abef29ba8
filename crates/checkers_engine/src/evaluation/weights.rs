//! Evaluation weight sets

use serde::{Deserialize, Serialize};

/// Weights of every evaluation term, in score units
///
/// Loaded from JSON by the CLI's `--params` flag, so every field has a
/// serde default taken from [`EvalWeights::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub man: i32,
    pub king: i32,
    /// Per piece standing in the 4×4 centre
    pub centre: i32,
    /// Per open square a king can slide to
    pub king_mobility: i32,
    /// Open squares counted per king
    pub king_mobility_cap: i32,
    /// Per row a man has advanced from its home row
    pub advancement: i32,
    /// Per man still guarding its home row
    pub back_rank: i32,
    /// Per capture hop available to the side
    pub capture_threat: i32,
    /// Total piece count below which the endgame terms apply
    pub endgame_threshold: usize,
    /// Material difference is scaled to this percentage in the endgame
    pub endgame_material_percent: i32,
    /// Extra king mobility bonus for the side ahead in the endgame
    pub endgame_king_mobility: i32,
}

impl EvalWeights {
    /// Material and advancement only
    pub const fn basic() -> Self {
        EvalWeights {
            man: 100,
            king: 300,
            centre: 0,
            king_mobility: 0,
            king_mobility_cap: 0,
            advancement: 4,
            back_rank: 0,
            capture_threat: 0,
            endgame_threshold: 0,
            endgame_material_percent: 100,
            endgame_king_mobility: 0,
        }
    }

    pub const fn standard() -> Self {
        EvalWeights {
            man: 100,
            king: 300,
            centre: 6,
            king_mobility: 3,
            king_mobility_cap: 10,
            advancement: 4,
            back_rank: 8,
            capture_threat: 15,
            endgame_threshold: 8,
            endgame_material_percent: 150,
            endgame_king_mobility: 2,
        }
    }

    /// Standard terms with stronger king play and tactical awareness
    pub const fn tuned() -> Self {
        EvalWeights {
            man: 100,
            king: 320,
            centre: 8,
            king_mobility: 4,
            king_mobility_cap: 12,
            advancement: 5,
            back_rank: 10,
            capture_threat: 20,
            endgame_threshold: 10,
            endgame_material_percent: 175,
            endgame_king_mobility: 3,
        }
    }

    pub fn piece_value(&self, is_king: bool) -> i32 {
        if is_king {
            self.king
        } else {
            self.man
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kings_outweigh_men() {
        for weights in [EvalWeights::basic(), EvalWeights::standard(), EvalWeights::tuned()] {
            assert!(weights.king >= 2 * weights.man);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let weights: EvalWeights =
            serde_json::from_str(r#"{ "king": 400 }"#).expect("valid weights json");
        assert_eq!(weights.king, 400);
        assert_eq!(weights.man, EvalWeights::standard().man);
        assert_eq!(weights.endgame_threshold, 8);
    }
}
