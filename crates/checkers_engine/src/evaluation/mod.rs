//! Static position evaluation
//!
//! Scores a position without searching it, as a weighted sum of:
//! - Material (men and kings, kings worth several men)
//! - Centre occupancy
//! - King mobility (open squares along a king's diagonals, capped)
//! - Promotion proximity of men
//! - Back-rank presence
//! - Captures available right now
//! - An endgame adjustment once few pieces remain
//!
//! ## Module Organization
//!
//! - `weights` - Tunable weight sets and the presets difficulty levels pick from
//! - `material` - Material balance
//! - `position` - Full position evaluation

mod material;
mod position;
mod weights;

pub use material::evaluate_material;
pub use position::{evaluate, king_mobility};
pub use weights::EvalWeights;
