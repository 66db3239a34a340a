//! Player development
//!
//! - `model`: post-match improvement rolls for a single player
//! - `aftermath`: per-roster bookkeeping after the final whistle (performance, fatigue, appearances)

pub mod aftermath;
pub mod model;

pub use aftermath::{process_match_aftermath, MatchAftermath, PlayerMatchUpdate};
pub use model::{calculate_improvement, DevelopmentModel};
