//! Match engine: strength aggregation, simulation loop and statistics.

pub mod simulator;
pub mod statistics;
pub mod strength;

pub use simulator::{
    determine_event_kind, pick_side, select_player, simulate_match, MatchEngine, Side,
};
pub use statistics::{generate_statistics, possession_share};
pub use strength::{
    calculate_team_strength, calculate_team_strength_with_config, position_strength, TeamStrength,
};
