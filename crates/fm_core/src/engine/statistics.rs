//! Post-match statistics.
//!
//! Deliberately independent of the event timeline: the generator only sees the
//! two strength snapshots, so shots and possession never explain the score.

use crate::config::StatisticsConfig;
use crate::models::{round_half_up, MatchStatistics, Split};
use crate::rng::UniformSource;

use super::strength::TeamStrength;

/// `home` is expected to already carry the home advantage.
pub fn generate_statistics(
    home: &TeamStrength,
    away: &TeamStrength,
    rng: &mut dyn UniformSource,
    config: &StatisticsConfig,
) -> MatchStatistics {
    let home_possession = possession_share(home.overall, away.overall);

    let home_shots = raw_shots(home.attack, rng, config);
    let away_shots = raw_shots(away.attack, rng, config);

    let fouls = Split::new(
        ranged(rng, config.fouls_random_range, config.fouls_base),
        ranged(rng, config.fouls_random_range, config.fouls_base),
    );
    let corners = Split::new(
        ranged(rng, config.corners_random_range, config.corners_base),
        ranged(rng, config.corners_random_range, config.corners_base),
    );

    MatchStatistics {
        possession: Split::new(home_possession, 100 - home_possession),
        shots: Split::new(round_count(home_shots), round_count(away_shots)),
        shots_on_target: Split::new(
            round_count(home_shots * config.shots_on_target_ratio),
            round_count(away_shots * config.shots_on_target_ratio),
        ),
        fouls,
        corners,
    }
}

/// Home possession percentage, proportional to overall-strength share.
pub fn possession_share(home_overall: f64, away_overall: f64) -> u8 {
    let total = home_overall + away_overall;
    if total <= 0.0 {
        return 50;
    }
    round_half_up(home_overall / total * 100.0).clamp(0.0, 100.0) as u8
}

fn raw_shots(attack: u8, rng: &mut dyn UniformSource, config: &StatisticsConfig) -> f64 {
    let base = (rng.next_uniform() * config.shots_random_range as f64).floor();
    base + attack as f64 / config.shots_attack_divisor
}

fn ranged(rng: &mut dyn UniformSource, range: u32, base: u32) -> u32 {
    (rng.next_uniform() * range as f64).floor() as u32 + base
}

fn round_count(x: f64) -> u32 {
    round_half_up(x).max(0.0) as u32
}
