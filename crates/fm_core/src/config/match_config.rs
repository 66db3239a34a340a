//! Match simulation tuning.

use serde::{Deserialize, Serialize};

/// Regulation time. Timelines never run past this minute.
pub const MAX_MINUTES: u8 = 90;

/// Strength aggregation and minute-by-minute event rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Simulated minutes, inclusive (기본: 90)
    pub minutes: u8,
    /// Per-minute event chance (기본: 0.02)
    pub event_probability: f64,
    /// Added to the home overall only, never to sub-scores (기본: 5)
    pub home_advantage: f64,
    /// Score for an empty position group or roster (기본: 50)
    pub neutral_strength: u8,
    /// Players at or above this fatigue are invisible to the aggregator (기본: 90)
    pub unavailable_fatigue: u8,

    // === Event kind cumulative thresholds ===
    pub goal_threshold: f64,
    pub card_threshold: f64,
    pub substitution_threshold: f64,

    pub statistics: StatisticsConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            minutes: 90,
            event_probability: 0.02,
            home_advantage: 5.0,
            neutral_strength: 50,
            unavailable_fatigue: 90,
            goal_threshold: 0.60,
            card_threshold: 0.80,
            substitution_threshold: 0.95,
            statistics: StatisticsConfig::default(),
        }
    }
}

/// Cosmetic statistics. None of these feed back into score or events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Random shot base is `floor(u * shots_random_range)`
    pub shots_random_range: u32,
    /// Shots gain `attack / shots_attack_divisor`
    pub shots_attack_divisor: f64,
    pub shots_on_target_ratio: f64,
    pub fouls_base: u32,
    pub fouls_random_range: u32,
    pub corners_base: u32,
    pub corners_random_range: u32,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            shots_random_range: 10,
            shots_attack_divisor: 10.0,
            shots_on_target_ratio: 0.4,
            fouls_base: 5,
            fouls_random_range: 15,
            corners_base: 2,
            corners_random_range: 8,
        }
    }
}

impl MatchConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_MINUTES).contains(&self.minutes) {
            return Err(format!("match.minutes must be within 1..={MAX_MINUTES}, got {}", self.minutes));
        }
        if !(0.0..=1.0).contains(&self.event_probability) {
            return Err(format!(
                "match.event_probability must be within [0, 1], got {}",
                self.event_probability
            ));
        }
        let thresholds = [self.goal_threshold, self.card_threshold, self.substitution_threshold];
        if thresholds.iter().any(|t| !(0.0..=1.0).contains(t))
            || thresholds.windows(2).any(|w| w[0] > w[1])
        {
            return Err(format!(
                "match event thresholds must be increasing within [0, 1], got {:?}",
                thresholds
            ));
        }
        if self.neutral_strength > 100 {
            return Err("match.neutral_strength must be <= 100".to_string());
        }
        if self.statistics.shots_attack_divisor <= 0.0 {
            return Err("match.statistics.shots_attack_divisor must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.statistics.shots_on_target_ratio) {
            return Err("match.statistics.shots_on_target_ratio must be within [0, 1]".to_string());
        }
        Ok(())
    }
}
