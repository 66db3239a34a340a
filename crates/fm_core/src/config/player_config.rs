//! Player-side tuning: post-match development, aftermath bookkeeping, training.

use serde::{Deserialize, Serialize};

/// Improvement gate for players younger than `below_age`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub below_age: u32,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    /// Checked in order; the first band whose `below_age` exceeds the age wins.
    pub age_bands: Vec<AgeBand>,
    /// Used when no band matches (35+)
    pub veteran_probability: f64,

    /// Cap is `min(max_magnitude, performance / performance_divisor)`
    pub performance_divisor: u8,
    pub max_magnitude: u8,

    pub speed_chance: f64,
    pub technique_chance: f64,
    pub physical_chance_young: f64,
    pub physical_chance_old: f64,
    /// Physical uses the young chance strictly below this age
    pub physical_young_below_age: u32,
    pub mental_chance_senior: f64,
    pub mental_chance_junior: f64,
    /// Mental uses the senior chance strictly above this age
    pub mental_senior_above_age: u32,
    /// Goalkeepers only
    pub goalkeeping_chance: f64,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            age_bands: vec![
                AgeBand { below_age: 18, probability: 0.7 },
                AgeBand { below_age: 25, probability: 0.5 },
                AgeBand { below_age: 30, probability: 0.4 },
                AgeBand { below_age: 35, probability: 0.2 },
            ],
            veteran_probability: 0.1,
            performance_divisor: 20,
            max_magnitude: 3,
            speed_chance: 0.3,
            technique_chance: 0.4,
            physical_chance_young: 0.4,
            physical_chance_old: 0.2,
            physical_young_below_age: 25,
            mental_chance_senior: 0.5,
            mental_chance_junior: 0.3,
            mental_senior_above_age: 25,
            goalkeeping_chance: 0.4,
        }
    }
}

impl DevelopmentConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.age_bands.windows(2).any(|w| w[0].below_age >= w[1].below_age) {
            return Err("development.age_bands must be sorted by below_age".to_string());
        }
        let chances = self.age_bands.iter().map(|b| b.probability).chain([
            self.veteran_probability,
            self.speed_chance,
            self.technique_chance,
            self.physical_chance_young,
            self.physical_chance_old,
            self.mental_chance_senior,
            self.mental_chance_junior,
            self.goalkeeping_chance,
        ]);
        for chance in chances {
            if !(0.0..=1.0).contains(&chance) {
                return Err(format!("development probability out of range: {chance}"));
            }
        }
        if self.performance_divisor == 0 {
            return Err("development.performance_divisor must be non-zero".to_string());
        }
        Ok(())
    }
}

/// Bookkeeping applied to every participant after the final whistle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AftermathConfig {
    /// Performance is `floor(u * performance_range) + 1`
    pub performance_range: u32,
    pub fatigue_gain_base: u8,
    pub fatigue_gain_range: u32,
    pub fatigue_cap: u8,
}

impl Default for AftermathConfig {
    fn default() -> Self {
        Self { performance_range: 100, fatigue_gain_base: 10, fatigue_gain_range: 20, fatigue_cap: 100 }
    }
}

impl AftermathConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        // performance feeds the development cap as a 1..=100 score
        if !(1..=100).contains(&self.performance_range) {
            return Err(format!(
                "aftermath.performance_range must be within 1..=100, got {}",
                self.performance_range
            ));
        }
        if self.fatigue_gain_range > 100 {
            return Err(format!(
                "aftermath.fatigue_gain_range must be <= 100, got {}",
                self.fatigue_gain_range
            ));
        }
        if self.fatigue_cap > 100 {
            return Err(format!("aftermath.fatigue_cap must be <= 100, got {}", self.fatigue_cap));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub min_intensity: u8,
    pub max_intensity: u8,
    pub default_duration_days: u32,
    /// Base improvement is `intensity * duration / days_per_week`
    pub days_per_week: f64,

    pub young_below_age: u32,
    pub young_multiplier: f64,
    pub veteran_above_age: u32,
    pub veteran_multiplier: f64,
    /// Extra multiplier on mental gains
    pub mental_gain_multiplier: f64,

    pub fatigue_per_intensity: f64,
    pub technique_fatigue_factor: f64,
    pub mental_fatigue_factor: f64,

    pub injury_risk_per_intensity: f64,
    pub speed_injury_factor: f64,
    pub physical_injury_factor: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_intensity: 1,
            max_intensity: 5,
            default_duration_days: 7,
            days_per_week: 7.0,
            young_below_age: 25,
            young_multiplier: 1.2,
            veteran_above_age: 30,
            veteran_multiplier: 0.8,
            mental_gain_multiplier: 1.2,
            fatigue_per_intensity: 5.0,
            technique_fatigue_factor: 0.8,
            mental_fatigue_factor: 0.5,
            injury_risk_per_intensity: 0.02,
            speed_injury_factor: 1.5,
            physical_injury_factor: 2.0,
        }
    }
}

impl TrainingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.min_intensity == 0 || self.min_intensity > self.max_intensity {
            return Err(format!(
                "training intensity range is empty: {}..={}",
                self.min_intensity, self.max_intensity
            ));
        }
        if self.days_per_week <= 0.0 {
            return Err("training.days_per_week must be positive".to_string());
        }
        Ok(())
    }
}
