//! Post-match player development.
//!
//! One gate roll decides whether the player improves at all; after that every
//! attribute rolls on its own, so a single match can raise none, some or all of
//! them. Nothing is written back: the caller applies the returned delta.

use chrono::NaiveDate;
use tracing::trace;

use crate::config::DevelopmentConfig;
use crate::models::{Attribute, AttributeDelta, Player};
use crate::rng::UniformSource;

#[derive(Debug, Clone, Default)]
pub struct DevelopmentModel {
    config: DevelopmentConfig,
}

impl DevelopmentModel {
    pub fn new(config: DevelopmentConfig) -> Self {
        Self { config }
    }

    /// Gate probability for a player of `age`.
    pub fn improvement_probability(&self, age: u32) -> f64 {
        self.config
            .age_bands
            .iter()
            .find(|band| age < band.below_age)
            .map(|band| band.probability)
            .unwrap_or(self.config.veteran_probability)
    }

    /// Largest step a single successful roll can add: `min(3, performance / 20)`.
    pub fn magnitude_cap(&self, performance: u8) -> u8 {
        (performance / self.config.performance_divisor).min(self.config.max_magnitude)
    }

    /// `performance` is the 1-100 match score, `today` fixes the player's age.
    pub fn calculate_improvement(
        &self,
        player: &Player,
        performance: u8,
        today: NaiveDate,
        rng: &mut dyn UniformSource,
    ) -> AttributeDelta {
        let age = player.age_on(today);
        let chance = self.improvement_probability(age);

        let mut delta = AttributeDelta::default();
        if rng.next_uniform() > chance {
            return delta;
        }

        let cap = self.magnitude_cap(performance);
        let cfg = &self.config;

        let physical_chance = if age < cfg.physical_young_below_age {
            cfg.physical_chance_young
        } else {
            cfg.physical_chance_old
        };
        let mental_chance = if age > cfg.mental_senior_above_age {
            cfg.mental_chance_senior
        } else {
            cfg.mental_chance_junior
        };

        roll_attribute(&mut delta, player, Attribute::Speed, cfg.speed_chance, cap, rng);
        roll_attribute(&mut delta, player, Attribute::Technique, cfg.technique_chance, cap, rng);
        roll_attribute(&mut delta, player, Attribute::Physical, physical_chance, cap, rng);
        roll_attribute(&mut delta, player, Attribute::Mental, mental_chance, cap, rng);
        if player.position.is_goalkeeper() {
            roll_attribute(&mut delta, player, Attribute::Goalkeeping, cfg.goalkeeping_chance, cap, rng);
        }

        trace!(player = %player.id, age, performance, gains = delta.len(), "development rolled");
        delta
    }
}

pub fn calculate_improvement(
    player: &Player,
    performance: u8,
    today: NaiveDate,
    rng: &mut dyn UniformSource,
) -> AttributeDelta {
    DevelopmentModel::default().calculate_improvement(player, performance, today, rng)
}

/// The chance roll is always drawn; the step roll only on success. Attributes at
/// or above potential are skipped even when the roll hits.
fn roll_attribute(
    delta: &mut AttributeDelta,
    player: &Player,
    attr: Attribute,
    chance: f64,
    cap: u8,
    rng: &mut dyn UniformSource,
) {
    let hit = rng.next_uniform() < chance;
    let current = player.attributes.get(attr);
    if !hit || current >= player.potential {
        return;
    }
    // floor(u * cap) + 1: 1..=cap, and +1 when the cap is zero
    let step = (rng.next_uniform() * cap as f64).floor() as u8 + 1;
    delta.set(attr, current.saturating_add(step).min(player.potential));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerAttributes, Position};
    use crate::rng::{RngSource, ScriptedSource};
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn aged(age: i32, position: Position, attrs: u8, potential: u8) -> Player {
        Player::new(
            "p",
            "Prospect",
            position,
            NaiveDate::from_ymd_opt(2024 - age, 3, 10).unwrap(),
            PlayerAttributes {
                speed: attrs,
                technique: attrs,
                physical: attrs,
                mental: attrs,
                goalkeeping: attrs,
            },
            potential,
        )
    }

    #[test]
    fn test_improvement_probability_bands() {
        let model = DevelopmentModel::default();
        assert_eq!(model.improvement_probability(16), 0.7);
        assert_eq!(model.improvement_probability(17), 0.7);
        assert_eq!(model.improvement_probability(18), 0.5);
        assert_eq!(model.improvement_probability(24), 0.5);
        assert_eq!(model.improvement_probability(25), 0.4);
        assert_eq!(model.improvement_probability(29), 0.4);
        assert_eq!(model.improvement_probability(30), 0.2);
        assert_eq!(model.improvement_probability(34), 0.2);
        assert_eq!(model.improvement_probability(35), 0.1);
        assert_eq!(model.improvement_probability(40), 0.1);
    }

    #[test]
    fn test_magnitude_cap() {
        let model = DevelopmentModel::default();
        assert_eq!(model.magnitude_cap(100), 3);
        assert_eq!(model.magnitude_cap(59), 2);
        assert_eq!(model.magnitude_cap(20), 1);
        assert_eq!(model.magnitude_cap(19), 0);
    }

    #[test]
    fn test_failed_gate_returns_empty_delta() {
        // 30-year-old: gate 0.2
        let player = aged(30, Position::MID, 50, 90);
        let mut rng = ScriptedSource::new(vec![0.21, 0.0]);
        let delta = calculate_improvement(&player, 100, today(), &mut rng);
        assert!(delta.is_empty());
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_youth_top_performance_gains_three() {
        // gate passes at 0.0, every chance roll 0.0 hits, every step roll 0.99 -> +3
        let player = aged(17, Position::GK, 50, 90);
        assert_eq!(player.age_on(today()), 17);
        let mut rng = ScriptedSource::new(vec![0.0, 0.0, 0.99, 0.0, 0.99, 0.0, 0.99, 0.0, 0.99, 0.0, 0.99]);
        let delta = calculate_improvement(&player, 100, today(), &mut rng);
        for attr in Attribute::ALL {
            assert_eq!(delta.get(attr), Some(53), "{attr:?}");
        }
        assert_eq!(rng.draws(), 11);
    }

    #[test]
    fn test_low_performance_still_adds_one() {
        let player = aged(17, Position::ATT, 50, 90);
        let mut rng = ScriptedSource::new(vec![0.0, 0.0, 0.99]);
        let delta = calculate_improvement(&player, 10, today(), &mut rng);
        assert_eq!(delta.speed, Some(51));
    }

    #[test]
    fn test_outfield_never_rolls_goalkeeping() {
        let player = aged(20, Position::DEF, 50, 90);
        let mut rng = ScriptedSource::constant(0.0);
        let delta = calculate_improvement(&player, 100, today(), &mut rng);
        assert_eq!(delta.goalkeeping, None);
        // gate + 4 * (chance + step)
        assert_eq!(rng.draws(), 9);
    }

    #[test]
    fn test_clamped_to_potential_and_skips_capped() {
        let mut player = aged(17, Position::MID, 60, 61);
        player.attributes.mental = 61;
        // gate, speed hit + max step, technique miss, physical miss, mental hit (but capped)
        let mut rng = ScriptedSource::new(vec![0.0, 0.0, 0.99, 0.9, 0.9, 0.0]);
        let delta = calculate_improvement(&player, 100, today(), &mut rng);
        assert_eq!(delta.speed, Some(61));
        assert_eq!(delta.technique, None);
        assert_eq!(delta.physical, None);
        assert_eq!(delta.mental, None);
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn test_age_dependent_chances() {
        // 0.35 clears physical for under-25s (0.4) but not for 25+ (0.2);
        // mental: 0.35 fails the junior chance (0.3), passes the senior one (0.5).
        let rolls = vec![0.0, 0.9, 0.9, 0.35, 0.0, 0.35, 0.0];
        let young = aged(20, Position::MID, 50, 90);
        let delta = calculate_improvement(&young, 100, today(), &mut ScriptedSource::new(rolls.clone()));
        assert!(delta.physical.is_some());
        assert!(delta.mental.is_none());

        let senior = aged(27, Position::MID, 50, 90);
        let mut rng = ScriptedSource::new(vec![0.0, 0.9, 0.9, 0.35, 0.35, 0.0]);
        let delta = calculate_improvement(&senior, 100, today(), &mut rng);
        assert!(delta.physical.is_none());
        assert!(delta.mental.is_some());
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_potential(
            seed in any::<u64>(),
            age in 15i32..40,
            attr in 10u8..=95,
            potential in 10u8..=99,
            performance in 1u8..=100,
        ) {
            let player = aged(age, Position::GK, attr, potential);
            let delta = calculate_improvement(&player, performance, today(), &mut RngSource::seeded(seed));
            for (a, value) in delta.iter() {
                prop_assert!(value <= potential);
                prop_assert!(player.attributes.get(a) < potential);
                prop_assert!(value > player.attributes.get(a));
            }
        }
    }
}
