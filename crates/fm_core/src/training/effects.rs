// 훈련 효과 적용 시스템
use chrono::NaiveDate;
use tracing::debug;

use crate::config::TrainingConfig;
use crate::error::{CoreError, Result};
use crate::models::{AttributeDelta, Player};

use super::types::{TrainingOutcome, TrainingSession, TrainingType};

/// 훈련 효과 엔진
#[derive(Debug, Clone, Default)]
pub struct TrainingEffectEngine {
    config: TrainingConfig,
}

impl TrainingEffectEngine {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn validate_session(&self, session: &TrainingSession) -> Result<()> {
        if !(self.config.min_intensity..=self.config.max_intensity).contains(&session.intensity) {
            return Err(CoreError::InvalidIntensity(session.intensity));
        }
        if session.duration_days == 0 {
            return Err(CoreError::InvalidDuration(session.duration_days));
        }
        Ok(())
    }

    /// Young players train faster, veterans slower.
    pub fn age_multiplier(&self, age: u32) -> f64 {
        if age < self.config.young_below_age {
            self.config.young_multiplier
        } else if age > self.config.veteran_above_age {
            self.config.veteran_multiplier
        } else {
            1.0
        }
    }

    /// 훈련 세션 실행
    pub fn apply_training(
        &self,
        player: &Player,
        session: &TrainingSession,
        today: NaiveDate,
    ) -> Result<TrainingOutcome> {
        self.validate_session(session)?;
        let cfg = &self.config;

        let base = session.intensity as f64 * (session.duration_days as f64 / cfg.days_per_week);
        let age = player.age_on(today);
        let mut multiplier = self.age_multiplier(age);

        let mut fatigue_increase = session.intensity as f64 * cfg.fatigue_per_intensity;
        let mut injury_risk = session.intensity as f64 * cfg.injury_risk_per_intensity;

        match session.training_type {
            TrainingType::Speed => injury_risk *= cfg.speed_injury_factor,
            TrainingType::Technique => fatigue_increase *= cfg.technique_fatigue_factor,
            TrainingType::Physical => injury_risk *= cfg.physical_injury_factor,
            TrainingType::Mental => {
                multiplier *= cfg.mental_gain_multiplier;
                fatigue_increase *= cfg.mental_fatigue_factor;
            }
            TrainingType::Goalkeeping => {}
        }

        let mut delta = AttributeDelta::default();
        let applies = session.training_type != TrainingType::Goalkeeping
            || player.position.is_goalkeeper();
        if applies {
            let attr = session.training_type.attribute();
            let current = player.attributes.get(attr);
            let gain = (base * multiplier).floor().clamp(0.0, u8::MAX as f64) as u8;
            // never above potential, never below the current value
            let improved = current.saturating_add(gain).min(player.potential).max(current);
            if improved > current {
                delta.set(attr, improved);
            }
        }

        debug!(
            player = %player.id,
            training = ?session.training_type,
            intensity = session.intensity,
            gains = delta.len(),
            "training applied"
        );

        Ok(TrainingOutcome {
            player_id: player.id.clone(),
            delta,
            fatigue_increase,
            injury_risk: injury_risk.clamp(0.0, 1.0),
        })
    }

    /// Same session for a group of players. Fails fast on an invalid session.
    pub fn apply_team_training(
        &self,
        players: &[Player],
        session: &TrainingSession,
        today: NaiveDate,
    ) -> Result<Vec<TrainingOutcome>> {
        self.validate_session(session)?;
        players.iter().map(|p| self.apply_training(p, session, today)).collect()
    }
}

pub fn apply_training(
    player: &Player,
    session: &TrainingSession,
    today: NaiveDate,
) -> Result<TrainingOutcome> {
    TrainingEffectEngine::default().apply_training(player, session, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerAttributes, Position};
    use crate::rng::ScriptedSource;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn player_aged(age: i32, position: Position) -> Player {
        Player::new(
            "p1",
            "Trainee",
            position,
            NaiveDate::from_ymd_opt(2024 - age, 1, 15).unwrap(),
            PlayerAttributes { speed: 60, technique: 60, physical: 60, mental: 60, goalkeeping: 60 },
            80,
        )
    }

    #[test]
    fn test_rejects_invalid_intensity() {
        let p = player_aged(22, Position::MID);
        for intensity in [0, 6] {
            let err = apply_training(&p, &TrainingSession::weekly(TrainingType::Speed, intensity), today())
                .unwrap_err();
            assert!(matches!(err, CoreError::InvalidIntensity(i) if i == intensity));
        }
    }

    #[test]
    fn test_rejects_zero_duration() {
        let p = player_aged(22, Position::MID);
        let session = TrainingSession { training_type: TrainingType::Speed, intensity: 3, duration_days: 0 };
        assert!(matches!(apply_training(&p, &session, today()), Err(CoreError::InvalidDuration(0))));
    }

    #[test]
    fn test_young_speed_training() {
        // base 3, x1.2 -> 3.6 -> +3
        let p = player_aged(22, Position::ATT);
        let out = apply_training(&p, &TrainingSession::weekly(TrainingType::Speed, 3), today()).unwrap();
        assert_eq!(out.delta.speed, Some(63));
        assert_eq!(out.fatigue_increase, 15.0);
        assert!((out.injury_risk - 0.09).abs() < 1e-9);
    }

    #[test]
    fn test_mental_training_bonus_and_low_fatigue() {
        // base 5, 27 years -> x1.0, mental x1.2 -> +6
        let p = player_aged(27, Position::MID);
        let out = apply_training(&p, &TrainingSession::weekly(TrainingType::Mental, 5), today()).unwrap();
        assert_eq!(out.delta.mental, Some(66));
        assert_eq!(out.fatigue_increase, 12.5);
        assert!((out.injury_risk - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_veteran_physical_training() {
        // base 2, x0.8 -> 1.6 -> +1
        let p = player_aged(33, Position::DEF);
        let out = apply_training(&p, &TrainingSession::weekly(TrainingType::Physical, 2), today()).unwrap();
        assert_eq!(out.delta.physical, Some(61));
        assert!((out.injury_risk - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_technique_fatigue_factor() {
        let p = player_aged(27, Position::MID);
        let out = apply_training(&p, &TrainingSession::weekly(TrainingType::Technique, 4), today()).unwrap();
        assert_eq!(out.fatigue_increase, 16.0);
    }

    #[test]
    fn test_goalkeeping_only_for_goalkeepers() {
        let session = TrainingSession::weekly(TrainingType::Goalkeeping, 4);
        let outfield = apply_training(&player_aged(22, Position::DEF), &session, today()).unwrap();
        assert!(outfield.delta.is_empty());
        let keeper = apply_training(&player_aged(22, Position::GK), &session, today()).unwrap();
        assert_eq!(keeper.delta.goalkeeping, Some(64));
    }

    #[test]
    fn test_capped_at_potential_never_decreases() {
        let mut p = player_aged(20, Position::ATT);
        p.attributes.speed = 79;
        let session = TrainingSession::weekly(TrainingType::Speed, 5);
        assert_eq!(apply_training(&p, &session, today()).unwrap().delta.speed, Some(80));

        p.attributes.speed = 85;
        assert!(apply_training(&p, &session, today()).unwrap().delta.is_empty());
    }

    #[test]
    fn test_longer_sessions_scale_gain() {
        // base 1 * 14/7 = 2, x1.0 -> +2
        let p = player_aged(28, Position::MID);
        let session = TrainingSession { training_type: TrainingType::Technique, intensity: 1, duration_days: 14 };
        assert_eq!(apply_training(&p, &session, today()).unwrap().delta.technique, Some(62));
    }

    #[test]
    fn test_outcome_apply_and_injury_roll() {
        let mut p = player_aged(22, Position::ATT);
        p.fatigue = 90;
        let out = apply_training(&p, &TrainingSession::weekly(TrainingType::Speed, 3), today()).unwrap();
        out.apply_to(&mut p);
        assert_eq!(p.attributes.speed, 63);
        assert_eq!(p.fatigue, 100);

        assert!(out.roll_injury(&mut ScriptedSource::constant(0.05)));
        assert!(!out.roll_injury(&mut ScriptedSource::constant(0.5)));
    }

    #[test]
    fn test_team_training_validates_once() {
        let engine = TrainingEffectEngine::default();
        let players = vec![player_aged(22, Position::ATT), player_aged(31, Position::DEF)];
        let outcomes = engine
            .apply_team_training(&players, &TrainingSession::weekly(TrainingType::Speed, 2), today())
            .unwrap();
        assert_eq!(outcomes.len(), 2);
        // 2 * 1.2 = 2.4 -> +2 ; 2 * 0.8 = 1.6 -> +1
        assert_eq!(outcomes[0].delta.speed, Some(62));
        assert_eq!(outcomes[1].delta.speed, Some(61));
    }
}
