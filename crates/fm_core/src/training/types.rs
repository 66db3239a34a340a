// 훈련 시스템 기본 타입 정의
use serde::{Deserialize, Serialize};

use crate::models::{Attribute, AttributeDelta, Player};
use crate::rng::UniformSource;

/// Weekly training focus. Each type trains exactly one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    Speed,
    Technique,
    Physical,
    Mental,
    /// Goalkeepers only; a no-op for everyone else
    Goalkeeping,
}

impl TrainingType {
    pub fn attribute(self) -> Attribute {
        match self {
            TrainingType::Speed => Attribute::Speed,
            TrainingType::Technique => Attribute::Technique,
            TrainingType::Physical => Attribute::Physical,
            TrainingType::Mental => Attribute::Mental,
            TrainingType::Goalkeeping => Attribute::Goalkeeping,
        }
    }
}

/// 훈련 세션
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub training_type: TrainingType,
    /// 1..=5
    pub intensity: u8,
    pub duration_days: u32,
}

impl TrainingSession {
    /// A one-week session, the length the game schedules.
    pub fn weekly(training_type: TrainingType, intensity: u8) -> Self {
        Self { training_type, intensity, duration_days: 7 }
    }
}

/// 훈련 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub player_id: String,
    /// Empty when the gain rounds to zero, the attribute is capped, or the type
    /// does not apply to the player's position.
    pub delta: AttributeDelta,
    pub fatigue_increase: f64,
    /// Probability in `[0, 1]`; see [`TrainingOutcome::roll_injury`]
    pub injury_risk: f64,
}

impl TrainingOutcome {
    pub fn roll_injury(&self, rng: &mut dyn UniformSource) -> bool {
        rng.next_uniform() < self.injury_risk
    }

    /// Applies the delta and adds the (floored) fatigue, capped at 100.
    pub fn apply_to(&self, player: &mut Player) {
        self.delta.apply_to(&mut player.attributes);
        let fatigue = player.fatigue as f64 + self.fatigue_increase.floor();
        player.fatigue = fatigue.clamp(0.0, 100.0) as u8;
    }
}
