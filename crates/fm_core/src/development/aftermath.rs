//! Bookkeeping for every participant once a match is over: a random performance
//! score feeds the development model, fatigue rises and the appearance counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AftermathConfig, DevelopmentConfig};
use crate::models::{AttributeDelta, Player, Team};
use crate::rng::UniformSource;

use super::model::DevelopmentModel;

/// New values for one player. Persisting them is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchUpdate {
    pub player_id: String,
    /// 1..=100
    pub performance: u8,
    pub delta: AttributeDelta,
    pub fatigue: u8,
    pub games_played: u32,
}

impl PlayerMatchUpdate {
    pub fn apply_to(&self, player: &mut Player) {
        self.delta.apply_to(&mut player.attributes);
        player.fatigue = self.fatigue;
        player.games_played = self.games_played;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchAftermath {
    config: AftermathConfig,
    development: DevelopmentModel,
}

impl MatchAftermath {
    pub fn new(config: AftermathConfig, development: DevelopmentConfig) -> Self {
        Self { config, development: DevelopmentModel::new(development) }
    }

    /// Home roster first, then away, each in roster order. Injured players are
    /// included: everyone on the roster is processed.
    pub fn process(
        &self,
        home: &Team,
        away: &Team,
        today: NaiveDate,
        rng: &mut dyn UniformSource,
    ) -> Vec<PlayerMatchUpdate> {
        let updates: Vec<PlayerMatchUpdate> = home
            .players
            .iter()
            .chain(away.players.iter())
            .map(|player| self.process_player(player, today, rng))
            .collect();

        let improved = updates.iter().filter(|u| !u.delta.is_empty()).count();
        debug!(players = updates.len(), improved, "match aftermath processed");
        updates
    }

    pub fn process_player(
        &self,
        player: &Player,
        today: NaiveDate,
        rng: &mut dyn UniformSource,
    ) -> PlayerMatchUpdate {
        let performance = self.roll_performance(rng);
        let delta = self.development.calculate_improvement(player, performance, today, rng);

        let gain = ((rng.next_uniform() * self.config.fatigue_gain_range as f64).floor() as u32)
            .saturating_add(self.config.fatigue_gain_base as u32);
        let fatigue =
            (player.fatigue as u32).saturating_add(gain).min(self.config.fatigue_cap as u32) as u8;

        PlayerMatchUpdate {
            player_id: player.id.clone(),
            performance,
            delta,
            fatigue,
            games_played: player.games_played.saturating_add(1),
        }
    }

    fn roll_performance(&self, rng: &mut dyn UniformSource) -> u8 {
        let raw = ((rng.next_uniform() * self.config.performance_range as f64).floor() as u32)
            .saturating_add(1);
        raw.min(u8::MAX as u32) as u8
    }
}

pub fn process_match_aftermath(
    home: &Team,
    away: &Team,
    today: NaiveDate,
    rng: &mut dyn UniformSource,
) -> Vec<PlayerMatchUpdate> {
    MatchAftermath::default().process(home, away, today, rng)
}
