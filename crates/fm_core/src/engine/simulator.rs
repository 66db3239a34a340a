//! Minute-by-minute match simulation.
//!
//! Each minute gets exactly one event roll, so the timeline comes out in minute
//! order with at most one event per minute and never needs sorting.
//!
//! Draw order per event: team, kind, then (if the team has fit players) the player.

use tracing::debug;

use crate::config::MatchConfig;
use crate::models::{describe_event, EventKind, MatchEvent, MatchResult, Player, Position, Team};
use crate::rng::UniformSource;

use super::statistics::generate_statistics;
use super::strength::{calculate_team_strength_with_config, TeamStrength};

/// Which side an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Home and away strength as used by the simulation (home advantage applied).
    pub fn match_strengths(&self, home: &Team, away: &Team) -> (TeamStrength, TeamStrength) {
        let home_strength = calculate_team_strength_with_config(&home.players, &self.config)
            .with_overall_bonus(self.config.home_advantage);
        let away_strength = calculate_team_strength_with_config(&away.players, &self.config);
        (home_strength, away_strength)
    }

    pub fn simulate(&self, home: &Team, away: &Team, rng: &mut dyn UniformSource) -> MatchResult {
        let (home_strength, away_strength) = self.match_strengths(home, away);

        let mut events = Vec::new();
        let mut home_score: u8 = 0;
        let mut away_score: u8 = 0;

        for minute in 1..=self.config.minutes {
            if rng.next_uniform() >= self.config.event_probability {
                continue;
            }
            let (side, event) =
                self.generate_event(minute, &home_strength, &away_strength, home, away, rng);
            if event.kind.is_goal() {
                match side {
                    Side::Home => home_score = home_score.saturating_add(1),
                    Side::Away => away_score = away_score.saturating_add(1),
                }
            }
            events.push(event);
        }

        let statistics =
            generate_statistics(&home_strength, &away_strength, rng, &self.config.statistics);

        debug!(
            home = %home.id,
            away = %away.id,
            home_score,
            away_score,
            events = events.len(),
            "match simulated"
        );

        MatchResult {
            home_team_id: home.id.clone(),
            away_team_id: away.id.clone(),
            home_score,
            away_score,
            events,
            statistics,
        }
    }

    fn generate_event(
        &self,
        minute: u8,
        home_strength: &TeamStrength,
        away_strength: &TeamStrength,
        home: &Team,
        away: &Team,
        rng: &mut dyn UniformSource,
    ) -> (Side, MatchEvent) {
        let side = pick_side(home_strength.overall, away_strength.overall, rng.next_uniform());
        let team = match side {
            Side::Home => home,
            Side::Away => away,
        };
        let kind = determine_event_kind(rng.next_uniform(), &self.config);
        let player = select_player(team, kind, rng);

        let event = MatchEvent {
            minute,
            kind,
            player_id: player.map(|p| p.id.clone()),
            team_id: team.id.clone(),
            description: describe_event(kind, player.map(|p| p.name.as_str()), &team.name),
        };
        (side, event)
    }
}

pub fn simulate_match(home: &Team, away: &Team, rng: &mut dyn UniformSource) -> MatchResult {
    MatchEngine::default().simulate(home, away, rng)
}

/// Home takes the event when `roll` falls below its share of the combined overall.
pub fn pick_side(home_overall: f64, away_overall: f64, roll: f64) -> Side {
    let total = home_overall + away_overall;
    let home_chance = if total > 0.0 { home_overall / total } else { 0.5 };
    if roll < home_chance {
        Side::Home
    } else {
        Side::Away
    }
}

/// Fixed cumulative thresholds; team strength plays no part.
pub fn determine_event_kind(roll: f64, config: &MatchConfig) -> EventKind {
    if roll < config.goal_threshold {
        EventKind::Goal
    } else if roll < config.card_threshold {
        EventKind::Card
    } else if roll < config.substitution_threshold {
        EventKind::Substitution
    } else {
        EventKind::Injury
    }
}

/// Goals go to a random fit attacker when there is one; everything else (and
/// attacker-less goals) to a random fit player. No fit players, no draw.
pub fn select_player<'a>(
    team: &'a Team,
    kind: EventKind,
    rng: &mut dyn UniformSource,
) -> Option<&'a Player> {
    let fit = team.fit_players();

    if kind.is_goal() {
        let attackers: Vec<&Player> =
            fit.iter().copied().filter(|p| p.position == Position::ATT).collect();
        if let Some(idx) = rng.next_index(attackers.len()) {
            return Some(attackers[idx]);
        }
    }

    rng.next_index(fit.len()).map(|idx| fit[idx])
}
