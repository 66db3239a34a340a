use serde::{Deserialize, Serialize};

use super::events::{EventKind, MatchEvent};

/// A home/away pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Split<T> {
    pub home: T,
    pub away: T,
}

impl<T> Split<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }
}

/// Cosmetic match statistics. Computed from team strengths only; they do not
/// reflect the event timeline (a 0-0 can show ten shots on target).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub possession: Split<u8>,
    pub shots: Split<u32>,
    pub shots_on_target: Split<u32>,
    pub fouls: Split<u32>,
    pub corners: Split<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_score: u8,
    pub away_score: u8,
    /// Emission order, which is minute order.
    pub events: Vec<MatchEvent>,
    pub statistics: MatchStatistics,
}

impl MatchResult {
    pub fn goals_for(&self, team_id: &str) -> usize {
        self.events.iter().filter(|e| e.kind == EventKind::Goal && e.team_id == team_id).count()
    }
}
