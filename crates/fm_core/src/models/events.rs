use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    Card,
    Substitution,
    Injury,
}

impl EventKind {
    pub fn is_goal(self) -> bool {
        self == EventKind::Goal
    }
}

/// One entry of the match timeline. Never mutated after emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// 1..=90
    pub minute: u8,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub player_id: Option<String>,
    pub team_id: String,
    pub description: String,
}

/// Timeline text shown in the match report. A missing player reads as `Unknown`.
pub fn describe_event(kind: EventKind, player_name: Option<&str>, team_name: &str) -> String {
    let player = player_name.unwrap_or("Unknown");
    match kind {
        EventKind::Goal => format!("⚽ GOAL! {player} scores for {team_name}!"),
        EventKind::Card => format!("🟨 {player} receives a yellow card"),
        EventKind::Substitution => format!("🔄 {team_name} makes a substitution"),
        EventKind::Injury => format!("🏥 {player} is injured and needs treatment"),
    }
}
