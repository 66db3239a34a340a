use serde::{Deserialize, Serialize};

use super::player::Player;

/// Managed team with its current roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { id: id.into(), name: name.into(), players }
    }

    /// Players that can be named in a match event. Only injuries rule a player out here.
    pub fn fit_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_injured()).collect()
    }
}
