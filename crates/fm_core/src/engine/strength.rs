//! Team strength aggregation.
//!
//! Pure function of the roster snapshot: injured or exhausted players are filtered
//! out, each position group is reduced to one integer score, and the overall score
//! is the plain mean of the four groups.

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::models::{round_half_up, Attribute, Player, Position};

/// Attributes averaged for each position group.
const ATTACK_ATTRS: &[Attribute] = &[Attribute::Speed, Attribute::Technique];
const MIDFIELD_ATTRS: &[Attribute] = &[Attribute::Technique, Attribute::Mental];
const DEFENSE_ATTRS: &[Attribute] = &[Attribute::Physical, Attribute::Mental];
const GOALKEEPING_ATTRS: &[Attribute] = &[Attribute::Goalkeeping];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamStrength {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub goalkeeping: u8,
    /// Unrounded mean of the four group scores (plus home advantage when adjusted).
    pub overall: f64,
}

impl TeamStrength {
    /// Every score at the neutral baseline.
    pub fn neutral(baseline: u8) -> Self {
        Self::from_groups(baseline, baseline, baseline, baseline)
    }

    pub fn from_groups(attack: u8, midfield: u8, defense: u8, goalkeeping: u8) -> Self {
        let overall = (attack as f64 + midfield as f64 + defense as f64 + goalkeeping as f64) / 4.0;
        Self { attack, midfield, defense, goalkeeping, overall }
    }

    /// Overall rounded half-up (58.75 -> 59).
    pub fn overall_rounded(&self) -> u8 {
        round_half_up(self.overall).clamp(0.0, 255.0) as u8
    }

    /// Copy with `bonus` added to the overall score only.
    pub fn with_overall_bonus(&self, bonus: f64) -> Self {
        Self { overall: self.overall + bonus, ..*self }
    }
}

pub fn calculate_team_strength(players: &[Player]) -> TeamStrength {
    calculate_team_strength_with_config(players, &MatchConfig::default())
}

pub fn calculate_team_strength_with_config(players: &[Player], config: &MatchConfig) -> TeamStrength {
    let eligible: Vec<&Player> =
        players.iter().filter(|p| p.is_eligible(config.unavailable_fatigue)).collect();

    if eligible.is_empty() {
        return TeamStrength::neutral(config.neutral_strength);
    }

    let group = |position: Position, attrs: &[Attribute]| {
        let members: Vec<&Player> =
            eligible.iter().copied().filter(|p| p.position == position).collect();
        position_strength(&members, attrs, config.neutral_strength)
    };

    TeamStrength::from_groups(
        group(Position::ATT, ATTACK_ATTRS),
        group(Position::MID, MIDFIELD_ATTRS),
        group(Position::DEF, DEFENSE_ATTRS),
        group(Position::GK, GOALKEEPING_ATTRS),
    )
}

/// Mean over `players` of each player's mean over `attrs`, rounded half-up.
/// An empty group scores `neutral`.
pub fn position_strength(players: &[&Player], attrs: &[Attribute], neutral: u8) -> u8 {
    if players.is_empty() {
        return neutral;
    }
    let total: f64 = players.iter().map(|p| p.attributes.mean_of(attrs)).sum();
    round_half_up(total / players.len() as f64).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerAttributes;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn player(id: &str, position: Position, attrs: [u8; 5]) -> Player {
        let [speed, technique, physical, mental, goalkeeping] = attrs;
        Player::new(
            id,
            id,
            position,
            NaiveDate::from_ymd_opt(1998, 3, 1).unwrap(),
            PlayerAttributes { speed, technique, physical, mental, goalkeeping },
            95,
        )
    }

    #[test]
    fn test_empty_roster_is_neutral() {
        let s = calculate_team_strength(&[]);
        assert_eq!(s, TeamStrength::neutral(50));
        assert_eq!(s.overall, 50.0);
    }

    #[test]
    fn test_fully_unavailable_roster_is_neutral() {
        let mut injured = player("a", Position::ATT, [90, 90, 90, 90, 90]);
        injured.injury_days = 2;
        let mut tired = player("b", Position::DEF, [90, 90, 90, 90, 90]);
        tired.fatigue = 90;
        let s = calculate_team_strength(&[injured, tired]);
        assert_eq!(s, TeamStrength::neutral(50));
    }

    #[test]
    fn test_single_attacker() {
        let s = calculate_team_strength(&[player("st", Position::ATT, [90, 80, 10, 10, 10])]);
        assert_eq!(s.attack, 85);
        assert_eq!(s.midfield, 50);
        assert_eq!(s.defense, 50);
        assert_eq!(s.goalkeeping, 50);
        assert_eq!(s.overall, 58.75);
        assert_eq!(s.overall_rounded(), 59);
    }

    #[test]
    fn test_group_attribute_mapping() {
        let roster = vec![
            player("gk", Position::GK, [10, 10, 10, 10, 77]),
            player("d1", Position::DEF, [10, 10, 80, 60, 10]),
            player("d2", Position::DEF, [10, 10, 71, 60, 10]),
            player("m1", Position::MID, [10, 64, 10, 70, 10]),
        ];
        let s = calculate_team_strength(&roster);
        assert_eq!(s.goalkeeping, 77);
        // (70 + 65.5) / 2 = 67.75
        assert_eq!(s.defense, 68);
        assert_eq!(s.midfield, 67);
        assert_eq!(s.attack, 50);
    }

    #[test]
    fn test_unavailable_players_ignored_not_averaged() {
        let mut tired = player("d2", Position::DEF, [10, 10, 20, 20, 10]);
        tired.fatigue = 95;
        let roster = vec![player("d1", Position::DEF, [10, 10, 80, 80, 10]), tired];
        assert_eq!(calculate_team_strength(&roster).defense, 80);
    }

    #[test]
    fn test_home_bonus_only_touches_overall() {
        let s = TeamStrength::from_groups(60, 60, 60, 60).with_overall_bonus(5.0);
        assert_eq!(s.attack, 60);
        assert_eq!(s.overall, 65.0);
    }

    fn arb_player() -> impl Strategy<Value = Player> {
        (
            prop_oneof![Just(Position::GK), Just(Position::DEF), Just(Position::MID), Just(Position::ATT)],
            prop::array::uniform5(10u8..=95),
            0u8..=100,
            0u16..3,
        )
            .prop_map(|(position, attrs, fatigue, injury_days)| {
                let mut p = player("p", position, attrs);
                p.fatigue = fatigue;
                p.injury_days = injury_days;
                p
            })
    }

    proptest! {
        #[test]
        fn prop_scores_in_range_and_idempotent(roster in prop::collection::vec(arb_player(), 0..20)) {
            let first = calculate_team_strength(&roster);
            let second = calculate_team_strength(&roster);
            prop_assert_eq!(first, second);
            for score in [first.attack, first.midfield, first.defense, first.goalkeeping] {
                prop_assert!(score <= 100);
            }
            prop_assert!((0.0..=100.0).contains(&first.overall));
        }
    }
}
