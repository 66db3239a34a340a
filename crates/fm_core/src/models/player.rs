use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Roster position. Serialized with the short tags used by the game's database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Position {
    GK,
    DEF,
    MID,
    ATT,
}

impl Position {
    pub fn is_goalkeeper(self) -> bool {
        self == Position::GK
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::ATT => "ATT",
        };
        f.write_str(tag)
    }
}

/// One of the five trainable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Speed,
    Technique,
    Physical,
    Mental,
    Goalkeeping,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Speed,
        Attribute::Technique,
        Attribute::Physical,
        Attribute::Mental,
        Attribute::Goalkeeping,
    ];
}

/// Current attribute values (observed range 10-95).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub speed: u8,
    pub technique: u8,
    pub physical: u8,
    pub mental: u8,
    pub goalkeeping: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self { speed: 50, technique: 50, physical: 50, mental: 50, goalkeeping: 50 }
    }
}

impl PlayerAttributes {
    pub fn get(&self, attr: Attribute) -> u8 {
        match attr {
            Attribute::Speed => self.speed,
            Attribute::Technique => self.technique,
            Attribute::Physical => self.physical,
            Attribute::Mental => self.mental,
            Attribute::Goalkeeping => self.goalkeeping,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: u8) {
        match attr {
            Attribute::Speed => self.speed = value,
            Attribute::Technique => self.technique = value,
            Attribute::Physical => self.physical = value,
            Attribute::Mental => self.mental = value,
            Attribute::Goalkeeping => self.goalkeeping = value,
        }
    }

    /// Mean of the given attributes.
    pub fn mean_of(&self, attrs: &[Attribute]) -> f64 {
        if attrs.is_empty() {
            return 0.0;
        }
        let sum: u32 = attrs.iter().map(|a| self.get(*a) as u32).sum();
        sum as f64 / attrs.len() as f64
    }
}

/// Player snapshot handed in by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub birth_date: NaiveDate,
    pub attributes: PlayerAttributes,
    /// Ceiling for every current attribute. Fixed at creation.
    pub potential: u8,
    #[serde(default)]
    pub fatigue: u8,
    #[serde(default)]
    pub injury_days: u16,
    #[serde(default)]
    pub games_played: u32,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        birth_date: NaiveDate,
        attributes: PlayerAttributes,
        potential: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            birth_date,
            attributes,
            potential,
            fatigue: 0,
            injury_days: 0,
            games_played: 0,
        }
    }

    pub fn is_injured(&self) -> bool {
        self.injury_days > 0
    }

    /// Counts towards team strength: uninjured and fatigue below the threshold.
    pub fn is_eligible(&self, unavailable_fatigue: u8) -> bool {
        !self.is_injured() && self.fatigue < unavailable_fatigue
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.birth_date, today)
    }

    /// Display rating. Goalkeepers weight goalkeeping and mental, outfielders
    /// average the four outfield attributes.
    pub fn overall_rating(&self) -> u8 {
        let a = &self.attributes;
        let raw = if self.position.is_goalkeeper() {
            a.goalkeeping as f64 * 0.4
                + a.mental as f64 * 0.3
                + a.physical as f64 * 0.2
                + a.technique as f64 * 0.1
        } else {
            a.mean_of(&[Attribute::Speed, Attribute::Technique, Attribute::Physical, Attribute::Mental])
        };
        round_half_up(raw).clamp(0.0, 255.0) as u8
    }
}

/// Whole years between `birth` and `today`, one less while the birthday is still ahead.
/// A birth date in the future counts as zero.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// `floor(x + 0.5)`. Matches the game's rounding for non-negative scores.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(2000, 6, 15);
        assert_eq!(age_on(birth, date(2020, 6, 14)), 19);
        assert_eq!(age_on(birth, date(2020, 6, 15)), 20);
        assert_eq!(age_on(birth, date(2020, 7, 1)), 20);
        assert_eq!(age_on(birth, date(2020, 5, 30)), 19);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let birth = date(2004, 2, 29);
        assert_eq!(age_on(birth, date(2021, 2, 28)), 16);
        assert_eq!(age_on(birth, date(2021, 3, 1)), 17);
    }

    #[test]
    fn test_age_future_birth_is_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2020, 1, 1)), 0);
    }

    #[test]
    fn test_overall_rating_outfield() {
        let attrs = PlayerAttributes { speed: 80, technique: 70, physical: 61, mental: 60, goalkeeping: 10 };
        let p = Player::new("p1", "Striker", Position::ATT, date(1998, 1, 1), attrs, 90);
        // (80 + 70 + 61 + 60) / 4 = 67.75
        assert_eq!(p.overall_rating(), 68);
    }

    #[test]
    fn test_overall_rating_goalkeeper() {
        let attrs = PlayerAttributes { speed: 40, technique: 50, physical: 70, mental: 60, goalkeeping: 80 };
        let p = Player::new("gk", "Keeper", Position::GK, date(1990, 1, 1), attrs, 90);
        // 32 + 18 + 14 + 5 = 69
        assert_eq!(p.overall_rating(), 69);
    }

    #[test]
    fn test_eligibility() {
        let mut p = Player::new("p", "P", Position::MID, date(1995, 1, 1), PlayerAttributes::default(), 80);
        assert!(p.is_eligible(90));
        p.fatigue = 90;
        assert!(!p.is_eligible(90));
        p.fatigue = 89;
        p.injury_days = 3;
        assert!(!p.is_eligible(90));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(58.75), 59.0);
        assert_eq!(round_half_up(58.5), 59.0);
        assert_eq!(round_half_up(58.49), 58.0);
    }

    #[test]
    fn test_position_serde_tags() {
        assert_eq!(serde_json::to_string(&Position::ATT).unwrap(), "\"ATT\"");
        let p: Position = serde_json::from_str("\"GK\"").unwrap();
        assert_eq!(p, Position::GK);
    }
}
