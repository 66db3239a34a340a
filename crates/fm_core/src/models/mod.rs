pub mod delta;
pub mod events;
pub mod match_result;
pub mod player;
pub mod team;

pub use delta::AttributeDelta;
pub use events::{describe_event, EventKind, MatchEvent};
pub use match_result::{MatchResult, MatchStatistics, Split};
pub use player::{age_on, round_half_up, Attribute, Player, PlayerAttributes, Position};
pub use team::Team;
