use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Invalid performance score: {0} (expected 1..=100)")]
    InvalidPerformance(u8),

    #[error("Invalid training intensity: {0}")]
    InvalidIntensity(u8),

    #[error("Invalid training duration: {0} days")]
    InvalidDuration(u32),

    #[error("Invalid offer amount: {0}")]
    InvalidAmount(f64),

    #[error("Insufficient budget: need {required} cents, have {available}")]
    InsufficientBudget { required: i64, available: i64 },

    #[error("A pending offer for player {player_id} already exists")]
    DuplicateOffer { player_id: String },

    #[error("Team {team_id} cannot bid for its own player")]
    SameTeam { team_id: String },

    #[error("Offer {offer_id} is no longer pending ({status})")]
    OfferNotPending { offer_id: String, status: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
