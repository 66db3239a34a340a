//! # fm_core - Football management simulation core
//!
//! The computational part of a browser football-management game:
//! - Team strength aggregation from the current roster
//! - Minute-by-minute match simulation with cosmetic statistics
//! - Post-match player development and aftermath bookkeeping
//! - Weekly training effects, player ratings and transfer-offer rules
//!
//! Everything is a pure function of its inputs plus an injected [`rng::UniformSource`];
//! persistence, authentication and rendering belong to the host application.
//! Hosts that prefer JSON can use the [`api`] functions, which seed a ChaCha8
//! generator from the request so identical requests give identical responses.

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod config;
pub mod development;
pub mod engine;
pub mod error;
pub mod models;
pub mod rng;
pub mod training;
pub mod transfer;

// Re-export main API functions
pub use api::{
    apply_training_json, create_transfer_offer_json, develop_player_json,
    process_match_aftermath_json, simulate_match_json, MatchRequest, MatchResponse,
};
pub use error::{CoreError, Result};

pub use config::EngineConfig;
pub use development::{calculate_improvement, process_match_aftermath, PlayerMatchUpdate};
pub use engine::{calculate_team_strength, simulate_match, MatchEngine, TeamStrength};
pub use models::{
    AttributeDelta, EventKind, MatchEvent, MatchResult, MatchStatistics, Player, PlayerAttributes,
    Position, Team,
};
pub use rng::{RngSource, UniformSource};
#[cfg(any(test, feature = "test-util"))]
pub use rng::ScriptedSource;
pub use training::{apply_training, TrainingSession, TrainingType};
pub use transfer::{OfferRequest, TransferMarket, TransferOffer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
