use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::development::{DevelopmentModel, MatchAftermath, PlayerMatchUpdate};
use crate::engine::{MatchEngine, TeamStrength};
use crate::error::{CoreError, Result};
use crate::models::{AttributeDelta, MatchResult, Player, Team};
use crate::rng::RngSource;
use crate::training::{TrainingEffectEngine, TrainingOutcome, TrainingSession, TrainingType};
use crate::transfer::{OfferRequest, TransferMarket, TransferOffer};
use crate::SCHEMA_VERSION;

fn check_schema(found: u8) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(CoreError::SchemaVersion { found, expected: SCHEMA_VERSION })
    }
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Utc::now().date_naive())
}

// ============================================================================
// Match simulation
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    /// Also roll post-match development, fatigue and appearances for both rosters.
    #[serde(default)]
    pub include_aftermath: bool,
    /// Reference date for player ages (defaults to the current UTC date)
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub result: MatchResult,
    /// Home strength includes the home advantage.
    pub home_strength: TeamStrength,
    pub away_strength: TeamStrength,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub player_updates: Vec<PlayerMatchUpdate>,
}

pub fn simulate_match_json(request_json: &str) -> Result<String> {
    simulate_match_json_with_config(request_json, &EngineConfig::default())
}

pub fn simulate_match_json_with_config(request_json: &str, config: &EngineConfig) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let engine = MatchEngine::new(config.match_sim.clone());
    let mut rng = RngSource::seeded(request.seed);

    let (home_strength, away_strength) = engine.match_strengths(&request.home_team, &request.away_team);
    let result = engine.simulate(&request.home_team, &request.away_team, &mut rng);

    // Same generator, continued: the whole response replays from the seed.
    let player_updates = if request.include_aftermath {
        MatchAftermath::new(config.aftermath.clone(), config.development.clone()).process(
            &request.home_team,
            &request.away_team,
            resolve_today(request.today),
            &mut rng,
        )
    } else {
        Vec::new()
    };

    info!(
        seed = request.seed,
        home = %request.home_team.id,
        away = %request.away_team.id,
        score = %format!("{}-{}", result.home_score, result.away_score),
        "simulate_match_json"
    );

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        result,
        home_strength,
        away_strength,
        player_updates,
    };
    Ok(serde_json::to_string(&response)?)
}

// ============================================================================
// Player development
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DevelopRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub player: Player,
    /// 1..=100
    pub performance: u8,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DevelopResponse {
    pub schema_version: u8,
    pub player_id: String,
    pub age: u32,
    pub improvement_probability: f64,
    pub magnitude_cap: u8,
    pub delta: AttributeDelta,
}

pub fn develop_player_json(request_json: &str) -> Result<String> {
    develop_player_json_with_config(request_json, &EngineConfig::default())
}

pub fn develop_player_json_with_config(request_json: &str, config: &EngineConfig) -> Result<String> {
    let request: DevelopRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    if !(1..=100).contains(&request.performance) {
        return Err(CoreError::InvalidPerformance(request.performance));
    }

    let today = resolve_today(request.today);
    let model = DevelopmentModel::new(config.development.clone());
    let age = request.player.age_on(today);
    let delta = model.calculate_improvement(
        &request.player,
        request.performance,
        today,
        &mut RngSource::seeded(request.seed),
    );
    debug!(player = %request.player.id, gains = delta.len(), "develop_player_json");

    let response = DevelopResponse {
        schema_version: SCHEMA_VERSION,
        player_id: request.player.id.clone(),
        age,
        improvement_probability: model.improvement_probability(age),
        magnitude_cap: model.magnitude_cap(request.performance),
        delta,
    };
    Ok(serde_json::to_string(&response)?)
}

// ============================================================================
// Post-match processing
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AftermathRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AftermathResponse {
    pub schema_version: u8,
    pub updates: Vec<PlayerMatchUpdate>,
}

pub fn process_match_aftermath_json(request_json: &str) -> Result<String> {
    process_match_aftermath_json_with_config(request_json, &EngineConfig::default())
}

pub fn process_match_aftermath_json_with_config(
    request_json: &str,
    config: &EngineConfig,
) -> Result<String> {
    let request: AftermathRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let updates = MatchAftermath::new(config.aftermath.clone(), config.development.clone()).process(
        &request.home_team,
        &request.away_team,
        resolve_today(request.today),
        &mut RngSource::seeded(request.seed),
    );
    let response = AftermathResponse { schema_version: SCHEMA_VERSION, updates };
    Ok(serde_json::to_string(&response)?)
}

// ============================================================================
// Training
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TrainingRequest {
    pub schema_version: u8,
    pub training_type: TrainingType,
    /// 1..=5
    pub intensity: u8,
    /// Defaults to the configured week length
    #[serde(default)]
    pub duration_days: Option<u32>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResponse {
    pub schema_version: u8,
    pub session: TrainingSession,
    pub outcomes: Vec<TrainingOutcome>,
}

pub fn apply_training_json(request_json: &str) -> Result<String> {
    apply_training_json_with_config(request_json, &EngineConfig::default())
}

pub fn apply_training_json_with_config(request_json: &str, config: &EngineConfig) -> Result<String> {
    let request: TrainingRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let session = TrainingSession {
        training_type: request.training_type,
        intensity: request.intensity,
        duration_days: request.duration_days.unwrap_or(config.training.default_duration_days),
    };
    let outcomes = TrainingEffectEngine::new(config.training.clone()).apply_team_training(
        &request.players,
        &session,
        resolve_today(request.today),
    )?;

    let response = TrainingResponse { schema_version: SCHEMA_VERSION, session, outcomes };
    Ok(serde_json::to_string(&response)?)
}

// ============================================================================
// Transfers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TransferOfferRequest {
    pub schema_version: u8,
    pub offer: OfferRequest,
    pub buyer_budget_cents: i64,
    #[serde(default)]
    pub existing_offers: Vec<TransferOffer>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferOfferResponse {
    pub schema_version: u8,
    pub offer: TransferOffer,
}

pub fn create_transfer_offer_json(request_json: &str) -> Result<String> {
    create_transfer_offer_json_with_config(request_json, &EngineConfig::default())
}

pub fn create_transfer_offer_json_with_config(
    request_json: &str,
    config: &EngineConfig,
) -> Result<String> {
    let request: TransferOfferRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let offer = TransferMarket::new(config.transfer.clone()).create_offer(
        &request.offer,
        request.buyer_budget_cents,
        &request.existing_offers,
        request.now.unwrap_or_else(Utc::now),
    )?;
    let response = TransferOfferResponse { schema_version: SCHEMA_VERSION, offer };
    Ok(serde_json::to_string(&response)?)
}
