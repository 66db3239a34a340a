//! # Engine Configuration
//!
//! 모든 튜닝 상수를 중앙에서 관리하는 설정 시스템.
//!
//! Defaults reproduce the live game's constants exactly. A config file only needs
//! the fields it overrides; everything else falls back to [`Default`].
//!
//! ```rust
//! use fm_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.match_sim.minutes, 90);
//!
//! let tweaked = EngineConfig::from_json(r#"{"match_sim": {"home_advantage": 3.0}}"#).unwrap();
//! assert_eq!(tweaked.match_sim.home_advantage, 3.0);
//! assert_eq!(tweaked.match_sim.event_probability, 0.02);
//! ```
//!
//! ## Environment Variables
//!
//! - `FM_ENGINE_CONFIG_PATH`: JSON or YAML file loaded by [`EngineConfig::from_env_or_default`]

mod match_config;
mod player_config;

pub use match_config::{MatchConfig, StatisticsConfig, MAX_MINUTES};
pub use player_config::{AftermathConfig, AgeBand, DevelopmentConfig, TrainingConfig};

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

pub const ENGINE_CONFIG_PATH_ENV: &str = "FM_ENGINE_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub expiry_days: i64,
    /// Offers are entered in whole currency units and stored in cents
    pub cents_per_unit: i64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self { expiry_days: 7, cents_per_unit: 100 }
    }
}

impl TransferConfig {
    /// Ten years; anything longer is a typo.
    pub const MAX_EXPIRY_DAYS: i64 = 3650;

    fn validate(&self) -> std::result::Result<(), String> {
        if !(1..=Self::MAX_EXPIRY_DAYS).contains(&self.expiry_days) {
            return Err(format!(
                "transfer.expiry_days must be within 1..={}, got {}",
                Self::MAX_EXPIRY_DAYS,
                self.expiry_days
            ));
        }
        if self.cents_per_unit <= 0 {
            return Err("transfer.cents_per_unit must be positive".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub match_sim: MatchConfig,
    pub development: DevelopmentConfig,
    pub aftermath: AftermathConfig,
    pub training: TrainingConfig,
    pub transfer: TransferConfig,
}

impl EngineConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Picks the parser from the file extension (`.yaml`/`.yml`, anything else is JSON).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Loads the file named by `FM_ENGINE_CONFIG_PATH`, or `None` when the variable is unset.
    pub fn from_env_path() -> Result<Option<Self>> {
        let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
            return Ok(None);
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }
        debug!(path, "loading engine config from {ENGINE_CONFIG_PATH_ENV}");
        Self::from_path(path).map(Some)
    }

    /// Like [`from_env_path`](Self::from_env_path) but never fails: a broken file is
    /// logged and the defaults are used.
    pub fn from_env_or_default() -> Self {
        match Self::from_env_path() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "ignoring invalid {ENGINE_CONFIG_PATH_ENV}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.match_sim.validate().map_err(CoreError::InvalidConfig)?;
        self.development.validate().map_err(CoreError::InvalidConfig)?;
        self.aftermath.validate().map_err(CoreError::InvalidConfig)?;
        self.training.validate().map_err(CoreError::InvalidConfig)?;
        self.transfer.validate().map_err(CoreError::InvalidConfig)?;
        Ok(())
    }
}
