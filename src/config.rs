//! Engine and match configuration, read from a JSON file

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use std::path::Path;
use std::time::Duration;

use crate::{error::ConfigError, player::PlayerKind, HEIGHT, WIDTH};

pub const CONFIG_PATH: &str = "connect4_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Time allowance for each AI move
    pub msec_per_move: u64,
    /// Overrun tolerated before a player forfeits on time
    pub grace_msec: u64,
    /// Optional cap on the minimax search depth
    pub max_depth: Option<usize>,
    /// Strategies for player 1 and player 2
    pub players: [PlayerKind; 2],
    /// Number of games to play when both players are AI controlled
    pub games: usize,
}

impl EngineConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: EngineConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load_or_default_from(CONFIG_PATH)
    }

    /// Falls back to the defaults when the file is missing or unusable
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(config) => {
                info!("loaded configuration from {}", path.display());
                config
            }
            Err(err @ ConfigError::FileRead { .. }) => {
                debug!("using default configuration: {}", err);
                Self::default()
            }
            Err(err) => {
                warn!("ignoring configuration: {}, using defaults", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation(format!(
                "board dimensions must be non-zero, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.cols > 9 {
            // moves are entered as single digits
            return Err(ConfigError::Validation(format!(
                "at most 9 columns are supported, got {}",
                self.cols
            )));
        }
        if self.msec_per_move == 0 {
            return Err(ConfigError::Validation(
                "msec_per_move must be > 0".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Validation("max_depth must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn time_per_move(&self) -> Duration {
        Duration::from_millis(self.msec_per_move)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_msec)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: HEIGHT,
            cols: WIDTH,
            msec_per_move: 1000,
            grace_msec: 100,
            max_depth: None,
            players: [PlayerKind::Human, PlayerKind::Minimax],
            games: 1,
        }
    }
}
