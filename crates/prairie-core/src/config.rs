//! Tuning configuration.
//!
//! Every field defaults to the matching constant, so a config file only
//! needs to name what it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::ShopPolicy;

/// Errors raised while loading a [`TuningConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} = {value} is out of range (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Session tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuningConfig {
    pub starting_lives: i32,
    pub wave_duration_ms: f32,
    pub between_wave_ms: f32,
    pub death_delay_ms: f32,
    /// Frame deltas above this are clamped before any timer runs.
    pub max_frame_delta_ms: f32,
    pub ambient_spawn_chance_busy: f64,
    pub ambient_spawn_chance_idle: f64,
    pub ambient_spawn_retries: u32,
    pub max_live_monsters: usize,
    pub shop_policy: ShopPolicy,
    /// Multiplier applied to granted effect durations once per round.
    pub ng_plus_duration_scale: f32,
    /// Multiplier applied to spawn chances once per round.
    pub ng_plus_chance_scale: f64,
    pub nuke_boss_damage: i32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            wave_duration_ms: WAVE_DURATION_MS,
            between_wave_ms: BETWEEN_WAVE_MS,
            death_delay_ms: DEATH_DELAY_MS,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            ambient_spawn_chance_busy: AMBIENT_SPAWN_CHANCE_BUSY,
            ambient_spawn_chance_idle: AMBIENT_SPAWN_CHANCE_IDLE,
            ambient_spawn_retries: AMBIENT_SPAWN_RETRIES,
            max_live_monsters: MAX_LIVE_MONSTERS,
            shop_policy: ShopPolicy::default(),
            ng_plus_duration_scale: NG_PLUS_DURATION_SCALE,
            ng_plus_chance_scale: NG_PLUS_CHANCE_SCALE,
            nuke_boss_damage: NUKE_BOSS_DAMAGE,
        }
    }
}

impl TuningConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Disable ambient spawning. Scripted tests rely on this.
    pub fn without_ambient_spawns(mut self) -> Self {
        self.ambient_spawn_chance_busy = 0.0;
        self.ambient_spawn_chance_idle = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("ambient_spawn_chance_busy", self.ambient_spawn_chance_busy)?;
        check_probability("ambient_spawn_chance_idle", self.ambient_spawn_chance_idle)?;
        check_positive("wave_duration_ms", f64::from(self.wave_duration_ms))?;
        check_positive("between_wave_ms", f64::from(self.between_wave_ms))?;
        check_positive("death_delay_ms", f64::from(self.death_delay_ms))?;
        check_positive("max_frame_delta_ms", f64::from(self.max_frame_delta_ms))?;
        check_positive("ng_plus_chance_scale", self.ng_plus_chance_scale)?;
        if !(self.ng_plus_duration_scale > 0.0 && self.ng_plus_duration_scale <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "ng_plus_duration_scale",
                value: f64::from(self.ng_plus_duration_scale),
                expected: "(0, 1]",
            });
        }
        if self.starting_lives < 0 {
            return Err(ConfigError::OutOfRange {
                field: "starting_lives",
                value: f64::from(self.starting_lives),
                expected: ">= 0",
            });
        }
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "[0, 1]",
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: "> 0",
        })
    }
}
