//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `WORDRIS_SPEED` | `easy` / `normal` / `hard` (Swedish names accepted) | `normal` |
//! | `WORDRIS_SOUND` | `1`/`true`/`on` or `0`/`false`/`off` | off |
//! | `WORDRIS_SEED` | RNG seed (u32) | from entropy |
//! | `WORDRIS_SPEECH_CMD` | speech program and arguments, e.g. `espeak -v sv` | none |
//! | `WORDRIS_LOG_PATH` | log file | none (no logging) |

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::SpeedLevel;

pub const ENV_SPEED: &str = "WORDRIS_SPEED";
pub const ENV_SOUND: &str = "WORDRIS_SOUND";
pub const ENV_SEED: &str = "WORDRIS_SEED";
pub const ENV_SPEECH_CMD: &str = "WORDRIS_SPEECH_CMD";
pub const ENV_LOG_PATH: &str = "WORDRIS_LOG_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WORDRIS_SPEED: unknown speed {0:?} (expected easy, normal or hard)")]
    UnknownSpeed(String),
    #[error("WORDRIS_SOUND: expected on/off, got {0:?}")]
    InvalidBool(String),
    #[error("WORDRIS_SEED: not a u32 seed: {0:?}")]
    InvalidSeed(String),
    #[error("WORDRIS_SPEECH_CMD is set but empty")]
    EmptySpeechCommand,
}

/// External speech program: `program args... <text>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SpeechCommand {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let mut parts = s.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ConfigError::EmptySpeechCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub speed: SpeedLevel,
    pub sound_enabled: bool,
    /// `None` seeds from entropy
    pub seed: Option<u32>,
    pub speech: Option<SpeechCommand>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let speed = match get(ENV_SPEED) {
            Some(s) => SpeedLevel::from_str(&s).ok_or(ConfigError::UnknownSpeed(s))?,
            None => SpeedLevel::default(),
        };

        let sound_enabled = match get(ENV_SOUND) {
            Some(s) => parse_bool(&s).ok_or(ConfigError::InvalidBool(s))?,
            None => false,
        };

        let seed = match get(ENV_SEED) {
            Some(s) => Some(s.parse::<u32>().map_err(|_| ConfigError::InvalidSeed(s))?),
            None => None,
        };

        // Set-but-blank is a mistake worth reporting, unlike an unset variable.
        let speech = match lookup(ENV_SPEECH_CMD) {
            Some(s) => Some(SpeechCommand::parse(&s)?),
            None => None,
        };

        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        Ok(Self {
            speed,
            sound_enabled,
            seed,
            speech,
            log_path,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
