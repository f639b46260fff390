//! Wordris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces
//! that only the binary needs: environment configuration, file logging and
//! the external speech program.

pub use wordris_core as core;
pub use wordris_engine as engine;
pub use wordris_input as input;
pub use wordris_term as term;
pub use wordris_types as types;

pub mod config;
pub mod logging;
pub mod speech;

pub use config::{AppConfig, ConfigError, SpeechCommand};
pub use speech::CommandSpeaker;

use crate::engine::{SilentSpeaker, Speaker};

/// The speaker the configuration asks for
pub fn speaker_for(config: &AppConfig) -> Box<dyn Speaker> {
    match &config.speech {
        Some(command) => Box::new(CommandSpeaker::new(command.clone())),
        None => Box::new(SilentSpeaker),
    }
}

/// Configured seed, or a fresh one from the OS
pub fn resolve_seed(config: &AppConfig) -> u32 {
    config.seed.unwrap_or_else(rand::random)
}
