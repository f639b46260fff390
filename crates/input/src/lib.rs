//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and tracks the
//! held fast-fall key, including terminals that never report key releases.

pub mod hold;
pub mod map;

pub use wordris_types as types;

pub use hold::{FastFallHold, DEFAULT_RELEASE_TIMEOUT_MS};
pub use map::{direction_for, is_fast_fall_key, map_key, should_quit};
