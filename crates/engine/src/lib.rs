//! Engine - timing, notifications and commands around the word game model
//!
//! The model in `wordris-core` only knows single transitions. This crate adds
//! everything that makes it a game:
//!
//! - **Cadence**: a fall timer and a spawn timer per difficulty level, plus a
//!   faster fall while the player holds fast-fall
//! - **Rounds**: a completed word waits [`ROUND_RESTART_DELAY_MS`] before the
//!   next word is drawn
//! - **Feedback**: collected, burned and completed letters go to a
//!   [`Notifier`], and to a [`Speaker`] when sound is on
//!
//! Time never comes from a clock here. The caller feeds elapsed milliseconds
//! to [`Controller::advance`], so every run is reproducible.
//!
//! # Example
//!
//! ```
//! use wordris_engine::{Controller, Notifier, SilentSpeaker};
//! use wordris_core::SimpleRng;
//!
//! struct Ignore;
//! impl Notifier for Ignore {
//!     fn notify(&mut self, _: &str, _: &str) {}
//! }
//!
//! let mut game = Controller::new(SimpleRng::new(1), Ignore, SilentSpeaker);
//! game.advance(3000);
//! assert!(game.state().active_letter().is_some());
//! ```
//!
//! [`ROUND_RESTART_DELAY_MS`]: crate::types::ROUND_RESTART_DELAY_MS

pub mod controller;
pub mod messages;
pub mod timer;

pub use wordris_core as core;
pub use wordris_types as types;

pub use controller::{Controller, Notifier, SilentSpeaker, Speaker};
pub use messages::{letter_callout, message_for, Message};
pub use timer::{DelayTimer, IntervalTimer};
