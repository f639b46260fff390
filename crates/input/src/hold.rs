//! Held fast-fall key tracking.
//!
//! Terminals without the keyboard enhancement protocol never report key
//! releases, so a hold also ends after a quiet period with no press or
//! auto-repeat.

use crate::types::Command;

/// Quiet time after the last press/repeat that counts as a release
pub const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 600;

#[derive(Debug, Clone)]
pub struct FastFallHold {
    held: bool,
    /// Milliseconds since the last press or repeat
    quiet_ms: u32,
    release_timeout_ms: u32,
}

impl FastFallHold {
    pub fn new() -> Self {
        Self {
            held: false,
            quiet_ms: 0,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// For terminals that report key releases: only a release ends the hold.
    pub fn without_release_timeout(self) -> Self {
        self.with_release_timeout_ms(u32::MAX)
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Key went down. Only the first press of a hold starts fast-fall.
    pub fn press(&mut self) -> Option<Command> {
        self.quiet_ms = 0;
        if self.held {
            None
        } else {
            self.held = true;
            Some(Command::StartFastFall)
        }
    }

    /// Terminal auto-repeat while the key is down
    pub fn repeat(&mut self) -> Option<Command> {
        self.press()
    }

    pub fn release(&mut self) -> Option<Command> {
        self.quiet_ms = 0;
        if self.held {
            self.held = false;
            Some(Command::StopFastFall)
        } else {
            None
        }
    }

    /// Advance the quiet timer; ends the hold once the timeout passes.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.quiet_ms = self.quiet_ms.saturating_add(elapsed_ms);
        if self.quiet_ms > self.release_timeout_ms {
            self.release()
        } else {
            None
        }
    }
}

impl Default for FastFallHold {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_release() {
        let mut hold = FastFallHold::new();
        assert_eq!(hold.press(), Some(Command::StartFastFall));
        assert_eq!(hold.press(), None);
        assert!(hold.is_held());
        assert_eq!(hold.release(), Some(Command::StopFastFall));
        assert_eq!(hold.release(), None);
    }

    #[test]
    fn test_timeout_releases() {
        let mut hold = FastFallHold::new();
        hold.press();
        assert_eq!(hold.update(600), None);
        assert_eq!(hold.update(1), Some(Command::StopFastFall));
        assert!(!hold.is_held());
        assert_eq!(hold.update(1000), None);
    }

    #[test]
    fn test_release_events_only() {
        let mut hold = FastFallHold::new().without_release_timeout();
        hold.press();
        assert_eq!(hold.update(u32::MAX), None);
        assert_eq!(hold.update(60_000), None);
        assert!(hold.is_held());
        assert_eq!(hold.release(), Some(Command::StopFastFall));
    }

    #[test]
    fn test_repeat_keeps_hold_alive() {
        let mut hold = FastFallHold::new().with_release_timeout_ms(100);
        hold.press();
        for _ in 0..10 {
            assert_eq!(hold.update(80), None);
            assert_eq!(hold.repeat(), None);
        }
        assert!(hold.is_held());
    }
}
