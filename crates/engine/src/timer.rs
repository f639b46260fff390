//! Millisecond timers driven by the caller's elapsed time.
//!
//! The controller owns these as plain values, so clearing or replacing a
//! timer is an assignment and nothing outlives the controller.

/// Repeating timer that fires every `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl IntervalTimer {
    /// A zero interval is bumped to 1ms so the timer always makes progress.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Milliseconds until the next firing
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }

    /// Change the interval and start counting from zero
    pub fn restart(&mut self, interval_ms: u32) {
        *self = Self::new(interval_ms);
    }

    /// Advance by at most `remaining_ms()`. Returns true when the timer fired.
    pub(crate) fn advance(&mut self, ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }
}

/// One-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayTimer {
    remaining_ms: u32,
}

impl DelayTimer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            remaining_ms: delay_ms,
        }
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Returns true once the delay has fully elapsed.
    pub(crate) fn advance(&mut self, ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(ms);
        self.remaining_ms == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_on_boundary_and_resets() {
        let mut t = IntervalTimer::new(500);
        assert!(!t.advance(499));
        assert_eq!(t.remaining_ms(), 1);
        assert!(t.advance(1));
        assert_eq!(t.remaining_ms(), 500);
    }

    #[test]
    fn interval_restart_discards_progress() {
        let mut t = IntervalTimer::new(500);
        t.advance(400);
        t.restart(100);
        assert_eq!(t.interval_ms(), 100);
        assert_eq!(t.remaining_ms(), 100);
    }

    #[test]
    fn zero_interval_is_bumped() {
        let t = IntervalTimer::new(0);
        assert_eq!(t.interval_ms(), 1);
    }

    #[test]
    fn delay_fires_once_elapsed() {
        let mut d = DelayTimer::new(2000);
        assert!(!d.advance(1999));
        assert!(d.advance(5));
        assert_eq!(d.remaining_ms(), 0);
    }
}
