//! Toast notifications for the terminal front end.

use std::collections::VecDeque;

use crate::engine::Notifier;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

/// Toasts shown at once
pub const TOAST_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    remaining_ms: u32,
}

impl Toast {
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}

/// Latest notifications, oldest first; expired and overflowing toasts drop out.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    duration_ms: u32,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_limits(TOAST_CAPACITY, TOAST_DURATION_MS)
    }

    pub fn with_limits(capacity: usize, duration_ms: u32) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            duration_ms,
        }
    }

    pub fn push(&mut self, title: &str, description: &str) {
        while self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            title: title.to_string(),
            description: description.to_string(),
            remaining_ms: self.duration_ms,
        });
    }

    /// Age every toast; drops the expired ones.
    pub fn update(&mut self, elapsed_ms: u32) {
        for toast in &mut self.toasts {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.toasts.retain(|t| t.remaining_ms > 0);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, title: &str, description: &str) {
        self.push(title, description);
    }
}
