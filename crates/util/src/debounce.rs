//! Single-slot deferred-task primitive.
//!
//! Holds at most one pending due-time: scheduling replaces whatever was
//! pending before, so a burst of schedules settles into a single firing. The
//! host event loop drives it cooperatively by passing `Instant`s in; there are
//! no threads or timers behind this type.

use std::time::{Duration, Instant};

/// A cancelable, replaceable delayed task slot.
#[derive(Debug, Default, Clone)]
pub struct DebounceSlot {
    due_at: Option<Instant>,
}

impl DebounceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the slot to fire `delay` after `now`, replacing any pending
    /// schedule.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due_at = Some(now + delay);
    }

    /// Drops any pending schedule.
    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Clears and reports a due schedule.
    ///
    /// Returns `true` at most once per settled schedule: the slot is emptied
    /// on firing, so repeated polls stay quiet until the next `schedule`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due) if due <= now => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending schedule is due, if any.
    ///
    /// Hosts use this to bound their event-poll timeout.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.due_at.map(|due| due.saturating_duration_since(now))
    }
}
