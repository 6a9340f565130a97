//! Change committer: synchronous local state, debounced external echo.
//!
//! Every mutation replaces the locally rendered sequence immediately, so the
//! UI always reflects the keystroke that caused it. The external owner is
//! told later: each commit (re)schedules a single debounce slot, and only the
//! sequence standing when the slot settles is ever observed outside.

use std::time::{Duration, Instant};

use pairkit_types::Pair;
use pairkit_util::debounce::DebounceSlot;

/// Delay before a settled burst of commits is echoed to the owner.
pub const DEBOUNCE_MILLIS: u64 = 100;

#[derive(Debug, Default)]
pub struct ChangeCommitter {
    pairs: Vec<Pair>,
    slot: DebounceSlot,
}

impl ChangeCommitter {
    /// Seeds the initial sequence without scheduling a notification; an
    /// initialize-only load never reaches the owner.
    pub fn seed(&mut self, pairs: Vec<Pair>) {
        self.pairs = pairs;
        self.slot.cancel();
    }

    /// Replaces the rendered sequence and (re)schedules the owner
    /// notification.
    pub fn commit(&mut self, pairs: Vec<Pair>) {
        self.pairs = pairs;
        self.slot.schedule(Instant::now(), Duration::from_millis(DEBOUNCE_MILLIS));
    }

    /// The currently rendered sequence.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Whether a notification is still pending.
    pub fn is_dirty(&self) -> bool {
        self.slot.is_pending()
    }

    /// Returns the sequence to notify the owner with when the debounce window
    /// has settled at `now`. Fires at most once per settled window.
    pub fn take_due(&mut self, now: Instant) -> Option<Vec<Pair>> {
        self.slot.fire_if_due(now).then(|| self.pairs.clone())
    }

    /// Time until the pending notification is due, if any. Hosts use this to
    /// bound their event-poll timeout.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.slot.poll_timeout(now)
    }
}

#[cfg(test)]
mod tests {
    use pairkit_types::PairId;

    use super::*;

    fn pair(id: &str, name: &str) -> Pair {
        Pair {
            id: PairId::from(id),
            name: name.to_string(),
            value: String::new(),
            file_name: None,
            kind: None,
        }
    }

    #[test]
    fn seed_never_schedules() {
        let mut committer = ChangeCommitter::default();

        committer.seed(vec![pair("a", "A")]);

        assert!(!committer.is_dirty());
        assert!(committer.take_due(Instant::now() + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn rendered_state_is_current_before_the_window_settles() {
        let mut committer = ChangeCommitter::default();

        committer.commit(vec![pair("a", "A")]);

        assert_eq!(committer.pairs().len(), 1);
        assert!(committer.take_due(Instant::now()).is_none());
        assert!(committer.is_dirty());
    }

    #[test]
    fn rapid_commits_coalesce_into_the_last_sequence() {
        let mut committer = ChangeCommitter::default();

        committer.commit(vec![pair("a", "A")]);
        committer.commit(vec![pair("a", "A"), pair("b", "B")]);
        committer.commit(vec![pair("a", "A"), pair("b", "Bee")]);

        let settled = Instant::now() + Duration::from_millis(DEBOUNCE_MILLIS);
        let notified = committer.take_due(settled).unwrap();
        assert_eq!(notified.len(), 2);
        assert_eq!(notified[1].name, "Bee");

        // Exactly once per settled window.
        assert!(committer.take_due(settled + Duration::from_secs(1)).is_none());
    }
}
