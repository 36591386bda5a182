//! Wall-clock rate limiter shared by weapons, spawning and regeneration.

use std::time::Duration;

/// Remembers when an action last happened and gates the next one on elapsed time.
///
/// A fresh cooldown is ready immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cooldown {
    last: Option<Duration>,
}

impl Cooldown {
    /// Creates a cooldown that is ready immediately.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Reports whether strictly more than `interval` passed since the last trigger.
    #[must_use]
    pub fn is_ready(&self, now: Duration, interval: Duration) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) > interval,
        }
    }

    /// Records that the action happened at `now`.
    pub fn trigger(&mut self, now: Duration) {
        self.last = Some(now);
    }

    /// Triggers and returns `true` when ready, otherwise leaves the cooldown untouched.
    pub fn try_trigger(&mut self, now: Duration, interval: Duration) -> bool {
        if self.is_ready(now, interval) {
            self.trigger(now);
            true
        } else {
            false
        }
    }

    /// Forgets the last trigger so the next check succeeds.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cooldown_is_ready() {
        assert!(Cooldown::new().is_ready(Duration::ZERO, Duration::from_secs(1)));
    }

    #[test]
    fn requires_strictly_more_than_interval() {
        let mut cooldown = Cooldown::new();
        cooldown.trigger(Duration::from_millis(1_000));
        let interval = Duration::from_millis(500);
        assert!(!cooldown.try_trigger(Duration::from_millis(1_500), interval));
        assert!(cooldown.try_trigger(Duration::from_millis(1_501), interval));
        assert!(!cooldown.is_ready(Duration::from_millis(1_600), interval));
        cooldown.reset();
        assert!(cooldown.is_ready(Duration::from_millis(1_600), interval));
    }
}
