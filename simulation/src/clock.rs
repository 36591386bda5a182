use std::time::Duration;

/// Fixed-rate tick source that produces monotonically increasing host timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    period: Duration,
    now: Duration,
}

impl FrameClock {
    /// Creates a clock ticking `fps` times per simulated second, starting at zero.
    ///
    /// A rate of zero is treated as one frame per second.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            now: Duration::ZERO,
        }
    }

    /// Current timestamp.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Duration between two ticks.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Advances the clock by one period and returns the new timestamp.
    pub fn tick(&mut self) -> Duration {
        self.now += self.period;
        self.now
    }
}
