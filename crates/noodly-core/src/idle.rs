use std::time::Duration;

/// Decides when the installation has been left alone long enough to play an
/// idle effect.
///
/// Idle effects start once nothing has triggered for `threshold` and then
/// repeat no more often than every `repeat` until the next touch.
#[derive(Clone, Debug)]
pub struct IdleWatchdog {
    threshold: Duration,
    repeat: Duration,
    last_trigger: Duration,
    last_idle: Duration,
}

impl IdleWatchdog {
    pub fn new(threshold: Duration, repeat: Duration, now: Duration) -> Self {
        Self {
            threshold,
            repeat,
            last_trigger: now,
            last_idle: now,
        }
    }

    /// A touch effect fired; restart the quiet period.
    pub fn record_trigger(&mut self, now: Duration) {
        self.last_trigger = now;
    }

    /// Returns true when an idle effect is due, and books it.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.quiet_for(now) > self.threshold && now.saturating_sub(self.last_idle) > self.repeat
        {
            self.last_idle = now;
            return true;
        }
        false
    }

    pub fn quiet_for(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last_trigger)
    }

    pub fn last_trigger(&self) -> Duration {
        self.last_trigger
    }

    pub fn last_idle(&self) -> Duration {
        self.last_idle
    }
}
