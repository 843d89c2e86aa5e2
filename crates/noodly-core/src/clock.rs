use std::time::Duration;

/// Time source for the control loop.
///
/// `now` is measured from an arbitrary fixed origin. The loop's only
/// suspension point is `sleep`, so swapping in [`ManualClock`] makes the whole
/// engine run in simulated time.
pub trait Clock {
    fn now(&self) -> Duration;
    fn sleep(&mut self, period: Duration);
}

/// Wall clock: monotonic time since construction, real sleeps.
#[derive(Debug)]
pub struct SystemClock {
    start: instant::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Simulated clock: sleeping advances time instantly.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Duration) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, period: Duration) {
        self.advance(period);
    }
}
