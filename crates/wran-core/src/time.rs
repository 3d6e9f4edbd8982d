use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

/// Abstraction over the discrete-event scheduler's notion of "now".
///
/// Simulated time is the elapsed [`Duration`] since the start of the run, so
/// the zero instant is `Duration::ZERO`.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current simulated time.
    fn now(&self) -> Duration;
}

/// Wall clock measuring the time elapsed since its creation.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Manually advanced clock for discrete-event drivers and tests.
///
/// Time is kept in whole nanoseconds and saturates at `u64::MAX` (about 584
/// years).
#[derive(Debug, Default)]
pub struct SimClock {
    nanos: AtomicU64,
}

impl SimClock {
    /// Creates a clock at the zero instant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to an absolute time.
    pub fn set(&self, now: Duration) {
        self.nanos.store(saturating_nanos(now), Ordering::Relaxed);
    }

    /// Advances the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let delta = saturating_nanos(delta);
        let _ = self.nanos.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |nanos| {
            Some(nanos.saturating_add(delta))
        });
    }
}

impl Clock for SimClock {
    #[inline]
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
