//! World clock and time normalization.
//!
//! Ticks are driven by external polling, so the wall-clock gap between two
//! ticks is irregular. Every tick scales movement and harvesting by a
//! *time factor* derived from that gap:
//!
//! ```text
//! time_factor = min(elapsed_seconds * 5, 1.0)
//! ```
//!
//! Motion is proportional to real elapsed time under a normal polling
//! cadence, and capped at one full step after a long pause (for example a
//! stalled client), so agents never jump across the field.
//!
//! The wall clock is injected through the [`Clock`] trait. Production code
//! uses [`SystemClock`]; tests use [`ManualClock`] to step time
//! deterministically without real delays.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeDelta, Utc};

/// Multiplier from elapsed seconds to time factor.
pub const TIME_FACTOR_SCALE: f64 = 5.0;

/// Upper bound of the time factor; reached once 0.2 s have elapsed.
pub const MAX_TIME_FACTOR: f64 = 1.0;

/// A source of wall-clock time.
pub trait Clock: fmt::Debug + Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the world.
#[derive(Debug, Clone)]
pub struct ManualClock {
    micros: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            micros: Arc::new(AtomicI64::new(start.timestamp_micros())),
        }
    }

    /// Move the clock by `delta` (which may be negative).
    pub fn advance(&self, delta: TimeDelta) {
        let step = delta.num_microseconds().unwrap_or(if delta < TimeDelta::zero() {
            i64::MIN
        } else {
            i64::MAX
        });
        self.micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(step))
            })
            .ok();
    }

    /// Jump the clock to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.micros
            .store(instant.timestamp_micros(), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_micros(self.micros.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// Seconds elapsed from `last` to `now`; zero if the clock ran backwards.
pub fn elapsed_seconds(now: DateTime<Utc>, last: DateTime<Utc>) -> f64 {
    now.signed_duration_since(last)
        .to_std()
        .map_or(0.0, |elapsed| elapsed.as_secs_f64())
}

/// Map the gap between two ticks onto the `[0, 1]` movement scale.
pub fn time_factor(now: DateTime<Utc>, last: DateTime<Utc>) -> f64 {
    (elapsed_seconds(now, last) * TIME_FACTOR_SCALE).min(MAX_TIME_FACTOR)
}

/// Tick counter plus the timestamp of the last committed tick.
#[derive(Debug, Clone)]
pub struct WorldClock {
    /// Where "now" comes from.
    source: Arc<dyn Clock>,

    /// When the previous tick (or the last reset) was committed.
    last_update: DateTime<Utc>,

    /// Ticks committed since the last reset.
    tick: u64,
}

impl WorldClock {
    /// Create a clock reading from `source`, starting at tick 0 "now".
    pub fn new(source: Arc<dyn Clock>) -> Self {
        let last_update = source.now();
        Self {
            source,
            last_update,
            tick: 0,
        }
    }

    /// Restart at tick 0 with the last update set to "now".
    pub fn restart(&mut self) {
        self.last_update = self.source.now();
        self.tick = 0;
    }

    /// Read the underlying clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.source.now()
    }

    /// The time factor a tick committed at `now` would run with.
    pub fn time_factor_at(&self, now: DateTime<Utc>) -> f64 {
        time_factor(now, self.last_update)
    }

    /// Record a completed tick at `now`. Returns the new tick number.
    pub fn commit(&mut self, now: DateTime<Utc>) -> u64 {
        self.last_update = now;
        self.tick = self.tick.saturating_add(1);
        self.tick
    }

    /// Ticks committed since the last reset.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// When the last tick (or reset) was committed.
    pub const fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }
}
