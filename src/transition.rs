//! Linear value transitions over wall-clock time.

use std::time::{Duration, Instant};

/// Moves a value from `from` to `to` over `duration`, starting at `started`.
///
/// The transition holds no timer of its own; whoever owns it samples it with
/// [`Transition::value_at`] on each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    duration: Duration,
    started: Instant,
}

impl Transition {
    /// Starts a transition at `started`.
    pub fn new(from: f64, to: f64, duration: Duration, started: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started,
        }
    }

    /// Fraction of the duration elapsed at `now`, in `0.0..=1.0`.
    ///
    /// A zero duration is complete immediately. Instants before `started`
    /// count as zero elapsed time.
    pub fn fraction_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at `now`. Lands exactly on `to` once finished.
    pub fn value_at(&self, now: Instant) -> f64 {
        let t = self.fraction_at(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * t
        }
    }

    /// Whether the full duration has elapsed at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction_at(now) >= 1.0
    }

    /// Start value.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// End value.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Total length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the transition began.
    pub fn started(&self) -> Instant {
        self.started
    }
}
