//! Simulation time model.
//!
//! # Design
//!
//! The simulation is frame-driven.  A `Tick` counts frames; the wall-clock
//! gap between two frames is measured by `FrameClock`, which turns host
//! timestamps (milliseconds, the unit display-refresh callbacks report) into
//! the `dt` fed to the motion strategies.
//!
//! When the host clock stalls or jumps backwards the raw gap is zero or
//! negative.  `FrameClock` clamps every step to `min_dt_ms` (16 ms by
//! default, one 60 Hz frame) so strategies never divide by a zero duration.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` every `interval` ticks, starting at tick 0.  Never true for a
    /// zero interval.
    #[inline]
    pub fn is_every(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Converts host frame timestamps into clamped step durations.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Smallest step ever reported, in milliseconds.
    pub min_dt_ms: f64,
    /// Number of frames stepped so far.
    pub current_tick: Tick,
    /// Sum of all (clamped) steps, in milliseconds.
    pub elapsed_ms: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(min_dt_ms: f64) -> Self {
        Self {
            min_dt_ms: min_dt_ms.max(f64::MIN_POSITIVE),
            current_tick: Tick::ZERO,
            elapsed_ms: 0.0,
            last_ms: None,
        }
    }

    /// Start measuring from `now_ms` without counting a frame.
    pub fn start_at(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Record a frame at host time `now_ms` and return its step in seconds.
    ///
    /// The first frame without a prior [`start_at`](Self::start_at) reports
    /// exactly `min_dt_ms`.
    pub fn step(&mut self, now_ms: f64) -> f64 {
        let raw = match self.last_ms {
            Some(last) => now_ms - last,
            None => self.min_dt_ms,
        };
        // `max` also maps a NaN gap to the minimum.
        let dt_ms = raw.max(self.min_dt_ms);
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        self.current_tick = self.current_tick + 1;
        self.elapsed_ms += dt_ms;
        dt_ms / 1_000.0
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_ms / 1_000.0)
    }
}
