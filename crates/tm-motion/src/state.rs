//! Per-vehicle motion state.

use tm_core::{GeoPoint, RouteId, VehicleId, VehicleRng};

/// Metres per second → kilometres per hour.
pub const MS_TO_KMH: f64 = 3.6;

/// Ease-out-cubic curve: `1 - (1 - t)^3`.  Fast start, decelerating into
/// `t = 1`.  Input is clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ── Animation ─────────────────────────────────────────────────────────────────

/// An eased move from `from` to `to` over `duration_ms`.
///
/// `t` is the linear progress fraction in `[0, 1]`; the displayed position
/// uses the eased fraction.  Once `t` reaches 1 the vehicle holds at `to`
/// until a new animation replaces this one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub from:        GeoPoint,
    pub to:          GeoPoint,
    pub t:           f64,
    pub duration_ms: f64,
}

impl Animation {
    /// A finished animation that keeps the vehicle at `at`.
    pub fn holding(at: GeoPoint, duration_ms: f64) -> Self {
        Self { from: at, to: at, t: 1.0, duration_ms }
    }

    /// A fresh animation from `from` to `to`, starting at `t = 0`.
    pub fn towards(from: GeoPoint, to: GeoPoint, duration_ms: f64) -> Self {
        Self { from, to, t: 0.0, duration_ms }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.t >= 1.0
    }

    /// Position for the current `t`.
    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.from.lerp(self.to, ease_out_cubic(self.t))
    }

    /// Move `t` forward by `dt_ms / duration_ms`, clamped to 1.  A zero or
    /// negative duration finishes immediately.
    pub fn step(&mut self, dt_ms: f64) {
        if self.duration_ms > 0.0 {
            self.t = (self.t + dt_ms.max(0.0) / self.duration_ms).min(1.0);
        } else {
            self.t = 1.0;
        }
    }
}

// ── MotionState ───────────────────────────────────────────────────────────────

/// Strategy-specific part of a vehicle record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionState {
    /// Segment traversal: index of the waypoint the vehicle last departed.
    Segment { index: usize },
    /// Target seeking: the current eased move.
    Target(Animation),
}

impl MotionState {
    pub fn kind(&self) -> &'static str {
        match self {
            MotionState::Segment { .. } => "segment",
            MotionState::Target(_)      => "target",
        }
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One simulated vehicle.
///
/// The route is a shared, read-only reference by id; many vehicles may run
/// on the same route.  The vehicle owns its RNG so periodic reassignment
/// needs no state beyond this record.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id:       VehicleId,
    pub route:    RouteId,
    pub position: GeoPoint,
    /// Canonical speed in metres per second.
    pub speed_ms: f64,
    /// Display-only heading in degrees; does not affect motion.
    pub heading:  Option<f64>,
    pub motion:   MotionState,
    pub rng:      VehicleRng,
}

impl Vehicle {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    #[inline]
    pub fn speed_ms(&self) -> f64 {
        self.speed_ms
    }

    #[inline]
    pub fn speed_kmh(&self) -> f64 {
        self.speed_ms * MS_TO_KMH
    }

    #[inline]
    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    /// Current segment index in segment mode, `None` otherwise.
    pub fn segment_index(&self) -> Option<usize> {
        match self.motion {
            MotionState::Segment { index } => Some(index),
            MotionState::Target(_) => None,
        }
    }

    /// Current animation in target mode, `None` otherwise.
    pub fn animation(&self) -> Option<&Animation> {
        match &self.motion {
            MotionState::Target(anim) => Some(anim),
            MotionState::Segment { .. } => None,
        }
    }
}
