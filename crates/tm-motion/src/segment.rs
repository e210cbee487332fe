//! Constant-speed traversal of a route path, one segment at a time.

use tm_core::{GeoPoint, RouteId, VehicleId, VehicleRng};
use tm_routes::Route;

use crate::{MotionError, MotionResult, MotionState, MotionStrategy, Step, Vehicle};

/// What happens after a vehicle reaches the end of its segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WrapPolicy {
    /// The path is a closed loop of `len` segments: after the last waypoint
    /// the vehicle drives back to the first one.
    #[default]
    Closed,
    /// Only the `len - 1` open segments are driven: reaching the last
    /// waypoint teleports the vehicle back to the first.
    Restart,
}

impl WrapPolicy {
    /// Segment index after completing segment `index` on a `len`-waypoint
    /// path (`len >= 2`).
    #[inline]
    pub fn next_index(self, index: usize, len: usize) -> usize {
        match self {
            WrapPolicy::Closed  => (index + 1) % len,
            WrapPolicy::Restart => (index + 1) % (len - 1),
        }
    }
}

/// Tunables for [`SegmentTraversal`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentConfig {
    /// Spawn speed is uniform in `[speed_ms_min, speed_ms_max)`.
    pub speed_ms_min:        f64,
    pub speed_ms_max:        f64,
    /// A vehicle closer than this to the segment end counts as arrived.
    pub arrival_tolerance_m: f64,
    pub wrap:                WrapPolicy,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            speed_ms_min:        8.0,
            speed_ms_max:        12.0,
            arrival_tolerance_m: 5.0,
            wrap:                WrapPolicy::Closed,
        }
    }
}

/// Strategy A: constant speed along the path.
///
/// Each step moves `speed · dt` metres along the current segment `[A, B]`,
/// expressed as the fraction `frac = min(1, distance / |AB|)` of the segment
/// and applied to latitude and longitude independently.  The vehicle arrives
/// when `frac` hits 1, when it ends up within the arrival tolerance of `B`,
/// or when it has crossed `B` along the segment direction.  Arrival snaps it
/// to the start of the next segment chosen by the [`WrapPolicy`].
#[derive(Clone, Debug, Default)]
pub struct SegmentTraversal {
    pub config: SegmentConfig,
}

impl SegmentTraversal {
    pub fn new(config: SegmentConfig) -> Self {
        Self { config }
    }
}

/// Position of `p` along `a → b` as a multiple of the segment vector, in
/// degree space.  `>= 1` means `p` is at or past `b`.
fn along(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> f64 {
    let (dx, dy) = (b.lat - a.lat, b.lon - a.lon);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return 1.0;
    }
    ((p.lat - a.lat) * dx + (p.lon - a.lon) * dy) / len2
}

impl MotionStrategy for SegmentTraversal {
    fn spawn(&self, id: VehicleId, route_id: RouteId, route: &Route, mut rng: VehicleRng) -> Vehicle {
        let index = rng.gen_range(0..route.waypoint_count().saturating_sub(1).max(1));
        let speed_ms = rng.uniform(self.config.speed_ms_min, self.config.speed_ms_max);
        Vehicle {
            id,
            route: route_id,
            position: route.path()[index],
            speed_ms,
            heading: None,
            motion: MotionState::Segment { index },
            rng,
        }
    }

    fn advance(&self, vehicle: &mut Vehicle, route: &Route, dt_secs: f64) -> MotionResult<Step> {
        let MotionState::Segment { index } = vehicle.motion else {
            return Err(MotionError::WrongState {
                vehicle:  vehicle.id,
                expected: "segment",
                found:    vehicle.motion.kind(),
            });
        };
        let len = route.waypoint_count();
        let (a, b) = route.segment(index).ok_or(MotionError::SegmentOutOfRange {
            vehicle: vehicle.id,
            index,
            len,
        })?;

        let dist_ab = a.distance_m(b);
        let move_m = vehicle.speed_ms.max(0.0) * dt_secs.max(0.0);
        let frac = if dist_ab > 0.0 { (move_m / dist_ab).min(1.0) } else { 1.0 };

        let pos = vehicle.position;
        let next = GeoPoint::new(
            pos.lat + (b.lat - a.lat) * frac,
            pos.lon + (b.lon - a.lon) * frac,
        );

        let arrived = frac >= 1.0
            || next.distance_m(b) < self.config.arrival_tolerance_m
            || along(a, b, next) >= 1.0;

        if arrived {
            let index = self.config.wrap.next_index(index, len);
            vehicle.motion = MotionState::Segment { index };
            vehicle.position = route.path()[index];
            return Ok(Step::Arrived { segment: index });
        }

        vehicle.position = next;
        Ok(Step::Moved)
    }
}
