//! Target-seeking motion with eased interpolation.
//!
//! Two cadences drive this strategy.  A coarse timer (about every 1.2 s)
//! calls [`reassign`](MotionStrategy::reassign), which swaps in a new
//! [`Animation`] towards a jittered waypoint.  The frame loop calls
//! [`advance`](MotionStrategy::advance), which only moves the animation
//! fraction and recomputes the eased position.

use tm_core::{GeoPoint, RouteId, VehicleId, VehicleRng};
use tm_routes::Route;

use crate::state::MS_TO_KMH;
use crate::{Animation, EtaFormat, MotionError, MotionResult, MotionState, MotionStrategy, Step, Vehicle};

/// Tunables for [`TargetSeeking`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetConfig {
    /// Reassigned speed is uniform in `[speed_kmh_min, speed_kmh_max)`,
    /// rounded to whole km/h.
    pub speed_kmh_min:       f64,
    pub speed_kmh_max:       f64,
    /// Full width of the target jitter box, in degrees per axis.
    pub jitter_deg:          f64,
    /// Length of each eased move.
    pub duration_ms:         f64,
    /// Duration recorded on the holding animation a vehicle spawns with.
    pub initial_duration_ms: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            speed_kmh_min:       20.0,
            speed_kmh_max:       45.0,
            jitter_deg:          0.0015,
            duration_ms:         1_200.0,
            initial_duration_ms: 1_000.0,
        }
    }
}

/// Strategy B: periodic random targets near the route.
#[derive(Clone, Debug, Default)]
pub struct TargetSeeking {
    pub config: TargetConfig,
}

impl TargetSeeking {
    pub fn new(config: TargetConfig) -> Self {
        Self { config }
    }

    /// A random waypoint of `route`, shifted by up to half the jitter width
    /// on each axis.
    pub fn pick_target(&self, route: &Route, rng: &mut VehicleRng) -> GeoPoint {
        let base = rng
            .choose(route.path())
            .copied()
            .unwrap_or_default();
        let jitter = self.config.jitter_deg;
        base.offset(
            (rng.random::<f64>() - 0.5) * jitter,
            (rng.random::<f64>() - 0.5) * jitter,
        )
    }

    /// New speed in m/s, drawn in km/h and rounded like the display value.
    fn pick_speed_ms(&self, rng: &mut VehicleRng) -> f64 {
        let kmh = rng
            .uniform(self.config.speed_kmh_min, self.config.speed_kmh_max)
            .round();
        kmh / MS_TO_KMH
    }
}

impl MotionStrategy for TargetSeeking {
    /// The vehicle is created by its first target assignment: it appears at
    /// that target and holds there until the next reassignment.
    fn spawn(&self, id: VehicleId, route_id: RouteId, route: &Route, mut rng: VehicleRng) -> Vehicle {
        let target = self.pick_target(route, &mut rng);
        let speed_ms = self.pick_speed_ms(&mut rng);
        let heading = rng.uniform(0.0, 360.0);
        Vehicle {
            id,
            route: route_id,
            position: target,
            speed_ms,
            heading: Some(heading),
            motion: MotionState::Target(Animation::holding(target, self.config.initial_duration_ms)),
            rng,
        }
    }

    fn advance(&self, vehicle: &mut Vehicle, _route: &Route, dt_secs: f64) -> MotionResult<Step> {
        let MotionState::Target(anim) = &mut vehicle.motion else {
            return Err(MotionError::WrongState {
                vehicle:  vehicle.id,
                expected: "target",
                found:    vehicle.motion.kind(),
            });
        };
        if anim.is_finished() {
            return Ok(Step::Holding);
        }
        anim.step(dt_secs * 1_000.0);
        vehicle.position = anim.position();
        Ok(Step::Moved)
    }

    fn reassign(&self, vehicle: &mut Vehicle, route: &Route) {
        let target = self.pick_target(route, &mut vehicle.rng);
        let speed_ms = self.pick_speed_ms(&mut vehicle.rng);
        let heading = vehicle.rng.uniform(0.0, 360.0);

        vehicle.motion = MotionState::Target(Animation::towards(
            vehicle.position,
            target,
            self.config.duration_ms,
        ));
        vehicle.speed_ms = speed_ms;
        vehicle.heading = Some(heading);
    }

    fn uses_reassignment(&self) -> bool {
        true
    }

    fn eta_format(&self) -> EtaFormat {
        EtaFormat::MinutesSeconds
    }
}
