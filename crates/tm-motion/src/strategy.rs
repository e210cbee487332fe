//! The `MotionStrategy` trait — the pluggable movement model.

use tm_core::{RouteId, VehicleId, VehicleRng};
use tm_routes::Route;

use crate::{MotionResult, Vehicle};

/// What one `advance` call did to a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Position changed but no waypoint was reached.
    Moved,
    /// The vehicle reached the end of its segment and now sits at the start
    /// of segment `segment`.
    Arrived { segment: usize },
    /// Nothing to do: the current animation has already finished.
    Holding,
}

/// How an ETA should be rendered for vehicles driven by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EtaFormat {
    /// Whole minutes, e.g. `"4 min"`.
    #[default]
    Minutes,
    /// Minutes and seconds, e.g. `"3m 12s"`.
    MinutesSeconds,
}

/// Pluggable vehicle movement model.
///
/// `Sim` is generic over this trait; pick [`SegmentTraversal`] or
/// [`TargetSeeking`] at build time.
///
/// # Thread safety
///
/// `advance` only receives the one vehicle it moves plus a shared route, so
/// a fleet can be advanced on Rayon's pool.  Implementations must therefore
/// be `Send + Sync` and keep all per-vehicle state in the `Vehicle` record.
///
/// [`SegmentTraversal`]: crate::SegmentTraversal
/// [`TargetSeeking`]: crate::TargetSeeking
pub trait MotionStrategy: Send + Sync + 'static {
    /// Create vehicle `id` on `route`, drawing its initial state from `rng`.
    fn spawn(&self, id: VehicleId, route_id: RouteId, route: &Route, rng: VehicleRng) -> Vehicle;

    /// Advance one vehicle by `dt_secs` seconds.
    ///
    /// # Errors
    ///
    /// A `MotionError` if the vehicle's record does not fit this strategy or
    /// its route.  The caller skips the vehicle for this tick.
    fn advance(&self, vehicle: &mut Vehicle, route: &Route, dt_secs: f64) -> MotionResult<Step>;

    /// Coarse-timer hook: pick new targets, speeds, headings.
    ///
    /// Default: no-op (the vehicle keeps its spawn-time parameters).
    fn reassign(&self, _vehicle: &mut Vehicle, _route: &Route) {}

    /// `true` if [`reassign`](Self::reassign) does anything.  Lets the driver
    /// skip the coarse timer entirely.
    fn uses_reassignment(&self) -> bool {
        false
    }

    fn eta_format(&self) -> EtaFormat {
        EtaFormat::Minutes
    }
}
