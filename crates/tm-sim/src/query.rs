//! Nearest-stop and ETA queries over the current simulation state.
//!
//! Everything here is read-only and returns `None` for an unknown vehicle.
//! Degenerate numbers never fault: a route without stops reports an
//! infinite distance, and a stopped vehicle reports [`Eta::Unknown`].

use std::fmt;

use tm_core::VehicleId;
use tm_motion::EtaFormat;
use tm_routes::NearestStop;

use crate::{SimulationState, VehicleSnapshot};

/// Speeds are floored at this many metres per second before dividing.
pub const MIN_SPEED_MS: f64 = 0.1;

/// Placeholder shown when an ETA cannot be computed.
pub const UNKNOWN_LABEL: &str = "—";

// ── Eta ───────────────────────────────────────────────────────────────────────

/// Estimated time to reach a stop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Eta {
    /// Zero speed or no stop to head for.
    Unknown,
    /// Seconds until arrival at the current speed.
    Seconds(f64),
}

impl Eta {
    /// `distance_m / max(speed_ms, MIN_SPEED_MS)`, or `Unknown` when the
    /// vehicle is not moving or the distance is not finite.
    pub fn from_distance(distance_m: f64, speed_ms: f64) -> Eta {
        if !(speed_ms > 0.0) || !distance_m.is_finite() {
            return Eta::Unknown;
        }
        Eta::Seconds(distance_m.max(0.0) / speed_ms.max(MIN_SPEED_MS))
    }

    #[inline]
    pub fn is_known(self) -> bool {
        matches!(self, Eta::Seconds(_))
    }

    #[inline]
    pub fn seconds(self) -> Option<f64> {
        match self {
            Eta::Seconds(s) => Some(s),
            Eta::Unknown    => None,
        }
    }

    /// Whole minutes, rounded to nearest.
    pub fn minutes(self) -> Option<u64> {
        self.seconds().map(|s| (s / 60.0).round() as u64)
    }

    /// Text for the detail panel: `"4 min"`, `"3m 12s"`, or `"—"`.
    pub fn label(self, format: EtaFormat) -> String {
        let Some(secs) = self.seconds() else {
            return UNKNOWN_LABEL.to_owned();
        };
        match format {
            EtaFormat::Minutes => format!("{} min", (secs / 60.0).round() as u64),
            EtaFormat::MinutesSeconds => {
                // Round first so 59.6 s reads "1m 0s", not "0m 60s".
                let total = secs.round() as u64;
                format!("{}m {}s", total / 60, total % 60)
            }
        }
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Nearest stop on the vehicle's own route.
///
/// A vehicle whose route does not resolve gets [`NearestStop::none`].
pub fn nearest_stop_to(state: &SimulationState, id: VehicleId) -> Option<NearestStop<'_>> {
    let vehicle = state.vehicle(id)?;
    Some(match state.routes.route(vehicle.route) {
        Some(route) => route.nearest_stop(vehicle.position),
        None        => NearestStop::none(),
    })
}

/// Time for the vehicle to reach its nearest stop at its current speed.
pub fn eta(state: &SimulationState, id: VehicleId) -> Option<Eta> {
    let vehicle = state.vehicle(id)?;
    let nearest = nearest_stop_to(state, id)?;
    Some(Eta::from_distance(nearest.distance_m, vehicle.speed_ms))
}

// ── VehicleDetail ─────────────────────────────────────────────────────────────

/// Payload of the selected-vehicle detail panel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleDetail {
    pub snapshot:     VehicleSnapshot,
    pub route_code:   Option<String>,
    pub next_stop:    Option<String>,
    /// Distance to `next_stop`, rounded to whole metres.
    pub distance_m:   Option<f64>,
    pub eta:          Eta,
    pub eta_label:    String,
}

/// Everything the detail panel shows for `id`, with the ETA rendered in
/// `format`.
pub fn vehicle_detail(state: &SimulationState, id: VehicleId, format: EtaFormat) -> Option<VehicleDetail> {
    let snapshot = state.snapshot(id)?;
    let nearest = nearest_stop_to(state, id)?;
    let eta = eta(state, id)?;
    let route_code = state
        .route_of(id)
        .and_then(|r| r.code())
        .map(str::to_owned);
    let distance_m = nearest
        .distance_m
        .is_finite()
        .then(|| nearest.distance_m.round());

    Some(VehicleDetail {
        snapshot,
        route_code,
        next_stop: nearest.name().map(str::to_owned),
        distance_m,
        eta,
        eta_label: eta.label(format),
    })
}

impl fmt::Display for VehicleDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.snapshot;
        writeln!(f, "{}", s.id)?;
        writeln!(
            f,
            "  route:     {} ({})",
            s.route,
            self.route_code.as_deref().unwrap_or(UNKNOWN_LABEL),
        )?;
        writeln!(f, "  position:  {}", s.position)?;
        writeln!(f, "  speed:     {} km/h", s.speed_kmh.round())?;
        match (&self.next_stop, self.distance_m) {
            (Some(name), Some(d)) => writeln!(f, "  next stop: {name} ({d} m)")?,
            _                     => writeln!(f, "  next stop: {UNKNOWN_LABEL}")?,
        }
        write!(f, "  eta:       {}", self.eta_label)
    }
}
