//! Plain data row types written by output backends.

/// One vehicle at one snapshot frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub frame:           u64,
    pub vehicle_id:      u32,
    pub route:           String,
    pub lat:             f64,
    pub lon:             f64,
    pub speed_kmh:       f64,
    /// Display heading in degrees; `None` for strategies without one.
    pub heading:         Option<f64>,
    /// Nearest stop on the vehicle's route, `None` if the route has none.
    pub next_stop:       Option<String>,
    /// Distance to `next_stop` in whole metres.
    pub stop_distance_m: Option<f64>,
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:      u64,
    /// Virtual time at which the frame ran.
    pub virtual_ms: f64,
    pub advanced:   u64,
    pub skipped:    u64,
}
