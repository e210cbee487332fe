//! Top-level simulation configuration.

use std::fmt;

use crate::{TmError, TmResult};

// ── StrategyKind ──────────────────────────────────────────────────────────────

/// Which motion model drives the fleet for a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    /// Constant-speed traversal of the route path, segment by segment.
    #[default]
    Segment,
    /// Periodic random targets near the route, reached with eased motion.
    Target,
}

impl StrategyKind {
    /// Label used in logs and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Segment => "segment",
            StrategyKind::Target  => "target",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by every strategy.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the simulation builder.  Missing fields
/// take their [`Default`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of vehicles spawned, assigned to routes round-robin.
    pub vehicle_count: u32,

    /// Motion model for this run.
    pub strategy: StrategyKind,

    /// Virtual frame cadence used by `run_for`, in milliseconds.  16 ≈ 60 Hz.
    pub frame_interval_ms: f64,

    /// Coarse timer cadence for target/speed reassignment, in milliseconds.
    pub reassign_interval_ms: f64,

    /// Emit a fleet snapshot every N frames.  0 disables snapshots.
    pub snapshot_interval_frames: u64,

    /// Lower clamp on a frame step, in milliseconds.
    pub min_frame_dt_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                     42,
            vehicle_count:            12,
            strategy:                 StrategyKind::Segment,
            frame_interval_ms:        16.0,
            reassign_interval_ms:     1_200.0,
            snapshot_interval_frames: 60,
            min_frame_dt_ms:          16.0,
        }
    }
}

impl SimConfig {
    /// Reject settings that would stall the driver or divide by zero.
    pub fn validate(&self) -> TmResult<()> {
        if self.vehicle_count == 0 {
            return Err(TmError::Config("vehicle_count must be at least 1".into()));
        }
        for (name, value) in [
            ("frame_interval_ms", self.frame_interval_ms),
            ("reassign_interval_ms", self.reassign_interval_ms),
            ("min_frame_dt_ms", self.min_frame_dt_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TmError::Config(format!(
                    "{name} must be a positive number of milliseconds, got {value}"
                )));
            }
        }
        Ok(())
    }
}
