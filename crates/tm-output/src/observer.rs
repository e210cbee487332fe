//! `SimOutputObserver<W>` — bridges `SimObserver` to a `SnapshotWriter`.

use tm_core::{SimConfig, Tick};
use tm_sim::{SimObserver, SimulationState, nearest_stop_to};

use crate::row::{FrameSummaryRow, VehicleSnapshotRow};
use crate::writer::SnapshotWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes fleet snapshots and frame summaries to any
/// [`SnapshotWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_for()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: SnapshotWriter> {
    writer:            W,
    frame_interval_ms: f64,
    last_error:        Option<OutputError>,
}

impl<W: SnapshotWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert frame
    /// numbers to virtual time.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            frame_interval_ms: config.frame_interval_ms,
            last_error:        None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Frame `n` runs one interval after frame `n - 1`; frame 0 runs one
    /// interval after the start.
    fn virtual_ms(&self, frame: Tick) -> f64 {
        (frame.0 + 1) as f64 * self.frame_interval_ms
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// One row per vehicle, ascending id.
fn snapshot_rows(frame: Tick, state: &SimulationState) -> Vec<VehicleSnapshotRow> {
    state
        .snapshots()
        .map(|snap| {
            let nearest = nearest_stop_to(state, snap.id).filter(|n| n.is_known());
            VehicleSnapshotRow {
                frame:           frame.0,
                vehicle_id:      snap.id.0,
                route:           snap.route,
                lat:             snap.position.lat,
                lon:             snap.position.lon,
                speed_kmh:       snap.speed_kmh,
                heading:         snap.heading,
                next_stop:       nearest.and_then(|n| n.name()).map(str::to_owned),
                stop_distance_m: nearest.map(|n| n.distance_m.round()),
            }
        })
        .collect()
}

impl<W: SnapshotWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Tick, advanced: usize, skipped: usize) {
        let row = FrameSummaryRow {
            frame:      frame.0,
            virtual_ms: self.virtual_ms(frame),
            advanced:   advanced as u64,
            skipped:    skipped as u64,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Tick, state: &SimulationState) {
        let rows = snapshot_rows(frame, state);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
