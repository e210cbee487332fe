//! The `SnapshotWriter` trait implemented by all backend writers.

use crate::{FrameSummaryRow, OutputResult, VehicleSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait SnapshotWriter {
    /// Write one fleet snapshot.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
