//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `vehicle_snapshots` and `frame_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{FrameSummaryRow, OutputResult, VehicleSnapshotRow};
use crate::writer::SnapshotWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS vehicle_snapshots (
                 frame           INTEGER NOT NULL,
                 vehicle_id      INTEGER NOT NULL,
                 route           TEXT    NOT NULL,
                 lat             REAL    NOT NULL,
                 lon             REAL    NOT NULL,
                 speed_kmh       REAL    NOT NULL,
                 heading         REAL,
                 next_stop       TEXT,
                 stop_distance_m REAL
             );
             CREATE TABLE IF NOT EXISTS frame_summaries (
                 frame      INTEGER PRIMARY KEY,
                 virtual_ms REAL    NOT NULL,
                 advanced   INTEGER NOT NULL,
                 skipped    INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl SnapshotWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vehicle_snapshots \
                 (frame, vehicle_id, route, lat, lon, speed_kmh, heading, next_stop, stop_distance_m) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.frame as i64,
                    row.vehicle_id,
                    row.route,
                    row.lat,
                    row.lon,
                    row.speed_kmh,
                    row.heading,
                    row.next_stop,
                    row.stop_distance_m,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO frame_summaries (frame, virtual_ms, advanced, skipped) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.frame as i64, row.virtual_ms, row.advanced as i64, row.skipped as i64],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
