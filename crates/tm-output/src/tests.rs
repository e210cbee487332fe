//! Integration tests for tm-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{FrameSummaryRow, VehicleSnapshotRow};
    use crate::writer::SnapshotWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: u32, frame: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            frame,
            vehicle_id,
            route:           "Ruta A".into(),
            lat:             12.125,
            lon:             -86.236,
            speed_kmh:       36.0,
            heading:         None,
            next_stop:       Some("Parque Central".into()),
            stop_distance_m: Some(0.0),
        }
    }

    fn summary_row(frame: u64) -> FrameSummaryRow {
        FrameSummaryRow { frame, virtual_ms: (frame + 1) as f64 * 16.0, advanced: 12, skipped: 0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("frame_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADER);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5");              // frame
        assert_eq!(&read_rows[0][1], "0");              // vehicle_id
        assert_eq!(&read_rows[0][2], "Ruta A");
        assert_eq!(&read_rows[0][5], "36.0");           // speed_kmh
        assert_eq!(&read_rows[0][6], "");               // no heading
        assert_eq!(&read_rows[0][7], "Parque Central");
        assert_eq!(&read_rows[2][1], "2");
    }

    #[test]
    fn csv_frame_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");   // frame
        assert_eq!(&read_rows[0][1], "64");  // (3 + 1) * 16
        assert_eq!(&read_rows[0][2], "12");  // advanced
        assert_eq!(&read_rows[0][3], "0");   // skipped
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use tm_core::SimConfig;
        use tm_motion::SegmentTraversal;
        use tm_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            seed:                     1,
            vehicle_count:            3,
            snapshot_interval_frames: 2,
            ..SimConfig::default()
        };

        let routes = tm_routes::demo::managua().unwrap();
        let mut sim = SimBuilder::new(config.clone(), routes, SegmentTraversal::default())
            .fleet_routes(tm_routes::demo::URBAN_ROUTES)
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run_for(96.0, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // 6 frames, snapshot interval 2 → frames 0, 2, 4 (3 frames × 3 vehicles = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 3 frames × 3 vehicles = 9 snapshot rows, got {}", rows.len());
        assert!(rows.iter().all(|r| !r[7].is_empty()), "urban routes always have a next stop");

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        assert_eq!(&summaries[5][1], "96");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{FrameSummaryRow, VehicleSnapshotRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::SnapshotWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(vehicle_id: u32, next_stop: Option<&str>) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            frame: 1,
            vehicle_id,
            route:           "Ruta B".into(),
            lat:             12.11,
            lon:             -86.25,
            speed_kmh:       30.0,
            heading:         Some(90.0),
            next_stop:       next_stop.map(str::to_owned),
            stop_distance_m: next_stop.map(|_| 120.0),
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![row(0, Some("Colegio")), row(1, Some("Plaza Sur")), row(2, None)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM vehicle_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_missing_stop_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[row(0, None)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (stop, dist): (Option<String>, Option<f64>) = conn.query_row(
            "SELECT next_stop, stop_distance_m FROM vehicle_snapshots WHERE vehicle_id = 0",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(stop, None);
        assert_eq!(dist, None);
    }

    #[test]
    fn sqlite_frame_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&FrameSummaryRow {
            frame: 7, virtual_ms: 128.0, advanced: 11, skipped: 1,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (frame, ms, skipped): (i64, f64, i64) = conn.query_row(
            "SELECT frame, virtual_ms, skipped FROM frame_summaries WHERE frame = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(frame, 7);
        assert_eq!(ms, 128.0);
        assert_eq!(skipped, 1);
    }
}
