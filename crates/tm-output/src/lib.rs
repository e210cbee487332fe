//! `tm-output` — simulation output writers for the transit map simulator.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                                           |
//! |-----------|-------------|---------------------------------------------------------|
//! | *(none)*  | CSV         | `vehicle_snapshots.csv`, `frame_summaries.csv`          |
//! | `sqlite`  | SQLite      | `output.db`                                             |
//!
//! Both backends implement [`SnapshotWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tm_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tm_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run_for(60_000.0, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{FrameSummaryRow, VehicleSnapshotRow};
pub use writer::SnapshotWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
