//! CSV route loader.
//!
//! # CSV format
//!
//! One row per waypoint or stop.  Rows for the same route keep their file
//! order; routes appear in the order of their first row.
//!
//! ```csv
//! route,kind,name,lat,lon
//! Ruta A,waypoint,,12.142,-86.270
//! Ruta A,waypoint,,12.137,-86.255
//! Ruta A,stop,Terminal Norte,12.142,-86.270
//! Ruta B,waypoint,,12.110,-86.260
//! Ruta B,waypoint,,12.111,-86.248
//! ```
//!
//! **`kind`** field:
//!
//! | Value      | Meaning                                            |
//! |------------|----------------------------------------------------|
//! | `waypoint` | Next point of the route path (`name` is ignored)   |
//! | `stop`     | A named stop on the route's stop list              |
//!
//! Every route must end up with at least two waypoints.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use tm_core::GeoPoint;

use crate::{Route, RouteError, RouteResult, RouteSet, Stop};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    route: String,
    kind:  String,
    #[serde(default)]
    name:  String,
    lat:   f64,
    lon:   f64,
}

#[derive(Default)]
struct PendingRoute {
    name:  String,
    path:  Vec<GeoPoint>,
    stops: Vec<Stop>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RouteSet`] from a CSV file.
pub fn load_routes_csv(path: &Path) -> RouteResult<RouteSet> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for route tables
/// embedded in the binary.
pub fn load_routes_reader<R: Read>(reader: R) -> RouteResult<RouteSet> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut order: Vec<PendingRoute> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        let slot = *index.entry(row.route.clone()).or_insert_with(|| {
            order.push(PendingRoute { name: row.route.clone(), ..Default::default() });
            order.len() - 1
        });
        let pending = &mut order[slot];
        let point = GeoPoint::new(row.lat, row.lon);

        match row.kind.trim() {
            "waypoint" => pending.path.push(point),
            "stop" => pending.stops.push(Stop::new(row.name.trim(), point)),
            other => {
                return Err(RouteError::Parse(format!(
                    "invalid kind {other:?} for route {:?}: expected \"waypoint\" or \"stop\"",
                    row.route
                )));
            }
        }
    }

    let routes = order
        .into_iter()
        .map(|p| Ok(Route::new(p.name, p.path)?.with_stops(p.stops)))
        .collect::<RouteResult<Vec<_>>>()?;

    RouteSet::from_routes(routes)
}
