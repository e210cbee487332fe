//! Built-in demo network for Managua, Nicaragua.
//!
//! Two urban bus routes with stops (the ones the fleet drives on) and six
//! simplified national trunk routes between department capitals.  The trunk
//! routes have no stops, so nearest-stop queries against them report
//! "unknown".

use tm_core::GeoPoint;

use crate::{Route, RouteResult, RouteSet, RouteSetBuilder, Stop};

/// Initial map view.
pub const MAP_CENTER: GeoPoint = GeoPoint::new(12.125, -86.236);

/// Routes the simulated fleet is assigned to, in round-robin order.
pub const URBAN_ROUTES: [&str; 2] = ["Ruta A", "Ruta B"];

// ── Hubs ──────────────────────────────────────────────────────────────────────

const MANAGUA:    [f64; 2] = [12.136, -86.251];
const LEON:       [f64; 2] = [12.437, -86.878];
const CHINANDEGA: [f64; 2] = [12.628, -87.131];
const GRANADA:    [f64; 2] = [11.933, -85.956];
const MASAYA:     [f64; 2] = [11.975, -86.095];
const MATAGALPA:  [f64; 2] = [12.916, -85.917];
const JINOTEGA:   [f64; 2] = [13.091, -85.999];
const ESTELI:     [f64; 2] = [13.087, -86.353];
const OCOTAL:     [f64; 2] = [13.632, -86.475];
const SOMOTO:     [f64; 2] = [13.480, -86.583];
const RIVAS:      [f64; 2] = [11.437, -85.827];
const JUIGALPA:   [f64; 2] = [12.106, -85.364];
const SAN_CARLOS: [f64; 2] = [11.123, -84.777];
const BLUEFIELDS: [f64; 2] = [11.996, -83.764];
const BILWI:      [f64; 2] = [14.035, -83.388];

fn points(raw: &[[f64; 2]]) -> Vec<GeoPoint> {
    raw.iter().copied().map(GeoPoint::from).collect()
}

/// The full demo route table: urban routes first, then national trunks.
pub fn managua() -> RouteResult<RouteSet> {
    let ruta_a = Route::new(
        "Ruta A",
        points(&[
            [12.142, -86.270],
            [12.137, -86.255],
            [12.130, -86.245],
            [12.125, -86.236],
            [12.120, -86.228],
        ]),
    )?
    .with_code("110")
    .with_color("#60a5fa")
    .with_stops(vec![
        Stop::new("Terminal Norte", [12.142, -86.270]),
        Stop::new("Mercado Central", [12.130, -86.245]),
        Stop::new("Parque Central", [12.125, -86.236]),
        Stop::new("Hospital", [12.120, -86.228]),
    ]);

    let ruta_b = Route::new(
        "Ruta B",
        points(&[
            [12.110, -86.260],
            [12.111, -86.248],
            [12.113, -86.235],
            [12.118, -86.226],
            [12.125, -86.220],
        ]),
    )?
    .with_code("120")
    .with_color("#3b82f6")
    .with_stops(vec![
        Stop::new("U. Regional", [12.111, -86.248]),
        Stop::new("Colegio", [12.113, -86.235]),
        Stop::new("Plaza Sur", [12.118, -86.226]),
        Stop::new("Terminal Sur", [12.125, -86.220]),
    ]);

    let mut builder = RouteSetBuilder::new().route(ruta_a).route(ruta_b);

    let trunks: [(&str, &str, &[[f64; 2]]); 6] = [
        ("Troncal Occidente", "#3b82f6", &[MANAGUA, MASAYA, LEON, CHINANDEGA]),
        ("Troncal Centro-Norte", "#60a5fa", &[MANAGUA, MATAGALPA, JINOTEGA, ESTELI, OCOTAL, SOMOTO]),
        ("Troncal Sur", "#2563eb", &[MANAGUA, MASAYA, GRANADA, RIVAS]),
        ("Troncal Río San Juan", "#1d4ed8", &[MANAGUA, JUIGALPA, SAN_CARLOS]),
        ("Troncal Caribe Sur", "#0ea5e9", &[MANAGUA, MASAYA, GRANADA, JUIGALPA, BLUEFIELDS]),
        ("Troncal Caribe Norte", "#38bdf8", &[MANAGUA, MATAGALPA, JINOTEGA, BILWI]),
    ];
    for (name, color, path) in trunks {
        builder = builder.route(Route::new(name, points(path))?.with_color(color));
    }

    builder.build()
}
