//! `Route`, `Stop`, and nearest-stop lookup.

use tm_core::GeoPoint;

use crate::{RouteError, RouteResult};

// ── Stop ──────────────────────────────────────────────────────────────────────

/// A named boarding point belonging to one route's stop list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name:     String,
    pub position: GeoPoint,
}

impl Stop {
    pub fn new(name: impl Into<String>, position: impl Into<GeoPoint>) -> Self {
        Self { name: name.into(), position: position.into() }
    }
}

// ── NearestStop ───────────────────────────────────────────────────────────────

/// Result of [`Route::nearest_stop`].
///
/// A route without stops yields [`NearestStop::none`]: no stop and an
/// infinite distance.  Treat a non-finite distance as "unknown".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestStop<'r> {
    pub stop:       Option<&'r Stop>,
    pub distance_m: f64,
}

impl<'r> NearestStop<'r> {
    pub fn none() -> Self {
        Self { stop: None, distance_m: f64::INFINITY }
    }

    /// Stop name, if any stop was found.
    pub fn name(&self) -> Option<&'r str> {
        self.stop.map(|s| s.name.as_str())
    }

    /// `true` when a stop was found at a finite distance.
    pub fn is_known(&self) -> bool {
        self.stop.is_some() && self.distance_m.is_finite()
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A named, ordered path of waypoints with an optional stop list.
///
/// The path always has at least two waypoints; [`Route::new`] enforces this
/// so segment traversal and target picking are always defined.  For the same
/// reason the type is serialize-only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    name:  String,
    code:  Option<String>,
    color: Option<String>,
    path:  Vec<GeoPoint>,
    stops: Vec<Stop>,
}

impl Route {
    /// Create a route with no stops.
    ///
    /// # Errors
    ///
    /// [`RouteError::TooFewWaypoints`] if `path` has fewer than 2 points.
    pub fn new(name: impl Into<String>, path: Vec<GeoPoint>) -> RouteResult<Self> {
        let name = name.into();
        if path.len() < 2 {
            return Err(RouteError::TooFewWaypoints { route: name, got: path.len() });
        }
        Ok(Self { name, code: None, color: None, path, stops: Vec::new() })
    }

    /// Replace the stop list.
    pub fn with_stops(mut self, stops: Vec<Stop>) -> Self {
        self.stops = stops;
        self
    }

    /// Public line number shown next to the route name (e.g. "110").
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Display color for map overlays (e.g. `"#60a5fa"`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn path(&self) -> &[GeoPoint] {
        &self.path
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }

    /// Waypoint `i`, or `None` when out of range.
    #[inline]
    pub fn waypoint(&self, i: usize) -> Option<GeoPoint> {
        self.path.get(i).copied()
    }

    /// Segment starting at waypoint `i`, treating the path as cyclic: the
    /// segment after the last waypoint runs back to the first.
    ///
    /// Returns `None` when `i` is out of range.
    #[inline]
    pub fn segment(&self, i: usize) -> Option<(GeoPoint, GeoPoint)> {
        let a = self.waypoint(i)?;
        let b = self.path[(i + 1) % self.path.len()];
        Some((a, b))
    }

    /// Length of the open path (first to last waypoint) in metres.
    pub fn length_m(&self) -> f64 {
        self.path.windows(2).map(|w| w[0].distance_m(w[1])).sum()
    }

    /// Closest stop to `position` by great-circle distance.
    ///
    /// Linear scan in list order; on equal distances the first stop wins.
    pub fn nearest_stop(&self, position: GeoPoint) -> NearestStop<'_> {
        let mut best = NearestStop::none();
        for stop in &self.stops {
            let d = position.distance_m(stop.position);
            if d < best.distance_m {
                best = NearestStop { stop: Some(stop), distance_m: d };
            }
        }
        best
    }
}
