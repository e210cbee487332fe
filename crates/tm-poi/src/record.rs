//! The stored shape of one user point of interest.

use std::fmt;

use serde::{Deserialize, Serialize};
use tm_core::GeoPoint;

use crate::category::{FALLBACK_ICON, PoiCategory, icon_for};

/// One user-created point of interest.
///
/// Field names are the persisted JSON keys.  `cat` is kept as a plain string
/// so categories this build does not know survive a load/save cycle.  It is
/// `null` when the user skipped the category prompt; a missing field reads
/// the same way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    pub name: String,
    #[serde(default)]
    pub cat:  Option<String>,
    pub lat:  f64,
    pub lng:  f64,
}

impl PoiRecord {
    pub fn new(name: impl Into<String>, cat: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            cat:  Some(cat.into()),
            lat:  position.lat,
            lng:  position.lon,
        }
    }

    /// A point with no category; drawn with the fallback icon.
    pub fn uncategorized(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            cat:  None,
            lat:  position.lat,
            lng:  position.lon,
        }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// `None` for a missing category or a key this build does not recognise.
    pub fn category(&self) -> Option<PoiCategory> {
        self.cat.as_deref().and_then(PoiCategory::from_key)
    }

    pub fn icon(&self) -> &'static str {
        self.cat.as_deref().map_or(FALLBACK_ICON, icon_for)
    }
}

impl fmt::Display for PoiRecord {
    /// Tooltip text: `"name (cat)"`, or just the name without a category.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cat {
            Some(cat) => write!(f, "{} ({cat})", self.name),
            None      => f.write_str(&self.name),
        }
    }
}
