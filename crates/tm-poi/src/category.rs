//! Known point-of-interest categories and their map icons.

use std::fmt;
use std::str::FromStr;

/// Icon for a category key that is not in [`PoiCategory::ALL`].
pub const FALLBACK_ICON: &str = "📌";

/// Map layer a point of interest belongs to.
///
/// Records store the category as its string key so that unknown keys
/// round-trip untouched; this enum is the lookup table for the known ones.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PoiCategory {
    Police,
    Fire,
    RedCross,
    Hospitals,
    Pharmacies24,
    Parks,
    Atms,
    Gas,
    Markets,
    Universities,
    Accessibility,
    Seniors,
    Inclusive,
    Museums,
    Stadiums,
    Government,
    Hotels,
    Taxis,
    BusTerminals,
    TransferCenters,
    ParkingAreas,
}

impl PoiCategory {
    /// Every category, in menu order.
    pub const ALL: [PoiCategory; 21] = [
        PoiCategory::Police,
        PoiCategory::Fire,
        PoiCategory::RedCross,
        PoiCategory::Hospitals,
        PoiCategory::Pharmacies24,
        PoiCategory::Parks,
        PoiCategory::Atms,
        PoiCategory::Gas,
        PoiCategory::Markets,
        PoiCategory::Universities,
        PoiCategory::Accessibility,
        PoiCategory::Seniors,
        PoiCategory::Inclusive,
        PoiCategory::Museums,
        PoiCategory::Stadiums,
        PoiCategory::Government,
        PoiCategory::Hotels,
        PoiCategory::Taxis,
        PoiCategory::BusTerminals,
        PoiCategory::TransferCenters,
        PoiCategory::ParkingAreas,
    ];

    /// Suggested category when the user gives none.
    pub const DEFAULT: PoiCategory = PoiCategory::Hospitals;

    /// Key stored in the `cat` field.
    pub fn key(self) -> &'static str {
        match self {
            PoiCategory::Police          => "police",
            PoiCategory::Fire            => "fire",
            PoiCategory::RedCross        => "redcross",
            PoiCategory::Hospitals       => "hospitals",
            PoiCategory::Pharmacies24    => "pharmacies24",
            PoiCategory::Parks           => "parks",
            PoiCategory::Atms            => "atms",
            PoiCategory::Gas             => "gas",
            PoiCategory::Markets         => "markets",
            PoiCategory::Universities    => "universities",
            PoiCategory::Accessibility   => "accessibility",
            PoiCategory::Seniors         => "seniors",
            PoiCategory::Inclusive       => "inclusive",
            PoiCategory::Museums         => "museums",
            PoiCategory::Stadiums        => "stadiums",
            PoiCategory::Government      => "government",
            PoiCategory::Hotels          => "hotels",
            PoiCategory::Taxis           => "taxis",
            PoiCategory::BusTerminals    => "busTerminals",
            PoiCategory::TransferCenters => "transferCenters",
            PoiCategory::ParkingAreas    => "parkingAreas",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PoiCategory::Police          => "🛡️",
            PoiCategory::Fire            => "🔥",
            PoiCategory::RedCross        => "➕",
            PoiCategory::Hospitals       => "🏥",
            PoiCategory::Pharmacies24    => "💊",
            PoiCategory::Parks           => "🟡",
            PoiCategory::Atms            => "🏧",
            PoiCategory::Gas             => "⛽",
            PoiCategory::Markets         => "🛒",
            PoiCategory::Universities    => "🎓",
            PoiCategory::Accessibility   => "♿",
            PoiCategory::Seniors         => "👴",
            PoiCategory::Inclusive       => "🤝",
            PoiCategory::Museums         => "🏛️",
            PoiCategory::Stadiums        => "🏟️",
            PoiCategory::Government      => "🏢",
            PoiCategory::Hotels          => "🛎️",
            PoiCategory::Taxis           => "🚕",
            PoiCategory::BusTerminals    => "🚌",
            PoiCategory::TransferCenters => "🔁",
            PoiCategory::ParkingAreas    => "🅿️",
        }
    }

    /// Case-sensitive lookup by stored key.
    pub fn from_key(key: &str) -> Option<PoiCategory> {
        PoiCategory::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Icon for any stored category key, known or not.
pub fn icon_for(key: &str) -> &'static str {
    PoiCategory::from_key(key).map_or(FALLBACK_ICON, PoiCategory::icon)
}

impl FromStr for PoiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoiCategory::from_key(s).ok_or_else(|| format!("unknown point-of-interest category {s:?}"))
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
