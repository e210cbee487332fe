//! Built-in points of interest shown as fixed map layers, one or two per
//! category, mostly around Managua.
//!
//! Entries marked "(demo)" are placeholders at approximate positions.

use tm_core::GeoPoint;

use crate::PoiCategory::*;
use crate::{PoiCategory, PoiRecord};

const CATALOG: [(PoiCategory, &str, [f64; 2]); 23] = [
    (Police,          "Policía Nacional (demo) - Managua",                    [12.152, -86.268]),
    (Fire,            "Bomberos (demo) - Managua",                            [12.132, -86.251]),
    (RedCross,        "Cruz Roja (demo) - Managua",                           [12.145, -86.261]),
    (Hospitals,       "Hospital Escuela Manolo Morales (Managua)",            [12.12241, -86.24597]),
    (Hospitals,       "HEODRA - Hospital Escuela Oscar Danilo Rosales (León)", [12.43363, -86.87803]),
    (Pharmacies24,    "Farmacia 24h (demo) - Managua",                        [12.134, -86.268]),
    (Parks,           "Plaza de la Revolución (Managua)",                     [12.15639, -86.27215]),
    (Atms,            "Cajero BAC (demo) - Managua",                          [12.140, -86.254]),
    (Gas,             "Gasolinera Puma (demo) - Managua",                     [12.120, -86.255]),
    (Markets,         "Mercado Oriental (demo) - Managua",                    [12.142, -86.224]),
    (Universities,    "UNAN-Managua (demo)",                                  [12.131, -86.267]),
    (Accessibility,   "Cruce con rampa (demo) - Managua",                     [12.138, -86.249]),
    (Seniors,         "Centro Adulto Mayor (demo) - Managua",                 [12.127, -86.237]),
    (Inclusive,       "Parque inclusivo (demo) - Masaya",                     [11.976, -86.092]),
    (Museums,         "Museo Huellas de Acahualinca (demo) - Managua",        [12.160, -86.299]),
    (Stadiums,        "Estadio Nacional Soberanía (Managua)",                 [12.149603, -86.283036]),
    (Government,      "Alcaldía de Managua (demo)",                           [12.159, -86.270]),
    (Hotels,          "Hotel (demo) - Managua",                               [12.144, -86.253]),
    (Taxis,           "Punto de taxis - UCA",                                 [12.136, -86.269]),
    (BusTerminals,    "Terminal UCA (Managua)",                               [12.136, -86.269]),
    (BusTerminals,    "Terminal León",                                        [12.442, -86.883]),
    (TransferCenters, "Centro de Transferencia (demo) - Managua",             [12.140, -86.257]),
    (ParkingAreas,    "Parqueo público (demo) - Managua",                     [12.138, -86.252]),
];

/// The fixed catalog, grouped by category in [`PoiCategory::ALL`] order.
pub fn catalog() -> Vec<(PoiCategory, PoiRecord)> {
    CATALOG
        .iter()
        .map(|&(cat, name, pos)| (cat, PoiRecord::new(name, cat.key(), GeoPoint::from(pos))))
        .collect()
}

/// Catalog entries in one category.
pub fn in_category(cat: PoiCategory) -> impl Iterator<Item = PoiRecord> {
    catalog().into_iter().filter(move |(c, _)| *c == cat).map(|(_, r)| r)
}
