//! Unit tests for tm-poi.

use tm_core::GeoPoint;

use crate::{KeyValueStore, MemoryStore, PoiRecord, UNREADABLE_KEY, USER_POIS_KEY, UserPoiStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn clinic() -> PoiRecord {
    PoiRecord::new("Clínica Las Palmas", "hospitals", GeoPoint::new(12.13, -86.27))
}

fn kiosk() -> PoiRecord {
    PoiRecord::new("Kiosko", "food_trucks", GeoPoint::new(12.11, -86.25))
}

fn seeded(value: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(USER_POIS_KEY, value).unwrap();
    store
}

fn stored_records(store: &MemoryStore) -> Vec<PoiRecord> {
    let saved = store.get(USER_POIS_KEY).unwrap().unwrap();
    serde_json::from_str(&saved).unwrap()
}

// ── Categories ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod category {
    use crate::{FALLBACK_ICON, PoiCategory, icon_for};

    #[test]
    fn twenty_one_distinct_keys() {
        let mut keys: Vec<&str> = PoiCategory::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 21);
    }

    #[test]
    fn key_lookup_round_trips() {
        for c in PoiCategory::ALL {
            assert_eq!(PoiCategory::from_key(c.key()), Some(c));
            assert_eq!(c.key().parse::<PoiCategory>(), Ok(c));
        }
    }

    #[test]
    fn camel_case_keys_are_exact() {
        assert_eq!(PoiCategory::from_key("busTerminals"), Some(PoiCategory::BusTerminals));
        assert_eq!(PoiCategory::from_key("busterminals"), None);
    }

    #[test]
    fn icons() {
        assert_eq!(icon_for("hospitals"), "🏥");
        assert_eq!(icon_for("parkingAreas"), "🅿️");
        assert_eq!(icon_for("nonsense"), FALLBACK_ICON);
        assert_eq!(icon_for(""), "📌");
    }

    #[test]
    fn default_is_hospitals() {
        assert_eq!(PoiCategory::DEFAULT.to_string(), "hospitals");
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod record {
    use super::*;
    use crate::PoiCategory;

    #[test]
    fn json_field_names() {
        let json = serde_json::to_string(&clinic()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Clínica Las Palmas","cat":"hospitals","lat":12.13,"lng":-86.27}"#
        );
    }

    #[test]
    fn unknown_category_is_kept() {
        let k = kiosk();
        assert_eq!(k.category(), None);
        assert_eq!(k.icon(), "📌");
        assert_eq!(k.cat.as_deref(), Some("food_trucks"));
        assert_eq!(clinic().category(), Some(PoiCategory::Hospitals));
    }

    #[test]
    fn tooltip_and_position() {
        assert_eq!(kiosk().to_string(), "Kiosko (food_trucks)");
        assert_eq!(clinic().position(), GeoPoint::new(12.13, -86.27));
    }

    #[test]
    fn null_category_uses_fallback_icon() {
        let r: PoiRecord =
            serde_json::from_str(r#"{"name":"Tienda","cat":null,"lat":12.2,"lng":-86.3}"#).unwrap();
        assert_eq!(r, PoiRecord::uncategorized("Tienda", GeoPoint::new(12.2, -86.3)));
        assert_eq!(r.category(), None);
        assert_eq!(r.icon(), "📌");
        assert_eq!(r.to_string(), "Tienda");
        assert!(serde_json::to_string(&r).unwrap().contains(r#""cat":null"#));
    }

    #[test]
    fn missing_category_reads_as_none() {
        let r: PoiRecord = serde_json::from_str(r#"{"name":"Esquina","lat":12.0,"lng":-86.0}"#).unwrap();
        assert_eq!(r.cat, None);
    }
}

// ── UserPoiStore ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod user_store {
    use super::*;
    use crate::PoiError;

    #[test]
    fn missing_key_loads_empty() {
        let pois = UserPoiStore::load(MemoryStore::new()).unwrap();
        assert!(pois.is_empty());
        assert_eq!(pois.export_json().unwrap(), "[]");
    }

    #[test]
    fn add_persists_whole_list_in_order() {
        let mut pois = UserPoiStore::load(MemoryStore::new()).unwrap();
        pois.add(clinic()).unwrap();
        pois.add(kiosk()).unwrap();

        let store = pois.into_inner();
        let saved = store.get(USER_POIS_KEY).unwrap().unwrap();
        let parsed: Vec<PoiRecord> = serde_json::from_str(&saved).unwrap();
        assert_eq!(parsed, vec![clinic(), kiosk()]);

        let reloaded = UserPoiStore::load(store).unwrap();
        assert_eq!(reloaded.records(), &[clinic(), kiosk()]);
    }

    #[test]
    fn corrupt_value_loads_empty_and_is_kept_aside() {
        let pois = UserPoiStore::load(seeded("{not json")).unwrap();
        assert!(pois.is_empty());
        let store = pois.into_inner();
        assert_eq!(store.get(UNREADABLE_KEY).unwrap().as_deref(), Some("{not json"));
        assert_eq!(store.get(USER_POIS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn wrong_shape_loads_empty() {
        assert!(UserPoiStore::load(seeded(r#"{"name":"x"}"#)).unwrap().is_empty());
    }

    #[test]
    fn add_after_corrupt_keeps_backup() {
        let mut pois = UserPoiStore::load(seeded("garbage")).unwrap();
        pois.add(clinic()).unwrap();
        let store = pois.into_inner();
        assert_eq!(stored_records(&store), vec![clinic()]);
        assert_eq!(store.get(UNREADABLE_KEY).unwrap().as_deref(), Some("garbage"));
    }

    #[test]
    fn null_category_entry_survives_load_and_add() {
        let saved = r#"[{"name":"Casa","cat":"hospitals","lat":12.1,"lng":-86.2},{"name":"Tienda","cat":null,"lat":12.2,"lng":-86.3}]"#;
        let mut pois = UserPoiStore::load(seeded(saved)).unwrap();
        assert_eq!(pois.len(), 2);
        assert_eq!(pois.records()[1].cat, None);

        pois.add(PoiRecord::new("Nuevo", "parks", GeoPoint::new(12.0, -86.0))).unwrap();

        let store = pois.into_inner();
        let names: Vec<String> = stored_records(&store).into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Casa", "Tienda", "Nuevo"]);
        assert_eq!(store.get(UNREADABLE_KEY).unwrap(), None, "nothing was dropped");
    }

    #[test]
    fn unreadable_entries_are_dropped_one_by_one() {
        let saved = r#"[
            {"name":"Casa","cat":"hospitals","lat":12.1,"lng":-86.2},
            {"name":"Roto","cat":"parks"},
            42,
            {"name":"Sin categoría","lat":12.3,"lng":-86.4}
        ]"#;
        let pois = UserPoiStore::load(seeded(saved)).unwrap();
        let names: Vec<&str> = pois.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Casa", "Sin categoría"]);

        let exported = pois.export_json().unwrap();
        let store = pois.into_inner();
        assert_eq!(store.get(USER_POIS_KEY).unwrap(), Some(exported));
        assert_eq!(store.get(UNREADABLE_KEY).unwrap().as_deref(), Some(saved));
    }

    #[test]
    fn blank_name_rejected() {
        let mut pois = UserPoiStore::load(MemoryStore::new()).unwrap();
        let blank = PoiRecord::new("   ", "parks", GeoPoint::new(0.0, 0.0));
        assert!(matches!(pois.add(blank), Err(PoiError::EmptyName)));
        assert!(pois.is_empty());
        assert_eq!(pois.into_inner().get(USER_POIS_KEY).unwrap(), None);
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let mut pois = UserPoiStore::load(MemoryStore::new()).unwrap();
        let bad = PoiRecord::new("Nowhere", "parks", GeoPoint::new(f64::NAN, 0.0));
        assert!(matches!(pois.add(bad), Err(PoiError::InvalidCoordinate { .. })));
    }

    #[test]
    fn export_matches_stored_value() {
        let mut pois = UserPoiStore::load(MemoryStore::new()).unwrap();
        pois.add(clinic()).unwrap();
        let exported = pois.export_json().unwrap();
        let store = pois.into_inner();
        assert_eq!(store.get(USER_POIS_KEY).unwrap(), Some(exported));
    }
}

// ── FileStore ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod file_store {
    use super::*;
    use crate::{EXPORT_FILE_NAME, FileStore};

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut pois = UserPoiStore::load(FileStore::open(dir.path()).unwrap()).unwrap();
            pois.add(clinic()).unwrap();
        }
        let pois = UserPoiStore::load(FileStore::open(dir.path()).unwrap()).unwrap();
        assert_eq!(pois.records(), &[clinic()]);
        assert!(dir.path().join("nix_user_pois_v1.json").exists());
    }

    #[test]
    fn open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut pois = UserPoiStore::load(MemoryStore::new()).unwrap();
        pois.add(kiosk()).unwrap();

        let path = pois.export_to(dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let text = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<PoiRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![kiosk()]);
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use crate::demo::{catalog, in_category};
    use crate::{FALLBACK_ICON, PoiCategory};

    #[test]
    fn every_entry_key_resolves() {
        for (cat, record) in catalog() {
            assert_eq!(record.category(), Some(cat), "{record}");
            assert_ne!(record.icon(), FALLBACK_ICON);
            assert!(!record.name.trim().is_empty());
        }
    }

    #[test]
    fn covers_every_category_in_menu_order() {
        let mut seen: Vec<PoiCategory> = catalog().into_iter().map(|(c, _)| c).collect();
        seen.dedup();
        assert_eq!(seen, PoiCategory::ALL);
        assert_eq!(catalog().len(), 23);
    }

    #[test]
    fn two_hospitals_and_two_terminals() {
        let hospitals: Vec<_> = in_category(PoiCategory::Hospitals).collect();
        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].name, "Hospital Escuela Manolo Morales (Managua)");

        let terminals: Vec<_> = in_category(PoiCategory::BusTerminals).map(|r| r.name).collect();
        assert_eq!(terminals, ["Terminal UCA (Managua)", "Terminal León"]);
    }
}
