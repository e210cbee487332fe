//! `UserPoiStore` — the ordered list of user points under one storage key.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{KeyValueStore, PoiError, PoiRecord, PoiResult};

/// Storage key holding the whole list as one JSON array.
pub const USER_POIS_KEY: &str = "nix_user_pois_v1";

/// Where [`UserPoiStore::load`] copies a saved value it could not fully read.
pub const UNREADABLE_KEY: &str = "nix_user_pois_v1_unreadable";

/// File name used by [`UserPoiStore::export_to`].
pub const EXPORT_FILE_NAME: &str = "mis_pois.json";

/// User points of interest, persisted as a JSON array of
/// `{name, cat, lat, lng}` under [`USER_POIS_KEY`].
///
/// Insertion order is preserved.  Every [`add`](Self::add) rewrites the whole
/// array.
#[derive(Debug)]
pub struct UserPoiStore<S: KeyValueStore> {
    store:   S,
    records: Vec<PoiRecord>,
}

impl<S: KeyValueStore> UserPoiStore<S> {
    /// Read the saved list from `store`.
    ///
    /// A missing key loads as an empty list.  Entries are read one at a time:
    /// every entry that parses as a record is kept, in order, and each one
    /// that does not is logged at `warn` and dropped.  A value that is not a
    /// JSON array at all loads as an empty list.  Whenever anything is
    /// dropped, the original text is first copied to [`UNREADABLE_KEY`] and
    /// the readable records are then saved back under [`USER_POIS_KEY`].
    ///
    /// # Errors
    ///
    /// Only backend failures (e.g. an unreadable file) are returned.
    pub fn load(store: S) -> PoiResult<Self> {
        let Some(text) = store.get(USER_POIS_KEY)? else {
            debug!("no saved points of interest");
            return Ok(Self { store, records: Vec::new() });
        };
        let (records, dropped) = parse_records(&text);
        let mut pois = Self { store, records };
        if dropped > 0 {
            warn!(
                "kept {} saved points of interest, dropped {dropped}; previous value copied to {UNREADABLE_KEY}",
                pois.records.len(),
            );
            pois.store.set(UNREADABLE_KEY, &text)?;
            pois.save()?;
        }
        debug!("loaded {} user points of interest", pois.records.len());
        Ok(pois)
    }

    /// Append `record` and persist the full list.
    ///
    /// # Errors
    ///
    /// `EmptyName` for a blank name, `InvalidCoordinate` for a non-finite
    /// position; nothing is stored in either case.
    pub fn add(&mut self, record: PoiRecord) -> PoiResult<()> {
        if record.name.trim().is_empty() {
            return Err(PoiError::EmptyName);
        }
        if !(record.lat.is_finite() && record.lng.is_finite()) {
            return Err(PoiError::InvalidCoordinate { lat: record.lat, lng: record.lng });
        }
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    pub fn records(&self) -> &[PoiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The list as the JSON array that is stored.  After [`load`](Self::load)
    /// and every successful [`add`](Self::add) it holds the same records as
    /// the stored value; after an `add` it is the stored text itself.
    pub fn export_json(&self) -> PoiResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Write [`export_json`](Self::export_json) to `dir/mis_pois.json` and
    /// return the path written.
    pub fn export_to(&self, dir: impl AsRef<Path>) -> PoiResult<PathBuf> {
        let path = dir.as_ref().join(EXPORT_FILE_NAME);
        fs::write(&path, self.export_json()?)?;
        Ok(path)
    }

    /// Give back the backend, e.g. to reload from it.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn save(&mut self) -> PoiResult<()> {
        let json = serde_json::to_string(&self.records)?;
        self.store.set(USER_POIS_KEY, &json)
    }
}

/// Records that parse, and how many entries did not.  A value that is not
/// an array counts as one unreadable entry.
fn parse_records(text: &str) -> (Vec<PoiRecord>, usize) {
    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(text) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("saved points of interest are not a JSON array: {e}");
            return (Vec::new(), 1);
        }
    };
    let total = entries.len();
    let records: Vec<PoiRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("dropping saved point of interest #{i}: {e}");
                None
            }
        })
        .collect();
    let dropped = total - records.len();
    (records, dropped)
}
