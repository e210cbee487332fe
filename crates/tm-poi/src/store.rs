//! Key-value backends for persisted strings.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::PoiResult;

/// String storage addressed by key, like a browser's local storage.
///
/// Implement this trait to persist somewhere other than memory or a plain
/// directory.
pub trait KeyValueStore {
    /// The stored value, or `None` if the key has never been written.
    fn get(&self, key: &str) -> PoiResult<Option<String>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> PoiResult<()>;
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// In-process store; contents are lost on drop.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PoiResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PoiResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// ── FileStore ─────────────────────────────────────────────────────────────────

/// One file per key, `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir`, creating it if necessary.
    pub fn open(dir: impl AsRef<Path>) -> PoiResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PoiResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PoiResult<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
