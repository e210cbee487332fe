//! `tm-poi` — user-created points of interest.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`record`]   | `PoiRecord` (`{name, cat, lat, lng}`)                    |
//! | [`category`] | `PoiCategory`, map icons, `📌` fallback                  |
//! | [`demo`]     | fixed catalog of named points per category               |
//! | [`store`]    | `KeyValueStore` trait, `MemoryStore`, `FileStore`        |
//! | [`user`]     | `UserPoiStore`: load, add, export                        |
//! | [`error`]    | `PoiError`, `PoiResult<T>`                               |
//!
//! The whole list lives under a single key as one JSON array, the same
//! format [`UserPoiStore::export_json`] produces.

pub mod category;
pub mod demo;
pub mod error;
pub mod record;
pub mod store;
pub mod user;

#[cfg(test)]
mod tests;

pub use category::{FALLBACK_ICON, PoiCategory, icon_for};
pub use error::{PoiError, PoiResult};
pub use record::PoiRecord;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use user::{EXPORT_FILE_NAME, UNREADABLE_KEY, USER_POIS_KEY, UserPoiStore};
