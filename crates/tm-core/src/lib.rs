//! `tm-core` — foundational types for the `rust_tm` transit map simulator.
//!
//! This crate is a dependency of every other `tm-*` crate.  It intentionally
//! has no `tm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `RouteId`                                |
//! | [`geo`]         | `GeoPoint`, haversine distance, planar lerp           |
//! | [`time`]        | `Tick`, `FrameClock`                                  |
//! | [`config`]      | `SimConfig`, `StrategyKind`                           |
//! | [`rng`]         | `VehicleRng` (per-vehicle, seeded by id)              |
//! | [`error`]       | `TmError`, `TmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; required to |
//! |         | read `SimConfig` from a JSON file.                         |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, StrategyKind};
pub use error::{TmError, TmResult};
pub use geo::GeoPoint;
pub use ids::{RouteId, VehicleId};
pub use rng::VehicleRng;
pub use time::{FrameClock, Tick};
