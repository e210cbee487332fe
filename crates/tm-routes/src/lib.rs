//! `tm-routes` — named routes, their stops, and nearest-stop lookup.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`route`]  | `Route`, `Stop`, `NearestStop`                               |
//! | [`set`]    | `RouteSet` (name → `RouteId` lookup), `RouteSetBuilder`      |
//! | [`loader`] | `load_routes_csv`, `load_routes_reader`                      |
//! | [`demo`]   | Built-in Managua demo network                                |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                               |
//!
//! Routes are immutable once a `RouteSet` is built.  Vehicles refer to them
//! by `RouteId`; many vehicles may share one route.

pub mod demo;
pub mod error;
pub mod loader;
pub mod route;
pub mod set;


pub use error::{RouteError, RouteResult};
pub use loader::{load_routes_csv, load_routes_reader};
pub use route::{NearestStop, Route, Stop};
pub use set::{RouteSet, RouteSetBuilder};
