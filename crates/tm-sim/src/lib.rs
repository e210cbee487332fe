//! `tm-sim` — simulation state, frame driver, and queries for the transit
//! map simulator.
//!
//! # Two timers
//!
//! ```text
//! every frame (≈16 ms):
//!   ① dt     — FrameClock turns the host timestamp into a step, clamped to
//!              at least min_frame_dt_ms.
//!   ② Advance — MotionStrategy::advance for every vehicle, ascending id
//!              (parallel with the `parallel` feature).  A vehicle whose
//!              route or segment does not resolve is logged and skipped.
//!
//! every reassign_interval_ms (≈1.2 s), target-seeking only:
//!   ③ Reassign — MotionStrategy::reassign for every vehicle: new target,
//!               speed, and heading, written as one record.
//! ```
//!
//! The [`query`] module answers the detail panel's questions (nearest stop,
//! ETA) from the same [`SimulationState`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Advances the fleet on Rayon's thread pool.             |
//! | `serde`    | `Serialize` for snapshots and detail payloads.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tm_core::SimConfig;
//! use tm_motion::SegmentTraversal;
//! use tm_sim::{NoopObserver, SimBuilder};
//!
//! let routes = tm_routes::demo::managua()?;
//! let mut sim = SimBuilder::new(SimConfig::default(), routes, SegmentTraversal::default())
//!     .fleet_routes(tm_routes::demo::URBAN_ROUTES)
//!     .build()?;
//! sim.run_for(10_000.0, &mut NoopObserver)?;
//! sim.state.select(tm_core::VehicleId(0));
//! println!("{}", sim.selected_detail().unwrap());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod query;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use query::{Eta, VehicleDetail, eta, nearest_stop_to, vehicle_detail};
pub use sim::{FrameStats, Sim};
pub use state::{Selection, SimulationState, VehicleSnapshot};
