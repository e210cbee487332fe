//! `tm-motion` — vehicle state and the two motion strategies.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`state`]    | `Vehicle`, `MotionState`, `Animation`, `ease_out_cubic`         |
//! | [`strategy`] | `MotionStrategy` trait, `Step`, `EtaFormat`                     |
//! | [`segment`]  | `SegmentTraversal` — constant speed along the route path        |
//! | [`target`]   | `TargetSeeking` — periodic random targets, eased interpolation  |
//! | [`error`]    | `MotionError`, `MotionResult<T>`                                |
//!
//! # Movement models
//!
//! Both strategies share one `Vehicle` record and differ only in the
//! [`MotionState`] variant they keep in it:
//!
//! 1. **Segment traversal.**  Each `advance(dt)` moves the vehicle
//!    `speed · dt` metres towards the end of its current segment.  On
//!    arrival it snaps to the next segment's start.  Speed is drawn once at
//!    spawn and never changes.
//! 2. **Target seeking.**  A coarse timer calls `reassign`, which picks a
//!    jittered waypoint of the route as the new target and a new speed and
//!    heading.  Each frame `advance(dt)` moves the animation fraction forward
//!    and blends position with an ease-out-cubic curve.
//!
//! Vehicles never read each other's state, so a fleet can be advanced in any
//! order (or in parallel) with identical results.

pub mod error;
pub mod segment;
pub mod state;
pub mod strategy;
pub mod target;

#[cfg(test)]
mod tests;

pub use error::{MotionError, MotionResult};
pub use segment::{SegmentConfig, SegmentTraversal, WrapPolicy};
pub use state::{Animation, MotionState, Vehicle, ease_out_cubic};
pub use strategy::{EtaFormat, MotionStrategy, Step};
pub use target::{TargetConfig, TargetSeeking};
