//! Simulation observer trait for progress reporting and data collection.

use tm_core::Tick;

use crate::SimulationState;

/// Callbacks invoked by [`Sim::run_for`][crate::Sim::run_for] and
/// [`Sim::run_frames`][crate::Sim::run_frames] at key points of the driver
/// loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — skip counter
///
/// ```rust,ignore
/// struct SkipCounter { skipped: usize }
///
/// impl SimObserver for SkipCounter {
///     fn on_frame_end(&mut self, _frame: Tick, _advanced: usize, skipped: usize) {
///         self.skipped += skipped;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a frame advances any vehicle.
    fn on_frame_start(&mut self, _frame: Tick) {}

    /// Called after every vehicle has been offered one step.
    ///
    /// `advanced` vehicles moved (or held in place); `skipped` vehicles had a
    /// malformed record and were left untouched this frame.
    fn on_frame_end(&mut self, _frame: Tick, _advanced: usize, _skipped: usize) {}

    /// Called after each coarse-timer pass with the number of vehicles that
    /// received a new target.
    fn on_reassign(&mut self, _pass: u64, _reassigned: usize) {}

    /// Called every `config.snapshot_interval_frames` frames, after the
    /// frame's movement, with read-only access to the whole state.
    fn on_snapshot(&mut self, _frame: Tick, _state: &SimulationState) {}

    /// Called once when `run_for` finishes.
    fn on_sim_end(&mut self, _final_frame: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run_for`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
