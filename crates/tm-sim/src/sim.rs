//! The `Sim` struct and its frame / reassignment driver.

use log::{debug, warn};
use tm_core::{FrameClock, SimConfig, Tick, VehicleId};
use tm_motion::{EtaFormat, MotionStrategy, Step, Vehicle};
use tm_routes::{NearestStop, RouteSet};

use crate::query::{self, Eta, VehicleDetail};
use crate::{SimError, SimObserver, SimResult, SimulationState};

// ── FrameStats ────────────────────────────────────────────────────────────────

/// What happened to the fleet during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Vehicles the strategy stepped (including ones holding in place).
    pub advanced: usize,
    /// Subset of `advanced` that reached the end of a segment.
    pub arrivals: usize,
    /// Vehicles left untouched because their record was malformed.
    pub skipped:  usize,
}

impl FrameStats {
    fn record(mut self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Stepped(Step::Arrived { .. }) => {
                self.advanced += 1;
                self.arrivals += 1;
            }
            Outcome::Stepped(_) => self.advanced += 1,
            Outcome::Skipped    => self.skipped += 1,
        }
        self
    }

    #[cfg(feature = "parallel")]
    fn merge(self, other: Self) -> Self {
        Self {
            advanced: self.advanced + other.advanced,
            arrivals: self.arrivals + other.arrivals,
            skipped:  self.skipped + other.skipped,
        }
    }
}

/// Result of offering one vehicle one step.
enum Outcome {
    Stepped(Step),
    Skipped,
}

/// Step one vehicle, logging and skipping it if its record is malformed.
fn step_vehicle<S: MotionStrategy>(
    strategy: &S,
    routes:   &RouteSet,
    vehicle:  &mut Vehicle,
    dt_secs:  f64,
) -> Outcome {
    let Some(route) = routes.route(vehicle.route) else {
        warn!("skipping {}: {} is not in the route set", vehicle.id, vehicle.route);
        return Outcome::Skipped;
    };
    match strategy.advance(vehicle, route, dt_secs) {
        Ok(step) => Outcome::Stepped(step),
        Err(e) => {
            warn!("skipping {} this frame: {e}", vehicle.id);
            Outcome::Skipped
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns the [`SimulationState`] and drives it with two timers:
///
/// 1. **Frame** ([`frame`](Self::frame)): turn a host timestamp into a
///    clamped `dt` and offer every vehicle one [`MotionStrategy::advance`]
///    (in parallel with the `parallel` feature).
/// 2. **Reassign** ([`reassign`](Self::reassign)): the coarse timer; calls
///    [`MotionStrategy::reassign`] on every vehicle.  Strategies that do not
///    use it are never called.
///
/// A host with a real display loop calls both directly.  [`run_for`] and
/// [`run_frames`] instead interleave them on a virtual schedule derived from
/// `config.frame_interval_ms` and `config.reassign_interval_ms`, so a run is
/// fully determined by the config.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// [`run_for`]: Self::run_for
/// [`run_frames`]: Self::run_frames
pub struct Sim<S: MotionStrategy> {
    /// Global configuration (seed, fleet size, cadences, …).
    pub config: SimConfig,

    /// Frame counter and `dt` clamp.
    pub clock: FrameClock,

    /// Routes, vehicles, and the selection.
    pub state: SimulationState,

    /// The movement model.  Called once per vehicle per frame.
    pub strategy: S,

    /// Virtual time of the last processed event, in milliseconds.
    now_ms:           f64,
    next_frame_ms:    f64,
    next_reassign_ms: f64,
    reassign_passes:  u64,
}

impl<S: MotionStrategy> Sim<S> {
    pub(crate) fn new(config: SimConfig, state: SimulationState, strategy: S) -> Self {
        let mut clock = FrameClock::new(config.min_frame_dt_ms);
        clock.start_at(0.0);
        Self {
            clock,
            state,
            strategy,
            now_ms:           0.0,
            next_frame_ms:    config.frame_interval_ms,
            next_reassign_ms: config.reassign_interval_ms,
            reassign_passes:  0,
            config,
        }
    }

    // ── Host-driven API ───────────────────────────────────────────────────

    /// Process one display frame at host time `now_ms`.
    ///
    /// The step is `now_ms` minus the previous frame's time, clamped to at
    /// least `config.min_frame_dt_ms`.
    pub fn frame(&mut self, now_ms: f64) -> FrameStats {
        let dt_secs = self.clock.step(now_ms);
        self.advance(dt_secs)
    }

    /// Offer every vehicle one step of `dt_secs`, bypassing the frame clock.
    pub fn advance(&mut self, dt_secs: f64) -> FrameStats {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let strategy = &self.strategy;
        let routes   = &self.state.routes;
        let vehicles = &mut self.state.vehicles;

        #[cfg(not(feature = "parallel"))]
        let stats = vehicles
            .values_mut()
            .map(|v| step_vehicle(strategy, routes, v, dt_secs))
            .fold(FrameStats::default(), FrameStats::record);

        #[cfg(feature = "parallel")]
        let stats = {
            use rayon::prelude::*;

            vehicles
                .par_iter_mut()
                .map(|(_, v)| step_vehicle(strategy, routes, v, dt_secs))
                .fold(FrameStats::default, FrameStats::record)
                .reduce(FrameStats::default, FrameStats::merge)
        };

        stats
    }

    /// Coarse-timer pass: give every vehicle a new target, speed, and
    /// heading.  Returns the number of vehicles reassigned.
    ///
    /// A no-op for strategies that do not use reassignment.
    pub fn reassign(&mut self) -> usize {
        if !self.strategy.uses_reassignment() {
            return 0;
        }
        let strategy = &self.strategy;
        let routes   = &self.state.routes;

        let mut reassigned = 0;
        for vehicle in self.state.vehicles.values_mut() {
            match routes.route(vehicle.route) {
                Some(route) => {
                    strategy.reassign(vehicle, route);
                    reassigned += 1;
                }
                None => warn!("not reassigning {}: {} is not in the route set", vehicle.id, vehicle.route),
            }
        }
        self.reassign_passes += 1;
        debug!("reassign pass {}: {reassigned} vehicles", self.reassign_passes);
        reassigned
    }

    // ── Virtual-time driver ───────────────────────────────────────────────

    /// Run `duration_ms` of virtual time from where the last run stopped.
    ///
    /// Frames fire every `frame_interval_ms`; reassignment passes fire every
    /// `reassign_interval_ms` and run before a frame due at the same instant.
    pub fn run_for<O: SimObserver>(&mut self, duration_ms: f64, observer: &mut O) -> SimResult<()> {
        if !(duration_ms.is_finite() && duration_ms >= 0.0) {
            return Err(SimError::Config(format!(
                "run duration must be a non-negative number of milliseconds, got {duration_ms}"
            )));
        }
        let end_ms = self.now_ms + duration_ms;
        while self.next_frame_ms <= end_ms {
            self.reassign_until(self.next_frame_ms, observer);
            self.observed_frame(observer);
        }
        self.reassign_until(end_ms, observer);
        self.now_ms = end_ms;
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` frames on the virtual schedule.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.reassign_until(self.next_frame_ms, observer);
            self.observed_frame(observer);
        }
    }

    /// Fire every reassignment pass due at or before `t_ms`.
    fn reassign_until<O: SimObserver>(&mut self, t_ms: f64, observer: &mut O) {
        if !self.strategy.uses_reassignment() {
            return;
        }
        while self.next_reassign_ms <= t_ms {
            self.now_ms = self.next_reassign_ms;
            let reassigned = self.reassign();
            observer.on_reassign(self.reassign_passes, reassigned);
            self.next_reassign_ms += self.config.reassign_interval_ms;
        }
    }

    fn observed_frame<O: SimObserver>(&mut self, observer: &mut O) {
        let t_ms = self.next_frame_ms;
        let frame = self.clock.current_tick;

        observer.on_frame_start(frame);
        let stats = self.frame(t_ms);
        observer.on_frame_end(frame, stats.advanced, stats.skipped);
        if frame.is_every(self.config.snapshot_interval_frames) {
            observer.on_snapshot(frame, &self.state);
        }

        self.now_ms = t_ms;
        self.next_frame_ms += self.config.frame_interval_ms;
    }

    // ── Accessors and queries ─────────────────────────────────────────────

    /// Virtual time reached by `run_for` / `run_frames`, in milliseconds.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Frames processed so far.
    #[inline]
    pub fn current_frame(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn reassign_passes(&self) -> u64 {
        self.reassign_passes
    }

    #[inline]
    pub fn eta_format(&self) -> EtaFormat {
        self.strategy.eta_format()
    }

    pub fn nearest_stop(&self, id: VehicleId) -> Option<NearestStop<'_>> {
        query::nearest_stop_to(&self.state, id)
    }

    pub fn eta(&self, id: VehicleId) -> Option<Eta> {
        query::eta(&self.state, id)
    }

    /// Detail panel for `id`, ETA rendered the way this strategy shows it.
    pub fn detail(&self, id: VehicleId) -> Option<VehicleDetail> {
        query::vehicle_detail(&self.state, id, self.eta_format())
    }

    /// Detail panel for the selected vehicle, if any.
    pub fn selected_detail(&self) -> Option<VehicleDetail> {
        self.state.selected().and_then(|id| self.detail(id))
    }
}
