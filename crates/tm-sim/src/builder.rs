//! Fluent builder for constructing a [`Sim`].

use log::debug;
use tm_core::{RouteId, SimConfig, VehicleId, VehicleRng};
use tm_motion::MotionStrategy;
use tm_routes::RouteSet;

use crate::{Sim, SimError, SimResult, SimulationState};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, fleet size, frame and reassignment cadence, …
/// - [`RouteSet`]: the fixed route network
/// - `S: MotionStrategy`: the movement model
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                       |
/// |------------------------|-------------------------------|
/// | `.fleet_routes(names)` | Every route in the set        |
///
/// # Example
///
/// ```rust,ignore
/// let routes = tm_routes::demo::managua()?;
/// let mut sim = SimBuilder::new(config, routes, SegmentTraversal::default())
///     .fleet_routes(["Ruta A", "Ruta B"])
///     .build()?;
/// sim.run_for(60_000.0, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: MotionStrategy> {
    config:       SimConfig,
    routes:       RouteSet,
    strategy:     S,
    fleet_routes: Option<Vec<String>>,
}

impl<S: MotionStrategy> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, routes: RouteSet, strategy: S) -> Self {
        Self {
            config,
            routes,
            strategy,
            fleet_routes: None,
        }
    }

    /// Restrict vehicle placement to the named routes.
    ///
    /// Vehicle `i` is placed on `names[i % names.len()]`.  Other routes stay
    /// in the state for display and queries but get no vehicles.
    pub fn fleet_routes<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.fleet_routes = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Validate inputs, spawn the fleet, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        // ── Resolve which routes receive vehicles ─────────────────────────
        let fleet: Vec<RouteId> = match &self.fleet_routes {
            Some(names) => names
                .iter()
                .map(|name| {
                    self.routes
                        .id_of(name)
                        .ok_or_else(|| SimError::UnknownRoute(name.clone()))
                })
                .collect::<SimResult<_>>()?,
            None => self.routes.ids().collect(),
        };
        if fleet.is_empty() {
            return Err(SimError::NoRoutes);
        }

        // ── Spawn round-robin, one RNG per vehicle ────────────────────────
        let mut state = SimulationState::new(self.routes);
        for i in 0..self.config.vehicle_count {
            let id = VehicleId(i);
            let route_id = fleet[i as usize % fleet.len()];
            let Some(route) = state.routes.route(route_id) else {
                return Err(SimError::UnknownRoute(format!("{route_id}")));
            };
            let rng = VehicleRng::new(self.config.seed, id);
            let vehicle = self.strategy.spawn(id, route_id, route, rng);
            state.insert(vehicle);
        }
        debug!(
            "spawned {} vehicles on {} routes (seed {})",
            state.vehicle_count(),
            fleet.len(),
            self.config.seed,
        );

        Ok(Sim::new(self.config, state, self.strategy))
    }
}
