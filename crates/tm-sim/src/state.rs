//! `SimulationState` — everything the driver and the query layer share.

use std::collections::BTreeMap;

use tm_core::{GeoPoint, RouteId, VehicleId};
use tm_motion::Vehicle;
use tm_routes::{Route, RouteSet};

// ── Selection ─────────────────────────────────────────────────────────────────

/// The vehicle whose detail panel is shown, and whether the view follows it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<VehicleId>,
    follow:   bool,
}

impl Selection {
    #[inline]
    pub fn selected(&self) -> Option<VehicleId> {
        self.selected
    }

    #[inline]
    pub fn is_following(&self) -> bool {
        self.follow
    }
}

// ── VehicleSnapshot ───────────────────────────────────────────────────────────

/// Display copy of one vehicle, detached from the live record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleSnapshot {
    pub id:        VehicleId,
    pub route:     String,
    pub position:  GeoPoint,
    pub speed_kmh: f64,
    pub heading:   Option<f64>,
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// Routes, vehicles, and the current selection.
///
/// Vehicles are keyed by id in a `BTreeMap` so every pass visits them in
/// ascending id order.  Routes are fixed once the state is created.
#[derive(Debug)]
pub struct SimulationState {
    pub routes:   RouteSet,
    pub vehicles: BTreeMap<VehicleId, Vehicle>,
    selection:    Selection,
}

impl SimulationState {
    pub fn new(routes: RouteSet) -> Self {
        Self {
            routes,
            vehicles:  BTreeMap::new(),
            selection: Selection::default(),
        }
    }

    /// Add or replace a vehicle.
    pub fn insert(&mut self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.id, vehicle);
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// The route a vehicle drives, if both resolve.
    pub fn route_of(&self, id: VehicleId) -> Option<&Route> {
        self.vehicle(id).and_then(|v| self.routes.route(v.route))
    }

    /// Ids of the vehicles assigned to `route`.
    pub fn vehicles_on(&self, route: RouteId) -> impl Iterator<Item = VehicleId> + '_ {
        self.vehicles
            .values()
            .filter(move |v| v.route == route)
            .map(|v| v.id)
    }

    // ── Selection ─────────────────────────────────────────────────────────

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn selected(&self) -> Option<VehicleId> {
        self.selection.selected
    }

    /// Select `id`.  Returns `false` and leaves the selection unchanged if no
    /// such vehicle exists.
    pub fn select(&mut self, id: VehicleId) -> bool {
        if !self.vehicles.contains_key(&id) {
            return false;
        }
        self.selection.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.selected = None;
    }

    pub fn set_follow(&mut self, follow: bool) {
        self.selection.follow = follow;
    }

    /// Flip the follow toggle and return the new value.
    pub fn toggle_follow(&mut self) -> bool {
        self.selection.follow = !self.selection.follow;
        self.selection.follow
    }

    /// Where the view should be centred: the selected vehicle's position
    /// while following is on.
    pub fn follow_target(&self) -> Option<GeoPoint> {
        if !self.selection.follow {
            return None;
        }
        self.selection
            .selected
            .and_then(|id| self.vehicle(id))
            .map(Vehicle::position)
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    pub fn snapshot(&self, id: VehicleId) -> Option<VehicleSnapshot> {
        self.vehicle(id).map(|v| self.snapshot_of(v))
    }

    /// Snapshots of every vehicle, ascending by id.
    pub fn snapshots(&self) -> impl Iterator<Item = VehicleSnapshot> + '_ {
        self.vehicles.values().map(|v| self.snapshot_of(v))
    }

    fn snapshot_of(&self, v: &Vehicle) -> VehicleSnapshot {
        let route = self
            .routes
            .route(v.route)
            .map(|r| r.name().to_owned())
            .unwrap_or_default();
        VehicleSnapshot {
            id:        v.id,
            route,
            position:  v.position,
            speed_kmh: v.speed_kmh(),
            heading:   v.heading,
        }
    }
}
