//! `RouteSet` — the fixed route table loaded once at startup.

use rustc_hash::FxHashMap;

use tm_core::RouteId;

use crate::{Route, RouteError, RouteResult};

/// Immutable collection of routes, addressable by `RouteId` or by name.
///
/// Do not construct directly; use [`RouteSetBuilder`] or
/// [`RouteSet::from_routes`].
#[derive(Clone, Debug, Default)]
pub struct RouteSet {
    routes:  Vec<Route>,
    by_name: FxHashMap<String, RouteId>,
}

impl RouteSet {
    /// An empty set.  Any vehicle assigned to it will be skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a list of routes in order.
    ///
    /// # Errors
    ///
    /// [`RouteError::DuplicateRoute`] if two routes share a name.
    pub fn from_routes(routes: Vec<Route>) -> RouteResult<Self> {
        if routes.len() >= RouteId::INVALID.index() {
            return Err(RouteError::TooManyRoutes(routes.len()));
        }
        let mut by_name = FxHashMap::default();
        by_name.reserve(routes.len());
        for (i, route) in routes.iter().enumerate() {
            let id = RouteId(i as u16);
            if by_name.insert(route.name().to_owned(), id).is_some() {
                return Err(RouteError::DuplicateRoute(route.name().to_owned()));
            }
        }
        Ok(Self { routes, by_name })
    }

    /// Look up a route by name.  Unknown names return `None`.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.id_of(name).and_then(|id| self.route(id))
    }

    pub fn id_of(&self, name: &str) -> Option<RouteId> {
        self.by_name.get(name).copied()
    }

    /// Look up a route by id.  `RouteId::INVALID` and stale ids return `None`.
    #[inline]
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    /// All routes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteId(i as u16), r))
    }

    pub fn ids(&self) -> impl Iterator<Item = RouteId> + '_ {
        (0..self.routes.len()).map(|i| RouteId(i as u16))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Fluent builder for [`RouteSet`].
#[derive(Default)]
pub struct RouteSetBuilder {
    routes: Vec<Route>,
}

impl RouteSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn build(self) -> RouteResult<RouteSet> {
        RouteSet::from_routes(self.routes)
    }
}
