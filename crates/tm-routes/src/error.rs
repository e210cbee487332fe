//! Route-model error type.

use thiserror::Error;

/// Errors produced while building or loading routes.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route {route:?} has {got} waypoint(s); at least 2 are required")]
    TooFewWaypoints { route: String, got: usize },

    #[error("route {0:?} is defined more than once")]
    DuplicateRoute(String),

    #[error("{0} routes exceed the RouteId range")]
    TooManyRoutes(usize),

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
