use tm_core::TmError;
use tm_routes::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("fleet route {0:?} is not in the route set")]
    UnknownRoute(String),

    #[error("no routes to place vehicles on")]
    NoRoutes,

    #[error(transparent)]
    Core(#[from] TmError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type SimResult<T> = Result<T, SimError>;
