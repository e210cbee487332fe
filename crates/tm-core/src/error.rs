//! Framework error type.
//!
//! Sub-crates define their own error enums and convert into `TmError` where a
//! caller needs a single type, or keep them separate and wrap `TmError` as one
//! variant.

use thiserror::Error;

use crate::VehicleId;

/// The top-level error type for `tm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TmError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("route {0:?} not found")]
    RouteNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tm-*` crates.
pub type TmResult<T> = Result<T, TmError>;
