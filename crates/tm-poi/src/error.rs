use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoiError {
    #[error("point of interest needs a non-empty name")]
    EmptyName,

    #[error("coordinate ({lat}, {lng}) is not a finite lat/lng pair")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PoiResult<T> = Result<T, PoiError>;
