use thiserror::Error;

use tm_core::VehicleId;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("vehicle {vehicle} carries {found} state; this strategy expects {expected}")]
    WrongState {
        vehicle:  VehicleId,
        expected: &'static str,
        found:    &'static str,
    },

    #[error("vehicle {vehicle} is on segment {index} of a {len}-waypoint route")]
    SegmentOutOfRange {
        vehicle: VehicleId,
        index:   usize,
        len:     usize,
    },
}

pub type MotionResult<T> = Result<T, MotionError>;
