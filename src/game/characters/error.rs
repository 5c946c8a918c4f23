// Startup errors for the locomotion controller and its character

use crate::engine::physics::RigidBodyHandle;
use thiserror::Error;

/// Configuration defects detected when a controller or character is built.
/// Nothing in the per-tick path returns these.
#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("no ground layer configured; the ground probe could never report contact")]
    MissingGroundLayer,

    #[error("rigid body {0:?} is not part of the physics world")]
    MissingBody(RigidBodyHandle),

    #[error("tuning value `{name}` must be finite and non-negative, got {value}")]
    InvalidTuning { name: &'static str, value: f32 },

    #[error("camera pitch limits are inverted: min {min} > max {max}")]
    InvalidPitchLimits { min: f32, max: f32 },
}
