// Math utilities and helper functions

use glam::{Vec2, Vec3};

/// Squared-length threshold under which a vector compares equal to zero.
/// Matches the vector equality of the physics host the controller was tuned in.
pub const VECTOR_ZERO_EPSILON_SQ: f32 = 1e-10;

/// Check if a 3D vector is zero within `VECTOR_ZERO_EPSILON_SQ`
pub fn is_zero3(v: Vec3) -> bool {
    v.length_squared() < VECTOR_ZERO_EPSILON_SQ
}

/// Check if a 2D vector is zero within `VECTOR_ZERO_EPSILON_SQ`
pub fn is_zero2(v: Vec2) -> bool {
    v.length_squared() < VECTOR_ZERO_EPSILON_SQ
}
