// Locomotion force along the character's own axes

use glam::{Vec2, Vec3};

/// Continuous force for one tick.
///
/// `movement.x` pushes along `right`, `movement.y` along `forward`.
pub fn motion_force(
    right: Vec3,
    forward: Vec3,
    movement: Vec2,
    movement_force: f32,
    multiplier: f32,
) -> Vec3 {
    (right * movement.x + forward * movement.y) * movement_force * multiplier
}
