// Collaborator interfaces the locomotion controller needs from its host engine
//
// The controller never talks to rapier or winit directly. A host supplies a
// body it can push around, a way to cast rays into the world, and a transform
// it can turn and scale. `engine::physics` provides the rapier-backed versions.

use glam::Vec3;

/// Bitmask selecting which collision layers a query may hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing. A probe configured with this mask can never ground.
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: LayerMask) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A single ray query issued against the host's spatial index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundRay {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
    pub max_distance: f32,
    pub layers: LayerMask,
    /// Skip trigger (sensor) volumes
    pub ignore_triggers: bool,
}

/// Rigid body the controller moves
pub trait RigidBodyDriver {
    fn linear_velocity(&self) -> Vec3;

    fn position(&self) -> Vec3;

    /// Set the continuous force integrated over the next step.
    /// Replaces whatever force was set on the previous tick.
    fn set_force(&mut self, force: Vec3);

    /// Apply an instantaneous change of momentum
    fn apply_impulse(&mut self, impulse: Vec3);
}

/// Ray queries against the world
pub trait SpatialQuery {
    /// Distance to the first hit along the ray, if any
    fn cast_ray(&self, ray: &GroundRay) -> Option<f32>;
}

/// Orientation and visual extent of the character
pub trait VisualTransform {
    /// Rotate about world up by `degrees`
    fn rotate_yaw(&mut self, degrees: f32);

    fn right(&self) -> Vec3;

    fn forward(&self) -> Vec3;

    fn scale(&self) -> Vec3;

    fn set_scale(&mut self, scale: Vec3);
}
