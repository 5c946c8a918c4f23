use super::collision::CollisionLayer;
use rapier3d::prelude::*;

pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    linvel: Vector<Real>,
    gravity_scale: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            gravity_scale: 1.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    pub fn position(mut self, x: Real, y: Real, z: Real) -> Self {
        self.position = Isometry::translation(x, y, z);
        self
    }

    pub fn linvel(mut self, x: Real, y: Real, z: Real) -> Self {
        self.linvel = vector![x, y, z];
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation; the character turns by setting its yaw directly
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes |= LockedAxes::ROTATION_LOCKED;
        self
    }

    pub fn build(self) -> RigidBody {
        let mut body = RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .linvel(self.linvel)
            .gravity_scale(self.gravity_scale)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build();

        if self.body_type == RigidBodyType::Dynamic {
            body.set_linear_damping(0.5); // Some air resistance
            body.set_angular_damping(1.0);
        }

        body
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder3D {
    shape: SharedShape,
    layer: CollisionLayer,
    is_sensor: bool,
    friction: Real,
    restitution: Real,
    density: Option<Real>,
    mass: Option<Real>,
}

impl ColliderBuilder3D {
    fn with_shape(shape: SharedShape) -> Self {
        Self {
            shape,
            layer: CollisionLayer::Default,
            is_sensor: false,
            friction: 0.5,
            restitution: 0.0,
            density: Some(1.0),
            mass: None,
        }
    }

    /// Create a box-shaped collider
    pub fn cuboid(half_x: Real, half_y: Real, half_z: Real) -> Self {
        Self::with_shape(SharedShape::cuboid(half_x, half_y, half_z))
    }

    /// Create a vertical capsule (good for characters)
    pub fn capsule(half_height: Real, radius: Real) -> Self {
        Self::with_shape(SharedShape::capsule_y(half_height, radius))
    }

    pub fn layer(mut self, layer: CollisionLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Make this a sensor (detects overlaps but doesn't cause physical response)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set mass directly (overrides density)
    pub fn mass(mut self, mass: Real) -> Self {
        self.mass = Some(mass);
        self.density = None;
        self
    }

    pub fn build(self) -> Collider {
        let mut builder = ColliderBuilder::new(self.shape)
            .collision_groups(self.layer.to_interaction_groups())
            .sensor(self.is_sensor)
            .friction(self.friction)
            .restitution(self.restitution);

        if let Some(mass) = self.mass {
            builder = builder.mass(mass);
        } else if let Some(density) = self.density {
            builder = builder.density(density);
        }

        builder.build()
    }
}

/// Common rigid body configurations
pub mod presets {
    use super::*;

    /// Player body: dynamic, rotation locked, never sleeps
    pub fn player_body(x: Real, y: Real, z: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y, z)
            .lock_rotation()
            .gravity_scale(1.0)
            .can_sleep(false)
            .build()
    }

    /// Player capsule of total `height`; the body origin sits at its center
    pub fn player_collider(radius: Real, height: Real, mass: Real) -> Collider {
        let half_height = (height / 2.0 - radius).max(0.0);

        ColliderBuilder3D::capsule(half_height, radius)
            .layer(CollisionLayer::Player)
            .friction(0.0)
            .restitution(0.0)
            .mass(mass)
            .build()
    }

    /// Ground slab whose top face is at `top_y`
    pub fn ground_body(top_y: Real, half_thickness: Real) -> RigidBody {
        BodyBuilder::new_fixed()
            .position(0.0, top_y - half_thickness, 0.0)
            .build()
    }

    pub fn ground_collider(half_x: Real, half_thickness: Real, half_z: Real) -> Collider {
        ColliderBuilder3D::cuboid(half_x, half_thickness, half_z)
            .layer(CollisionLayer::Ground)
            .friction(0.6)
            .build()
    }

    /// Trigger volume (detects but doesn't block)
    pub fn trigger_collider(half_x: Real, half_y: Real, half_z: Real) -> Collider {
        ColliderBuilder3D::cuboid(half_x, half_y, half_z)
            .layer(CollisionLayer::Trigger)
            .sensor(true)
            .build()
    }
}
