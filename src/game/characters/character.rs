// Player character: a rapier body driven by the locomotion controller

use crate::engine::host::VisualTransform;
use crate::engine::input::MotionIntent;
use crate::engine::physics::{
    presets, BodyDriver, ColliderHandle, CollisionLayer, PhysicsWorld, RigidBodyHandle,
};
use glam::{Quat, Vec2, Vec3};

use super::controller::{LocomotionController, TickReport};
use super::error::ControllerError;
use super::state::LocomotionState;
use super::stats::LocomotionStats;

/// Visual heading and scale of a character.
///
/// Yaw is in degrees, positive turns right (clockwise seen from above).
/// At zero yaw the character faces -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTransform {
    pub yaw_degrees: f32,
    pub scale: Vec3,
}

impl Default for CharacterTransform {
    fn default() -> Self {
        Self {
            yaw_degrees: 0.0,
            scale: Vec3::ONE,
        }
    }
}

impl CharacterTransform {
    /// Heading as a rotation about world up, radians
    pub fn yaw_radians(&self) -> f32 {
        -self.yaw_degrees.to_radians()
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw_radians())
    }
}

impl VisualTransform for CharacterTransform {
    fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + degrees).rem_euclid(360.0);
    }

    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

/// The player: physics handles, visual transform and controller
#[derive(Debug)]
pub struct Character {
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's capsule collider
    pub collider_handle: Option<ColliderHandle>,
    pub transform: CharacterTransform,
    controller: LocomotionController,
}

impl Character {
    /// Create the player body and capsule at `position` and attach a
    /// controller probing the ground layer
    pub fn spawn(
        physics: &mut PhysicsWorld,
        stats: LocomotionStats,
        position: Vec3,
    ) -> Result<Self, ControllerError> {
        let controller = LocomotionController::builder()
            .stats(stats.clone())
            .ground_layer(CollisionLayer::Ground.mask())
            .build()?;

        let body_handle =
            physics.add_rigid_body(presets::player_body(position.x, position.y, position.z));
        let collider = presets::player_collider(stats.radius, stats.height, stats.mass);
        let collider_handle = physics.add_collider(collider, body_handle);

        log::info!("spawned character at {position}");

        Ok(Self {
            body_handle,
            collider_handle: Some(collider_handle),
            transform: CharacterTransform::default(),
            controller,
        })
    }

    /// Drive a body that already exists in `physics`
    pub fn from_body(
        physics: &PhysicsWorld,
        body_handle: RigidBodyHandle,
        controller: LocomotionController,
    ) -> Result<Self, ControllerError> {
        if physics.get_rigid_body(body_handle).is_none() {
            return Err(ControllerError::MissingBody(body_handle));
        }

        Ok(Self {
            body_handle,
            collider_handle: None,
            transform: CharacterTransform::default(),
            controller,
        })
    }

    /// One fixed tick. `None` if the body has left the world.
    pub fn fixed_update(
        &mut self,
        physics: &mut PhysicsWorld,
        intent: &MotionIntent,
    ) -> Option<TickReport> {
        let Some(mut driver) = physics.body_driver(self.body_handle) else {
            log::warn!("character body {:?} is gone, skipping tick", self.body_handle);
            return None;
        };

        sync_heading(&mut driver, &self.transform);
        Some(
            self.controller
                .fixed_update(intent, &mut driver, &mut self.transform),
        )
    }

    /// Apply one frame of look input
    pub fn frame_update(&mut self, look: Vec2, dt: f32) {
        self.controller.frame_update(look, dt, &mut self.transform);
    }

    pub fn state(&self) -> LocomotionState {
        self.controller.state()
    }

    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec3> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let t = body.translation();
            Vec3::new(t.x, t.y, t.z)
        })
    }

    /// Move the body back to `position`, at rest and standing
    pub fn respawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
            body.set_translation([position.x, position.y, position.z].into(), true);
            body.set_linvel([0.0, 0.0, 0.0].into(), true);
            body.reset_forces(true);
        }
        self.controller
            .reset(LocomotionState::Falling, &mut self.transform);
        log::info!("respawned character at {position}");
    }
}

fn sync_heading(driver: &mut BodyDriver<'_>, transform: &CharacterTransform) {
    driver.set_yaw(transform.yaw_radians());
}
