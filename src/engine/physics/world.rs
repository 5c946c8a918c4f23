use rapier3d::prelude::*;

use super::collision::query_groups;
use crate::engine::host::{GroundRay, RigidBodyDriver, SpatialQuery};
use crate::engine::game_loop::FIXED_TIMESTEP;
use glam::Vec3;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector (default: -9.81 m/s² in y-axis)
    gravity: Vector<Real>,

    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts
    query_pipeline: QueryPipeline,

    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -9.81, 0.0])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: FIXED_TIMESTEP,
            ..IntegrationParameters::default()
        };

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Refresh the query pipeline without stepping, e.g. after spawning
    /// bodies and before the first step
    pub fn update_query_pipeline(&mut self) {
        self.query_pipeline
            .update(&self.rigid_body_set, &self.collider_set);
    }

    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(Point::from(ray_origin), ray_dir);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            solid,
            filter,
        )
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }

    /// Borrow one body of this world as a controller collaborator
    pub fn body_driver(&mut self, handle: RigidBodyHandle) -> Option<BodyDriver<'_>> {
        if self.rigid_body_set.contains(handle) {
            Some(BodyDriver {
                world: self,
                handle,
            })
        } else {
            None
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialQuery for PhysicsWorld {
    fn cast_ray(&self, ray: &GroundRay) -> Option<f32> {
        let mut filter = QueryFilter::new().groups(query_groups(ray.layers));
        if ray.ignore_triggers {
            filter = filter.exclude_sensors();
        }

        self.raycast(
            to_vector(ray.origin),
            to_vector(ray.direction),
            ray.max_distance,
            true,
            filter,
        )
        .map(|(_, toi)| toi)
    }
}

/// One rigid body plus the world around it.
///
/// Exposes both the body and the world's spatial queries, so a single
/// controller tick can probe the ground and push the body.
pub struct BodyDriver<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
}

impl BodyDriver<'_> {
    pub fn handle(&self) -> RigidBodyHandle {
        self.handle
    }

    /// Set the body's heading about world up, in radians
    pub fn set_yaw(&mut self, yaw: Real) {
        if let Some(body) = self.world.rigid_body_set.get_mut(self.handle) {
            body.set_rotation(Rotation::from_axis_angle(&Vector::y_axis(), yaw), true);
        }
    }
}

impl RigidBodyDriver for BodyDriver<'_> {
    fn linear_velocity(&self) -> Vec3 {
        self.world
            .rigid_body_set
            .get(self.handle)
            .map(|body| to_vec3(body.linvel()))
            .unwrap_or(Vec3::ZERO)
    }

    fn position(&self) -> Vec3 {
        self.world
            .rigid_body_set
            .get(self.handle)
            .map(|body| to_vec3(body.translation()))
            .unwrap_or(Vec3::ZERO)
    }

    fn set_force(&mut self, force: Vec3) {
        if let Some(body) = self.world.rigid_body_set.get_mut(self.handle) {
            // rapier keeps user forces until reset
            body.reset_forces(false);
            body.add_force(to_vector(force), true);
        }
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        if let Some(body) = self.world.rigid_body_set.get_mut(self.handle) {
            body.apply_impulse(to_vector(impulse), true);
        }
    }
}

impl SpatialQuery for BodyDriver<'_> {
    fn cast_ray(&self, ray: &GroundRay) -> Option<f32> {
        self.world.cast_ray(ray)
    }
}

fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

fn to_vec3(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}
