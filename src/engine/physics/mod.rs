// Physics host using rapier3d
//
// Implements the controller's `RigidBodyDriver` and `SpatialQuery`
// collaborators on top of a rapier world.

pub mod body;
mod collision;
mod world;

pub use body::{presets, BodyBuilder, ColliderBuilder3D, ColliderHandle, RigidBodyHandle};
pub use collision::{query_groups, CollisionLayer};
pub use world::{BodyDriver, PhysicsWorld};
