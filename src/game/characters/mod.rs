// Character system
//
// Everything that turns player intent into movement:
// - Locomotion state machine and jump arbitration
// - Ground probe, motion force and look handling
// - Controller wiring those to a physics body
// - The player character backed by the rapier world

pub mod character;
pub mod controller;
pub mod error;
pub mod ground;
pub mod look;
pub mod machine;
pub mod motion;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use character::{Character, CharacterTransform};
pub use controller::{LocomotionController, LocomotionControllerBuilder, TickReport};
pub use error::ControllerError;
pub use ground::{GroundContact, GroundProbe};
pub use machine::{BodyState, LocomotionMachine, TickEffects};
pub use state::{JumpPhase, LocomotionState};
pub use stats::{LocomotionStats, BASE_STATS};
