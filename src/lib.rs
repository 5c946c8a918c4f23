// Strider: a fixed-timestep locomotion controller for 3D rigid-body characters
//
// - `core`: small math helpers
// - `engine`: host-side plumbing (input sampling, rapier physics, fixed timestep)
// - `game`: the locomotion state machine and the player character

pub mod core;
pub mod engine;
pub mod game;
