// Engine modules: host interfaces, input, physics, fixed timestep

pub mod game_loop;
pub mod host;
pub mod input;
pub mod physics;
