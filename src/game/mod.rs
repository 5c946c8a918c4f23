// Game-specific logic built on the engine layer

pub mod characters;
