// Per-tick snapshot of what the player asked the character to do

use crate::core::math::is_zero2;
use glam::Vec2;

/// Input consumed by one locomotion tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionIntent {
    /// x = strafe (right positive), y = forward. Each axis in [-1, 1].
    pub movement: Vec2,
    pub run_held: bool,
    pub crouch_held: bool,
    /// True only on the tick the jump input went from released to pressed
    pub jump_edge: bool,
}

impl MotionIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(movement: Vec2) -> Self {
        Self {
            movement: movement.clamp(Vec2::NEG_ONE, Vec2::ONE),
            ..Self::default()
        }
    }

    pub fn with_run(mut self, held: bool) -> Self {
        self.run_held = held;
        self
    }

    pub fn with_crouch(mut self, held: bool) -> Self {
        self.crouch_held = held;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_edge = true;
        self
    }

    pub fn has_movement(&self) -> bool {
        !is_zero2(self.movement)
    }
}
