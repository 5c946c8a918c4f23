// Frame-rate input sampler feeding the fixed-rate locomotion tick

use super::action::Action;
use super::buttons::ButtonState;
use super::intent::MotionIntent;
use glam::Vec2;

/// Latches device input between frames and physics ticks.
///
/// Button levels are read live. A jump press stays latched until a physics
/// tick consumes it, so frames that run zero ticks don't lose it and frames
/// that run several ticks only jump once.
#[derive(Debug, Default)]
pub struct InputSampler {
    buttons: ButtonState,

    /// Mouse motion accumulated since the last frame boundary
    look_delta: Vec2,

    /// Jump press waiting for the next physics tick
    pending_jump: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        if self.buttons.press(action) && action == Action::Jump {
            self.pending_jump = true;
        }
    }

    pub fn release(&mut self, action: Action) {
        self.buttons.release(action);
    }

    pub fn add_look(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.buttons.is_pressed(action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.buttons.just_pressed(action)
    }

    /// Movement axes from the four direction actions, clamped to unit length
    pub fn movement(&self) -> Vec2 {
        let axis = |negative: Action, positive: Action| {
            let mut value = 0.0;
            if self.is_pressed(negative) {
                value -= 1.0;
            }
            if self.is_pressed(positive) {
                value += 1.0;
            }
            value
        };

        Vec2::new(
            axis(Action::StrafeLeft, Action::StrafeRight),
            axis(Action::MoveBackward, Action::MoveForward),
        )
        .clamp_length_max(1.0)
    }

    /// Look delta accumulated this frame
    pub fn look_delta(&self) -> Vec2 {
        self.look_delta
    }

    /// Snapshot for one physics tick. Consumes the latched jump press.
    pub fn take_intent(&mut self) -> MotionIntent {
        MotionIntent {
            movement: self.movement(),
            run_held: self.is_pressed(Action::Run),
            crouch_held: self.is_pressed(Action::Crouch),
            jump_edge: std::mem::take(&mut self.pending_jump),
        }
    }

    /// Clear per-frame state. Does not drop an unconsumed jump press.
    pub fn end_frame(&mut self) {
        self.buttons.end_frame();
        self.look_delta = Vec2::ZERO;
    }

    pub fn reset(&mut self) {
        self.buttons.reset();
        self.look_delta = Vec2::ZERO;
        self.pending_jump = false;
    }
}
