// Level and edge state of action buttons

use super::action::Action;
use std::collections::HashSet;

/// Pressed/just-pressed/just-released tracking for actions
#[derive(Debug, Default)]
pub struct ButtonState {
    /// Actions currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last frame boundary
    just_pressed: HashSet<Action>,

    /// Actions released since the last frame boundary
    just_released: HashSet<Action>,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register a press. Returns true if this was a released -> pressed edge.
    pub fn press(&mut self, action: Action) -> bool {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
            true
        } else {
            false
        }
    }

    /// Register a release. Returns true if the action was held.
    pub fn release(&mut self, action: Action) -> bool {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
            true
        } else {
            false
        }
    }

    /// Clear edge state at a frame boundary
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
