// Player action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all actions a player can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Run,
    Crouch,
    Jump,

    // Meta actions
    Pause,
    Quit,
}

impl Action {
    /// Meta actions are handled by the host loop, not by the character
    pub fn is_meta(self) -> bool {
        matches!(self, Self::Pause | Self::Quit)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD)
        (KeyCode::KeyW, Action::MoveForward),
        (KeyCode::KeyS, Action::MoveBackward),
        (KeyCode::KeyA, Action::StrafeLeft),
        (KeyCode::KeyD, Action::StrafeRight),
        (KeyCode::ShiftLeft, Action::Run),
        (KeyCode::ControlLeft, Action::Crouch),
        (KeyCode::KeyC, Action::Crouch),
        (KeyCode::Space, Action::Jump),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}
