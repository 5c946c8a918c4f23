// Locomotion states and jump bookkeeping

use std::fmt;

/// Represents the current locomotion state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionState {
    /// Standing still on ground
    #[default]
    Idling,
    /// Moving on ground at base speed
    Walking,
    /// Moving on ground at double speed while run is held
    Running,
    /// Waiting for ground contact to launch the first jump
    Jumping,
    /// In the air
    Falling,
    /// Launching the second jump. Lasts exactly one tick.
    DoubleJumping,
    /// Moving on ground at half speed with half height
    Crouching,
}

impl LocomotionState {
    pub const ALL: [LocomotionState; 7] = [
        Self::Idling,
        Self::Walking,
        Self::Running,
        Self::Jumping,
        Self::Falling,
        Self::DoubleJumping,
        Self::Crouching,
    ];

    /// Multiplier applied to the base movement force while in this state.
    /// `None` means the state applies no locomotion force.
    pub fn motion_multiplier(self) -> Option<f32> {
        match self {
            Self::Falling => Some(0.7),
            Self::Walking => Some(1.0),
            Self::Running => Some(2.0),
            Self::Crouching => Some(0.5),
            Self::Idling | Self::Jumping | Self::DoubleJumping => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idling => "idle",
            Self::Walking => "walk",
            Self::Running => "run",
            Self::Jumping => "jump",
            Self::Falling => "fall",
            Self::DoubleJumping => "double_jump",
            Self::Crouching => "crouch",
        }
    }
}

impl fmt::Display for LocomotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress through the jump / double-jump sequence.
///
/// Replaces the `first_jump_launched` / `double_jump_available` flag pair.
/// The flag combination "not launched, double jump spent" cannot happen, so
/// it has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JumpPhase {
    /// No jump launched since last walking on ground
    #[default]
    Grounded,
    /// First jump launched, double jump still available
    FirstJumpUsed,
    /// Both jumps spent
    DoubleJumpUsed,
}

impl JumpPhase {
    pub fn first_jump_launched(self) -> bool {
        !matches!(self, Self::Grounded)
    }

    pub fn double_jump_available(self) -> bool {
        !matches!(self, Self::DoubleJumpUsed)
    }
}
