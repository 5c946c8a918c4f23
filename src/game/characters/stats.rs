// Tunable locomotion parameters, fixed once the controller is built

use super::error::ControllerError;
use glam::Vec2;

/// Movement and look tuning for a character
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionStats {
    // Movement
    /// Base continuous force along the input direction
    pub movement_force: f32,
    /// Upward impulse of the first jump
    pub jump_force: f32,
    /// Upward impulse of the double jump
    pub double_jump_force: f32,

    // Look
    /// Upper camera pitch limit in degrees
    pub pitch_max: f32,
    /// Lower camera pitch limit in degrees
    pub pitch_min: f32,
    /// Degrees per unit of look input per second, per axis
    pub look_speed: Vec2,
    /// 1 or -1 per axis
    pub axis_inversion: Vec2,

    // Body
    /// Capsule radius
    pub radius: f32,
    /// Capsule height; the body origin sits halfway up
    pub height: f32,
    pub mass: f32,
}

pub const BASE_STATS: LocomotionStats = LocomotionStats {
    movement_force: 5.0,
    jump_force: 5.0,
    double_jump_force: 15.0,

    pitch_max: 80.0,
    pitch_min: -80.0,
    look_speed: Vec2::ONE,
    axis_inversion: Vec2::ONE,

    radius: 0.5,
    height: 2.0,
    mass: 1.0,
};

impl Default for LocomotionStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl LocomotionStats {
    /// Reject values that would make the controller misbehave every tick
    pub fn validate(&self) -> Result<(), ControllerError> {
        let non_negative = [
            ("movement_force", self.movement_force),
            ("jump_force", self.jump_force),
            ("double_jump_force", self.double_jump_force),
            ("look_speed.x", self.look_speed.x),
            ("look_speed.y", self.look_speed.y),
            ("radius", self.radius),
            ("height", self.height),
            ("mass", self.mass),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ControllerError::InvalidTuning { name, value });
            }
        }

        for (name, value) in [
            ("pitch_min", self.pitch_min),
            ("pitch_max", self.pitch_max),
            ("axis_inversion.x", self.axis_inversion.x),
            ("axis_inversion.y", self.axis_inversion.y),
        ] {
            if !value.is_finite() {
                return Err(ControllerError::InvalidTuning { name, value });
            }
        }

        if self.pitch_min > self.pitch_max {
            return Err(ControllerError::InvalidPitchLimits {
                min: self.pitch_min,
                max: self.pitch_max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = LocomotionStats::default();
        assert_eq!(stats.movement_force, 5.0);
        assert_eq!(stats.jump_force, 5.0);
        assert_eq!(stats.double_jump_force, 15.0);
        assert_eq!(stats.pitch_max, 80.0);
        assert_eq!(stats.pitch_min, -80.0);
    }

    #[test]
    fn test_default_stats_are_valid() {
        assert_eq!(BASE_STATS.validate(), Ok(()));
    }

    #[test]
    fn test_negative_force_rejected() {
        let stats = LocomotionStats {
            jump_force: -1.0,
            ..BASE_STATS
        };
        assert_eq!(
            stats.validate(),
            Err(ControllerError::InvalidTuning {
                name: "jump_force",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let stats = LocomotionStats {
            movement_force: f32::INFINITY,
            ..BASE_STATS
        };
        assert!(matches!(
            stats.validate(),
            Err(ControllerError::InvalidTuning {
                name: "movement_force",
                ..
            })
        ));
    }

    #[test]
    fn test_inverted_pitch_limits_rejected() {
        let stats = LocomotionStats {
            pitch_min: 10.0,
            pitch_max: -10.0,
            ..BASE_STATS
        };
        assert!(matches!(
            stats.validate(),
            Err(ControllerError::InvalidPitchLimits { .. })
        ));
    }

    #[test]
    fn test_inverted_axis_is_valid() {
        let stats = LocomotionStats {
            axis_inversion: Vec2::new(1.0, -1.0),
            ..BASE_STATS
        };
        assert!(stats.validate().is_ok());
    }
}
