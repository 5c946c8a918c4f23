// Frame-rate look handling: body yaw and clamped camera pitch

use crate::engine::host::VisualTransform;
use glam::Vec2;

/// Turns look input into a body yaw delta and a clamped camera pitch
#[derive(Debug, Clone)]
pub struct LookController {
    speed: Vec2,
    inversion: Vec2,
    pitch_min: f32,
    pitch_max: f32,
    /// Camera pitch in degrees, positive looks up
    pitch: f32,
}

impl LookController {
    pub fn new(speed: Vec2, inversion: Vec2, pitch_min: f32, pitch_max: f32) -> Self {
        Self {
            speed,
            inversion,
            pitch_min,
            pitch_max,
            pitch: 0.0,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply one frame of look input. Returns the yaw applied, in degrees.
    pub fn apply(&mut self, look: Vec2, dt: f32, transform: &mut impl VisualTransform) -> f32 {
        let delta = look * self.speed * self.inversion * dt;

        if delta.x != 0.0 {
            transform.rotate_yaw(delta.x);
        }
        self.pitch = (self.pitch + delta.y).clamp(self.pitch_min, self.pitch_max);

        delta.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[derive(Default)]
    struct Yaw {
        degrees: f32,
    }

    impl VisualTransform for Yaw {
        fn rotate_yaw(&mut self, degrees: f32) {
            self.degrees += degrees;
        }
        fn right(&self) -> Vec3 {
            Vec3::X
        }
        fn forward(&self) -> Vec3 {
            Vec3::NEG_Z
        }
        fn scale(&self) -> Vec3 {
            Vec3::ONE
        }
        fn set_scale(&mut self, _scale: Vec3) {}
    }

    fn controller() -> LookController {
        LookController::new(Vec2::ONE, Vec2::ONE, -80.0, 80.0)
    }

    #[test]
    fn test_yaw_scaled_by_dt() {
        let mut look = controller();
        let mut yaw = Yaw::default();

        let applied = look.apply(Vec2::new(90.0, 0.0), 0.5, &mut yaw);
        assert_relative_eq!(applied, 45.0);
        assert_relative_eq!(yaw.degrees, 45.0);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut look = controller();
        let mut yaw = Yaw::default();

        look.apply(Vec2::new(0.0, 500.0), 1.0, &mut yaw);
        assert_eq!(look.pitch(), 80.0);

        look.apply(Vec2::new(0.0, -1000.0), 1.0, &mut yaw);
        assert_eq!(look.pitch(), -80.0);
    }

    #[test]
    fn test_axis_inversion() {
        let mut look = LookController::new(Vec2::new(2.0, 1.0), Vec2::new(-1.0, -1.0), -80.0, 80.0);
        let mut yaw = Yaw::default();

        look.apply(Vec2::new(10.0, 10.0), 1.0, &mut yaw);
        assert_relative_eq!(yaw.degrees, -20.0);
        assert_relative_eq!(look.pitch(), -10.0);
    }
}
