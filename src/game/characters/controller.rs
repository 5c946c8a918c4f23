// Locomotion controller: the state machine wired to its collaborators

use super::error::ControllerError;
use super::ground::{GroundContact, GroundProbe};
use super::look::LookController;
use super::machine::{BodyState, JumpImpulse, LocomotionMachine, Posture};
use super::motion::motion_force;
use super::state::{JumpPhase, LocomotionState};
use super::stats::LocomotionStats;
use crate::engine::host::{LayerMask, RigidBodyDriver, SpatialQuery, VisualTransform};
use crate::engine::input::MotionIntent;
use glam::{Vec2, Vec3};

/// Vertical extent kept while crouched
pub const CROUCH_HEIGHT_FACTOR: f32 = 0.5;

/// What one fixed tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub previous: LocomotionState,
    pub state: LocomotionState,
    pub contact: GroundContact,
    /// Continuous force set for the coming step
    pub force: Vec3,
    /// Impulse applied this tick, zero if none
    pub impulse: Vec3,
}

impl TickReport {
    pub fn changed(&self) -> bool {
        self.previous != self.state
    }
}

/// Builder for [`LocomotionController`]. Validation happens in `build`.
#[derive(Debug, Default)]
pub struct LocomotionControllerBuilder {
    stats: Option<LocomotionStats>,
    ground_layer: Option<LayerMask>,
    initial_state: Option<LocomotionState>,
}

impl LocomotionControllerBuilder {
    pub fn stats(mut self, stats: LocomotionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn ground_layer(mut self, layers: LayerMask) -> Self {
        self.ground_layer = Some(layers);
        self
    }

    pub fn initial_state(mut self, state: LocomotionState) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn build(self) -> Result<LocomotionController, ControllerError> {
        let stats = self.stats.unwrap_or_default();
        stats.validate()?;

        let ground_layer = self
            .ground_layer
            .filter(|layers| !layers.is_empty())
            .ok_or(ControllerError::MissingGroundLayer)?;

        let look = LookController::new(
            stats.look_speed,
            stats.axis_inversion,
            stats.pitch_min,
            stats.pitch_max,
        );

        log::info!(
            "locomotion controller ready: ground layers {:#06b}, force {}, jumps {}/{}",
            ground_layer.bits(),
            stats.movement_force,
            stats.jump_force,
            stats.double_jump_force
        );

        Ok(LocomotionController {
            machine: LocomotionMachine::with_state(self.initial_state.unwrap_or_default()),
            probe: GroundProbe::new(ground_layer),
            look,
            stats,
            standing_scale: None,
        })
    }
}

/// Runs the locomotion machine against a host body
#[derive(Debug, Clone)]
pub struct LocomotionController {
    machine: LocomotionMachine,
    probe: GroundProbe,
    look: LookController,
    stats: LocomotionStats,
    /// Scale to restore when leaving the crouch; set while crouched
    standing_scale: Option<Vec3>,
}

impl LocomotionController {
    pub fn builder() -> LocomotionControllerBuilder {
        LocomotionControllerBuilder::default()
    }

    pub fn state(&self) -> LocomotionState {
        self.machine.state()
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.machine.jump_phase()
    }

    pub fn stats(&self) -> &LocomotionStats {
        &self.stats
    }

    pub fn probe(&self) -> &GroundProbe {
        &self.probe
    }

    /// Camera pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    pub fn is_crouched(&self) -> bool {
        self.standing_scale.is_some()
    }

    /// One fixed physics tick
    pub fn fixed_update<B, V>(
        &mut self,
        intent: &MotionIntent,
        body: &mut B,
        transform: &mut V,
    ) -> TickReport
    where
        B: RigidBodyDriver + SpatialQuery,
        V: VisualTransform,
    {
        let previous = self.machine.state();
        let contact = self.probe.classify(&*body, body.position());
        let body_state = BodyState {
            velocity: body.linear_velocity(),
            grounded: contact.is_grounded(),
        };

        let effects = self.machine.tick(intent, &body_state);

        let force = effects
            .motion_multiplier
            .map(|multiplier| {
                motion_force(
                    transform.right(),
                    transform.forward(),
                    intent.movement,
                    self.stats.movement_force,
                    multiplier,
                )
            })
            .unwrap_or(Vec3::ZERO);
        body.set_force(force);

        let impulse = match effects.impulse {
            Some(JumpImpulse::Jump) => Vec3::Y * self.stats.jump_force,
            Some(JumpImpulse::DoubleJump) => Vec3::Y * self.stats.double_jump_force,
            None => Vec3::ZERO,
        };
        if effects.impulse.is_some() {
            body.apply_impulse(impulse);
        }

        match effects.posture {
            Some(Posture::Crouched) => self.crouch(transform),
            Some(Posture::Standing) => self.stand(transform),
            None => {}
        }

        TickReport {
            previous,
            state: self.machine.state(),
            contact,
            force,
            impulse,
        }
    }

    /// Once per rendered frame. Returns the yaw applied, in degrees.
    pub fn frame_update<V: VisualTransform>(
        &mut self,
        look: Vec2,
        dt: f32,
        transform: &mut V,
    ) -> f32 {
        self.look.apply(look, dt, transform)
    }

    /// Force a state and restore the standing posture, e.g. on respawn
    pub fn reset<V: VisualTransform>(&mut self, state: LocomotionState, transform: &mut V) {
        self.stand(transform);
        self.machine.reset(state);
    }

    fn crouch<V: VisualTransform>(&mut self, transform: &mut V) {
        if self.standing_scale.is_none() {
            let standing = transform.scale();
            self.standing_scale = Some(standing);
            transform.set_scale(standing * Vec3::new(1.0, CROUCH_HEIGHT_FACTOR, 1.0));
        }
    }

    fn stand<V: VisualTransform>(&mut self, transform: &mut V) {
        if let Some(standing) = self.standing_scale.take() {
            transform.set_scale(standing);
        }
    }
}
