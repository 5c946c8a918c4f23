// Locomotion state machine
//
// One call to `LocomotionMachine::tick` per fixed physics step. The tick
// first arbitrates a jump press, then runs the transition table for the
// (possibly updated) state. The table itself is the pure function
// `evaluate`: it never touches the body, it only reports which effects the
// caller must apply.

use super::state::{JumpPhase, LocomotionState};
use crate::core::math::is_zero3;
use crate::engine::input::MotionIntent;
use glam::Vec3;

/// Vertical speed below which a walking body counts as falling
pub const FALL_SPEED_THRESHOLD: f32 = -0.1;

/// Body signals sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub velocity: Vec3,
    pub grounded: bool,
}

impl BodyState {
    pub fn grounded(velocity: Vec3) -> Self {
        Self {
            velocity,
            grounded: true,
        }
    }

    pub fn airborne(velocity: Vec3) -> Self {
        Self {
            velocity,
            grounded: false,
        }
    }
}

/// Which vertical impulse to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpImpulse {
    Jump,
    DoubleJump,
}

/// Requested visual posture change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    Crouched,
    Standing,
}

/// Effects the caller applies to the body for this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEffects {
    /// Locomotion force multiplier. `None` applies no locomotion force.
    pub motion_multiplier: Option<f32>,
    pub impulse: Option<JumpImpulse>,
    pub posture: Option<Posture>,
}

/// Result of running the transition table once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: LocomotionState,
    pub jump: JumpPhase,
    pub effects: TickEffects,
}

/// Interpret a jump press against the jump phase.
///
/// A press before the first jump launches starts `Jumping`; a press after it
/// launches, with the double jump unspent, starts `DoubleJumping`; any other
/// press is dropped.
pub fn arbitrate_jump(state: LocomotionState, jump: JumpPhase) -> LocomotionState {
    if !jump.first_jump_launched() {
        LocomotionState::Jumping
    } else if jump.double_jump_available() {
        LocomotionState::DoubleJumping
    } else {
        state
    }
}

/// Run the transition table for `state`. First matching exit wins.
pub fn evaluate(
    state: LocomotionState,
    jump: JumpPhase,
    intent: &MotionIntent,
    body: &BodyState,
) -> Transition {
    use crate::game::characters::state::LocomotionState::*;

    let mut next = state;
    let mut jump = jump;
    let mut effects = TickEffects {
        motion_multiplier: state.motion_multiplier(),
        ..TickEffects::default()
    };

    let moving = !is_zero3(body.velocity);

    match state {
        Idling => {
            if !body.grounded {
                next = Falling;
            } else if moving || intent.has_movement() {
                next = if intent.run_held { Running } else { Walking };
            }
        }

        Jumping => {
            if body.grounded {
                effects.impulse = Some(JumpImpulse::Jump);
                jump = JumpPhase::FirstJumpUsed;
                next = Falling;
            }
        }

        DoubleJumping => {
            effects.impulse = Some(JumpImpulse::DoubleJump);
            jump = JumpPhase::DoubleJumpUsed;
            next = Falling;
        }

        Falling => {
            // Air control still applies on the landing tick
            if body.grounded {
                next = Walking;
            }
        }

        Walking => {
            jump = JumpPhase::Grounded;
            if !moving && intent.has_movement() {
                next = Idling;
            } else if intent.run_held {
                next = Running;
            } else if intent.crouch_held {
                next = Crouching;
            } else if body.velocity.y < FALL_SPEED_THRESHOLD {
                next = Falling;
            }
        }

        Running => {
            if !intent.run_held {
                next = Walking;
            }
        }

        Crouching => {
            if intent.crouch_held {
                effects.posture = Some(Posture::Crouched);
            } else {
                effects.posture = Some(Posture::Standing);
                next = Walking;
            }
        }
    }

    // Landing or settling into a walk restores both jumps immediately
    if next == Walking {
        jump = JumpPhase::Grounded;
    }

    Transition {
        next,
        jump,
        effects,
    }
}

/// Owns the active state and jump phase of one character
#[derive(Debug, Clone)]
pub struct LocomotionMachine {
    state: LocomotionState,
    previous_state: LocomotionState,
    jump: JumpPhase,
    ticks_in_state: u64,
}

impl Default for LocomotionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl LocomotionMachine {
    pub fn new() -> Self {
        Self::with_state(LocomotionState::Idling)
    }

    pub fn with_state(state: LocomotionState) -> Self {
        Self {
            state,
            previous_state: state,
            jump: JumpPhase::Grounded,
            ticks_in_state: 0,
        }
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn previous_state(&self) -> LocomotionState {
        self.previous_state
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump
    }

    /// Ticks completed in the current state
    pub fn ticks_in_state(&self) -> u64 {
        self.ticks_in_state
    }

    /// Advance one fixed tick
    pub fn tick(&mut self, intent: &MotionIntent, body: &BodyState) -> TickEffects {
        let entered = self.state;

        let mut state = self.state;
        if intent.jump_edge {
            state = arbitrate_jump(state, self.jump);
        }

        let transition = evaluate(state, self.jump, intent, body);
        let mut effects = transition.effects;

        // A jump taken mid-crouch skips the Crouching arm; stand up anyway
        if entered == LocomotionState::Crouching && transition.next != LocomotionState::Crouching
        {
            effects.posture = Some(Posture::Standing);
        }

        self.jump = transition.jump;
        self.transition(transition.next);
        effects
    }

    /// Force a state, e.g. when respawning
    pub fn reset(&mut self, state: LocomotionState) {
        self.transition(state);
        self.jump = JumpPhase::Grounded;
    }

    fn transition(&mut self, next: LocomotionState) {
        if next != self.state {
            log::debug!("locomotion {} -> {}", self.state, next);
            self.previous_state = self.state;
            self.state = next;
            self.ticks_in_state = 0;
        } else {
            self.ticks_in_state += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::game::characters::state::LocomotionState::*;

    fn still() -> BodyState {
        BodyState::grounded(Vec3::ZERO)
    }

    fn forward() -> MotionIntent {
        MotionIntent::moving(Vec2::new(0.0, 1.0))
    }

    #[test]
    fn test_starts_idling() {
        let machine = LocomotionMachine::new();
        assert_eq!(machine.state(), Idling);
        assert_eq!(machine.jump_phase(), JumpPhase::Grounded);
    }

    #[test]
    fn test_exactly_one_state_after_every_tick() {
        let intents = [
            MotionIntent::idle(),
            forward().with_run(true),
            forward().with_crouch(true),
            MotionIntent::idle().with_jump(),
        ];
        let bodies = [
            still(),
            BodyState::airborne(Vec3::new(0.0, -2.0, 0.0)),
            BodyState::grounded(Vec3::new(1.0, 0.0, 0.0)),
        ];

        for start in LocomotionState::ALL {
            for intent in &intents {
                for body in &bodies {
                    let mut machine = LocomotionMachine::with_state(start);
                    machine.tick(intent, body);
                    assert!(LocomotionState::ALL.contains(&machine.state()));
                }
            }
        }
    }

    // Idling

    #[test]
    fn test_idle_stays_idle_without_input() {
        let t = evaluate(Idling, JumpPhase::Grounded, &MotionIntent::idle(), &still());
        assert_eq!(t.next, Idling);
        assert_eq!(t.effects, TickEffects::default());
    }

    #[test]
    fn test_idle_falls_when_not_grounded() {
        let t = evaluate(
            Idling,
            JumpPhase::Grounded,
            &forward(),
            &BodyState::airborne(Vec3::ZERO),
        );
        assert_eq!(t.next, Falling);
    }

    #[test]
    fn test_idle_to_walk_on_input() {
        let t = evaluate(Idling, JumpPhase::Grounded, &forward(), &still());
        assert_eq!(t.next, Walking);
    }

    #[test]
    fn test_idle_to_walk_when_pushed() {
        let body = BodyState::grounded(Vec3::new(0.3, 0.0, 0.0));
        let t = evaluate(Idling, JumpPhase::Grounded, &MotionIntent::idle(), &body);
        assert_eq!(t.next, Walking);
    }

    #[test]
    fn test_idle_with_run_held_goes_straight_to_running() {
        let t = evaluate(
            Idling,
            JumpPhase::Grounded,
            &forward().with_run(true),
            &still(),
        );
        assert_eq!(t.next, Running);
    }

    // Walking

    #[test]
    fn test_walking_without_input_or_velocity_keeps_walking() {
        let t = evaluate(Walking, JumpPhase::Grounded, &MotionIntent::idle(), &still());
        assert_eq!(t.next, Walking);
        assert_eq!(t.effects.motion_multiplier, Some(1.0));
    }

    #[test]
    fn test_walking_blocked_with_input_goes_idle() {
        let intent = MotionIntent::moving(Vec2::new(1.0, 0.0));
        let t = evaluate(Walking, JumpPhase::Grounded, &intent, &still());
        assert_eq!(t.next, Idling);
        // The walking force is still applied on the way out
        assert_eq!(t.effects.motion_multiplier, Some(1.0));
    }

    #[test]
    fn test_walking_precedence_run_over_crouch_over_fall() {
        let body = BodyState::airborne(Vec3::new(1.0, -1.0, 0.0));

        let t = evaluate(
            Walking,
            JumpPhase::Grounded,
            &forward().with_run(true).with_crouch(true),
            &body,
        );
        assert_eq!(t.next, Running);

        let t = evaluate(Walking, JumpPhase::Grounded, &forward().with_crouch(true), &body);
        assert_eq!(t.next, Crouching);

        let t = evaluate(Walking, JumpPhase::Grounded, &forward(), &body);
        assert_eq!(t.next, Falling);
    }

    #[test]
    fn test_walking_small_downward_drift_is_not_falling() {
        let body = BodyState::grounded(Vec3::new(1.0, -0.05, 0.0));
        let t = evaluate(Walking, JumpPhase::Grounded, &forward(), &body);
        assert_eq!(t.next, Walking);
    }

    #[test]
    fn test_walking_resets_jump_phase() {
        let body = BodyState::grounded(Vec3::new(1.0, 0.0, 0.0));
        let t = evaluate(Walking, JumpPhase::DoubleJumpUsed, &forward(), &body);
        assert_eq!(t.jump, JumpPhase::Grounded);
        assert!(t.jump.double_jump_available());
        assert!(!t.jump.first_jump_launched());
    }

    // Running / crouching

    #[test]
    fn test_running_until_released() {
        let body = BodyState::grounded(Vec3::new(2.0, 0.0, 0.0));
        let t = evaluate(Running, JumpPhase::Grounded, &forward().with_run(true), &body);
        assert_eq!(t.next, Running);
        assert_eq!(t.effects.motion_multiplier, Some(2.0));

        let t = evaluate(Running, JumpPhase::Grounded, &forward(), &body);
        assert_eq!(t.next, Walking);
    }

    #[test]
    fn test_crouching_holds_posture_until_released() {
        let t = evaluate(
            Crouching,
            JumpPhase::Grounded,
            &forward().with_crouch(true),
            &still(),
        );
        assert_eq!(t.next, Crouching);
        assert_eq!(t.effects.posture, Some(Posture::Crouched));
        assert_eq!(t.effects.motion_multiplier, Some(0.5));

        let t = evaluate(Crouching, JumpPhase::Grounded, &forward(), &still());
        assert_eq!(t.next, Walking);
        assert_eq!(t.effects.posture, Some(Posture::Standing));
    }

    // Jumping

    #[test]
    fn test_jumping_waits_for_ground() {
        let body = BodyState::airborne(Vec3::new(0.0, -1.0, 0.0));
        let t = evaluate(Jumping, JumpPhase::Grounded, &MotionIntent::idle(), &body);
        assert_eq!(t.next, Jumping);
        assert_eq!(t.effects.impulse, None);
        assert_eq!(t.effects.motion_multiplier, None);
    }

    #[test]
    fn test_jumping_launches_on_ground() {
        let t = evaluate(Jumping, JumpPhase::Grounded, &forward(), &still());
        assert_eq!(t.next, Falling);
        assert_eq!(t.jump, JumpPhase::FirstJumpUsed);
        assert_eq!(t.effects.impulse, Some(JumpImpulse::Jump));
        assert_eq!(t.effects.motion_multiplier, None);
    }

    #[test]
    fn test_double_jump_is_unconditional() {
        let body = BodyState::airborne(Vec3::new(0.0, 3.0, 0.0));
        let t = evaluate(DoubleJumping, JumpPhase::FirstJumpUsed, &forward(), &body);
        assert_eq!(t.next, Falling);
        assert_eq!(t.jump, JumpPhase::DoubleJumpUsed);
        assert_eq!(t.effects.impulse, Some(JumpImpulse::DoubleJump));
    }

    #[test]
    fn test_arbitrate_jump() {
        assert_eq!(arbitrate_jump(Walking, JumpPhase::Grounded), Jumping);
        assert_eq!(arbitrate_jump(Falling, JumpPhase::FirstJumpUsed), DoubleJumping);
        assert_eq!(arbitrate_jump(Falling, JumpPhase::DoubleJumpUsed), Falling);
    }

    #[test]
    fn test_jump_double_jump_then_ignored() {
        let mut machine = LocomotionMachine::with_state(Walking);
        let air = BodyState::airborne(Vec3::new(0.0, 2.0, 0.0));

        // First press on the ground launches in the same tick
        let effects = machine.tick(&MotionIntent::idle().with_jump(), &still());
        assert_eq!(effects.impulse, Some(JumpImpulse::Jump));
        assert_eq!(machine.state(), Falling);
        assert_eq!(machine.jump_phase(), JumpPhase::FirstJumpUsed);

        // Second press in the air
        let effects = machine.tick(&MotionIntent::idle().with_jump(), &air);
        assert_eq!(effects.impulse, Some(JumpImpulse::DoubleJump));
        assert_eq!(machine.state(), Falling);
        assert_eq!(machine.jump_phase(), JumpPhase::DoubleJumpUsed);

        // Third press before landing does nothing
        let effects = machine.tick(&MotionIntent::idle().with_jump(), &air);
        assert_eq!(effects.impulse, None);
        assert_eq!(machine.state(), Falling);
        assert_eq!(machine.jump_phase(), JumpPhase::DoubleJumpUsed);
    }

    #[test]
    fn test_jump_pressed_in_air_before_first_launch_waits_for_ground() {
        // Walked off a ledge: no jump launched yet
        let mut machine = LocomotionMachine::with_state(Falling);
        let air = BodyState::airborne(Vec3::new(0.0, -3.0, 0.0));

        let effects = machine.tick(&MotionIntent::idle().with_jump(), &air);
        assert_eq!(effects.impulse, None);
        assert_eq!(machine.state(), Jumping);

        let effects = machine.tick(&MotionIntent::idle(), &still());
        assert_eq!(effects.impulse, Some(JumpImpulse::Jump));
        assert_eq!(machine.state(), Falling);
    }

    // Falling

    #[test]
    fn test_landing_walks_and_restores_jumps_same_tick() {
        let mut machine = LocomotionMachine::with_state(Walking);
        let air = BodyState::airborne(Vec3::new(0.0, 2.0, 0.0));
        machine.tick(&MotionIntent::idle().with_jump(), &still());
        machine.tick(&MotionIntent::idle().with_jump(), &air);
        assert_eq!(machine.jump_phase(), JumpPhase::DoubleJumpUsed);

        machine.tick(&MotionIntent::idle(), &still());
        assert_eq!(machine.state(), Walking);
        assert_eq!(machine.jump_phase(), JumpPhase::Grounded);
        assert!(machine.jump_phase().double_jump_available());
    }

    #[test]
    fn test_landing_tick_still_applies_air_control() {
        let t = evaluate(Falling, JumpPhase::FirstJumpUsed, &forward(), &still());
        assert_eq!(t.next, Walking);
        assert_eq!(t.effects.motion_multiplier, Some(0.7));
    }

    #[test]
    fn test_falling_applies_air_control() {
        let body = BodyState::airborne(Vec3::new(0.0, -4.0, 0.0));
        let t = evaluate(Falling, JumpPhase::FirstJumpUsed, &forward(), &body);
        assert_eq!(t.next, Falling);
        assert_eq!(t.effects.motion_multiplier, Some(0.7));
    }

    #[test]
    fn test_walking_invariant_holds_at_start_of_next_tick() {
        let mut machine = LocomotionMachine::with_state(Walking);
        let body = BodyState::grounded(Vec3::new(1.0, 0.0, 0.0));
        for _ in 0..5 {
            machine.tick(&forward(), &body);
            assert_eq!(machine.state(), Walking);
            assert!(machine.jump_phase().double_jump_available());
            assert!(!machine.jump_phase().first_jump_launched());
        }
    }

    // Crouch exits

    #[test]
    fn test_jump_while_crouched_stands_up() {
        let mut machine = LocomotionMachine::with_state(Crouching);
        let effects = machine.tick(&forward().with_crouch(true).with_jump(), &still());
        assert_eq!(machine.state(), Falling);
        assert_eq!(effects.posture, Some(Posture::Standing));
        assert_eq!(effects.impulse, Some(JumpImpulse::Jump));
    }

    #[test]
    fn test_previous_state_and_tick_count() {
        let mut machine = LocomotionMachine::new();
        machine.tick(&forward(), &still());
        assert_eq!(machine.state(), Walking);
        assert_eq!(machine.previous_state(), Idling);
        assert_eq!(machine.ticks_in_state(), 0);

        let body = BodyState::grounded(Vec3::new(1.0, 0.0, 0.0));
        machine.tick(&forward(), &body);
        machine.tick(&forward(), &body);
        assert_eq!(machine.ticks_in_state(), 2);
    }

    #[test]
    fn test_reset() {
        let mut machine = LocomotionMachine::with_state(Walking);
        machine.tick(&MotionIntent::idle().with_jump(), &still());
        machine.reset(Falling);
        assert_eq!(machine.state(), Falling);
        assert_eq!(machine.jump_phase(), JumpPhase::Grounded);
    }
}
