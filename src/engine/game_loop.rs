/// Fixed timestep scheduling
///
/// Physics and the locomotion machine advance in fixed 1/50 s ticks while
/// input sampling and look run once per rendered frame. Each frame reports how
/// many fixed ticks are owed.
use std::time::{Duration, Instant};

/// Fixed physics/update rate (50 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 50.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_millis(20);

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total fixed updates executed
    update_count: u64,

    /// Time since last frame, in seconds
    frame_delta: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            update_count: 0,
            frame_delta: 0.0,
        }
    }

    /// Begin a new frame from the wall clock, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Advance by an explicit frame duration, returns the number of fixed updates to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.frame_delta = frame_time.as_secs_f32();

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop the backlog we refused to simulate
        if updates == MAX_PHYSICS_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Frame took {:?}, dropping {:?} of simulation time",
                frame_time,
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get the fixed timestep for physics updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get the time since the previous frame (in seconds)
    pub fn frame_delta(&self) -> f32 {
        self.frame_delta
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_fixed_timestep() {
        let game_loop = GameLoop::new();
        assert!((game_loop.fixed_timestep() - 0.02).abs() < 0.0001);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_paused_no_updates() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();

        assert_eq!(game_loop.advance(Duration::from_millis(100)), 0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut game_loop = GameLoop::new();

        // Two 12ms frames add up to one 20ms tick
        assert_eq!(game_loop.advance(Duration::from_millis(12)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(12)), 1);
        assert_eq!(game_loop.update_count(), 1);
    }

    #[test]
    fn test_exact_multiple_of_timestep() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(60)), 3);
        assert_eq!(game_loop.update_count(), 3);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let mut game_loop = GameLoop::new();

        // 300ms would allow 15 updates
        assert_eq!(game_loop.advance(Duration::from_millis(300)), MAX_PHYSICS_STEPS);

        // The dropped backlog must not leak into the next frame
        assert_eq!(game_loop.advance(Duration::from_millis(1)), 0);
    }

    #[test]
    fn test_frame_delta() {
        let mut game_loop = GameLoop::new();
        game_loop.advance(Duration::from_millis(16));
        assert!((game_loop.frame_delta() - 0.016).abs() < 1e-6);
    }
}
