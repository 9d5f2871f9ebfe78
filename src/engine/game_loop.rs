/// Game loop timing and control system
///
/// Implements a fixed timestep game loop with variable rendering.
/// Wall-clock frame time only feeds the accumulator; gameplay sees a
/// simulation clock that advances by exactly one timestep per executed tick,
/// so a long stall or a pause never reaches the game as a large delta.
use std::time::{Duration, Instant};

use crate::core::time::Millis;

/// Length of one tick on the simulation clock
pub const FIXED_TIMESTEP_MS: Millis = 16;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_millis(FIXED_TIMESTEP_MS);

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_CATCH_UP_STEPS: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated wall time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Simulation clock, advanced only by `step`
    sim_time: Millis,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    update_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop with the simulation clock at zero
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            sim_time: 0,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.begin_frame_with(frame_time)
    }

    /// Begin a frame that took `frame_time` of wall time
    pub fn begin_frame_with(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_CATCH_UP_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Whatever could not be caught up is dropped rather than carried over
        if updates == MAX_CATCH_UP_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!("Dropping {:?} of backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        updates
    }

    /// Advance the simulation clock by one tick and return the new time
    pub fn step(&mut self) -> Millis {
        self.sim_time += FIXED_TIMESTEP_MS;
        self.update_count += 1;
        self.sim_time
    }

    /// Current simulation time
    pub fn now(&self) -> Millis {
        self.sim_time
    }

    /// Get the interpolation alpha for smooth rendering between ticks
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP_DURATION.as_secs_f32()
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused at {}ms", self.sim_time);
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed at {}ms", self.sim_time);
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
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
    use approx::assert_relative_eq;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert_eq!(game_loop.now(), 0);
        assert!(!game_loop.is_paused());
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
    fn test_one_tick_per_timestep() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.begin_frame_with(Duration::from_millis(10)), 0);
        assert_eq!(game_loop.begin_frame_with(Duration::from_millis(10)), 1);
        assert_eq!(game_loop.begin_frame_with(Duration::from_millis(32)), 2);
    }

    #[test]
    fn test_step_advances_sim_clock() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.step(), 16);
        assert_eq!(game_loop.step(), 32);
        assert_eq!(game_loop.now(), 32);
        assert_eq!(game_loop.update_count(), 2);
    }

    #[test]
    fn test_paused_no_updates() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();
        assert_eq!(game_loop.begin_frame_with(Duration::from_millis(500)), 0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_resume_has_no_burst() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame_with(Duration::from_millis(12));
        game_loop.pause();
        game_loop.begin_frame_with(Duration::from_secs(30));
        game_loop.resume();
        assert_eq!(game_loop.begin_frame_with(Duration::from_millis(8)), 0);
        assert_eq!(game_loop.now(), 0);
    }

    #[test]
    fn test_max_catch_up_steps_limit() {
        let mut game_loop = GameLoop::new();
        let updates = game_loop.begin_frame_with(Duration::from_millis(300));
        assert_eq!(updates, MAX_CATCH_UP_STEPS);
        // Backlog beyond the cap is dropped
        assert_eq!(game_loop.begin_frame_with(Duration::ZERO), 0);
    }

    #[test]
    fn test_alpha_range() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame_with(Duration::from_millis(8));
        assert_relative_eq!(game_loop.alpha(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_fps_updates_every_ten_frames() {
        let mut game_loop = GameLoop::new();
        for _ in 0..10 {
            game_loop.begin_frame_with(Duration::from_millis(20));
        }
        assert_relative_eq!(game_loop.fps(), 50.0, epsilon = 0.01);
    }
}
