//! Frame pacing for the per-frame tick
//!
//! The demo ticks once per displayed frame at a nominal rate (24 fps).
//! Each tick is handed the wall-clock milliseconds since the previous tick,
//! so a stalled frame shows up as one large delta rather than a burst of
//! catch-up ticks; the animation clocks absorb it.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 48;

/// Frame pacing state
pub struct GameLoop {
    /// Time between two ticks at the target rate
    frame_interval: Duration,

    /// Time of the last tick
    last_frame_time: Instant,

    /// When the next tick is due
    next_frame_at: Instant,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new frame pacer targeting `target_fps`
    pub fn new(target_fps: f32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a frame pacer whose clock starts at `now`
    pub fn starting_at(target_fps: f32, now: Instant) -> Self {
        let nanos = (1_000_000_000.0 / target_fps.max(1.0) as f64).round() as u64;
        let frame_interval = Duration::from_nanos(nanos);
        Self {
            frame_interval,
            last_frame_time: now,
            next_frame_at: now,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Whether the next tick is due at `now`
    pub fn is_frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame_at
    }

    /// When the next tick is due
    pub fn next_frame_at(&self) -> Instant {
        self.next_frame_at
    }

    /// Begin a tick at `now`; returns milliseconds since the previous tick
    pub fn begin_frame(&mut self, now: Instant) -> f32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // Schedule the next tick; if we fell behind, restart from now
        self.next_frame_at += self.frame_interval;
        if self.next_frame_at <= now {
            self.next_frame_at = now + self.frame_interval;
        }

        frame_time.as_secs_f32() * 1000.0
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Update FPS calculation
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TICK: Duration = Duration::from_millis(40);

    #[test]
    fn test_game_loop_creation() {
        let start = Instant::now();
        let game_loop = GameLoop::starting_at(24.0, start);
        assert_eq!(game_loop.frame_count(), 0);
        assert!(game_loop.is_frame_due(start), "first tick is due immediately");
    }

    #[test]
    fn test_frame_interval_matches_target() {
        let game_loop = GameLoop::new(24.0);
        assert_relative_eq!(
            game_loop.frame_interval.as_secs_f32(),
            1.0 / 24.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_begin_frame_reports_elapsed_milliseconds() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(25.0, start);

        game_loop.begin_frame(start);
        let delta = game_loop.begin_frame(start + TICK);
        assert_relative_eq!(delta, 40.0, epsilon = 1e-3);
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_next_tick_is_one_interval_later() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(25.0, start);

        game_loop.begin_frame(start);
        assert!(!game_loop.is_frame_due(start + Duration::from_millis(39)));
        assert!(game_loop.is_frame_due(start + TICK));
    }

    #[test]
    fn test_stall_reschedules_from_now_without_burst() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(25.0, start);
        game_loop.begin_frame(start);

        // Host stalls for half a second
        let late = start + Duration::from_millis(500);
        let delta = game_loop.begin_frame(late);
        assert_relative_eq!(delta, 500.0, epsilon = 1e-3);

        // Only one tick for the stall; next one is a full interval away
        assert!(!game_loop.is_frame_due(late));
        assert_eq!(game_loop.next_frame_at(), late + TICK);
    }

    #[test]
    fn test_fps_average() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(25.0, start);

        let mut now = start;
        game_loop.begin_frame(now);
        for _ in 0..19 {
            now += TICK;
            game_loop.begin_frame(now);
        }

        // 19 ticks of 40ms plus the zero-length first tick
        assert!(game_loop.fps() > 23.0 && game_loop.fps() < 27.0);
    }
}
