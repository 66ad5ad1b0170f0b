use std::time::Instant;

/// Counts frames and refreshes the average rate once per second.
///
/// The window is reset-on-close: `fps()` reports the average over the
/// previous full window and stays unchanged until the next window closes.
/// If frames arrive slower than once per second the window simply spans
/// longer before closing.
pub struct FpsCounter {
    window_start: Instant,
    frame_count: u32,
    current_rate: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frame_count: 0,
            current_rate: 0.0,
        }
    }

    /// Records one rendered/processed frame.
    pub fn frame(&mut self) {
        self.frame_at(Instant::now());
    }

    fn frame_at(&mut self, now: Instant) {
        self.frame_count += 1;
        let elapsed = now.duration_since(self.window_start).as_secs_f32();

        if elapsed >= 1.0 {
            self.current_rate = self.frame_count as f32 / elapsed;
            self.window_start = now;
            self.frame_count = 0;
        }
    }

    /// Discards all accumulated state, as if freshly created.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Latest computed frames per second. Stays at 0.0 until the first
    /// window closes.
    pub fn fps(&self) -> f32 {
        self.current_rate
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn counter_at(start: Instant) -> FpsCounter {
        FpsCounter {
            window_start: start,
            frame_count: 0,
            current_rate: 0.0,
        }
    }

    #[test]
    fn starts_at_zero() {
        let counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.frame_count, 0);
    }

    #[test]
    fn rate_is_idempotent_between_frames() {
        let counter = FpsCounter::new();
        assert_eq!(counter.fps(), counter.fps());
    }

    #[test]
    fn counts_frames_until_window_closes() {
        let start = Instant::now();
        let mut counter = counter_at(start);

        for i in 1..=5 {
            counter.frame_at(start + Duration::from_millis(i * 100));
        }

        assert_eq!(counter.frame_count, 5);
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn single_frame_inside_window_reports_zero() {
        let start = Instant::now();
        let mut counter = counter_at(start);

        counter.frame_at(start + Duration::from_millis(500));

        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.frame_count, 1);
    }

    #[test]
    fn ten_frames_per_second_reports_ten() {
        let start = Instant::now();
        let mut counter = counter_at(start);

        // One frame every 0.1s; the 10th lands exactly on the window edge.
        for i in 1..=10 {
            counter.frame_at(start + Duration::from_millis(i * 100));
        }

        assert!((counter.fps() - 10.0).abs() < 1e-3);
        assert_eq!(counter.frame_count, 0);
        assert_eq!(counter.window_start, start + Duration::from_secs(1));
    }

    #[test]
    fn rate_is_stale_until_next_window_closes() {
        let start = Instant::now();
        let mut counter = counter_at(start);

        for i in 1..=10 {
            counter.frame_at(start + Duration::from_millis(i * 100));
        }
        let closed = counter.fps();

        // Frames inside the new window leave the reported rate untouched.
        counter.frame_at(start + Duration::from_millis(1100));
        counter.frame_at(start + Duration::from_millis(1200));
        assert_eq!(counter.fps(), closed);
    }

    #[test]
    fn slow_frames_average_over_the_longer_window() {
        let start = Instant::now();
        let mut counter = counter_at(start);

        // One frame after 4s closes a 4-second window.
        counter.frame_at(start + Duration::from_secs(4));

        assert!((counter.fps() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn reset_returns_to_zero() {
        let start = Instant::now();
        let mut counter = counter_at(start);

        for i in 1..=10 {
            counter.frame_at(start + Duration::from_millis(i * 100));
        }
        assert!(counter.fps() > 0.0);

        counter.reset();
        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.frame_count, 0);
    }
}
