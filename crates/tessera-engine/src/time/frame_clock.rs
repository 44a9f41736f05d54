use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots, one clock per window.
///
/// Delta time is clamped so a stalled or minimized window does not hand a
/// huge step to the next frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock clamped to `[100µs, 250ms]`.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. after the window was hidden.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(start: Instant) -> FrameClock {
        let mut c = FrameClock::new();
        c.last = start;
        c
    }

    #[test]
    fn frame_index_counts_from_zero() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(15)).frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(30)).frame_index, 1);
    }

    #[test]
    fn dt_is_measured_between_ticks() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(15));
        assert!((ft.dt - 0.015).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped_after_a_stall() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        let ft = c.tick_at(t0 + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn dt_has_a_floor() {
        let t0 = Instant::now();
        let mut c = clock_at(t0);
        let ft = c.tick_at(t0);
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }
}
