use std::time::{Duration, Instant};

/// Fixed-period timer for paced redraws.
///
/// Fires at most once per [`poll_at`](Self::poll_at). When the owner falls
/// behind by more than one period the missed ticks are dropped rather than
/// delivered in a burst, and the schedule restarts from the late instant.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    deadline: Instant,
}

impl IntervalTimer {
    /// Creates a timer whose first tick is one `period` after `now`.
    ///
    /// A zero period is raised to 1ms so the event loop never spins.
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            deadline: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Instant of the next tick.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns `true` if the timer fired at `now`, advancing the deadline.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        let next = self.deadline + self.period;
        self.deadline = if next <= now { now + self.period } else { next };
        true
    }

    /// Returns `true` if the timer fired, using the current instant.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_15: Duration = Duration::from_millis(15);

    #[test]
    fn does_not_fire_before_deadline() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(MS_15, t0);
        assert!(!timer.poll_at(t0));
        assert!(!timer.poll_at(t0 + Duration::from_millis(14)));
    }

    #[test]
    fn fires_at_deadline_and_reschedules_on_the_grid() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(MS_15, t0);

        // Slightly late wakeups keep the original cadence.
        assert!(timer.poll_at(t0 + Duration::from_millis(16)));
        assert_eq!(timer.deadline(), t0 + Duration::from_millis(30));

        assert!(!timer.poll_at(t0 + Duration::from_millis(20)));
        assert!(timer.poll_at(t0 + Duration::from_millis(30)));
        assert_eq!(timer.deadline(), t0 + Duration::from_millis(45));
    }

    #[test]
    fn fires_once_after_a_long_stall() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(MS_15, t0);

        let late = t0 + Duration::from_millis(200);
        assert!(timer.poll_at(late));
        assert!(!timer.poll_at(late));
        assert_eq!(timer.deadline(), late + MS_15);
    }

    #[test]
    fn zero_period_is_raised() {
        let t0 = Instant::now();
        let timer = IntervalTimer::new(Duration::ZERO, t0);
        assert_eq!(timer.period(), Duration::from_millis(1));
        assert_eq!(timer.deadline(), t0 + Duration::from_millis(1));
    }
}
