use std::time::{Duration, Instant};

/// Explicit handle for the repeating tick schedule.
///
/// The controller owns at most one of these; rescheduling always drops
/// the old handle and creates a new one, so two schedules can never run
/// side by side. Cancelling is dropping the handle.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    next_fire: Instant,
}

impl TickTimer {
    /// Schedules the first fire one full interval after `now`.
    #[must_use]
    pub fn schedule(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_fire: now + interval,
        }
    }

    /// Reports whether the timer is due and, if so, re-arms it one
    /// interval from `now`. Fires at most once per call; a long stall
    /// does not produce a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_fire {
            return false;
        }

        self.next_fire = now + self.interval;
        true
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickTimer;

    #[test]
    fn does_not_fire_before_the_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::schedule(Duration::from_millis(200), start);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(199)));
        assert!(timer.poll(start + Duration::from_millis(200)));
    }

    #[test]
    fn rearms_relative_to_the_fire_time() {
        let start = Instant::now();
        let mut timer = TickTimer::schedule(Duration::from_millis(100), start);

        assert!(timer.poll(start + Duration::from_millis(150)));
        assert!(!timer.poll(start + Duration::from_millis(200)));
        assert!(timer.poll(start + Duration::from_millis(250)));
    }

    #[test]
    fn fires_at_most_once_per_poll() {
        let start = Instant::now();
        let mut timer = TickTimer::schedule(Duration::from_millis(50), start);

        // Three intervals elapse unobserved; only one tick comes out.
        assert!(timer.poll(start + Duration::from_millis(170)));
        assert!(!timer.poll(start + Duration::from_millis(171)));
    }
}
