//! Periodic tick scheduling for the dashboard's three update triggers.
//!
//! Rather than wiring update logic straight into UI timer callbacks, the
//! triggers are an explicit component the main loop polls, so tick cadence
//! and re-arm behavior are testable without any window or event loop: time
//! is passed in as a [`Duration`] since scheduler start.

use core::time::Duration;

use heapless::Vec;

// =============================================================================
// Tick Triggers
// =============================================================================

/// The three periodic triggers driving the dashboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tick {
    /// Every 2 s: advance the slideshow and redraw the obstacle distance.
    Slide,
    /// Every 1 s: refresh clock/arrival and step the speed sawtooth.
    Second,
    /// Every 60 s: drain one unit of power.
    Power,
}

/// Number of triggers; sizes the scheduler's deadline table.
pub const TICK_COUNT: usize = 3;

impl Tick {
    /// All triggers, in dispatch order within a single poll.
    pub const ALL: [Self; TICK_COUNT] = [Self::Slide, Self::Second, Self::Power];

    /// Fixed firing period of this trigger.
    #[inline]
    pub const fn period(self) -> Duration {
        match self {
            Self::Slide => Duration::from_millis(2000),
            Self::Second => Duration::from_millis(1000),
            Self::Power => Duration::from_millis(60_000),
        }
    }

    /// Trigger name for log lines.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Second => "second",
            Self::Power => "power",
        }
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Tracks the next deadline of each trigger.
///
/// A trigger fires at most once per [`poll`](Self::poll), and its deadline
/// is re-armed from the poll time, not the missed deadline. A handler that
/// runs long therefore delays its own next tick instead of producing a
/// catch-up burst, which is the run-to-completion guarantee the tick
/// handlers rely on.
pub struct Scheduler {
    deadlines: [Duration; TICK_COUNT],
}

impl Scheduler {
    /// Create a scheduler at time zero; every trigger first fires one full
    /// period after start.
    pub const fn new() -> Self {
        let mut deadlines = [Duration::ZERO; TICK_COUNT];
        let mut i = 0;
        while i < TICK_COUNT {
            deadlines[i] = Tick::ALL[i].period();
            i += 1;
        }
        Self { deadlines }
    }

    /// Collect the triggers due at `now` (time since scheduler start) and
    /// re-arm each to `now + period`.
    ///
    /// The returned order is fixed (Slide, Second, Power) but carries no
    /// semantic weight: the triggers touch disjoint state.
    pub fn poll(&mut self, now: Duration) -> Vec<Tick, TICK_COUNT> {
        let mut due = Vec::new();
        for (deadline, tick) in self.deadlines.iter_mut().zip(Tick::ALL) {
            if now >= *deadline {
                *deadline = now + tick.period();
                // Capacity matches the trigger count; push cannot fail
                let _ = due.push(tick);
            }
        }
        due
    }
}

impl Default for Scheduler {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_periods() {
        assert_eq!(Tick::Slide.period(), ms(2000));
        assert_eq!(Tick::Second.period(), ms(1000));
        assert_eq!(Tick::Power.period(), ms(60_000));
    }

    #[test]
    fn test_nothing_due_at_start() {
        let mut sched = Scheduler::new();
        assert!(sched.poll(Duration::ZERO).is_empty());
        assert!(sched.poll(ms(999)).is_empty());
    }

    #[test]
    fn test_second_fires_first() {
        let mut sched = Scheduler::new();
        let due = sched.poll(ms(1000));
        assert_eq!(due.as_slice(), [Tick::Second]);
    }

    #[test]
    fn test_slide_and_second_coincide_at_two_seconds() {
        let mut sched = Scheduler::new();
        assert_eq!(sched.poll(ms(1000)).as_slice(), [Tick::Second]);
        assert_eq!(sched.poll(ms(2000)).as_slice(), [Tick::Slide, Tick::Second]);
    }

    #[test]
    fn test_power_fires_at_one_minute() {
        let mut sched = Scheduler::new();
        // Drain the faster triggers just before the minute mark
        sched.poll(ms(59_999));
        let due = sched.poll(ms(60_000));
        assert!(due.contains(&Tick::Power));
    }

    #[test]
    fn test_trigger_fires_once_per_poll_even_when_late() {
        let mut sched = Scheduler::new();
        // Poll arrives 2.5 periods late for the second tick: one firing,
        // not a burst of three
        let due = sched.poll(ms(3500));
        assert_eq!(due.iter().filter(|t| **t == Tick::Second).count(), 1);
    }

    #[test]
    fn test_deadline_rearms_from_poll_time() {
        let mut sched = Scheduler::new();
        sched.poll(ms(3500));
        // Re-armed to 4500, so 4000 is quiet
        assert!(sched.poll(ms(4000)).is_empty());
        assert_eq!(sched.poll(ms(4500)).as_slice(), [Tick::Second]);
    }

    #[test]
    fn test_steady_cadence() {
        let mut sched = Scheduler::new();
        let mut second_fires = 0;
        let mut slide_fires = 0;
        for t in (0..=10_000).step_by(100) {
            for tick in sched.poll(ms(t)) {
                match tick {
                    Tick::Second => second_fires += 1,
                    Tick::Slide => slide_fires += 1,
                    Tick::Power => {}
                }
            }
        }
        assert_eq!(second_fires, 10);
        assert_eq!(slide_fires, 5);
    }
}
