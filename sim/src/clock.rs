//! Wall-clock access behind a trait, so time-derived readouts can be
//! rendered with a fixed time under test.

use chrono::{Local, NaiveTime};

/// Source of the current time-of-day, at minute resolution for display.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// The real local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}
