//! Pure update rules for the dashboard state.
//!
//! Every function here is a total transform of its inputs: bounds are
//! enforced by clamping, never by failure. The only non-deterministic rule
//! takes its random source as a parameter so callers (and tests) control it.

use chrono::{NaiveTime, TimeDelta};
use embedded_graphics::pixelcolor::Rgb888;
use rand::Rng;

use crate::theme::{CAUTION_AMBER, CLEAR_GREEN, DANGER_RED};
use crate::thresholds::{
    DISTANCE_SAMPLE_MAX,
    DISTANCE_SAMPLE_MIN,
    OBSTACLE_CAUTION_MAX,
    OBSTACLE_DANGER_MAX,
    POWER_CAPACITY,
    SPEED_MAX,
    SPEED_MIN,
};

// =============================================================================
// Obstacle Classification
// =============================================================================

/// Severity of the next-obstacle warning, derived from distance alone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObstacleSeverity {
    /// Obstacle within 10 m.
    Danger,
    /// Obstacle within 15 m.
    Caution,
    /// No obstacle nearby.
    Clear,
}

impl ObstacleSeverity {
    /// Instruction-card message for this severity.
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Danger => "DANGER: Obstacle within 10 m",
            Self::Caution => "CAUTION: Obstacle approaching",
            Self::Clear => "ALL CLEAR",
        }
    }

    /// Instruction-card background color for this severity.
    #[inline]
    pub const fn color(self) -> Rgb888 {
        match self {
            Self::Danger => DANGER_RED,
            Self::Caution => CAUTION_AMBER,
            Self::Clear => CLEAR_GREEN,
        }
    }
}

/// Classify an obstacle distance into a warning severity.
///
/// Checks run in ascending order with inclusive lower bounds: strictly
/// below 10 m is DANGER, 10 m up to (not including) 15 m is CAUTION,
/// 15 m and beyond is ALL CLEAR.
#[inline]
pub fn classify_obstacle(distance_m: f32) -> ObstacleSeverity {
    if distance_m < OBSTACLE_DANGER_MAX {
        ObstacleSeverity::Danger
    } else if distance_m < OBSTACLE_CAUTION_MAX {
        ObstacleSeverity::Caution
    } else {
        ObstacleSeverity::Clear
    }
}

// =============================================================================
// Speed Sawtooth
// =============================================================================

/// Advance the speed oscillation by one step.
///
/// The increment is applied first, then the direction is re-evaluated on
/// the updated value, so both bounds are reached and held for exactly one
/// step before the direction reverses. Starting inside `[40, 70]` the
/// speed never leaves that range.
#[inline]
pub const fn advance_speed(speed_kmh: i32, direction: i32) -> (i32, i32) {
    let new_speed = speed_kmh + direction;
    let new_direction = if new_speed >= SPEED_MAX {
        -1
    } else if new_speed <= SPEED_MIN {
        1
    } else {
        direction
    };
    (new_speed, new_direction)
}

// =============================================================================
// Power Drain
// =============================================================================

/// Drain one unit of power, saturating at zero.
#[inline]
pub const fn drain_power(power: i32) -> i32 {
    if power > 0 { power - 1 } else { 0 }
}

/// Remaining power as a truncated percentage of capacity.
#[inline]
pub const fn power_percent(power: i32) -> i32 {
    power * 100 / POWER_CAPACITY
}

// =============================================================================
// Obstacle Distance Sampling
// =============================================================================

/// Draw a fresh synthetic obstacle distance, uniform over `[5.0, 20.0)`.
///
/// The random source is injected so the slide tick stays deterministic
/// under test (seed a [`rand::rngs::StdRng`] and the sequence is fixed).
#[inline]
pub fn next_random_distance<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(DISTANCE_SAMPLE_MIN..DISTANCE_SAMPLE_MAX)
}

// =============================================================================
// Arrival Time
// =============================================================================

/// Compute the arrival time-of-day: `now` plus the fixed offset, wrapping
/// at midnight. The date component is dropped; the display only ever shows
/// hours and minutes.
#[inline]
pub fn arrival_time(now: NaiveTime, offset_secs: i64) -> NaiveTime {
    let (arrival, _) = now.overflowing_add_signed(TimeDelta::seconds(offset_secs));
    arrival
}

// =============================================================================
// Slideshow
// =============================================================================

/// Advance the slideshow to the next slide, cycling modulo the slide
/// count. With no slides loaded this is a no-op, not an error.
#[inline]
pub const fn advance_slide(index: usize, slide_count: usize) -> usize {
    if slide_count > 0 { (index + 1) % slide_count } else { index }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::thresholds::POWER_START;

    #[test]
    fn test_advance_speed_stays_in_bounds() {
        let mut speed = SPEED_MIN;
        let mut dir = 1;
        for _ in 0..1000 {
            (speed, dir) = advance_speed(speed, dir);
            assert!(speed >= SPEED_MIN, "speed {speed} fell below lower bound");
            assert!(speed <= SPEED_MAX, "speed {speed} exceeded upper bound");
            assert!(dir == 1 || dir == -1);
        }
    }

    #[test]
    fn test_advance_speed_flips_only_at_bounds() {
        let mut speed = SPEED_MIN;
        let mut dir = 1;
        for _ in 0..1000 {
            let prev_dir = dir;
            (speed, dir) = advance_speed(speed, dir);
            if dir != prev_dir {
                assert!(
                    speed == SPEED_MIN || speed == SPEED_MAX,
                    "direction flipped at {speed}, away from the bounds"
                );
            }
        }
    }

    #[test]
    fn test_advance_speed_holds_peak_for_one_step() {
        // 69 climbing reaches 70 and reverses; the next step comes back down
        assert_eq!(advance_speed(69, 1), (70, -1));
        assert_eq!(advance_speed(70, -1), (69, -1));
        // Same at the bottom
        assert_eq!(advance_speed(41, -1), (40, 1));
        assert_eq!(advance_speed(40, 1), (41, 1));
    }

    #[test]
    fn test_classify_obstacle_boundaries() {
        assert_eq!(classify_obstacle(9.99), ObstacleSeverity::Danger);
        assert_eq!(classify_obstacle(10.0), ObstacleSeverity::Caution);
        assert_eq!(classify_obstacle(14.99), ObstacleSeverity::Caution);
        assert_eq!(classify_obstacle(15.0), ObstacleSeverity::Clear);
    }

    #[test]
    fn test_classify_obstacle_extremes() {
        assert_eq!(classify_obstacle(0.0), ObstacleSeverity::Danger);
        assert_eq!(classify_obstacle(54_000.0), ObstacleSeverity::Clear);
    }

    #[test]
    fn test_severity_messages() {
        assert_eq!(ObstacleSeverity::Danger.message(), "DANGER: Obstacle within 10 m");
        assert_eq!(ObstacleSeverity::Caution.message(), "CAUTION: Obstacle approaching");
        assert_eq!(ObstacleSeverity::Clear.message(), "ALL CLEAR");
    }

    #[test]
    fn test_drain_power_saturates_at_zero() {
        let mut power = POWER_START;
        for _ in 0..POWER_CAPACITY + 50 {
            power = drain_power(power);
            assert!(power >= 0, "power went negative");
        }
        assert_eq!(power, 0);
        assert_eq!(drain_power(0), 0, "drain at zero must hold at zero");
    }

    #[test]
    fn test_power_percent_endpoints() {
        assert_eq!(power_percent(0), 0);
        assert_eq!(power_percent(POWER_CAPACITY), 100);
    }

    #[test]
    fn test_power_percent_truncates() {
        // 249/300 = 0.83 -> 83, not 84
        assert_eq!(power_percent(249), 83);
        assert_eq!(power_percent(1), 0);
        assert_eq!(power_percent(299), 99);
    }

    #[test]
    fn test_drain_sequence_from_startup() {
        let mut power = POWER_START;
        power = drain_power(power);
        assert_eq!(power, 249);
        assert_eq!(power_percent(power), 83);

        for _ in 0..POWER_START - 1 {
            power = drain_power(power);
        }
        assert_eq!(power, 0);
        assert_eq!(power_percent(power), 0);

        // One more application past exhaustion changes nothing
        assert_eq!(drain_power(power), 0);
    }

    #[test]
    fn test_random_distance_range_and_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = 10_000;
        let mut sum = 0.0f64;
        for _ in 0..samples {
            let d = next_random_distance(&mut rng);
            assert!(d >= DISTANCE_SAMPLE_MIN, "sample {d} below range");
            assert!(d < DISTANCE_SAMPLE_MAX, "sample {d} at or above range");
            sum += f64::from(d);
        }
        let mean = sum / f64::from(samples);
        assert!((mean - 12.5).abs() < 0.2, "mean {mean} too far from 12.5");
    }

    #[test]
    fn test_arrival_time_plain() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let arrival = arrival_time(noon, 31 * 60);
        assert_eq!((arrival.hour(), arrival.minute()), (12, 31));
    }

    #[test]
    fn test_arrival_time_wraps_at_midnight() {
        let late = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
        let arrival = arrival_time(late, 31 * 60);
        assert_eq!((arrival.hour(), arrival.minute()), (0, 21));
    }

    #[test]
    fn test_advance_slide_cycles() {
        assert_eq!(advance_slide(2, 5), 3);
        assert_eq!(advance_slide(4, 5), 0);
    }

    #[test]
    fn test_advance_slide_empty_is_noop() {
        assert_eq!(advance_slide(0, 0), 0);
    }
}
