//! Centralized bounds and threshold configuration for the dashboard state.
//!
//! All values are compile-time constants with validation assertions.
//! This keeps the update rules, the instruction-card classification, and
//! the widgets reading from one place.
//!
//! # Compile-Time Validation
//!
//! Each group includes `const` assertions that verify ordering at compile
//! time. If bounds are configured incorrectly (e.g., `SPEED_MAX < SPEED_MIN`),
//! compilation fails with a clear error.

// =============================================================================
// Speed Bounds
// =============================================================================

/// Lower bound of the simulated speed sawtooth (km/h). The oscillation
/// reverses to climbing once the speed reaches this value.
pub const SPEED_MIN: i32 = 40;

/// Upper bound of the simulated speed sawtooth (km/h). The oscillation
/// reverses to falling once the speed reaches this value.
pub const SPEED_MAX: i32 = 70;

const _: () = assert!(SPEED_MIN < SPEED_MAX);

// =============================================================================
// Power Bounds
// =============================================================================

/// Full capacity of the power gauge. Percent display is relative to this.
pub const POWER_CAPACITY: i32 = 300;

/// Power level at startup. Drains by one unit per power tick, floor at 0.
pub const POWER_START: i32 = 250;

const _: () = assert!(POWER_START <= POWER_CAPACITY);
const _: () = assert!(POWER_START > 0);

// =============================================================================
// Obstacle Distance Thresholds
// =============================================================================

/// Distances below this are classified DANGER (red instruction card).
pub const OBSTACLE_DANGER_MAX: f32 = 10.0;

/// Distances below this (and at/above [`OBSTACLE_DANGER_MAX`]) are
/// classified CAUTION (amber card). At/above this: ALL CLEAR (green card).
pub const OBSTACLE_CAUTION_MAX: f32 = 15.0;

const _: () = assert!(OBSTACLE_DANGER_MAX < OBSTACLE_CAUTION_MAX);

// =============================================================================
// Obstacle Distance Sampling
// =============================================================================

/// Lower bound (inclusive) of the synthetic obstacle distance sample.
pub const DISTANCE_SAMPLE_MIN: f32 = 5.0;

/// Upper bound (exclusive) of the synthetic obstacle distance sample.
pub const DISTANCE_SAMPLE_MAX: f32 = 20.0;

/// Obstacle distance at startup. Far enough that the first instruction
/// card reads ALL CLEAR; replaced by the first slide tick's sample.
pub const SAFE_DISTANCE_M: f32 = 54_000.0;

const _: () = assert!(DISTANCE_SAMPLE_MIN < DISTANCE_SAMPLE_MAX);
const _: () = assert!(DISTANCE_SAMPLE_MAX < SAFE_DISTANCE_M);

// =============================================================================
// Arrival
// =============================================================================

/// Fixed offset from the current time to the displayed arrival time
/// (31 minutes). Constant for the process lifetime.
pub const ARRIVAL_OFFSET_SECS: i64 = 31 * 60;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Intentional compile-time validation of threshold ordering
mod tests {
    use super::*;

    #[test]
    fn test_speed_bound_ordering() {
        assert!(SPEED_MIN < SPEED_MAX);
    }

    #[test]
    fn test_power_bounds() {
        assert!(POWER_START <= POWER_CAPACITY);
        assert!(POWER_START > 0, "startup power must be drainable");
    }

    #[test]
    fn test_obstacle_threshold_ordering() {
        assert!(OBSTACLE_DANGER_MAX < OBSTACLE_CAUTION_MAX);
    }

    #[test]
    fn test_distance_sample_range_spans_all_severities() {
        // Samples must be able to land in every severity band
        assert!(DISTANCE_SAMPLE_MIN < OBSTACLE_DANGER_MAX);
        assert!(DISTANCE_SAMPLE_MAX > OBSTACLE_CAUTION_MAX);
    }

    #[test]
    fn test_safe_distance_is_clear() {
        assert!(
            SAFE_DISTANCE_M >= OBSTACLE_CAUTION_MAX,
            "startup distance must classify as clear"
        );
    }
}
