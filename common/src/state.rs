//! The dashboard's mutable state and its tick handlers.
//!
//! One `DashboardState` exists per process, owned by the main loop. Only
//! the tick handlers (and the explicit theme toggle) mutate it; the
//! renderer takes a shared reference and derives everything it displays.

use rand::Rng;

use crate::rules::{
    ObstacleSeverity,
    advance_slide,
    advance_speed,
    classify_obstacle,
    drain_power,
    next_random_distance,
    power_percent,
};
use crate::theme::{DARK, LIGHT, Palette};
use crate::thresholds::{ARRIVAL_OFFSET_SECS, POWER_START, SAFE_DISTANCE_M, SPEED_MIN};

/// All dynamic dashboard state.
///
/// Fields stay in range by construction: every mutation goes through the
/// clamped update rules in [`crate::rules`].
pub struct DashboardState {
    /// Current speed in km/h, oscillating within `[40, 70]`.
    pub speed_kmh: i32,

    /// Direction of the speed sawtooth: `+1` climbing, `-1` falling.
    pub speed_dir: i32,

    /// Distance to the next obstacle in meters. Starts at the safe
    /// sentinel, re-sampled on every slide tick.
    pub next_obstacle_m: f32,

    /// Remaining power units out of [`crate::thresholds::POWER_CAPACITY`].
    pub power: i32,

    /// Seconds from now to the displayed arrival time. Constant for the
    /// process lifetime.
    pub arrival_offset_secs: i64,

    /// Active theme flag; flipped only by the user's toggle action.
    pub dark_mode: bool,

    /// Index of the slide currently shown, `0` when no slides are loaded.
    pub current_slide: usize,
}

impl DashboardState {
    /// Startup state: 40 km/h climbing, power at 250, dark theme, and the
    /// obstacle distance pinned to the safe sentinel until the first
    /// slide tick replaces it.
    pub const fn new() -> Self {
        Self {
            speed_kmh: SPEED_MIN,
            speed_dir: 1,
            next_obstacle_m: SAFE_DISTANCE_M,
            power: POWER_START,
            arrival_offset_secs: ARRIVAL_OFFSET_SECS,
            dark_mode: true,
            current_slide: 0,
        }
    }

    // =========================================================================
    // Tick Handlers
    // =========================================================================

    /// Slide tick (every 2 s): advance the slideshow and draw a fresh
    /// obstacle distance from the injected random source.
    pub fn slide_tick<R: Rng + ?Sized>(&mut self, rng: &mut R, slide_count: usize) {
        self.current_slide = advance_slide(self.current_slide, slide_count);
        self.next_obstacle_m = next_random_distance(rng);
    }

    /// Second tick (every 1 s): step the speed sawtooth. The clock and
    /// arrival readouts are re-derived by the renderer on the same tick.
    pub fn second_tick(&mut self) {
        (self.speed_kmh, self.speed_dir) = advance_speed(self.speed_kmh, self.speed_dir);
    }

    /// Power tick (every 60 s): drain one unit, saturating at zero.
    pub fn power_tick(&mut self) {
        self.power = drain_power(self.power);
    }

    /// Inbound user action: flip the theme. The next frame re-renders
    /// everything with the other palette.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    // =========================================================================
    // Derived Readouts
    // =========================================================================

    /// Severity of the current obstacle distance.
    #[inline]
    pub fn obstacle(&self) -> ObstacleSeverity {
        classify_obstacle(self.next_obstacle_m)
    }

    /// Remaining power as a truncated percentage.
    #[inline]
    pub const fn power_percent(&self) -> i32 {
        power_percent(self.power)
    }

    /// Palette for the active theme.
    #[inline]
    pub const fn palette(&self) -> &'static Palette {
        if self.dark_mode { &DARK } else { &LIGHT }
    }
}

impl Default for DashboardState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::thresholds::{DISTANCE_SAMPLE_MAX, DISTANCE_SAMPLE_MIN, SPEED_MAX};

    #[test]
    fn test_startup_state() {
        let state = DashboardState::new();
        assert_eq!(state.speed_kmh, 40);
        assert_eq!(state.speed_dir, 1);
        assert_eq!(state.power, 250);
        assert_eq!(state.arrival_offset_secs, 1860);
        assert!(state.dark_mode);
        assert_eq!(state.current_slide, 0);
        assert_eq!(state.obstacle(), ObstacleSeverity::Clear, "startup must read ALL CLEAR");
    }

    #[test]
    fn test_second_tick_sawtooth() {
        let mut state = DashboardState::new();
        // Climb to the top: 30 ticks from 40 to 70
        for _ in 0..30 {
            state.second_tick();
        }
        assert_eq!(state.speed_kmh, SPEED_MAX);
        assert_eq!(state.speed_dir, -1);

        // One more tick comes back down
        state.second_tick();
        assert_eq!(state.speed_kmh, 69);
        assert_eq!(state.speed_dir, -1);
    }

    #[test]
    fn test_power_tick_drains_and_saturates() {
        let mut state = DashboardState::new();
        state.power_tick();
        assert_eq!(state.power, 249);
        assert_eq!(state.power_percent(), 83);

        for _ in 0..400 {
            state.power_tick();
        }
        assert_eq!(state.power, 0);
        assert_eq!(state.power_percent(), 0);
    }

    #[test]
    fn test_slide_tick_advances_and_resamples() {
        let mut state = DashboardState::new();
        let mut rng = StdRng::seed_from_u64(7);

        state.slide_tick(&mut rng, 4);
        assert_eq!(state.current_slide, 1);
        assert!(state.next_obstacle_m >= DISTANCE_SAMPLE_MIN);
        assert!(state.next_obstacle_m < DISTANCE_SAMPLE_MAX);

        // Sentinel never comes back once overwritten
        for _ in 0..20 {
            state.slide_tick(&mut rng, 4);
            assert!(state.next_obstacle_m < DISTANCE_SAMPLE_MAX);
        }
        assert_eq!(state.current_slide, 1, "21 advances mod 4 should land back on slide 1");
    }

    #[test]
    fn test_slide_tick_without_slides_still_resamples() {
        let mut state = DashboardState::new();
        let mut rng = StdRng::seed_from_u64(7);

        state.slide_tick(&mut rng, 0);
        assert_eq!(state.current_slide, 0, "empty deck must not advance");
        assert!(state.next_obstacle_m < DISTANCE_SAMPLE_MAX, "distance must still be re-sampled");
    }

    #[test]
    fn test_toggle_theme_flips_palette() {
        let mut state = DashboardState::new();
        assert!(state.dark_mode);
        state.toggle_theme();
        assert!(!state.dark_mode);
        state.toggle_theme();
        assert!(state.dark_mode);
    }
}
