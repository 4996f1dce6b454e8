//! Simulated car dashboard for the desktop.
//!
//! Opens a fixed 1200x700 window and drives the dashboard state with the
//! three periodic triggers (slide, second, power). All data is synthetic:
//! an oscillating speed, a randomized obstacle distance, and a slowly
//! draining power gauge.
//!
//! Keys: `T` toggles the dark/light theme. Closing the window exits.

mod clock;
mod slides;
mod timing;

use std::path::Path;
use std::thread;
use std::time::Instant;

use cardash_common::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use cardash_common::rules::arrival_time;
use cardash_common::widgets::{
    draw_arrival_box,
    draw_background,
    draw_distance_box,
    draw_header,
    draw_instruction_card,
    draw_sidebar,
    draw_slideshow_frame,
    draw_speed_panel,
};
use cardash_common::{DashboardState, Scheduler, Tick};
use chrono::NaiveTime;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::clock::{Clock, SystemClock};
use crate::slides::SlideDeck;
use crate::timing::FRAME_TIME;

/// Default slideshow source, relative to the working directory.
const SLIDE_DIR: &str = "data/CameraA";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let deck = match SlideDeck::load(Path::new(SLIDE_DIR)) {
        Ok(deck) => {
            info!(slides = deck.len(), "slideshow loaded from {SLIDE_DIR}");
            deck
        }
        Err(err) => {
            warn!("slideshow unavailable, continuing without slides: {err}");
            SlideDeck::empty()
        }
    };

    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Car Dashboard", &output_settings);

    let clock = SystemClock;
    let mut rng = rand::rng();
    let mut state = DashboardState::new();
    let mut now = clock.now();

    // Populate the initial readouts before the first trigger fires: the
    // second and power effects run once, the slideshow stays on slide 0,
    // and the obstacle distance on its safe startup value.
    state.second_tick();
    state.power_tick();

    let mut scheduler = Scheduler::new();
    let start = Instant::now();

    info!("dashboard started");

    'running: loop {
        let frame_start = Instant::now();

        render(&mut display, &state, &deck, now);
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::T {
                        state.toggle_theme();
                        info!(dark_mode = state.dark_mode, "theme toggled");
                    }
                }
                _ => {}
            }
        }

        for tick in scheduler.poll(start.elapsed()) {
            debug!(trigger = tick.name(), "tick");
            match tick {
                Tick::Slide => state.slide_tick(&mut rng, deck.len()),
                Tick::Second => {
                    now = clock.now();
                    state.second_tick();
                }
                Tick::Power => state.power_tick(),
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    info!("dashboard stopped");
}

/// Redraw the full dashboard from the current state.
fn render(
    display: &mut SimulatorDisplay<Rgb888>,
    state: &DashboardState,
    deck: &SlideDeck,
    now: NaiveTime,
) {
    let palette = state.palette();

    draw_background(display, palette.background);
    draw_sidebar(display, palette);
    draw_header(display, palette, now);

    draw_speed_panel(
        display,
        palette,
        state.speed_kmh,
        state.dark_mode,
        state.power,
        state.power_percent(),
    );

    draw_instruction_card(display, state.obstacle());

    let slide = deck
        .get(state.current_slide)
        .map(|s| (s.name.as_str(), state.current_slide, deck.len()));
    draw_slideshow_frame(display, palette, slide);

    draw_arrival_box(display, palette, arrival_time(now, state.arrival_offset_secs));
    draw_distance_box(display, palette, state.next_obstacle_m);
}
