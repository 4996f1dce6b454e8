//! The two dashboard panels: the left speed card and the right info column.

use core::fmt::Write;

use chrono::{NaiveTime, Timelike};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{
    ARRIVAL_BOX_X,
    BOX_RADIUS,
    DISTANCE_BOX_X,
    INFO_BOX_HEIGHT,
    INFO_BOX_WIDTH,
    INFO_ROW_Y,
    INSTRUCTION_CARD_HEIGHT,
    LEFT_PANEL_CENTER_X,
    LEFT_PANEL_HEIGHT,
    LEFT_PANEL_WIDTH,
    LEFT_PANEL_X,
    LEFT_PANEL_Y,
    PANEL_RADIUS,
    RIGHT_CONTENT_WIDTH,
    RIGHT_CONTENT_X,
    RIGHT_CONTENT_Y,
    SLIDESHOW_HEIGHT,
    SLIDESHOW_WIDTH,
    SLIDESHOW_Y,
};
use crate::rules::ObstacleSeverity;
use crate::styles::{CENTERED, LABEL_FONT, LEFT_ALIGNED, SMALL_FONT, SPEED_FONT, VALUE_FONT, text_style};
use crate::theme::{Palette, WHITE};
use crate::widgets::primitives::{draw_progress_bar, draw_rounded_fill};

// =============================================================================
// Left Panel
// =============================================================================

/// Top-view car glyph, drawn as rectangles in the panel's upper half.
fn draw_car_glyph<D>(display: &mut D, palette: &Palette)
where
    D: DrawTarget<Color = Rgb888>,
{
    let body_w = 90u32;
    let body_h = 170u32;
    let x = LEFT_PANEL_CENTER_X - body_w as i32 / 2;
    let y = LEFT_PANEL_Y + 30;

    let body = PrimitiveStyle::with_stroke(palette.icon, 2);

    // Body outline with rounded nose and tail
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(x, y), Size::new(body_w, body_h)),
        Size::new(30, 30),
    )
    .into_styled(body)
    .draw(display)
    .ok();

    // Windshield and rear window bars
    Rectangle::new(Point::new(x + 14, y + 40), Size::new(body_w - 28, 6))
        .into_styled(PrimitiveStyle::with_fill(palette.icon))
        .draw(display)
        .ok();
    Rectangle::new(Point::new(x + 14, y + body_h as i32 - 46), Size::new(body_w - 28, 6))
        .into_styled(PrimitiveStyle::with_fill(palette.icon))
        .draw(display)
        .ok();

    // Wheels
    let wheel = PrimitiveStyle::with_fill(palette.icon);
    for (dx, dy) in [(-10, 18), (body_w as i32 - 2, 18), (-10, body_h as i32 - 42), (body_w as i32 - 2, body_h as i32 - 42)] {
        Rectangle::new(Point::new(x + dx, y + dy), Size::new(12, 24))
            .into_styled(wheel)
            .draw(display)
            .ok();
    }
}

/// Draw the left panel: car glyph, speed readout, theme-toggle button,
/// and the power row at the bottom.
pub fn draw_speed_panel<D>(
    display: &mut D,
    palette: &Palette,
    speed_kmh: i32,
    dark_mode: bool,
    power: i32,
    percent: i32,
) where
    D: DrawTarget<Color = Rgb888>,
{
    draw_rounded_fill(
        display,
        LEFT_PANEL_X,
        LEFT_PANEL_Y,
        LEFT_PANEL_WIDTH,
        LEFT_PANEL_HEIGHT,
        PANEL_RADIUS,
        palette.card,
    );

    draw_car_glyph(display, palette);

    let mut speed_str: String<16> = String::new();
    let _ = write!(speed_str, "{speed_kmh} km/h");
    Text::with_text_style(
        &speed_str,
        Point::new(LEFT_PANEL_CENTER_X, LEFT_PANEL_Y + 270),
        text_style(SPEED_FONT, palette.foreground),
        CENTERED,
    )
    .draw(display)
    .ok();

    // Theme button is a pill labelled with the mode it switches to
    let button_w = 180u32;
    let button_h = 50u32;
    let button_x = LEFT_PANEL_CENTER_X - button_w as i32 / 2;
    let button_y = LEFT_PANEL_Y + 320;
    draw_rounded_fill(display, button_x, button_y, button_w, button_h, button_h / 2, palette.button);

    let label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    Text::with_text_style(
        label,
        Point::new(LEFT_PANEL_CENTER_X, button_y + button_h as i32 / 2),
        text_style(LABEL_FONT, palette.foreground),
        CENTERED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        "[T]",
        Point::new(LEFT_PANEL_CENTER_X, button_y + button_h as i32 + 16),
        text_style(SMALL_FONT, palette.icon),
        CENTERED,
    )
    .draw(display)
    .ok();

    // Power row pinned to the bottom of the panel
    let row_y = LEFT_PANEL_Y + LEFT_PANEL_HEIGHT as i32 - 40;
    Text::with_text_style(
        "Power",
        Point::new(LEFT_PANEL_X + 20, row_y + 10),
        text_style(LABEL_FONT, palette.foreground),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    draw_progress_bar(display, LEFT_PANEL_X + 90, row_y, 190, 20, power, percent, palette);
}

// =============================================================================
// Right Panel
// =============================================================================

/// Draw the instruction card: severity-colored background with the bold
/// white warning message centered on it.
pub fn draw_instruction_card<D>(display: &mut D, severity: ObstacleSeverity)
where
    D: DrawTarget<Color = Rgb888>,
{
    draw_rounded_fill(
        display,
        RIGHT_CONTENT_X,
        RIGHT_CONTENT_Y,
        RIGHT_CONTENT_WIDTH,
        INSTRUCTION_CARD_HEIGHT,
        BOX_RADIUS,
        severity.color(),
    );
    Text::with_text_style(
        severity.message(),
        Point::new(
            RIGHT_CONTENT_X + RIGHT_CONTENT_WIDTH as i32 / 2,
            RIGHT_CONTENT_Y + INSTRUCTION_CARD_HEIGHT as i32 / 2,
        ),
        text_style(VALUE_FONT, WHITE),
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Draw the slideshow frame. The current slide is shown by name and
/// position; with an empty deck the frame reads NO CAMERA FEED.
pub fn draw_slideshow_frame<D>(
    display: &mut D,
    palette: &Palette,
    slide: Option<(&str, usize, usize)>,
) where
    D: DrawTarget<Color = Rgb888>,
{
    draw_rounded_fill(
        display,
        RIGHT_CONTENT_X,
        SLIDESHOW_Y,
        SLIDESHOW_WIDTH,
        SLIDESHOW_HEIGHT,
        BOX_RADIUS,
        palette.alt,
    );

    let center_x = RIGHT_CONTENT_X + SLIDESHOW_WIDTH as i32 / 2;
    let center_y = SLIDESHOW_Y + SLIDESHOW_HEIGHT as i32 / 2;

    match slide {
        Some((name, index, count)) => {
            Text::with_text_style("CAMERA A", Point::new(center_x, SLIDESHOW_Y + 24), text_style(SMALL_FONT, palette.icon), CENTERED)
                .draw(display)
                .ok();
            Text::with_text_style(name, Point::new(center_x, center_y), text_style(VALUE_FONT, palette.foreground), CENTERED)
                .draw(display)
                .ok();

            let mut position_str: String<16> = String::new();
            let _ = write!(position_str, "{} / {}", index + 1, count);
            Text::with_text_style(
                &position_str,
                Point::new(center_x, SLIDESHOW_Y + SLIDESHOW_HEIGHT as i32 - 24),
                text_style(SMALL_FONT, palette.icon),
                CENTERED,
            )
            .draw(display)
            .ok();
        }
        None => {
            Text::with_text_style(
                "NO CAMERA FEED",
                Point::new(center_x, center_y),
                text_style(LABEL_FONT, palette.icon),
                CENTERED,
            )
            .draw(display)
            .ok();
        }
    }
}

/// One captioned info box with a value line under the title.
fn draw_info_box<D>(
    display: &mut D,
    palette: &Palette,
    x: i32,
    title: &str,
    value: &str,
) where
    D: DrawTarget<Color = Rgb888>,
{
    draw_rounded_fill(display, x, INFO_ROW_Y, INFO_BOX_WIDTH, INFO_BOX_HEIGHT, BOX_RADIUS, palette.alt);

    let center_x = x + INFO_BOX_WIDTH as i32 / 2;
    Text::with_text_style(
        title,
        Point::new(center_x, INFO_ROW_Y + 22),
        text_style(LABEL_FONT, palette.foreground),
        CENTERED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        value,
        Point::new(center_x, INFO_ROW_Y + 54),
        text_style(VALUE_FONT, palette.foreground),
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Draw the arrival-time box (`HH:MM`).
pub fn draw_arrival_box<D>(display: &mut D, palette: &Palette, arrival: NaiveTime)
where
    D: DrawTarget<Color = Rgb888>,
{
    let mut value: String<8> = String::new();
    let _ = write!(value, "{:02}:{:02}", arrival.hour(), arrival.minute());
    draw_info_box(display, palette, ARRIVAL_BOX_X, "Arrival Time", &value);
}

/// Draw the next-obstacle-distance box, meters truncated to whole units.
pub fn draw_distance_box<D>(display: &mut D, palette: &Palette, distance_m: f32)
where
    D: DrawTarget<Color = Rgb888>,
{
    let mut value: String<16> = String::new();
    let _ = write!(value, "{} m", distance_m as i32);
    draw_info_box(display, palette, DISTANCE_BOX_X, "Next Object Distance", &value);
}
