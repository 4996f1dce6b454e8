//! Header strip and navigation sidebar.

use core::fmt::Write;

use chrono::{NaiveTime, Timelike};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{HEADER_HEIGHT, SIDEBAR_WIDTH, WINDOW_WIDTH};
use crate::styles::{CENTERED, LABEL_FONT, LEFT_ALIGNED, RIGHT_ALIGNED, SMALL_FONT, text_style};
use crate::theme::Palette;

/// Sidebar glyph labels, top to bottom. Stand-ins for the nav icons.
const SIDEBAR_GLYPHS: [&str; 5] = ["NAV", "MENU", "MED", "TEL", "CAR"];

/// Vertical distance between sidebar glyphs.
const SIDEBAR_SPACING: i32 = 100;

/// Draw the navigation sidebar glyphs down the left edge.
pub fn draw_sidebar<D>(display: &mut D, palette: &Palette)
where
    D: DrawTarget<Color = Rgb888>,
{
    let center_x = SIDEBAR_WIDTH as i32 / 2;
    let style = text_style(SMALL_FONT, palette.icon);

    for (i, glyph) in SIDEBAR_GLYPHS.iter().enumerate() {
        let y = HEADER_HEIGHT as i32 + 60 + i as i32 * SIDEBAR_SPACING;
        Text::with_text_style(glyph, Point::new(center_x, y), style, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Draw the header strip: status glyphs on the left, outside temperature
/// and the current clock on the right.
pub fn draw_header<D>(display: &mut D, palette: &Palette, now: NaiveTime)
where
    D: DrawTarget<Color = Rgb888>,
{
    let center_y = HEADER_HEIGHT as i32 / 2;
    let icon_style = text_style(LABEL_FONT, palette.icon);
    let fg_style = text_style(LABEL_FONT, palette.foreground);

    Text::with_text_style("o o o", Point::new(12, center_y), icon_style, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("LTE", Point::new(90, center_y), icon_style, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("VOL", Point::new(140, center_y), icon_style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Outside temperature is static display dressing
    Text::with_text_style(
        "17C",
        Point::new(WINDOW_WIDTH as i32 - 90, center_y),
        fg_style,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();

    let mut clock_str: String<8> = String::new();
    let _ = write!(clock_str, "{:02}:{:02}", now.hour(), now.minute());
    Text::with_text_style(
        &clock_str,
        Point::new(WINDOW_WIDTH as i32 - 16, center_y),
        fg_style,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}
