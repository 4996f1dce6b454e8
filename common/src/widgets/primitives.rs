//! Low-level drawing primitives shared across widgets.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::styles::{CENTERED, LABEL_FONT, text_style};
use crate::theme::Palette;
use crate::thresholds::POWER_CAPACITY;

/// Fill a rounded rectangle, the basic card/box surface.
pub fn draw_rounded_fill<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    radius: u32,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(x, y), Size::new(w, h)),
        Size::new(radius, radius),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();
}

/// Fill the whole display with the theme background.
pub fn draw_background<D>(display: &mut D, color: Rgb888)
where
    D: DrawTarget<Color = Rgb888>,
{
    display.clear(color).ok();
}

/// Draw the power progress bar: rounded track with a 2 px chunk-colored
/// border, a fill proportional to `power`, and the percent centered on top.
pub fn draw_progress_bar<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    power: i32,
    percent: i32,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let radius = h / 2;

    let track_style = PrimitiveStyleBuilder::new()
        .fill_color(palette.track)
        .stroke_color(palette.chunk)
        .stroke_width(2)
        .build();
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(x, y), Size::new(w, h)),
        Size::new(radius, radius),
    )
    .into_styled(track_style)
    .draw(display)
    .ok();

    // Chunk width proportional to the remaining power
    let fill_w = (w as i64 * power.clamp(0, POWER_CAPACITY) as i64 / POWER_CAPACITY as i64) as u32;
    if fill_w > 0 {
        RoundedRectangle::with_equal_corners(
            Rectangle::new(Point::new(x, y), Size::new(fill_w, h)),
            Size::new(radius.min(fill_w / 2), radius),
        )
        .into_styled(PrimitiveStyle::with_fill(palette.chunk))
        .draw(display)
        .ok();
    }

    let mut percent_str: String<8> = String::new();
    let _ = write!(percent_str, "{percent}%");
    Text::with_text_style(
        &percent_str,
        Point::new(x + w as i32 / 2, y + h as i32 / 2),
        text_style(LABEL_FONT, palette.percent_text),
        CENTERED,
    )
    .draw(display)
    .ok();
}
