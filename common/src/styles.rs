//! Shared fonts and text-style helpers.
//!
//! Text colors depend on the active palette, so the styles here are split
//! into const alignment/font pieces and small helpers that bind a color at
//! draw time.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

/// Small font for sidebar glyph labels and fine print.
pub const SMALL_FONT: &MonoFont<'_> = &PROFONT_12_POINT;

/// Label font for header text, captions, and box titles.
pub const LABEL_FONT: &MonoFont<'_> = &PROFONT_14_POINT;

/// Value font for the info-box readouts and the instruction message.
pub const VALUE_FONT: &MonoFont<'_> = &PROFONT_18_POINT;

/// Large font for the speed readout.
pub const SPEED_FONT: &MonoFont<'_> = &PROFONT_24_POINT;

/// Center-anchored text, vertically centered on the given point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-anchored text, vertically centered on the given point.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Right-anchored text, vertically centered on the given point.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

/// Bind a font and color into a drawable character style.
#[inline]
pub const fn text_style(font: &'static MonoFont<'static>, color: Rgb888) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(font, color)
}
