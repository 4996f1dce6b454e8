//! Color palettes for the dark and light themes, plus severity colors.
//!
//! The window renders in `Rgb888` because the dashboard's design colors are
//! 24-bit hex values; there is no conversion loss the way there would be on
//! a 16-bit panel.

use embedded_graphics::pixelcolor::Rgb888;

// =============================================================================
// Severity Colors (theme-independent)
// =============================================================================

/// Instruction-card background for DANGER (#dc3545).
pub const DANGER_RED: Rgb888 = Rgb888::new(0xdc, 0x35, 0x45);

/// Instruction-card background for CAUTION (#ffc107).
pub const CAUTION_AMBER: Rgb888 = Rgb888::new(0xff, 0xc1, 0x07);

/// Instruction-card background for ALL CLEAR, also the power-bar chunk
/// color in both themes (#28a745).
pub const CLEAR_GREEN: Rgb888 = Rgb888::new(0x28, 0xa7, 0x45);

/// Instruction-card text color. White in both themes.
pub const WHITE: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);

// =============================================================================
// Theme Palettes
// =============================================================================

/// One theme's worth of surface and text colors.
///
/// Field names follow the dashboard surfaces: `card` is the large left
/// panel, `alt` the smaller right-hand boxes, `track`/`chunk` the power
/// bar, `button` the theme-toggle button.
pub struct Palette {
    pub background: Rgb888,
    pub card: Rgb888,
    pub alt: Rgb888,
    pub foreground: Rgb888,
    pub button: Rgb888,
    pub icon: Rgb888,
    pub track: Rgb888,
    pub chunk: Rgb888,
    pub percent_text: Rgb888,
}

/// Dark theme (the startup default).
pub const DARK: Palette = Palette {
    background: Rgb888::new(0x11, 0x11, 0x11),
    card: Rgb888::new(0x1a, 0x1a, 0x1a),
    alt: Rgb888::new(0x22, 0x22, 0x22),
    foreground: WHITE,
    button: Rgb888::new(0x33, 0x33, 0x33),
    icon: Rgb888::new(0xd3, 0xd3, 0xd3),
    track: Rgb888::new(0x33, 0x33, 0x33),
    chunk: CLEAR_GREEN,
    percent_text: WHITE,
};

/// Light theme.
pub const LIGHT: Palette = Palette {
    background: Rgb888::new(0xf0, 0xf0, 0xf0),
    card: Rgb888::new(0xff, 0xff, 0xff),
    alt: Rgb888::new(0xe0, 0xe0, 0xe0),
    foreground: Rgb888::new(0x11, 0x11, 0x11),
    button: Rgb888::new(0xcc, 0xcc, 0xcc),
    icon: Rgb888::new(0x00, 0x00, 0x00),
    track: Rgb888::new(0xdd, 0xdd, 0xdd),
    chunk: CLEAR_GREEN,
    percent_text: Rgb888::new(0x11, 0x11, 0x11),
};
