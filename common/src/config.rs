//! Fixed window geometry and pre-computed layout constants.
//!
//! The dashboard window is a fixed 1200x700 surface: a 60 px sidebar on the
//! left, a 50 px header strip on top, and two panels below (the 300x600
//! speed card and the 650x600 info column).

// =============================================================================
// Window
// =============================================================================

/// Window width in pixels.
pub const WINDOW_WIDTH: u32 = 1200;

/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = 700;

// =============================================================================
// Chrome (sidebar + header)
// =============================================================================

/// Width of the navigation sidebar.
pub const SIDEBAR_WIDTH: u32 = 60;

/// Height of the status header strip.
pub const HEADER_HEIGHT: u32 = 50;

// =============================================================================
// Left Panel (speed card)
// =============================================================================

pub const LEFT_PANEL_X: i32 = SIDEBAR_WIDTH as i32 + 20;
pub const LEFT_PANEL_Y: i32 = HEADER_HEIGHT as i32 + 10;
pub const LEFT_PANEL_WIDTH: u32 = 300;
pub const LEFT_PANEL_HEIGHT: u32 = 600;

/// Horizontal center of the left panel, where its contents align.
pub const LEFT_PANEL_CENTER_X: i32 = LEFT_PANEL_X + LEFT_PANEL_WIDTH as i32 / 2;

// =============================================================================
// Right Panel (instruction card, slideshow, info boxes)
// =============================================================================

/// 50 px gap between the panels, as in the body layout spacing.
pub const RIGHT_PANEL_X: i32 = LEFT_PANEL_X + LEFT_PANEL_WIDTH as i32 + 50;
pub const RIGHT_PANEL_Y: i32 = LEFT_PANEL_Y;
pub const RIGHT_PANEL_WIDTH: u32 = 650;
pub const RIGHT_PANEL_HEIGHT: u32 = 600;

/// Inner content of the right panel (20 px margins).
pub const RIGHT_CONTENT_X: i32 = RIGHT_PANEL_X + 20;
pub const RIGHT_CONTENT_Y: i32 = RIGHT_PANEL_Y + 20;
pub const RIGHT_CONTENT_WIDTH: u32 = RIGHT_PANEL_WIDTH - 40;

/// Instruction card (full content width, fixed height).
pub const INSTRUCTION_CARD_HEIGHT: u32 = 100;

/// Slideshow frame, 20 px below the instruction card.
pub const SLIDESHOW_Y: i32 = RIGHT_CONTENT_Y + INSTRUCTION_CARD_HEIGHT as i32 + 20;
pub const SLIDESHOW_WIDTH: u32 = RIGHT_CONTENT_WIDTH;
pub const SLIDESHOW_HEIGHT: u32 = 300;

/// Arrival and distance boxes at the bottom of the right panel.
pub const INFO_BOX_WIDTH: u32 = 300;
pub const INFO_BOX_HEIGHT: u32 = 80;
pub const INFO_ROW_Y: i32 = RIGHT_PANEL_Y + RIGHT_PANEL_HEIGHT as i32 - INFO_BOX_HEIGHT as i32 - 20;
pub const ARRIVAL_BOX_X: i32 = RIGHT_CONTENT_X;
pub const DISTANCE_BOX_X: i32 =
    RIGHT_CONTENT_X + RIGHT_CONTENT_WIDTH as i32 - INFO_BOX_WIDTH as i32;

// =============================================================================
// Corner Radii
// =============================================================================

/// Corner radius of the two large panels.
pub const PANEL_RADIUS: u32 = 12;

/// Corner radius of the smaller cards and boxes.
pub const BOX_RADIUS: u32 = 8;

// =============================================================================
// Layout Validation
// =============================================================================

const _: () = assert!(SIDEBAR_WIDTH + 20 + LEFT_PANEL_WIDTH + 50 + RIGHT_PANEL_WIDTH + 20 <= WINDOW_WIDTH);
const _: () = assert!(HEADER_HEIGHT + 10 + LEFT_PANEL_HEIGHT + 40 <= WINDOW_HEIGHT);
const _: () = assert!(2 * INFO_BOX_WIDTH <= RIGHT_CONTENT_WIDTH);
