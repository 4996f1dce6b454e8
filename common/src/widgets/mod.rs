//! Widget components for the dashboard display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb888>` so they can
//! render to the simulator window or any other 24-bit target.

mod header;
mod panels;
mod primitives;

pub use header::{draw_header, draw_sidebar};
pub use panels::{
    draw_arrival_box,
    draw_distance_box,
    draw_instruction_card,
    draw_slideshow_frame,
    draw_speed_panel,
};
pub use primitives::{draw_background, draw_progress_bar, draw_rounded_fill};
