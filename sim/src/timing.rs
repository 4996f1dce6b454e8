//! Timing constants for the desktop window loop.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes
/// early; the tick scheduler is polled once per frame.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
