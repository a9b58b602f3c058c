//! Demo module builds the static status screen drawn at startup
//!
//! # Examples
//!
//! ```
//! use fb_demo::core::{execute, Geometry, MemorySurface};
//! use fb_demo::demo::demo_layout;
//!
//! let geometry = Geometry::new(800, 480, 32, 3200);
//! let mut surface = MemorySurface::new(geometry);
//! execute(&mut surface, &demo_layout(&geometry));
//! ```

use crate::core::{Color, DrawOp, Geometry};

pub const HEADER_HEIGHT: i32 = 80;
pub const BUTTON_SIZE: (i32, i32) = (200, 60);
pub const PROGRESS_SIZE: (i32, i32) = (300, 20);
/// Progress fill in percent of the track width
pub const PROGRESS_PERCENT: i32 = 70;

/// Lines printed after the layout is drawn
pub const LAYOUT_DESCRIPTION: [&str; 5] = [
    "Blue header bar at top",
    "Gray content area in center",
    "Green button in middle",
    "Blue progress bar (70%) near bottom",
    "Green status indicator in top-left",
];

fn rect(x: i32, y: i32, width: i32, height: i32, color: Color) -> DrawOp {
    DrawOp::Rect { x, y, width, height, color }
}

/// Draw list for the demo screen, back to front
///
/// Positions are derived from the visible resolution; anything that falls
/// off a small screen is clipped by the rasterizer.
pub fn demo_layout(geometry: &Geometry) -> Vec<DrawOp> {
    let w = i32::try_from(geometry.width).unwrap_or(i32::MAX);
    let h = i32::try_from(geometry.height).unwrap_or(i32::MAX);

    let (button_w, button_h) = BUTTON_SIZE;
    let button_x = (w - button_w) / 2;
    let button_y = (h - button_h) / 2;

    let (bar_w, bar_h) = PROGRESS_SIZE;
    let bar_x = (w - bar_w) / 2;
    let bar_y = h - 150;

    vec![
        // Background
        rect(0, 0, w, h, Color::BACKGROUND),
        // Header
        rect(0, 0, w, HEADER_HEIGHT, Color::HEADER_BLUE),
        DrawOp::Text {
            x: 80,
            y: 30,
            text: "Framebuffer Demo".to_string(),
            color: Color::WHITE,
        },
        // Content area
        rect(50, 100, w - 100, h - 200, Color::CONTENT_GRAY),
        // Button
        rect(button_x, button_y, button_w, button_h, Color::GREEN),
        // Progress bar track and fill
        rect(bar_x, bar_y, bar_w, bar_h, Color::TRACK_GRAY),
        rect(bar_x, bar_y, bar_w * PROGRESS_PERCENT / 100, bar_h, Color::PROGRESS_BLUE),
        // Status light
        rect(20, 20, 40, 40, Color::GREEN),
    ]
}
