use std::ops::Range;

use log::{info, trace};

use super::color::Color;
use crate::traits::PixelBuffer;

/// 2D drawing operations for a pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Fill the whole visible area
    Clear(Color),

    /// Single pixel at (x, y)
    Pixel { x: i32, y: i32, color: Color },

    /// Filled rectangle with top-left corner at (x, y)
    Rect { x: i32, y: i32, width: i32, height: i32, color: Color },

    /// Text label at (x, y); logged only, nothing is rasterized
    Text { x: i32, y: i32, text: String, color: Color },
}

/// Write one pixel, silently clipping anything outside the visible area
///
/// Exactly `bytes_per_pixel` bytes change (capped at 4); depths below 8 bits
/// draw nothing.
pub fn set_pixel<S: PixelBuffer + ?Sized>(surface: &mut S, x: i32, y: i32, color: Color) {
    let Some(range) = pixel_range(surface, x, y) else {
        return;
    };

    // Pan or stride values that point past the mapping are skipped too
    if let Some(pixel) = surface.memory_mut().get_mut(range) {
        color.store_low_bytes(pixel);
    }
}

/// Read one pixel; `None` outside the visible area or the buffer
pub fn get_pixel<S: PixelBuffer + ?Sized>(surface: &S, x: i32, y: i32) -> Option<Color> {
    let range = pixel_range(surface, x, y)?;
    surface.memory().get(range).map(Color::load_low_bytes)
}

/// Bytes backing a visible pixel, before checking them against the buffer
fn pixel_range<S: PixelBuffer + ?Sized>(surface: &S, x: i32, y: i32) -> Option<Range<usize>> {
    let geometry = surface.geometry();
    let width = geometry.bytes_per_pixel().min(4);
    if width == 0 {
        return None;
    }

    let offset = geometry.pixel_offset(x, y)?;
    Some(offset..offset.checked_add(width)?)
}

/// Fill `[x, x + width) × [y, y + height)`, clipped to the visible area
///
/// Non-positive width or height draws nothing.
pub fn fill_rect<S: PixelBuffer + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
) {
    if width <= 0 || height <= 0 {
        return;
    }

    let geometry = *surface.geometry();
    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(width)).min(i64::from(geometry.width));
    let y1 = (i64::from(y) + i64::from(height)).min(i64::from(geometry.height));

    // Clipped bounds fit in i32: they lie within [0, resolution]
    for row in y0..y1 {
        for column in x0..x1 {
            set_pixel(surface, column as i32, row as i32, color);
        }
    }
}

/// Placeholder for text rendering: reports the request, writes no pixels
pub fn draw_text<S: PixelBuffer + ?Sized>(_surface: &S, x: i32, y: i32, text: &str, color: Color) {
    info!("Drawing text at ({},{}): {} [{}]", x, y, text, color);
}

/// Run a list of draw operations in order
pub fn execute<S: PixelBuffer + ?Sized>(surface: &mut S, ops: &[DrawOp]) {
    for op in ops {
        trace!("{:?}", op);
        match op {
            DrawOp::Clear(color) => {
                let geometry = *surface.geometry();
                fill_rect(
                    surface,
                    0,
                    0,
                    clamp_dimension(geometry.width),
                    clamp_dimension(geometry.height),
                    *color,
                );
            }
            DrawOp::Pixel { x, y, color } => set_pixel(surface, *x, *y, *color),
            DrawOp::Rect { x, y, width, height, color } => {
                fill_rect(surface, *x, *y, *width, *height, *color)
            }
            DrawOp::Text { x, y, text, color } => draw_text(&*surface, *x, *y, text, *color),
        }
    }
}

fn clamp_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
