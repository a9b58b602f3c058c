use serde::Serialize;

/// Display geometry - resolution, pixel depth and memory layout
///
/// Captured once when a surface is opened; never re-queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    /// Visible width in pixels
    pub width: u32,
    /// Visible height in pixels
    pub height: u32,
    /// Virtual width in pixels (>= width when panning is possible)
    pub virtual_width: u32,
    /// Virtual height in pixels, determines the mapped length
    pub virtual_height: u32,
    /// Horizontal pan offset into the virtual buffer
    pub x_offset: u32,
    /// Vertical pan offset into the virtual buffer
    pub y_offset: u32,
    pub bits_per_pixel: u32,
    /// Bytes per row, may include alignment padding
    pub line_length: u32,
}

impl Geometry {
    /// Create geometry with no panning and virtual size equal to visible size
    pub fn new(width: u32, height: u32, bits_per_pixel: u32, line_length: u32) -> Self {
        Self {
            width,
            height,
            virtual_width: width,
            virtual_height: height,
            x_offset: 0,
            y_offset: 0,
            bits_per_pixel,
            line_length,
        }
    }

    /// Set the virtual resolution
    pub fn with_virtual(mut self, virtual_width: u32, virtual_height: u32) -> Self {
        self.virtual_width = virtual_width;
        self.virtual_height = virtual_height;
        self
    }

    /// Set the pan offsets
    pub fn with_pan(mut self, x_offset: u32, y_offset: u32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Number of bytes to map: every virtual row at full stride
    pub fn map_len(&self) -> usize {
        self.virtual_height as usize * self.line_length as usize
    }

    /// Whole visible area in pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether (x, y) lies inside the visible resolution
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte offset of a visible pixel, including pan offsets
    ///
    /// Returns `None` for coordinates outside the visible area or when the
    /// arithmetic would overflow.
    pub fn pixel_offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }

        let column = (x as usize).checked_add(self.x_offset as usize)?;
        let row = (y as usize).checked_add(self.y_offset as usize)?;

        column
            .checked_mul(self.bytes_per_pixel())?
            .checked_add(row.checked_mul(self.line_length as usize)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_len_uses_virtual_height_and_stride() {
        let geometry = Geometry::new(640, 480, 32, 2560).with_virtual(640, 960);
        assert_eq!(geometry.map_len(), 960 * 2560);
    }

    #[test]
    fn offset_includes_padding() {
        // 10 pixels wide but 64-byte rows
        let geometry = Geometry::new(10, 10, 32, 64);
        assert_eq!(geometry.pixel_offset(0, 0), Some(0));
        assert_eq!(geometry.pixel_offset(3, 0), Some(12));
        assert_eq!(geometry.pixel_offset(0, 2), Some(128));
        assert_eq!(geometry.pixel_offset(9, 9), Some(9 * 4 + 9 * 64));
    }

    #[test]
    fn offset_includes_pan() {
        let geometry = Geometry::new(4, 4, 32, 32)
            .with_virtual(8, 8)
            .with_pan(2, 3);
        assert_eq!(geometry.pixel_offset(1, 1), Some((1 + 2) * 4 + (1 + 3) * 32));
    }

    #[test]
    fn offset_rejects_outside_resolution() {
        let geometry = Geometry::new(4, 4, 32, 16);
        assert_eq!(geometry.pixel_offset(-1, 0), None);
        assert_eq!(geometry.pixel_offset(0, -1), None);
        assert_eq!(geometry.pixel_offset(4, 0), None);
        assert_eq!(geometry.pixel_offset(0, 4), None);
        assert_eq!(geometry.pixel_offset(i32::MIN, i32::MAX), None);
    }

    #[test]
    fn serializes_to_json() {
        let geometry = Geometry::new(800, 480, 32, 3200);
        let json = serde_json::to_value(geometry).unwrap();
        assert_eq!(json["width"], 800);
        assert_eq!(json["line_length"], 3200);
    }
}
