use super::color::Color;
use super::geometry::Geometry;
use crate::traits::PixelBuffer;

/// Pixel memory backed by an owned buffer
///
/// Same layout as a mapped device (`virtual_height * line_length` bytes),
/// useful for off-screen drawing, tests and benchmarks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    geometry: Geometry,
    memory: Vec<u8>,
}

impl MemorySurface {
    /// Zero-filled buffer
    pub fn new(geometry: Geometry) -> Self {
        Self {
            memory: vec![0; geometry.map_len()],
            geometry,
        }
    }

    /// Buffer with every 4-byte word set to `color`
    pub fn filled(geometry: Geometry, color: Color) -> Self {
        let mut surface = Self::new(geometry);
        for word in surface.memory.chunks_exact_mut(4) {
            word.copy_from_slice(&color.to_ne_bytes());
        }
        surface
    }

    /// Consume the surface and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.memory
    }
}

impl PixelBuffer for MemorySurface {
    fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn memory(&self) -> &[u8] {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut [u8] {
        &mut self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_virtual_height_rows() {
        let geometry = Geometry::new(4, 4, 32, 20).with_virtual(4, 8);
        let surface = MemorySurface::new(geometry);
        assert_eq!(surface.memory().len(), 8 * 20);
        assert!(surface.memory().iter().all(|&b| b == 0));
    }

    #[test]
    fn filled_sets_every_word() {
        let surface = MemorySurface::filled(Geometry::new(2, 2, 32, 8), Color(0x01020304));
        for word in surface.memory().chunks_exact(4) {
            assert_eq!(word, Color(0x01020304).to_ne_bytes());
        }
    }
}
