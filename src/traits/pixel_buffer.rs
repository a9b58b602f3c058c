use crate::core::geometry::Geometry;

/// Byte-addressable pixel memory with a known layout
///
/// Drawing code only ever touches memory through these slices, so every
/// write is bounds checked by the slice itself.
pub trait PixelBuffer {
    /// Layout captured when the buffer was created
    fn geometry(&self) -> &Geometry;

    /// Read-only view of the whole buffer
    fn memory(&self) -> &[u8];

    /// Writable view of the whole buffer
    fn memory_mut(&mut self) -> &mut [u8];
}
