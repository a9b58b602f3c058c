use std::fmt;

/// Packed 32-bit ARGB colour (alpha in the top byte)
///
/// Stored to the framebuffer as a native-endian `u32`, which on little-endian
/// hardware yields the usual B, G, R, A byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BACKGROUND: Color = Color(0xFF28_2828);
    pub const HEADER_BLUE: Color = Color(0xFF1E_88E5);
    pub const CONTENT_GRAY: Color = Color(0xFF42_4242);
    pub const GREEN: Color = Color(0xFF4C_AF50);
    pub const TRACK_GRAY: Color = Color(0xFF75_7575);
    pub const PROGRESS_BLUE: Color = Color(0xFF21_96F3);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque colour from red, green and blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// (a, r, g, b)
    pub const fn components(self) -> (u8, u8, u8, u8) {
        let [a, r, g, b] = self.0.to_be_bytes();
        (a, r, g, b)
    }

    /// Bytes as stored in pixel memory
    pub const fn to_ne_bytes(self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }

    pub const fn from_ne_bytes(bytes: [u8; 4]) -> Self {
        Color(u32::from_ne_bytes(bytes))
    }

    /// Store the low-order `dst.len()` bytes (at most 4) in native order
    ///
    /// Narrower pixels keep the low channels, as a `u16`/`u24` store would.
    pub fn store_low_bytes(self, dst: &mut [u8]) {
        let bytes = self.to_ne_bytes();
        let len = dst.len().min(bytes.len());
        let low = if cfg!(target_endian = "little") {
            &bytes[..len]
        } else {
            &bytes[bytes.len() - len..]
        };
        dst[..len].copy_from_slice(low);
    }

    /// Inverse of `store_low_bytes`: missing high-order bytes read as zero
    pub fn load_low_bytes(src: &[u8]) -> Self {
        let mut bytes = [0u8; 4];
        let len = src.len().min(bytes.len());
        if cfg!(target_endian = "little") {
            bytes[..len].copy_from_slice(&src[..len]);
        } else {
            bytes[4 - len..].copy_from_slice(&src[..len]);
        }
        Color::from_ne_bytes(bytes)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
