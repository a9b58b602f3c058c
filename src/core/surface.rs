use std::io;
use std::path::Path;

use log::debug;
use memmap2::MmapMut;

use super::error::{InfoQuery, SurfaceError};
use super::fbdev::{FbDev, FramebufferDevice};
use super::geometry::Geometry;
use crate::traits::PixelBuffer;

/// Whether to accept pixel depths other than 32 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPolicy {
    /// Fail at open time unless the device reports 32 bits per pixel
    #[default]
    Require32,
    /// Accept any depth of at least 8 bits; colours may be wrong but each
    /// write stays inside its own pixel
    Any,
}

/// One open, mapped display buffer
///
/// The mapping lives exactly as long as the surface. Both the mapping and
/// the device handle are released when the surface is dropped, so every exit
/// path of the owning scope frees them; `close` does the same explicitly.
pub struct Surface<D: FramebufferDevice = FbDev> {
    geometry: Geometry,
    // Declared before `device` so the region is unmapped before the handle closes
    memory: MmapMut,
    device: D,
}

impl Surface<FbDev> {
    /// Open a framebuffer device node and map its pixel memory
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SurfaceError> {
        Self::open_with(path, FormatPolicy::default())
    }

    /// Open with an explicit pixel format policy
    pub fn open_with(path: impl AsRef<Path>, policy: FormatPolicy) -> Result<Self, SurfaceError> {
        let path = path.as_ref();
        let device = FbDev::open(path).map_err(|source| SurfaceError::DeviceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened {}", path.display());

        Self::from_device(device, policy)
    }
}

impl<D: FramebufferDevice> Surface<D> {
    /// Query an already-open device and map its memory
    ///
    /// On failure the device is dropped before the error is returned.
    pub fn from_device(device: D, policy: FormatPolicy) -> Result<Self, SurfaceError> {
        let fixed = device.fixed_info().map_err(|source| SurfaceError::InfoQueryFailed {
            query: InfoQuery::Fixed,
            source,
        })?;
        let variable = device.variable_info().map_err(|source| SurfaceError::InfoQueryFailed {
            query: InfoQuery::Variable,
            source,
        })?;

        let geometry = Geometry::from_screen_info(&fixed, &variable);
        debug!(
            "fb '{}': {}x{} (virtual {}x{}) @{}bpp, stride {}, pan ({}, {}), smem_len {}",
            fixed.id_str(),
            geometry.width,
            geometry.height,
            geometry.virtual_width,
            geometry.virtual_height,
            geometry.bits_per_pixel,
            geometry.line_length,
            geometry.x_offset,
            geometry.y_offset,
            fixed.smem_len,
        );

        let supported = match policy {
            FormatPolicy::Require32 => geometry.bits_per_pixel == 32,
            FormatPolicy::Any => geometry.bytes_per_pixel() > 0,
        };
        if !supported {
            return Err(SurfaceError::UnsupportedPixelFormat {
                bits_per_pixel: geometry.bits_per_pixel,
            });
        }

        let len = geometry.map_len();
        if len == 0 {
            return Err(SurfaceError::MappingFailed {
                len,
                source: io::Error::new(io::ErrorKind::InvalidInput, "device reports an empty buffer"),
            });
        }

        let memory = device
            .map(len)
            .map_err(|source| SurfaceError::MappingFailed { len, source })?;
        debug!("mapped {} bytes of framebuffer memory", len);

        Ok(Self { geometry, memory, device })
    }

    /// Unmap the region and close the device
    pub fn close(self) {
        let Surface { geometry, memory, device } = self;
        drop(memory);
        drop(device);
        debug!("released {} bytes of framebuffer memory", geometry.map_len());
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.geometry.bits_per_pixel
    }

    pub fn line_length(&self) -> u32 {
        self.geometry.line_length
    }

    /// Pan offsets (x, y)
    pub fn offsets(&self) -> (u32, u32) {
        (self.geometry.x_offset, self.geometry.y_offset)
    }

    /// Length of the mapped region in bytes
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// The underlying device
    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: FramebufferDevice> PixelBuffer for Surface<D> {
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
