//! Linux fbdev boundary: kernel ABI structs, the device trait and `/dev/fbN`
//!
//! Layouts follow `<linux/fb.h>`.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::Path;

use bytemuck::Zeroable;
use memmap2::{MmapMut, MmapOptions};

use super::geometry::Geometry;

/// `FBIOGET_VSCREENINFO`
pub const FBIOGET_VSCREENINFO: libc::c_ulong = 0x4600;
/// `FBIOGET_FSCREENINFO`
pub const FBIOGET_FSCREENINFO: libc::c_ulong = 0x4602;

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable)]
pub struct FixScreenInfo {
    pub id: [u8; 16],
    pub smem_start: libc::c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: libc::c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

impl FixScreenInfo {
    /// Driver identification string, trimmed at the first NUL
    pub fn id_str(&self) -> String {
        let end = self.id.iter().position(|&b| b == 0).unwrap_or(self.id.len());
        String::from_utf8_lossy(&self.id[..end]).into_owned()
    }
}

impl Default for FixScreenInfo {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// `struct fb_bitfield`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Zeroable)]
pub struct Bitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Zeroable)]
pub struct VarScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: Bitfield,
    pub green: Bitfield,
    pub blue: Bitfield,
    pub transp: Bitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

impl Geometry {
    /// Combine the two screen info records into a geometry
    pub fn from_screen_info(fixed: &FixScreenInfo, variable: &VarScreenInfo) -> Self {
        Geometry::new(
            variable.xres,
            variable.yres,
            variable.bits_per_pixel,
            fixed.line_length,
        )
        .with_virtual(variable.xres_virtual, variable.yres_virtual)
        .with_pan(variable.xoffset, variable.yoffset)
    }
}

/// A display device that can describe its layout and expose its pixel memory
pub trait FramebufferDevice {
    /// Query fixed screen info (stride, memory length)
    fn fixed_info(&self) -> io::Result<FixScreenInfo>;

    /// Query variable screen info (resolution, depth, pan offsets)
    fn variable_info(&self) -> io::Result<VarScreenInfo>;

    /// Map `len` bytes of pixel memory, shared and read/write
    fn map(&self, len: usize) -> io::Result<MmapMut>;
}

/// A Linux framebuffer character device
#[derive(Debug)]
pub struct FbDev {
    file: File,
}

impl FbDev {
    /// Open the device node for read/write
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self { file })
    }

    /// Issue a read-style ioctl filling a zeroed `T`
    ///
    /// # Safety
    /// `request` must be an ioctl that writes exactly one `T`.
    unsafe fn ioctl_read<T: Zeroable>(&self, request: libc::c_ulong) -> io::Result<T> {
        let mut value = T::zeroed();
        let ret = libc::ioctl(self.file.as_raw_fd(), request as _, &mut value as *mut T);
        if ret == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(value)
        }
    }
}

impl FramebufferDevice for FbDev {
    fn fixed_info(&self) -> io::Result<FixScreenInfo> {
        // SAFETY: FBIOGET_FSCREENINFO fills a struct fb_fix_screeninfo
        unsafe { self.ioctl_read(FBIOGET_FSCREENINFO) }
    }

    fn variable_info(&self) -> io::Result<VarScreenInfo> {
        // SAFETY: FBIOGET_VSCREENINFO fills a struct fb_var_screeninfo
        unsafe { self.ioctl_read(FBIOGET_VSCREENINFO) }
    }

    fn map(&self, len: usize) -> io::Result<MmapMut> {
        // SAFETY: the mapping is owned by the surface and only reached through slices
        unsafe { MmapOptions::new().len(len).map_mut(&self.file) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abi_sizes_match_kernel_headers() {
        assert_eq!(std::mem::size_of::<VarScreenInfo>(), 160);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(std::mem::size_of::<FixScreenInfo>(), 80);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(std::mem::size_of::<FixScreenInfo>(), 68);
    }

    #[test]
    fn id_is_trimmed_at_nul() {
        let mut fixed = FixScreenInfo::default();
        fixed.id[..6].copy_from_slice(b"simple");
        assert_eq!(fixed.id_str(), "simple");
    }

    #[test]
    fn geometry_from_screen_info() {
        let fixed = FixScreenInfo { line_length: 3200, ..Default::default() };
        let variable = VarScreenInfo {
            xres: 800,
            yres: 480,
            xres_virtual: 800,
            yres_virtual: 960,
            yoffset: 480,
            bits_per_pixel: 32,
            ..Default::default()
        };

        let geometry = Geometry::from_screen_info(&fixed, &variable);
        assert_eq!(geometry.width, 800);
        assert_eq!(geometry.virtual_height, 960);
        assert_eq!(geometry.y_offset, 480);
        assert_eq!(geometry.map_len(), 960 * 3200);
    }

    #[test]
    fn queries_fail_on_regular_file() {
        let path = std::env::temp_dir().join(format!("fb-demo-fbdev-{}", std::process::id()));
        std::fs::write(&path, [0u8; 64]).unwrap();

        let device = FbDev::open(&path).unwrap();
        assert!(device.fixed_info().is_err());
        assert!(device.variable_info().is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
