use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which of the two geometry queries failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoQuery {
    Fixed,
    Variable,
}

impl fmt::Display for InfoQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoQuery::Fixed => write!(f, "fixed"),
            InfoQuery::Variable => write!(f, "variable"),
        }
    }
}

/// Failures while acquiring a surface. All are fatal to the caller.
#[derive(Debug)]
pub enum SurfaceError {
    /// The device node could not be opened
    DeviceUnavailable { path: PathBuf, source: io::Error },
    /// A screen info ioctl failed
    InfoQueryFailed { query: InfoQuery, source: io::Error },
    /// The pixel memory could not be mapped
    MappingFailed { len: usize, source: io::Error },
    /// The device reports a pixel depth other than 32 bits
    UnsupportedPixelFormat { bits_per_pixel: u32 },
}

impl SurfaceError {
    /// Short stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SurfaceError::DeviceUnavailable { .. } => "DeviceUnavailable",
            SurfaceError::InfoQueryFailed { .. } => "InfoQueryFailed",
            SurfaceError::MappingFailed { .. } => "MappingFailed",
            SurfaceError::UnsupportedPixelFormat { .. } => "UnsupportedPixelFormat",
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::DeviceUnavailable { path, .. } => {
                write!(f, "cannot open framebuffer device {}", path.display())
            }
            SurfaceError::InfoQueryFailed { query, .. } => {
                write!(f, "error reading {} screen information", query)
            }
            SurfaceError::MappingFailed { len, .. } => {
                write!(f, "failed to map framebuffer device to memory ({} bytes)", len)
            }
            SurfaceError::UnsupportedPixelFormat { bits_per_pixel } => {
                write!(f, "unsupported pixel format: {} bits per pixel", bits_per_pixel)
            }
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::DeviceUnavailable { source, .. }
            | SurfaceError::InfoQueryFailed { source, .. }
            | SurfaceError::MappingFailed { source, .. } => Some(source),
            SurfaceError::UnsupportedPixelFormat { .. } => None,
        }
    }
}
