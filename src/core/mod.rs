pub mod color;
pub mod error;
pub mod fbdev;
pub mod geometry;
pub mod idle;
pub mod memory;
pub mod raster;
pub mod shutdown;
pub mod surface;

pub use color::Color;
pub use error::{InfoQuery, SurfaceError};
pub use fbdev::{FbDev, FixScreenInfo, FramebufferDevice, VarScreenInfo};
pub use geometry::Geometry;
pub use idle::{Heartbeat, IdleLoop};
pub use memory::MemorySurface;
pub use raster::{draw_text, execute, fill_rect, get_pixel, set_pixel, DrawOp};
pub use shutdown::ShutdownFlag;
pub use surface::{FormatPolicy, Surface};
