pub mod cli;
pub mod core;
pub mod demo;
pub mod traits;

pub use crate::core::{Color, Geometry, MemorySurface, Surface, SurfaceError};
pub use traits::PixelBuffer;
