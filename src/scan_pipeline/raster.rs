//! Raster buffer module
//!
//! The owned RGBA raster every stage reads from and allocates anew, plus the
//! 3x3 kernel window and row-parallel helpers shared by the stages.

mod types;
mod kernel;
pub(crate) mod parallel;


pub use types::{RasterBuffer, Rgba};
pub use kernel::{WINDOW_OFFSETS, luma, luma_bin};
