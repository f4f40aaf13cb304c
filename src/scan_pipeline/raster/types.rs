//! Raster data types

use crate::scan_pipeline::common::error::{FailureReason, Result};

/// One 8-bit pixel, `[r, g, b, a]`.
pub type Rgba = [u8; 4];

/// An owned 2-D array of RGBA pixels.
///
/// A buffer is never mutated once a stage has produced it; every stage reads
/// one snapshot and allocates its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

/// `width * height * channels`, or `None` when it does not fit in `usize`.
fn checked_len(width: u32, height: u32, channels: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(channels)
}

impl RasterBuffer {
    /// Wraps row-major pixels, failing when the count does not match the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        let expected = checked_len(width, height, 1);
        if expected != Some(pixels.len()) {
            return Err(FailureReason::DecodeFailure {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: pixels.len(),
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a raster from interleaved RGBA bytes and declared dimensions.
    ///
    /// Dimensions whose byte length overflows `usize` are a `DecodeFailure`
    /// with `expected` saturated to `usize::MAX`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = checked_len(width, height, 4);
        if expected != Some(bytes.len()) {
            return Err(FailureReason::DecodeFailure {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: bytes.len(),
            }
            .into());
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    pub(crate) fn from_parts_unchecked(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels not on the 1-pixel border, i.e. those with a full 3x3 window.
    pub fn interior_len(&self) -> usize {
        self.width.saturating_sub(2) as usize * self.height.saturating_sub(2) as usize
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }

    /// True for pixels with a full 3x3 neighborhood.
    #[inline]
    pub fn is_interior(&self, x: u32, y: u32) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.width && y + 1 < self.height
    }
}
