//! Borrowed RGBA8 pixel buffer in row-major layout.
//!
//! The detector never mutates the samples and never keeps a separate
//! grayscale copy: luminance is computed on demand from the interleaved
//! channels.
use crate::error::{Error, Result};

/// Interleaved samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgba8<'a> {
    /// Wrap a tightly packed RGBA8 buffer (`stride == 4 * w`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        Self::with_stride(w, h, w.saturating_mul(CHANNELS), data)
    }

    /// Wrap an RGBA8 buffer whose rows are `stride` bytes apart.
    pub fn with_stride(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        let img = Self { w, h, stride, data };
        img.validate()?;
        Ok(img)
    }

    /// Check the geometry against the backing slice.
    ///
    /// Fields are public, so the detector re-validates before touching pixels.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(Error::InvalidInput(format!(
                "image dimensions must be positive, got {}x{}",
                self.w, self.h
            )));
        }
        let row_bytes = self
            .w
            .checked_mul(CHANNELS)
            .ok_or_else(|| Error::InvalidInput(format!("width {} overflows", self.w)))?;
        if self.stride < row_bytes {
            return Err(Error::InvalidInput(format!(
                "stride {} is smaller than one row of {} bytes",
                self.stride, row_bytes
            )));
        }
        let required = (self.h - 1)
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(row_bytes))
            .ok_or_else(|| Error::InvalidInput("image geometry overflows".to_string()))?;
        if self.data.len() < required {
            return Err(Error::InvalidInput(format!(
                "buffer holds {} bytes, {}x{} RGBA8 needs {}",
                self.data.len(),
                self.w,
                self.h,
                required
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Unweighted mean of R, G and B at (x, y), on a 0–255 scale.
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> f32 {
        let i = y * self.stride + x * CHANNELS;
        luma_of(&self.data[i..i + 3])
    }
}

/// Unweighted mean of the first three samples of an RGBA pixel.
#[inline]
pub fn luma_of(px: &[u8]) -> f32 {
    (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0
}

impl<'a> crate::image::traits::ImageView for ImageRgba8<'a> {
    type Sample = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * CHANNELS]
    }
}
