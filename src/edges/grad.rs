//! 3×3 Sobel gradient evaluated directly on an RGBA neighbourhood.
//!
//! `Gx = -TL - 2L - BL + TR + 2R + BR`, `Gy = -TL - 2T - TR + BL + 2B + BR`,
//! with each tap being the RGB-mean luminance of that pixel.
use crate::image::rgba::luma_of;
use crate::image::{ImageRgba8, ImageView, CHANNELS};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Horizontal and vertical derivative at one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gradient {
    pub gx: f32,
    pub gy: f32,
}

impl Gradient {
    /// Euclidean magnitude `sqrt(gx^2 + gy^2)`.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.gx * self.gx + self.gy * self.gy).sqrt()
    }
}

/// Sobel response at interior column `x` given the rows above, at and below.
#[inline]
pub(crate) fn sobel_from_rows(rows: [&[u8]; 3], x: usize) -> Gradient {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for (ky, row) in rows.iter().enumerate() {
        let kx_row = &SOBEL_KERNEL_X[ky];
        let ky_row = &SOBEL_KERNEL_Y[ky];
        for (k, xx) in [x - 1, x, x + 1].into_iter().enumerate() {
            let start = xx * CHANNELS;
            let l = luma_of(&row[start..start + 3]);
            sum_x += l * kx_row[k];
            sum_y += l * ky_row[k];
        }
    }
    Gradient {
        gx: sum_x,
        gy: sum_y,
    }
}

/// Sobel gradient at (x, y). Requires `1 <= x < w - 1` and `1 <= y < h - 1`.
pub fn sobel_at(img: &ImageRgba8, x: usize, y: usize) -> Gradient {
    debug_assert!(x >= 1 && x + 1 < img.w && y >= 1 && y + 1 < img.h);
    sobel_from_rows([img.row(y - 1), img.row(y), img.row(y + 1)], x)
}
