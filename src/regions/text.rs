//! Text-line localisation via connected components of dark pixels.
//!
//! The image is binarised on RGB-mean luminance, 8-connected ink components
//! are grown with an explicit stack, and only boxes shaped like a single line
//! of print survive. There is no recognition step, so every block gets the
//! same fixed confidence.
use super::bounds_of;
use crate::cluster::accumulator::PointAccumulator;
use crate::image::rgba::luma_of;
use crate::image::{ImageRgba8, ImageView, CHANNELS};
use crate::types::Rectangle;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// A pixel is ink when its luminance is strictly below this.
    pub ink_threshold: f32,
    /// Components with fewer pixels are dropped.
    pub min_pixels: usize,
    /// Exclusive lower bound on `width / height`.
    pub min_aspect: f32,
    /// Exclusive upper bound on `width / height`.
    pub max_aspect: f32,
    /// Boxes must be strictly wider than this.
    pub min_width: f32,
    /// Boxes must be strictly taller than this.
    pub min_height: f32,
    pub confidence: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            ink_threshold: 128.0,
            min_pixels: 50,
            min_aspect: 1.5,
            max_aspect: 10.0,
            min_width: 20.0,
            min_height: 8.0,
            confidence: 0.7,
        }
    }
}

impl TextOptions {
    fn accepts(&self, rect: &Rectangle) -> bool {
        let aspect = rect.width / rect.height;
        aspect > self.min_aspect
            && aspect < self.max_aspect
            && rect.width > self.min_width
            && rect.height > self.min_height
    }
}

fn binarize_row(row: &[u8], threshold: f32, out: &mut [bool]) {
    for (px, ink) in row.chunks_exact(CHANNELS).zip(out.iter_mut()) {
        *ink = luma_of(px) < threshold;
    }
}

/// Row-major ink mask (`true` = dark pixel).
pub fn ink_mask(img: &ImageRgba8, threshold: f32) -> Vec<bool> {
    let mut mask = vec![false; img.w * img.h];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        mask.par_chunks_mut(img.w)
            .enumerate()
            .for_each(|(y, out)| binarize_row(img.row(y), threshold, out));
    }
    #[cfg(not(feature = "parallel"))]
    for (row, out) in img.rows().zip(mask.chunks_mut(img.w)) {
        binarize_row(row, threshold, out);
    }

    mask
}

/// Bounding boxes of 8-connected ink components, in scan order of each
/// component's first pixel, before the shape filter.
pub fn ink_components(mask: &[bool], w: usize, h: usize, min_pixels: usize) -> Vec<Rectangle> {
    let mut visited = vec![false; mask.len()];
    let mut stack = Vec::new();
    let mut acc = PointAccumulator::with_capacity(256);
    let mut out = Vec::new();

    for seed in 0..mask.len() {
        if !mask[seed] || visited[seed] {
            continue;
        }
        acc.reset();
        visited[seed] = true;
        stack.push(seed);

        while let Some(idx) = stack.pop() {
            acc.push_index(idx);
            let (x, y) = (idx % w, idx / w);
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let n = ny * w + nx;
                    if mask[n] && !visited[n] {
                        visited[n] = true;
                        stack.push(n);
                    }
                }
            }
        }

        if acc.len() < min_pixels {
            continue;
        }
        let pixels = acc.indices.iter().map(|&i| ((i % w) as u32, (i / w) as u32));
        if let Some(b) = bounds_of(pixels) {
            out.push(b.to_rectangle(1.0));
        }
    }

    out
}

/// Locate single lines of printed text.
pub fn find_text_blocks(img: &ImageRgba8, opts: &TextOptions) -> Vec<Rectangle> {
    let mask = ink_mask(img, opts.ink_threshold);
    ink_components(&mask, img.w, img.h, opts.min_pixels)
        .into_iter()
        .filter(|rect| opts.accepts(rect))
        .map(|rect| Rectangle {
            confidence: opts.confidence.clamp(0.0, 1.0),
            ..rect
        })
        .collect()
}
