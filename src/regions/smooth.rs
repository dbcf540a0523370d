//! Photo-like area detection from per-block luminance variance.
//!
//! The image is tiled into non-overlapping `block_size` squares (partial
//! tiles at the right and bottom edges are skipped). A tile whose luminance
//! variance is below the threshold becomes a candidate scored
//! `1 - variance / variance_scale`. Candidates are then merged in a single
//! forward pass and small results are dropped.
//!
//! The pass does not reach a fixed point: once a union has grown past a tile
//! on both axes that tile is no longer edge-adjacent to it and seeds a union
//! of its own. On a uniform grid this leaves a staircase of nested areas
//! inside the first one; overlap suppression downstream removes them.
use crate::image::rgba::luma_of;
use crate::image::{ImageRgba8, ImageView, CHANNELS};
use crate::types::Rectangle;
use log::trace;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothOptions {
    /// Tile edge length in pixels.
    pub block_size: usize,
    /// Tiles with variance strictly below this are candidates.
    pub variance_threshold: f32,
    /// Confidence is `1 - variance / variance_scale`, clamped to `[0, 1]`.
    pub variance_scale: f32,
    /// Maximum gap (pixels, inclusive) between opposing edges for adjacency.
    pub adjacency_px: f32,
    /// Merged areas must be strictly larger than this.
    pub min_area: f32,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            block_size: 16,
            variance_threshold: 500.0,
            variance_scale: 1000.0,
            adjacency_px: 5.0,
            min_area: 2000.0,
        }
    }
}

/// Population variance of the tile's luminance, two-pass (mean first).
fn block_variance(img: &ImageRgba8, x0: usize, y0: usize, size: usize, lumas: &mut Vec<f32>) -> f32 {
    lumas.clear();
    for y in y0..y0 + size {
        let row = img.row(y);
        let start = x0 * CHANNELS;
        lumas.extend(
            row[start..start + size * CHANNELS]
                .chunks_exact(CHANNELS)
                .map(luma_of),
        );
    }
    let n = lumas.len() as f32;
    let mean = lumas.iter().sum::<f32>() / n;
    lumas.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n
}

fn block_row(img: &ImageRgba8, y0: usize, opts: &SmoothOptions) -> Vec<Rectangle> {
    let size = opts.block_size;
    let mut lumas = Vec::with_capacity(size * size);
    let mut out = Vec::new();
    let mut x0 = 0;
    while x0 + size <= img.w {
        let variance = block_variance(img, x0, y0, size, &mut lumas);
        if variance < opts.variance_threshold {
            let confidence = (1.0 - variance / opts.variance_scale).clamp(0.0, 1.0);
            out.push(Rectangle::new(
                x0 as f32,
                y0 as f32,
                size as f32,
                size as f32,
                confidence,
            ));
        }
        x0 += size;
    }
    out
}

/// Low-variance tiles in row-major order, before merging.
pub fn find_smooth_blocks(img: &ImageRgba8, opts: &SmoothOptions) -> Vec<Rectangle> {
    let size = opts.block_size;
    if size == 0 || size > img.w || size > img.h {
        return Vec::new();
    }
    let block_rows = img.h / size;

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<Rectangle>> = {
        use rayon::prelude::*;
        (0..block_rows)
            .into_par_iter()
            .map(|by| block_row(img, by * size, opts))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<Rectangle>> = (0..block_rows)
        .map(|by| block_row(img, by * size, opts))
        .collect();

    rows.concat()
}

/// True when any edge of one rectangle lies within `tolerance` of the
/// opposing edge of the other.
///
/// Each of the four edge pairs is tested on its own; the other axis is not
/// required to overlap.
pub fn are_adjacent(a: &Rectangle, b: &Rectangle, tolerance: f32) -> bool {
    (a.right() - b.x).abs() <= tolerance
        || (b.right() - a.x).abs() <= tolerance
        || (a.bottom() - b.y).abs() <= tolerance
        || (b.bottom() - a.y).abs() <= tolerance
}

/// Single forward merge pass.
///
/// Each unused rectangle seeds a union that absorbs every later unused
/// rectangle adjacent to the union as it grows. Rectangles skipped before
/// the union grew towards them are not revisited, so A–B–C chains merge only
/// when the scan order reaches them through the union. Tiles swallowed by a
/// union without touching its edges stay unused and may produce nested
/// results.
pub fn merge_adjacent(blocks: &[Rectangle], tolerance: f32) -> Vec<Rectangle> {
    let mut used = vec![false; blocks.len()];
    let mut merged = Vec::new();
    for i in 0..blocks.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut current = blocks[i];
        for j in (i + 1)..blocks.len() {
            if used[j] {
                continue;
            }
            if are_adjacent(&current, &blocks[j], tolerance) {
                current = current.union(&blocks[j]);
                used[j] = true;
            }
        }
        trace!(
            "smooth region seeded at block {i}: ({}, {}) {}x{} conf={:.3}",
            current.x,
            current.y,
            current.width,
            current.height,
            current.confidence
        );
        merged.push(current);
    }
    merged
}

/// Merge candidate tiles and keep the areas large enough to be a photo.
pub fn merge_smooth_blocks(
    blocks: &[Rectangle],
    opts: &SmoothOptions,
    width: usize,
    height: usize,
) -> Vec<Rectangle> {
    merge_adjacent(blocks, opts.adjacency_px)
        .into_iter()
        .filter(|r| r.area() > opts.min_area)
        .map(|r| r.clamped(width, height))
        .collect()
}

/// Tile scan followed by merging.
pub fn find_smooth_regions(img: &ImageRgba8, opts: &SmoothOptions) -> Vec<Rectangle> {
    let blocks = find_smooth_blocks(img, opts);
    merge_smooth_blocks(&blocks, opts, img.w, img.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn block(x: f32, y: f32) -> Rectangle {
        Rectangle::new(x, y, 16.0, 16.0, 0.9)
    }

    #[test]
    fn checker_tile_variance_is_exact() {
        // 16x16 tile alternating 0 / 100 -> mean 50, variance 2500.
        let mut data = Vec::new();
        for y in 0..16 {
            for x in 0..16 {
                let v = if (x + y) % 2 == 0 { 0 } else { 100 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let img = ImageRgba8::new(16, 16, &data).unwrap();
        let mut scratch = Vec::new();
        assert_relative_eq!(block_variance(&img, 0, 0, 16, &mut scratch), 2500.0);
        assert!(find_smooth_blocks(&img, &SmoothOptions::default()).is_empty());
    }

    #[test]
    fn partial_tiles_are_skipped() {
        let data = vec![200u8; 40 * 20 * CHANNELS];
        let img = ImageRgba8::new(40, 20, &data).unwrap();
        let blocks = find_smooth_blocks(&img, &SmoothOptions::default());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].x, 16.0);
        assert!(blocks.iter().all(|b| b.confidence == 1.0));
    }

    #[test]
    fn edge_pairs_are_tested_independently_of_the_other_axis() {
        let a = block(0.0, 0.0);
        assert!(are_adjacent(&a, &block(20.0, 0.0), 5.0));
        assert!(are_adjacent(&a, &block(21.0, 300.0), 5.0));
        assert!(!are_adjacent(&a, &block(22.0, 300.0), 5.0));
        assert!(are_adjacent(&block(0.0, 21.0), &a, 5.0));
    }

    #[test]
    fn single_pass_does_not_revisit_skipped_blocks() {
        // A-B and B-C are adjacent, A-C is not. Scan order A, C, B.
        let a = block(0.0, 0.0);
        let c = Rectangle::new(40.0, 0.0, 16.0, 16.0, 0.95);
        let b = block(20.0, 0.0);
        let merged = merge_adjacent(&[a, c, b], 5.0);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], Rectangle::new(0.0, 0.0, 36.0, 16.0, 0.9));
        assert_eq!(merged[1], c);
    }

    #[test]
    fn union_keeps_max_confidence_and_area_filter_applies_after_merge() {
        let small = [
            Rectangle::new(0.0, 0.0, 16.0, 16.0, 0.4),
            Rectangle::new(16.0, 0.0, 16.0, 16.0, 0.8),
        ];
        let opts = SmoothOptions::default();
        // 32x16 = 512 <= 2000
        assert!(merge_smooth_blocks(&small, &opts, 100, 100).is_empty());
        let merged = merge_adjacent(&small, opts.adjacency_px);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].confidence, 0.8);
    }

    #[test]
    fn uniform_image_leaves_nested_staircase() {
        let data = vec![90u8; 128 * 96 * CHANNELS];
        let img = ImageRgba8::new(128, 96, &data).unwrap();
        let regions = find_smooth_regions(&img, &SmoothOptions::default());
        let geometry: Vec<_> = regions
            .iter()
            .map(|r| (r.x, r.y, r.width, r.height))
            .collect();
        assert_eq!(
            geometry,
            vec![
                (0.0, 0.0, 128.0, 96.0),
                (16.0, 16.0, 112.0, 80.0),
                (32.0, 32.0, 96.0, 64.0),
                (48.0, 48.0, 80.0, 48.0),
                (64.0, 64.0, 64.0, 32.0),
            ]
        );
        assert!(regions.iter().all(|r| r.confidence == 1.0));
    }
}
