use super::grad::sobel_from_rows;
use crate::image::{ImageRgba8, ImageView};
use serde::{Deserialize, Serialize};

/// Pixel whose Sobel magnitude exceeded the edge threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgePoint {
    pub x: u32,
    pub y: u32,
    pub strength: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Minimum Sobel magnitude (0–255 luminance scale, exclusive).
    pub magnitude_threshold: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            magnitude_threshold: 30.0,
        }
    }
}

fn row_edge_points(img: &ImageRgba8, y: usize, threshold: f32) -> Vec<EdgePoint> {
    let rows = [img.row(y - 1), img.row(y), img.row(y + 1)];
    let mut out = Vec::new();
    for x in 1..img.w - 1 {
        let strength = sobel_from_rows(rows, x).magnitude();
        if strength > threshold {
            out.push(EdgePoint {
                x: x as u32,
                y: y as u32,
                strength,
            });
        }
    }
    out
}

/// Threshold the Sobel magnitude of every interior pixel into edge points.
///
/// Points are emitted in row-major order. Images narrower or shorter than
/// 3 pixels have no interior and yield nothing.
pub fn extract_edge_points(img: &ImageRgba8, opts: &EdgeOptions) -> Vec<EdgePoint> {
    if img.w < 3 || img.h < 3 {
        return Vec::new();
    }
    let threshold = opts.magnitude_threshold;

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<EdgePoint>> = {
        use rayon::prelude::*;
        (1..img.h - 1)
            .into_par_iter()
            .map(|y| row_edge_points(img, y, threshold))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<EdgePoint>> = (1..img.h - 1)
        .map(|y| row_edge_points(img, y, threshold))
        .collect();

    rows.concat()
}
