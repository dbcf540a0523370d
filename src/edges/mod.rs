//! Edge extraction: Sobel gradients on RGB-mean luminance, thresholded into a
//! sparse list of edge points.
//!
//! - Luminance is the unweighted mean of R, G and B, computed inline for each
//!   3×3 neighbourhood; no grayscale buffer is materialised.
//! - Only interior pixels are visited (the outermost 1-pixel frame is
//!   skipped), so neighbour lookups never leave the image.
//! - With the `parallel` feature the row loop is split across threads; rows
//!   are concatenated in order so the output does not depend on scheduling.

pub mod extract;
pub mod grad;

pub use extract::{extract_edge_points, EdgeOptions, EdgePoint};
pub use grad::{sobel_at, Gradient};
