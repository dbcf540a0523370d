//! Region detector orchestrating the border, text and smooth-area branches.
//!
//! Overview
//! - Border: Sobel magnitude on RGB-mean luminance is thresholded into sparse
//!   edge points, which are flood-filled into proximity clusters through a
//!   uniform grid index. Each cluster's bounding box is scored by edge density
//!   along its perimeter times mean strength.
//! - Text: dark pixels form 8-connected components; boxes shaped like one
//!   line of print are kept with a fixed confidence.
//! - Smooth: low-variance tiles are merged in one forward pass into
//!   photo-like areas.
//! - Assembly: candidates are concatenated in branch order and overlapping
//!   duplicates are suppressed, favouring confidence then first arrival.
//!
//! Modules
//! - [`params`] – `DetectionConfig` and its per-branch option groups.
//! - `pipeline` – the [`RegionDetector`] implementation.
//! - [`ids`] – region identifier sources.
//!
//! The detector is pure: no state survives a call and the same buffer always
//! yields the same regions.

pub mod ids;
pub mod params;
mod pipeline;

pub use ids::{RegionIdSource, SequentialIds};
pub use params::DetectionConfig;
pub use pipeline::{detect, RegionDetector};
