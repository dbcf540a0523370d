//! Parameter types configuring the detector stages.
//!
//! Every threshold of the heuristic pipeline lives here with its default value,
//! grouped by the branch that consumes it. The whole
//! tree deserializes with `#[serde(default)]`, so a JSON config only needs to
//! name the knobs it changes.

use crate::cluster::ClusterOptions;
use crate::edges::EdgeOptions;
use crate::regions::{BorderOptions, DedupOptions, SmoothOptions, TextOptions};
use serde::{Deserialize, Serialize};

/// Detector-wide thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Sobel magnitude threshold for edge points.
    pub edges: EdgeOptions,
    /// Proximity clustering of edge points.
    pub clustering: ClusterOptions,
    /// Bounding boxes of edge clusters.
    pub border: BorderOptions,
    /// Ink binarisation and text-line shape filter.
    pub text: TextOptions,
    /// Block variance scan and merging.
    pub smooth: SmoothOptions,
    /// Overlap suppression across all branches.
    pub dedup: DedupOptions,
}
