use crate::diagnostics::TimingBreakdown;
use crate::types::Region;
use serde::Serialize;

/// Result produced by [`RegionDetector::detect_with_report`](crate::RegionDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub regions: Vec<Region>,
    pub trace: PipelineTrace,
}

/// Per-stage counts and timings of one detector run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub edges: EdgeStage,
    pub text: BranchCounts,
    pub smooth: SmoothStage,
    pub dedup: DedupStage,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Edge extraction, clustering and border rectangles.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStage {
    pub edge_points: usize,
    pub clusters: usize,
    pub candidates: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCounts {
    pub candidates: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothStage {
    /// Tiles that passed the variance test.
    pub smooth_blocks: usize,
    /// Regions left after merging and the area filter.
    pub candidates: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupStage {
    pub input: usize,
    pub kept: usize,
    pub removed: usize,
}

impl PipelineTrace {
    /// Total candidates handed to deduplication.
    pub fn candidates(&self) -> usize {
        self.edges.candidates + self.text.candidates + self.smooth.candidates
    }
}
