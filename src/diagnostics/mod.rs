//! Diagnostics data model returned next to the detected regions.
//!
//! `DetectionReport` is what `RegionDetector::detect_with_report` returns: the
//! final regions plus a `PipelineTrace` with per-branch candidate counts and
//! stage timings. Everything serializes to camelCase JSON for tooling.

pub mod pipeline;
pub mod timing;

pub use pipeline::{
    BranchCounts, DedupStage, DetectionReport, EdgeStage, InputDescriptor, PipelineTrace,
    SmoothStage,
};
pub use timing::{StageTiming, TimingBreakdown};
