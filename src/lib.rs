#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Building blocks – public for tooling and tests, but considered internals.
pub mod cluster;
pub mod config;
pub mod edges;
pub mod regions;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect, DetectionConfig, RegionDetector, RegionIdSource, SequentialIds};
pub use crate::error::{Error, Result};
pub use crate::image::ImageRgba8;
pub use crate::types::{Bounds, DetectedRegion, Rectangle, Region, RegionKind};

// Diagnostics returned by `RegionDetector::detect_with_report`.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use card_regions::prelude::*;
///
/// # fn main() -> card_regions::Result<()> {
/// let (w, h) = (320usize, 200usize);
/// let rgba = vec![255u8; w * h * 4];
/// let img = ImageRgba8::new(w, h, &rgba)?;
///
/// let detector = RegionDetector::new(DetectionConfig::default());
/// let report = detector.detect_with_report(img)?;
/// println!("regions={} total_ms={:.3}", report.regions.len(), report.trace.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{DetectionConfig, Region, RegionDetector, RegionKind};
}
