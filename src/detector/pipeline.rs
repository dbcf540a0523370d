//! Detector pipeline orchestrating the three heuristic branches.
//!
//! The [`RegionDetector`] exposes a simple API: feed an RGBA buffer and get
//! typed, scored rectangles back. Internally it runs
//!
//! - border: Sobel edge points → proximity clusters → cluster bounding boxes,
//! - text: ink mask → 8-connected components → text-line shape filter,
//! - smooth: block variance scan → single-pass merge → area filter,
//!
//! then tags and concatenates the candidates (border, text, photo), removes
//! overlapping duplicates and assigns ids. The branches only share the
//! read-only pixel buffer; with the `parallel` feature they run concurrently.
//!
//! Typical usage:
//! ```no_run
//! use card_regions::{ImageRgba8, RegionDetector, DetectionConfig};
//!
//! # fn example(rgba: &[u8]) -> card_regions::Result<()> {
//! let image = ImageRgba8::new(640, 480, rgba)?;
//! let detector = RegionDetector::new(DetectionConfig::default());
//! for region in detector.detect(image)? {
//!     println!("{} {:?} {:.2}", region.id, region.kind, region.confidence);
//! }
//! # Ok(())
//! # }
//! ```

use super::ids::{RegionIdSource, SequentialIds};
use super::params::DetectionConfig;
use crate::cluster::cluster_edge_points;
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace};
use crate::edges::extract_edge_points;
use crate::error::Result;
use crate::image::ImageRgba8;
use crate::regions::smooth::merge_smooth_blocks;
use crate::regions::{
    border_rectangles, dedup_regions, find_smooth_blocks, find_text_blocks, tag, TypedRect,
};
use crate::types::{Rectangle, Region, RegionKind};
use log::debug;
use std::time::Instant;

/// Stateless detector holding only its thresholds.
#[derive(Clone, Debug, Default)]
pub struct RegionDetector {
    config: DetectionConfig,
}

struct BorderBranch {
    rects: Vec<Rectangle>,
    edge_points: usize,
    clusters: usize,
    extract_ms: f64,
    cluster_ms: f64,
    rect_ms: f64,
}

struct TextBranch {
    rects: Vec<Rectangle>,
    elapsed_ms: f64,
}

struct SmoothBranch {
    rects: Vec<Rectangle>,
    blocks: usize,
    scan_ms: f64,
    merge_ms: f64,
}

#[inline]
fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Clip to the image and drop anything left without area.
fn finalize(rects: Vec<Rectangle>, w: usize, h: usize) -> Vec<Rectangle> {
    rects
        .into_iter()
        .map(|r| r.clamped(w, h))
        .filter(|r| r.width > 0.0 && r.height > 0.0)
        .collect()
}

impl RegionDetector {
    /// Create a detector with the supplied thresholds.
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect regions; ids are `"{kind}-{n}"` numbered from 0 in output order.
    pub fn detect(&self, image: ImageRgba8) -> Result<Vec<Region>> {
        Ok(self.detect_with_report(image)?.regions)
    }

    /// Detect regions, drawing ids from `ids`.
    pub fn detect_with_ids(
        &self,
        image: ImageRgba8,
        ids: &mut dyn RegionIdSource,
    ) -> Result<Vec<Region>> {
        Ok(self.run(image, ids)?.regions)
    }

    /// Detect regions and capture per-stage counts and timings.
    pub fn detect_with_report(&self, image: ImageRgba8) -> Result<DetectionReport> {
        self.run(image, &mut SequentialIds::default())
    }

    fn run(&self, image: ImageRgba8, ids: &mut dyn RegionIdSource) -> Result<DetectionReport> {
        image.validate()?;
        let total_start = Instant::now();
        let img = &image;

        #[cfg(feature = "parallel")]
        let (border, (text, smooth)) = rayon::join(
            || self.border_branch(img),
            || rayon::join(|| self.text_branch(img), || self.smooth_branch(img)),
        );
        #[cfg(not(feature = "parallel"))]
        let (border, text, smooth) = (
            self.border_branch(img),
            self.text_branch(img),
            self.smooth_branch(img),
        );

        debug!(
            "RegionDetector::run {}x{} edges={} clusters={} border={} text={} blocks={} photo={}",
            image.w,
            image.h,
            border.edge_points,
            border.clusters,
            border.rects.len(),
            text.rects.len(),
            smooth.blocks,
            smooth.rects.len()
        );

        let mut trace = PipelineTrace {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
            },
            ..Default::default()
        };
        trace.edges.edge_points = border.edge_points;
        trace.edges.clusters = border.clusters;
        trace.edges.candidates = border.rects.len();
        trace.text.candidates = text.rects.len();
        trace.smooth.smooth_blocks = smooth.blocks;
        trace.smooth.candidates = smooth.rects.len();
        trace.timings.push("edge_extract", border.extract_ms);
        trace.timings.push("edge_cluster", border.cluster_ms);
        trace.timings.push("border_rects", border.rect_ms);
        trace.timings.push("text_blocks", text.elapsed_ms);
        trace.timings.push("smooth_scan", smooth.scan_ms);
        trace.timings.push("smooth_merge", smooth.merge_ms);

        let dedup_start = Instant::now();
        let candidates: Vec<TypedRect> = tag(RegionKind::Border, border.rects)
            .chain(tag(RegionKind::Text, text.rects))
            .chain(tag(RegionKind::Photo, smooth.rects))
            .collect();
        let kept = dedup_regions(&candidates, &self.config.dedup);
        trace.dedup.input = candidates.len();
        trace.dedup.kept = kept.len();
        trace.dedup.removed = candidates.len() - kept.len();
        trace.timings.push("dedup", ms_since(dedup_start));
        debug!(
            "RegionDetector::run dedup kept {} of {} candidates",
            kept.len(),
            candidates.len()
        );

        let regions = kept
            .into_iter()
            .map(|TypedRect { kind, rect }| {
                let bounds = rect.bounds();
                Region {
                    id: ids.next_id(kind, &bounds),
                    kind,
                    bounds,
                    confidence: rect.confidence,
                    layer_ids: Vec::new(),
                }
            })
            .collect();

        trace.timings.total_ms = ms_since(total_start);
        Ok(DetectionReport { regions, trace })
    }

    fn border_branch(&self, img: &ImageRgba8) -> BorderBranch {
        let start = Instant::now();
        let points = extract_edge_points(img, &self.config.edges);
        let extract_ms = ms_since(start);

        let start = Instant::now();
        let clusters = cluster_edge_points(&points, &self.config.clustering);
        let cluster_ms = ms_since(start);

        let start = Instant::now();
        let rects = finalize(
            border_rectangles(&clusters, &self.config.border),
            img.w,
            img.h,
        );
        let rect_ms = ms_since(start);

        BorderBranch {
            rects,
            edge_points: points.len(),
            clusters: clusters.len(),
            extract_ms,
            cluster_ms,
            rect_ms,
        }
    }

    fn text_branch(&self, img: &ImageRgba8) -> TextBranch {
        let start = Instant::now();
        let rects = finalize(find_text_blocks(img, &self.config.text), img.w, img.h);
        TextBranch {
            rects,
            elapsed_ms: ms_since(start),
        }
    }

    fn smooth_branch(&self, img: &ImageRgba8) -> SmoothBranch {
        let start = Instant::now();
        let blocks = find_smooth_blocks(img, &self.config.smooth);
        let scan_ms = ms_since(start);

        let start = Instant::now();
        let rects = finalize(
            merge_smooth_blocks(&blocks, &self.config.smooth, img.w, img.h),
            img.w,
            img.h,
        );
        SmoothBranch {
            rects,
            blocks: blocks.len(),
            scan_ms,
            merge_ms: ms_since(start),
        }
    }
}

/// Run the detector with default thresholds.
pub fn detect(image: ImageRgba8) -> Result<Vec<Region>> {
    RegionDetector::default().detect(image)
}
