use super::bounds_of;
use crate::cluster::EdgeCluster;
use crate::types::Rectangle;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderOptions {
    /// Boxes with `width * height` below this are dropped.
    pub min_area: f32,
    /// Mean edge strength is divided by this before scoring.
    pub strength_scale: f32,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            min_area: 1000.0,
            strength_scale: 100.0,
        }
    }
}

/// Bounding box of one cluster, scored by point density along its perimeter
/// times mean edge strength.
pub fn rectangle_from_cluster(cluster: &EdgeCluster, opts: &BorderOptions) -> Option<Rectangle> {
    let b = bounds_of(cluster.points.iter().map(|p| (p.x, p.y)))?;
    let (w, h) = (b.width() as f32, b.height() as f32);
    if w * h < opts.min_area {
        return None;
    }
    let perimeter = 2.0 * (w + h);
    let density = cluster.len() as f32 / perimeter;
    let confidence = (density * (cluster.mean_strength / opts.strength_scale)).clamp(0.0, 1.0);
    Some(b.to_rectangle(confidence))
}

/// Border candidates for every cluster large enough to keep, in cluster order.
#[cfg(feature = "parallel")]
pub fn border_rectangles(clusters: &[EdgeCluster], opts: &BorderOptions) -> Vec<Rectangle> {
    use rayon::prelude::*;
    clusters
        .par_iter()
        .filter_map(|c| rectangle_from_cluster(c, opts))
        .collect()
}

/// Border candidates for every cluster large enough to keep, in cluster order.
#[cfg(not(feature = "parallel"))]
pub fn border_rectangles(clusters: &[EdgeCluster], opts: &BorderOptions) -> Vec<Rectangle> {
    clusters
        .iter()
        .filter_map(|c| rectangle_from_cluster(c, opts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::EdgePoint;

    fn ring(x0: u32, y0: u32, side: u32, strength: f32) -> EdgeCluster {
        let mut points = Vec::new();
        for i in 0..side {
            points.push(EdgePoint { x: x0 + i, y: y0, strength });
            points.push(EdgePoint { x: x0 + i, y: y0 + side - 1, strength });
        }
        for j in 1..side - 1 {
            points.push(EdgePoint { x: x0, y: y0 + j, strength });
            points.push(EdgePoint { x: x0 + side - 1, y: y0 + j, strength });
        }
        EdgeCluster {
            points,
            mean_strength: strength,
        }
    }

    #[test]
    fn ring_bounds_and_score() {
        // 40x40 ring: 156 points over a 160px perimeter.
        let cluster = ring(5, 6, 40, 50.0);
        let rect = rectangle_from_cluster(&cluster, &BorderOptions::default()).unwrap();
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (5.0, 6.0, 40.0, 40.0));
        let expected = 156.0 / 160.0 * 0.5;
        assert!((rect.confidence - expected).abs() < 1e-6);
    }

    #[test]
    fn strong_dense_cluster_saturates_at_one() {
        let cluster = ring(0, 0, 40, 1020.0);
        let rect = rectangle_from_cluster(&cluster, &BorderOptions::default()).unwrap();
        assert_eq!(rect.confidence, 1.0);
    }

    #[test]
    fn small_boxes_are_dropped() {
        // 31x31 = 961 < 1000
        let cluster = ring(0, 0, 31, 200.0);
        assert!(rectangle_from_cluster(&cluster, &BorderOptions::default()).is_none());
        let clusters = vec![ring(0, 0, 31, 200.0), ring(100, 100, 40, 200.0)];
        let rects = border_rectangles(&clusters, &BorderOptions::default());
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].x, 100.0);
    }
}
