//! Proximity clustering of sparse edge points.
//!
//! Two points share a cluster when a chain of points connects them with every
//! hop no longer than `radius`. Growth is a breadth-first flood fill; the
//! neighbour scan goes through a uniform grid of `radius`-sized cells so each
//! expansion only inspects the 3×3 surrounding cells instead of every point.
//! Clusters smaller than `min_points` are treated as noise and dropped.

pub(crate) mod accumulator;
mod grid_index;

use crate::edges::EdgePoint;
use accumulator::PointAccumulator;
use grid_index::GridIndex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Maximum hop distance (pixels, inclusive) between neighbouring points.
    pub radius: f32,
    /// Clusters with fewer points are discarded.
    pub min_points: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            radius: 20.0,
            min_points: 10,
        }
    }
}

/// Group of edge points connected by short hops.
#[derive(Clone, Debug)]
pub struct EdgeCluster {
    pub points: Vec<EdgePoint>,
    pub mean_strength: f32,
}

impl EdgeCluster {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Flood-fill `points` into proximity clusters.
///
/// Seeds are taken in input order, so cluster order follows the first
/// (row-major) point of each cluster.
pub fn cluster_edge_points(points: &[EdgePoint], opts: &ClusterOptions) -> Vec<EdgeCluster> {
    if points.is_empty() {
        return Vec::new();
    }
    let radius = opts.radius.max(0.0);
    let r2 = radius * radius;
    let index = GridIndex::build(points.iter().map(|p| (p.x, p.y)), radius);

    let mut visited = vec![false; points.len()];
    let mut queue = VecDeque::new();
    let mut acc = PointAccumulator::with_capacity(256);
    let mut clusters = Vec::new();

    for seed in 0..points.len() {
        if visited[seed] {
            continue;
        }
        acc.reset();
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(i) = queue.pop_front() {
            let p = points[i];
            acc.push(i, p.strength);
            index.for_each_candidate(p.x, p.y, |j| {
                if visited[j] {
                    return;
                }
                let q = points[j];
                let dx = q.x as f32 - p.x as f32;
                let dy = q.y as f32 - p.y as f32;
                if dx * dx + dy * dy <= r2 {
                    visited[j] = true;
                    queue.push_back(j);
                }
            });
        }

        if acc.len() < opts.min_points {
            continue;
        }
        clusters.push(EdgeCluster {
            points: acc.indices.iter().map(|&i| points[i]).collect(),
            mean_strength: acc.mean_strength(),
        });
    }

    clusters
}
