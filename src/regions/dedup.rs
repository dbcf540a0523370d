use super::TypedRect;
use crate::types::Rectangle;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupOptions {
    /// Pairs overlapping by more than this fraction are duplicates.
    pub overlap_threshold: f32,
}

impl Default for DedupOptions {
    fn default() -> Self {
        Self {
            overlap_threshold: 0.5,
        }
    }
}

/// Intersection area over the smaller of the two areas (0 if either is empty).
pub fn overlap_fraction(a: &Rectangle, b: &Rectangle) -> f32 {
    let smaller = a.area().min(b.area());
    if smaller <= 0.0 {
        return 0.0;
    }
    a.intersection_area(b) / smaller
}

/// Suppress overlapping duplicates, favouring confidence then insertion order.
///
/// Candidates are visited in order and compared with the accepted regions one
/// pair at a time. An accepted region that overlaps the candidate beyond the
/// threshold with lower confidence is removed on the spot; the first one with
/// confidence `>=` the candidate's rejects it, leaving earlier removals in
/// place. Surviving candidates are appended, so the result is in acceptance
/// order.
pub fn dedup_regions(candidates: &[TypedRect], opts: &DedupOptions) -> Vec<TypedRect> {
    let mut accepted: Vec<TypedRect> = Vec::with_capacity(candidates.len());
    let mut alive: Vec<bool> = Vec::with_capacity(candidates.len());

    'candidates: for cand in candidates {
        for (i, existing) in accepted.iter().enumerate() {
            if !alive[i] {
                continue;
            }
            if overlap_fraction(&cand.rect, &existing.rect) > opts.overlap_threshold {
                if cand.rect.confidence <= existing.rect.confidence {
                    continue 'candidates;
                }
                alive[i] = false;
            }
        }
        accepted.push(*cand);
        alive.push(true);
    }

    accepted
        .into_iter()
        .zip(alive)
        .filter_map(|(region, keep)| keep.then_some(region))
        .collect()
}
