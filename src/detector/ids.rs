//! Identifier assignment for output regions.
use crate::types::{Bounds, RegionKind};

/// Supplies ids for regions in output order.
pub trait RegionIdSource {
    fn next_id(&mut self, kind: RegionKind, bounds: &Bounds) -> String;
}

/// Monotonic counter producing `"{kind}-{n}"`, e.g. `border-0`, `photo-1`.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl RegionIdSource for SequentialIds {
    fn next_id(&mut self, kind: RegionKind, _bounds: &Bounds) -> String {
        let id = format!("{kind}-{}", self.next);
        self.next += 1;
        id
    }
}
