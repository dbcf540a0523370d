/// Running state of one flood-fill grow: member indices plus strength sum.
///
/// Shared by the edge-point clusterer (indices into the point list) and the
/// ink component labeller (linear pixel indices).
pub(crate) struct PointAccumulator {
    pub indices: Vec<usize>,
    pub sum_strength: f32,
}

impl PointAccumulator {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            sum_strength: 0.0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.indices.clear();
        self.sum_strength = 0.0;
    }

    pub(crate) fn push(&mut self, idx: usize, strength: f32) {
        self.indices.push(idx);
        self.sum_strength += strength;
    }

    /// Record a member that carries no strength (e.g. a binary-mask pixel).
    pub(crate) fn push_index(&mut self, idx: usize) {
        self.indices.push(idx);
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn mean_strength(&self) -> f32 {
        if self.indices.is_empty() {
            0.0
        } else {
            self.sum_strength / self.indices.len() as f32
        }
    }
}
