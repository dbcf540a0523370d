//! Uniform bucket grid over sparse points for fixed-radius neighbour queries.
//!
//! Cells are `cell_size` pixels wide, so every point within `cell_size` of a
//! query lies in the query's cell or one of its 8 neighbours.

pub(crate) struct GridIndex {
    cell_size: f32,
    cols: usize,
    rows: usize,
    /// Start offsets into `entries` per cell (CSR layout, `cols * rows + 1` long).
    offsets: Vec<usize>,
    entries: Vec<usize>,
}

impl GridIndex {
    /// Bucket `points` (pixel coordinates) into cells of `cell_size`.
    pub(crate) fn build(points: impl Iterator<Item = (u32, u32)> + Clone, cell_size: f32) -> Self {
        let cell_size = cell_size.max(1.0);
        let (mut max_x, mut max_y) = (0u32, 0u32);
        let mut count = 0usize;
        for (x, y) in points.clone() {
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            count += 1;
        }
        let cols = (max_x as f32 / cell_size) as usize + 1;
        let rows = (max_y as f32 / cell_size) as usize + 1;

        let mut counts = vec![0usize; cols * rows + 1];
        let cells: Vec<usize> = points
            .map(|(x, y)| {
                let cell = Self::cell_of(cell_size, cols, x, y);
                counts[cell + 1] += 1;
                cell
            })
            .collect();
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }
        let offsets = counts.clone();
        let mut cursor = counts;
        let mut entries = vec![0usize; count];
        for (idx, &cell) in cells.iter().enumerate() {
            entries[cursor[cell]] = idx;
            cursor[cell] += 1;
        }

        Self {
            cell_size,
            cols,
            rows,
            offsets,
            entries,
        }
    }

    #[inline]
    fn cell_of(cell_size: f32, cols: usize, x: u32, y: u32) -> usize {
        let cx = (x as f32 / cell_size) as usize;
        let cy = (y as f32 / cell_size) as usize;
        cy * cols + cx
    }

    /// Call `visit` with every indexed point in the 3×3 cell block around (x, y).
    pub(crate) fn for_each_candidate(&self, x: u32, y: u32, mut visit: impl FnMut(usize)) {
        let cx = (x as f32 / self.cell_size) as usize;
        let cy = (y as f32 / self.cell_size) as usize;
        let y_lo = cy.saturating_sub(1);
        let y_hi = (cy + 1).min(self.rows - 1);
        let x_lo = cx.saturating_sub(1);
        let x_hi = (cx + 1).min(self.cols - 1);
        for gy in y_lo..=y_hi {
            for gx in x_lo..=x_hi {
                let cell = gy * self.cols + gx;
                for &idx in &self.entries[self.offsets[cell]..self.offsets[cell + 1]] {
                    visit(idx);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_cover_neighbouring_cells_only() {
        let pts = [(0u32, 0u32), (19, 19), (25, 5), (70, 70)];
        let index = GridIndex::build(pts.iter().copied(), 20.0);
        let mut seen = Vec::new();
        index.for_each_candidate(5, 5, |i| seen.push(i));
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);

        let mut far = Vec::new();
        index.for_each_candidate(70, 70, |i| far.push(i));
        assert_eq!(far, vec![3]);
    }
}
