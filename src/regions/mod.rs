//! Rectangle producers for the three detector branches plus the final
//! duplicate suppression.
//!
//! - [`border`]: bounding boxes of edge-point clusters.
//! - [`text`]: 8-connected ink components shaped like a line of print.
//! - [`smooth`]: low-variance blocks merged into photo-like areas.
//! - [`dedup`]: overlap-based suppression across all typed rectangles.
//!
//! Every branch hands back [`Rectangle`]s already clipped to the image with
//! confidence in `[0, 1]`.

pub mod border;
pub mod dedup;
pub mod smooth;
pub mod text;

use crate::types::{Rectangle, RegionKind};

pub use border::{border_rectangles, BorderOptions};
pub use dedup::{dedup_regions, overlap_fraction, DedupOptions};
pub use smooth::{are_adjacent, find_smooth_blocks, merge_adjacent, SmoothOptions};
pub use text::{find_text_blocks, TextOptions};

/// Inclusive pixel extents of a point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    /// Width in pixels, counting both end columns.
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn to_rectangle(&self, confidence: f32) -> Rectangle {
        Rectangle::new(
            self.min_x as f32,
            self.min_y as f32,
            self.width() as f32,
            self.height() as f32,
            confidence,
        )
    }
}

/// Axis-aligned extents of `points`, or `None` when there are none.
///
/// Used for edge clusters and for ink components alike.
pub fn bounds_of(points: impl IntoIterator<Item = (u32, u32)>) -> Option<PixelBounds> {
    let mut iter = points.into_iter();
    let (x0, y0) = iter.next()?;
    let mut b = PixelBounds {
        min_x: x0,
        min_y: y0,
        max_x: x0,
        max_y: y0,
    };
    for (x, y) in iter {
        b.min_x = b.min_x.min(x);
        b.min_y = b.min_y.min(y);
        b.max_x = b.max_x.max(x);
        b.max_y = b.max_y.max(y);
    }
    Some(b)
}

/// A rectangle tagged with the branch that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypedRect {
    pub kind: RegionKind,
    pub rect: Rectangle,
}

impl TypedRect {
    pub fn new(kind: RegionKind, rect: Rectangle) -> Self {
        Self { kind, rect }
    }
}

/// Tag every rectangle of one branch with `kind`.
pub fn tag(kind: RegionKind, rects: Vec<Rectangle>) -> impl Iterator<Item = TypedRect> {
    rects.into_iter().map(move |rect| TypedRect::new(kind, rect))
}
