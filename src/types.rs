use serde::{Deserialize, Serialize};

/// Axis-aligned box with a confidence score.
///
/// The common currency of the three detector branches before they are typed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub confidence: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, confidence: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            confidence,
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Union bounding box; keeps the larger confidence.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rectangle {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
            confidence: self.confidence.max(other.confidence),
        }
    }

    /// Area of the intersection with `other` (0 when disjoint).
    pub fn intersection_area(&self, other: &Rectangle) -> f32 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }

    /// Clip to `[0, width] x [0, height]` and clamp confidence to `[0, 1]`.
    pub fn clamped(&self, width: usize, height: usize) -> Rectangle {
        let (img_w, img_h) = (width as f32, height as f32);
        let x0 = self.x.clamp(0.0, img_w);
        let y0 = self.y.clamp(0.0, img_h);
        let x1 = self.right().clamp(0.0, img_w);
        let y1 = self.bottom().clamp(0.0, img_h);
        Rectangle {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
            confidence: self.confidence.clamp(0.0, 1.0),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Geometry part of a [`Region`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Semantic label attached to a detected region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Border,
    Text,
    Photo,
}

impl RegionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Border => "border",
            RegionKind::Text => "text",
            RegionKind::Photo => "photo",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A typed, scored, axis-aligned card element returned by the detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RegionKind,
    pub bounds: Bounds,
    pub confidence: f32,
    /// Editor-layer associations; left empty by the detector.
    pub layer_ids: Vec<String>,
}

/// Name used by downstream editors and exporters.
pub type DetectedRegion = Region;

impl Region {
    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
            self.confidence,
        )
    }
}
