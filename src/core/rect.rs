//! Axis-Aligned Rectangles
//!
//! Rectangles are stored as top-left corner plus extents, with Y growing
//! downward (screen space). Extents may be negative: collision probes are
//! built from signed per-frame displacements and are never normalised.

use serde::{Serialize, Deserialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent (may be negative for probes)
    pub width: f32,
    /// Vertical extent (may be negative for probes)
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extents.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test on the raw edges.
    ///
    /// Touching edges do not overlap. With a negative extent on `other`
    /// the test degenerates to "`self` spans the whole signed interval",
    /// which is what the collision probes rely on.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
