//! Court geometry helpers
//!
//! The court is an axis-aligned rectangle with its origin at the top-left
//! corner and y growing downward (screen space).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playable area, equal to the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of a box `extent` tall so it stays on the court
    #[inline]
    pub fn clamp_top(&self, y: f32, extent: f32) -> f32 {
        clamp_span(y, 0.0, self.height - extent)
    }

    /// Scale factors that map this court onto `other`
    pub fn scale_to(&self, other: &Court) -> Vec2 {
        Vec2::new(other.width / self.width, other.height / self.height)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball vs paddle overlap test.
///
/// The ball's horizontal extent (center ± radius) must strictly overlap the
/// rectangle, while only the ball *center* is tested vertically. A ball
/// grazing the paddle's end cap therefore misses, which keeps the hit
/// position inside [-1, 1].
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x - radius < rect.right()
        && center.x + radius > rect.x
        && center.y >= rect.y
        && center.y <= rect.bottom()
}

/// Clamp that tolerates an inverted range (a box larger than the court pins
/// to `min`) instead of panicking like `f32::clamp`.
#[inline]
pub fn clamp_span(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
