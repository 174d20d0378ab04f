use serde::Serialize;

/// Axis-aligned box in canvas coordinates, `(x, y)` at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size whose center sits on `(cx, cy)`.
    pub fn centered_at(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the two boxes come closer than `margin` on both axes.
    /// Boxes exactly `margin` apart still count as overlapping.
    pub fn overlaps_with_margin(&self, other: &Rect, margin: f64) -> bool {
        !(self.right() + margin < other.x
            || other.right() + margin < self.x
            || self.bottom() + margin < other.y
            || other.bottom() + margin < self.y)
    }

    /// Inclusive containment test against `[left, right] x [top, bottom]`.
    pub fn within(&self, left: f64, top: f64, right: f64, bottom: f64) -> bool {
        self.x >= left && self.right() <= right && self.y >= top && self.bottom() <= bottom
    }
}
