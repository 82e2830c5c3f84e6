//! Axis-aligned geometry primitives.
//!
//! Everything here is plain `f64` value types. Equality is exact per-field
//! equality; gesture change detection relies on it (an untouched drag must
//! compare equal to its starting bounds).

use serde::{Deserialize, Serialize};

/// A position in model or container coordinates, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Shorthand constructor.
pub fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height are kept positive by the resize engine's minimum-size
/// clamp, not by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    /// Containment test, inclusive on all four edges.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Overwrite all four fields in place.
    pub fn set(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn center(&self) -> Point {
        point(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
