// SPDX-License-Identifier: MIT

//!
//! Points on the drawing surface
//!

use serde::Serialize;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Add an offset to both coordinates
    pub fn offset(self, x_offset: f64, y_offset: f64) -> Self {
        Point {
            x: self.x + x_offset,
            y: self.y + y_offset,
        }
    }

    /// The squared distance between two points
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
