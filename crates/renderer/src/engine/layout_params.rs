// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::Point;
use serde::Serialize;
use std::fmt::Debug;

/// Space left around the plot area for the axes and their titles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// The size of the drawing surface and where the plot sits within it.  The
/// surface uses a fixed coordinate system, frontends scale it to fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartLayout {
    /// Width of the whole surface
    pub surface_width: f64,

    /// Height of the whole surface
    pub surface_height: f64,

    pub margins: Margins,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            surface_width: 1000.0,
            surface_height: 700.0,
            margins: Margins {
                left: 100.0,
                right: 10.0,
                top: 10.0,
                bottom: 100.0,
            },
        }
    }
}

impl ChartLayout {
    /// Width of the plot area
    pub fn plot_width(&self) -> f64 {
        self.surface_width - self.margins.left - self.margins.right
    }

    /// Height of the plot area
    pub fn plot_height(&self) -> f64 {
        self.surface_height - self.margins.top - self.margins.bottom
    }

    /// The top left corner of the plot area
    pub fn plot_origin(&self) -> Point {
        Point::new(self.margins.left, self.margins.top)
    }

    /// Convert a point relative to the plot area into surface coordinates
    pub fn to_surface(&self, plot_point: Point) -> Point {
        plot_point.offset(self.margins.left, self.margins.top)
    }
}

/// A box that specifies the location and size of something (e.g. a legend
/// swatch or the tooltip)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Point,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plot_area() {
        let layout = ChartLayout::default();
        assert_eq!(layout.plot_width(), 890.0);
        assert_eq!(layout.plot_height(), 590.0);
        assert_eq!(layout.plot_origin(), Point::new(100.0, 10.0));
        assert_eq!(
            layout.to_surface(Point::new(600.0, 400.0)),
            Point::new(700.0, 410.0)
        );
    }
}
