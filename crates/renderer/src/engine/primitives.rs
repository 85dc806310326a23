// SPDX-License-Identifier: MIT

//!
//! Primitives
//!
//! Everything here is in surface coordinates (the plot margins have already
//! been added).
//!

use crate::{LineStyle, Point, PositionAndSize, colour::Colour};
use serde::Serialize;
use std::fmt::Debug;

/// Horizontal alignment of text relative to its position
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Vertical alignment of text relative to its position
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
    Hanging,
}

/// Information needed to draw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,

    /// Clockwise rotation (degrees) about `position`
    pub rotation_degrees: f64,
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,
    pub border_style: Option<LineStyle>,
}

/// Information needed to draw a straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}

/// Where a bubble is and how big it is
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleGeometry {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl BubbleGeometry {
    pub fn centre(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Linear interpolation, `t` of `0.0` gives `self` and `1.0` gives `other`
    pub fn lerp(&self, other: &BubbleGeometry, t: f64) -> BubbleGeometry {
        BubbleGeometry {
            cx: self.cx + (other.cx - self.cx) * t,
            cy: self.cy + (other.cy - self.cy) * t,
            r: self.r + (other.r - self.r) * t,
        }
    }

    /// Whether the point is inside the bubble
    pub fn contains(&self, point: Point) -> bool {
        self.centre().distance_squared(point) <= self.r * self.r
    }
}

/// Information needed to draw one country's bubble
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleOut {
    /// The country name (the bubble's identity)
    pub key: String,
    pub fill_colour: Colour,
    pub geometry: BubbleGeometry,
    pub label: Option<TextOut>,
}

/// The hover tooltip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    /// The country the tooltip describes
    pub key: String,

    /// The point the tooltip points down at (the top of the bubble)
    pub anchor: Point,

    pub lines: Vec<String>,
}

/// The parts of the chart that never change once drawn: axes, axis titles,
/// and the legend
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct StaticLayer {
    pub lines: Vec<Line>,
    pub boxes: Vec<FilledBox>,
    pub texts: Vec<TextOut>,
}
