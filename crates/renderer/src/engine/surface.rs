// SPDX-License-Identifier: MIT

//!
//! The drawing surface the [`crate::Chart`] draws onto
//!

use crate::{BubbleOut, StaticLayer, TextOut, Tooltip};
use std::time::Duration;

/// Something the chart can draw onto.  The chart tells the surface what
/// changed (a bubble appeared, moved, or went away) rather than handing it a
/// whole new picture, so a surface can animate between states.
pub trait ChartSurface {
    /// Draw the axes, axis titles, and legend.  Called once.
    fn draw_static_layer(&mut self, layer: &StaticLayer);

    /// Add a bubble.  Called once per bubble, before its first transition.
    fn create_bubble(&mut self, bubble: &BubbleOut);

    /// Move and resize a bubble to `bubble.geometry` over `duration`.  If the
    /// bubble is already moving it continues from wherever it currently is.
    fn transition_bubble(&mut self, bubble: &BubbleOut, duration: Duration);

    /// Remove a bubble immediately
    fn remove_bubble(&mut self, key: &str);

    /// Replace the large year label
    fn set_time_label(&mut self, label: &TextOut);

    fn show_tooltip(&mut self, tooltip: &Tooltip);

    fn hide_tooltip(&mut self);
}
