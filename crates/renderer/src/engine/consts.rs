// SPDX-License-Identifier: MIT

//!
//! Chart constants
//!

use std::time::Duration;

/// How long bubbles take to move to their new position after an update
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(100);

/// The income values marked on the x axis
pub const X_AXIS_TICK_VALUES: [f64; 4] = [400.0, 4_000.0, 40_000.0, 150_000.0];

/// Roughly how many ticks the y axis gets
pub const Y_AXIS_TICK_COUNT: usize = 10;

/// Length of an axis tick mark
pub const TICK_SIZE: f64 = 6.0;

/// Gap between a tick mark and its label
pub const TICK_PADDING: f64 = 3.0;

pub const TICK_FONT_SIZE: f64 = 10.0;
pub const AXIS_TITLE_FONT_SIZE: f64 = 20.0;
pub const LEGEND_FONT_SIZE: f64 = 12.0;
pub const TIME_LABEL_FONT_SIZE: f64 = 60.0;
pub const BUBBLE_LABEL_FONT_SIZE: f64 = 10.0;

/// Legend swatch size and row spacing
pub const LEGEND_SWATCH_SIZE: f64 = 10.0;
pub const LEGEND_ROW_HEIGHT: f64 = 20.0;

pub const X_AXIS_TITLE: &str = "GDP Per Capita ($)";
pub const Y_AXIS_TITLE: &str = "Life Expectancy (Years)";
