// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

/// Room for the 1000 x 700 chart plus the controls above it
pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 1020.0,
    height: 760.0,
};

/// Width of the year slider
pub const YEAR_SLIDER_WIDTH: f32 = 400.0;
