// SPDX-License-Identifier: MIT

//!
//! Frontends that paint the chart
//!

pub mod desktop_egui;
pub mod html_canvas;
